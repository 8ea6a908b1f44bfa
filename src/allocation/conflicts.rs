use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use super::affinity::AffinityIndex;
use super::types::{AffinityGroups, Team};

/// How badly an assignment concentrates affinity groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    /// Sum over groups and teams of `count - 1` wherever a team holds more
    /// than one member of the same group
    pub conflict_count: usize,
    /// Group name -> team index -> members of that group seated there
    pub per_group_distribution: BTreeMap<String, BTreeMap<usize, usize>>,
}

impl ConflictReport {
    /// Per-group counts as one entry per team, zeros included
    pub fn dense_distributions(&self, team_count: usize) -> BTreeMap<String, Vec<usize>> {
        self.per_group_distribution
            .iter()
            .map(|(group, counts)| {
                let mut dense = vec![0; team_count];
                for (&team, &count) in counts {
                    if let Some(slot) = dense.get_mut(team) {
                        *slot = count;
                    }
                }
                (group.clone(), dense)
            })
            .collect()
    }
}

/// Counts conflicts and records where each group's members were seated.
///
/// A member listed twice in the same group counts once; members that are not
/// seated anywhere are ignored.
pub fn score(groups: &AffinityGroups, assignment: &[Team]) -> ConflictReport {
    let mut team_of: HashMap<&str, usize> = HashMap::new();
    for (team_idx, team) in assignment.iter().enumerate() {
        for member in team {
            team_of.entry(member.as_str()).or_insert(team_idx);
        }
    }

    let mut report = ConflictReport::default();
    for (group_name, members) in groups {
        let mut seen = HashSet::new();
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();

        for member in members {
            if !seen.insert(member.as_str()) {
                continue;
            }
            if let Some(&team_idx) = team_of.get(member.as_str()) {
                *counts.entry(team_idx).or_insert(0) += 1;
            }
        }

        report.conflict_count += counts
            .values()
            .filter(|&&count| count > 1)
            .map(|count| count - 1)
            .sum::<usize>();
        report.per_group_distribution.insert(group_name.clone(), counts);
    }

    report
}

/// True when another occupant of `team` shares a group with `member`
pub fn is_conflict_seat(index: &AffinityIndex, member: &str, team: &[String]) -> bool {
    team.iter()
        .any(|other| other != member && index.share_group(member, other))
}

/// Highlight flags for every seat, shaped like the assignment
pub fn conflict_seats(index: &AffinityIndex, assignment: &[Team]) -> Vec<Vec<bool>> {
    assignment
        .iter()
        .map(|team| {
            team.iter()
                .map(|member| is_conflict_seat(index, member, team))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(members: &[&str]) -> Team {
        members.iter().map(|m| m.to_string()).collect()
    }

    fn one_group(name: &str, members: &[&str]) -> AffinityGroups {
        let mut groups = AffinityGroups::new();
        groups.insert(name.to_string(), team(members));
        groups
    }

    #[test]
    fn test_each_extra_groupmate_adds_one_conflict() {
        let groups = one_group("g", &["A", "B", "C"]);

        let spread = vec![team(&["A", "X"]), team(&["B"]), team(&["C"])];
        assert_eq!(score(&groups, &spread).conflict_count, 0);

        let pair = vec![team(&["A", "B", "X"]), team(&["C"])];
        assert_eq!(score(&groups, &pair).conflict_count, 1);

        let trio = vec![team(&["A", "B", "C", "X"]), team(&[])];
        assert_eq!(score(&groups, &trio).conflict_count, 2);
    }

    #[test]
    fn test_conflicts_sum_across_groups_and_teams() {
        let mut groups = one_group("g1", &["A", "B", "C", "D"]);
        groups.insert("g2".into(), team(&["E", "F"]));

        let teams = vec![team(&["A", "B", "E", "F"]), team(&["C", "D"])];
        let report = score(&groups, &teams);
        assert_eq!(report.conflict_count, 3);

        let g1 = &report.per_group_distribution["g1"];
        assert_eq!(g1.get(&0), Some(&2));
        assert_eq!(g1.get(&1), Some(&2));
        assert_eq!(report.per_group_distribution["g2"].get(&1), None);
    }

    #[test]
    fn test_empty_groups() {
        let teams = vec![team(&["A", "B"])];
        let report = score(&AffinityGroups::new(), &teams);
        assert_eq!(report.conflict_count, 0);
        assert!(report.per_group_distribution.is_empty());
    }

    #[test]
    fn test_repeated_and_unseated_members() {
        let groups = one_group("g", &["A", "A", "B", "Z"]);
        let teams = vec![team(&["A", "B"])];
        let report = score(&groups, &teams);
        assert_eq!(report.conflict_count, 1);
        assert_eq!(report.per_group_distribution["g"].get(&0), Some(&2));
    }

    #[test]
    fn test_dense_distributions() {
        let groups = one_group("g", &["A", "C"]);
        let teams = vec![team(&["A"]), team(&["B"]), team(&["C"])];
        let dense = score(&groups, &teams).dense_distributions(teams.len());
        assert_eq!(dense["g"], vec![1, 0, 1]);
    }

    #[test]
    fn test_conflict_seats() {
        let groups = one_group("g", &["A", "B"]);
        let index = AffinityIndex::build(&groups);
        let teams = vec![team(&["A", "B", "X"]), team(&["C"])];

        assert!(is_conflict_seat(&index, "A", &teams[0]));
        assert!(!is_conflict_seat(&index, "X", &teams[0]));
        assert!(!is_conflict_seat(&index, "A", &teams[1]));
        assert_eq!(
            conflict_seats(&index, &teams),
            vec![vec![true, true, false], vec![false]]
        );
    }
}
