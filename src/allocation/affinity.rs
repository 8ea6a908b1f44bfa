use std::collections::{BTreeMap, BTreeSet};

use super::types::AffinityGroups;

static NO_GROUPS: BTreeSet<String> = BTreeSet::new();

/// Read-only lookup from member to the affinity groups containing them
#[derive(Debug, Clone, Default)]
pub struct AffinityIndex {
    memberships: BTreeMap<String, BTreeSet<String>>,
}

impl AffinityIndex {
    /// Builds the index in one pass over every group membership
    pub fn build(groups: &AffinityGroups) -> Self {
        let mut memberships: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (group_name, members) in groups {
            for member in members {
                memberships
                    .entry(member.clone())
                    .or_default()
                    .insert(group_name.clone());
            }
        }
        Self { memberships }
    }

    /// Names of the groups `member` belongs to; empty when it belongs to none
    pub fn groups_of(&self, member: &str) -> &BTreeSet<String> {
        self.memberships.get(member).unwrap_or(&NO_GROUPS)
    }

    /// True when `a` and `b` have at least one group in common
    pub fn share_group(&self, a: &str, b: &str) -> bool {
        match (self.memberships.get(a), self.memberships.get(b)) {
            (Some(groups_a), Some(groups_b)) => !groups_a.is_disjoint(groups_b),
            _ => false,
        }
    }

    /// Every member referenced by at least one group
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.memberships.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(entries: &[(&str, &[&str])]) -> AffinityGroups {
        entries
            .iter()
            .map(|(name, members)| {
                (name.to_string(), members.iter().map(|m| m.to_string()).collect())
            })
            .collect()
    }

    #[test]
    fn test_groups_of_collects_every_membership() {
        let index = AffinityIndex::build(&groups(&[
            ("chess", &["ana", "ben"]),
            ("band", &["ben", "cleo"]),
        ]));

        let ben: Vec<&str> = index.groups_of("ben").iter().map(String::as_str).collect();
        assert_eq!(ben, vec!["band", "chess"]);
        assert_eq!(index.groups_of("ana").len(), 1);
        assert!(index.groups_of("dan").is_empty());
    }

    #[test]
    fn test_share_group() {
        let index = AffinityIndex::build(&groups(&[
            ("chess", &["ana", "ben"]),
            ("band", &["ben", "cleo"]),
        ]));

        assert!(index.share_group("ana", "ben"));
        assert!(index.share_group("cleo", "ben"));
        assert!(!index.share_group("ana", "cleo"));
        assert!(!index.share_group("ana", "dan"));
        assert!(!index.share_group("dan", "eve"));
    }

    #[test]
    fn test_empty_index() {
        let index = AffinityIndex::build(&AffinityGroups::new());
        assert_eq!(index.members().count(), 0);
        assert!(!index.share_group("ana", "ben"));
    }

    #[test]
    fn test_members_lists_each_member_once() {
        let index = AffinityIndex::build(&groups(&[
            ("chess", &["ana", "ben"]),
            ("band", &["ben", "cleo"]),
            ("empty", &[]),
        ]));
        let members: Vec<&str> = index.members().collect();
        assert_eq!(members, vec!["ana", "ben", "cleo"]);
    }
}
