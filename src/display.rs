use std::path::Path;

use crate::allocation::{conflict_seats, AffinityGroups, AffinityIndex, ConflictReport, Team};
use crate::error::AppError;

/// Formats a 0-based team index the way people count teams
pub fn team_label(team_idx: usize) -> String {
    format!("Team {}", team_idx + 1)
}

/// Prints the seating, the conflict total and where each group landed
pub fn print_assignment(teams: &[Team], report: &ConflictReport) {
    println!("{}", "=".repeat(50));
    println!("Seat allocation");
    println!("{}", "=".repeat(50));

    for (team_idx, team) in teams.iter().enumerate() {
        println!("\n{} ({} members):", team_label(team_idx), team.len());
        for (seat, member) in team.iter().enumerate() {
            println!("  {}. {}", seat + 1, member);
        }
    }

    let total: usize = teams.iter().map(Vec::len).sum();
    println!("\n{} teams, {} members", teams.len(), total);

    if report.per_group_distribution.is_empty() {
        println!("{}", "=".repeat(50));
        return;
    }

    if report.conflict_count == 0 {
        println!("Every affinity group is fully spread out");
    } else {
        println!("Affinity conflicts: {}", report.conflict_count);
    }

    println!("\nGroup placement:");
    for (group, counts) in &report.per_group_distribution {
        let placements: Vec<String> = counts
            .iter()
            .map(|(&team_idx, &count)| {
                if count > 1 {
                    format!("{} ({})", team_label(team_idx), count)
                } else {
                    team_label(team_idx)
                }
            })
            .collect();
        println!("  {}: {}", group, placements.join(", "));
    }
    println!("{}", "=".repeat(50));
}

/// Writes one CSV row per seat: `team,seat,member,conflict`
pub fn write_assignment_to_file<P: AsRef<Path>>(
    teams: &[Team],
    groups: &AffinityGroups,
    path: P,
) -> Result<(), AppError> {
    let index = AffinityIndex::build(groups);
    let flags = conflict_seats(&index, teams);

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["team", "seat", "member", "conflict"])?;

    for (team_idx, (team, team_flags)) in teams.iter().zip(&flags).enumerate() {
        for (seat, (member, conflict)) in team.iter().zip(team_flags).enumerate() {
            writer.write_record([
                (team_idx + 1).to_string(),
                (seat + 1).to_string(),
                member.clone(),
                conflict.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
