use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, warn};

use super::affinity::AffinityIndex;
use super::types::{Assignment, Member, Team};
use crate::error::{AllocationError, Result};

/// Seats `members` into teams sized by `capacities`, spreading members that
/// share an affinity group across different teams.
///
/// Members are shuffled with `rng`, then placed one at a time. For each
/// member the search starts at the team after the last one that received a
/// member and walks the teams round-robin. Round `n` accepts the first open
/// team holding at most `n` members who share a group with the candidate,
/// so the tolerance widens only when every open team already has that many.
///
/// Output is fully determined by the shuffle: a seeded `rng` reproduces the
/// same assignment.
pub fn allocate<R: Rng + ?Sized>(
    members: &[Member],
    capacities: &[usize],
    index: &AffinityIndex,
    rng: &mut R,
) -> Result<Assignment> {
    validate_inputs(members, capacities, index)?;

    let mut order = members.to_vec();
    shuffle(&mut order, rng);

    let team_count = capacities.len();
    let mut teams: Assignment = capacities.iter().map(|&c| Vec::with_capacity(c)).collect();
    let mut remaining = capacities.to_vec();
    let mut last_placed: Option<usize> = None;
    let mut fallbacks = 0usize;

    for member in order {
        let start = search_start(last_placed, &remaining);

        let placed = (0..members.len()).find_map(|round| {
            (0..team_count)
                .map(|offset| (start + offset) % team_count)
                .filter(|&team| remaining[team] > 0)
                .find(|&team| shared_group_count(index, &member, &teams[team]) <= round)
        });

        let team = match placed {
            Some(team) => team,
            None => {
                let team = remaining.iter().position(|&left| left > 0).ok_or_else(|| {
                    AllocationError::validation(format!("no open seat left for '{member}'"))
                })?;
                warn!(member = %member, team, "no round accepted member, using first open team");
                fallbacks += 1;
                team
            }
        };

        teams[team].push(member);
        remaining[team] -= 1;
        last_placed = Some(team);
    }

    debug!(
        members = members.len(),
        teams = team_count,
        fallbacks,
        "allocation finished"
    );

    Ok(teams)
}

/// Fisher-Yates shuffle, swapping from the last index downward
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Team after the last placement, skipping full teams for at most one lap
fn search_start(last_placed: Option<usize>, remaining: &[usize]) -> usize {
    let team_count = remaining.len();
    let mut start = last_placed.map_or(0, |team| (team + 1) % team_count);

    let mut attempts = 0;
    while remaining[start] == 0 && attempts < team_count {
        start = (start + 1) % team_count;
        attempts += 1;
    }
    start
}

/// Occupants of `team` sharing at least one group with `member`
fn shared_group_count(index: &AffinityIndex, member: &str, team: &Team) -> usize {
    team.iter()
        .filter(|occupant| index.share_group(member, occupant))
        .count()
}

fn validate_inputs(members: &[Member], capacities: &[usize], index: &AffinityIndex) -> Result<()> {
    if let Some(team) = capacities.iter().position(|&c| c == 0) {
        return Err(AllocationError::configuration(format!(
            "team {} has zero capacity",
            team + 1
        )));
    }

    let seats: usize = capacities.iter().sum();
    if seats != members.len() {
        return Err(AllocationError::validation(format!(
            "capacity plan has {} seats for {} members",
            seats,
            members.len()
        )));
    }

    let mut seen = HashSet::with_capacity(members.len());
    for member in members {
        if member.is_empty() {
            return Err(AllocationError::validation("member names must not be empty"));
        }
        if !seen.insert(member.as_str()) {
            return Err(AllocationError::validation(format!(
                "duplicate member '{member}'"
            )));
        }
    }

    if let Some(unknown) = index.members().find(|m| !seen.contains(m)) {
        return Err(AllocationError::validation(format!(
            "affinity group member '{unknown}' is not in the roster"
        )));
    }

    Ok(())
}
