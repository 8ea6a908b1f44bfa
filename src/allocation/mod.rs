pub mod types;
pub mod capacity;
pub mod affinity;
pub mod allocator;
pub mod conflicts;
pub mod seating;

use rand::Rng;
use serde::Serialize;

use crate::error::Result;

pub use affinity::AffinityIndex;
pub use allocator::allocate;
pub use capacity::{plan_team_sizes, DEFAULT_MAX_PER_TEAM};
pub use conflicts::{conflict_seats, is_conflict_seat, score, ConflictReport};
pub use types::{AffinityGroups, Assignment, Member, Team};

/// Everything one allocation request produces
#[derive(Debug, Clone, Serialize)]
pub struct AllocationOutcome {
    pub capacities: Vec<usize>,
    pub teams: Assignment,
    pub report: ConflictReport,
}

/// Plans team sizes for the roster, seats everyone and scores the result
pub fn allocate_roster<R: Rng + ?Sized>(
    members: &[Member],
    groups: &AffinityGroups,
    max_per_team: usize,
    rng: &mut R,
) -> Result<AllocationOutcome> {
    let capacities = plan_team_sizes(members.len(), max_per_team)?;
    let index = AffinityIndex::build(groups);
    let teams = allocate(members, &capacities, &index, rng)?;
    let report = score(groups, &teams);

    Ok(AllocationOutcome {
        capacities,
        teams,
        report,
    })
}
