//! Manual seat edits on a finished assignment.
//!
//! Every edit checks indices and capacities up front and leaves the
//! assignment untouched when it fails. The returned flag tells whether the
//! assignment changed.

use super::types::Assignment;
use crate::error::{AllocationError, Result};

/// Moves the member at `from_index` of `from_team` to the end of `to_team`
pub fn move_member(
    assignment: &mut Assignment,
    capacities: &[usize],
    from_team: usize,
    from_index: usize,
    to_team: usize,
) -> Result<bool> {
    check_plan(assignment, capacities)?;
    check_seat(assignment, from_team, from_index)?;
    check_team(assignment, to_team)?;

    if from_team == to_team {
        return Ok(false);
    }
    if assignment[to_team].len() >= capacities[to_team] {
        return Err(AllocationError::validation(format!(
            "team {} has no empty seat",
            to_team + 1
        )));
    }

    let member = assignment[from_team].remove(from_index);
    assignment[to_team].push(member);
    Ok(true)
}

/// Exchanges the occupants of two seats
pub fn swap_members(
    assignment: &mut Assignment,
    first: (usize, usize),
    second: (usize, usize),
) -> Result<bool> {
    check_seat(assignment, first.0, first.1)?;
    check_seat(assignment, second.0, second.1)?;

    if first == second {
        return Ok(false);
    }

    if first.0 == second.0 {
        assignment[first.0].swap(first.1, second.1);
    } else {
        let moved = std::mem::take(&mut assignment[first.0][first.1]);
        let displaced = std::mem::replace(&mut assignment[second.0][second.1], moved);
        assignment[first.0][first.1] = displaced;
    }
    Ok(true)
}

/// Exchanges the whole membership of two teams
pub fn swap_teams(
    assignment: &mut Assignment,
    capacities: &[usize],
    first: usize,
    second: usize,
) -> Result<bool> {
    check_plan(assignment, capacities)?;
    check_team(assignment, first)?;
    check_team(assignment, second)?;

    if first == second {
        return Ok(false);
    }
    if assignment[first].len() > capacities[second] || assignment[second].len() > capacities[first] {
        return Err(AllocationError::validation(format!(
            "teams {} and {} cannot hold each other's members",
            first + 1,
            second + 1
        )));
    }

    assignment.swap(first, second);
    Ok(true)
}

fn check_plan(assignment: &Assignment, capacities: &[usize]) -> Result<()> {
    if assignment.len() != capacities.len() {
        return Err(AllocationError::validation(format!(
            "assignment has {} teams but the plan has {}",
            assignment.len(),
            capacities.len()
        )));
    }
    Ok(())
}

fn check_team(assignment: &Assignment, team: usize) -> Result<()> {
    if team >= assignment.len() {
        return Err(AllocationError::validation(format!(
            "team {} does not exist",
            team + 1
        )));
    }
    Ok(())
}

fn check_seat(assignment: &Assignment, team: usize, seat: usize) -> Result<()> {
    check_team(assignment, team)?;
    if seat >= assignment[team].len() {
        return Err(AllocationError::validation(format!(
            "team {} has no seat {}",
            team + 1,
            seat + 1
        )));
    }
    Ok(())
}
