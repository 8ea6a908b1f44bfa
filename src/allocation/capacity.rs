use crate::error::{AllocationError, Result};

/// Largest team the planner produces unless told otherwise
pub const DEFAULT_MAX_PER_TEAM: usize = 6;

/// Splits `total` members into the fewest teams whose average size does not
/// exceed `max_per_team`. Sizes differ by at most one and the larger teams
/// come first, so `plan_team_sizes(23, 6)` is `[6, 6, 6, 5]`.
pub fn plan_team_sizes(total: usize, max_per_team: usize) -> Result<Vec<usize>> {
    if max_per_team == 0 {
        return Err(AllocationError::configuration(
            "max_per_team must be at least 1",
        ));
    }

    if total == 0 {
        return Ok(Vec::new());
    }

    if total <= max_per_team {
        return Ok(vec![total]);
    }

    // Smallest n with total / n <= max_per_team
    let num_teams = total.div_ceil(max_per_team);

    let floor_size = total / num_teams;
    let num_ceil_teams = total % num_teams;
    if num_ceil_teams == 0 {
        return Ok(vec![floor_size; num_teams]);
    }

    let mut sizes = vec![floor_size + 1; num_ceil_teams];
    sizes.extend(std::iter::repeat(floor_size).take(num_teams - num_ceil_teams));
    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_has_no_teams() {
        assert_eq!(plan_team_sizes(0, 6).unwrap(), Vec::<usize>::new());
        assert_eq!(plan_team_sizes(0, 1).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_small_roster_is_one_team() {
        assert_eq!(plan_team_sizes(5, 6).unwrap(), vec![5]);
        assert_eq!(plan_team_sizes(6, 6).unwrap(), vec![6]);
        assert_eq!(plan_team_sizes(1, 6).unwrap(), vec![1]);
    }

    #[test]
    fn test_uneven_split_puts_larger_teams_first() {
        assert_eq!(plan_team_sizes(23, 6).unwrap(), vec![6, 6, 6, 5]);
        assert_eq!(plan_team_sizes(7, 6).unwrap(), vec![4, 3]);
        assert_eq!(plan_team_sizes(13, 6).unwrap(), vec![5, 4, 4]);
    }

    #[test]
    fn test_even_split() {
        assert_eq!(plan_team_sizes(12, 6).unwrap(), vec![6, 6]);
        assert_eq!(plan_team_sizes(24, 6).unwrap(), vec![6, 6, 6, 6]);
        assert_eq!(plan_team_sizes(9, 3).unwrap(), vec![3, 3, 3]);
    }

    #[test]
    fn test_sizes_sum_to_total_and_respect_cap() {
        for max_per_team in 1..=10 {
            for total in 0..=120 {
                let sizes = plan_team_sizes(total, max_per_team).unwrap();
                assert_eq!(sizes.iter().sum::<usize>(), total, "total={total} max={max_per_team}");
                assert!(
                    sizes.iter().all(|&s| s >= 1 && s <= max_per_team),
                    "total={total} max={max_per_team} sizes={sizes:?}"
                );
                if let (Some(first), Some(last)) = (sizes.first(), sizes.last()) {
                    assert!(first - last <= 1);
                }
            }
        }
    }

    #[test]
    fn test_zero_cap_is_rejected() {
        let err = plan_team_sizes(10, 0).unwrap_err();
        assert!(matches!(err, AllocationError::Configuration(_)));
    }
}
