//! Day 9: Rope Bridge

use std::collections::HashSet;

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;

use crate::util;

fn parse_motions(input: &str) -> Result<Vec<((i32, i32), u32)>, SolveError> {
    input
        .lines()
        .map(|line| {
            let (direction, count) = line
                .split_once(' ')
                .ok_or_else(|| SolveError::InvalidInput(format!("malformed motion '{line}'")))?;
            let delta = match direction {
                "U" => (-1, 0),
                "D" => (1, 0),
                "L" => (0, -1),
                "R" => (0, 1),
                _ => {
                    return Err(SolveError::InvalidInput(format!(
                        "unknown direction '{direction}'"
                    )));
                }
            };
            Ok((delta, util::parse_num(count)?))
        })
        .collect()
}

/// Positions the last knot visits while the head walks the motions.
pub fn tail_visits(input: &str, knots: usize) -> Result<usize, SolveError> {
    if knots < 2 {
        return Err(SolveError::InvalidInput(
            "rope needs at least two knots".to_string(),
        ));
    }
    let motions = parse_motions(input)?;
    let mut rope = vec![(0i32, 0i32); knots];
    let mut visited = HashSet::from([(0, 0)]);
    for ((dr, dc), count) in motions {
        for _ in 0..count {
            rope[0].0 += dr;
            rope[0].1 += dc;
            for index in 1..rope.len() {
                let (lead_r, lead_c) = rope[index - 1];
                let knot = &mut rope[index];
                let (gap_r, gap_c) = (lead_r - knot.0, lead_c - knot.1);
                if gap_r.abs().max(gap_c.abs()) < 2 {
                    break;
                }
                knot.0 += gap_r.signum();
                knot.1 += gap_c.signum();
            }
            visited.insert(rope[knots - 1]);
        }
    }
    Ok(visited.len())
}

#[derive(RegisterSolution)]
#[solution(day = 9, part = 1)]
#[input(path = "inputs/day09.txt")]
#[input(path = "inputs/day09_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(tail_visits(input, 2)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 9, part = 2)]
#[input(path = "inputs/day09.txt")]
#[input(path = "inputs/day09_example.txt", kind = example, embedded)]
#[input(path = "inputs/day09_example_large.txt", kind = example, name = "large", embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(tail_visits(input, 10)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("inputs/day09_example.txt");
    const EXAMPLE_LARGE: &str = include_str!("inputs/day09_example_large.txt");

    #[test]
    fn test_part1_example() {
        assert_eq!(tail_visits(EXAMPLE, 2).unwrap(), 13);
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(tail_visits(EXAMPLE, 10).unwrap(), 1);
    }

    #[test]
    fn test_part2_large_example() {
        assert_eq!(tail_visits(EXAMPLE_LARGE, 10).unwrap(), 36);
    }

    #[test]
    fn test_stationary_head() {
        assert_eq!(tail_visits("", 2).unwrap(), 1);
    }

    #[test]
    fn test_diagonal_pull() {
        // head ends two up, one right; tail takes a single diagonal step
        assert_eq!(tail_visits("R 1\nU 2\n", 2).unwrap(), 2);
    }

    #[test]
    fn test_too_few_knots() {
        assert!(matches!(
            tail_visits("R 1\n", 1),
            Err(SolveError::InvalidInput(_))
        ));
    }
}
