//! Day 14: Regolith Reservoir
//!
//! Part 2 has a `flood` variant that replaces the grain-by-grain drop with
//! a flood fill over every cell sand can reach; the counts agree.

use std::collections::{HashSet, VecDeque};

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;

use crate::util;

/// Sand pours in at (row 0, column 500).
const SOURCE: (i64, i64) = (0, 500);

fn parse_point(text: &str) -> Result<(i64, i64), SolveError> {
    let (col, row) = text
        .split_once(',')
        .ok_or_else(|| SolveError::InvalidInput(format!("malformed point '{text}'")))?;
    // stored as (row, col)
    Ok((util::parse_num(row)?, util::parse_num(col)?))
}

fn parse_rocks(input: &str) -> Result<HashSet<(i64, i64)>, SolveError> {
    let mut rocks = HashSet::new();
    for line in input.lines() {
        let corners: Vec<(i64, i64)> = line
            .split(" -> ")
            .map(parse_point)
            .collect::<Result<_, _>>()?;
        if corners.len() < 2 {
            return Err(SolveError::InvalidInput(format!(
                "rock path needs at least two points: '{line}'"
            )));
        }
        for pair in corners.windows(2) {
            let ((r1, c1), (r2, c2)) = (pair[0], pair[1]);
            if r1 != r2 && c1 != c2 {
                return Err(SolveError::InvalidInput(format!(
                    "diagonal rock segment in '{line}'"
                )));
            }
            for row in r1.min(r2)..=r1.max(r2) {
                for col in c1.min(c2)..=c1.max(c2) {
                    rocks.insert((row, col));
                }
            }
        }
    }
    Ok(rocks)
}

fn lowest_rock(rocks: &HashSet<(i64, i64)>) -> Result<i64, SolveError> {
    rocks
        .iter()
        .map(|&(row, _)| row)
        .max()
        .ok_or_else(|| SolveError::InvalidInput("no rock in scan".to_string()))
}

fn blocked(occupied: &HashSet<(i64, i64)>, floor: Option<i64>, cell: (i64, i64)) -> bool {
    floor.is_some_and(|floor| cell.0 >= floor) || occupied.contains(&cell)
}

/// Where one grain comes to rest, or `None` once it falls past every rock.
fn drop_grain(
    occupied: &HashSet<(i64, i64)>,
    lowest: i64,
    floor: Option<i64>,
) -> Option<(i64, i64)> {
    let (mut row, mut col) = SOURCE;
    loop {
        if floor.is_none() && row > lowest {
            return None;
        }
        let next = [(row + 1, col), (row + 1, col - 1), (row + 1, col + 1)]
            .into_iter()
            .find(|&cell| !blocked(occupied, floor, cell));
        match next {
            Some((r, c)) => {
                row = r;
                col = c;
            }
            None => return Some((row, col)),
        }
    }
}

/// Grains that come to rest before sand starts flowing into the abyss.
pub fn resting_sand(input: &str) -> Result<usize, SolveError> {
    let mut occupied = parse_rocks(input)?;
    let lowest = lowest_rock(&occupied)?;
    let mut count = 0;
    while let Some(cell) = drop_grain(&occupied, lowest, None) {
        occupied.insert(cell);
        count += 1;
    }
    Ok(count)
}

/// Grains that come to rest on the floor model before the source clogs.
pub fn resting_sand_with_floor(input: &str) -> Result<usize, SolveError> {
    let mut occupied = parse_rocks(input)?;
    let lowest = lowest_rock(&occupied)?;
    let floor = lowest + 2;
    let mut count = 0;
    while !occupied.contains(&SOURCE) {
        match drop_grain(&occupied, lowest, Some(floor)) {
            Some(cell) => {
                occupied.insert(cell);
                count += 1;
            }
            None => {
                return Err(SolveError::NoSolution(
                    "sand escaped past the floor".to_string(),
                ));
            }
        }
    }
    Ok(count)
}

/// Floor-model count via flood fill: every cell reachable from the source
/// through the three fall directions holds exactly one resting grain.
pub fn resting_sand_flood(input: &str) -> Result<usize, SolveError> {
    let rocks = parse_rocks(input)?;
    let lowest = lowest_rock(&rocks)?;
    let floor = lowest + 2;

    // sand spreads at most one column per row, so this window covers it
    let min_col = SOURCE.1 - floor;
    let width = (2 * floor + 1) as usize;
    let index = |row: i64, col: i64| -> Option<usize> {
        (row >= 0 && row < floor && col >= min_col && col < min_col + width as i64)
            .then_some((row * width as i64 + (col - min_col)) as usize)
    };

    let mut filled = vec![false; floor as usize * width];
    for &(row, col) in &rocks {
        if let Some(i) = index(row, col) {
            filled[i] = true;
        }
    }

    let Some(source_index) = index(SOURCE.0, SOURCE.1) else {
        return Err(SolveError::InvalidInput("scan has no room for sand".to_string()));
    };
    if filled[source_index] {
        return Ok(0);
    }

    let mut count = 0;
    let mut queue = VecDeque::from([SOURCE]);
    filled[source_index] = true;
    count += 1;
    while let Some((row, col)) = queue.pop_front() {
        for cell in [(row + 1, col - 1), (row + 1, col), (row + 1, col + 1)] {
            let Some(i) = index(cell.0, cell.1) else {
                continue;
            };
            if !filled[i] {
                filled[i] = true;
                count += 1;
                queue.push_back(cell);
            }
        }
    }
    Ok(count)
}

#[derive(RegisterSolution)]
#[solution(day = 14, part = 1)]
#[input(path = "inputs/day14.txt")]
#[input(path = "inputs/day14_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(resting_sand(input)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 14, part = 2)]
#[input(path = "inputs/day14.txt")]
#[input(path = "inputs/day14_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(resting_sand_with_floor(input)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 14, part = 2, variant = "flood")]
#[input(path = "inputs/day14.txt")]
#[input(path = "inputs/day14_example.txt", kind = example, embedded)]
pub struct Part2Flood;

impl Solution for Part2Flood {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(resting_sand_flood(input)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("inputs/day14_example.txt");

    #[test]
    fn test_part1_example() {
        assert_eq!(resting_sand(EXAMPLE).unwrap(), 24);
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(resting_sand_with_floor(EXAMPLE).unwrap(), 93);
    }

    #[test]
    fn test_flood_variant_matches_example() {
        assert_eq!(resting_sand_flood(EXAMPLE).unwrap(), 93);
    }

    #[test]
    fn test_flood_matches_drop_on_other_caves() {
        for cave in [
            "499,2 -> 501,2\n",
            "490,3 -> 510,3\n",
            "494,6 -> 506,6\n500,2 -> 500,4\n",
        ] {
            assert_eq!(
                resting_sand_flood(cave).unwrap(),
                resting_sand_with_floor(cave).unwrap(),
                "cave: {cave}"
            );
        }
    }

    #[test]
    fn test_plugged_source_rests_no_sand() {
        let cave = "499,0 -> 501,0\n";
        assert_eq!(resting_sand_with_floor(cave).unwrap(), 0);
        assert_eq!(resting_sand_flood(cave).unwrap(), 0);
    }

    #[test]
    fn test_single_rock_under_source() {
        // grains pile on the rock then spill to the floor either side
        let cave = "500,2 -> 500,2\n";
        assert_eq!(
            resting_sand_flood(cave).unwrap(),
            resting_sand_with_floor(cave).unwrap()
        );
    }

    #[test]
    fn test_diagonal_segment_is_rejected() {
        assert!(matches!(
            parse_rocks("498,4 -> 499,5\n"),
            Err(SolveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_scan() {
        assert!(matches!(resting_sand(""), Err(SolveError::InvalidInput(_))));
    }
}
