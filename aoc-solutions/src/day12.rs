//! Day 12: Hill Climbing Algorithm

use std::collections::VecDeque;

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;

const UNREACHED: u32 = u32::MAX;

struct HeightMap {
    elevations: Vec<u8>,
    rows: usize,
    cols: usize,
    start: usize,
    end: usize,
}

fn parse_map(input: &str) -> Result<HeightMap, SolveError> {
    let mut elevations = Vec::new();
    let mut rows = 0;
    let mut cols = 0;
    let mut start = None;
    let mut end = None;

    for line in input.lines() {
        if rows == 0 {
            cols = line.len();
        } else if line.len() != cols {
            return Err(SolveError::InvalidInput("ragged height map".to_string()));
        }
        for (col, byte) in line.bytes().enumerate() {
            let elevation = match byte {
                b'S' => {
                    if start.replace(rows * cols + col).is_some() {
                        return Err(SolveError::InvalidInput(
                            "multiple start markers".to_string(),
                        ));
                    }
                    0
                }
                b'E' => {
                    if end.replace(rows * cols + col).is_some() {
                        return Err(SolveError::InvalidInput("multiple end markers".to_string()));
                    }
                    25
                }
                b'a'..=b'z' => byte - b'a',
                _ => {
                    return Err(SolveError::InvalidInput(format!(
                        "invalid elevation '{}'",
                        byte as char
                    )));
                }
            };
            elevations.push(elevation);
        }
        rows += 1;
    }

    let start =
        start.ok_or_else(|| SolveError::InvalidInput("no start marker".to_string()))?;
    let end = end.ok_or_else(|| SolveError::InvalidInput("no end marker".to_string()))?;
    Ok(HeightMap {
        elevations,
        rows,
        cols,
        start,
        end,
    })
}

fn neighbors(map: &HeightMap, index: usize) -> impl Iterator<Item = usize> + '_ {
    let row = index / map.cols;
    let col = index % map.cols;
    [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)]
        .into_iter()
        .filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < map.rows && c < map.cols).then_some(r * map.cols + c)
        })
}

/// Walking distance from the end to every cell, stepping only where the
/// forward climb rule allows (at most one unit up per step).
fn distances_from_end(map: &HeightMap) -> Vec<u32> {
    let mut distances = vec![UNREACHED; map.elevations.len()];
    distances[map.end] = 0;
    let mut queue = VecDeque::from([map.end]);
    while let Some(current) = queue.pop_front() {
        for neighbor in neighbors(map, current) {
            if distances[neighbor] != UNREACHED {
                continue;
            }
            // walking neighbor -> current climbs by at most one
            if map.elevations[current].saturating_sub(map.elevations[neighbor]) > 1 {
                continue;
            }
            distances[neighbor] = distances[current] + 1;
            queue.push_back(neighbor);
        }
    }
    distances
}

/// Fewest steps from the marked start to the summit.
pub fn shortest_path_from_start(input: &str) -> Result<u32, SolveError> {
    let map = parse_map(input)?;
    let distances = distances_from_end(&map);
    match distances[map.start] {
        UNREACHED => Err(SolveError::NoSolution(
            "summit unreachable from start".to_string(),
        )),
        steps => Ok(steps),
    }
}

/// Fewest steps from any lowest-elevation cell to the summit.
pub fn shortest_hiking_trail(input: &str) -> Result<u32, SolveError> {
    let map = parse_map(input)?;
    let distances = distances_from_end(&map);
    map.elevations
        .iter()
        .zip(&distances)
        .filter(|&(&elevation, _)| elevation == 0)
        .map(|(_, &distance)| distance)
        .filter(|&distance| distance != UNREACHED)
        .min()
        .ok_or_else(|| SolveError::NoSolution("no low ground reaches the summit".to_string()))
}

#[derive(RegisterSolution)]
#[solution(day = 12, part = 1)]
#[input(path = "inputs/day12.txt")]
#[input(path = "inputs/day12_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(shortest_path_from_start(input)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 12, part = 2)]
#[input(path = "inputs/day12.txt")]
#[input(path = "inputs/day12_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(shortest_hiking_trail(input)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("inputs/day12_example.txt");

    #[test]
    fn test_part1_example() {
        assert_eq!(shortest_path_from_start(EXAMPLE).unwrap(), 31);
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(shortest_hiking_trail(EXAMPLE).unwrap(), 29);
    }

    #[test]
    fn test_full_climb_chain() {
        let map = format!("S{}E\n", ('a'..='z').collect::<String>());
        assert_eq!(shortest_path_from_start(&map).unwrap(), 27);
    }

    #[test]
    fn test_unreachable_summit() {
        assert!(matches!(
            shortest_path_from_start("SazE\n"),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_missing_markers() {
        assert!(matches!(
            parse_map("abc\n"),
            Err(SolveError::InvalidInput(_))
        ));
    }
}
