//! Day 15: Beacon Exclusion Zone

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;
use itertools::Itertools;

use crate::util;

/// Row scanned in part 1. The example in the puzzle text uses row 10; see
/// [`excluded_positions`].
const TARGET_ROW: i64 = 2_000_000;

/// Search square bound in part 2. The example uses 20.
const SEARCH_BOUND: i64 = 4_000_000;

const FREQUENCY_MULTIPLIER: i64 = 4_000_000;

struct Sensor {
    col: i64,
    row: i64,
    beacon_col: i64,
    beacon_row: i64,
    /// Manhattan distance to the closest beacon
    radius: i64,
}

fn parse_coordinates(text: &str) -> Result<(i64, i64), SolveError> {
    let (x, y) = text
        .split_once(", ")
        .ok_or_else(|| SolveError::InvalidInput(format!("malformed coordinates '{text}'")))?;
    let x = x
        .strip_prefix("x=")
        .ok_or_else(|| SolveError::InvalidInput(format!("missing x in '{text}'")))?;
    let y = y
        .strip_prefix("y=")
        .ok_or_else(|| SolveError::InvalidInput(format!("missing y in '{text}'")))?;
    Ok((util::parse_num(x)?, util::parse_num(y)?))
}

fn parse_sensor(line: &str) -> Result<Sensor, SolveError> {
    let rest = line
        .strip_prefix("Sensor at ")
        .ok_or_else(|| SolveError::InvalidInput(format!("malformed sensor '{line}'")))?;
    let (sensor, beacon) = rest
        .split_once(": closest beacon is at ")
        .ok_or_else(|| SolveError::InvalidInput(format!("malformed sensor '{line}'")))?;
    let (col, row) = parse_coordinates(sensor)?;
    let (beacon_col, beacon_row) = parse_coordinates(beacon)?;
    Ok(Sensor {
        col,
        row,
        beacon_col,
        beacon_row,
        radius: (col - beacon_col).abs() + (row - beacon_row).abs(),
    })
}

fn parse_sensors(input: &str) -> Result<Vec<Sensor>, SolveError> {
    let sensors: Vec<Sensor> = input.lines().map(parse_sensor).collect::<Result<_, _>>()?;
    if sensors.is_empty() {
        return Err(SolveError::InvalidInput("no sensors in scan".to_string()));
    }
    Ok(sensors)
}

/// Merge each sensor's coverage of `row` into disjoint, ascending,
/// inclusive column intervals. Touching intervals coalesce.
fn coverage_into(
    sensors: &[Sensor],
    row: i64,
    clamp: Option<(i64, i64)>,
    intervals: &mut Vec<(i64, i64)>,
) {
    intervals.clear();
    for sensor in sensors {
        let slack = sensor.radius - (row - sensor.row).abs();
        if slack < 0 {
            continue;
        }
        let (mut low, mut high) = (sensor.col - slack, sensor.col + slack);
        if let Some((min, max)) = clamp {
            low = low.max(min);
            high = high.min(max);
        }
        if low <= high {
            intervals.push((low, high));
        }
    }
    intervals.sort_unstable();

    let mut merged = 0;
    for index in 1..intervals.len() {
        let (low, high) = intervals[index];
        if low <= intervals[merged].1 + 1 {
            intervals[merged].1 = intervals[merged].1.max(high);
        } else {
            merged += 1;
            intervals[merged] = (low, high);
        }
    }
    intervals.truncate(if intervals.is_empty() { 0 } else { merged + 1 });
}

/// Positions on `row` that cannot hold an undiscovered beacon.
pub fn excluded_positions(input: &str, row: i64) -> Result<i64, SolveError> {
    let sensors = parse_sensors(input)?;
    let mut intervals = Vec::new();
    coverage_into(&sensors, row, None, &mut intervals);
    let covered: i64 = intervals.iter().map(|(low, high)| high - low + 1).sum();
    let beacons_on_row = sensors
        .iter()
        .filter(|sensor| sensor.beacon_row == row)
        .map(|sensor| sensor.beacon_col)
        .unique()
        .count() as i64;
    Ok(covered - beacons_on_row)
}

/// Tuning frequency of the single uncovered position in the search square.
pub fn tuning_frequency(input: &str, bound: i64) -> Result<i64, SolveError> {
    let sensors = parse_sensors(input)?;
    let mut intervals = Vec::new();
    for row in 0..=bound {
        coverage_into(&sensors, row, Some((0, bound)), &mut intervals);
        let covered: i64 = intervals.iter().map(|(low, high)| high - low + 1).sum();
        if covered == bound + 1 {
            continue;
        }
        // first uncovered column; the intervals are disjoint and ascending
        let mut gap = 0;
        for &(low, high) in &intervals {
            if low > gap {
                break;
            }
            gap = high + 1;
        }
        return Ok(gap * FREQUENCY_MULTIPLIER + row);
    }
    Err(SolveError::NoSolution(
        "no uncovered position in the search square".to_string(),
    ))
}

#[derive(RegisterSolution)]
#[solution(day = 15, part = 1)]
#[input(path = "inputs/day15.txt")]
#[input(path = "inputs/day15_example.txt", kind = example, embedded,
        description = "answers differ from the puzzle text, which scans row 10 instead of row 2000000")]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(excluded_positions(input, TARGET_ROW)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 15, part = 2)]
#[input(path = "inputs/day15.txt")]
#[input(path = "inputs/day15_example.txt", kind = example, embedded,
        description = "answers differ from the puzzle text, which searches within 20 instead of 4000000")]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(tuning_frequency(input, SEARCH_BOUND)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("inputs/day15_example.txt");

    #[test]
    fn test_part1_example() {
        assert_eq!(excluded_positions(EXAMPLE, 10).unwrap(), 26);
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(tuning_frequency(EXAMPLE, 20).unwrap(), 56000011);
    }

    #[test]
    fn test_coverage_merges_touching_intervals() {
        let sensors = parse_sensors(
            "Sensor at x=0, y=0: closest beacon is at x=2, y=0\n\
             Sensor at x=5, y=0: closest beacon is at x=7, y=0\n",
        )
        .unwrap();
        let mut intervals = Vec::new();
        coverage_into(&sensors, 0, None, &mut intervals);
        assert_eq!(intervals, [(-2, 7)]);
    }

    #[test]
    fn test_row_out_of_all_ranges() {
        assert_eq!(
            excluded_positions("Sensor at x=0, y=0: closest beacon is at x=1, y=0\n", 5).unwrap(),
            0
        );
    }

    #[test]
    fn test_fully_covered_square_has_no_frequency() {
        assert!(matches!(
            tuning_frequency("Sensor at x=0, y=0: closest beacon is at x=9, y=0\n", 2),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_beacons_do_not_count_as_excluded() {
        // beacon sits on the scanned row inside the covered span
        assert_eq!(
            excluded_positions("Sensor at x=0, y=0: closest beacon is at x=2, y=0\n", 0).unwrap(),
            4
        );
    }
}
