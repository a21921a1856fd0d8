//! Day 4: Camp Cleanup

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;

use crate::util;

type Range = (u32, u32);

fn parse_range(text: &str) -> Result<Range, SolveError> {
    let (start, end) = text
        .split_once('-')
        .ok_or_else(|| SolveError::InvalidInput(format!("malformed range '{text}'")))?;
    Ok((util::parse_num(start)?, util::parse_num(end)?))
}

fn parse_pair(line: &str) -> Result<(Range, Range), SolveError> {
    let (left, right) = line
        .split_once(',')
        .ok_or_else(|| SolveError::InvalidInput(format!("malformed pair '{line}'")))?;
    Ok((parse_range(left)?, parse_range(right)?))
}

fn contains(outer: Range, inner: Range) -> bool {
    outer.0 <= inner.0 && inner.1 <= outer.1
}

fn overlaps(a: Range, b: Range) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

/// Pairs where one assignment fully contains the other.
pub fn count_contained(input: &str) -> Result<usize, SolveError> {
    let mut count = 0;
    for line in input.lines() {
        let (a, b) = parse_pair(line)?;
        if contains(a, b) || contains(b, a) {
            count += 1;
        }
    }
    Ok(count)
}

/// Pairs whose assignments overlap at all.
pub fn count_overlapping(input: &str) -> Result<usize, SolveError> {
    let mut count = 0;
    for line in input.lines() {
        let (a, b) = parse_pair(line)?;
        if overlaps(a, b) {
            count += 1;
        }
    }
    Ok(count)
}

#[derive(RegisterSolution)]
#[solution(day = 4, part = 1)]
#[input(path = "inputs/day04.txt")]
#[input(path = "inputs/day04_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(count_contained(input)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 4, part = 2)]
#[input(path = "inputs/day04.txt")]
#[input(path = "inputs/day04_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(count_overlapping(input)?.to_string())
    }
}
