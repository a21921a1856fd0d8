//! Day 3: Rucksack Reorganization

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;
use itertools::Itertools;

/// Item priority: a-z map to 1-26, A-Z to 27-52.
fn priority(item: u8) -> Result<u32, SolveError> {
    match item {
        b'a'..=b'z' => Ok((item - b'a') as u32 + 1),
        b'A'..=b'Z' => Ok((item - b'A') as u32 + 27),
        _ => Err(SolveError::InvalidInput(format!(
            "invalid item '{}'",
            item as char
        ))),
    }
}

/// Bitmask with one bit per priority.
fn item_mask(items: &str) -> Result<u64, SolveError> {
    items
        .bytes()
        .try_fold(0u64, |mask, item| Ok(mask | 1u64 << priority(item)?))
}

/// Lowest priority present in every mask.
fn common_priority(masks: impl IntoIterator<Item = u64>) -> Result<u32, SolveError> {
    let common = masks.into_iter().fold(u64::MAX, |acc, mask| acc & mask);
    match common.trailing_zeros() {
        64 => Err(SolveError::NoSolution("no common item".to_string())),
        priority => Ok(priority),
    }
}

/// Sum of the item shared by each rucksack's two compartments.
pub fn misplaced_priority_sum(input: &str) -> Result<u64, SolveError> {
    let mut sum = 0;
    for line in input.lines() {
        if line.len() % 2 != 0 {
            return Err(SolveError::InvalidInput(format!(
                "rucksack '{line}' has uneven compartments"
            )));
        }
        let (front, back) = line.split_at(line.len() / 2);
        sum += common_priority([item_mask(front)?, item_mask(back)?])? as u64;
    }
    Ok(sum)
}

/// Sum of each three-elf group's badge item.
pub fn badge_priority_sum(input: &str) -> Result<u64, SolveError> {
    let mut sum = 0;
    for group in &input.lines().chunks(3) {
        let masks: Vec<u64> = group.map(item_mask).collect::<Result<_, _>>()?;
        if masks.len() != 3 {
            return Err(SolveError::InvalidInput(
                "group smaller than three rucksacks".to_string(),
            ));
        }
        sum += common_priority(masks)? as u64;
    }
    Ok(sum)
}

#[derive(RegisterSolution)]
#[solution(day = 3, part = 1)]
#[input(path = "inputs/day03.txt")]
#[input(path = "inputs/day03_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(misplaced_priority_sum(input)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 3, part = 2)]
#[input(path = "inputs/day03.txt")]
#[input(path = "inputs/day03_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(badge_priority_sum(input)?.to_string())
    }
}
