//! Day 1: Calorie Counting

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;
use itertools::Itertools;

use crate::util;

/// Total calories carried by each elf, one blank-line block per elf.
fn calories_per_elf(input: &str) -> Result<Vec<u64>, SolveError> {
    util::blocks(input)
        .iter()
        .map(|block| block.lines().map(util::parse_num::<u64>).sum())
        .collect()
}

pub fn most_calories(input: &str) -> Result<u64, SolveError> {
    let elves = calories_per_elf(input)?;
    elves
        .into_iter()
        .max()
        .ok_or_else(|| SolveError::InvalidInput("no elves in inventory".to_string()))
}

pub fn top_three_calories(input: &str) -> Result<u64, SolveError> {
    let elves = calories_per_elf(input)?;
    Ok(elves.into_iter().sorted_unstable().rev().take(3).sum())
}

#[derive(RegisterSolution)]
#[solution(day = 1, part = 1)]
#[input(path = "inputs/day01.txt")]
#[input(path = "inputs/day01_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(most_calories(input)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 1, part = 2)]
#[input(path = "inputs/day01.txt")]
#[input(path = "inputs/day01_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(top_three_calories(input)?.to_string())
    }
}
