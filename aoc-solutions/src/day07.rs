//! Day 7: No Space Left On Device

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;

use crate::util;

const DISK_SIZE: u64 = 70_000_000;
const UPDATE_SIZE: u64 = 30_000_000;
const SMALL_DIR_LIMIT: u64 = 100_000;

/// Total size of every directory in the browsed tree, in close order with
/// the root last.
///
/// Only a stack of open directories is kept; a directory's size folds into
/// its parent when it closes.
fn directory_sizes(input: &str) -> Result<Vec<u64>, SolveError> {
    let mut open: Vec<u64> = Vec::new();
    let mut closed: Vec<u64> = Vec::new();

    for line in input.lines() {
        if let Some(target) = line.strip_prefix("$ cd ") {
            match target {
                "/" => {
                    if open.is_empty() {
                        open.push(0);
                    }
                    while open.len() > 1 {
                        close_directory(&mut open, &mut closed);
                    }
                }
                ".." => {
                    if open.len() <= 1 {
                        return Err(SolveError::InvalidInput(
                            "cd .. above the root".to_string(),
                        ));
                    }
                    close_directory(&mut open, &mut closed);
                }
                _ => {
                    if open.is_empty() {
                        return Err(SolveError::InvalidInput(format!(
                            "cd {target} before cd /"
                        )));
                    }
                    open.push(0);
                }
            }
        } else if line == "$ ls" || line.starts_with("dir ") {
            // listing markers carry no size information
        } else if let Some((size, _name)) = line.split_once(' ') {
            let size: u64 = util::parse_num(size)?;
            match open.last_mut() {
                Some(current) => *current += size,
                None => {
                    return Err(SolveError::InvalidInput(
                        "file listed before cd /".to_string(),
                    ));
                }
            }
        } else {
            return Err(SolveError::InvalidInput(format!(
                "unrecognized terminal line '{line}'"
            )));
        }
    }

    if open.is_empty() {
        return Err(SolveError::InvalidInput("no terminal session".to_string()));
    }
    while !open.is_empty() {
        close_directory(&mut open, &mut closed);
    }
    Ok(closed)
}

fn close_directory(open: &mut Vec<u64>, closed: &mut Vec<u64>) {
    if let Some(size) = open.pop() {
        if let Some(parent) = open.last_mut() {
            *parent += size;
        }
        closed.push(size);
    }
}

/// Sum of directory sizes up to 100k.
pub fn small_directory_total(input: &str) -> Result<u64, SolveError> {
    let sizes = directory_sizes(input)?;
    Ok(sizes.iter().filter(|&&size| size <= SMALL_DIR_LIMIT).sum())
}

/// Size of the smallest directory whose deletion frees enough space for
/// the update.
pub fn smallest_freeing_directory(input: &str) -> Result<u64, SolveError> {
    let sizes = directory_sizes(input)?;
    let used = *sizes
        .last()
        .ok_or_else(|| SolveError::InvalidInput("no directories browsed".to_string()))?;
    if used > DISK_SIZE {
        return Err(SolveError::InvalidInput(format!(
            "tree uses {used} of a {DISK_SIZE} disk"
        )));
    }
    let needed = UPDATE_SIZE.saturating_sub(DISK_SIZE - used);
    sizes
        .into_iter()
        .filter(|&size| size >= needed)
        .min()
        .ok_or_else(|| SolveError::NoSolution("no directory large enough".to_string()))
}

#[derive(RegisterSolution)]
#[solution(day = 7, part = 1)]
#[input(path = "inputs/day07.txt")]
#[input(path = "inputs/day07_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(small_directory_total(input)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 7, part = 2)]
#[input(path = "inputs/day07.txt")]
#[input(path = "inputs/day07_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(smallest_freeing_directory(input)?.to_string())
    }
}
