//! Day 5: Supply Stacks

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;

use crate::util;

struct CraneMove {
    count: usize,
    from: usize,
    to: usize,
}

struct Procedure {
    stacks: Vec<Vec<u8>>,
    moves: Vec<CraneMove>,
}

/// Parse the crate drawing and the move list.
///
/// The drawing places stack `i` in column `1 + 4 * i`; the label line at
/// the bottom fixes the stack count.
fn parse_procedure(input: &str) -> Result<Procedure, SolveError> {
    let blocks = util::blocks(input);
    let [drawing, moves] = blocks.as_slice() else {
        return Err(SolveError::InvalidInput(
            "expected a crate drawing and a move list".to_string(),
        ));
    };

    let mut rows: Vec<&str> = drawing.lines().collect();
    let labels = rows
        .pop()
        .ok_or_else(|| SolveError::InvalidInput("empty crate drawing".to_string()))?;
    let count = labels.split_whitespace().count();
    if count == 0 {
        return Err(SolveError::InvalidInput("no stack labels".to_string()));
    }

    let mut stacks = vec![Vec::new(); count];
    for row in rows.iter().rev() {
        let bytes = row.as_bytes();
        for (index, stack) in stacks.iter_mut().enumerate() {
            let Some(&slot) = bytes.get(1 + index * 4) else {
                continue;
            };
            if slot == b' ' {
                continue;
            }
            if !slot.is_ascii_uppercase() {
                return Err(SolveError::InvalidInput(format!(
                    "unexpected crate '{}'",
                    slot as char
                )));
            }
            stack.push(slot);
        }
    }

    let moves = moves
        .lines()
        .map(|line| parse_move(line, count))
        .collect::<Result<_, _>>()?;
    Ok(Procedure { stacks, moves })
}

fn parse_move(line: &str, stack_count: usize) -> Result<CraneMove, SolveError> {
    let mut words = line.split_whitespace();
    let (Some("move"), Some(count), Some("from"), Some(from), Some("to"), Some(to), None) = (
        words.next(),
        words.next(),
        words.next(),
        words.next(),
        words.next(),
        words.next(),
        words.next(),
    ) else {
        return Err(SolveError::InvalidInput(format!("malformed move '{line}'")));
    };

    let count = util::parse_num(count)?;
    let from = stack_index(from, stack_count)?;
    let to = stack_index(to, stack_count)?;
    Ok(CraneMove { count, from, to })
}

/// One-based stack number to zero-based index.
fn stack_index(text: &str, stack_count: usize) -> Result<usize, SolveError> {
    let number: usize = util::parse_num(text)?;
    if (1..=stack_count).contains(&number) {
        Ok(number - 1)
    } else {
        Err(SolveError::InvalidInput(format!(
            "stack {number} out of range, only {stack_count} stacks"
        )))
    }
}

fn top_crates(stacks: &[Vec<u8>]) -> String {
    stacks
        .iter()
        .map(|stack| stack.last().map_or(' ', |&c| c as char))
        .collect()
}

/// Top crates after moving one crate at a time (CrateMover 9000).
pub fn rearrange_single(input: &str) -> Result<String, SolveError> {
    let Procedure { mut stacks, moves } = parse_procedure(input)?;
    for mv in moves {
        for _ in 0..mv.count {
            let Some(lifted) = stacks[mv.from].pop() else {
                return Err(SolveError::InvalidInput(
                    "move from an empty stack".to_string(),
                ));
            };
            stacks[mv.to].push(lifted);
        }
    }
    Ok(top_crates(&stacks))
}

/// Top crates after moving whole blocks at once (CrateMover 9001).
pub fn rearrange_block(input: &str) -> Result<String, SolveError> {
    let Procedure { mut stacks, moves } = parse_procedure(input)?;
    for mv in moves {
        let height = stacks[mv.from].len();
        if height < mv.count {
            return Err(SolveError::InvalidInput(format!(
                "move of {} crates exceeds stack height {height}",
                mv.count
            )));
        }
        let lifted = stacks[mv.from].split_off(height - mv.count);
        stacks[mv.to].extend(lifted);
    }
    Ok(top_crates(&stacks))
}

#[derive(RegisterSolution)]
#[solution(day = 5, part = 1)]
#[input(path = "inputs/day05.txt")]
#[input(path = "inputs/day05_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        rearrange_single(input)
    }
}

#[derive(RegisterSolution)]
#[solution(day = 5, part = 2)]
#[input(path = "inputs/day05.txt")]
#[input(path = "inputs/day05_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        rearrange_block(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("inputs/day05_example.txt");

    #[test]
    fn test_part1_example() {
        assert_eq!(rearrange_single(EXAMPLE).unwrap(), "CMZ");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(rearrange_block(EXAMPLE).unwrap(), "MCD");
    }

    #[test]
    fn test_block_moves_preserve_order() {
        let input = "[A]    \n[B] [C]\n 1   2 \n\nmove 2 from 1 to 2\n";
        assert_eq!(rearrange_single(input).unwrap(), " B");
        assert_eq!(rearrange_block(input).unwrap(), " A");
    }

    #[test]
    fn test_move_past_stack_count() {
        let input = "[A]\n 1 \n\nmove 1 from 1 to 2\n";
        assert!(matches!(
            rearrange_single(input),
            Err(SolveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_move_from_empty_stack() {
        let input = "[A] [B]\n 1   2 \n\nmove 2 from 1 to 2\n";
        assert!(matches!(
            rearrange_single(input),
            Err(SolveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_stack_prints_space() {
        let input = "[A] [B]\n 1   2 \n\nmove 1 from 1 to 2\n";
        assert_eq!(rearrange_single(input).unwrap(), " A");
    }
}
