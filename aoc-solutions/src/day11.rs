//! Day 11: Monkey in the Middle

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;
use itertools::Itertools;

use crate::util;

const RELIEF_ROUNDS: u32 = 20;
const WORRIED_ROUNDS: u32 = 10_000;

#[derive(Debug, Clone, Copy)]
enum Operand {
    Old,
    Literal(u64),
}

#[derive(Debug, Clone, Copy)]
enum Operator {
    Add,
    Multiply,
}

struct Monkey {
    items: Vec<u64>,
    operator: Operator,
    operand: Operand,
    divisor: u64,
    on_true: usize,
    on_false: usize,
    inspections: u64,
}

impl Monkey {
    fn inspect(&self, item: u64) -> u64 {
        let rhs = match self.operand {
            Operand::Old => item,
            Operand::Literal(value) => value,
        };
        match self.operator {
            Operator::Add => item + rhs,
            Operator::Multiply => item * rhs,
        }
    }
}

/// Next line of the block, stripped of `prefix` and surrounding blanks.
fn field<'a>(
    lines: &mut std::str::Lines<'a>,
    prefix: &str,
) -> Result<&'a str, SolveError> {
    let line = lines
        .next()
        .ok_or_else(|| SolveError::InvalidInput("truncated monkey block".to_string()))?;
    line.trim_start()
        .strip_prefix(prefix)
        .map(str::trim)
        .ok_or_else(|| SolveError::InvalidInput(format!("expected a '{prefix}' line, found '{line}'")))
}

fn parse_operation(text: &str) -> Result<(Operator, Operand), SolveError> {
    let (operator, operand) = text
        .split_once(' ')
        .ok_or_else(|| SolveError::InvalidInput(format!("malformed operation '{text}'")))?;
    let operator = match operator {
        "+" => Operator::Add,
        "*" => Operator::Multiply,
        _ => {
            return Err(SolveError::InvalidInput(format!(
                "unknown operator '{operator}'"
            )));
        }
    };
    let operand = if operand == "old" {
        Operand::Old
    } else {
        Operand::Literal(util::parse_num(operand)?)
    };
    Ok((operator, operand))
}

fn parse_monkey(block: &str) -> Result<Monkey, SolveError> {
    let mut lines = block.lines();
    field(&mut lines, "Monkey")?;
    let items = field(&mut lines, "Starting items:")?
        .split(',')
        .map(util::parse_num)
        .collect::<Result<_, _>>()?;
    let (operator, operand) = parse_operation(field(&mut lines, "Operation: new = old")?)?;
    let divisor = util::parse_num(field(&mut lines, "Test: divisible by")?)?;
    let on_true = util::parse_num(field(&mut lines, "If true: throw to monkey")?)?;
    let on_false = util::parse_num(field(&mut lines, "If false: throw to monkey")?)?;
    Ok(Monkey {
        items,
        operator,
        operand,
        divisor,
        on_true,
        on_false,
        inspections: 0,
    })
}

fn parse_monkeys(input: &str) -> Result<Vec<Monkey>, SolveError> {
    let monkeys: Vec<Monkey> = util::blocks(input)
        .iter()
        .map(|block| parse_monkey(block))
        .collect::<Result<_, _>>()?;
    for (index, monkey) in monkeys.iter().enumerate() {
        if monkey.divisor == 0 {
            return Err(SolveError::InvalidInput(format!(
                "monkey {index} divides by zero"
            )));
        }
        for target in [monkey.on_true, monkey.on_false] {
            if target >= monkeys.len() {
                return Err(SolveError::InvalidInput(format!(
                    "monkey {index} throws to nonexistent monkey {target}"
                )));
            }
            if target == index {
                return Err(SolveError::InvalidInput(format!(
                    "monkey {index} throws to itself"
                )));
            }
        }
    }
    Ok(monkeys)
}

/// Product of the two highest inspection counts after the given rounds.
///
/// With relief, worry divides by three after each inspection. Without it,
/// worry is reduced modulo the product of every monkey's divisor, which
/// preserves all divisibility tests.
pub fn monkey_business(input: &str, rounds: u32, relief: bool) -> Result<u64, SolveError> {
    let mut monkeys = parse_monkeys(input)?;
    let modulus: u64 = monkeys.iter().map(|monkey| monkey.divisor).product();
    for _ in 0..rounds {
        for index in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[index].items);
            monkeys[index].inspections += items.len() as u64;
            for item in items {
                let mut worry = monkeys[index].inspect(item);
                if relief {
                    worry /= 3;
                } else {
                    worry %= modulus;
                }
                let target = if worry % monkeys[index].divisor == 0 {
                    monkeys[index].on_true
                } else {
                    monkeys[index].on_false
                };
                monkeys[target].items.push(worry);
            }
        }
    }
    Ok(monkeys
        .iter()
        .map(|monkey| monkey.inspections)
        .sorted_unstable()
        .rev()
        .take(2)
        .product())
}

#[derive(RegisterSolution)]
#[solution(day = 11, part = 1)]
#[input(path = "inputs/day11.txt")]
#[input(path = "inputs/day11_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(monkey_business(input, RELIEF_ROUNDS, true)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 11, part = 2)]
#[input(path = "inputs/day11.txt")]
#[input(path = "inputs/day11_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(monkey_business(input, WORRIED_ROUNDS, false)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("inputs/day11_example.txt");

    #[test]
    fn test_part1_example() {
        assert_eq!(monkey_business(EXAMPLE, RELIEF_ROUNDS, true).unwrap(), 10605);
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(
            monkey_business(EXAMPLE, WORRIED_ROUNDS, false).unwrap(),
            2713310158
        );
    }

    #[test]
    fn test_one_worried_round_matches_puzzle_text() {
        // inspection counts after round 1 of part 2 are 2, 4, 3, 6
        assert_eq!(monkey_business(EXAMPLE, 1, false).unwrap(), 24);
    }

    #[test]
    fn test_parse_square_operation() {
        let (operator, operand) = parse_operation("* old").unwrap();
        assert!(matches!(operator, Operator::Multiply));
        assert!(matches!(operand, Operand::Old));
    }

    #[test]
    fn test_throw_to_nonexistent_monkey() {
        let block = "Monkey 0:\n  Starting items: 1\n  Operation: new = old + 1\n  Test: divisible by 2\n    If true: throw to monkey 9\n    If false: throw to monkey 9\n";
        assert!(matches!(
            monkey_business(block, 1, true),
            Err(SolveError::InvalidInput(_))
        ));
    }
}
