//! Day 2: Rock Paper Scissors

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn score(self) -> u64 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    /// The shape this one defeats.
    fn defeats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    /// The shape that defeats this one.
    fn defeated_by(self) -> Shape {
        match self {
            Shape::Rock => Shape::Paper,
            Shape::Paper => Shape::Scissors,
            Shape::Scissors => Shape::Rock,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    fn score(self) -> u64 {
        match self {
            Outcome::Loss => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }
}

fn outcome_of(ours: Shape, theirs: Shape) -> Outcome {
    if ours == theirs {
        Outcome::Draw
    } else if ours.defeats() == theirs {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

/// The opponent's shape and our still-unread second column.
fn parse_round(line: &str) -> Result<(Shape, &str), SolveError> {
    let mut tokens = line.split_whitespace();
    let (Some(first), Some(second), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(SolveError::InvalidInput(format!("malformed round '{line}'")));
    };
    let theirs = match first {
        "A" => Shape::Rock,
        "B" => Shape::Paper,
        "C" => Shape::Scissors,
        _ => {
            return Err(SolveError::InvalidInput(format!(
                "unknown opponent shape '{first}'"
            )));
        }
    };
    Ok((theirs, second))
}

/// Total score reading the second column as our shape.
pub fn score_as_shapes(input: &str) -> Result<u64, SolveError> {
    let mut total = 0;
    for line in input.lines() {
        let (theirs, token) = parse_round(line)?;
        let ours = match token {
            "X" => Shape::Rock,
            "Y" => Shape::Paper,
            "Z" => Shape::Scissors,
            _ => {
                return Err(SolveError::InvalidInput(format!(
                    "unknown response shape '{token}'"
                )));
            }
        };
        total += ours.score() + outcome_of(ours, theirs).score();
    }
    Ok(total)
}

/// Total score reading the second column as the required outcome.
pub fn score_as_outcomes(input: &str) -> Result<u64, SolveError> {
    let mut total = 0;
    for line in input.lines() {
        let (theirs, token) = parse_round(line)?;
        let outcome = match token {
            "X" => Outcome::Loss,
            "Y" => Outcome::Draw,
            "Z" => Outcome::Win,
            _ => {
                return Err(SolveError::InvalidInput(format!(
                    "unknown outcome '{token}'"
                )));
            }
        };
        let ours = match outcome {
            Outcome::Draw => theirs,
            Outcome::Win => theirs.defeated_by(),
            Outcome::Loss => theirs.defeats(),
        };
        total += ours.score() + outcome.score();
    }
    Ok(total)
}

#[derive(RegisterSolution)]
#[solution(day = 2, part = 1)]
#[input(path = "inputs/day02.txt")]
#[input(path = "inputs/day02_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(score_as_shapes(input)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 2, part = 2)]
#[input(path = "inputs/day02.txt")]
#[input(path = "inputs/day02_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(score_as_outcomes(input)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("inputs/day02_example.txt");

    #[test]
    fn test_part1_example() {
        assert_eq!(score_as_shapes(EXAMPLE).unwrap(), 15);
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(score_as_outcomes(EXAMPLE).unwrap(), 12);
    }

    #[test]
    fn test_draws_score_shape_plus_three() {
        assert_eq!(score_as_shapes("A X\nB Y\nC Z\n").unwrap(), 1 + 3 + 2 + 3 + 3 + 3);
    }

    #[test]
    fn test_extra_column_is_rejected() {
        assert!(matches!(
            score_as_shapes("A X X\n"),
            Err(SolveError::InvalidInput(_))
        ));
    }
}
