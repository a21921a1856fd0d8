//! Day 10: Cathode-Ray Tube

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;

use crate::util;

const CRT_COLS: usize = 40;
const CRT_ROWS: usize = 6;

/// X register value during each cycle, in execution order.
fn x_per_cycle(input: &str) -> Result<Vec<i64>, SolveError> {
    let mut values = Vec::new();
    let mut x = 1i64;
    for line in input.lines() {
        if line == "noop" {
            values.push(x);
        } else if let Some(argument) = line.strip_prefix("addx ") {
            values.push(x);
            values.push(x);
            x += util::parse_num::<i64>(argument)?;
        } else {
            return Err(SolveError::InvalidInput(format!(
                "unknown instruction '{line}'"
            )));
        }
    }
    Ok(values)
}

/// Sum of cycle * X at cycles 20, 60, 100, 140, 180, and 220.
pub fn signal_strength_sum(input: &str) -> Result<i64, SolveError> {
    let values = x_per_cycle(input)?;
    let mut sum = 0;
    for cycle in [20usize, 60, 100, 140, 180, 220] {
        let Some(x) = values.get(cycle - 1) else {
            return Err(SolveError::InvalidInput(format!(
                "program halts before cycle {cycle}"
            )));
        };
        sum += cycle as i64 * x;
    }
    Ok(sum)
}

/// The 40x6 image the CRT draws; lit pixels are `█`, dark pixels a space.
pub fn render_image(input: &str) -> Result<String, SolveError> {
    let values = x_per_cycle(input)?;
    let rows: Vec<String> = values
        .chunks(CRT_COLS)
        .take(CRT_ROWS)
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, &x)| if (x - col as i64).abs() <= 1 { '█' } else { ' ' })
                .collect()
        })
        .collect();
    Ok(rows.join("\n"))
}

#[derive(RegisterSolution)]
#[solution(day = 10, part = 1)]
#[input(path = "inputs/day10.txt")]
#[input(path = "inputs/day10_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(signal_strength_sum(input)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 10, part = 2)]
#[input(path = "inputs/day10.txt")]
#[input(path = "inputs/day10_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        render_image(input)
    }
}
