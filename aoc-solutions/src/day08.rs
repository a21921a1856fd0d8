//! Day 8: Treetop Tree House

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;

struct Grid {
    heights: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    fn parse(input: &str) -> Result<Grid, SolveError> {
        let mut heights = Vec::new();
        let mut rows = 0;
        let mut cols = 0;
        for line in input.lines() {
            if rows == 0 {
                cols = line.len();
            } else if line.len() != cols {
                return Err(SolveError::InvalidInput("ragged tree grid".to_string()));
            }
            for byte in line.bytes() {
                match byte {
                    b'0'..=b'9' => heights.push(byte - b'0'),
                    _ => {
                        return Err(SolveError::InvalidInput(format!(
                            "invalid tree height '{}'",
                            byte as char
                        )));
                    }
                }
            }
            rows += 1;
        }
        if rows == 0 || cols == 0 {
            return Err(SolveError::InvalidInput("empty tree grid".to_string()));
        }
        Ok(Grid { heights, rows, cols })
    }

    fn height(&self, row: usize, col: usize) -> u8 {
        self.heights[row * self.cols + col]
    }
}

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

fn step(grid: &Grid, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
    let row = row.checked_add_signed(dr)?;
    let col = col.checked_add_signed(dc)?;
    (row < grid.rows && col < grid.cols).then_some((row, col))
}

/// Positions marching from `(row, col)` toward the grid edge.
fn march<'a>(
    grid: &'a Grid,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    std::iter::successors(step(grid, row, col, dr, dc), move |&(r, c)| {
        step(grid, r, c, dr, dc)
    })
}

fn is_visible(grid: &Grid, row: usize, col: usize) -> bool {
    let height = grid.height(row, col);
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| march(grid, row, col, dr, dc).all(|(r, c)| grid.height(r, c) < height))
}

fn scenic_score(grid: &Grid, row: usize, col: usize) -> u64 {
    let height = grid.height(row, col);
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            let mut distance = 0u64;
            for (r, c) in march(grid, row, col, dr, dc) {
                distance += 1;
                if grid.height(r, c) >= height {
                    break;
                }
            }
            distance
        })
        .product()
}

/// Trees visible from outside the grid.
pub fn count_visible(input: &str) -> Result<usize, SolveError> {
    let grid = Grid::parse(input)?;
    let mut visible = 0;
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            if is_visible(&grid, row, col) {
                visible += 1;
            }
        }
    }
    Ok(visible)
}

/// Best product of viewing distances over all trees.
pub fn best_scenic_score(input: &str) -> Result<u64, SolveError> {
    let grid = Grid::parse(input)?;
    let mut best = 0;
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            best = best.max(scenic_score(&grid, row, col));
        }
    }
    Ok(best)
}

#[derive(RegisterSolution)]
#[solution(day = 8, part = 1)]
#[input(path = "inputs/day08.txt")]
#[input(path = "inputs/day08_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(count_visible(input)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 8, part = 2)]
#[input(path = "inputs/day08.txt")]
#[input(path = "inputs/day08_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(best_scenic_score(input)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("inputs/day08_example.txt");

    #[test]
    fn test_part1_example() {
        assert_eq!(count_visible(EXAMPLE).unwrap(), 21);
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(best_scenic_score(EXAMPLE).unwrap(), 8);
    }

    #[test]
    fn test_single_tree_is_visible() {
        assert_eq!(count_visible("5\n").unwrap(), 1);
        assert_eq!(best_scenic_score("5\n").unwrap(), 0);
    }

    #[test]
    fn test_example_scenic_details() {
        let grid = Grid::parse(EXAMPLE).unwrap();
        // the 5 in the middle of the second row
        assert_eq!(scenic_score(&grid, 1, 2), 4);
        // the 5 in the middle of the fourth row
        assert_eq!(scenic_score(&grid, 3, 2), 8);
    }

    #[test]
    fn test_ragged_grid() {
        assert!(matches!(
            Grid::parse("123\n12\n"),
            Err(SolveError::InvalidInput(_))
        ));
    }
}
