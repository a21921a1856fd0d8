//! Advent of Code 2022 puzzle solutions with automatic registration
//!
//! Each day lives in its own module: free functions hold the puzzle logic
//! and unit structs deriving [`RegisterSolution`](aoc_runner_macros::RegisterSolution)
//! hook them into the runner registry. Example inputs are embedded from
//! `src/inputs/`; full puzzle inputs are read from disk at run time.

pub mod util;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;
pub mod day15;
pub mod day16;
