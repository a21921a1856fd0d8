//! Day 13: Distress Signal
//!
//! Packets are the JSON subset of nested lists and integers, so parsing is
//! delegated to serde_json and only the ordering rule is hand-written.

use std::cmp::Ordering;

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;
use serde::Deserialize;

use crate::util;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Packet {
    Int(i64),
    List(Vec<Packet>),
}

impl Packet {
    fn parse(line: &str) -> Result<Packet, SolveError> {
        serde_json::from_str(line)
            .map_err(|err| SolveError::InvalidInput(format!("malformed packet '{line}': {err}")))
    }
}

impl Ord for Packet {
    fn cmp(&self, other: &Packet) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            // a lone integer compares as a one-element list
            (Packet::Int(_), Packet::List(b)) => {
                std::slice::from_ref(self).cmp(b.as_slice())
            }
            (Packet::List(a), Packet::Int(_)) => {
                a.as_slice().cmp(std::slice::from_ref(other))
            }
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Packet) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Eq must agree with cmp: Int(2) equals List([Int(2)]), so the derived
// variant-wise equality would be wrong.
impl PartialEq for Packet {
    fn eq(&self, other: &Packet) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

/// Sum of the one-based indices of pairs already in order.
pub fn ordered_pair_index_sum(input: &str) -> Result<usize, SolveError> {
    let mut sum = 0;
    for (index, block) in util::blocks(input).iter().enumerate() {
        let mut lines = block.lines();
        let (Some(first), Some(second), None) = (lines.next(), lines.next(), lines.next())
        else {
            return Err(SolveError::InvalidInput(format!(
                "expected two packets per pair, got '{block}'"
            )));
        };
        if Packet::parse(first)? < Packet::parse(second)? {
            sum += index + 1;
        }
    }
    Ok(sum)
}

/// Product of the sorted positions of the [[2]] and [[6]] dividers.
pub fn decoder_key(input: &str) -> Result<usize, SolveError> {
    let mut packets: Vec<Packet> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Packet::parse)
        .collect::<Result<_, _>>()?;
    let dividers = [Packet::parse("[[2]]")?, Packet::parse("[[6]]")?];
    packets.extend(dividers.iter().cloned());
    packets.sort_unstable();

    let mut key = 1;
    for divider in &dividers {
        let position = packets
            .iter()
            .position(|packet| packet == divider)
            .ok_or_else(|| SolveError::NoSolution("divider packet lost".to_string()))?;
        key *= position + 1;
    }
    Ok(key)
}

#[derive(RegisterSolution)]
#[solution(day = 13, part = 1)]
#[input(path = "inputs/day13.txt")]
#[input(path = "inputs/day13_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(ordered_pair_index_sum(input)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 13, part = 2)]
#[input(path = "inputs/day13.txt")]
#[input(path = "inputs/day13_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(decoder_key(input)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("inputs/day13_example.txt");

    fn packet(text: &str) -> Packet {
        Packet::parse(text).unwrap()
    }

    #[test]
    fn test_part1_example() {
        assert_eq!(ordered_pair_index_sum(EXAMPLE).unwrap(), 13);
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(decoder_key(EXAMPLE).unwrap(), 140);
    }

    #[test]
    fn test_mixed_comparison_wraps_integer() {
        assert!(packet("[1]") < packet("2"));
        assert!(packet("9") > packet("[[8,7,6]]"));
        assert_eq!(packet("2"), packet("[2]"));
        assert_eq!(packet("[[2]]"), packet("2"));
    }

    #[test]
    fn test_shorter_list_wins_ties() {
        assert!(packet("[7,7,7]") < packet("[7,7,7,7]"));
        assert!(packet("[]") < packet("[3]"));
    }

    #[test]
    fn test_malformed_packet() {
        assert!(matches!(
            Packet::parse("[1,2"),
            Err(SolveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_pair_with_missing_line() {
        assert!(matches!(
            ordered_pair_index_sum("[1]\n"),
            Err(SolveError::InvalidInput(_))
        ));
    }
}
