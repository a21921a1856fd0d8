//! Day 6: Tuning Trouble
//!
//! Part 2 carries three alternate marker scanners registered as variants;
//! all of them answer with the index just past the first run of distinct
//! characters.

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;

const PACKET_MARKER: usize = 4;
const MESSAGE_MARKER: usize = 14;

fn signal(input: &str) -> &[u8] {
    input.trim_end().as_bytes()
}

fn no_marker(len: usize) -> SolveError {
    SolveError::NoSolution(format!("no run of {len} distinct characters"))
}

/// Sliding window over per-byte counts; any byte value is accepted.
pub fn find_marker(input: &str, len: usize) -> Result<usize, SolveError> {
    let data = signal(input);
    let mut counts = [0u32; 256];
    let mut start = 0;
    for (end, &byte) in data.iter().enumerate() {
        counts[byte as usize] += 1;
        while counts[byte as usize] > 1 {
            counts[data[start] as usize] -= 1;
            start += 1;
        }
        if end + 1 - start == len {
            return Ok(end + 1);
        }
    }
    Err(no_marker(len))
}

fn letter_slot(byte: u8) -> Result<usize, SolveError> {
    if byte.is_ascii_lowercase() {
        Ok((byte - b'a') as usize)
    } else {
        Err(SolveError::InvalidInput(format!(
            "expected a lowercase signal, found '{}'",
            byte as char
        )))
    }
}

/// Same window, but over a 26-slot count table; lowercase input only.
pub fn find_marker_small_list(input: &str, len: usize) -> Result<usize, SolveError> {
    let data = signal(input);
    let mut counts = [0u32; 26];
    let mut start = 0;
    for (end, &byte) in data.iter().enumerate() {
        let slot = letter_slot(byte)?;
        counts[slot] += 1;
        while counts[slot] > 1 {
            counts[letter_slot(data[start])?] -= 1;
            start += 1;
        }
        if end + 1 - start == len {
            return Ok(end + 1);
        }
    }
    Err(no_marker(len))
}

fn test_bit(bits: &[u8; 32], byte: u8) -> bool {
    bits[(byte >> 3) as usize] & (1 << (byte & 7)) != 0
}

fn set_bit(bits: &mut [u8; 32], byte: u8) {
    bits[(byte >> 3) as usize] |= 1 << (byte & 7);
}

fn clear_bit(bits: &mut [u8; 32], byte: u8) {
    bits[(byte >> 3) as usize] &= !(1 << (byte & 7));
}

/// 256-bit seen-set; the window shrinks before a duplicate byte enters,
/// so membership alone replaces the counts.
pub fn find_marker_bit_fields(input: &str, len: usize) -> Result<usize, SolveError> {
    let data = signal(input);
    let mut seen = [0u8; 32];
    let mut start = 0;
    for (end, &byte) in data.iter().enumerate() {
        while test_bit(&seen, byte) {
            clear_bit(&mut seen, data[start]);
            start += 1;
        }
        set_bit(&mut seen, byte);
        if end + 1 - start == len {
            return Ok(end + 1);
        }
    }
    Err(no_marker(len))
}

fn letter_bit(byte: u8) -> Result<u32, SolveError> {
    Ok(1 << letter_slot(byte)?)
}

/// Parity mask over the fixed-width window. Duplicate letters cancel, so
/// a popcount equal to the window length means all letters are distinct.
/// Lowercase input only.
pub fn find_marker_xor(input: &str, len: usize) -> Result<usize, SolveError> {
    let data = signal(input);
    let mut mask = 0u32;
    for (index, &byte) in data.iter().enumerate() {
        mask ^= letter_bit(byte)?;
        if index >= len {
            mask ^= letter_bit(data[index - len])?;
        }
        if index + 1 >= len && mask.count_ones() as usize == len {
            return Ok(index + 1);
        }
    }
    Err(no_marker(len))
}

#[derive(RegisterSolution)]
#[solution(day = 6, part = 1)]
#[input(path = "inputs/day06.txt")]
#[input(path = "inputs/day06_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(find_marker(input, PACKET_MARKER)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 6, part = 2)]
#[input(path = "inputs/day06.txt")]
#[input(path = "inputs/day06_example.txt", kind = example, embedded)]
pub struct Part2;

impl Solution for Part2 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(find_marker(input, MESSAGE_MARKER)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 6, part = 2, variant = "small-list")]
#[input(path = "inputs/day06.txt")]
#[input(path = "inputs/day06_example.txt", kind = example, embedded)]
pub struct Part2SmallList;

impl Solution for Part2SmallList {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(find_marker_small_list(input, MESSAGE_MARKER)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 6, part = 2, variant = "bit-fields")]
#[input(path = "inputs/day06.txt")]
#[input(path = "inputs/day06_example.txt", kind = example, embedded)]
pub struct Part2BitFields;

impl Solution for Part2BitFields {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(find_marker_bit_fields(input, MESSAGE_MARKER)?.to_string())
    }
}

#[derive(RegisterSolution)]
#[solution(day = 6, part = 2, variant = "xor")]
#[input(path = "inputs/day06.txt")]
#[input(path = "inputs/day06_example.txt", kind = example, embedded)]
pub struct Part2Xor;

impl Solution for Part2Xor {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(find_marker_xor(input, MESSAGE_MARKER)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("inputs/day06_example.txt");

    // signal, packet marker, message marker
    const CASES: [(&str, usize, usize); 4] = [
        ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
        ("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
        ("nznrnfrfntjfmvfwmzdfjlvtqnbhcplsgvtgwmlnv", 10, 29),
        ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
    ];

    #[test]
    fn test_part1_example() {
        assert_eq!(find_marker(EXAMPLE, PACKET_MARKER).unwrap(), 7);
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(find_marker(EXAMPLE, MESSAGE_MARKER).unwrap(), 19);
    }

    #[test]
    fn test_additional_signals() {
        for (signal, packet, message) in CASES {
            assert_eq!(find_marker(signal, PACKET_MARKER).unwrap(), packet);
            assert_eq!(find_marker(signal, MESSAGE_MARKER).unwrap(), message);
        }
    }

    #[test]
    fn test_variants_match_on_example() {
        for finder in [find_marker, find_marker_small_list, find_marker_bit_fields, find_marker_xor] {
            assert_eq!(finder(EXAMPLE, MESSAGE_MARKER).unwrap(), 19);
        }
    }

    #[test]
    fn test_variants_match_on_additional_signals() {
        for (signal, _, message) in CASES {
            for finder in [find_marker_small_list, find_marker_bit_fields, find_marker_xor] {
                assert_eq!(finder(signal, MESSAGE_MARKER).unwrap(), message);
            }
        }
    }

    #[test]
    fn test_signal_without_marker() {
        assert!(matches!(
            find_marker("aabcaabc", PACKET_MARKER),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_lowercase_only_variants_reject_digits() {
        assert!(matches!(
            find_marker_small_list("abc123", PACKET_MARKER),
            Err(SolveError::InvalidInput(_))
        ));
        assert!(matches!(
            find_marker_xor("abc123", PACKET_MARKER),
            Err(SolveError::InvalidInput(_))
        ));
    }
}
