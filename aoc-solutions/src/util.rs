//! Shared parsing helpers for the day modules

use aoc_runner::SolveError;

/// Split input into blank-line separated blocks, tolerating CRLF endings.
pub fn blocks(input: &str) -> Vec<&str> {
    let trimmed = input.trim_end_matches(['\n', '\r']);
    let separator = if trimmed.contains("\r\n") {
        "\r\n\r\n"
    } else {
        "\n\n"
    };
    trimmed.split(separator).collect()
}

/// Parse a number, reporting the offending text on failure.
pub fn parse_num<T: std::str::FromStr>(text: &str) -> Result<T, SolveError> {
    text.trim()
        .parse()
        .map_err(|_| SolveError::InvalidInput(format!("expected a number, found '{text}'")))
}
