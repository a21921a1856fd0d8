//! Output formatting for results, listings, and benchmark reports

use std::time::Duration;

use aoc_runner::{BenchPhase, BenchReport, InputSpec, SolutionEntry};
use itertools::Itertools;

/// Format a duration for display
pub fn format_duration(d: Duration) -> String {
    let micros = d.as_secs_f64() * 1_000_000.0;
    if micros < 1000.0 {
        format!("{micros:.1}µs")
    } else if micros < 1_000_000.0 {
        format!("{:.2}ms", micros / 1000.0)
    } else {
        format!("{:.2}s", micros / 1_000_000.0)
    }
}

/// Print one solution result. Single-line answers print inline; multi-line
/// answers (the day 10 CRT image) print as an indented block.
pub fn print_result(label: &str, answer: &str, elapsed: Duration) {
    let duration = format_duration(elapsed);
    if answer.contains('\n') {
        println!("{label} [{duration}]:");
        for line in answer.lines() {
            println!("    {line}");
        }
    } else {
        println!("{label}: {answer} [{duration}]");
    }
}

/// Print the closing summary after a multi-solution run
pub fn print_summary(count: usize, total: Duration) {
    println!();
    println!("--- Summary ---");
    println!("Solutions run: {count}");
    println!("Total solve time: {}", format_duration(total));
}

pub fn print_no_match() {
    println!("No solutions match the requested day/part/variant.");
}

/// Print the registry tree, grouped by day and part. Variants print as
/// `+ name` lines under their part; a part with no canonical solution is
/// marked. With `show_inputs`, each solution's registered inputs follow it.
pub fn print_solutions(entries: &[&SolutionEntry], show_inputs: bool) {
    for (day, day_entries) in &entries.iter().chunk_by(|entry| entry.day()) {
        println!("day {day:02}");
        for (part, part_entries) in &day_entries.chunk_by(|entry| entry.part()) {
            let part_entries: Vec<_> = part_entries.collect();
            if part_entries.iter().any(|entry| !entry.is_variant()) {
                println!("  part {part}");
            } else {
                println!("  part {part} (variants only)");
            }
            for entry in part_entries {
                if let Some(variant) = entry.variant() {
                    println!("    + {variant}");
                }
                if show_inputs {
                    for (index, spec) in entry.inputs().iter().enumerate() {
                        println!("      {}", describe_input(index, spec));
                    }
                }
            }
        }
    }
}

/// One-line description of a registered input
pub fn describe_input(index: usize, spec: &InputSpec) -> String {
    let name = spec.name.map(|name| format!(" '{name}'")).unwrap_or_default();
    let source = if spec.is_embedded() { "embedded" } else { "file" };
    let default = if spec.default { " (default)" } else { "" };
    let description = spec
        .description
        .map(|text| format!(": {text}"))
        .unwrap_or_default();
    format!(
        "[{index}] {}{name}, {source} {}{default}{description}",
        spec.kind, spec.path
    )
}

pub fn print_bench_start(label: &str, origin: &str) {
    println!("Benchmarking {label} against {origin}");
}

pub fn print_bench_report(report: &BenchReport) {
    match report.warmup {
        Some(phase) => println!("    Warmup: {}", describe_phase(&phase)),
        None => println!("    Warmup was disabled and skipped"),
    }
    println!("    Sample: {}", describe_phase(&report.sample));
    println!("    Average of {} per run", format_duration(report.average()));
}

fn describe_phase(phase: &BenchPhase) -> String {
    format!(
        "{} rounds over {}",
        phase.rounds,
        format_duration(phase.elapsed)
    )
}

#[cfg(test)]
mod tests {
    use aoc_runner::{InputKind, InputSource};

    use super::*;

    #[test]
    fn test_format_duration_thresholds() {
        assert_eq!(format_duration(Duration::ZERO), "0.0µs");
        assert_eq!(format_duration(Duration::from_micros(123)), "123.0µs");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999.00ms");
        assert_eq!(format_duration(Duration::from_secs(2)), "2.00s");
        assert_eq!(format_duration(Duration::from_millis(61500)), "61.50s");
    }

    #[test]
    fn test_describe_input_full() {
        let spec = InputSpec {
            path: "inputs/day09_example_large.txt",
            kind: InputKind::Example,
            name: Some("large"),
            description: Some("second example from the puzzle text"),
            source: InputSource::Embedded("R 5\n"),
            default: true,
        };
        assert_eq!(
            describe_input(1, &spec),
            "[1] example 'large', embedded inputs/day09_example_large.txt (default): \
             second example from the puzzle text"
        );
    }

    #[test]
    fn test_describe_input_minimal() {
        let spec = InputSpec {
            path: "inputs/day01.txt",
            kind: InputKind::Standard,
            name: None,
            description: None,
            source: InputSource::OnDisk,
            default: false,
        };
        assert_eq!(describe_input(0, &spec), "[0] standard, file inputs/day01.txt");
    }

    #[test]
    fn test_describe_phase() {
        let phase = BenchPhase {
            rounds: 12,
            elapsed: Duration::from_millis(30),
        };
        assert_eq!(describe_phase(&phase), "12 rounds over 30.00ms");
    }
}
