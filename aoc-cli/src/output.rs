//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    timings: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool, timings: bool) -> Self {
        Self {
            quiet,
            timings,
            start_time: Instant::now(),
        }
    }

    /// `--- 2023 Day 06 ---`, skipped in quiet mode
    pub fn print_header(&self, year: u16, day: u8) {
        if !self.quiet {
            println!("{}", format_header(year, day));
        }
    }

    /// Answers go to stdout, failures to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match self.format_result(result) {
            Ok(line) => println!("{line}"),
            Err(line) => eprintln!("{line}"),
        }
    }

    fn format_result(&self, result: &SolverResult) -> Result<String, String> {
        let answer = match &result.answer {
            Ok(answer) => answer,
            Err(e) if self.quiet => return Err(format!("Error: {e}")),
            Err(e) => return Err(format!("Part {}: Error - {e}", result.part)),
        };
        if self.quiet {
            return Ok(answer.clone());
        }
        if !self.timings {
            return Ok(format!("Part {}: {answer}", result.part));
        }
        let parse_timing = result
            .parse_duration
            .map(|d| format!("parse: {}, ", format_duration(d)))
            .unwrap_or_default();
        Ok(format!(
            "Part {}: {answer} ({parse_timing}solve: {})",
            result.part,
            format_duration(result.solve_duration)
        ))
    }

    /// Totals after all results, shown with `--timings`
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet || !self.timings {
            return;
        }
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results.iter().map(|r| r.solve_duration).sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, results.len() - successes);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

pub fn format_header(year: u16, day: u8) -> String {
    format!("--- {year} Day {day:02} ---")
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };
    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros as u128)
}

fn format_std_duration(d: std::time::Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputError, RunError};
    use proptest::prelude::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn result(part: u8, answer: Result<&str, RunError>) -> SolverResult {
        SolverResult {
            year: 2023,
            day: 6,
            part,
            answer: answer.map(String::from).map_err(Arc::new),
            parse_duration: Some(TimeDelta::microseconds(1500)),
            solve_duration: TimeDelta::microseconds(42),
        }
    }

    fn missing() -> RunError {
        RunError::Input(InputError::Missing {
            year: 2023,
            day: 6,
            dir: PathBuf::from("inputs"),
        })
    }

    #[test]
    fn test_header() {
        assert_eq!(format_header(2023, 6), "--- 2023 Day 06 ---");
        assert_eq!(format_header(2023, 21), "--- 2023 Day 21 ---");
    }

    #[test]
    fn test_plain_and_quiet_lines() {
        let plain = OutputFormatter::new(false, false);
        assert_eq!(plain.format_result(&result(1, Ok("288"))), Ok("Part 1: 288".into()));

        let quiet = OutputFormatter::new(true, true);
        assert_eq!(quiet.format_result(&result(2, Ok("71503"))), Ok("71503".into()));
        assert!(quiet.format_result(&result(2, Err(missing()))).unwrap_err().starts_with("Error: "));
    }

    #[test]
    fn test_timed_line() {
        let timed = OutputFormatter::new(false, true);
        assert_eq!(
            timed.format_result(&result(1, Ok("288"))),
            Ok("Part 1: 288 (parse: 1.50ms, solve: 42µs)".into())
        );
        let err = timed.format_result(&result(2, Err(missing()))).unwrap_err();
        assert!(err.starts_with("Part 2: Error - no input for 2023 day 06"), "{err}");
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::milliseconds(12)), "12.00ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    proptest! {
        #[test]
        fn prop_format_duration_has_one_unit(micros in -10_000_000_000i64..10_000_000_000) {
            let text = format_duration(TimeDelta::microseconds(micros));
            let unit = text.trim_start_matches(|c: char| c == '-' || c == '.' || c.is_ascii_digit());
            prop_assert!(["µs", "ms", "s"].contains(&unit), "{}", text);
            prop_assert_eq!(text.starts_with('-'), micros < 0);
        }
    }
}
