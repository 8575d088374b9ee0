//! Temperature log ingest.
//!
//! Turns a text log with one line per sample into validated [`Sample`]s.
//!
//! - blank lines and `#` comments are skipped
//! - readings are whitespace-separated fields; the first number-like token in
//!   each field is the reading, so decorated values such as `+61.0°C` or
//!   `+61.0°C/141.8°F` are accepted as-is
//! - every data line must carry exactly the expected number of readings

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Sample;
use crate::error::AppError;

static READING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?").expect("valid reading regex")
});

/// A line that could not be turned into a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    /// 1-based line number in the input.
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Extract one reading per whitespace-separated field.
///
/// A field without any number-like token is an error.
pub fn parse_line(line: &str) -> Result<Vec<f64>, String> {
    line.split_whitespace()
        .map(|field| -> Result<f64, String> {
            let token = READING
                .find(field)
                .ok_or_else(|| format!("no reading in field '{field}'"))?
                .as_str();
            token
                .parse::<f64>()
                .map_err(|e| format!("invalid reading '{token}': {e}"))
        })
        .collect()
}

/// Parse samples from any buffered reader.
pub fn parse_samples<R: BufRead>(reader: R, channels: usize) -> Result<Vec<Sample>, AppError> {
    let mut samples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line
            .map_err(|e| AppError::new(2, format!("Failed to read line {line_no}: {e}")))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let readings = parse_line(trimmed).map_err(|message| bad_line(line_no, message))?;
        if readings.len() != channels {
            return Err(bad_line(
                line_no,
                format!("expected {channels} readings, found {}", readings.len()),
            ));
        }

        samples.push(Sample {
            index: samples.len(),
            readings,
        });
    }

    if samples.is_empty() {
        return Err(AppError::new(3, "Input contains no samples."));
    }

    Ok(samples)
}

/// Open and parse a temperature log.
pub fn load_samples(path: &Path, channels: usize) -> Result<Vec<Sample>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open input '{}': {e}", path.display())))?;
    parse_samples(BufReader::new(file), channels)
}

fn bad_line(line: usize, message: String) -> AppError {
    AppError::new(3, LineError { line, message }.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_decorated_readings() {
        let input = "61.0 63.0 50.0 58.0\n+80.0°C +81.0°C +78.0°C +79.0°C\n";
        let samples = parse_samples(input.as_bytes(), 4).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].readings, vec![61.0, 63.0, 50.0, 58.0]);
        assert_eq!(samples[1].index, 1);
        assert_eq!(samples[1].readings, vec![80.0, 81.0, 78.0, 79.0]);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let input = "# cores\n\n1 2 3 4\n   \n5 6 7 8\n";
        let samples = parse_samples(input.as_bytes(), 4).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].index, 1);
    }

    #[test]
    fn rejects_ragged_lines_with_line_number() {
        let input = "1 2 3 4\n5 6 7\n";
        let err = parse_samples(input.as_bytes(), 4).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "line 2: expected 4 readings, found 3");
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse_samples("\n# nothing\n".as_bytes(), 4).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn parse_line_handles_signs_and_exponents() {
        assert_eq!(parse_line("-1.5 +2 3e1 .5").unwrap(), vec![-1.5, 2.0, 30.0, 0.5]);
    }

    #[test]
    fn only_first_number_in_a_field_counts() {
        let samples = parse_samples("+61.0°C/141.8°F 62 63 64\n".as_bytes(), 4).unwrap();
        assert_eq!(samples[0].readings, vec![61.0, 62.0, 63.0, 64.0]);
    }

    #[test]
    fn field_without_number_is_rejected() {
        let err = parse_samples("1 2 3 4\n1 2 n/a 4\n".as_bytes(), 4).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "line 2: no reading in field 'n/a'");
    }

    #[test]
    fn channel_count_is_configurable() {
        let samples = parse_samples("1 2\n3 4\n".as_bytes(), 2).unwrap();
        assert_eq!(samples[1].readings, vec![3.0, 4.0]);
    }
}
