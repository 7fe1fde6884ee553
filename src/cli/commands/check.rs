//! Offline movie validation command handler

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use std::path::Path;

use crate::config::Config;
use crate::models::MovieInput;
use crate::validation::{MovieValidator, ValidationContext};

/// Prints the validation report for a movie file. Returns whether it is valid.
pub fn cmd_check_movie(
    config: &Config,
    file: &Path,
    today: Option<NaiveDate>,
) -> anyhow::Result<bool> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read movie file: {}", file.display()))?;
    let input: MovieInput = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse movie file: {}", file.display()))?;

    let ctx = match today {
        Some(date) => ValidationContext::at(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))),
        None => ValidationContext::current(),
    };

    let validator = MovieValidator::new(&config.validation);
    let input = validator.prepare(input);
    let report = validator.validate(&input, &ctx);

    if report.is_valid() {
        println!("✓ {} is valid", file.display());
        return Ok(true);
    }

    println!("✗ {} has {} problem(s):", file.display(), report.len());
    for (field, messages) in report.errors() {
        let label = if field.is_empty() {
            "(record)"
        } else {
            field.as_str()
        };
        for message in messages {
            println!("  {}: {}", label, message);
        }
    }

    Ok(false)
}
