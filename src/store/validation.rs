use crate::config::settings::ScoringSettings;
use crate::errors::{AppError, Result};
use crate::scoring::HOLES_PER_ROUND;

/// Trimmed text, rejected when blank
pub fn required_text<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(trimmed)
}

pub fn handicap(value: i64, settings: &ScoringSettings) -> Result<i64> {
    if !(settings.min_handicap..=settings.max_handicap).contains(&value) {
        return Err(AppError::validation(format!(
            "Handicap must be between {} and {}",
            settings.min_handicap, settings.max_handicap
        )));
    }
    Ok(value)
}

/// Parse free-form handicap input as typed into a form
pub fn parse_handicap(input: &str, settings: &ScoringSettings) -> Result<i64> {
    let value = input
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation("Handicap must be a whole number"))?;
    handicap(value, settings)
}

pub fn hole(value: i64) -> Result<i64> {
    if !(1..=HOLES_PER_ROUND).contains(&value) {
        return Err(AppError::validation(format!(
            "Hole must be between 1 and {}",
            HOLES_PER_ROUND
        )));
    }
    Ok(value)
}

pub fn strokes(value: i64, settings: &ScoringSettings) -> Result<i64> {
    if !(settings.min_strokes..=settings.max_strokes).contains(&value) {
        return Err(AppError::validation(format!(
            "Strokes must be between {} and {}",
            settings.min_strokes, settings.max_strokes
        )));
    }
    Ok(value)
}
