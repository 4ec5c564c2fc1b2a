use super::types::Strokes;

/// Placeholder for a value that does not exist yet
pub const NO_VALUE: &str = "—";

pub fn format_total(value: Option<Strokes>) -> String {
    value.map_or_else(|| NO_VALUE.to_string(), |v| v.to_string())
}

/// "E" for even, explicit sign otherwise
pub fn format_to_par(value: Option<Strokes>) -> String {
    match value {
        None => NO_VALUE.to_string(),
        Some(0) => "E".to_string(),
        Some(v) if v > 0 => format!("+{v}"),
        Some(v) => v.to_string(),
    }
}
