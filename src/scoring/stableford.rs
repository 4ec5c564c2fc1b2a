use super::types::Strokes;

/// Stableford points for one hole, keyed by strokes relative to par
pub fn stableford_points(strokes: Strokes, par: Strokes) -> i64 {
    match strokes.saturating_sub(par) {
        diff if diff <= -2 => 4, // eagle or better
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0, // double bogey or worse
    }
}
