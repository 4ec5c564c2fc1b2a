use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::Score;

use super::stableford::stableford_points;
use super::types::{Hole, Strokes, HOLES_PER_ROUND, PAR_PER_HOLE};

/// Current strokes per hole for one player in one tournament
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoleScores {
    holes: BTreeMap<Hole, Strokes>,
}

impl HoleScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce fetched score rows; a later row for the same hole wins
    pub fn from_scores(scores: &[Score]) -> Self {
        let mut hole_scores = Self::new();
        for score in scores {
            hole_scores.set(score.hole, score.strokes);
        }
        hole_scores
    }

    pub fn set(&mut self, hole: Hole, strokes: Strokes) {
        self.holes.insert(hole, strokes);
    }

    pub fn get(&self, hole: Hole) -> Option<Strokes> {
        self.holes.get(&hole).copied()
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }
}

impl FromIterator<(Hole, Strokes)> for HoleScores {
    fn from_iter<I: IntoIterator<Item = (Hole, Strokes)>>(iter: I) -> Self {
        Self {
            holes: iter.into_iter().collect(),
        }
    }
}

/// One cell of the scorecard grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleView {
    pub hole: Hole,
    pub par: Strokes,
    pub strokes: Option<Strokes>,
    pub points: Option<i64>,
}

/// Round totals for a single player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub holes: Vec<HoleView>,
    pub holes_played: usize,
    pub gross_total: Strokes,
    pub stableford_total: i64,
    pub handicap: i64,
}

impl Scorecard {
    /// Aggregate holes 1 through 18; anything else is ignored
    pub fn compute(scores: &HoleScores, handicap: i64) -> Self {
        let holes: Vec<HoleView> = (1..=HOLES_PER_ROUND)
            .map(|hole| {
                let strokes = scores.get(hole);
                HoleView {
                    hole,
                    par: PAR_PER_HOLE,
                    strokes,
                    points: strokes.map(|s| stableford_points(s, PAR_PER_HOLE)),
                }
            })
            .collect();

        let played = holes.iter().filter_map(|h| h.strokes.zip(h.points));
        let (holes_played, gross_total, stableford_total) = played
            .fold((0, 0, 0), |(count, gross, points), (s, p)| {
                (count + 1, gross + s, points + p)
            });

        Self {
            holes,
            holes_played,
            gross_total,
            stableford_total,
            handicap,
        }
    }

    pub fn has_scores(&self) -> bool {
        self.holes_played > 0
    }

    pub fn gross(&self) -> Option<Strokes> {
        self.has_scores().then_some(self.gross_total)
    }

    pub fn net(&self) -> Option<Strokes> {
        self.has_scores().then(|| self.gross_total - self.handicap)
    }

    /// Relative to par of the holes actually played, not the full round
    pub fn to_par(&self) -> Option<Strokes> {
        self.has_scores()
            .then(|| self.gross_total - self.holes_played as Strokes * PAR_PER_HOLE)
    }

    pub fn front_nine(&self) -> &[HoleView] {
        &self.holes[..9]
    }

    pub fn back_nine(&self) -> &[HoleView] {
        &self.holes[9..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(hole: i64, strokes: i64) -> Score {
        Score {
            id: format!("s{hole}-{strokes}"),
            tournament_id: "t1".to_string(),
            player_id: "p1".to_string(),
            hole,
            strokes,
            created_at: 0,
        }
    }

    #[test]
    fn test_partial_round_totals() {
        let scores: HoleScores = [(1, 4), (2, 5), (3, 3)].into_iter().collect();
        let card = Scorecard::compute(&scores, 10);

        assert_eq!(card.holes_played, 3);
        assert_eq!(card.gross(), Some(12));
        assert_eq!(card.net(), Some(2));
        assert_eq!(card.to_par(), Some(0));
        assert_eq!(card.stableford_total, 6);
    }

    #[test]
    fn test_empty_round_has_no_values() {
        let card = Scorecard::compute(&HoleScores::new(), 12);

        assert_eq!(card.holes_played, 0);
        assert_eq!(card.gross(), None);
        assert_eq!(card.net(), None);
        assert_eq!(card.to_par(), None);
        assert_eq!(card.stableford_total, 0);
    }

    #[test]
    fn test_later_fetched_row_overwrites_hole() {
        let rows = vec![score(1, 6), score(2, 4), score(1, 3)];
        let scores = HoleScores::from_scores(&rows);

        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get(1), Some(3));
    }

    #[test]
    fn test_holes_outside_round_are_ignored() {
        let scores: HoleScores = [(0, 4), (1, 5), (19, 4)].into_iter().collect();
        let card = Scorecard::compute(&scores, 0);

        assert_eq!(card.holes_played, 1);
        assert_eq!(card.gross_total, 5);
        assert_eq!(card.to_par(), Some(1));
    }

    #[test]
    fn test_nines_split_the_grid() {
        let scores: HoleScores = [(9, 3), (10, 7)].into_iter().collect();
        let card = Scorecard::compute(&scores, 0);

        assert_eq!(card.front_nine().len(), 9);
        assert_eq!(card.back_nine().len(), 9);
        assert_eq!(card.front_nine()[8].points, Some(3));
        assert_eq!(card.back_nine()[0].hole, 10);
        assert_eq!(card.back_nine()[0].points, Some(0));
        assert_eq!(card.back_nine()[1].strokes, None);
    }
}
