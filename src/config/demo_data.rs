//! Demo roster and rounds used to bootstrap an empty gateway

use crate::domain::TournamentFormat;

#[derive(Debug, Clone)]
pub struct DemoPlayer {
    pub name: &'static str,
    pub handicap: i64,
}

impl DemoPlayer {
    pub const fn new(name: &'static str, handicap: i64) -> Self {
        Self { name, handicap }
    }
}

#[derive(Debug, Clone)]
pub struct DemoTournament {
    pub name: &'static str,
    pub location: &'static str,
    pub format: TournamentFormat,
    /// Offset of the tournament date from today
    pub days_from_now: i64,
}

/// Strokes per hole starting at hole 1
#[derive(Debug, Clone)]
pub struct DemoRound {
    pub player: &'static str,
    pub strokes: &'static [i64],
}

pub fn get_demo_players() -> Vec<DemoPlayer> {
    vec![
        DemoPlayer::new("James Wilson", 12),
        DemoPlayer::new("Sarah Mitchell", 8),
        DemoPlayer::new("Tom Bradley", 18),
        DemoPlayer::new("Emma Clarke", 5),
        DemoPlayer::new("Michael Torres", 22),
        DemoPlayer::new("Lisa Park", 14),
        DemoPlayer::new("David Chen", 3),
        DemoPlayer::new("Rachel Adams", 16),
    ]
}

pub fn championship() -> DemoTournament {
    DemoTournament {
        name: "Summer Club Championship",
        location: "Pebble Beach Golf Links",
        format: TournamentFormat::StrokePlay,
        days_from_now: 0,
    }
}

pub fn stableford_monthly() -> DemoTournament {
    DemoTournament {
        name: "Stableford Monthly",
        location: "Augusta National",
        format: TournamentFormat::Stableford,
        days_from_now: 14,
    }
}

pub fn spring_open() -> DemoTournament {
    DemoTournament {
        name: "Spring Open",
        location: "St Andrews Links",
        format: TournamentFormat::StrokePlay,
        days_from_now: -30,
    }
}

/// Front nine in progress, every demo player registered
pub fn championship_rounds() -> Vec<DemoRound> {
    vec![
        DemoRound { player: "David Chen", strokes: &[4, 3, 4, 5, 3, 4, 4, 3, 4] },
        DemoRound { player: "Emma Clarke", strokes: &[4, 4, 5, 4, 4, 3, 5, 4, 4] },
        DemoRound { player: "Sarah Mitchell", strokes: &[4, 4, 5, 4, 5, 4, 4, 3, 5] },
        DemoRound { player: "James Wilson", strokes: &[5, 4, 5, 5, 4, 5, 4, 4, 5] },
        DemoRound { player: "Lisa Park", strokes: &[5, 5, 4, 5, 4, 5, 5, 4, 5] },
        DemoRound { player: "Tom Bradley", strokes: &[5, 5, 6, 5, 5, 5, 5, 4, 6] },
        DemoRound { player: "Rachel Adams", strokes: &[5, 5, 6, 5, 5, 6, 5, 4, 5] },
        DemoRound { player: "Michael Torres", strokes: &[6, 5, 6, 6, 5, 6, 5, 5, 6] },
    ]
}

/// Full rounds for the six players who entered the completed event
pub fn spring_open_rounds() -> Vec<DemoRound> {
    vec![
        DemoRound { player: "James Wilson", strokes: &[5, 4, 5, 5, 4, 5, 4, 4, 5, 5, 4, 5, 5, 4, 5, 4, 4, 5] },
        DemoRound { player: "Sarah Mitchell", strokes: &[4, 4, 5, 4, 5, 4, 4, 3, 5, 4, 4, 5, 4, 4, 4, 4, 3, 5] },
        DemoRound { player: "Tom Bradley", strokes: &[5, 5, 6, 5, 5, 5, 5, 4, 6, 5, 5, 6, 5, 5, 5, 5, 4, 6] },
        DemoRound { player: "Emma Clarke", strokes: &[4, 4, 4, 4, 4, 3, 5, 4, 4, 4, 4, 4, 4, 3, 4, 5, 4, 4] },
        DemoRound { player: "Michael Torres", strokes: &[6, 5, 6, 6, 5, 6, 5, 5, 6, 6, 5, 6, 5, 5, 6, 5, 5, 6] },
        DemoRound { player: "Lisa Park", strokes: &[5, 5, 4, 5, 4, 5, 5, 4, 5, 5, 5, 4, 5, 4, 5, 5, 4, 5] },
    ]
}
