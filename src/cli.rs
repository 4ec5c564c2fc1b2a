use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::{TournamentFormat, TournamentStatus};

#[derive(Parser, Debug)]
#[command(author, version, about = "Golf tournament manager")]
pub struct Cli {
    /// Talk to a running server at GATEWAY_URL instead of the local database
    #[arg(long, global = true)]
    pub remote: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the HTTP API over the local database
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Load demo players, tournaments and scores into an empty database
    Seed,
    /// List players
    Players {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add a player
    AddPlayer {
        name: String,
        /// Whole number between 0 and 54
        handicap: String,
    },
    /// Show a player and the tournaments they are registered to
    Player {
        player_id: String,
    },
    /// Change a player's name or handicap
    EditPlayer {
        player_id: String,
        #[arg(short, long)]
        name: Option<String>,
        /// Whole number between 0 and 54
        #[arg(long)]
        handicap: Option<String>,
    },
    /// Delete a player with their registrations and scores
    DeletePlayer {
        player_id: String,
    },
    /// List tournaments, live ones first
    Tournaments {
        /// upcoming, in-progress or completed
        #[arg(short, long)]
        status: Option<TournamentStatus>,
    },
    /// Add a tournament
    AddTournament {
        name: String,
        /// YYYY-MM-DD
        date: String,
        location: String,
        /// stroke-play, match-play or stableford
        #[arg(short, long, default_value = "stroke-play")]
        format: TournamentFormat,
    },
    /// Set a tournament's status
    SetStatus {
        tournament_id: String,
        status: TournamentStatus,
    },
    /// Change any tournament field
    EditTournament {
        tournament_id: String,
        #[arg(short, long)]
        name: Option<String>,
        /// YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
        #[arg(short, long)]
        format: Option<TournamentFormat>,
        #[arg(short, long)]
        status: Option<TournamentStatus>,
    },
    /// Delete a tournament with its registrations and scores
    DeleteTournament {
        tournament_id: String,
    },
    /// Register a player to a tournament
    Register {
        tournament_id: String,
        player_id: String,
    },
    /// Remove a player from a tournament
    Unregister {
        tournament_id: String,
        player_id: String,
    },
    /// Record strokes for one hole
    Score {
        tournament_id: String,
        player_id: String,
        hole: i64,
        strokes: i64,
    },
    /// Show a player's scorecard
    Scorecard {
        tournament_id: String,
        player_id: String,
    },
    /// Show a tournament leaderboard (defaults to the live tournament)
    Leaderboard {
        tournament_id: Option<String>,
        /// Rank by gross instead of trusting the stored order
        #[arg(long)]
        sort: bool,
    },
    /// Summary of tournaments and players
    Dashboard,
    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_score_command() {
        let cli = Cli::try_parse_from(["golf", "score", "t1", "p1", "7", "4"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Score {
                tournament_id: "t1".into(),
                player_id: "p1".into(),
                hole: 7,
                strokes: 4,
            }
        );
        assert!(!cli.remote);
    }

    #[test]
    fn test_parses_enum_arguments() {
        let cli = Cli::try_parse_from([
            "golf", "add-tournament", "Open", "2026-05-01", "St Andrews", "--format", "stableford", "--remote",
        ])
        .unwrap();
        assert!(cli.remote);
        assert!(matches!(
            cli.command,
            Command::AddTournament { format: TournamentFormat::Stableford, .. }
        ));

        let cli = Cli::try_parse_from(["golf", "tournaments", "--status", "in-progress"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Tournaments { status: Some(TournamentStatus::InProgress) }
        );

        assert!(Cli::try_parse_from(["golf", "tournaments", "--status", "postponed"]).is_err());
    }

    #[test]
    fn test_parses_edit_commands() {
        let cli = Cli::try_parse_from(["golf", "edit-player", "p1", "--handicap", "9"]).unwrap();
        assert_eq!(
            cli.command,
            Command::EditPlayer {
                player_id: "p1".into(),
                name: None,
                handicap: Some("9".into()),
            }
        );

        let cli = Cli::try_parse_from([
            "golf", "edit-tournament", "t1", "--location", "Augusta", "--status", "completed",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::EditTournament {
                tournament_id: "t1".into(),
                name: None,
                date: None,
                location: Some("Augusta".into()),
                format: None,
                status: Some(TournamentStatus::Completed),
            }
        );

        let cli = Cli::try_parse_from(["golf", "unregister", "t1", "p1"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Unregister {
                tournament_id: "t1".into(),
                player_id: "p1".into(),
            }
        );
        assert!(Cli::try_parse_from(["golf", "delete-tournament"]).is_err());
    }
}
