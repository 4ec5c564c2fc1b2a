use serde::Serialize;
use std::collections::HashMap;

use crate::domain::{LeaderboardEntry, Player, TournamentFormat};

use super::types::{Medal, RankingPolicy, Strokes, TOTAL_PAR};

/// Leaderboard line with every derived value resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub rank: usize,
    pub player: Player,
    pub handicap: i64,
    pub gross: Option<Strokes>,
    pub net: Option<Strokes>,
    pub to_par: Option<Strokes>,
    pub medal: Option<Medal>,
}

/// Rank aggregate rows and derive net and to-par for display.
///
/// Handicaps come from the roster when the player is registered, since the
/// roster is refetched more eagerly than the aggregate. Gross totals are
/// measured against the full par of 72, and a gross of zero means the
/// player has not scored yet. Stableford tournaments still rank on gross
/// and show no to-par value.
pub fn compose_leaderboard(
    entries: &[LeaderboardEntry],
    roster: &[Player],
    format: TournamentFormat,
    policy: RankingPolicy,
) -> Vec<LeaderboardRow> {
    let players_by_id: HashMap<&str, &Player> =
        roster.iter().map(|p| (p.id.as_str(), p)).collect();

    order_entries(entries, policy)
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let player = players_by_id
                .get(entry.player.id.as_str())
                .copied()
                .unwrap_or(&entry.player);
            build_row(idx + 1, player, entry.total_gross_score, format)
        })
        .collect()
}

fn order_entries(entries: &[LeaderboardEntry], policy: RankingPolicy) -> Vec<&LeaderboardEntry> {
    let mut ordered: Vec<&LeaderboardEntry> = entries.iter().collect();
    if policy == RankingPolicy::SortByGross {
        // sort_by_key is stable, so ties keep gateway order
        ordered.sort_by_key(|e| (e.total_gross_score <= 0, e.total_gross_score));
    }
    ordered
}

fn build_row(rank: usize, player: &Player, gross: Strokes, format: TournamentFormat) -> LeaderboardRow {
    let scored = gross > 0;
    LeaderboardRow {
        rank,
        player: player.clone(),
        handicap: player.handicap,
        gross: scored.then_some(gross),
        net: scored.then(|| gross - player.handicap),
        to_par: (scored && !format.is_stableford()).then(|| gross - TOTAL_PAR),
        medal: Medal::for_rank(rank),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, handicap: i64) -> Player {
        Player {
            id: id.to_string(),
            name: format!("Player {id}"),
            handicap,
            created_at: 0,
        }
    }

    fn entry(id: &str, handicap: i64, gross: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            player: player(id, handicap),
            total_gross_score: gross,
        }
    }

    #[test]
    fn test_stroke_play_rows() {
        let entries = vec![entry("a", 5, 70), entry("b", 10, 75)];
        let rows = compose_leaderboard(&entries, &[], TournamentFormat::StrokePlay, RankingPolicy::TrustGateway);

        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].player.id, "a");
        assert_eq!(rows[0].net, Some(65));
        assert_eq!(rows[0].to_par, Some(-2));
        assert_eq!(rows[0].medal, Some(Medal::Gold));

        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].net, Some(65));
        assert_eq!(rows[1].to_par, Some(3));
        assert_eq!(rows[1].medal, Some(Medal::Silver));
    }

    #[test]
    fn test_unscored_row_has_no_values() {
        let entries = vec![entry("a", 5, 0)];
        let rows = compose_leaderboard(&entries, &[], TournamentFormat::StrokePlay, RankingPolicy::TrustGateway);

        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].gross, None);
        assert_eq!(rows[0].net, None);
        assert_eq!(rows[0].to_par, None);
    }

    #[test]
    fn test_stableford_hides_to_par() {
        let entries = vec![entry("a", 5, 80)];
        let rows = compose_leaderboard(&entries, &[], TournamentFormat::Stableford, RankingPolicy::TrustGateway);

        assert_eq!(rows[0].gross, Some(80));
        assert_eq!(rows[0].net, Some(75));
        assert_eq!(rows[0].to_par, None);
    }

    #[test]
    fn test_roster_handicap_takes_precedence() {
        let entries = vec![entry("a", 5, 80)];
        let roster = vec![player("a", 12)];
        let rows = compose_leaderboard(&entries, &roster, TournamentFormat::StrokePlay, RankingPolicy::TrustGateway);

        assert_eq!(rows[0].handicap, 12);
        assert_eq!(rows[0].net, Some(68));
    }

    #[test]
    fn test_trust_gateway_keeps_order() {
        let entries = vec![entry("a", 0, 80), entry("b", 0, 70)];
        let rows = compose_leaderboard(&entries, &[], TournamentFormat::StrokePlay, RankingPolicy::TrustGateway);

        let ids: Vec<&str> = rows.iter().map(|r| r.player.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_sort_by_gross_is_stable_and_puts_unscored_last() {
        let entries = vec![
            entry("zero", 0, 0),
            entry("high", 0, 80),
            entry("tie1", 0, 70),
            entry("tie2", 0, 70),
        ];
        let rows = compose_leaderboard(&entries, &[], TournamentFormat::StrokePlay, RankingPolicy::SortByGross);

        let ids: Vec<&str> = rows.iter().map(|r| r.player.id.as_str()).collect();
        assert_eq!(ids, vec!["tie1", "tie2", "high", "zero"]);
        assert_eq!(rows[3].rank, 4);
        assert_eq!(rows[3].medal, None);
    }
}
