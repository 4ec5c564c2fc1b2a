use anyhow::{bail, Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::players::{self, parse_player_row};
use super::tournaments::{self, parse_tournament_row};
use crate::domain::{LeaderboardEntry, Player, Tournament};

/// Registering an already registered pair is a no-op
pub fn register(conn: &mut DbConn, tournament_id: &str, player_id: &str) -> Result<()> {
    ensure_pair_exists(conn, tournament_id, player_id)?;

    let sql = "INSERT OR IGNORE INTO registrations (tournament_id, player_id) VALUES (?1, ?2)";
    conn.execute(sql, params![tournament_id, player_id])
        .context("Failed to register player")?;
    Ok(())
}

/// Removing an unregistered pair is a no-op; recorded scores are kept
pub fn remove(conn: &mut DbConn, tournament_id: &str, player_id: &str) -> Result<()> {
    let sql = "DELETE FROM registrations WHERE tournament_id = ?1 AND player_id = ?2";
    conn.execute(sql, params![tournament_id, player_id])
        .context("Failed to remove player from tournament")?;
    Ok(())
}

fn ensure_pair_exists(conn: &mut DbConn, tournament_id: &str, player_id: &str) -> Result<()> {
    if tournaments::find_by_id(conn, tournament_id)?.is_none() {
        bail!("Tournament not found: {}", tournament_id);
    }
    if players::find_by_id(conn, player_id)?.is_none() {
        bail!("Player not found: {}", player_id);
    }
    Ok(())
}

/// Roster in registration order
pub fn players_for_tournament(conn: &mut DbConn, tournament_id: &str) -> Result<Vec<Player>> {
    let sql = "SELECT p.id, p.name, p.handicap, p.created_at \
               FROM registrations r JOIN players p ON p.id = r.player_id \
               WHERE r.tournament_id = ?1 ORDER BY r.seq";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query tournament roster")?;

    Ok(rows)
}

pub fn tournaments_for_player(conn: &mut DbConn, player_id: &str) -> Result<Vec<Tournament>> {
    let sql = "SELECT t.id, t.name, t.date, t.location, t.format, t.status, t.created_at \
               FROM registrations r JOIN tournaments t ON t.id = r.tournament_id \
               WHERE r.player_id = ?1 ORDER BY t.date DESC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player_id], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query player tournaments")?;

    Ok(rows)
}

/// Gross total per registered player, scored players first, lowest gross
/// first, ties in registration order
pub fn leaderboard(conn: &mut DbConn, tournament_id: &str) -> Result<Vec<LeaderboardEntry>> {
    let sql = "SELECT p.id, p.name, p.handicap, p.created_at, COALESCE(SUM(s.strokes), 0) \
               FROM registrations r \
               JOIN players p ON p.id = r.player_id \
               LEFT JOIN scores s ON s.tournament_id = r.tournament_id AND s.player_id = r.player_id \
               WHERE r.tournament_id = ?1 \
               GROUP BY r.seq, p.id \
               ORDER BY (COALESCE(SUM(s.strokes), 0) = 0), COALESCE(SUM(s.strokes), 0) ASC, r.seq";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], |row| {
            Ok(LeaderboardEntry {
                player: parse_player_row(row)?,
                total_gross_score: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query tournament leaderboard")?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection, scores, setup::initialize_schema};
    use crate::domain::TournamentFormat;

    fn seeded_conn() -> DbConn {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        initialize_schema(&mut conn).unwrap();
        tournaments::insert_tournament(&mut conn, "t1", "Summer Club Championship", 0, TournamentFormat::StrokePlay, "Pebble Beach", 0).unwrap();
        players::insert_player(&mut conn, "a", "David Chen", 3, 0).unwrap();
        players::insert_player(&mut conn, "b", "Emma Clarke", 5, 0).unwrap();
        players::insert_player(&mut conn, "c", "Tom Bradley", 18, 0).unwrap();
        conn
    }

    #[test]
    fn test_register_twice_is_single_registration() {
        let mut conn = seeded_conn();
        register(&mut conn, "t1", "a").unwrap();
        register(&mut conn, "t1", "a").unwrap();

        assert_eq!(players_for_tournament(&mut conn, "t1").unwrap().len(), 1);
        assert_eq!(tournaments_for_player(&mut conn, "a").unwrap().len(), 1);
    }

    #[test]
    fn test_register_unknown_player_fails() {
        let mut conn = seeded_conn();
        assert!(register(&mut conn, "t1", "ghost").is_err());
        assert!(register(&mut conn, "ghost", "a").is_err());
    }

    #[test]
    fn test_remove_unregistered_is_noop() {
        let mut conn = seeded_conn();
        remove(&mut conn, "t1", "a").unwrap();
        assert!(players_for_tournament(&mut conn, "t1").unwrap().is_empty());
    }

    #[test]
    fn test_leaderboard_orders_scored_players_by_gross() {
        let mut conn = seeded_conn();
        for id in ["c", "b", "a"] {
            register(&mut conn, "t1", id).unwrap();
        }
        scores::upsert_score(&mut conn, "s1", "t1", "b", 1, 5, 0).unwrap();
        scores::upsert_score(&mut conn, "s2", "t1", "a", 1, 3, 0).unwrap();
        scores::upsert_score(&mut conn, "s3", "t1", "a", 2, 4, 0).unwrap();

        let board = leaderboard(&mut conn, "t1").unwrap();
        let rows: Vec<(&str, i64)> = board
            .iter()
            .map(|e| (e.player.id.as_str(), e.total_gross_score))
            .collect();
        assert_eq!(rows, vec![("b", 5), ("a", 7), ("c", 0)]);
    }

    #[test]
    fn test_deleting_player_drops_registration() {
        let mut conn = seeded_conn();
        register(&mut conn, "t1", "a").unwrap();
        players::delete_player(&mut conn, "a").unwrap();

        assert!(players_for_tournament(&mut conn, "t1").unwrap().is_empty());
    }
}
