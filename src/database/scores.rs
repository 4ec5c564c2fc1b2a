use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use crate::domain::{Score, Time};

/// One row per hole; recording again replaces id, strokes and timestamp
pub fn upsert_score(
    conn: &mut DbConn,
    id: &str,
    tournament_id: &str,
    player_id: &str,
    hole: i64,
    strokes: i64,
    created_at: Time,
) -> Result<()> {
    let sql = "INSERT INTO scores (id, tournament_id, player_id, hole, strokes, created_at) \
               VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
               ON CONFLICT (tournament_id, player_id, hole) DO UPDATE SET \
               id = excluded.id, strokes = excluded.strokes, created_at = excluded.created_at";

    conn.execute(sql, params![id, tournament_id, player_id, hole, strokes, created_at])
        .with_context(|| format!("Failed to record score for hole {}", hole))?;
    Ok(())
}

fn parse_score_row(row: &rusqlite::Row) -> rusqlite::Result<Score> {
    Ok(Score {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        player_id: row.get(2)?,
        hole: row.get(3)?,
        strokes: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn scores_for_player(conn: &mut DbConn, tournament_id: &str, player_id: &str) -> Result<Vec<Score>> {
    let sql = "SELECT id, tournament_id, player_id, hole, strokes, created_at FROM scores \
               WHERE tournament_id = ?1 AND player_id = ?2 ORDER BY hole";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id, player_id], parse_score_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query scores")?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection, players, setup::initialize_schema, tournaments};
    use crate::domain::TournamentFormat;

    #[test]
    fn test_recording_same_hole_overwrites() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        initialize_schema(&mut conn).unwrap();
        tournaments::insert_tournament(&mut conn, "t1", "Spring Open", 0, TournamentFormat::StrokePlay, "St Andrews", 0).unwrap();
        players::insert_player(&mut conn, "p1", "Lisa Park", 14, 0).unwrap();

        upsert_score(&mut conn, "s1", "t1", "p1", 3, 6, 1).unwrap();
        upsert_score(&mut conn, "s2", "t1", "p1", 3, 4, 2).unwrap();

        let scores = scores_for_player(&mut conn, "t1", "p1").unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].id, "s2");
        assert_eq!(scores[0].strokes, 4);
    }

    #[test]
    fn test_score_for_unknown_tournament_fails() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        initialize_schema(&mut conn).unwrap();
        players::insert_player(&mut conn, "p1", "Lisa Park", 14, 0).unwrap();

        assert!(upsert_score(&mut conn, "s1", "ghost", "p1", 1, 4, 0).is_err());
    }
}
