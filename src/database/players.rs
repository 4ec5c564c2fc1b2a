use anyhow::{bail, Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use crate::domain::{Player, Time};

const PLAYER_COLUMNS: &str = "id, name, handicap, created_at";

pub fn insert_player(
    conn: &mut DbConn,
    id: &str,
    name: &str,
    handicap: i64,
    created_at: Time,
) -> Result<()> {
    if find_by_id(conn, id)?.is_some() {
        bail!("Player already exists: {}", id);
    }

    let sql = "INSERT INTO players (id, name, handicap, created_at) VALUES (?1, ?2, ?3, ?4)";
    conn.execute(sql, params![id, name, handicap, created_at])
        .context("Failed to insert new player")?;
    Ok(())
}

pub fn update_player(
    conn: &mut DbConn,
    id: &str,
    name: Option<&str>,
    handicap: Option<i64>,
) -> Result<()> {
    let sql = "UPDATE players SET name = COALESCE(?2, name), handicap = COALESCE(?3, handicap) WHERE id = ?1";
    let changed = conn
        .execute(sql, params![id, name, handicap])
        .context("Failed to update player")?;

    if changed == 0 {
        bail!("Player not found: {}", id);
    }
    Ok(())
}

/// Registrations and scores go with the player
pub fn delete_player(conn: &mut DbConn, id: &str) -> Result<()> {
    let changed = conn
        .execute("DELETE FROM players WHERE id = ?1", params![id])
        .context("Failed to delete player")?;

    if changed == 0 {
        bail!("Player not found: {}", id);
    }
    Ok(())
}

pub(crate) fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        handicap: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: &str) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY name COLLATE NOCASE, id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
