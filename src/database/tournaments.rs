use anyhow::{bail, Context, Result};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use crate::domain::{Time, Tournament, TournamentFormat, TournamentStatus, TournamentUpdate};

const TOURNAMENT_COLUMNS: &str = "id, name, date, location, format, status, created_at";

pub fn insert_tournament(
    conn: &mut DbConn,
    id: &str,
    name: &str,
    date: Time,
    format: TournamentFormat,
    location: &str,
    created_at: Time,
) -> Result<()> {
    if find_by_id(conn, id)?.is_some() {
        bail!("Tournament already exists: {}", id);
    }

    let sql = "INSERT INTO tournaments (id, name, date, location, format, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
    conn.execute(
        sql,
        params![
            id,
            name,
            date,
            location,
            format.as_str(),
            TournamentStatus::Upcoming.as_str(),
            created_at
        ],
    )
    .context("Failed to insert new tournament")?;
    Ok(())
}

pub fn update_tournament(conn: &mut DbConn, id: &str, update: &TournamentUpdate) -> Result<()> {
    let sql = "UPDATE tournaments SET \
               name = COALESCE(?2, name), \
               date = COALESCE(?3, date), \
               format = COALESCE(?4, format), \
               status = COALESCE(?5, status), \
               location = COALESCE(?6, location) \
               WHERE id = ?1";
    let changed = conn
        .execute(
            sql,
            params![
                id,
                update.name,
                update.date,
                update.format.map(|f| f.as_str()),
                update.status.map(|s| s.as_str()),
                update.location
            ],
        )
        .context("Failed to update tournament")?;

    if changed == 0 {
        bail!("Tournament not found: {}", id);
    }
    Ok(())
}

/// Registrations and scores go with the tournament
pub fn delete_tournament(conn: &mut DbConn, id: &str) -> Result<()> {
    let changed = conn
        .execute("DELETE FROM tournaments WHERE id = ?1", params![id])
        .context("Failed to delete tournament")?;

    if changed == 0 {
        bail!("Tournament not found: {}", id);
    }
    Ok(())
}

pub(crate) fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        date: row.get(2)?,
        location: row.get(3)?,
        format: parse_text_column(row, 4)?,
        status: parse_text_column(row, 5)?,
        created_at: row.get(6)?,
    })
}

fn parse_text_column<T>(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub fn find_by_id(conn: &mut DbConn, id: &str) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

/// Most recent date first
pub fn list_all(conn: &mut DbConn) -> Result<Vec<Tournament>> {
    let sql = format!("SELECT {TOURNAMENT_COLUMNS} FROM tournaments ORDER BY date DESC, created_at DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
