//! SQLite sink that keeps the last snapshot across process restarts.
//!
//! The in-memory [`SnapshotStore`](crate::SnapshotStore) is the source of
//! truth during a session. This sink only mirrors it so a later session,
//! or a one-shot `winplace restore`, can pick it up.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::placement::Placement;
use crate::rect::Rect;
use crate::record::WindowRecord;
use crate::window::{Title, WindowHandle, WindowResult};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS window_positions (
    title      BLOB PRIMARY KEY,
    handle     INTEGER NOT NULL,
    placement  TEXT NOT NULL,
    rect_left  INTEGER NOT NULL,
    rect_top   INTEGER NOT NULL,
    rect_right INTEGER NOT NULL,
    rect_bottom INTEGER NOT NULL
)";

/// Durable copy of the last snapshot, keyed by title.
pub struct SnapshotSink {
    conn: Connection,
}

impl SnapshotSink {
    /// Opens (or creates) the database at `path`.
    pub fn open(path: &Path) -> WindowResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::init(Connection::open(path)?)
    }

    /// Opens a throwaway database that lives only as long as the sink.
    pub fn in_memory() -> WindowResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> WindowResult<Self> {
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// Replaces the stored snapshot with `records` in one transaction.
    ///
    /// Records sharing a title overwrite each other, last one wins.
    pub fn save<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a WindowRecord>,
    ) -> WindowResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM window_positions", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO window_positions
                 (title, handle, placement, rect_left, rect_top, rect_right, rect_bottom)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for record in records {
                let placement = serde_json::to_string(record.placement())?;
                let rect = record.rect();
                stmt.execute(params![
                    record.title().as_bytes(),
                    record.handle().0 as i64,
                    placement,
                    rect.left,
                    rect.top,
                    rect.right,
                    rect.bottom,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Loads the stored snapshot. Returns an empty list if nothing has
    /// been saved yet.
    pub fn load(&self) -> WindowResult<Vec<WindowRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT title, handle, placement, rect_left, rect_top, rect_right, rect_bottom
             FROM window_positions",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, Vec<u8>>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
                Rect::new(row.get(3)?, row.get(4)?, row.get(5)?, row.get(6)?),
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (title, handle, placement, rect) = row?;
            let placement: Placement = serde_json::from_str(&placement)?;
            records.push(WindowRecord::new(
                Title::new(title),
                WindowHandle(handle as usize),
                placement,
                rect,
            ));
        }
        Ok(records)
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}
