//! Scoped ownership of the process-wide SQLite connection.
//!
//! # Responsibility
//! - Acquire the connection once (`connect` is idempotent).
//! - Release it exactly once, either explicitly through `disconnect` or
//!   implicitly when the gateway is dropped.
//!
//! # Invariants
//! - At most one live connection per gateway.
//! - Callers can only reach the connection while connected.

use super::{open_db, open_db_in_memory, DbError, DbResult};
use log::{error, info, warn};
use rusqlite::Connection;
use std::path::PathBuf;

/// Where the gateway opens its database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTarget {
    File(PathBuf),
    Memory,
}

impl DbTarget {
    fn mode(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Memory => "memory",
        }
    }
}

/// Owner of the single database connection used by one command run.
#[derive(Debug)]
pub struct Gateway {
    target: DbTarget,
    conn: Option<Connection>,
}

impl Gateway {
    /// Creates a disconnected gateway for `target`.
    pub fn new(target: DbTarget) -> Self {
        Self { target, conn: None }
    }

    pub fn target(&self) -> &DbTarget {
        &self.target
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Opens the target database unless a connection is already live.
    ///
    /// # Errors
    /// - Returns the open/migration failure; the gateway stays disconnected.
    pub fn connect(&mut self) -> DbResult<()> {
        if self.conn.is_some() {
            return Ok(());
        }

        let conn = match &self.target {
            DbTarget::File(path) => open_db(path)?,
            DbTarget::Memory => open_db_in_memory()?,
        };
        self.conn = Some(conn);
        info!(
            "event=gateway_connect module=db status=ok mode={}",
            self.target.mode()
        );
        Ok(())
    }

    /// Closes the live connection.
    ///
    /// Disconnecting a gateway that is not connected is a no-op.
    ///
    /// # Errors
    /// - Returns the SQLite close failure. The handle is released either way.
    pub fn disconnect(&mut self) -> DbResult<()> {
        let Some(conn) = self.conn.take() else {
            warn!("event=gateway_disconnect module=db status=skipped reason=not_connected");
            return Ok(());
        };

        match conn.close() {
            Ok(()) => {
                info!(
                    "event=gateway_disconnect module=db status=ok mode={}",
                    self.target.mode()
                );
                Ok(())
            }
            Err((_conn, err)) => {
                error!(
                    "event=gateway_disconnect module=db status=error mode={} error={}",
                    self.target.mode(),
                    err
                );
                Err(DbError::Sqlite(err))
            }
        }
    }

    /// Borrows the live connection.
    ///
    /// # Errors
    /// - `DbError::NotConnected` before `connect` or after `disconnect`.
    pub fn connection(&self) -> DbResult<&Connection> {
        self.conn.as_ref().ok_or(DbError::NotConnected)
    }
}

impl Drop for Gateway {
    fn drop(&mut self) {
        if self.conn.is_some() {
            // Error already logged by disconnect.
            let _ = self.disconnect();
        }
    }
}
