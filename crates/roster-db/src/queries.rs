use crate::Database;
use crate::models::UserRow;
use anyhow::{Result, anyhow};
use roster_types::models::NewUser;
use rusqlite::{Connection, ErrorCode, Row};
use tracing::{info, warn};

/// Result of an insert: either the stored row or a rejected duplicate email.
#[derive(Debug)]
pub enum CreateOutcome {
    Created(UserRow),
    EmailTaken,
}

const USER_COLUMNS: &str = "id, name, email, created_at";

impl Database {
    pub fn list_users(&self) -> Result<Vec<UserRow>> {
        self.with_conn(query_users)
    }

    pub fn get_user(&self, id: i64) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_id(conn, id))
    }

    pub fn count_users(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))?;
            Ok(count)
        })
    }

    /// Inserts the user, then reads the row back so `id` and `created_at`
    /// are exactly what the store assigned. Both happen in one transaction;
    /// a rejected insert leaves nothing behind.
    pub fn create_user(&self, user: &NewUser) -> Result<CreateOutcome> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let inserted = tx.execute(
                "INSERT INTO users (name, email) VALUES (?1, ?2)",
                (&user.name, &user.email),
            );
            match inserted {
                Ok(_) => {}
                Err(e) if is_unique_violation(&e) => {
                    warn!("Rejected duplicate email {}", user.email);
                    return Ok(CreateOutcome::EmailTaken);
                }
                Err(e) => return Err(e.into()),
            }

            let id = tx.last_insert_rowid();
            let row = query_user_by_id(&tx, id)?
                .ok_or_else(|| anyhow!("User {} vanished after insert", id))?;
            tx.commit()?;

            info!("Created user {} <{}>", row.id, row.email);
            Ok(CreateOutcome::Created(row))
        })
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn map_user(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn query_users(conn: &Connection) -> Result<Vec<UserRow>> {
    // id breaks ties between rows created within the same second
    let mut stmt = conn.prepare(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt
        .query_map([], map_user)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_user_by_id(conn: &Connection, id: i64) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"))?;
    let row = stmt.query_row([id], map_user).optional()?;
    Ok(row)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
