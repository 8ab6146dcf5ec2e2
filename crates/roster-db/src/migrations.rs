use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

/// Sample users inserted into an empty table, in this order.
pub const SEED_USERS: [(&str, &str); 3] = [
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
    ("Bob Johnson", "bob@example.com"),
];

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;

    let tx = conn.unchecked_transaction()?;
    let count: i64 = tx.query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))?;
    if count == 0 {
        let mut stmt = tx.prepare("INSERT INTO users (name, email) VALUES (?1, ?2)")?;
        for (name, email) in SEED_USERS {
            stmt.execute((name, email))?;
        }
        drop(stmt);
        info!("Seeded {} sample users", SEED_USERS.len());
    }
    tx.commit()?;

    info!("Database migrations complete");
    Ok(())
}
