/// Key/value settings queries.
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

pub fn query_setting(key: &str, conn: &Connection) -> Result<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

pub fn upsert_setting(key: &str, value: &str, conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        (key, value),
    )?;
    Ok(())
}

pub fn query_settings(conn: &Connection) -> Result<Vec<(String, String)>> {
    let mut stmt = conn.prepare("SELECT key, value FROM settings ORDER BY key")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    let mut settings = Vec::new();
    for row in rows {
        settings.push(row?);
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        super::super::migrations::run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_missing_setting_is_none() {
        assert_eq!(query_setting("theme", &conn()).unwrap(), None);
    }

    #[test]
    fn test_upsert_overwrites() {
        let conn = conn();
        upsert_setting("theme", "light", &conn).unwrap();
        upsert_setting("theme", "dark", &conn).unwrap();
        upsert_setting("color_format", "hsl", &conn).unwrap();
        assert_eq!(query_setting("theme", &conn).unwrap().as_deref(), Some("dark"));
        assert_eq!(
            query_settings(&conn).unwrap(),
            vec![
                ("color_format".to_string(), "hsl".to_string()),
                ("theme".to_string(), "dark".to_string()),
            ]
        );
    }
}
