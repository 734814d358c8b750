use log::info;
use rusqlite::{params, Connection, OptionalExtension};

use super::StoreError;

const SEED_OUTCOME_KEY: &str = "seed_outcome";

/// How a seed file was dealt with. Persisted so later runs know the decision
/// already happened, independent of whether the file still exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Imported { rows: usize },
    Discarded,
}

impl SeedOutcome {
    fn encode(self) -> String {
        match self {
            SeedOutcome::Imported { rows } => format!("imported:{rows}"),
            SeedOutcome::Discarded => "discarded".to_string(),
        }
    }

    fn decode(raw: &str) -> Option<Self> {
        if raw == "discarded" {
            return Some(SeedOutcome::Discarded);
        }
        raw.strip_prefix("imported:")
            .and_then(|rows| rows.parse().ok())
            .map(|rows| SeedOutcome::Imported { rows })
    }
}

/// The recorded seed decision, if any. An unreadable value still counts as a
/// completed decision.
pub fn seed_outcome(conn: &Connection) -> Result<Option<SeedOutcome>, StoreError> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM app_state WHERE key = ?1",
            params![SEED_OUTCOME_KEY],
            |row| row.get(0),
        )
        .optional()?;

    Ok(raw.map(|raw| SeedOutcome::decode(&raw).unwrap_or(SeedOutcome::Discarded)))
}

/// Persist the seed decision, replacing any earlier one.
pub fn record_seed_outcome(conn: &Connection, outcome: SeedOutcome) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![SEED_OUTCOME_KEY, outcome.encode()],
    )?;
    info!(
        "event=seed_outcome module=db status=ok value={}",
        outcome.encode()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    #[test]
    fn outcome_is_absent_until_recorded() {
        let conn = open_in_memory().unwrap();
        assert_eq!(seed_outcome(&conn).unwrap(), None);

        record_seed_outcome(&conn, SeedOutcome::Imported { rows: 2 }).unwrap();
        assert_eq!(
            seed_outcome(&conn).unwrap(),
            Some(SeedOutcome::Imported { rows: 2 })
        );

        record_seed_outcome(&conn, SeedOutcome::Discarded).unwrap();
        assert_eq!(seed_outcome(&conn).unwrap(), Some(SeedOutcome::Discarded));
    }
}
