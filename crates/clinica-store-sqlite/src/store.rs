//! [`SqliteStore`] — the SQLite implementation of [`ClinicStore`].

use std::path::Path;

use clinica_core::{
  appointment::{Appointment, Insertion},
  center::Center,
  slot::Slot,
  store::ClinicStore,
  user::{Profile, User},
};
use rusqlite::{OptionalExtension as _, Row};

use crate::{
  Error, Result,
  schema::{SCHEMA, SCHEMA_VERSION},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Clinica store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    let found: i64 = self
      .conn
      .call(|conn| {
        let version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
        if version <= SCHEMA_VERSION {
          conn.execute_batch(SCHEMA)?;
          conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }
        Ok(version)
      })
      .await?;

    if found > SCHEMA_VERSION {
      return Err(Error::UnsupportedSchema { found, supported: SCHEMA_VERSION });
    }
    Ok(())
  }
}

/// `true` if `err` is a `UNIQUE` constraint violation.
fn is_unique_violation(err: &rusqlite::Error) -> bool {
  matches!(
    err,
    rusqlite::Error::SqliteFailure(e, _)
      if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

fn center_from_row(row: &Row<'_>) -> rusqlite::Result<Center> {
  Ok(Center {
    name:    row.get(0)?,
    address: row.get(1)?,
  })
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    username:      row.get(0)?,
    password_hash: row.get(1)?,
    profile:       Profile {
      name:       row.get(2)?,
      lastname:   row.get(3)?,
      email:      row.get(4)?,
      phone:      row.get(5)?,
      birth_date: row.get(6)?,
    },
  })
}

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
  Ok(Appointment {
    owner:    row.get(0)?,
    center:   row.get(1)?,
    day:      row.get(2)?,
    hour:     row.get(3)?,
    raw_date: row.get(4)?,
  })
}

// ─── ClinicStore impl ────────────────────────────────────────────────────────

impl ClinicStore for SqliteStore {
  type Error = Error;

  // ── Centers ───────────────────────────────────────────────────────────────

  async fn list_centers(&self) -> Result<Vec<Center>> {
    let centers = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT name, address FROM centers ORDER BY rowid")?;
        let rows = stmt
          .query_map([], center_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(centers)
  }

  async fn get_center(&self, name: String) -> Result<Option<Center>> {
    let center = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT name, address FROM centers WHERE name = ?1",
            rusqlite::params![name],
            center_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(center)
  }

  async fn seed_centers(&self, centers: Vec<Center>) -> Result<usize> {
    let inserted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let existing: i64 = tx.query_row("SELECT COUNT(*) FROM centers", [], |r| r.get(0))?;
        if existing > 0 {
          return Ok(0);
        }
        for center in &centers {
          tx.execute(
            "INSERT INTO centers (name, address) VALUES (?1, ?2)",
            rusqlite::params![center.name, center.address],
          )?;
        }
        tx.commit()?;
        Ok(centers.len())
      })
      .await?;
    Ok(inserted)
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn insert_user(&self, user: User) -> Result<Insertion<User>> {
    let outcome = self
      .conn
      .call(move |conn| {
        let res = conn.execute(
          "INSERT INTO users (
             username, password_hash, name, lastname, email, phone, birth_date
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            user.username,
            user.password_hash,
            user.profile.name,
            user.profile.lastname,
            user.profile.email,
            user.profile.phone,
            user.profile.birth_date,
          ],
        );
        match res {
          Ok(_) => Ok(Insertion::Inserted(user)),
          Err(e) if is_unique_violation(&e) => Ok(Insertion::Conflict),
          Err(e) => Err(e.into()),
        }
      })
      .await?;
    Ok(outcome)
  }

  async fn get_user(&self, username: String) -> Result<Option<User>> {
    let user = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT username, password_hash, name, lastname, email, phone, birth_date
             FROM users WHERE username = ?1",
            rusqlite::params![username],
            user_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(user)
  }

  // ── Appointments ──────────────────────────────────────────────────────────

  async fn insert_appointment(&self, appointment: Appointment) -> Result<Insertion<Appointment>> {
    let outcome = self
      .conn
      .call(move |conn| {
        let res = conn.execute(
          "INSERT INTO appointments (owner, center, day, hour, raw_date)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            appointment.owner,
            appointment.center,
            appointment.day,
            appointment.hour,
            appointment.raw_date,
          ],
        );
        match res {
          Ok(_) => Ok(Insertion::Inserted(appointment)),
          Err(e) if is_unique_violation(&e) => Ok(Insertion::Conflict),
          Err(e) => Err(e.into()),
        }
      })
      .await?;
    Ok(outcome)
  }

  async fn appointments_by_owner(&self, owner: String) -> Result<Vec<Appointment>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT owner, center, day, hour, raw_date
           FROM appointments
           WHERE owner = ?1
           ORDER BY appointment_id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![owner], appointment_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn delete_appointment(&self, owner: String, slot: Slot) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM appointments
           WHERE day = ?1 AND hour = ?2 AND center = ?3 AND owner = ?4",
          rusqlite::params![slot.day, slot.hour, slot.center, owner],
        )?;
        Ok(n > 0)
      })
      .await?;
    Ok(deleted)
  }
}
