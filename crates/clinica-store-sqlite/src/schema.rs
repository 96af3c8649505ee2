//! SQL schema for the Clinica SQLite store.
//!
//! Executed once at connection startup. The store then records
//! [`SCHEMA_VERSION`] in `PRAGMA user_version`.

pub const SCHEMA_VERSION: i64 = 1;

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Reference data, seeded once.
CREATE TABLE IF NOT EXISTS centers (
    name     TEXT PRIMARY KEY,
    address  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    username       TEXT NOT NULL,
    password_hash  TEXT NOT NULL,   -- argon2 PHC string
    name           TEXT NOT NULL DEFAULT '',
    lastname       TEXT NOT NULL DEFAULT '',
    email          TEXT NOT NULL DEFAULT '',
    phone          TEXT NOT NULL DEFAULT '',
    birth_date     TEXT NOT NULL DEFAULT '',
    CONSTRAINT unique_username UNIQUE (username)
);

-- One row per booked slot. Rows are inserted and deleted, never updated.
-- The unique constraint is the only guard against double booking.
CREATE TABLE IF NOT EXISTS appointments (
    appointment_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    owner           TEXT NOT NULL,
    center          TEXT NOT NULL REFERENCES centers(name),
    day             INTEGER NOT NULL,  -- days from the Common Era
    hour            TEXT NOT NULL,     -- HH:MM:SS
    raw_date        TEXT NOT NULL,     -- DD/MM/YYYY HH:MM:SS
    CONSTRAINT unique_date_per_center UNIQUE (day, hour, center)
);

CREATE INDEX IF NOT EXISTS appointments_owner_idx ON appointments(owner);
";
