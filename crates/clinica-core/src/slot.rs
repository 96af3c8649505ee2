//! Slot keys — the atomic bookable unit.
//!
//! A booking request carries a free-form date string. It is parsed once into a
//! [`SlotDate`], and combined with a center name into the [`Slot`] that the
//! storage layer keeps unique.

use chrono::{Datelike, NaiveDateTime};

use crate::{Error, Result};

/// The only accepted textual date format, e.g. `31/12/2025 10:00:00`.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

const HOUR_FORMAT: &str = "%H:%M:%S";

// ─── SlotDate ────────────────────────────────────────────────────────────────

/// A validated booking moment, split into its storage components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDate {
  /// Calendar date as days from the Common Era.
  pub day:  i32,
  /// Time of day, `HH:MM:SS`.
  pub hour: String,
  /// Canonical rendering in [`DATE_FORMAT`].
  pub raw:  String,
}

impl SlotDate {
  pub fn parse(input: &str) -> Result<Self> {
    let trimmed = input.trim();
    let moment = NaiveDateTime::parse_from_str(trimmed, DATE_FORMAT)
      .map_err(|_| Error::InvalidDateFormat(input.to_owned()))?;

    Ok(Self {
      day:  moment.date().num_days_from_ce(),
      hour: moment.format(HOUR_FORMAT).to_string(),
      raw:  moment.format(DATE_FORMAT).to_string(),
    })
  }
}

// ─── Slot ────────────────────────────────────────────────────────────────────

/// The uniqueness key of an appointment: `(day, hour, center)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
  pub day:    i32,
  pub hour:   String,
  pub center: String,
}

impl Slot {
  pub fn new(date: &SlotDate, center: impl Into<String>) -> Self {
    Self {
      day:    date.day,
      hour:   date.hour.clone(),
      center: center.into(),
    }
  }
}
