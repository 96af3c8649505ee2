//! Appointments — one booked slot owned by one user.
//!
//! Appointments are never mutated. A booking creates the record and a
//! cancellation by its owner removes it.

use serde::{Deserialize, Serialize};

use crate::slot::{Slot, SlotDate};

/// A booked slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
  /// Username of the patient who booked the slot.
  pub owner:    String,
  pub center:   String,
  pub day:      i32,
  pub hour:     String,
  /// The booking date as `DD/MM/YYYY HH:MM:SS`.
  pub raw_date: String,
}

impl Appointment {
  pub fn new(owner: impl Into<String>, center: impl Into<String>, date: SlotDate) -> Self {
    Self {
      owner:    owner.into(),
      center:   center.into(),
      day:      date.day,
      hour:     date.hour,
      raw_date: date.raw,
    }
  }

  /// The uniqueness key this appointment occupies.
  pub fn slot(&self) -> Slot {
    Slot {
      day:    self.day,
      hour:   self.hour.clone(),
      center: self.center.clone(),
    }
  }
}

/// Result of an insert guarded by a uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<T> {
  Inserted(T),
  /// A row with the same unique key already exists; nothing was written.
  Conflict,
}
