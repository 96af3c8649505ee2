//! The appointment ledger — booking, listing and cancelling slots.
//!
//! The ledger validates and normalises requests, then leans on the store's
//! uniqueness constraint for slot exclusivity. It holds no state of its own
//! beyond the injected store handle.

use std::sync::Arc;

use crate::{
  Error, Result,
  appointment::{Appointment, Insertion},
  slot::{Slot, SlotDate},
  store::ClinicStore,
};

pub struct Ledger<S> {
  store: Arc<S>,
}

impl<S> Clone for Ledger<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: ClinicStore> Ledger<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Book the slot described by `center` and `date` for `username`.
  ///
  /// Fails with [`Error::InvalidDateFormat`], [`Error::UnknownCenter`] or
  /// [`Error::SlotAlreadyTaken`]. A failed booking writes nothing.
  pub async fn create(
    &self,
    username: &str,
    center: &str,
    date: &str,
  ) -> Result<Appointment> {
    let date = SlotDate::parse(date)?;
    self.require_center(center).await?;

    let appointment = Appointment::new(username, center, date);
    match self
      .store
      .insert_appointment(appointment)
      .await
      .map_err(Error::store)?
    {
      Insertion::Inserted(booked) => Ok(booked),
      Insertion::Conflict => Err(Error::SlotAlreadyTaken),
    }
  }

  /// Every appointment owned by `username`, oldest booking first.
  pub async fn list_by_user(&self, username: &str) -> Result<Vec<Appointment>> {
    self
      .store
      .appointments_by_owner(username.to_owned())
      .await
      .map_err(Error::store)
  }

  /// Cancel `username`'s booking of the slot described by `center` and
  /// `date`.
  ///
  /// A slot booked by someone else is reported as [`Error::NotFound`], the
  /// same as a slot nobody booked.
  pub async fn cancel(&self, username: &str, center: &str, date: &str) -> Result<()> {
    let date = SlotDate::parse(date)?;
    let slot = Slot::new(&date, center);

    let deleted = self
      .store
      .delete_appointment(username.to_owned(), slot)
      .await
      .map_err(Error::store)?;

    if deleted { Ok(()) } else { Err(Error::NotFound) }
  }

  async fn require_center(&self, center: &str) -> Result<()> {
    if center.trim().is_empty() {
      return Err(Error::UnknownCenter(center.to_owned()));
    }
    self
      .store
      .get_center(center.to_owned())
      .await
      .map_err(Error::store)?
      .map(|_| ())
      .ok_or_else(|| Error::UnknownCenter(center.to_owned()))
  }
}
