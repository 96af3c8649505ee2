//! The `ClinicStore` trait.
//!
//! Implemented by storage backends (e.g. `clinica-store-sqlite`). The ledger
//! and the HTTP layer depend on this abstraction, never on a concrete backend.

use std::future::Future;

use crate::{
  appointment::{Appointment, Insertion},
  center::Center,
  slot::Slot,
  user::User,
};

/// Abstraction over a Clinica storage backend.
///
/// Uniqueness of `(day, hour, center)` for appointments and of `username` for
/// users must be enforced atomically by the backend: the insert methods report
/// [`Insertion::Conflict`] instead of racing a separate existence check.
pub trait ClinicStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Centers ───────────────────────────────────────────────────────────

  /// All centers, in seeding order.
  fn list_centers(
    &self,
  ) -> impl Future<Output = Result<Vec<Center>, Self::Error>> + Send + '_;

  /// Look up a center by its exact name.
  fn get_center(
    &self,
    name: String,
  ) -> impl Future<Output = Result<Option<Center>, Self::Error>> + Send + '_;

  /// Insert `centers` if and only if no center exists yet. Returns the
  /// number of rows inserted.
  fn seed_centers(
    &self,
    centers: Vec<Center>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Users ─────────────────────────────────────────────────────────────

  fn insert_user(
    &self,
    user: User,
  ) -> impl Future<Output = Result<Insertion<User>, Self::Error>> + Send + '_;

  fn get_user(
    &self,
    username: String,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  // ── Appointments ──────────────────────────────────────────────────────

  /// Atomically insert `appointment` unless its slot is already booked.
  fn insert_appointment(
    &self,
    appointment: Appointment,
  ) -> impl Future<Output = Result<Insertion<Appointment>, Self::Error>> + Send + '_;

  /// Appointments owned by `owner`, in insertion order.
  fn appointments_by_owner(
    &self,
    owner: String,
  ) -> impl Future<Output = Result<Vec<Appointment>, Self::Error>> + Send + '_;

  /// Delete the appointment at `slot` if it is owned by `owner`. Returns
  /// `false` when nothing matched.
  fn delete_appointment(
    &self,
    owner: String,
    slot: Slot,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
