//! Error types for `clinica-core`.

use thiserror::Error;

/// Failures reported by the [`Ledger`](crate::ledger::Ledger).
///
/// None of these identify the user holding a slot.
#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid date format {0:?}, expected DD/MM/YYYY HH:MM:SS")]
  InvalidDateFormat(String),

  #[error("unknown center: {0}")]
  UnknownCenter(String),

  #[error("date already taken for this center")]
  SlotAlreadyTaken,

  #[error("date not found")]
  NotFound,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error.
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
