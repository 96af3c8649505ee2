//! Core types and the appointment ledger for the Clinica booking backend.
//!
//! This crate is deliberately free of HTTP and database dependencies. Storage
//! backends implement [`store::ClinicStore`]; the request layer drives the
//! [`ledger::Ledger`].

pub mod appointment;
pub mod center;
pub mod error;
pub mod ledger;
pub mod slot;
pub mod store;
pub mod user;

pub use error::{Error, Result};
