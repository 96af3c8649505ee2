//! Registered users.
//!
//! The ledger only ever sees a username; the remaining fields exist for the
//! profile endpoint.

/// A stored user account. Deliberately not `Serialize`: the password hash
/// must never reach a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
  pub profile:       Profile,
}

/// Personal details supplied at registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
  pub name:       String,
  pub lastname:   String,
  pub email:      String,
  pub phone:      String,
  /// Birth date as entered, `DD/MM/YYYY`.
  pub birth_date: String,
}
