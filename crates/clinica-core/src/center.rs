//! Medical centers — static reference data.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Center {
  pub name:    String,
  pub address: String,
}

impl Center {
  pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
    Self { name: name.into(), address: address.into() }
  }
}

/// The centers seeded into an empty store.
pub fn default_centers() -> Vec<Center> {
  vec![
    Center::new(
      "Centro de Salud Madrid Norte",
      "Calle de la Salud, 123, Madrid",
    ),
    Center::new(
      "Centro Médico Madrid Sur",
      "Avenida de la Medicina, 456, Madrid",
    ),
  ]
}
