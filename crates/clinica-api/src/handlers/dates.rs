//! Handlers for `/date/*` — thin wrappers over the [`Ledger`](clinica_core::ledger::Ledger).

use axum::{Json, extract::State};
use clinica_core::{appointment::Appointment, store::ClinicStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{AppState, auth::AuthUser, error::ApiError, handlers::{JsonBody, msg}};

/// Body of `POST /date/create` and `POST /date/delete`.
#[derive(Debug, Deserialize)]
pub struct SlotBody {
  pub center: String,
  /// `DD/MM/YYYY HH:MM:SS`
  pub date:   String,
}

/// One entry of `GET /date/getByUser`.
#[derive(Debug, Serialize)]
pub struct AppointmentView {
  pub date:   String,
  pub center: String,
  pub day:    i32,
  pub hour:   String,
}

impl From<Appointment> for AppointmentView {
  fn from(a: Appointment) -> Self {
    Self { date: a.raw_date, center: a.center, day: a.day, hour: a.hour }
  }
}

/// `POST /date/create`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  AuthUser(username): AuthUser,
  JsonBody(body): JsonBody<SlotBody>,
) -> Result<Json<Value>, ApiError>
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  let appt = state.ledger.create(&username, &body.center, &body.date).await?;
  tracing::info!(%username, center = %appt.center, date = %appt.raw_date, "appointment booked");
  Ok(msg("Date created successfully"))
}

/// `GET /date/getByUser`
pub async fn by_user<S>(
  State(state): State<AppState<S>>,
  AuthUser(username): AuthUser,
) -> Result<Json<Vec<AppointmentView>>, ApiError>
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  let appts = state.ledger.list_by_user(&username).await?;
  Ok(Json(appts.into_iter().map(AppointmentView::from).collect()))
}

/// `POST /date/delete`
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  AuthUser(username): AuthUser,
  JsonBody(body): JsonBody<SlotBody>,
) -> Result<Json<Value>, ApiError>
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  state.ledger.cancel(&username, &body.center, &body.date).await?;
  tracing::info!(%username, center = %body.center, date = %body.date, "appointment cancelled");
  Ok(msg("Date deleted successfully"))
}
