use axum::{Json, extract::State};
use clinica_core::{center::Center, store::ClinicStore};

use crate::{AppState, auth::AuthUser, error::ApiError};

/// `GET /centers`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  _user: AuthUser,
) -> Result<Json<Vec<Center>>, ApiError>
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  let centers = state.store.list_centers().await.map_err(ApiError::store)?;
  Ok(Json(centers))
}
