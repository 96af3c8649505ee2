//! Registration, login and profile.

use axum::{Json, extract::State};
use clinica_core::{
  appointment::Insertion,
  store::ClinicStore,
  user::{Profile, User},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
  AppState,
  auth::{AuthUser, hash_password, issue_token, verify_password},
  error::ApiError,
  handlers::{JsonBody, msg},
};

/// `GET /`
pub async fn root() -> Json<Value> { msg("Clinica API is running") }

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
  pub username: String,
  pub password: String,
  #[serde(default)]
  pub name:     String,
  #[serde(default)]
  pub lastname: String,
  #[serde(default)]
  pub email:    String,
  #[serde(default)]
  pub phone:    String,
  /// Birth date, `DD/MM/YYYY`.
  #[serde(default)]
  pub date:     String,
}

/// `POST /register`
pub async fn register<S>(
  State(state): State<AppState<S>>,
  JsonBody(body): JsonBody<RegisterBody>,
) -> Result<Json<Value>, ApiError>
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  let username = body.username.trim().to_owned();
  if username.is_empty() || body.password.is_empty() {
    return Err(ApiError::BadRequest("Username and password are required".to_owned()));
  }

  let user = User {
    username:      username.clone(),
    password_hash: hash_password(&body.password)?,
    profile:       Profile {
      name:       body.name,
      lastname:   body.lastname,
      email:      body.email,
      phone:      body.phone,
      birth_date: body.date,
    },
  };

  match state.store.insert_user(user).await.map_err(ApiError::store)? {
    Insertion::Inserted(_) => {
      tracing::info!(%username, "user registered");
      Ok(msg("User registered successfully"))
    }
    Insertion::Conflict => Err(ApiError::BadRequest("Username already exists".to_owned())),
  }
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub username: String,
  pub password: String,
}

/// `POST /login`
pub async fn login<S>(
  State(state): State<AppState<S>>,
  JsonBody(body): JsonBody<LoginBody>,
) -> Result<Json<Value>, ApiError>
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  let user = state
    .store
    .get_user(body.username.trim().to_owned())
    .await
    .map_err(ApiError::store)?;

  match user {
    Some(user) if verify_password(&body.password, &user.password_hash) => {
      let token = issue_token(&state.config, &user.username)?;
      Ok(Json(json!({ "access_token": token })))
    }
    _ => {
      tracing::warn!(username = %body.username, "rejected login");
      Err(ApiError::Unauthorized("Bad username or password".to_owned()))
    }
  }
}

/// Response of `GET /profile`.
#[derive(Debug, Serialize)]
pub struct ProfileView {
  pub username: String,
  pub name:     String,
  pub lastname: String,
  pub email:    String,
  pub phone:    String,
  pub date:     String,
}

/// `GET /profile`
pub async fn profile<S>(
  State(state): State<AppState<S>>,
  AuthUser(username): AuthUser,
) -> Result<Json<ProfileView>, ApiError>
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  let user = state
    .store
    .get_user(username.clone())
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("user {username} not found")))?;

  let Profile { name, lastname, email, phone, birth_date } = user.profile;
  Ok(Json(ProfileView {
    username: user.username,
    name,
    lastname,
    email,
    phone,
    date: birth_date,
  }))
}
