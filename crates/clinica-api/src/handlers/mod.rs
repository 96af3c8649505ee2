//! Route handlers, grouped by resource.
//!
//! | Method | Path | Auth | Notes |
//! |--------|------|------|-------|
//! | `GET`  | `/` | no | liveness |
//! | `POST` | `/register` | no | body: [`users::RegisterBody`] |
//! | `POST` | `/login` | no | returns `{"access_token": ...}` |
//! | `GET`  | `/profile` | yes | caller's profile, never the password hash |
//! | `GET`  | `/centers` | yes | all centers |
//! | `POST` | `/date/create` | yes | body: [`dates::SlotBody`] |
//! | `GET`  | `/date/getByUser` | yes | caller's appointments |
//! | `POST` | `/date/delete` | yes | body: [`dates::SlotBody`] |

pub mod centers;
pub mod dates;
pub mod users;

use axum::{Json, extract::FromRequest};
use serde_json::{Value, json};

use crate::error::ApiError;

/// A JSON request body whose rejections are reported as `{"msg": ...}` 400s.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

pub(crate) fn msg(text: &str) -> Json<Value> { Json(json!({ "msg": text })) }
