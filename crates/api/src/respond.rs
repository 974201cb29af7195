use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Optional JSONP callback name, taken from the query string.
#[derive(Deserialize, Debug, Default)]
pub struct CallbackParams {
    pub callback: Option<String>,
}

/// Plain JSON, or `callback(json);` when a callback name was supplied.
pub fn json_or_jsonp<T: Serialize>(params: &CallbackParams, payload: &T) -> Response {
    match &params.callback {
        Some(callback) => match serde_json::to_string(payload) {
            Ok(json) => (
                [(header::CONTENT_TYPE, "application/json")],
                format!("{callback}({json});"),
            )
                .into_response(),
            Err(_) => Json(payload).into_response(),
        },
        None => Json(payload).into_response(),
    }
}
