use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde_json::json;

/// Success envelope: `{"status": "success", "data": <payload>}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> Response<T> {
    fn parts(self) -> (StatusCode, T) {
        match self {
            Response::OK(data) => (StatusCode::OK, data),
            Response::Created(data) => (StatusCode::CREATED, data),
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        let (status, data) = self.parts();
        let body = json!({
            "status": "success",
            "data": data,
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let (status, data) = Response::OK(json!({"id": 1})).parts();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["id"], 1);

        let (status, _) = Response::Created(json!({})).parts();
        assert_eq!(status, StatusCode::CREATED);
    }
}
