//! HTTP prediction backend
//!
//! Talks to the HOA prediction service:
//! - `GET /predict?lat=..&lon=..` → `{"hoa_probability": 73.5, "features_used": {..}}`
//!   or `{"error": "..."}` when no parcel covers the point
//! - `GET /` → `{"message": "..."}` liveness check

use crate::config::BackendConfig;
use crate::constants::api::{PREDICT_PATH, USER_AGENT};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::predict::{Outcome, PredictionBackend};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// reqwest-backed prediction client
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    client: reqwest::Client,
    base_url: String,
}

/// Backend root response
#[derive(Debug, Deserialize)]
struct HealthResponse {
    message: String,
}

impl HttpPredictor {
    /// Create a client for `base_url` with an optional request timeout
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `[backend]` config section
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::new(&config.url, config.timeout())
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend root for its status message
    pub async fn health(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Server(format!(
                "Backend returned status: {}",
                response.status()
            )));
        }

        let health: HealthResponse = response.json().await?;
        Ok(health.message)
    }

    /// Map a 2xx response body to an outcome
    fn interpret(body: &[u8]) -> Outcome {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => return Outcome::protocol(format!("invalid JSON body: {}", e)),
        };

        let Some(fields) = value.as_object() else {
            return Outcome::protocol(format!("expected a JSON object, got {}", value));
        };

        if fields.contains_key("error") {
            return Outcome::NotFound;
        }

        match fields.get("hoa_probability") {
            Some(p) => match p.as_f64() {
                Some(probability) => Outcome::Found { probability },
                None => Outcome::protocol(format!("hoa_probability is not a number: {}", p)),
            },
            None => Outcome::protocol("response has neither error nor hoa_probability"),
        }
    }
}

impl PredictionBackend for HttpPredictor {
    async fn lookup(&self, coords: Coordinates) -> Outcome {
        let url = format!("{}{}", self.base_url, PREDICT_PATH);

        let response = match self
            .client
            .get(&url)
            .query(&[("lat", coords.lat), ("lon", coords.lng)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Outcome::network(format!("request failed: {}", e)),
        };

        let status = response.status();
        if !status.is_success() {
            return Outcome::network(format!("backend returned status: {}", status));
        }

        match response.bytes().await {
            Ok(body) => Self::interpret(&body),
            Err(e) => Outcome::network(format!("failed to read body: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::FailureReason;
    use approx::assert_relative_eq;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    /// Serve `app` on an ephemeral port and return its base URL
    async fn spawn_backend(app: Router) -> String {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{}", addr)
    }

    /// Backend that only knows one parcel, at (33.25, -96.75)
    async fn predict_single_parcel(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        let lat = params.get("lat").map(String::as_str);
        let lon = params.get("lon").map(String::as_str);
        if lat == Some("33.25") && lon == Some("-96.75") {
            Json(serde_json::json!({
                "hoa_probability": 73.5,
                "features_used": { "situs_city": "Denton" }
            }))
        } else {
            Json(serde_json::json!({ "error": "No parcel found" }))
        }
    }

    #[test]
    fn test_interpret_found() {
        match HttpPredictor::interpret(br#"{"hoa_probability": 42.17}"#) {
            Outcome::Found { probability } => assert_relative_eq!(probability, 42.17),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_interpret_error_field_wins() {
        let outcome = HttpPredictor::interpret(br#"{"error": "No parcel found", "hoa_probability": 10}"#);
        assert_eq!(outcome, Outcome::NotFound);
    }

    #[test]
    fn test_interpret_any_error_field_is_not_found() {
        let bodies: [&[u8]; 3] = [
            br#"{"error": null, "hoa_probability": 10}"#,
            br#"{"error": "", "hoa_probability": 10}"#,
            br#"{"error": {"code": 404}}"#,
        ];
        for body in bodies {
            assert_eq!(HttpPredictor::interpret(body), Outcome::NotFound);
        }
    }

    #[test]
    fn test_interpret_unavailable_probability() {
        let outcome = HttpPredictor::interpret(br#"{"hoa_probability": "Unavailable"}"#);
        assert!(matches!(
            outcome,
            Outcome::Failed { reason: FailureReason::Protocol(_) }
        ));
    }

    #[test]
    fn test_interpret_invalid_json() {
        let outcome = HttpPredictor::interpret(b"<html>502 Bad Gateway</html>");
        assert!(matches!(
            outcome,
            Outcome::Failed { reason: FailureReason::Protocol(_) }
        ));

        let outcome = HttpPredictor::interpret(b"[1, 2, 3]");
        assert!(matches!(
            outcome,
            Outcome::Failed { reason: FailureReason::Protocol(_) }
        ));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let predictor = HttpPredictor::new("http://localhost:8000/", None).unwrap();
        assert_eq!(predictor.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_lookup_found_sends_lat_lon_query() {
        let app = Router::new().route("/predict", get(predict_single_parcel));
        let base = spawn_backend(app).await;
        let predictor = HttpPredictor::new(base, None).unwrap();

        let outcome = predictor.lookup(Coordinates::new(33.25, -96.75)).await;
        assert_eq!(outcome, Outcome::Found { probability: 73.5 });
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let app = Router::new().route(
            "/predict",
            get(|| async { Json(serde_json::json!({"error": "No parcel found"})) }),
        );
        let base = spawn_backend(app).await;
        let predictor = HttpPredictor::new(base, None).unwrap();

        let outcome = predictor.lookup(Coordinates::new(33.2, -96.9)).await;
        assert_eq!(outcome, Outcome::NotFound);
    }

    #[tokio::test]
    async fn test_lookup_server_error_is_network_failure() {
        let app = Router::new().route(
            "/predict",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
        );
        let base = spawn_backend(app).await;
        let predictor = HttpPredictor::new(base, None).unwrap();

        let outcome = predictor.lookup(Coordinates::new(33.2, -96.9)).await;
        match outcome {
            Outcome::Failed { reason: FailureReason::Network(detail) } => {
                assert!(detail.contains("500"), "detail: {}", detail)
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lookup_connection_refused() {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let predictor = HttpPredictor::new(format!("http://{}", addr), None).unwrap();
        let outcome = predictor.lookup(Coordinates::new(33.2, -96.9)).await;
        assert!(matches!(
            outcome,
            Outcome::Failed { reason: FailureReason::Network(_) }
        ));
    }

    #[tokio::test]
    async fn test_lookup_timeout_is_network_failure() {
        let app = Router::new().route(
            "/predict",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(serde_json::json!({"hoa_probability": 1}))
            }),
        );
        let base = spawn_backend(app).await;
        let predictor = HttpPredictor::new(base, Some(Duration::from_millis(100))).unwrap();

        let outcome = predictor.lookup(Coordinates::new(33.2, -96.9)).await;
        assert!(matches!(
            outcome,
            Outcome::Failed { reason: FailureReason::Network(_) }
        ));
    }

    #[tokio::test]
    async fn test_health() {
        let app = Router::new().route(
            "/",
            get(|| async {
                Json(serde_json::json!({"message": "HOA Prediction Backend is running!"}))
            }),
        );
        let base = spawn_backend(app).await;
        let predictor = HttpPredictor::new(base, None).unwrap();

        let message = predictor.health().await.unwrap();
        assert_eq!(message, "HOA Prediction Backend is running!");
    }
}
