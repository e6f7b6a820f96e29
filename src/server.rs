//! HTTP surface for the calculator.
//!
//! One POST route runs the full intake pipeline: structural checks on the
//! payload, field validation, the estimation engine, then background
//! delivery to the configured sinks. The response never waits on a sink.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::intake::{self, FieldError};
use crate::sinks::{DeliverySink, dispatch_all};
use crate::types::{
    CalculationResult, CompanyInfo, ContactInfo, GrowthGoals, Preferences, QuestionnaireResponse,
    TechAssessment,
};
use crate::engine;

/// Maximum JSON body size for calculate requests (256 KB).
const MAX_BODY_BYTES: usize = 256 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Shared handler state.
pub struct AppState {
    pub sinks: Vec<Arc<dyn DeliverySink>>,
}

/// Build the application router with state applied.
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/calculate", post(calculate_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the listener and serve until ctrl-c.
pub async fn run(addr: SocketAddr, state: Arc<AppState>) -> Result<(), ServerError> {
    let app = routes(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind { addr, source: e })?;

    tracing::info!("Calculator server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Calculator server shutting down");
        })
        .await
        .map_err(ServerError::Serve)?;

    Ok(())
}

/// Inbound payload. Every section is optional at the structural level so a
/// partially built payload gets a precise 400 instead of a serde soup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculateRequest {
    company_info: Option<CompanyInfo>,
    tech_assessment: Option<TechAssessment>,
    growth_goals: Option<GrowthGoals>,
    preferences: Option<Preferences>,
    contact_info: Option<ContactInfo>,
}

impl CalculateRequest {
    /// Assemble a full submission, or report which sections are missing.
    fn into_submission(self) -> Result<QuestionnaireResponse, Vec<&'static str>> {
        let mut missing = Vec::new();
        if self.company_info.is_none() {
            missing.push("companyInfo");
        }
        if self.tech_assessment.is_none() {
            missing.push("techAssessment");
        }
        if self.growth_goals.is_none() {
            missing.push("growthGoals");
        }
        if self.preferences.is_none() {
            missing.push("preferences");
        }
        if self.contact_info.is_none() {
            missing.push("contactInfo");
        }
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(QuestionnaireResponse {
            company_info: self.company_info.unwrap(),
            tech_assessment: self.tech_assessment.unwrap(),
            growth_goals: self.growth_goals.unwrap(),
            preferences: self.preferences.unwrap(),
            contact_info: self.contact_info.unwrap(),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculateResponse {
    success: bool,
    results: CalculationResult,
    tracking_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_sections: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    field_errors: Vec<FieldError>,
}

impl ErrorResponse {
    fn message(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            missing_sections: Vec::new(),
            field_errors: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        service: "growthcalc",
    })
}

async fn calculate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CalculateRequest>,
) -> axum::response::Response {
    let data = match req.into_submission() {
        Ok(data) => data,
        Err(missing) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    missing_sections: missing,
                    ..ErrorResponse::message("Incomplete submission")
                }),
            )
                .into_response();
        }
    };

    if let Err(failures) = intake::validate(&data) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                field_errors: failures.errors,
                ..ErrorResponse::message("Validation failed")
            }),
        )
            .into_response();
    }

    let results = engine::calculate(&data);
    let tracking_id = format!("calc-{}", Uuid::new_v4());

    tracing::info!(
        tracking_id,
        company = %data.company_info.company_name,
        industry = %data.company_info.industry.label(),
        "calculation completed"
    );

    // Delivery is best effort and must not delay the response.
    let sinks = state.sinks.clone();
    {
        let data = data.clone();
        let results = results.clone();
        let tracking_id = tracking_id.clone();
        tokio::spawn(async move {
            dispatch_all(&sinks, &data, &results, &tracking_id).await;
        });
    }

    (
        StatusCode::OK,
        Json(CalculateResponse {
            success: true,
            results,
            tracking_id,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::ServiceExt;

    use super::*;

    fn test_router() -> Router {
        routes(Arc::new(AppState { sinks: Vec::new() }))
    }

    fn post_json(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn complete_payload() -> serde_json::Value {
        serde_json::json!({
            "companyInfo": {
                "companyName": "Kona Coffee Co",
                "industry": "Retail & E-commerce",
                "companySize": "11-50",
                "location": "Big Island - Kona",
                "currentPainPoints": ["Manual processes"]
            },
            "techAssessment": {
                "totalMonthlyCost": 1500
            },
            "growthGoals": {
                "businessObjectives": ["Scale operations"],
                "techBarriers": ["Budget constraints"],
                "priorityAreas": ["Operations"]
            },
            "preferences": {
                "budgetRange": "under-5k",
                "timeline": "3-months",
                "implementationType": "guided",
                "decisionMakers": ["CEO/Owner"]
            },
            "contactInfo": {
                "firstName": "Kai",
                "lastName": "Nakamura",
                "email": "kai@example.com",
                "marketingConsent": true
            }
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_calculate_returns_results_and_tracking_id() {
        let response = test_router()
            .oneshot(post_json(complete_payload()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert!(
            body["trackingId"]
                .as_str()
                .unwrap()
                .starts_with("calc-")
        );
        assert!(body["results"]["financials"]["monthlyInvestment"].is_i64());
        assert!(body["results"]["recommendedSolution"]["title"].is_string());
        assert_eq!(body["results"]["timeline"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_missing_sections_get_400() {
        let mut payload = complete_payload();
        payload.as_object_mut().unwrap().remove("techAssessment");
        payload.as_object_mut().unwrap().remove("contactInfo");

        let response = test_router().oneshot(post_json(payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        let missing = body["missingSections"].as_array().unwrap();
        assert!(missing.contains(&serde_json::json!("techAssessment")));
        assert!(missing.contains(&serde_json::json!("contactInfo")));
    }

    #[tokio::test]
    async fn test_invalid_fields_get_422() {
        let mut payload = complete_payload();
        payload["contactInfo"]["email"] = serde_json::json!("not-an-email");
        payload["companyInfo"]["companyName"] = serde_json::json!("A");

        let response = test_router().oneshot(post_json(payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        let fields: Vec<&str> = body["fieldErrors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"contactInfo.email"));
        assert!(fields.contains(&"companyInfo.companyName"));
    }

    #[tokio::test]
    async fn test_unknown_enum_values_still_calculate() {
        let mut payload = complete_payload();
        payload["companyInfo"]["industry"] = serde_json::json!("Interplanetary Shipping");
        payload["preferences"]["budgetRange"] = serde_json::json!("unlimited");

        let response = test_router().oneshot(post_json(payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
    }
}
