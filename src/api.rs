//! REST API for card validation.
//!
//! The router lives in the library so integration tests can drive it with
//! `tower::ServiceExt::oneshot`; the `card-validation-server` binary wires
//! it to a listener with CORS and request tracing.
//!
//! # Contract
//!
//! `POST /card/credit/validate` takes four string fields (owner, number,
//! date, cvv). When every field is valid the response is `200 OK` with the
//! numeric payment system code as the body (10 = Visa, 20 = MasterCard,
//! 30 = American Express). Otherwise the response is `400 Bad Request`
//! with a per-field error map: empty fields report `"<Field> is required"`,
//! present-but-invalid fields report `"Wrong <field>"`.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::cvc::validate_cvc;
use crate::detect::payment_system_type;
use crate::issue_date::{is_valid_issue_date_at, MonthYear};
use crate::mask::mask_string;
use crate::number::is_valid_number;
use crate::owner::is_valid_owner;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Validation API",
        version = "0.1.0",
        description = "Validates payment card input (owner, number, issue date, CVC) and reports the detected payment system.",
        license(name = "MIT")
    ),
    tags(
        (name = "Validation", description = "Credit card validation"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(validate_credit_card, health),
    components(schemas(CreditCardRequest, ValidationProblem, HealthResponse))
)]
struct ApiDoc;

/// A credit card validation request.
#[derive(Deserialize, ToSchema)]
#[schema(example = json!({
    "owner": "Will Smith",
    "number": "4111111111111111",
    "date": "03/2030",
    "cvv": "123"
}))]
pub struct CreditCardRequest {
    /// Cardholder name: 1-3 space-separated alphabetic words
    pub owner: String,
    /// Card number, digits only
    pub number: String,
    /// Issue date as MM/YY or MM/YYYY; current month or later
    pub date: String,
    /// Card verification code, 3 or 4 digits
    pub cvv: String,
}

/// Per-field validation errors.
#[derive(Serialize, ToSchema)]
#[schema(example = json!({"errors": {"number": ["Wrong number"]}}))]
pub struct ValidationProblem {
    /// Field name mapped to its error messages
    #[schema(value_type = Object)]
    pub errors: BTreeMap<&'static str, Vec<&'static str>>,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

/// Validate a credit card
///
/// Returns the numeric payment system code on success.
#[utoipa::path(
    post,
    path = "/card/credit/validate",
    request_body = CreditCardRequest,
    responses(
        (status = 200, description = "Card is valid; body is the payment system code", body = u16),
        (status = 400, description = "One or more fields failed validation", body = ValidationProblem)
    ),
    tag = "Validation"
)]
async fn validate_credit_card(
    Json(req): Json<CreditCardRequest>,
) -> Result<Json<u16>, (StatusCode, Json<ValidationProblem>)> {
    let mut errors: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();

    if req.owner.is_empty() {
        errors.entry("owner").or_default().push("Owner is required");
    } else if !is_valid_owner(&req.owner) {
        errors.entry("owner").or_default().push("Wrong owner");
    }

    if req.number.is_empty() {
        errors
            .entry("number")
            .or_default()
            .push("Number is required");
    } else if !is_valid_number(&req.number) {
        errors.entry("number").or_default().push("Wrong number");
    }

    if req.date.is_empty() {
        errors.entry("date").or_default().push("Date is required");
    } else if !is_valid_issue_date_at(&req.date, MonthYear::now()) {
        errors.entry("date").or_default().push("Wrong date");
    }

    if req.cvv.is_empty() {
        errors.entry("cvv").or_default().push("Cvv is required");
    } else if !validate_cvc(&req.cvv) {
        errors.entry("cvv").or_default().push("Wrong cvv");
    }

    if !errors.is_empty() {
        tracing::debug!(
            number = %mask_string(&req.number),
            fields = errors.len(),
            "card rejected"
        );
        return Err((StatusCode::BAD_REQUEST, Json(ValidationProblem { errors })));
    }

    // The number passed validation, so classification cannot miss; a miss
    // here would be a contract violation between the two stages
    match payment_system_type(&req.number) {
        Ok(system) => {
            tracing::debug!(
                number = %mask_string(&req.number),
                system = %system,
                "card accepted"
            );
            Ok(Json(system.code()))
        }
        Err(_) => {
            let mut errors = BTreeMap::new();
            errors.insert("number", vec!["Wrong number"]);
            Err((StatusCode::BAD_REQUEST, Json(ValidationProblem { errors })))
        }
    }
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Builds the API router with all routes and the Swagger UI mounted.
pub fn router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/card/credit/validate", post(validate_credit_card))
        .route("/health", get(health))
}
