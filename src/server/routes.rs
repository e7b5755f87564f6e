//! HTTP route handlers

use super::form::{ManualInputForm, FORM_PAGE};
use crate::fetch::DocumentFetcher;
use crate::model::{MarketInputs, ValuationResult};
use crate::service::{ApiResponse, FairValueService, ScrapedValuation};
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Form, State,
    },
    response::{Html, Json},
};
use serde::Serialize;
use std::sync::Arc;

type SharedService<F> = State<Arc<FairValueService<F>>>;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
}

/// Liveness message
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "ES fair value service is running".to_string(),
    })
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
    })
}

/// Scraped inputs, unvalued
pub async fn fetch_data<F: DocumentFetcher>(
    State(service): SharedService<F>,
) -> Json<ApiResponse<MarketInputs>> {
    Json(service.fetch_raw_inputs().await.into())
}

/// Fair value from scraped inputs
pub async fn calculate_fair_value<F: DocumentFetcher>(
    State(service): SharedService<F>,
) -> Json<ApiResponse<ScrapedValuation>> {
    Json(service.compute_from_scrape().await.into())
}

/// Manual input form
pub async fn manual_form() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Fair value from the submitted form
///
/// A body that does not deserialize is answered with `{"error": ...}`.
pub async fn manual_from_form<F: DocumentFetcher>(
    State(service): SharedService<F>,
    form: Result<Form<ManualInputForm>, FormRejection>,
) -> Json<ApiResponse<ValuationResult>> {
    let response = match form {
        Ok(Form(form)) => {
            let inputs = MarketInputs::from(form);
            ApiResponse::Success(service.compute_from_manual_input(&inputs, inputs.es_price))
        }
        Err(rejection) => rejected(rejection.body_text()),
    };
    Json(response)
}

/// Fair value from a JSON body; `interest_rate` is a fraction here
pub async fn manual_from_json<F: DocumentFetcher>(
    State(service): SharedService<F>,
    body: Result<Json<MarketInputs>, JsonRejection>,
) -> Json<ApiResponse<ValuationResult>> {
    let response = match body {
        Ok(Json(inputs)) => {
            ApiResponse::Success(service.compute_from_manual_input(&inputs, inputs.es_price))
        }
        Err(rejection) => rejected(rejection.body_text()),
    };
    Json(response)
}

fn rejected<T>(error: String) -> ApiResponse<T> {
    tracing::warn!(error = %error, "Rejected manual input");
    ApiResponse::Failure { error }
}
