//! Commercial quotation handlers

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;
use validator::Validate;

use core_kernel::{ComparisonId, Money, QuoteId};
use domain_motor::{
    compare_insurers, validate_eligibility, CoverageType, EligibilityResult, QuoteOutcome,
    VehicleQuoteForm, VehicleQuoteRequest,
};

use crate::dto::quotations::*;
use crate::{error::ApiError, AppState};

/// Prices a commercial third-party quote
pub async fn quote_third_party(
    State(state): State<AppState>,
    Json(form): Json<VehicleQuoteForm>,
) -> Result<Json<QuoteResponse>, ApiError> {
    price(&state, form, CoverageType::ThirdParty)
}

/// Prices a commercial comprehensive quote
pub async fn quote_comprehensive(
    State(state): State<AppState>,
    Json(form): Json<VehicleQuoteForm>,
) -> Result<Json<QuoteResponse>, ApiError> {
    price(&state, form, CoverageType::Comprehensive)
}

/// Prices a commercial TPFT quote
pub async fn quote_tpft(
    State(state): State<AppState>,
    Json(form): Json<VehicleQuoteForm>,
) -> Result<Json<QuoteResponse>, ApiError> {
    price(&state, form, CoverageType::Tpft)
}

fn price(state: &AppState, form: VehicleQuoteForm, coverage: CoverageType) -> Result<Json<QuoteResponse>, ApiError> {
    let request = VehicleQuoteRequest::try_from(form)?;
    let quote_id = QuoteId::new();

    let response = match state.service.quote(&request, coverage) {
        QuoteOutcome::Priced(quote) => {
            let total = quote.total_premium();
            info!(%quote_id, %coverage, total = %total, "quotation issued");
            QuoteResponse {
                quote_id,
                quoted_at: Utc::now(),
                status: QuoteStatus::Priced,
                coverage_type: coverage,
                bindable: true,
                total_premium: total.amount(),
                display_premium: total.to_display_units(),
                breakdown: Some(quote),
                fault: None,
            }
        }
        QuoteOutcome::Rejected(failure) => return Err(ApiError::Validation(failure.reason())),
        QuoteOutcome::Placeholder { premium, fault, .. } => QuoteResponse {
            quote_id,
            quoted_at: Utc::now(),
            status: QuoteStatus::Placeholder,
            coverage_type: coverage,
            bindable: false,
            total_premium: premium.amount(),
            display_premium: premium.to_display_units(),
            breakdown: None,
            fault: Some(fault),
        },
    };

    Ok(Json(response))
}

/// Checks a vehicle against the underwriting limits
pub async fn check_eligibility(Json(body): Json<EligibilityRequest>) -> Result<Json<EligibilityResult>, ApiError> {
    body.validate()?;
    Ok(Json(validate_eligibility(body.vehicle_age, body.vehicle_value, body.coverage_type)))
}

/// Compares a base premium across insurers
pub async fn compare(Json(body): Json<CompareRequest>) -> Result<Json<ComparisonResponse>, ApiError> {
    body.validate()?;
    let quotes = compare_insurers(Money::kes(body.base_total_premium), &body.insurers)?;

    Ok(Json(ComparisonResponse {
        comparison_id: ComparisonId::new(),
        compared_at: Utc::now(),
        base_total_premium: body.base_total_premium,
        quotes,
    }))
}
