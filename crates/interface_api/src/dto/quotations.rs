//! Quotation DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use core_kernel::{ComparisonId, QuoteId};
use domain_motor::{CoverageType, InsurerQuote, Quote};

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct EligibilityRequest {
    #[validate(range(max = 100))]
    pub vehicle_age: u32,
    #[validate(custom(function = "non_negative"))]
    pub vehicle_value: Decimal,
    pub coverage_type: CoverageType,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CompareRequest {
    #[validate(custom(function = "non_negative"))]
    pub base_total_premium: Decimal,
    #[validate(length(min = 1, max = 50))]
    pub insurers: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Priced,
    Placeholder,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: QuoteId,
    pub quoted_at: DateTime<Utc>,
    pub status: QuoteStatus,
    pub coverage_type: CoverageType,
    pub bindable: bool,
    pub total_premium: Decimal,
    pub display_premium: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Quote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub comparison_id: ComparisonId,
    pub compared_at: DateTime<Utc>,
    pub base_total_premium: Decimal,
    pub quotes: Vec<InsurerQuote>,
}
