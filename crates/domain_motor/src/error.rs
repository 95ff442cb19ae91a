//! Quoting domain errors
//!
//! Two failure classes matter to callers: an [`EligibilityFailure`] is a
//! business rejection that must be shown to the user as-is, while every other
//! [`QuoteError`] is a fault that may be papered over with a placeholder
//! premium (see [`crate::services::QuotationService`]).

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{Money, MoneyError};
use crate::request::CoverageType;

/// Underwriting limit that a vehicle failed to meet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EligibilityFailure {
    /// Vehicle is older than the binder allows
    #[error("Vehicle exceeds the maximum age limit of {max_age} years for commercial {coverage} insurance.")]
    ExceedsMaximumAge {
        coverage: CoverageType,
        max_age: u32,
        vehicle_age: u32,
    },

    /// Sum insured is below the binder minimum
    #[error("Vehicle value must be at least {} for commercial {coverage} insurance.", .min_value.to_display_units())]
    BelowMinimumValue {
        coverage: CoverageType,
        min_value: Money,
        vehicle_value: Decimal,
    },
}

impl EligibilityFailure {
    /// User-facing rejection reason
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Errors that can occur while building a request or pricing it
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Vehicle is not insurable under the requested cover
    #[error("Eligibility violation: {0}")]
    EligibilityViolation(#[from] EligibilityFailure),

    /// Arithmetic could not be completed
    #[error("Calculation fault: {0}")]
    CalculationFault(String),

    /// Required field is missing from the form
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Numeric field could not be parsed
    #[error("Malformed number in {field}: {value:?}")]
    MalformedNumber {
        field: String,
        value: String,
    },

    /// Add-on identifier is not offered for commercial vehicles
    #[error("Unknown add-on: {0}")]
    UnknownAddOn(String),

    /// Field value is out of range
    #[error("Validation error: {0}")]
    Validation(String),
}

impl QuoteError {
    /// Creates a calculation fault
    pub fn calculation_fault(message: impl Into<String>) -> Self {
        QuoteError::CalculationFault(message.into())
    }

    /// Creates a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        QuoteError::MissingField(field.into())
    }

    /// Creates a malformed number error
    pub fn malformed_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        QuoteError::MalformedNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        QuoteError::Validation(message.into())
    }

    /// Returns the eligibility failure if this is a business rejection
    pub fn as_eligibility_failure(&self) -> Option<&EligibilityFailure> {
        match self {
            QuoteError::EligibilityViolation(failure) => Some(failure),
            _ => None,
        }
    }

    /// True for errors caused by the submitted form rather than by pricing
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            QuoteError::MissingField(_)
                | QuoteError::MalformedNumber { .. }
                | QuoteError::UnknownAddOn(_)
                | QuoteError::Validation(_)
        )
    }
}

impl From<MoneyError> for QuoteError {
    fn from(err: MoneyError) -> Self {
        QuoteError::CalculationFault(err.to_string())
    }
}
