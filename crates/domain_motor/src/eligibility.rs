//! Underwriting eligibility
//!
//! Commercial binders only accept vehicles within an age limit and above a
//! minimum value. The age limit is checked first and the first failing rule
//! is reported.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::error::EligibilityFailure;
use crate::request::CoverageType;

/// Age and value limits for one coverage type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityLimits {
    pub max_age: u32,
    pub min_value: Decimal,
}

impl EligibilityLimits {
    /// Limits applied to the given cover; TPFT follows the third-party rules
    pub fn for_coverage(coverage: CoverageType) -> Self {
        match coverage {
            CoverageType::Comprehensive => Self {
                max_age: 15,
                min_value: dec!(750000),
            },
            CoverageType::ThirdParty | CoverageType::Tpft => Self {
                max_age: 20,
                min_value: dec!(300000),
            },
        }
    }

    /// Checks a vehicle against these limits
    ///
    /// # Arguments
    ///
    /// * `coverage` - Cover being requested, used in the rejection message
    /// * `vehicle_age` - Age in whole years
    /// * `value` - Sum insured to test against the minimum
    pub fn check(
        &self,
        coverage: CoverageType,
        vehicle_age: u32,
        value: Decimal,
    ) -> Result<(), EligibilityFailure> {
        if vehicle_age > self.max_age {
            return Err(EligibilityFailure::ExceedsMaximumAge {
                coverage,
                max_age: self.max_age,
                vehicle_age,
            });
        }
        if value < self.min_value {
            return Err(EligibilityFailure::BelowMinimumValue {
                coverage,
                min_value: Money::kes(self.min_value),
                vehicle_value: value,
            });
        }
        Ok(())
    }
}

/// Human-readable statement of the limits, shown alongside a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRequirements {
    pub age_requirement: String,
    pub value_requirement: String,
    pub security_recommendation: String,
}

impl EligibilityRequirements {
    fn for_limits(limits: &EligibilityLimits) -> Self {
        Self {
            age_requirement: format!("Maximum age: {} years", limits.max_age),
            value_requirement: format!(
                "Minimum value: {}",
                Money::kes(limits.min_value).to_display_units()
            ),
            security_recommendation:
                "Anti-theft devices recommended to reduce excess".to_string(),
        }
    }
}

/// Outcome of an eligibility check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    pub reason: Option<String>,
    pub requirements: EligibilityRequirements,
}

/// Validates a vehicle for the requested commercial cover
pub fn validate_eligibility(vehicle_age: u32, vehicle_value: Decimal, coverage: CoverageType) -> EligibilityResult {
    let limits = EligibilityLimits::for_coverage(coverage);
    let outcome = limits.check(coverage, vehicle_age, vehicle_value);
    EligibilityResult {
        eligible: outcome.is_ok(),
        reason: outcome.err().map(|failure| failure.reason()),
        requirements: EligibilityRequirements::for_limits(&limits),
    }
}
