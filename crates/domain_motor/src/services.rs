//! Quotation domain services
//!
//! The calculators return `Result`; the app however must always show the
//! user something. `QuotationService` turns a calculator result into a
//! [`QuoteOutcome`], keeping eligibility rejections intact and replacing
//! faults with a fixed, non-bindable placeholder premium.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info, instrument, warn};

use core_kernel::Money;

use crate::calculator::calculate_commercial_premium;
use crate::comparison::{compare_insurers, InsurerQuote};
use crate::error::{EligibilityFailure, QuoteError};
use crate::premium::Quote;
use crate::request::{CoverageType, VehicleQuoteForm, VehicleQuoteRequest};

/// Placeholder third-party premium shown when pricing fails
pub const DEFAULT_THIRD_PARTY_PLACEHOLDER: Decimal = dec!(25000);
/// Placeholder comprehensive premium shown when pricing fails
pub const DEFAULT_COMPREHENSIVE_PLACEHOLDER: Decimal = dec!(50000);
/// Placeholder TPFT premium shown when pricing fails
pub const DEFAULT_TPFT_PLACEHOLDER: Decimal = dec!(25000);

/// Result of a quotation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome {
    /// A bindable quote
    Priced(Quote),
    /// The vehicle is not insurable under the requested cover
    Rejected(EligibilityFailure),
    /// Pricing failed; the premium is indicative only and must not be bound
    Placeholder {
        coverage: CoverageType,
        premium: Money,
        fault: String,
    },
}

impl QuoteOutcome {
    /// Only priced quotes may be bound
    pub fn is_bindable(&self) -> bool {
        matches!(self, QuoteOutcome::Priced(_))
    }

    /// Premium to display, if any
    pub fn display_premium(&self) -> Option<Money> {
        match self {
            QuoteOutcome::Priced(quote) => Some(quote.total_premium()),
            QuoteOutcome::Rejected(_) => None,
            QuoteOutcome::Placeholder { premium, .. } => Some(*premium),
        }
    }
}

/// Service for pricing commercial motor quotations
///
/// # Example
///
/// ```rust,ignore
/// let service = QuotationService::new();
/// match service.quote(&request, CoverageType::Comprehensive) {
///     QuoteOutcome::Priced(quote) => println!("{}", quote.total_premium()),
///     QuoteOutcome::Rejected(failure) => println!("{}", failure.reason()),
///     QuoteOutcome::Placeholder { premium, .. } => println!("indicative {premium}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QuotationService {
    third_party_placeholder: Money,
    comprehensive_placeholder: Money,
    tpft_placeholder: Money,
}

impl QuotationService {
    /// Creates a service with the standard placeholder premiums
    pub fn new() -> Self {
        Self {
            third_party_placeholder: Money::kes(DEFAULT_THIRD_PARTY_PLACEHOLDER),
            comprehensive_placeholder: Money::kes(DEFAULT_COMPREHENSIVE_PLACEHOLDER),
            tpft_placeholder: Money::kes(DEFAULT_TPFT_PLACEHOLDER),
        }
    }

    /// Overrides the placeholder premium for one coverage type
    pub fn with_placeholder(mut self, coverage: CoverageType, premium: Money) -> Self {
        match coverage {
            CoverageType::ThirdParty => self.third_party_placeholder = premium,
            CoverageType::Comprehensive => self.comprehensive_placeholder = premium,
            CoverageType::Tpft => self.tpft_placeholder = premium,
        }
        self
    }

    /// Placeholder premium for a coverage type
    pub fn placeholder_premium(&self, coverage: CoverageType) -> Money {
        match coverage {
            CoverageType::ThirdParty => self.third_party_placeholder,
            CoverageType::Comprehensive => self.comprehensive_placeholder,
            CoverageType::Tpft => self.tpft_placeholder,
        }
    }

    /// Prices a validated request
    ///
    /// # Arguments
    ///
    /// * `request` - The vehicle and cover details
    /// * `coverage` - Cover to price
    ///
    /// # Returns
    ///
    /// `Priced` on success, `Rejected` for eligibility failures and
    /// `Placeholder` for any other error.
    #[instrument(skip(self, request), fields(category = ?request.category()))]
    pub fn quote(&self, request: &VehicleQuoteRequest, coverage: CoverageType) -> QuoteOutcome {
        match calculate_commercial_premium(request, coverage) {
            Ok(quote) => {
                info!(total = %quote.total_premium(), "quote priced");
                QuoteOutcome::Priced(quote)
            }
            Err(err) => self.outcome_for_error(coverage, err),
        }
    }

    /// Parses a form snapshot and prices it
    ///
    /// Parse failures are treated as faults and produce a placeholder.
    pub fn quote_form(&self, form: VehicleQuoteForm, coverage: CoverageType) -> QuoteOutcome {
        match VehicleQuoteRequest::try_from(form) {
            Ok(request) => self.quote(&request, coverage),
            Err(err) => self.outcome_for_error(coverage, err),
        }
    }

    /// Compares a priced quote across insurers
    pub fn compare(&self, quote: &Quote, insurer_ids: &[String]) -> Result<Vec<InsurerQuote>, QuoteError> {
        compare_insurers(quote.total_premium(), insurer_ids)
    }

    fn outcome_for_error(&self, coverage: CoverageType, err: QuoteError) -> QuoteOutcome {
        match err {
            QuoteError::EligibilityViolation(failure) => {
                info!(%coverage, reason = %failure, "quote rejected");
                QuoteOutcome::Rejected(failure)
            }
            fault => {
                let premium = self.placeholder_premium(coverage);
                warn!(%coverage, error = %fault, placeholder = %premium, "pricing failed, using placeholder premium");
                QuoteOutcome::Placeholder {
                    coverage,
                    premium,
                    fault: fault.to_string(),
                }
            }
        }
    }
}

impl Default for QuotationService {
    fn default() -> Self {
        Self::new()
    }
}
