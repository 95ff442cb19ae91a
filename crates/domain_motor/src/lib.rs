//! Commercial Motor Quoting Domain
//!
//! This crate prices commercial vehicle cover (general cartage, own goods and
//! special type vehicles) from a typed quote request. Every calculation is a
//! pure, synchronous function of the request and the static rate tables.
//!
//! # Architecture
//!
//! - **Request boundary**: `VehicleQuoteForm` (loose form snapshot) is parsed
//!   once into an immutable `VehicleQuoteRequest`
//! - **Rate tables**: flat third-party premiums and comprehensive tariffs
//! - **Risk multipliers**: usage, age, brand and mileage factors
//! - **Eligibility**: age and sum-insured limits per coverage type
//! - **Calculators**: third-party, comprehensive and TPFT pricing
//! - **Comparison**: per-insurer adjustment of a base quote
//! - **Services**: `QuotationService` applies the fallback policy for faults
//!
//! # Pricing flow
//!
//! ```text
//! form -> VehicleQuoteRequest -> calculator -> Quote -> compare_insurers
//!                                    \-> EligibilityFailure (comprehensive)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_motor::{calculate_comprehensive_premium, CommercialCategory, VehicleQuoteRequest};
//!
//! let request = VehicleQuoteRequest::builder()
//!     .category(CommercialCategory::GeneralCartage)
//!     .vehicle_value(dec!(2000000))
//!     .vehicle_age(4)
//!     .build()?;
//!
//! let breakdown = calculate_comprehensive_premium(&request)?;
//! assert_eq!(breakdown.total_premium.amount(), dec!(80360));
//! ```

pub mod request;
pub mod rates;
pub mod multipliers;
pub mod eligibility;
pub mod premium;
pub mod calculator;
pub mod tpft;
pub mod comparison;
pub mod services;
pub mod error;

pub use request::{
    AddOn, CommercialCategory, CoverageType, SecurityLevel, SpecialTypeKind, UsagePattern,
    VehicleQuoteForm, VehicleQuoteRequest, VehicleQuoteRequestBuilder,
};
pub use rates::{ComprehensiveRates, RateBand, WeightClass};
pub use eligibility::{validate_eligibility, EligibilityRequirements, EligibilityResult};
pub use premium::{
    AddonPremiums, ExcessSchedule, FactorAdjustments, MinimumPremium, PremiumBreakdown,
    Quote, RiskMultipliers, SecurityDiscount, StatutoryLevies, ThirdPartyQuote, TpftQuote,
};
pub use calculator::{
    calculate_commercial_premium, calculate_comprehensive_premium, calculate_third_party_premium,
};
pub use tpft::calculate_tpft_premium;
pub use comparison::{compare_insurers, insurer_adjustment_factor, InsurerQuote};
pub use services::{QuotationService, QuoteOutcome};
pub use error::{EligibilityFailure, QuoteError};
