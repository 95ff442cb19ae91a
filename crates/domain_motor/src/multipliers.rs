//! Risk multipliers for third-party pricing

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::request::UsagePattern;

/// Makes loaded as premium brands (higher repair cost)
pub const PREMIUM_BRANDS: [&str; 5] = ["mercedes-benz", "scania", "volvo", "man", "daf"];
/// Makes rated at par
pub const STANDARD_BRANDS: [&str; 5] = ["isuzu", "mitsubishi", "toyota", "nissan", "hino"];

/// Brand tier of a vehicle make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandTier {
    Premium,
    Standard,
    Other,
}

impl BrandTier {
    /// Classifies a make, case-insensitively
    pub fn of(make: &str) -> Self {
        let make = make.trim().to_lowercase();
        if PREMIUM_BRANDS.contains(&make.as_str()) {
            BrandTier::Premium
        } else if STANDARD_BRANDS.contains(&make.as_str()) {
            BrandTier::Standard
        } else {
            BrandTier::Other
        }
    }
}

pub fn usage_multiplier(usage: UsagePattern) -> Decimal {
    match usage {
        UsagePattern::UrbanDelivery => dec!(1.0),
        UsagePattern::LongDistanceHaulage => dec!(1.3),
        UsagePattern::ConstructionSites => dec!(1.4),
        UsagePattern::AgriculturalUse => dec!(0.9),
        UsagePattern::MixedUrbanHighway => dec!(1.1),
        UsagePattern::SpecializedOperations => dec!(1.2),
        UsagePattern::Other => dec!(1.0),
    }
}

pub fn age_multiplier(years: u32) -> Decimal {
    match years {
        0..=3 => dec!(1.0),
        4..=5 => dec!(1.1),
        6..=10 => dec!(1.2),
        11..=15 => dec!(1.3),
        _ => dec!(1.5),
    }
}

pub fn brand_multiplier(make: &str) -> Decimal {
    match BrandTier::of(make) {
        BrandTier::Premium => dec!(1.2),
        BrandTier::Standard => dec!(1.0),
        BrandTier::Other => dec!(0.9),
    }
}

pub fn mileage_multiplier(km: u32) -> Decimal {
    match km {
        0..=20_000 => dec!(0.9),
        20_001..=50_000 => dec!(1.0),
        50_001..=80_000 => dec!(1.2),
        _ => dec!(1.4),
    }
}
