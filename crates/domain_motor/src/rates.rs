//! Commercial motor tariff
//!
//! Flat third-party premiums by category and weight class, comprehensive
//! rates on the sum insured by category and vehicle age band, and the
//! loadings, levies and excess parameters that sit around them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::request::{CommercialCategory, SpecialTypeKind};

/// Upper bound of the light weight class, inclusive
pub const LIGHT_MAX_KG: u32 = 3_500;
/// Upper bound of the medium weight class, inclusive
pub const MEDIUM_MAX_KG: u32 = 7_500;
/// Oldest vehicle still rated in the new-vehicle band
pub const NEW_VEHICLE_MAX_AGE: u32 = 5;

/// Third-party base premium when the category is not in the tariff
pub const DEFAULT_THIRD_PARTY_BASE: Decimal = dec!(25000);
/// Third-party premium floor for every category
pub const THIRD_PARTY_MINIMUM_PREMIUM: Decimal = dec!(15000);

// Security discounts, applied to the comprehensive base premium
pub const TRACKING_DISCOUNT_RATE: Decimal = dec!(-0.005);
pub const ANTI_THEFT_DISCOUNT_RATE: Decimal = dec!(-0.0025);

// Add-on loadings
pub const POLITICAL_VIOLENCE_RATE: Decimal = dec!(0.0035);
pub const POLITICAL_VIOLENCE_MINIMUM: Decimal = dec!(5000);
pub const EXCESS_PROTECTOR_RATE: Decimal = dec!(0.0025);
pub const EXCESS_PROTECTOR_MINIMUM: Decimal = dec!(5000);
pub const GOODS_IN_TRANSIT_RATE: Decimal = dec!(0.005);
pub const DRIVER_PA_PREMIUM: Decimal = dec!(2500);

// Statutory levies on the net premium
pub const POLICYHOLDERS_FUND_RATE: Decimal = dec!(0.002);
pub const TRAINING_LEVY_RATE: Decimal = dec!(0.002);
pub const STAMP_DUTY: Decimal = dec!(40);

// Excess schedule
pub const OWN_DAMAGE_EXCESS_RATE: Decimal = dec!(0.05);
pub const OWN_DAMAGE_EXCESS_MINIMUM: Decimal = dec!(50000);
pub const OWN_DAMAGE_EXCESS_MAXIMUM: Decimal = dec!(250000);
pub const THIRD_PARTY_EXCESS: Decimal = dec!(10000);
pub const THEFT_EXCESS_TRACKED_RATE: Decimal = dec!(0.025);
pub const THEFT_EXCESS_ANTI_THEFT_RATE: Decimal = dec!(0.10);
pub const THEFT_EXCESS_UNPROTECTED_RATE: Decimal = dec!(0.20);
pub const THEFT_EXCESS_MINIMUM: Decimal = dec!(25000);

/// Gross vehicle weight class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    /// Up to 3,500 kg
    Light,
    /// Up to 7,500 kg
    Medium,
    /// Above 7,500 kg
    Heavy,
}

impl WeightClass {
    pub fn from_gross_weight(kg: u32) -> Self {
        if kg <= LIGHT_MAX_KG {
            WeightClass::Light
        } else if kg <= MEDIUM_MAX_KG {
            WeightClass::Medium
        } else {
            WeightClass::Heavy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightClass::Light => "Light (up to 3.5T)",
            WeightClass::Medium => "Medium (3.5T - 7.5T)",
            WeightClass::Heavy => "Heavy (above 7.5T)",
        }
    }
}

/// Comprehensive rating band by vehicle age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBand {
    NewVehicle,
    OlderVehicle,
}

impl RateBand {
    pub fn from_vehicle_age(years: u32) -> Self {
        if years <= NEW_VEHICLE_MAX_AGE {
            RateBand::NewVehicle
        } else {
            RateBand::OlderVehicle
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RateBand::NewVehicle => "New Vehicle (0-5 years)",
            RateBand::OlderVehicle => "Used Vehicle (over 5 years)",
        }
    }
}

/// Comprehensive tariff for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComprehensiveRates {
    pub new_vehicle: Decimal,
    pub older_vehicle: Decimal,
    pub minimum_premium: Decimal,
}

impl ComprehensiveRates {
    pub fn rate_for(&self, band: RateBand) -> Decimal {
        match band {
            RateBand::NewVehicle => self.new_vehicle,
            RateBand::OlderVehicle => self.older_vehicle,
        }
    }
}

pub const GENERAL_CARTAGE_COMPREHENSIVE: ComprehensiveRates = ComprehensiveRates {
    new_vehicle: dec!(0.04),
    older_vehicle: dec!(0.045),
    minimum_premium: dec!(30000),
};

pub const OWN_GOODS_COMPREHENSIVE: ComprehensiveRates = ComprehensiveRates {
    new_vehicle: dec!(0.04),
    older_vehicle: dec!(0.045),
    minimum_premium: dec!(30000),
};

pub const SPECIAL_TYPE_COMPREHENSIVE: ComprehensiveRates = ComprehensiveRates {
    new_vehicle: dec!(0.045),
    older_vehicle: dec!(0.05),
    minimum_premium: dec!(35000),
};

/// A single tariff lookup: a flat amount for third party, a rate on the sum
/// insured for comprehensive, together with the premium floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateEntry {
    pub base: Decimal,
    pub minimum_premium: Decimal,
}

/// Comprehensive tariff for a category; unknown categories use general cartage
pub fn comprehensive_rates(category: CommercialCategory) -> ComprehensiveRates {
    match category {
        CommercialCategory::GeneralCartage | CommercialCategory::Other => GENERAL_CARTAGE_COMPREHENSIVE,
        CommercialCategory::OwnGoods => OWN_GOODS_COMPREHENSIVE,
        CommercialCategory::SpecialType => SPECIAL_TYPE_COMPREHENSIVE,
    }
}

/// Flat third-party premium for a special type vehicle
pub fn special_type_third_party_base(kind: SpecialTypeKind) -> Decimal {
    match kind {
        SpecialTypeKind::MobileCrane => dec!(60000),
        SpecialTypeKind::EarthMover => dec!(45000),
        SpecialTypeKind::ForkLift => dec!(30000),
        SpecialTypeKind::Agricultural => dec!(25000),
        SpecialTypeKind::Construction => dec!(35000),
        SpecialTypeKind::OtherSpecial => dec!(40000),
    }
}

/// Looks up the third-party tariff entry
///
/// # Arguments
///
/// * `category` - Commercial category of the vehicle
/// * `weight_class` - Used for general cartage and own goods
/// * `kind` - Used for special type vehicles
pub fn third_party_entry(
    category: CommercialCategory,
    weight_class: WeightClass,
    kind: SpecialTypeKind,
) -> RateEntry {
    let base = match (category, weight_class) {
        (CommercialCategory::GeneralCartage, WeightClass::Light) => dec!(25000),
        (CommercialCategory::GeneralCartage, WeightClass::Medium) => dec!(35000),
        (CommercialCategory::GeneralCartage, WeightClass::Heavy) => dec!(50000),
        (CommercialCategory::OwnGoods, WeightClass::Light) => dec!(20000),
        (CommercialCategory::OwnGoods, WeightClass::Medium) => dec!(28000),
        (CommercialCategory::OwnGoods, WeightClass::Heavy) => dec!(40000),
        (CommercialCategory::SpecialType, _) => special_type_third_party_base(kind),
        (CommercialCategory::Other, _) => DEFAULT_THIRD_PARTY_BASE,
    };
    RateEntry {
        base,
        minimum_premium: THIRD_PARTY_MINIMUM_PREMIUM,
    }
}

/// Looks up the comprehensive tariff entry for a category and age band
pub fn comprehensive_entry(category: CommercialCategory, band: RateBand) -> RateEntry {
    let rates = comprehensive_rates(category);
    RateEntry {
        base: rates.rate_for(band),
        minimum_premium: rates.minimum_premium,
    }
}
