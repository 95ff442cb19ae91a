//! Quote output types
//!
//! All monetary figures on these types are whole shillings except
//! `ThirdPartyQuote::calculated_premium`, which keeps the compounded value
//! before the floor and rounding.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, MoneyError, Rate};

use crate::rates::{RateBand, WeightClass};
use crate::request::{AddOn, CommercialCategory, CoverageType, SecurityLevel};

/// Third-party risk factors, in the order they are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMultipliers {
    pub usage: Decimal,
    pub age: Decimal,
    pub brand: Decimal,
    pub mileage: Decimal,
}

impl RiskMultipliers {
    /// Compounded factor, `None` on overflow
    pub fn product(&self) -> Option<Decimal> {
        self.usage
            .checked_mul(self.age)?
            .checked_mul(self.brand)?
            .checked_mul(self.mileage)
    }
}

/// Per-factor loading shown on the breakdown, `(multiplier - 1) x base`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorAdjustments {
    pub usage: Money,
    pub age: Money,
    pub brand: Money,
    pub mileage: Money,
}

/// Premium floor and whether it bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumPremium {
    pub threshold: Money,
    pub applied: bool,
    /// Amount added to reach the floor, zero when not applied
    pub difference: Money,
}

/// Third-party quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThirdPartyQuote {
    pub category: CommercialCategory,
    pub weight_class: WeightClass,
    pub base_premium: Money,
    pub multipliers: RiskMultipliers,
    pub adjustments: FactorAdjustments,
    pub calculated_premium: Money,
    pub minimum_premium: MinimumPremium,
    pub total_premium: Money,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityDiscount {
    pub level: SecurityLevel,
    /// Signed rate, negative for a discount
    pub rate: Decimal,
    /// Signed amount, negative for a discount
    pub amount: Money,
    pub description: Option<String>,
}

/// Premiums for the selected add-ons only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonPremiums {
    pub amounts: BTreeMap<AddOn, Money>,
    pub total: Money,
}

impl AddonPremiums {
    pub fn get(&self, add_on: AddOn) -> Option<Money> {
        self.amounts.get(&add_on).copied()
    }
}

/// Excess amounts quoted for information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcessSchedule {
    pub own_damage: Money,
    pub third_party: Money,
    pub theft: Money,
}

/// Statutory levies charged on top of the net premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryLevies {
    /// Policyholders compensation fund
    pub policyholders_fund: Money,
    pub training_levy: Money,
    pub stamp_duty: Money,
}

impl StatutoryLevies {
    pub fn total(&self) -> Result<Money, MoneyError> {
        self.policyholders_fund
            .checked_add(&self.training_levy)?
            .checked_add(&self.stamp_duty)
    }
}

/// Comprehensive premium breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    pub category: CommercialCategory,
    pub rate_band: RateBand,
    pub base_rate: Rate,
    pub insured_value: Money,
    pub base_premium: Money,
    pub security_discount: SecurityDiscount,
    pub adjusted_base_premium: Money,
    pub addons: AddonPremiums,
    pub minimum_premium: MinimumPremium,
    pub net_premium: Money,
    pub levies: StatutoryLevies,
    pub total_premium: Money,
    pub excess: ExcessSchedule,
    pub lines: Vec<String>,
}

/// Third party, fire and theft quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TpftQuote {
    pub rate: Rate,
    pub vehicle_value: Money,
    pub basic_premium: Money,
    pub minimum_premium: MinimumPremium,
    /// Discount as a fraction, e.g. 0.15
    pub security_discount: Decimal,
    pub net_premium: Money,
    pub levies: StatutoryLevies,
    pub total_premium: Money,
    pub lines: Vec<String>,
}

/// A priced quote of any coverage type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "coverage_type", rename_all = "snake_case")]
pub enum Quote {
    ThirdParty(ThirdPartyQuote),
    Comprehensive(PremiumBreakdown),
    Tpft(TpftQuote),
}

impl Quote {
    pub fn coverage_type(&self) -> CoverageType {
        match self {
            Quote::ThirdParty(_) => CoverageType::ThirdParty,
            Quote::Comprehensive(_) => CoverageType::Comprehensive,
            Quote::Tpft(_) => CoverageType::Tpft,
        }
    }

    /// Amount payable
    pub fn total_premium(&self) -> Money {
        match self {
            Quote::ThirdParty(q) => q.total_premium,
            Quote::Comprehensive(b) => b.total_premium,
            Quote::Tpft(q) => q.total_premium,
        }
    }

    /// Human-readable breakdown lines
    pub fn lines(&self) -> &[String] {
        match self {
            Quote::ThirdParty(q) => &q.lines,
            Quote::Comprehensive(b) => &b.lines,
            Quote::Tpft(q) => &q.lines,
        }
    }
}
