//! Commercial premium calculation
//!
//! Third-party premiums start from a flat tariff amount and compound four
//! risk multipliers. Comprehensive premiums start from a rate on the sum
//! insured, take a security discount, add the selected extensions, are
//! floored at the category minimum and finally carry the statutory levies.
//!
//! Intermediate arithmetic is exact; figures are rounded to whole shillings
//! (half away from zero) where they are reported.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use core_kernel::{Money, Rate};

use crate::eligibility::EligibilityLimits;
use crate::error::QuoteError;
use crate::multipliers::{age_multiplier, brand_multiplier, mileage_multiplier, usage_multiplier};
use crate::premium::{
    AddonPremiums, ExcessSchedule, FactorAdjustments, MinimumPremium, PremiumBreakdown, Quote,
    RiskMultipliers, SecurityDiscount, StatutoryLevies, ThirdPartyQuote,
};
use crate::rates::{self, RateBand, WeightClass};
use crate::request::{AddOn, CommercialCategory, CoverageType, SecurityLevel, VehicleQuoteRequest};
use crate::tpft::calculate_tpft_premium;

pub(crate) fn checked_mul(a: Decimal, b: Decimal) -> Result<Decimal, QuoteError> {
    a.checked_mul(b)
        .ok_or_else(|| QuoteError::calculation_fault(format!("overflow multiplying {a} by {b}")))
}

pub(crate) fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal, QuoteError> {
    a.checked_add(b)
        .ok_or_else(|| QuoteError::calculation_fault(format!("overflow adding {a} and {b}")))
}

/// Rounds to whole shillings, halves away from zero
pub(crate) fn whole_shillings(amount: Decimal) -> Money {
    Money::kes(amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// Floors `calculated` at `threshold`
pub(crate) fn apply_minimum(calculated: Decimal, threshold: Decimal) -> (Decimal, MinimumPremium) {
    let applied = calculated < threshold;
    let difference = if applied {
        whole_shillings(threshold - calculated)
    } else {
        Money::kes(Decimal::ZERO)
    };
    let floored = if applied { threshold } else { calculated };
    (
        floored,
        MinimumPremium {
            threshold: Money::kes(threshold),
            applied,
            difference,
        },
    )
}

/// Levies on an already rounded net premium
pub(crate) fn statutory_levies(
    net: Money,
    policyholders_rate: Decimal,
) -> Result<StatutoryLevies, QuoteError> {
    Ok(StatutoryLevies {
        policyholders_fund: whole_shillings(checked_mul(net.amount(), policyholders_rate)?),
        training_levy: whole_shillings(checked_mul(net.amount(), rates::TRAINING_LEVY_RATE)?),
        stamp_duty: Money::kes(rates::STAMP_DUTY),
    })
}

/// Calculates a commercial third-party premium
///
/// # Arguments
///
/// * `request` - Validated quote request
///
/// # Returns
///
/// The quote with the compounded premium floored at the third-party minimum.
pub fn calculate_third_party_premium(request: &VehicleQuoteRequest) -> Result<ThirdPartyQuote, QuoteError> {
    let category = request.category();
    let weight_class = WeightClass::from_gross_weight(request.gross_weight_kg());
    let kind = request.special_type_kind();
    let entry = rates::third_party_entry(category, weight_class, kind);

    let multipliers = RiskMultipliers {
        usage: usage_multiplier(request.usage()),
        age: age_multiplier(request.vehicle_age()),
        brand: brand_multiplier(request.vehicle_make()),
        mileage: mileage_multiplier(request.annual_mileage_km()),
    };

    let compounded = multipliers
        .product()
        .ok_or_else(|| QuoteError::calculation_fault("overflow compounding risk multipliers"))?;
    let calculated = checked_mul(entry.base, compounded)?;

    let loading = |factor: Decimal| checked_mul(factor - Decimal::ONE, entry.base).map(whole_shillings);
    let adjustments = FactorAdjustments {
        usage: loading(multipliers.usage)?,
        age: loading(multipliers.age)?,
        brand: loading(multipliers.brand)?,
        mileage: loading(multipliers.mileage)?,
    };

    let (floored, minimum_premium) = apply_minimum(calculated, entry.minimum_premium);
    let total_premium = whole_shillings(floored);
    let base_premium = Money::kes(entry.base);

    let rated_on = match category {
        CommercialCategory::SpecialType => kind.label(),
        _ => weight_class.label(),
    };
    let mut lines = vec![
        format!("Commercial Third Party - {}", category.label()),
        format!("Base Premium ({}): {}", rated_on, base_premium.to_display_units()),
        format!("Usage Adjustment (x{}): {}", multipliers.usage, adjustments.usage.to_display_units()),
        format!("Age Adjustment (x{}): {}", multipliers.age, adjustments.age.to_display_units()),
        format!("Brand Adjustment (x{}): {}", multipliers.brand, adjustments.brand.to_display_units()),
        format!("Mileage Adjustment (x{}): {}", multipliers.mileage, adjustments.mileage.to_display_units()),
    ];
    if minimum_premium.applied {
        lines.push(format!(
            "Minimum Premium Adjustment: {}",
            minimum_premium.difference.to_display_units()
        ));
    }
    lines.push(format!("Total Premium: {}", total_premium.to_display_units()));

    debug!(
        category = ?category,
        weight_class = ?weight_class,
        total = %total_premium,
        "third-party premium calculated"
    );

    Ok(ThirdPartyQuote {
        category,
        weight_class,
        base_premium,
        multipliers,
        adjustments,
        calculated_premium: Money::kes(calculated),
        minimum_premium,
        total_premium,
        lines,
    })
}

fn security_discount(level: SecurityLevel, base: Decimal) -> Result<SecurityDiscount, QuoteError> {
    let (rate, description) = match level {
        SecurityLevel::Tracking => (
            rates::TRACKING_DISCOUNT_RATE,
            Some("Tracking/Fleet Management Discount (0.5%)".to_string()),
        ),
        SecurityLevel::AntiTheft => (
            rates::ANTI_THEFT_DISCOUNT_RATE,
            Some("Anti-theft Device Discount (0.25%)".to_string()),
        ),
        SecurityLevel::Unprotected => (Decimal::ZERO, None),
    };
    Ok(SecurityDiscount {
        level,
        rate,
        amount: Money::kes(checked_mul(base, rate)?),
        description,
    })
}

/// Each selected add-on is priced on its own and rounded to whole shillings
fn addon_premiums(request: &VehicleQuoteRequest, insured: Decimal) -> Result<AddonPremiums, QuoteError> {
    let mut amounts = BTreeMap::new();
    let mut total = Decimal::ZERO;
    for &add_on in request.add_ons() {
        let premium = match add_on {
            AddOn::PoliticalViolence => checked_mul(insured, rates::POLITICAL_VIOLENCE_RATE)?
                .max(rates::POLITICAL_VIOLENCE_MINIMUM),
            AddOn::ExcessProtector => checked_mul(insured, rates::EXCESS_PROTECTOR_RATE)?
                .max(rates::EXCESS_PROTECTOR_MINIMUM),
            AddOn::GoodsInTransit => {
                checked_mul(request.goods_in_transit_value(), rates::GOODS_IN_TRANSIT_RATE)?
            }
            AddOn::DriverPa => rates::DRIVER_PA_PREMIUM,
        };
        let premium = whole_shillings(premium);
        total = checked_add(total, premium.amount())?;
        amounts.insert(add_on, premium);
    }
    Ok(AddonPremiums {
        amounts,
        total: Money::kes(total),
    })
}

fn excess_schedule(level: SecurityLevel, insured: Decimal) -> Result<ExcessSchedule, QuoteError> {
    let own_damage = checked_mul(insured, rates::OWN_DAMAGE_EXCESS_RATE)?
        .clamp(rates::OWN_DAMAGE_EXCESS_MINIMUM, rates::OWN_DAMAGE_EXCESS_MAXIMUM);
    let theft_rate = match level {
        SecurityLevel::Tracking => rates::THEFT_EXCESS_TRACKED_RATE,
        SecurityLevel::AntiTheft => rates::THEFT_EXCESS_ANTI_THEFT_RATE,
        SecurityLevel::Unprotected => rates::THEFT_EXCESS_UNPROTECTED_RATE,
    };
    let theft = checked_mul(insured, theft_rate)?.max(rates::THEFT_EXCESS_MINIMUM);
    Ok(ExcessSchedule {
        own_damage: whole_shillings(own_damage),
        third_party: Money::kes(rates::THIRD_PARTY_EXCESS),
        theft: whole_shillings(theft),
    })
}

/// Calculates a commercial comprehensive premium
///
/// Fails with [`QuoteError::EligibilityViolation`] when the vehicle is older
/// than 15 years or the sum insured (vehicle plus accessories) is below
/// KSh 750,000; the age limit is checked first.
pub fn calculate_comprehensive_premium(request: &VehicleQuoteRequest) -> Result<PremiumBreakdown, QuoteError> {
    let coverage = CoverageType::Comprehensive;
    let category = request.category();
    let insured = request.insured_value()?;
    EligibilityLimits::for_coverage(coverage).check(coverage, request.vehicle_age(), insured)?;

    let rate_band = RateBand::from_vehicle_age(request.vehicle_age());
    let entry = rates::comprehensive_entry(category, rate_band);
    let base_rate = Rate::new(entry.base);
    let insured_value = Money::kes(insured);
    let base = base_rate.apply(&insured_value)?.amount();

    let level = request.security_level();
    let discount = security_discount(level, base)?;
    let adjusted = checked_add(base, discount.amount.amount())?;

    let addons = addon_premiums(request, insured)?;
    let total_calculated = checked_add(adjusted, addons.total.amount())?;

    let (floored, minimum_premium) = apply_minimum(total_calculated, entry.minimum_premium);
    let net_premium = whole_shillings(floored);
    let levies = statutory_levies(net_premium, rates::POLICYHOLDERS_FUND_RATE)?;
    let total_premium = net_premium.checked_add(&levies.total()?)?;
    let excess = excess_schedule(level, insured)?;

    let base_premium = whole_shillings(base);
    let security_discount = SecurityDiscount {
        amount: whole_shillings(discount.amount.amount()),
        ..discount
    };

    let mut lines = vec![
        format!("Commercial Comprehensive - {}", category.label()),
        format!("Sum Insured: {}", insured_value.to_display_units()),
        format!(
            "Base Premium ({} @ {}): {}",
            rate_band.label(),
            base_rate,
            base_premium.to_display_units()
        ),
    ];
    if let Some(description) = &security_discount.description {
        lines.push(format!("{}: {}", description, security_discount.amount.to_display_units()));
    }
    for (add_on, amount) in &addons.amounts {
        lines.push(format!("{}: {}", add_on.label(), amount.to_display_units()));
    }
    if minimum_premium.applied {
        lines.push(format!(
            "Minimum Premium Adjustment: {}",
            minimum_premium.difference.to_display_units()
        ));
    }
    lines.push(format!("Net Premium: {}", net_premium.to_display_units()));
    lines.push(format!("Policyholders Fund (0.2%): {}", levies.policyholders_fund.to_display_units()));
    lines.push(format!("Training Levy (0.2%): {}", levies.training_levy.to_display_units()));
    lines.push(format!("Stamp Duty: {}", levies.stamp_duty.to_display_units()));
    lines.push(format!("Total Premium: {}", total_premium.to_display_units()));

    debug!(
        category = ?category,
        rate_band = ?rate_band,
        net = %net_premium,
        total = %total_premium,
        "comprehensive premium calculated"
    );

    Ok(PremiumBreakdown {
        category,
        rate_band,
        base_rate,
        insured_value,
        base_premium,
        security_discount,
        adjusted_base_premium: whole_shillings(adjusted),
        addons,
        minimum_premium,
        net_premium,
        levies,
        total_premium,
        excess,
        lines,
    })
}

/// Prices a request under the given cover
pub fn calculate_commercial_premium(
    request: &VehicleQuoteRequest,
    coverage: CoverageType,
) -> Result<Quote, QuoteError> {
    match coverage {
        CoverageType::ThirdParty => calculate_third_party_premium(request).map(Quote::ThirdParty),
        CoverageType::Comprehensive => calculate_comprehensive_premium(request).map(Quote::Comprehensive),
        CoverageType::Tpft => calculate_tpft_premium(request).map(Quote::Tpft),
    }
}
