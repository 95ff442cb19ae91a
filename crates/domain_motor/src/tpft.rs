//! Third party, fire and theft pricing for commercial vehicles

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use core_kernel::{Money, Rate};

use crate::calculator::{apply_minimum, checked_mul, statutory_levies, whole_shillings};
use crate::error::QuoteError;
use crate::premium::TpftQuote;
use crate::rates::NEW_VEHICLE_MAX_AGE;
use crate::request::VehicleQuoteRequest;

pub const TPFT_NEW_VEHICLE_RATE: Decimal = dec!(0.035);
pub const TPFT_OLDER_VEHICLE_RATE: Decimal = dec!(0.04);
pub const TPFT_MINIMUM_PREMIUM: Decimal = dec!(25000);
pub const TPFT_TRACKING_DISCOUNT: Decimal = dec!(0.10);
pub const TPFT_ANTI_THEFT_DISCOUNT: Decimal = dec!(0.05);
pub const TPFT_MAX_DISCOUNT: Decimal = dec!(0.15);
/// Policyholders compensation fund levy on TPFT business
pub const TPFT_POLICYHOLDERS_RATE: Decimal = dec!(0.0025);

fn tpft_discount(request: &VehicleQuoteRequest) -> Decimal {
    let mut discount = Decimal::ZERO;
    if request.has_tracking() || request.has_fleet_management() {
        discount += TPFT_TRACKING_DISCOUNT;
    }
    if request.has_anti_theft() {
        discount += TPFT_ANTI_THEFT_DISCOUNT;
    }
    discount.min(TPFT_MAX_DISCOUNT)
}

/// Calculates a commercial TPFT premium
///
/// The premium floor applies to the basic premium, before the security
/// discount.
pub fn calculate_tpft_premium(request: &VehicleQuoteRequest) -> Result<TpftQuote, QuoteError> {
    let rate = if request.vehicle_age() <= NEW_VEHICLE_MAX_AGE {
        TPFT_NEW_VEHICLE_RATE
    } else {
        TPFT_OLDER_VEHICLE_RATE
    };
    let rate = Rate::new(rate);
    let vehicle_value = Money::kes(request.vehicle_value());
    let calculated = rate.apply(&vehicle_value)?.amount();
    let (basic, minimum_premium) = apply_minimum(calculated, TPFT_MINIMUM_PREMIUM);

    let security_discount = tpft_discount(request);
    let net_premium = whole_shillings(checked_mul(basic, Decimal::ONE - security_discount)?);
    let levies = statutory_levies(net_premium, TPFT_POLICYHOLDERS_RATE)?;
    let total_premium = net_premium.checked_add(&levies.total()?)?;

    let basic_premium = whole_shillings(basic);

    let mut lines = vec![
        format!("Commercial TPFT - {}", request.category().label()),
        format!("Vehicle Value: {}", vehicle_value.to_display_units()),
        format!("Basic Premium (@ {}): {}", rate, basic_premium.to_display_units()),
    ];
    if !security_discount.is_zero() {
        lines.push(format!(
            "Security Discount ({}%): {}",
            (security_discount * dec!(100)).normalize(),
            net_premium.checked_sub(&basic_premium)?.to_display_units()
        ));
    }
    lines.push(format!("Net Premium: {}", net_premium.to_display_units()));
    lines.push(format!("PHCF Levy (0.25%): {}", levies.policyholders_fund.to_display_units()));
    lines.push(format!("Training Levy (0.2%): {}", levies.training_levy.to_display_units()));
    lines.push(format!("Stamp Duty: {}", levies.stamp_duty.to_display_units()));
    lines.push(format!("Total Premium: {}", total_premium.to_display_units()));

    debug!(total = %total_premium, discount = %security_discount, "tpft premium calculated");

    Ok(TpftQuote {
        rate,
        vehicle_value,
        basic_premium,
        minimum_premium,
        security_discount,
        net_premium,
        levies,
        total_premium,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::CommercialCategory;

    fn request(value: Decimal, age: u32, tracking: bool, anti_theft: bool) -> VehicleQuoteRequest {
        VehicleQuoteRequest::builder()
            .category(CommercialCategory::GeneralCartage)
            .vehicle_value(value)
            .vehicle_age(age)
            .tracking(tracking)
            .anti_theft(anti_theft)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_vehicle_rate() {
        let quote = calculate_tpft_premium(&request(dec!(2000000), 3, false, false)).unwrap();
        assert_eq!(quote.basic_premium.amount(), dec!(70000));
        assert_eq!(quote.net_premium.amount(), dec!(70000));
        assert_eq!(quote.levies.policyholders_fund.amount(), dec!(175));
        assert_eq!(quote.levies.training_levy.amount(), dec!(140));
        assert_eq!(quote.total_premium.amount(), dec!(70355));
    }

    #[test]
    fn test_discount_is_capped() {
        let quote = calculate_tpft_premium(&request(dec!(2000000), 8, true, true)).unwrap();
        // 80,000 less 15%
        assert_eq!(quote.security_discount, dec!(0.15));
        assert_eq!(quote.net_premium.amount(), dec!(68000));
    }

    #[test]
    fn test_minimum_applies_before_discount() {
        let quote = calculate_tpft_premium(&request(dec!(300000), 2, true, false)).unwrap();
        assert!(quote.minimum_premium.applied);
        assert_eq!(quote.basic_premium.amount(), dec!(25000));
        assert_eq!(quote.net_premium.amount(), dec!(22500));
    }
}
