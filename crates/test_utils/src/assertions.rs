//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for quote types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_motor::{PremiumBreakdown, StatutoryLevies};
use rust_decimal_macros::dec;

/// Asserts that a Money value is in whole shillings
pub fn assert_whole_units(money: &Money) {
    assert!(
        money.amount().fract().is_zero(),
        "Expected whole units, got {}",
        money.amount()
    );
}

/// Asserts that money values sum to a total
///
/// # Panics
///
/// Panics if the sum doesn't equal the total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = parts.iter().fold(Money::zero(total.currency()), |acc, m| {
        acc.checked_add(m).expect("overflow in sum")
    });

    assert_eq!(
        sum.amount(),
        total.amount(),
        "Sum of parts ({}) doesn't equal total ({})",
        sum.amount(),
        total.amount()
    );
}

/// Asserts the levy rule: both percentage levies are 0.2% of the rounded
/// net premium and stamp duty is KSh 40
pub fn assert_standard_levies(net: &Money, levies: &StatutoryLevies) {
    let expected = (net.amount() * dec!(0.002))
        .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    assert_eq!(levies.policyholders_fund.amount(), expected, "policyholders fund levy");
    assert_eq!(levies.training_levy.amount(), expected, "training levy");
    assert_eq!(levies.stamp_duty.amount(), dec!(40), "stamp duty");
}

/// Asserts that a comprehensive breakdown is internally consistent
pub fn assert_breakdown_consistent(breakdown: &PremiumBreakdown) {
    assert_whole_units(&breakdown.net_premium);
    assert_whole_units(&breakdown.total_premium);
    assert!(
        breakdown.net_premium.amount() >= breakdown.minimum_premium.threshold.amount(),
        "net premium {} below minimum {}",
        breakdown.net_premium,
        breakdown.minimum_premium.threshold
    );
    assert_standard_levies(&breakdown.net_premium, &breakdown.levies);
    assert_money_sum_equals(
        &[
            breakdown.net_premium,
            breakdown.levies.policyholders_fund,
            breakdown.levies.training_levy,
            breakdown.levies.stamp_duty,
        ],
        &breakdown.total_premium,
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}
