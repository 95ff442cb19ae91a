//! Premium Calculator Tests
//!
//! End-to-end pricing scenarios for the commercial calculators:
//! - Reference comprehensive quote and its levies
//! - Security discounts, add-ons and the excess schedule
//! - Minimum premium floors
//! - Eligibility boundaries on the comprehensive path
//! - Third-party tariff lookups and multiplier compounding
//!
//! # Test Organization
//!
//! - `comprehensive_tests` - Comprehensive breakdown scenarios
//! - `eligibility_boundary_tests` - Age and value limits
//! - `third_party_tests` - Third-party scenarios
//! - `property_tests` - Invariants over generated requests

use core_kernel::{Money, Rate};
use domain_motor::{
    calculate_commercial_premium, calculate_comprehensive_premium, calculate_third_party_premium,
    AddOn, CommercialCategory, CoverageType, EligibilityFailure, QuoteError, RateBand,
    SecurityLevel, UsagePattern, VehicleQuoteRequest, WeightClass,
};
use rust_decimal_macros::dec;
use test_utils::{
    assert_breakdown_consistent, assert_err, assert_ok, FormFixtures, MoneyFixtures,
    TestQuoteRequestBuilder,
};

// ============================================================================
// COMPREHENSIVE TESTS
// ============================================================================

mod comprehensive_tests {
    use super::*;

    /// General cartage, KSh 2m, four years old, no devices, no add-ons
    #[test]
    fn test_reference_vehicle() {
        let request = TestQuoteRequestBuilder::new().build();
        let breakdown = assert_ok!(calculate_comprehensive_premium(&request));

        assert_eq!(breakdown.rate_band, RateBand::NewVehicle);
        assert_eq!(breakdown.base_rate, Rate::new(dec!(0.04)));
        assert_eq!(breakdown.base_premium.amount(), dec!(80000));
        assert_eq!(breakdown.net_premium.amount(), dec!(80000));
        assert_eq!(breakdown.levies.policyholders_fund.amount(), dec!(160));
        assert_eq!(breakdown.levies.training_levy.amount(), dec!(160));
        assert_eq!(breakdown.levies.stamp_duty.amount(), dec!(40));
        assert_eq!(breakdown.total_premium, MoneyFixtures::reference_total());
        assert!(breakdown.addons.amounts.is_empty());
        assert_breakdown_consistent(&breakdown);
    }

    #[test]
    fn test_tracked_crane_with_add_ons() {
        let request = assert_ok!(VehicleQuoteRequest::try_from(FormFixtures::tracked_crane()));
        let breakdown = assert_ok!(calculate_comprehensive_premium(&request));

        // 8m at the older special type rate of 5%
        assert_eq!(breakdown.rate_band, RateBand::OlderVehicle);
        assert_eq!(breakdown.base_premium.amount(), dec!(400000));
        assert_eq!(breakdown.security_discount.level, SecurityLevel::Tracking);
        assert_eq!(breakdown.security_discount.amount.amount(), dec!(-2000));
        assert_eq!(breakdown.adjusted_base_premium.amount(), dec!(398000));
        assert_eq!(breakdown.addons.get(AddOn::PoliticalViolence), Some(Money::kes(dec!(28000))));
        assert_eq!(breakdown.addons.get(AddOn::DriverPa), Some(Money::kes(dec!(2500))));
        assert_eq!(breakdown.addons.total.amount(), dec!(30500));
        assert_eq!(breakdown.net_premium.amount(), dec!(428500));
        assert_eq!(breakdown.levies.policyholders_fund.amount(), dec!(857));
        assert_eq!(breakdown.total_premium.amount(), dec!(430254));

        assert_eq!(breakdown.excess.own_damage.amount(), dec!(250000));
        assert_eq!(breakdown.excess.third_party.amount(), dec!(10000));
        assert_eq!(breakdown.excess.theft.amount(), dec!(200000));
        assert_breakdown_consistent(&breakdown);
    }

    #[test]
    fn test_anti_theft_discount() {
        let request = TestQuoteRequestBuilder::new().with_anti_theft().build();
        let breakdown = assert_ok!(calculate_comprehensive_premium(&request));

        assert_eq!(breakdown.security_discount.level, SecurityLevel::AntiTheft);
        assert_eq!(breakdown.security_discount.amount.amount(), dec!(-200));
        assert_eq!(breakdown.net_premium.amount(), dec!(79800));
        assert_eq!(breakdown.excess.theft.amount(), dec!(200000));
    }

    #[test]
    fn test_fleet_management_counts_as_tracking() {
        let request = TestQuoteRequestBuilder::new()
            .with_fleet_management()
            .with_anti_theft()
            .build();
        let breakdown = assert_ok!(calculate_comprehensive_premium(&request));

        assert_eq!(breakdown.security_discount.rate, dec!(-0.005));
        assert_eq!(breakdown.excess.theft.amount(), dec!(50000));
    }

    #[test]
    fn test_add_on_minimums() {
        let request = TestQuoteRequestBuilder::new()
            .with_value(dec!(1000000))
            .with_add_on(AddOn::PoliticalViolence)
            .with_add_on(AddOn::ExcessProtector)
            .with_goods_in_transit(dec!(1000000))
            .build();
        let breakdown = assert_ok!(calculate_comprehensive_premium(&request));

        // 0.35% and 0.25% of 1m are below the KSh 5,000 minimum
        assert_eq!(breakdown.addons.get(AddOn::PoliticalViolence), Some(Money::kes(dec!(5000))));
        assert_eq!(breakdown.addons.get(AddOn::ExcessProtector), Some(Money::kes(dec!(5000))));
        assert_eq!(breakdown.addons.get(AddOn::GoodsInTransit), Some(Money::kes(dec!(5000))));
        assert_eq!(breakdown.addons.get(AddOn::DriverPa), None);
        assert_eq!(breakdown.net_premium.amount(), dec!(55000));
    }

    #[test]
    fn test_two_add_ons_cost_the_sum_of_their_deltas() {
        let vehicle = TestQuoteRequestBuilder::new()
            .with_value(dec!(1234567))
            .with_goods_value(dec!(1001));
        let net = |builder: TestQuoteRequestBuilder| {
            assert_ok!(calculate_comprehensive_premium(&builder.build())).net_premium.amount()
        };

        // 1,234,567 x 4% = 49,382.68; PV floored at 5,000; GIT 1,001 x 0.5% = 5.005
        let none = net(vehicle.clone());
        let political_violence = net(vehicle.clone().with_add_on(AddOn::PoliticalViolence));
        let goods = net(vehicle.clone().with_add_on(AddOn::GoodsInTransit));
        let both = net(
            vehicle
                .with_add_on(AddOn::PoliticalViolence)
                .with_add_on(AddOn::GoodsInTransit),
        );

        assert_eq!(none, dec!(49383));
        assert_eq!(political_violence, dec!(54383));
        assert_eq!(goods, dec!(49388));
        assert_eq!(both, dec!(54388));
        assert_eq!(both - none, (political_violence - none) + (goods - none));
    }

    #[test]
    fn test_minimum_premium_floor() {
        let request = TestQuoteRequestBuilder::new()
            .with_special_type("fork_lift")
            .with_value(dec!(750000))
            .with_age(2)
            .build();
        let breakdown = assert_ok!(calculate_comprehensive_premium(&request));

        // 750,000 x 4.5% = 33,750 against a 35,000 floor
        assert!(breakdown.minimum_premium.applied);
        assert_eq!(breakdown.minimum_premium.difference.amount(), dec!(1250));
        assert_eq!(breakdown.net_premium.amount(), dec!(35000));
        assert_eq!(breakdown.total_premium.amount(), dec!(35180));
        assert!(breakdown
            .lines
            .iter()
            .any(|line| line == "Minimum Premium Adjustment: KSh 1,250"));
        assert_breakdown_consistent(&breakdown);
    }

    #[test]
    fn test_own_damage_excess_floor() {
        let request = TestQuoteRequestBuilder::new()
            .with_value(dec!(750000))
            .with_tracking()
            .build();
        let breakdown = assert_ok!(calculate_comprehensive_premium(&request));

        assert_eq!(breakdown.excess.own_damage.amount(), dec!(50000));
        assert_eq!(breakdown.excess.theft.amount(), dec!(25000));
    }

    #[test]
    fn test_unknown_category_uses_general_cartage_rates() {
        let request = TestQuoteRequestBuilder::new()
            .with_category(CommercialCategory::Other)
            .build();
        let breakdown = assert_ok!(calculate_comprehensive_premium(&request));

        assert_eq!(breakdown.total_premium, MoneyFixtures::reference_total());
    }
}

// ============================================================================
// ELIGIBILITY BOUNDARY TESTS
// ============================================================================

mod eligibility_boundary_tests {
    use super::*;

    #[test]
    fn test_age_fifteen_is_accepted() {
        let request = TestQuoteRequestBuilder::new().with_age(15).build();
        assert!(calculate_comprehensive_premium(&request).is_ok());
    }

    #[test]
    fn test_age_sixteen_is_rejected() {
        let request = TestQuoteRequestBuilder::new().with_age(16).build();
        let err = assert_err!(calculate_comprehensive_premium(&request));

        assert!(matches!(
            err,
            QuoteError::EligibilityViolation(EligibilityFailure::ExceedsMaximumAge {
                max_age: 15,
                vehicle_age: 16,
                ..
            })
        ));
    }

    #[test]
    fn test_minimum_value_is_accepted() {
        let request = TestQuoteRequestBuilder::new().with_value(dec!(750000)).build();
        assert!(calculate_comprehensive_premium(&request).is_ok());
    }

    #[test]
    fn test_value_just_below_minimum_is_rejected() {
        let request = TestQuoteRequestBuilder::new().with_value(dec!(749999)).build();
        let err = assert_err!(calculate_comprehensive_premium(&request));
        let failure = err.as_eligibility_failure().expect("eligibility failure");

        assert_eq!(
            failure.reason(),
            "Vehicle value must be at least KSh 750,000 for commercial comprehensive insurance."
        );
    }

    #[test]
    fn test_accessories_lift_value_over_minimum() {
        let request = TestQuoteRequestBuilder::new()
            .with_value(dec!(749999))
            .with_accessories(dec!(1))
            .build();
        assert!(calculate_comprehensive_premium(&request).is_ok());
    }

    #[test]
    fn test_age_reported_before_value() {
        let request = TestQuoteRequestBuilder::new()
            .with_age(20)
            .with_value(dec!(100000))
            .build();
        let err = assert_err!(calculate_comprehensive_premium(&request));

        assert!(matches!(
            err.as_eligibility_failure(),
            Some(EligibilityFailure::ExceedsMaximumAge { .. })
        ));
    }

    #[test]
    fn test_third_party_prices_old_vehicles() {
        let request = TestQuoteRequestBuilder::new().with_age(25).build();
        assert!(calculate_commercial_premium(&request, CoverageType::ThirdParty).is_ok());
    }
}

// ============================================================================
// THIRD PARTY TESTS
// ============================================================================

mod third_party_tests {
    use super::*;

    #[test]
    fn test_reference_vehicle() {
        let request = TestQuoteRequestBuilder::new().build();
        let quote = assert_ok!(calculate_third_party_premium(&request));

        // 25,000 x 1.0 x 1.1 x 1.0 x 1.0
        assert_eq!(quote.weight_class, WeightClass::Light);
        assert_eq!(quote.base_premium.amount(), dec!(25000));
        assert_eq!(quote.adjustments.age.amount(), dec!(2500));
        assert_eq!(quote.total_premium.amount(), dec!(27500));
        assert!(!quote.minimum_premium.applied);
    }

    #[test]
    fn test_special_type_base_by_sub_category() {
        let request = TestQuoteRequestBuilder::new()
            .with_special_type("Earth Mover")
            .with_age(2)
            .build();
        let quote = assert_ok!(calculate_third_party_premium(&request));

        assert_eq!(quote.base_premium.amount(), dec!(45000));
        assert_eq!(quote.total_premium.amount(), dec!(45000));
    }

    #[test]
    fn test_unknown_sub_category_uses_other_special() {
        let request = TestQuoteRequestBuilder::new()
            .with_special_type("road_roller")
            .with_age(2)
            .build();
        let quote = assert_ok!(calculate_third_party_premium(&request));

        assert_eq!(quote.base_premium.amount(), dec!(40000));
    }

    #[test]
    fn test_medium_own_goods() {
        let request = TestQuoteRequestBuilder::new()
            .with_category(CommercialCategory::OwnGoods)
            .with_gross_weight(7500)
            .with_usage(UsagePattern::MixedUrbanHighway)
            .with_make("DAF")
            .with_age(12)
            .with_mileage(60_000)
            .build();
        let quote = assert_ok!(calculate_third_party_premium(&request));

        // 28,000 x 1.1 x 1.3 x 1.2 x 1.2 = 57,657.6
        assert_eq!(quote.weight_class, WeightClass::Medium);
        assert_eq!(quote.calculated_premium.amount(), dec!(57657.6));
        assert_eq!(quote.total_premium.amount(), dec!(57658));
    }

    #[test]
    fn test_lines_end_with_total() {
        let request = TestQuoteRequestBuilder::new().build();
        let quote = assert_ok!(calculate_commercial_premium(&request, CoverageType::ThirdParty));

        assert_eq!(quote.lines().first().map(String::as_str), Some("Commercial Third Party - General Cartage"));
        assert_eq!(quote.lines().last().map(String::as_str), Some("Total Premium: KSh 27,500"));
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::generators::*;

    proptest! {
        #[test]
        fn third_party_is_non_decreasing_in_age(
            age in 0u32..30,
            usage in usage_strategy(),
            make in make_strategy(),
            mileage in 0u32..200_000,
            weight in 0u32..20_000,
        ) {
            let younger = TestQuoteRequestBuilder::new()
                .with_age(age)
                .with_usage(usage)
                .with_make(make.clone())
                .with_mileage(mileage)
                .with_gross_weight(weight);
            let older = younger.clone().with_age(age + 1);

            let younger = calculate_third_party_premium(&younger.build()).unwrap();
            let older = calculate_third_party_premium(&older.build()).unwrap();
            prop_assert!(older.total_premium.amount() >= younger.total_premium.amount());
        }

        #[test]
        fn premiums_respect_floors_and_levy_rule(request in quote_request_strategy()) {
            let third_party = calculate_third_party_premium(&request).unwrap();
            prop_assert!(third_party.total_premium.amount() >= dec!(15000));

            if let Ok(breakdown) = calculate_comprehensive_premium(&request) {
                assert_breakdown_consistent(&breakdown);
                let levies = breakdown.total_premium.amount() - breakdown.net_premium.amount();
                let expected = (breakdown.net_premium.amount() * dec!(0.002))
                    .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
                    * dec!(2)
                    + dec!(40);
                prop_assert_eq!(levies, expected);
            }
        }

        #[test]
        fn eligible_vehicles_are_always_priced(
            value in eligible_value_strategy(),
            age in 0u32..=15,
            category in category_strategy(),
        ) {
            let request = TestQuoteRequestBuilder::new()
                .with_category(category)
                .with_value(value)
                .with_age(age)
                .build();
            let breakdown = calculate_comprehensive_premium(&request).unwrap();
            prop_assert!(breakdown.net_premium.amount() >= breakdown.minimum_premium.threshold.amount());
            assert_breakdown_consistent(&breakdown);
        }

        #[test]
        fn add_ons_are_additive(
            value in 1_000_000i64..20_000_000i64,
            add_on in prop_oneof![
                Just(AddOn::PoliticalViolence),
                Just(AddOn::ExcessProtector),
                Just(AddOn::DriverPa),
            ],
        ) {
            let without = TestQuoteRequestBuilder::new().with_value(value.into());
            let with = without.clone().with_add_on(add_on);

            let without = calculate_comprehensive_premium(&without.build()).unwrap();
            let with = calculate_comprehensive_premium(&with.build()).unwrap();
            let add_on_premium = with.addons.get(add_on).unwrap();

            prop_assert_eq!(
                with.net_premium.amount() - without.net_premium.amount(),
                add_on_premium.amount()
            );
        }

        #[test]
        fn add_on_pairs_are_additive(
            value in 750_000i64..20_000_000i64,
            goods in 0i64..5_000_000i64,
            pair in prop::sample::subsequence(
                vec![
                    AddOn::PoliticalViolence,
                    AddOn::ExcessProtector,
                    AddOn::GoodsInTransit,
                    AddOn::DriverPa,
                ],
                2,
            ),
        ) {
            let (a, b) = (pair[0], pair[1]);
            let vehicle = TestQuoteRequestBuilder::new()
                .with_value(value.into())
                .with_goods_value(goods.into());
            let net = |builder: TestQuoteRequestBuilder| {
                calculate_comprehensive_premium(&builder.build()).unwrap()
            };

            let none = net(vehicle.clone());
            prop_assume!(!none.minimum_premium.applied);
            let only_a = net(vehicle.clone().with_add_on(a)).net_premium.amount();
            let only_b = net(vehicle.clone().with_add_on(b)).net_premium.amount();
            let both = net(vehicle.with_add_on(a).with_add_on(b)).net_premium.amount();
            let none = none.net_premium.amount();

            prop_assert_eq!(both - none, (only_a - none) + (only_b - none));
        }

        #[test]
        fn near_zero_values_hit_the_third_party_floor(value in 1i64..1_000i64) {
            let request = TestQuoteRequestBuilder::new()
                .with_category(CommercialCategory::OwnGoods)
                .with_usage(UsagePattern::AgriculturalUse)
                .with_make("Tata")
                .with_age(0)
                .with_mileage(0)
                .with_value(value.into())
                .build();
            let quote = calculate_third_party_premium(&request).unwrap();
            prop_assert!(quote.minimum_premium.applied);
            prop_assert_eq!(quote.total_premium.amount(), dec!(15000));
        }
    }
}
