//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating quote requests that stay
//! within the ranges the calculators are expected to handle.

use core_kernel::Money;
use domain_motor::{AddOn, CommercialCategory, UsagePattern, VehicleQuoteRequest};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for commercial categories, including the fallback
pub fn category_strategy() -> impl Strategy<Value = CommercialCategory> {
    prop_oneof![
        Just(CommercialCategory::GeneralCartage),
        Just(CommercialCategory::OwnGoods),
        Just(CommercialCategory::SpecialType),
        Just(CommercialCategory::Other),
    ]
}

/// Strategy for usage patterns
pub fn usage_strategy() -> impl Strategy<Value = UsagePattern> {
    prop_oneof![
        Just(UsagePattern::UrbanDelivery),
        Just(UsagePattern::LongDistanceHaulage),
        Just(UsagePattern::ConstructionSites),
        Just(UsagePattern::AgriculturalUse),
        Just(UsagePattern::MixedUrbanHighway),
        Just(UsagePattern::SpecializedOperations),
        Just(UsagePattern::Other),
    ]
}

/// Strategy for vehicle makes across all brand tiers
pub fn make_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Mercedes-Benz".to_string()),
        Just("scania".to_string()),
        Just("Isuzu".to_string()),
        Just("hino".to_string()),
        Just("Tata".to_string()),
        Just("FAW".to_string()),
    ]
}

/// Strategy for special type sub-categories, including an unknown one
pub fn sub_category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("mobile_crane".to_string()),
        Just("earth_mover".to_string()),
        Just("fork_lift".to_string()),
        Just("agricultural".to_string()),
        Just("construction".to_string()),
        Just("road_roller".to_string()),
    ]
}

/// Strategy for any subset of add-ons
pub fn add_ons_strategy() -> impl Strategy<Value = Vec<AddOn>> {
    proptest::sample::subsequence(
        vec![
            AddOn::PoliticalViolence,
            AddOn::ExcessProtector,
            AddOn::GoodsInTransit,
            AddOn::DriverPa,
        ],
        0..=4,
    )
}

/// Strategy for vehicle values in whole shillings (KSh 1 to KSh 50m)
pub fn vehicle_value_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..50_000_000i64).prop_map(Decimal::from)
}

/// Strategy for vehicle values eligible for comprehensive cover
pub fn eligible_value_strategy() -> impl Strategy<Value = Decimal> {
    (750_000i64..50_000_000i64).prop_map(Decimal::from)
}

/// Strategy for premiums in whole shillings
pub fn premium_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000_000i64).prop_map(|n| Money::kes(Decimal::from(n)))
}

/// Strategy for complete requests with any attributes
pub fn quote_request_strategy() -> impl Strategy<Value = VehicleQuoteRequest> {
    (
        (category_strategy(), sub_category_strategy(), 0u32..40_000u32, usage_strategy()),
        (make_strategy(), 0u32..30u32, 0u32..200_000u32),
        (vehicle_value_strategy(), 0i64..500_000i64, 0i64..5_000_000i64),
        (any::<bool>(), any::<bool>(), any::<bool>(), add_ons_strategy()),
    )
        .prop_map(
            |(
                (category, sub_category, weight, usage),
                (make, age, mileage),
                (value, accessories, goods),
                (tracking, fleet, anti_theft, add_ons),
            )| {
                VehicleQuoteRequest::builder()
                    .category(category)
                    .sub_category(sub_category)
                    .gross_weight_kg(weight)
                    .usage(usage)
                    .vehicle_make(make)
                    .vehicle_age(age)
                    .annual_mileage_km(mileage)
                    .vehicle_value(value)
                    .accessories_value(Decimal::from(accessories))
                    .goods_in_transit_value(Decimal::from(goods))
                    .tracking(tracking)
                    .fleet_management(fleet)
                    .anti_theft(anti_theft)
                    .add_ons(add_ons)
                    .build()
                    .expect("generated request should be valid")
            },
        )
}
