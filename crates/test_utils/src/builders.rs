//! Test Data Builders
//!
//! Provides builder patterns for constructing quote requests with sensible
//! defaults. Tests specify only the fields they care about.

use domain_motor::{
    AddOn, CommercialCategory, UsagePattern, VehicleQuoteRequest,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for constructing test quote requests
///
/// Defaults to the reference vehicle: general cartage, light weight,
/// urban delivery, Isuzu, four years old, KSh 2,000,000, no devices.
#[derive(Debug, Clone)]
pub struct TestQuoteRequestBuilder {
    category: CommercialCategory,
    sub_category: Option<String>,
    gross_weight_kg: u32,
    usage: UsagePattern,
    vehicle_make: String,
    vehicle_age: u32,
    annual_mileage_km: u32,
    vehicle_value: Decimal,
    accessories_value: Decimal,
    goods_in_transit_value: Decimal,
    has_tracking: bool,
    has_fleet_management: bool,
    has_anti_theft: bool,
    add_ons: Vec<AddOn>,
}

impl Default for TestQuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestQuoteRequestBuilder {
    /// Creates a new builder with the reference vehicle
    pub fn new() -> Self {
        Self {
            category: CommercialCategory::GeneralCartage,
            sub_category: None,
            gross_weight_kg: 3_500,
            usage: UsagePattern::UrbanDelivery,
            vehicle_make: "isuzu".to_string(),
            vehicle_age: 4,
            annual_mileage_km: 30_000,
            vehicle_value: dec!(2000000),
            accessories_value: Decimal::ZERO,
            goods_in_transit_value: Decimal::ZERO,
            has_tracking: false,
            has_fleet_management: false,
            has_anti_theft: false,
            add_ons: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: CommercialCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_special_type(mut self, sub_category: impl Into<String>) -> Self {
        self.category = CommercialCategory::SpecialType;
        self.sub_category = Some(sub_category.into());
        self
    }

    pub fn with_gross_weight(mut self, kg: u32) -> Self {
        self.gross_weight_kg = kg;
        self
    }

    pub fn with_usage(mut self, usage: UsagePattern) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.vehicle_make = make.into();
        self
    }

    pub fn with_age(mut self, years: u32) -> Self {
        self.vehicle_age = years;
        self
    }

    pub fn with_mileage(mut self, km: u32) -> Self {
        self.annual_mileage_km = km;
        self
    }

    pub fn with_value(mut self, value: Decimal) -> Self {
        self.vehicle_value = value;
        self
    }

    pub fn with_accessories(mut self, value: Decimal) -> Self {
        self.accessories_value = value;
        self
    }

    /// Declares the goods value without selecting the goods in transit cover
    pub fn with_goods_value(mut self, value: Decimal) -> Self {
        self.goods_in_transit_value = value;
        self
    }

    pub fn with_goods_in_transit(self, value: Decimal) -> Self {
        self.with_goods_value(value).with_add_on(AddOn::GoodsInTransit)
    }

    pub fn with_tracking(mut self) -> Self {
        self.has_tracking = true;
        self
    }

    pub fn with_fleet_management(mut self) -> Self {
        self.has_fleet_management = true;
        self
    }

    pub fn with_anti_theft(mut self) -> Self {
        self.has_anti_theft = true;
        self
    }

    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.push(add_on);
        self
    }

    /// Builds the request
    ///
    /// # Panics
    ///
    /// Panics if the builder holds an invalid combination, e.g. a negative value
    pub fn build(self) -> VehicleQuoteRequest {
        let mut builder = VehicleQuoteRequest::builder()
            .category(self.category)
            .gross_weight_kg(self.gross_weight_kg)
            .usage(self.usage)
            .vehicle_make(self.vehicle_make)
            .vehicle_age(self.vehicle_age)
            .annual_mileage_km(self.annual_mileage_km)
            .vehicle_value(self.vehicle_value)
            .accessories_value(self.accessories_value)
            .goods_in_transit_value(self.goods_in_transit_value)
            .tracking(self.has_tracking)
            .fleet_management(self.has_fleet_management)
            .anti_theft(self.has_anti_theft)
            .add_ons(self.add_ons);
        if let Some(sub) = self.sub_category {
            builder = builder.sub_category(sub);
        }
        builder.build().expect("test request should be valid")
    }
}
