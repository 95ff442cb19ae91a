//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the quoting tests. The reference
//! vehicle is a four year old general cartage truck worth KSh 2,000,000,
//! which prices at KSh 80,360 comprehensive.

use core_kernel::Money;
use domain_motor::request::FormValue;
use domain_motor::VehicleQuoteForm;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Reference vehicle value
    pub fn vehicle_value() -> Money {
        Money::kes(dec!(2000000))
    }

    /// Comprehensive total for the reference vehicle
    pub fn reference_total() -> Money {
        Money::kes(dec!(80360))
    }

    /// Round base total used for comparison tests
    pub fn base_total() -> Money {
        Money::kes(dec!(100000))
    }
}

/// Fixture for wizard form snapshots
pub struct FormFixtures;

impl FormFixtures {
    /// Reference vehicle as the app posts it, with formatted amounts
    pub fn reference() -> VehicleQuoteForm {
        VehicleQuoteForm {
            commercial_category: Some("general_cartage".to_string()),
            vehicle_value: Some(FormValue::from("KSh 2,000,000")),
            vehicle_age: Some(FormValue::from(4u64)),
            ..Default::default()
        }
    }

    /// Special type crane with tracking and two add-ons
    pub fn tracked_crane() -> VehicleQuoteForm {
        VehicleQuoteForm {
            commercial_category: Some("Special Type".to_string()),
            commercial_sub_category: Some("mobile_crane".to_string()),
            gross_weight: Some(FormValue::from("18,000")),
            usage_pattern: Some("construction_sites".to_string()),
            vehicle_make: Some("Volvo".to_string()),
            vehicle_age: Some(FormValue::from("7")),
            annual_mileage: Some(FormValue::from(15_000u64)),
            vehicle_value: Some(FormValue::from("8000000")),
            has_tracking: true,
            selected_addons: vec!["political_violence".to_string(), "driver_pa".to_string()],
            ..Default::default()
        }
    }

    /// Form missing the vehicle value
    pub fn missing_value() -> VehicleQuoteForm {
        VehicleQuoteForm {
            vehicle_value: None,
            ..Self::reference()
        }
    }
}

/// Fixture for HTTP request bodies
pub struct JsonFixtures;

impl JsonFixtures {
    /// Reference vehicle as a JSON request body
    pub fn reference_form() -> Value {
        json!({
            "commercialCategory": "general_cartage",
            "vehicleValue": "2,000,000",
            "vehicleAge": 4
        })
    }

    /// Vehicle too old for comprehensive cover
    pub fn overage_form() -> Value {
        json!({
            "commercialCategory": "own_goods",
            "vehicleValue": 1500000,
            "vehicleAge": 16
        })
    }
}
