//! Quote Request Parsing Tests
//!
//! Covers the conversion of wizard form snapshots into typed requests:
//! - Number cleaning and defaults
//! - Category, usage and sub-category normalisation
//! - Required fields and rejected add-ons
//! - Builder validation

use domain_motor::request::FormValue;
use domain_motor::{
    AddOn, CommercialCategory, CoverageType, QuoteError, SecurityLevel, SpecialTypeKind,
    UsagePattern, VehicleQuoteForm, VehicleQuoteRequest,
};
use rust_decimal_macros::dec;
use test_utils::{assert_err, assert_ok, FormFixtures};

// ============================================================================
// FORM PARSING TESTS
// ============================================================================

mod form_parsing_tests {
    use super::*;

    #[test]
    fn test_reference_form() {
        let request = assert_ok!(VehicleQuoteRequest::try_from(FormFixtures::reference()));

        assert_eq!(request.category(), CommercialCategory::GeneralCartage);
        assert_eq!(request.vehicle_value(), dec!(2000000));
        assert_eq!(request.vehicle_age(), 4);
        assert_eq!(request.security_level(), SecurityLevel::Unprotected);
    }

    #[test]
    fn test_full_form() {
        let request = assert_ok!(VehicleQuoteRequest::try_from(FormFixtures::tracked_crane()));

        assert_eq!(request.category(), CommercialCategory::SpecialType);
        assert_eq!(request.special_type_kind(), SpecialTypeKind::MobileCrane);
        assert_eq!(request.gross_weight_kg(), 18_000);
        assert_eq!(request.usage(), UsagePattern::ConstructionSites);
        assert_eq!(request.vehicle_make(), "Volvo");
        assert_eq!(request.annual_mileage_km(), 15_000);
        assert_eq!(request.security_level(), SecurityLevel::Tracking);
        assert_eq!(
            request.add_ons().iter().copied().collect::<Vec<_>>(),
            vec![AddOn::PoliticalViolence, AddOn::DriverPa]
        );
    }

    #[test]
    fn test_amount_cleaning_keeps_digits_and_point() {
        let form = VehicleQuoteForm {
            accessories_value: Some(FormValue::from("KES 150,000.50")),
            ..FormFixtures::reference()
        };
        let request = assert_ok!(VehicleQuoteRequest::try_from(form));

        assert_eq!(request.accessories_value(), dec!(150000.50));
        assert_eq!(request.insured_value().unwrap(), dec!(2150000.50));
    }

    #[test]
    fn test_blank_optional_fields_take_defaults() {
        let form = VehicleQuoteForm {
            gross_weight: Some(FormValue::from("")),
            usage_pattern: Some(" ".to_string()),
            vehicle_make: Some(String::new()),
            ..FormFixtures::reference()
        };
        let request = assert_ok!(VehicleQuoteRequest::try_from(form));

        assert_eq!(request.gross_weight_kg(), 3_500);
        assert_eq!(request.usage(), UsagePattern::UrbanDelivery);
        assert_eq!(request.vehicle_make(), "isuzu");
    }

    #[test]
    fn test_unknown_usage_is_other() {
        let form = VehicleQuoteForm {
            usage_pattern: Some("night deliveries".to_string()),
            ..FormFixtures::reference()
        };
        let request = assert_ok!(VehicleQuoteRequest::try_from(form));
        assert_eq!(request.usage(), UsagePattern::Other);
    }

    #[test]
    fn test_category_normalisation() {
        for raw in ["general_cartage", "General Cartage", " general-cartage ", "GENERAL_CARTAGE"] {
            assert_eq!(CommercialCategory::parse(raw), CommercialCategory::GeneralCartage, "{raw}");
        }
    }

    #[test]
    fn test_json_numbers_and_strings() {
        let form: VehicleQuoteForm = serde_json::from_str(
            r#"{"commercialCategory":"own_goods","vehicleValue":1250000.5,"vehicleAge":"3 years","grossWeight":5000}"#,
        )
        .unwrap();
        let request = assert_ok!(VehicleQuoteRequest::try_from(form));

        assert_eq!(request.vehicle_value(), dec!(1250000.5));
        assert_eq!(request.vehicle_age(), 3);
        assert_eq!(request.gross_weight_kg(), 5000);
    }
}

// ============================================================================
// REJECTION TESTS
// ============================================================================

mod rejection_tests {
    use super::*;

    #[test]
    fn test_missing_vehicle_value() {
        let err = assert_err!(VehicleQuoteRequest::try_from(FormFixtures::missing_value()));
        assert!(matches!(err, QuoteError::MissingField(ref field) if field == "vehicleValue"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_missing_category() {
        let form = VehicleQuoteForm {
            commercial_category: None,
            ..FormFixtures::reference()
        };
        let err = assert_err!(VehicleQuoteRequest::try_from(form));
        assert!(matches!(err, QuoteError::MissingField(ref field) if field == "commercialCategory"));
    }

    #[test]
    fn test_missing_age() {
        let form = VehicleQuoteForm {
            vehicle_age: None,
            ..FormFixtures::reference()
        };
        let err = assert_err!(VehicleQuoteRequest::try_from(form));
        assert!(matches!(err, QuoteError::MissingField(ref field) if field == "vehicleAge"));
    }

    #[test]
    fn test_value_without_digits() {
        let form = VehicleQuoteForm {
            vehicle_value: Some(FormValue::from("two million")),
            ..FormFixtures::reference()
        };
        let err = assert_err!(VehicleQuoteRequest::try_from(form));
        assert!(matches!(
            err,
            QuoteError::MalformedNumber { ref field, ref value } if field == "vehicleValue" && value == "two million"
        ));
    }

    #[test]
    fn test_repeated_decimal_point() {
        let form = VehicleQuoteForm {
            annual_mileage: Some(FormValue::from("1.2.3")),
            ..FormFixtures::reference()
        };
        let err = assert_err!(VehicleQuoteRequest::try_from(form));
        assert!(matches!(err, QuoteError::MalformedNumber { .. }));
    }

    #[test]
    fn test_unknown_add_on() {
        let form = VehicleQuoteForm {
            selected_addons: vec!["windscreen".to_string()],
            ..FormFixtures::reference()
        };
        let err = assert_err!(VehicleQuoteRequest::try_from(form));
        assert_eq!(err.to_string(), "Unknown add-on: windscreen");
    }

    #[test]
    fn test_builder_rejects_blank_make() {
        let err = assert_err!(VehicleQuoteRequest::builder()
            .category(CommercialCategory::OwnGoods)
            .vehicle_value(dec!(1000000))
            .vehicle_age(1)
            .vehicle_make("  ")
            .build());
        assert!(matches!(err, QuoteError::Validation(_)));
    }

    #[test]
    fn test_coverage_type_parsing() {
        assert_eq!("third-party".parse::<CoverageType>().unwrap(), CoverageType::ThirdParty);
        assert_eq!("Comprehensive".parse::<CoverageType>().unwrap(), CoverageType::Comprehensive);
        assert_eq!("TPFT".parse::<CoverageType>().unwrap(), CoverageType::Tpft);
        assert!("marine".parse::<CoverageType>().is_err());
    }
}
