//! Quote request value objects
//!
//! The mobile wizard accumulates vehicle details as loosely typed form state.
//! [`VehicleQuoteForm`] mirrors that snapshot; converting it into a
//! [`VehicleQuoteRequest`] is the one place where strings are normalised,
//! numbers are parsed and defaults are filled in. Calculators only ever see
//! the typed request.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Default gross weight when the form leaves it blank (light class)
pub const DEFAULT_GROSS_WEIGHT_KG: u32 = 3_500;
/// Default annual mileage when the form leaves it blank
pub const DEFAULT_ANNUAL_MILEAGE_KM: u32 = 30_000;
/// Default make when the form leaves it blank
pub const DEFAULT_VEHICLE_MAKE: &str = "isuzu";

/// Lowercases and joins words with underscores: `"Own Goods"` -> `"own_goods"`
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Type of motor cover being quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageType {
    /// Liability to other parties only
    ThirdParty,
    /// Own damage plus third-party liability
    Comprehensive,
    /// Third party, fire and theft
    Tpft,
}

impl CoverageType {
    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageType::ThirdParty => "third_party",
            CoverageType::Comprehensive => "comprehensive",
            CoverageType::Tpft => "tpft",
        }
    }
}

impl fmt::Display for CoverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageType::ThirdParty => write!(f, "third party"),
            CoverageType::Comprehensive => write!(f, "comprehensive"),
            CoverageType::Tpft => write!(f, "TPFT"),
        }
    }
}

impl FromStr for CoverageType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "third_party" | "thirdparty" => Ok(CoverageType::ThirdParty),
            "comprehensive" => Ok(CoverageType::Comprehensive),
            "tpft" | "third_party_fire_and_theft" => Ok(CoverageType::Tpft),
            _ => Err(QuoteError::validation(format!("unknown coverage type {s:?}"))),
        }
    }
}

/// Commercial usage category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommercialCategory {
    /// Carriage of goods for hire or reward
    GeneralCartage,
    /// Carriage of the owner's own goods
    OwnGoods,
    /// Cranes, earth movers and other special vehicles
    SpecialType,
    /// Unrecognised category, priced on fallback rates
    Other,
}

impl CommercialCategory {
    /// Parses a category as entered in the wizard
    ///
    /// Unrecognised input maps to [`CommercialCategory::Other`].
    pub fn parse(raw: &str) -> Self {
        match normalize_key(raw).as_str() {
            "general_cartage" => CommercialCategory::GeneralCartage,
            "own_goods" => CommercialCategory::OwnGoods,
            "special_type" => CommercialCategory::SpecialType,
            other => {
                tracing::warn!(category = other, "unrecognised commercial category, using fallback rates");
                CommercialCategory::Other
            }
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            CommercialCategory::GeneralCartage => "General Cartage",
            CommercialCategory::OwnGoods => "Own Goods",
            CommercialCategory::SpecialType => "Special Type",
            CommercialCategory::Other => "Other",
        }
    }
}

/// Kind of special type vehicle, keyed by the wizard's sub-category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialTypeKind {
    MobileCrane,
    EarthMover,
    ForkLift,
    Agricultural,
    Construction,
    OtherSpecial,
}

impl SpecialTypeKind {
    /// Parses a sub-category; unknown values map to `OtherSpecial`
    pub fn parse(raw: &str) -> Self {
        match normalize_key(raw).as_str() {
            "mobile_crane" => SpecialTypeKind::MobileCrane,
            "earth_mover" => SpecialTypeKind::EarthMover,
            "fork_lift" | "forklift" => SpecialTypeKind::ForkLift,
            "agricultural" => SpecialTypeKind::Agricultural,
            "construction" => SpecialTypeKind::Construction,
            _ => SpecialTypeKind::OtherSpecial,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SpecialTypeKind::MobileCrane => "Mobile Crane",
            SpecialTypeKind::EarthMover => "Earth Mover",
            SpecialTypeKind::ForkLift => "Fork Lift",
            SpecialTypeKind::Agricultural => "Agricultural",
            SpecialTypeKind::Construction => "Construction",
            SpecialTypeKind::OtherSpecial => "Other Special Type",
        }
    }
}

/// How the vehicle is operated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsagePattern {
    UrbanDelivery,
    LongDistanceHaulage,
    ConstructionSites,
    AgriculturalUse,
    MixedUrbanHighway,
    SpecializedOperations,
    Other,
}

impl UsagePattern {
    /// Parses a usage pattern; unknown values map to `Other`
    pub fn parse(raw: &str) -> Self {
        match normalize_key(raw).as_str() {
            "urban_delivery" => UsagePattern::UrbanDelivery,
            "long_distance_haulage" => UsagePattern::LongDistanceHaulage,
            "construction_sites" => UsagePattern::ConstructionSites,
            "agricultural_use" => UsagePattern::AgriculturalUse,
            "mixed_urban_highway" => UsagePattern::MixedUrbanHighway,
            "specialized_operations" => UsagePattern::SpecializedOperations,
            _ => UsagePattern::Other,
        }
    }
}

/// Optional cover extensions for commercial comprehensive
///
/// Declaration order is the order add-ons appear on a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    PoliticalViolence,
    ExcessProtector,
    GoodsInTransit,
    DriverPa,
}

impl AddOn {
    /// Display label used in breakdown lines
    pub fn label(&self) -> &'static str {
        match self {
            AddOn::PoliticalViolence => "Political Violence/Terrorism",
            AddOn::ExcessProtector => "Excess Protector",
            AddOn::GoodsInTransit => "Goods in Transit",
            AddOn::DriverPa => "Driver PA Cover",
        }
    }
}

impl FromStr for AddOn {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "political_violence" => Ok(AddOn::PoliticalViolence),
            "excess_protector" => Ok(AddOn::ExcessProtector),
            "goods_in_transit" => Ok(AddOn::GoodsInTransit),
            "driver_pa" => Ok(AddOn::DriverPa),
            _ => Err(QuoteError::UnknownAddOn(s.to_string())),
        }
    }
}

/// Strongest security device fitted, as it affects pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityLevel {
    /// Tracking device or fleet management system
    Tracking,
    /// Anti-theft device without tracking
    AntiTheft,
    /// No recognised device
    Unprotected,
}

impl SecurityLevel {
    /// Tracking and fleet management outrank an anti-theft device
    pub fn from_flags(has_tracking: bool, has_fleet_management: bool, has_anti_theft: bool) -> Self {
        if has_tracking || has_fleet_management {
            SecurityLevel::Tracking
        } else if has_anti_theft {
            SecurityLevel::AntiTheft
        } else {
            SecurityLevel::Unprotected
        }
    }
}

/// An immutable, validated commercial vehicle quote request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleQuoteRequest {
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
    add_ons: BTreeSet<AddOn>,
}

impl VehicleQuoteRequest {
    /// Starts a builder
    pub fn builder() -> VehicleQuoteRequestBuilder {
        VehicleQuoteRequestBuilder::default()
    }

    pub fn category(&self) -> CommercialCategory {
        self.category
    }

    pub fn sub_category(&self) -> Option<&str> {
        self.sub_category.as_deref()
    }

    /// Special type kind derived from the sub-category
    pub fn special_type_kind(&self) -> SpecialTypeKind {
        self.sub_category
            .as_deref()
            .map(SpecialTypeKind::parse)
            .unwrap_or(SpecialTypeKind::OtherSpecial)
    }

    pub fn gross_weight_kg(&self) -> u32 {
        self.gross_weight_kg
    }

    pub fn usage(&self) -> UsagePattern {
        self.usage
    }

    pub fn vehicle_make(&self) -> &str {
        &self.vehicle_make
    }

    pub fn vehicle_age(&self) -> u32 {
        self.vehicle_age
    }

    pub fn annual_mileage_km(&self) -> u32 {
        self.annual_mileage_km
    }

    pub fn vehicle_value(&self) -> Decimal {
        self.vehicle_value
    }

    pub fn accessories_value(&self) -> Decimal {
        self.accessories_value
    }

    pub fn goods_in_transit_value(&self) -> Decimal {
        self.goods_in_transit_value
    }

    pub fn has_tracking(&self) -> bool {
        self.has_tracking
    }

    pub fn has_fleet_management(&self) -> bool {
        self.has_fleet_management
    }

    pub fn has_anti_theft(&self) -> bool {
        self.has_anti_theft
    }

    pub fn security_level(&self) -> SecurityLevel {
        SecurityLevel::from_flags(self.has_tracking, self.has_fleet_management, self.has_anti_theft)
    }

    pub fn add_ons(&self) -> &BTreeSet<AddOn> {
        &self.add_ons
    }

    pub fn has_add_on(&self, add_on: AddOn) -> bool {
        self.add_ons.contains(&add_on)
    }

    /// Vehicle value plus accessories
    pub fn insured_value(&self) -> Result<Decimal, QuoteError> {
        self.vehicle_value
            .checked_add(self.accessories_value)
            .ok_or_else(|| QuoteError::calculation_fault("insured value overflow"))
    }
}

/// Builder for [`VehicleQuoteRequest`]
///
/// Category, vehicle value and vehicle age are required; everything else has
/// a documented default.
#[derive(Debug, Clone, Default)]
pub struct VehicleQuoteRequestBuilder {
    category: Option<CommercialCategory>,
    sub_category: Option<String>,
    gross_weight_kg: Option<u32>,
    usage: Option<UsagePattern>,
    vehicle_make: Option<String>,
    vehicle_age: Option<u32>,
    annual_mileage_km: Option<u32>,
    vehicle_value: Option<Decimal>,
    accessories_value: Option<Decimal>,
    goods_in_transit_value: Option<Decimal>,
    has_tracking: bool,
    has_fleet_management: bool,
    has_anti_theft: bool,
    add_ons: BTreeSet<AddOn>,
}

impl VehicleQuoteRequestBuilder {
    pub fn category(mut self, category: CommercialCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    pub fn gross_weight_kg(mut self, kg: u32) -> Self {
        self.gross_weight_kg = Some(kg);
        self
    }

    pub fn usage(mut self, usage: UsagePattern) -> Self {
        self.usage = Some(usage);
        self
    }

    pub fn vehicle_make(mut self, make: impl Into<String>) -> Self {
        self.vehicle_make = Some(make.into());
        self
    }

    pub fn vehicle_age(mut self, years: u32) -> Self {
        self.vehicle_age = Some(years);
        self
    }

    pub fn annual_mileage_km(mut self, km: u32) -> Self {
        self.annual_mileage_km = Some(km);
        self
    }

    pub fn vehicle_value(mut self, value: Decimal) -> Self {
        self.vehicle_value = Some(value);
        self
    }

    pub fn accessories_value(mut self, value: Decimal) -> Self {
        self.accessories_value = Some(value);
        self
    }

    pub fn goods_in_transit_value(mut self, value: Decimal) -> Self {
        self.goods_in_transit_value = Some(value);
        self
    }

    pub fn tracking(mut self, fitted: bool) -> Self {
        self.has_tracking = fitted;
        self
    }

    pub fn fleet_management(mut self, fitted: bool) -> Self {
        self.has_fleet_management = fitted;
        self
    }

    pub fn anti_theft(mut self, fitted: bool) -> Self {
        self.has_anti_theft = fitted;
        self
    }

    pub fn add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.insert(add_on);
        self
    }

    pub fn add_ons(mut self, add_ons: impl IntoIterator<Item = AddOn>) -> Self {
        self.add_ons.extend(add_ons);
        self
    }

    /// Validates required fields and builds the request
    pub fn build(self) -> Result<VehicleQuoteRequest, QuoteError> {
        let category = self.category.ok_or_else(|| QuoteError::missing_field("commercialCategory"))?;
        let vehicle_value = self.vehicle_value.ok_or_else(|| QuoteError::missing_field("vehicleValue"))?;
        let vehicle_age = self.vehicle_age.ok_or_else(|| QuoteError::missing_field("vehicleAge"))?;

        let accessories_value = self.accessories_value.unwrap_or(Decimal::ZERO);
        let goods_in_transit_value = self.goods_in_transit_value.unwrap_or(Decimal::ZERO);
        for (field, value) in [
            ("vehicleValue", vehicle_value),
            ("accessoriesValue", accessories_value),
            ("goodsInTransitValue", goods_in_transit_value),
        ] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(QuoteError::validation(format!("{field} must not be negative")));
            }
        }

        let vehicle_make = match self.vehicle_make {
            Some(make) if make.trim().is_empty() => {
                return Err(QuoteError::validation("vehicleMake must not be blank"));
            }
            Some(make) => make.trim().to_string(),
            None => DEFAULT_VEHICLE_MAKE.to_string(),
        };

        Ok(VehicleQuoteRequest {
            category,
            sub_category: self.sub_category.filter(|s| !s.trim().is_empty()),
            gross_weight_kg: self.gross_weight_kg.unwrap_or(DEFAULT_GROSS_WEIGHT_KG),
            usage: self.usage.unwrap_or(UsagePattern::UrbanDelivery),
            vehicle_make,
            vehicle_age,
            annual_mileage_km: self.annual_mileage_km.unwrap_or(DEFAULT_ANNUAL_MILEAGE_KM),
            vehicle_value,
            accessories_value,
            goods_in_transit_value,
            has_tracking: self.has_tracking,
            has_fleet_management: self.has_fleet_management,
            has_anti_theft: self.has_anti_theft,
            add_ons: self.add_ons,
        })
    }
}

/// A raw form field: the app posts numbers either as JSON numbers or as
/// formatted strings such as `"KSh 2,000,000"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(serde_json::Number),
    Text(String),
}

impl FormValue {
    fn raw(&self) -> String {
        match self {
            FormValue::Number(n) => n.to_string(),
            FormValue::Text(s) => s.clone(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, FormValue::Text(s) if s.trim().is_empty())
    }

    /// Parses an amount
    ///
    /// JSON numbers are taken as they are, including sign and exponent.
    /// Text keeps only digits and `.`, so currency prefixes and thousands
    /// separators drop out; a `-` ahead of the first digit makes the amount
    /// negative so that the builder can reject it.
    fn to_amount(&self, field: &str) -> Result<Decimal, QuoteError> {
        let malformed = || QuoteError::malformed_number(field, self.raw());
        match self {
            FormValue::Number(n) => {
                let raw = n.to_string();
                if raw.contains(['e', 'E']) {
                    Decimal::from_scientific(&raw)
                } else {
                    Decimal::from_str(&raw)
                }
                .map_err(|_| malformed())
            }
            FormValue::Text(raw) => {
                let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
                if cleaned.is_empty() {
                    return Err(malformed());
                }
                let amount = Decimal::from_str(&cleaned).map_err(|_| malformed())?;
                let negative = raw.chars().take_while(|c| !c.is_ascii_digit()).any(|c| c == '-');
                Ok(if negative { -amount } else { amount })
            }
        }
    }

    /// Parses a whole number, dropping any fractional part
    fn to_whole(&self, field: &str) -> Result<u32, QuoteError> {
        self.to_amount(field)?
            .trunc()
            .to_u32()
            .ok_or_else(|| QuoteError::malformed_number(field, self.raw()))
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<u64> for FormValue {
    fn from(value: u64) -> Self {
        FormValue::Number(value.into())
    }
}

/// Snapshot of the commercial quotation wizard as posted by the app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleQuoteForm {
    pub commercial_category: Option<String>,
    pub commercial_sub_category: Option<String>,
    pub gross_weight: Option<FormValue>,
    pub usage_pattern: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_age: Option<FormValue>,
    pub annual_mileage: Option<FormValue>,
    pub vehicle_value: Option<FormValue>,
    pub accessories_value: Option<FormValue>,
    pub goods_in_transit_value: Option<FormValue>,
    pub has_tracking: bool,
    pub has_fleet_management: bool,
    pub has_anti_theft: bool,
    pub selected_addons: Vec<String>,
}

/// Present and non-blank
fn filled(value: Option<FormValue>) -> Option<FormValue> {
    value.filter(|v| !v.is_blank())
}

impl TryFrom<VehicleQuoteForm> for VehicleQuoteRequest {
    type Error = QuoteError;

    fn try_from(form: VehicleQuoteForm) -> Result<Self, Self::Error> {
        let category = form
            .commercial_category
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(CommercialCategory::parse)
            .ok_or_else(|| QuoteError::missing_field("commercialCategory"))?;

        let vehicle_value = filled(form.vehicle_value)
            .ok_or_else(|| QuoteError::missing_field("vehicleValue"))?
            .to_amount("vehicleValue")?;
        let vehicle_age = filled(form.vehicle_age)
            .ok_or_else(|| QuoteError::missing_field("vehicleAge"))?
            .to_whole("vehicleAge")?;

        let mut builder = VehicleQuoteRequest::builder()
            .category(category)
            .vehicle_value(vehicle_value)
            .vehicle_age(vehicle_age)
            .tracking(form.has_tracking)
            .fleet_management(form.has_fleet_management)
            .anti_theft(form.has_anti_theft);

        if let Some(sub) = form.commercial_sub_category {
            builder = builder.sub_category(sub);
        }
        if let Some(weight) = filled(form.gross_weight) {
            builder = builder.gross_weight_kg(weight.to_whole("grossWeight")?);
        }
        if let Some(usage) = form.usage_pattern.filter(|s| !s.trim().is_empty()) {
            builder = builder.usage(UsagePattern::parse(&usage));
        }
        if let Some(make) = form.vehicle_make.filter(|s| !s.trim().is_empty()) {
            builder = builder.vehicle_make(make);
        }
        if let Some(mileage) = filled(form.annual_mileage) {
            builder = builder.annual_mileage_km(mileage.to_whole("annualMileage")?);
        }
        if let Some(accessories) = filled(form.accessories_value) {
            builder = builder.accessories_value(accessories.to_amount("accessoriesValue")?);
        }
        if let Some(goods) = filled(form.goods_in_transit_value) {
            builder = builder.goods_in_transit_value(goods.to_amount("goodsInTransitValue")?);
        }

        let add_ons = form
            .selected_addons
            .iter()
            .map(|id| id.parse::<AddOn>())
            .collect::<Result<Vec<_>, _>>()?;

        builder.add_ons(add_ons).build()
    }
}
