//! Insurer comparison
//!
//! Each partner insurer prices the same risk slightly differently. The
//! comparison scales a base quote by a fixed per-insurer factor.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::calculator::whole_shillings;
use crate::error::QuoteError;

/// Adjustment factor for an insurer; unknown insurers are quoted at par
pub fn insurer_adjustment_factor(insurer_id: &str) -> Decimal {
    match insurer_id.trim().to_lowercase().as_str() {
        "jubilee" => dec!(0.95),
        "britam" => dec!(0.98),
        "apa" => dec!(1.02),
        "uap" => dec!(1.00),
        "madison" => dec!(0.96),
        "cic" => dec!(1.01),
        _ => dec!(1.00),
    }
}

/// One insurer's adjusted premium
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurerQuote {
    pub insurer_id: String,
    pub factor: Decimal,
    /// Whole percentage, e.g. -5 for a 5% reduction
    pub adjustment_percent: Decimal,
    pub original_premium: Money,
    pub premium: Money,
}

/// Scales `base_total` for each insurer, preserving input order
///
/// # Arguments
///
/// * `base_total` - Total premium of the base quote
/// * `insurer_ids` - Insurers to quote, duplicates are quoted twice
pub fn compare_insurers<S: AsRef<str>>(
    base_total: Money,
    insurer_ids: &[S],
) -> Result<Vec<InsurerQuote>, QuoteError> {
    insurer_ids
        .iter()
        .map(|id| -> Result<InsurerQuote, QuoteError> {
            let insurer_id = id.as_ref().to_string();
            let factor = insurer_adjustment_factor(&insurer_id);
            let premium = whole_shillings(Rate::new(factor).apply(&base_total)?.amount());
            let adjustment_percent = ((factor - Decimal::ONE) * dec!(100))
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            Ok(InsurerQuote {
                insurer_id,
                factor,
                adjustment_percent,
                original_premium: base_total,
                premium,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jubilee_discount() {
        let quotes = compare_insurers(Money::kes(dec!(100000)), &["jubilee"]).unwrap();
        assert_eq!(quotes[0].premium.amount(), dec!(95000));
        assert_eq!(quotes[0].adjustment_percent, dec!(-5));
    }

    #[test]
    fn test_order_preserved_and_unknown_at_par() {
        let quotes = compare_insurers(Money::kes(dec!(80360)), &["apa", "acme", "britam"]).unwrap();
        let ids: Vec<_> = quotes.iter().map(|q| q.insurer_id.as_str()).collect();
        assert_eq!(ids, ["apa", "acme", "britam"]);
        assert_eq!(quotes[0].premium.amount(), dec!(81967));
        assert_eq!(quotes[1].premium.amount(), dec!(80360));
        assert_eq!(quotes[1].adjustment_percent, dec!(0));
    }

    #[test]
    fn test_factor_lookup_ignores_case() {
        assert_eq!(insurer_adjustment_factor("Madison"), dec!(0.96));
        assert_eq!(insurer_adjustment_factor(" CIC "), dec!(1.01));
    }

    #[test]
    fn test_empty_list() {
        let quotes = compare_insurers::<&str>(Money::kes(dec!(1000)), &[]).unwrap();
        assert!(quotes.is_empty());
    }
}
