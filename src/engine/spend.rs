//! Current monthly technology spend estimation.
//!
//! Self-reported spend is used verbatim when present. When it is missing the
//! engine combines several signals and always keeps the highest estimate, so
//! potential savings are never computed against an understated baseline.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::engine::tables::{
    self, AVG_TOOL_MONTHLY_COST, HAWAII_MARKET_FACTORS, IndustryBenchmark,
};
use crate::types::{CompanySize, RevenueRange, TechAssessment};

/// Estimate the prospect's current monthly technology spend.
///
/// An explicitly supplied positive total wins outright. Otherwise the
/// estimate starts from the size-bucket baseline, is replaced by a
/// revenue-derived figure when a revenue range was given, raised to a
/// per-tool floor when the reported tool inventory implies higher spend,
/// and finally scaled by the regional cost premium.
pub fn estimate_monthly_spend(
    assessment: &TechAssessment,
    size: CompanySize,
    revenue_range: Option<RevenueRange>,
    benchmark: &IndustryBenchmark,
) -> Decimal {
    if let Some(total) = assessment.total_monthly_cost {
        if total > Decimal::ZERO {
            return total;
        }
    }

    let mut estimate = tables::base_spend(size);

    if let Some(range) = revenue_range {
        let annual_tech_budget = tables::revenue_midpoint(range) * benchmark.tech_spend_percent;
        estimate = annual_tech_budget / Decimal::from(12);
    }

    let tool_count: usize = assessment.current_tools.values().map(Vec::len).sum();
    if tool_count > 0 {
        let from_tools = Decimal::from(tool_count as u64) * AVG_TOOL_MONTHLY_COST;
        estimate = estimate.max(from_tools);
    }

    (estimate * HAWAII_MARKET_FACTORS.cost_premium)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::engine::tables::industry_benchmark;
    use crate::types::{Industry, ToolEntry};

    fn empty_assessment() -> TechAssessment {
        TechAssessment {
            current_tools: BTreeMap::new(),
            total_monthly_cost: None,
            satisfaction_scores: BTreeMap::new(),
        }
    }

    #[test]
    fn test_explicit_total_used_verbatim() {
        let assessment = TechAssessment {
            total_monthly_cost: Some(dec!(500)),
            ..empty_assessment()
        };
        let benchmark = industry_benchmark(Industry::Technology);
        let spend = estimate_monthly_spend(
            &assessment,
            CompanySize::Size1To10,
            None,
            &benchmark,
        );
        assert_eq!(spend, dec!(500));
    }

    #[test]
    fn test_zero_total_falls_through_to_estimate() {
        let assessment = TechAssessment {
            total_monthly_cost: Some(Decimal::ZERO),
            ..empty_assessment()
        };
        let benchmark = industry_benchmark(Industry::Other);
        let spend = estimate_monthly_spend(
            &assessment,
            CompanySize::Size1To10,
            None,
            &benchmark,
        );
        // Size baseline 500 with the 10% cost premium.
        assert_eq!(spend, dec!(550));
    }

    #[test]
    fn test_revenue_signal_replaces_size_baseline() {
        let benchmark = industry_benchmark(Industry::RetailEcommerce);
        let spend = estimate_monthly_spend(
            &empty_assessment(),
            CompanySize::Size1To10,
            Some(RevenueRange::From1mTo5m),
            &benchmark,
        );
        // 3_000_000 * 0.04 / 12 = 10_000, premium-adjusted to 11_000.
        assert_eq!(spend, dec!(11000));
    }

    #[test]
    fn test_tool_inventory_raises_low_estimates() {
        let mut tools = BTreeMap::new();
        tools.insert(
            "crm".to_string(),
            (0..5)
                .map(|i| ToolEntry {
                    name: format!("tool-{i}"),
                    monthly_cost: dec!(100),
                    satisfaction: dec!(3),
                })
                .collect(),
        );
        let assessment = TechAssessment {
            current_tools: tools,
            ..empty_assessment()
        };
        let benchmark = industry_benchmark(Industry::Other);
        let spend = estimate_monthly_spend(
            &assessment,
            CompanySize::Size1To10,
            None,
            &benchmark,
        );
        // 5 tools * $200 = 1000 beats the 500 size baseline; premium applied.
        assert_eq!(spend, dec!(1100));
    }
}
