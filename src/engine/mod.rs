//! The estimation engine.
//!
//! `calculate` is a pure function: no I/O, no shared state, no error path.
//! Given the same questionnaire it returns the same result on every call,
//! on any thread. All arithmetic runs on `Decimal`; unrecognized enum input
//! has already collapsed to default variants at deserialization, and the
//! remaining degeneracies (no satisfaction scores, non-positive net savings)
//! resolve to documented policy values instead of failures.

pub mod tables;

mod narrative;
mod spend;
mod tiers;
mod timeline;

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{
    CalculationResult, CompetitiveAnalysis, Financials, QuestionnaireResponse,
    RecommendedSolution, VsEnterprise, VsStatusQuo,
};
use tables::{
    ENTERPRISE_COST_DIFFERENCE_PERCENT, EFFICIENCY_TO_REVENUE_FRACTION, GROWTH_POTENTIAL_MULTIPLIER,
    HAWAII_MARKET_FACTORS, INEFFICIENCY_CEILING, LABOR_SAVINGS_FRACTION, MAX_SATISFACTION,
    NEUTRAL_SATISFACTION, PAIN_POINT_BOOST, PAYBACK_NEVER_MONTHS, PRIORITY_AREA_BOOST,
    RAMP_UP_DISCOUNT, REVENUE_CONTRIBUTION_FRACTION, RISK_REDUCTION_MULTIPLIER,
    SAVINGS_PERCENT_CAP,
};

/// Map a validated questionnaire to the full calculation result.
pub fn calculate(data: &QuestionnaireResponse) -> CalculationResult {
    let company = &data.company_info;
    let prefs = &data.preferences;

    let benchmark = tables::industry_benchmark(company.industry);
    let size = tables::size_multipliers(company.company_size);
    let base_tier = tables::solution_tier(prefs.budget_range);

    let current_spend = spend::estimate_monthly_spend(
        &data.tech_assessment,
        company.company_size,
        company.revenue_range,
        &benchmark,
    );

    let solution = tiers::scale_solution(&base_tier, current_spend);

    // Dissatisfaction with existing tools is treated as a hidden cost,
    // scaled linearly from fully-satisfied (zero) to the ceiling fraction.
    let avg_satisfaction = average_satisfaction(&data.tech_assessment.satisfaction_scores);
    let inefficiency_cost = current_spend
        * ((MAX_SATISFACTION - avg_satisfaction) / MAX_SATISFACTION)
        * INEFFICIENCY_CEILING;

    let priority_count = Decimal::from(data.growth_goals.priority_areas.len() as u64);
    let efficiency_gains =
        benchmark.efficiency_potential * (Decimal::ONE + priority_count * PRIORITY_AREA_BOOST);

    // More self-reported pain points imply more achievable savings, but the
    // extrapolation is capped.
    let pain_count = Decimal::from(company.current_pain_points.len() as u64);
    let savings_percent = (benchmark.avg_savings * (Decimal::ONE + pain_count * PAIN_POINT_BOOST))
        .min(SAVINGS_PERCENT_CAP);

    let adjusted_monthly_savings =
        (current_spend + inefficiency_cost) * savings_percent * RAMP_UP_DISCOUNT;
    let revenue_growth_factor =
        Decimal::ONE + efficiency_gains * EFFICIENCY_TO_REVENUE_FRACTION;
    let revenue_impact = current_spend * REVENUE_CONTRIBUTION_FRACTION * revenue_growth_factor;
    let labor_savings =
        current_spend * LABOR_SAVINGS_FRACTION * HAWAII_MARKET_FACTORS.labor_cost_premium;

    let total_monthly_savings = adjusted_monthly_savings + revenue_impact + labor_savings;
    let net_monthly_savings = total_monthly_savings - solution.monthly_investment;

    let implementation_cost =
        solution.monthly_investment * size.cost * HAWAII_MARKET_FACTORS.cost_premium;

    let timeline_months = (Decimal::from(benchmark.implementation_months) * size.timeline)
        .ceil()
        .to_u32()
        .unwrap_or(benchmark.implementation_months);

    let payback_months = if net_monthly_savings > Decimal::ZERO {
        // Total outlay before savings start compounding: the one-off
        // implementation cost plus the first two months of subscription.
        let total_investment = implementation_cost + solution.monthly_investment * Decimal::TWO;
        (total_investment / net_monthly_savings)
            .ceil()
            .to_u32()
            .unwrap_or(PAYBACK_NEVER_MONTHS)
    } else {
        PAYBACK_NEVER_MONTHS
    };

    let horizon = Decimal::from(36);
    let three_year_gross_savings = total_monthly_savings * horizon;
    let three_year_investment = implementation_cost + solution.monthly_investment * horizon;
    let three_year_net_benefit = three_year_gross_savings - three_year_investment;
    let three_year_roi =
        three_year_net_benefit / three_year_investment * Decimal::ONE_HUNDRED;

    let description =
        narrative::solution_description(&solution.name, company.industry, company.location);
    let benefits = narrative::generate_benefits(
        company,
        &data.growth_goals,
        efficiency_gains,
        savings_percent,
    );
    let phases =
        timeline::generate_timeline(timeline_months, prefs.implementation_type, company.company_size);

    CalculationResult {
        recommended_solution: RecommendedSolution {
            title: solution.name.clone(),
            description,
            features: solution.features.clone(),
            benefits,
        },
        financials: Financials {
            estimated_monthly_savings: round_whole(total_monthly_savings),
            estimated_annual_savings: round_whole(total_monthly_savings * Decimal::from(12)),
            implementation_cost: round_whole(implementation_cost),
            monthly_investment: round_whole(solution.monthly_investment),
            payback_period_months: payback_months,
            three_year_roi: round_whole(three_year_roi),
            total_three_year_value: round_whole(three_year_net_benefit),
        },
        competitive_analysis: CompetitiveAnalysis {
            vs_enterprise: VsEnterprise {
                cost_difference_percent: ENTERPRISE_COST_DIFFERENCE_PERCENT,
                time_to_implement: format!(
                    "{timeline_months} months vs {} months",
                    timeline_months * 3
                ),
                flexibility: "High - Hawaii-focused vs Generic".to_string(),
            },
            vs_status_quo: VsStatusQuo {
                efficiency_gains_percent: percent_of(efficiency_gains),
                growth_potential_percent: round_whole(
                    efficiency_gains * GROWTH_POTENTIAL_MULTIPLIER,
                ),
                risk_reduction_percent: round_whole(savings_percent * RISK_REDUCTION_MULTIPLIER),
            },
        },
        timeline: phases,
    }
}

/// Average reported satisfaction, defaulting to the neutral midpoint when no
/// scores were supplied.
fn average_satisfaction(scores: &BTreeMap<String, Decimal>) -> Decimal {
    if scores.is_empty() {
        return NEUTRAL_SATISFACTION;
    }
    let sum: Decimal = scores.values().copied().sum();
    sum / Decimal::from(scores.len() as u64)
}

/// Express a ratio as a whole percentage.
pub(crate) fn percent_of(ratio: Decimal) -> i64 {
    round_whole(ratio * Decimal::ONE_HUNDRED)
}

/// Round half-away-from-zero to a whole number.
pub(crate) fn round_whole(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}
