//! Tier scaling policy.
//!
//! Budget self-reports and observed spend frequently diverge. These rules cap
//! the recommended investment relative to what the prospect actually spends
//! today, so the quote never exceeds a scale the business can support. The
//! policy is an ordered list of threshold/action pairs evaluated
//! top-to-bottom; the first matching rule wins.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::engine::tables::{
    DIY_TIER, GROWTH_PACKAGE_NAME, MEDIUM_CAP_FRACTION, MEDIUM_RELABEL_FRACTION,
    MEDIUM_SPEND_THRESHOLD, MICRO_SPEND_THRESHOLD, SMALL_CAP_FRACTION, SMALL_INVESTMENT_FLOOR,
    SMALL_RELABEL_FRACTION, SMALL_SPEND_THRESHOLD, STARTER_PACKAGE_NAME, SolutionTier,
};

/// The solution recommendation after spend-based scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledSolution {
    pub name: String,
    pub features: Vec<String>,
    pub monthly_investment: Decimal,
}

enum TierAction {
    /// Replace the tier entirely with the fixed self-directed kit.
    DiyOverride,
    /// Cap the investment at `fraction` of current spend (never below
    /// `floor`), and relabel the tier when the cap lands below
    /// `relabel_below` of the base price.
    Cap {
        fraction: Decimal,
        floor: Decimal,
        relabel_below: Decimal,
        relabel_name: &'static str,
    },
}

struct TierRule {
    /// Rule applies when current spend is strictly below this threshold.
    below: Decimal,
    action: TierAction,
}

const TIER_RULES: &[TierRule] = &[
    TierRule {
        below: MICRO_SPEND_THRESHOLD,
        action: TierAction::DiyOverride,
    },
    TierRule {
        below: SMALL_SPEND_THRESHOLD,
        action: TierAction::Cap {
            fraction: SMALL_CAP_FRACTION,
            floor: SMALL_INVESTMENT_FLOOR,
            relabel_below: SMALL_RELABEL_FRACTION,
            relabel_name: STARTER_PACKAGE_NAME,
        },
    },
    TierRule {
        below: MEDIUM_SPEND_THRESHOLD,
        action: TierAction::Cap {
            fraction: MEDIUM_CAP_FRACTION,
            floor: Decimal::ZERO,
            relabel_below: MEDIUM_RELABEL_FRACTION,
            relabel_name: GROWTH_PACKAGE_NAME,
        },
    },
];

/// Scale the budget-bucket tier against observed current spend.
pub fn scale_solution(base: &SolutionTier, current_spend: Decimal) -> ScaledSolution {
    for rule in TIER_RULES {
        if current_spend < rule.below {
            return apply(&rule.action, base, current_spend);
        }
    }

    ScaledSolution {
        name: base.name.to_string(),
        features: owned_features(base),
        monthly_investment: round_dollars(base.monthly_investment),
    }
}

fn apply(action: &TierAction, base: &SolutionTier, current_spend: Decimal) -> ScaledSolution {
    match action {
        TierAction::DiyOverride => ScaledSolution {
            name: DIY_TIER.name.to_string(),
            features: owned_features(&DIY_TIER),
            monthly_investment: round_dollars(DIY_TIER.monthly_investment),
        },
        TierAction::Cap {
            fraction,
            floor,
            relabel_below,
            relabel_name,
        } => {
            let capped = base
                .monthly_investment
                .min((current_spend * fraction).max(*floor));
            let name = if capped < base.monthly_investment * relabel_below {
                relabel_name.to_string()
            } else {
                base.name.to_string()
            };
            ScaledSolution {
                name,
                features: owned_features(base),
                monthly_investment: round_dollars(capped),
            }
        }
    }
}

fn owned_features(tier: &SolutionTier) -> Vec<String> {
    tier.features.iter().map(|f| f.to_string()).collect()
}

fn round_dollars(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
