//! Reference tables and fixed model constants.
//!
//! The model is table-driven on purpose: new industries, size buckets, or
//! solution tiers are added by inserting a row here, not by touching the
//! formulas in the rest of the engine. Every lookup is an exhaustive match
//! over a closed enum, so there is no missing-key path.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{BudgetRange, CompanySize, Industry, RevenueRange};

/// Fixed market adjustment factors for operating in Hawaii.
#[derive(Debug, Clone, Copy)]
pub struct MarketFactors {
    /// Costs run higher than the mainland.
    pub cost_premium: Decimal,
    /// Implementation is slower due to logistics.
    pub implementation_speed: Decimal,
    /// Local support is valued more.
    pub local_support_value: Decimal,
    /// Remote work adoption rate.
    pub remote_work_adoption: Decimal,
    /// Share of businesses affected by tourism fluctuations.
    pub tourism_dependency: Decimal,
    /// No additional overhead applied.
    pub overhead_multiplier: Decimal,
    /// Labor costs run higher, which makes automation savings worth more.
    pub labor_cost_premium: Decimal,
}

pub const HAWAII_MARKET_FACTORS: MarketFactors = MarketFactors {
    cost_premium: dec!(1.10),
    implementation_speed: dec!(0.90),
    local_support_value: dec!(1.35),
    remote_work_adoption: dec!(1.4),
    tourism_dependency: dec!(0.7),
    overhead_multiplier: dec!(1.0),
    labor_cost_premium: dec!(1.25),
};

/// Per-industry benchmark row.
#[derive(Debug, Clone, Copy)]
pub struct IndustryBenchmark {
    /// Typical technology spend as a share of revenue.
    pub tech_spend_percent: Decimal,
    /// Achievable efficiency gains.
    pub efficiency_potential: Decimal,
    /// Average achievable cost savings.
    pub avg_savings: Decimal,
    /// Baseline implementation duration in months.
    pub implementation_months: u32,
}

/// Benchmark lookup. `Industry::Other` doubles as the fallback row.
pub fn industry_benchmark(industry: Industry) -> IndustryBenchmark {
    match industry {
        Industry::TourismHospitality => IndustryBenchmark {
            tech_spend_percent: dec!(0.035),
            efficiency_potential: dec!(0.28),
            avg_savings: dec!(0.22),
            implementation_months: 3,
        },
        Industry::RealEstate => IndustryBenchmark {
            tech_spend_percent: dec!(0.025),
            efficiency_potential: dec!(0.25),
            avg_savings: dec!(0.20),
            implementation_months: 3,
        },
        Industry::Healthcare => IndustryBenchmark {
            tech_spend_percent: dec!(0.045),
            efficiency_potential: dec!(0.20),
            avg_savings: dec!(0.16),
            implementation_months: 5,
        },
        Industry::RetailEcommerce => IndustryBenchmark {
            tech_spend_percent: dec!(0.04),
            efficiency_potential: dec!(0.35),
            avg_savings: dec!(0.28),
            implementation_months: 2,
        },
        Industry::ProfessionalServices => IndustryBenchmark {
            tech_spend_percent: dec!(0.03),
            efficiency_potential: dec!(0.32),
            avg_savings: dec!(0.25),
            implementation_months: 2,
        },
        Industry::Construction => IndustryBenchmark {
            tech_spend_percent: dec!(0.02),
            efficiency_potential: dec!(0.20),
            avg_savings: dec!(0.15),
            implementation_months: 4,
        },
        Industry::Agriculture => IndustryBenchmark {
            tech_spend_percent: dec!(0.015),
            efficiency_potential: dec!(0.22),
            avg_savings: dec!(0.18),
            implementation_months: 5,
        },
        Industry::Education => IndustryBenchmark {
            tech_spend_percent: dec!(0.035),
            efficiency_potential: dec!(0.14),
            avg_savings: dec!(0.08),
            implementation_months: 7,
        },
        Industry::NonProfit => IndustryBenchmark {
            tech_spend_percent: dec!(0.025),
            efficiency_potential: dec!(0.25),
            avg_savings: dec!(0.20),
            implementation_months: 3,
        },
        Industry::Government => IndustryBenchmark {
            tech_spend_percent: dec!(0.03),
            efficiency_potential: dec!(0.10),
            avg_savings: dec!(0.06),
            implementation_months: 12,
        },
        Industry::FinanceInsurance => IndustryBenchmark {
            tech_spend_percent: dec!(0.05),
            efficiency_potential: dec!(0.16),
            avg_savings: dec!(0.12),
            implementation_months: 8,
        },
        Industry::Manufacturing => IndustryBenchmark {
            tech_spend_percent: dec!(0.025),
            efficiency_potential: dec!(0.18),
            avg_savings: dec!(0.14),
            implementation_months: 9,
        },
        Industry::Technology => IndustryBenchmark {
            tech_spend_percent: dec!(0.08),
            efficiency_potential: dec!(0.18),
            avg_savings: dec!(0.15),
            implementation_months: 2,
        },
        Industry::Other => IndustryBenchmark {
            tech_spend_percent: dec!(0.03),
            efficiency_potential: dec!(0.20),
            avg_savings: dec!(0.16),
            implementation_months: 4,
        },
    }
}

/// Size-based scaling multipliers.
#[derive(Debug, Clone, Copy)]
pub struct SizeMultipliers {
    pub cost: Decimal,
    pub complexity: Decimal,
    pub timeline: Decimal,
}

/// Multiplier lookup. The smallest bucket is the 1.0 baseline.
pub fn size_multipliers(size: CompanySize) -> SizeMultipliers {
    match size {
        CompanySize::Size1To10 => SizeMultipliers {
            cost: dec!(1),
            complexity: dec!(1),
            timeline: dec!(1),
        },
        CompanySize::Size11To50 => SizeMultipliers {
            cost: dec!(1.5),
            complexity: dec!(1.3),
            timeline: dec!(1.2),
        },
        CompanySize::Size51To100 => SizeMultipliers {
            cost: dec!(2.2),
            complexity: dec!(1.8),
            timeline: dec!(1.5),
        },
        CompanySize::Size100Plus => SizeMultipliers {
            cost: dec!(3.5),
            complexity: dec!(2.5),
            timeline: dec!(2),
        },
    }
}

/// A named solution package with a fixed feature list and baseline price.
#[derive(Debug, Clone, Copy)]
pub struct SolutionTier {
    pub name: &'static str,
    pub features: &'static [&'static str],
    pub monthly_investment: Decimal,
}

/// Budget-bucket to baseline tier mapping. `under-5k` is the fallback tier.
pub fn solution_tier(budget: BudgetRange) -> SolutionTier {
    match budget {
        BudgetRange::Under5k => SolutionTier {
            name: "Essential Hawaii Business Suite",
            features: &[
                "Core CRM & customer management",
                "Basic automation workflows",
                "Financial tracking & reporting",
                "Email marketing tools",
                "Local payment processing",
                "Mobile-first design",
            ],
            monthly_investment: dec!(950),
        },
        BudgetRange::From5kTo15k => SolutionTier {
            name: "Hawaii Growth Accelerator Platform",
            features: &[
                "Advanced CRM with AI insights",
                "Marketing automation suite",
                "Inventory & supply chain management",
                "Advanced analytics & BI",
                "Multi-location support",
                "Custom integrations",
                "Priority local support",
            ],
            monthly_investment: dec!(2500),
        },
        BudgetRange::From15kTo50k => SolutionTier {
            name: "Enterprise Hawaii Solution",
            features: &[
                "Full enterprise CRM",
                "Complete automation platform",
                "Advanced AI & predictive analytics",
                "Custom application development",
                "Dedicated implementation team",
                "White-glove onboarding",
                "24/7 priority support",
                "Compliance & security suite",
            ],
            monthly_investment: dec!(5500),
        },
        BudgetRange::Over50k => SolutionTier {
            name: "Custom Enterprise Transformation",
            features: &[
                "Fully customized platform",
                "Enterprise architecture design",
                "Complete digital transformation",
                "Dedicated development team",
                "Executive consulting",
                "Change management program",
                "Unlimited scaling",
                "White-label options",
            ],
            monthly_investment: dec!(12000),
        },
    }
}

/// Fixed self-directed tier for micro-businesses. Recommending a
/// bucket-priced package below this scale would quote more than the
/// prospect spends today and produce a non-credible ROI.
pub const DIY_TIER: SolutionTier = SolutionTier {
    name: "Hawaii DIY Digital Transformation Kit",
    features: &[
        "Self-paced implementation guides",
        "Pre-configured tool templates",
        "Video training library (Hawaii-specific)",
        "Monthly group coaching calls",
        "Community support forum",
        "Basic email support",
        "Quarterly strategy reviews",
        "Local vendor recommendations",
    ],
    monthly_investment: dec!(99),
};

pub const STARTER_PACKAGE_NAME: &str = "Hawaii Business Starter Package";
pub const GROWTH_PACKAGE_NAME: &str = "Hawaii Business Growth Package";

/// Baseline monthly spend assumed per size bucket when nothing better is
/// known.
pub fn base_spend(size: CompanySize) -> Decimal {
    match size {
        CompanySize::Size1To10 => dec!(500),
        CompanySize::Size11To50 => dec!(2500),
        CompanySize::Size51To100 => dec!(7500),
        CompanySize::Size100Plus => dec!(15000),
    }
}

/// Midpoint of each annual revenue bucket, used for spend estimation.
pub fn revenue_midpoint(range: RevenueRange) -> Decimal {
    match range {
        RevenueRange::Under500k => dec!(250000),
        RevenueRange::From500kTo1m => dec!(750000),
        RevenueRange::From1mTo5m => dec!(3000000),
        RevenueRange::From5mTo10m => dec!(7500000),
        RevenueRange::From10mTo50m => dec!(30000000),
        RevenueRange::Over50m => dec!(75000000),
    }
}

// Tier-scaling thresholds on observed monthly spend.
pub const MICRO_SPEND_THRESHOLD: Decimal = dec!(1000);
pub const SMALL_SPEND_THRESHOLD: Decimal = dec!(2000);
pub const MEDIUM_SPEND_THRESHOLD: Decimal = dec!(5000);
pub const SMALL_CAP_FRACTION: Decimal = dec!(0.5);
pub const SMALL_INVESTMENT_FLOOR: Decimal = dec!(299);
pub const SMALL_RELABEL_FRACTION: Decimal = dec!(0.6);
pub const MEDIUM_CAP_FRACTION: Decimal = dec!(0.75);
pub const MEDIUM_RELABEL_FRACTION: Decimal = dec!(0.8);

// Spend estimation.
pub const AVG_TOOL_MONTHLY_COST: Decimal = dec!(200);

// Satisfaction and inefficiency.
pub const MAX_SATISFACTION: Decimal = dec!(5);
pub const NEUTRAL_SATISFACTION: Decimal = dec!(3);
pub const INEFFICIENCY_CEILING: Decimal = dec!(0.35);

// Savings model.
pub const PRIORITY_AREA_BOOST: Decimal = dec!(0.01);
pub const PAIN_POINT_BOOST: Decimal = dec!(0.04);
pub const SAVINGS_PERCENT_CAP: Decimal = dec!(0.40);
pub const RAMP_UP_DISCOUNT: Decimal = dec!(0.90);
pub const REVENUE_CONTRIBUTION_FRACTION: Decimal = dec!(0.25);
pub const EFFICIENCY_TO_REVENUE_FRACTION: Decimal = dec!(0.70);
pub const LABOR_SAVINGS_FRACTION: Decimal = dec!(0.20);

// Competitive framing.
pub const ENTERPRISE_COST_DIFFERENCE_PERCENT: i64 = -65;
pub const GROWTH_POTENTIAL_MULTIPLIER: Decimal = dec!(150);
pub const RISK_REDUCTION_MULTIPLIER: Decimal = dec!(200);

/// Sentinel payback period when net monthly savings never turn positive.
pub const PAYBACK_NEVER_MONTHS: u32 = 999;
