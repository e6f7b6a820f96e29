//! Questionnaire input and calculation result types.
//!
//! Wire names are camelCase to match the intake payload. Every enumerated
//! input dimension is a closed enum; unrecognized strings collapse to a
//! documented default variant at deserialization, so table lookups in the
//! engine can never miss a key.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Industry vertical. Unknown values map to [`Industry::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Industry {
    TourismHospitality,
    RealEstate,
    Healthcare,
    RetailEcommerce,
    ProfessionalServices,
    Construction,
    Agriculture,
    Education,
    NonProfit,
    Government,
    FinanceInsurance,
    Manufacturing,
    Technology,
    Other,
}

impl Industry {
    /// Human-readable label, as used on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Industry::TourismHospitality => "Tourism & Hospitality",
            Industry::RealEstate => "Real Estate",
            Industry::Healthcare => "Healthcare",
            Industry::RetailEcommerce => "Retail & E-commerce",
            Industry::ProfessionalServices => "Professional Services",
            Industry::Construction => "Construction",
            Industry::Agriculture => "Agriculture",
            Industry::Education => "Education",
            Industry::NonProfit => "Non-profit",
            Industry::Government => "Government",
            Industry::FinanceInsurance => "Finance & Insurance",
            Industry::Manufacturing => "Manufacturing",
            Industry::Technology => "Technology",
            Industry::Other => "Other",
        }
    }
}

impl From<String> for Industry {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Tourism & Hospitality" => Industry::TourismHospitality,
            "Real Estate" => Industry::RealEstate,
            "Healthcare" => Industry::Healthcare,
            "Retail & E-commerce" => Industry::RetailEcommerce,
            "Professional Services" => Industry::ProfessionalServices,
            "Construction" => Industry::Construction,
            "Agriculture" => Industry::Agriculture,
            "Education" => Industry::Education,
            "Non-profit" => Industry::NonProfit,
            "Government" => Industry::Government,
            "Finance & Insurance" => Industry::FinanceInsurance,
            "Manufacturing" => Industry::Manufacturing,
            "Technology" => Industry::Technology,
            _ => Industry::Other,
        }
    }
}

impl From<Industry> for String {
    fn from(v: Industry) -> Self {
        v.label().to_string()
    }
}

/// Employee-count bucket. Unknown values map to the smallest bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompanySize {
    Size1To10,
    Size11To50,
    Size51To100,
    Size100Plus,
}

impl CompanySize {
    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Size1To10 => "1-10",
            CompanySize::Size11To50 => "11-50",
            CompanySize::Size51To100 => "51-100",
            CompanySize::Size100Plus => "100+",
        }
    }
}

impl From<String> for CompanySize {
    fn from(s: String) -> Self {
        match s.as_str() {
            "11-50" => CompanySize::Size11To50,
            "51-100" => CompanySize::Size51To100,
            "100+" => CompanySize::Size100Plus,
            _ => CompanySize::Size1To10,
        }
    }
}

impl From<CompanySize> for String {
    fn from(v: CompanySize) -> Self {
        v.label().to_string()
    }
}

/// Hawaii sub-area. Unknown values map to Honolulu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Location {
    OahuHonolulu,
    OahuOther,
    Maui,
    BigIslandKona,
    BigIslandHilo,
    Kauai,
    Molokai,
    Lanai,
    MultipleIslands,
}

impl Location {
    pub fn label(&self) -> &'static str {
        match self {
            Location::OahuHonolulu => "Oahu - Honolulu",
            Location::OahuOther => "Oahu - Other",
            Location::Maui => "Maui",
            Location::BigIslandKona => "Big Island - Kona",
            Location::BigIslandHilo => "Big Island - Hilo",
            Location::Kauai => "Kauai",
            Location::Molokai => "Molokai",
            Location::Lanai => "Lanai",
            Location::MultipleIslands => "Multiple Islands",
        }
    }

    /// Short place name used when interpolating narrative text.
    pub fn region_name(&self) -> &'static str {
        match self {
            Location::OahuHonolulu => "Honolulu",
            Location::OahuOther => "Oahu",
            Location::Maui => "Maui",
            Location::BigIslandKona => "Kona",
            Location::BigIslandHilo => "Hilo",
            Location::Kauai => "Kauai",
            Location::Molokai => "Molokai",
            Location::Lanai => "Lanai",
            Location::MultipleIslands => "Hawaii",
        }
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Oahu - Other" => Location::OahuOther,
            "Maui" => Location::Maui,
            "Big Island - Kona" => Location::BigIslandKona,
            "Big Island - Hilo" => Location::BigIslandHilo,
            "Kauai" => Location::Kauai,
            "Molokai" => Location::Molokai,
            "Lanai" => Location::Lanai,
            "Multiple Islands" => Location::MultipleIslands,
            _ => Location::OahuHonolulu,
        }
    }
}

impl From<Location> for String {
    fn from(v: Location) -> Self {
        v.label().to_string()
    }
}

/// Annual revenue bucket. Unknown values map to the lowest bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RevenueRange {
    Under500k,
    From500kTo1m,
    From1mTo5m,
    From5mTo10m,
    From10mTo50m,
    Over50m,
}

impl RevenueRange {
    pub fn label(&self) -> &'static str {
        match self {
            RevenueRange::Under500k => "under-500k",
            RevenueRange::From500kTo1m => "500k-1m",
            RevenueRange::From1mTo5m => "1m-5m",
            RevenueRange::From5mTo10m => "5m-10m",
            RevenueRange::From10mTo50m => "10m-50m",
            RevenueRange::Over50m => "50m+",
        }
    }
}

impl From<String> for RevenueRange {
    fn from(s: String) -> Self {
        match s.as_str() {
            "500k-1m" => RevenueRange::From500kTo1m,
            "1m-5m" => RevenueRange::From1mTo5m,
            "5m-10m" => RevenueRange::From5mTo10m,
            "10m-50m" => RevenueRange::From10mTo50m,
            "50m+" => RevenueRange::Over50m,
            _ => RevenueRange::Under500k,
        }
    }
}

impl From<RevenueRange> for String {
    fn from(v: RevenueRange) -> Self {
        v.label().to_string()
    }
}

/// Company maturity. Not used by the engine arithmetic; forwarded to sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GrowthStage {
    Startup,
    Growth,
    Established,
    Enterprise,
}

impl GrowthStage {
    pub fn label(&self) -> &'static str {
        match self {
            GrowthStage::Startup => "startup",
            GrowthStage::Growth => "growth",
            GrowthStage::Established => "established",
            GrowthStage::Enterprise => "enterprise",
        }
    }
}

impl From<String> for GrowthStage {
    fn from(s: String) -> Self {
        match s.as_str() {
            "growth" => GrowthStage::Growth,
            "established" => GrowthStage::Established,
            "enterprise" => GrowthStage::Enterprise,
            _ => GrowthStage::Startup,
        }
    }
}

impl From<GrowthStage> for String {
    fn from(v: GrowthStage) -> Self {
        v.label().to_string()
    }
}

/// Monthly budget bucket. Unknown values map to the lowest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BudgetRange {
    Under5k,
    From5kTo15k,
    From15kTo50k,
    Over50k,
}

impl BudgetRange {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Under5k => "under-5k",
            BudgetRange::From5kTo15k => "5k-15k",
            BudgetRange::From15kTo50k => "15k-50k",
            BudgetRange::Over50k => "50k+",
        }
    }
}

impl From<String> for BudgetRange {
    fn from(s: String) -> Self {
        match s.as_str() {
            "5k-15k" => BudgetRange::From5kTo15k,
            "15k-50k" => BudgetRange::From15kTo50k,
            "50k+" => BudgetRange::Over50k,
            _ => BudgetRange::Under5k,
        }
    }
}

impl From<BudgetRange> for String {
    fn from(v: BudgetRange) -> Self {
        v.label().to_string()
    }
}

/// When the prospect wants to start. Unknown values map to "not sure yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectTimeline {
    Immediate,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl ProjectTimeline {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectTimeline::Immediate => "immediate",
            ProjectTimeline::ThreeMonths => "3-months",
            ProjectTimeline::SixMonths => "6-months",
            ProjectTimeline::TwelveMonths => "12-months",
        }
    }
}

impl From<String> for ProjectTimeline {
    fn from(s: String) -> Self {
        match s.as_str() {
            "immediate" => ProjectTimeline::Immediate,
            "3-months" => ProjectTimeline::ThreeMonths,
            "6-months" => ProjectTimeline::SixMonths,
            _ => ProjectTimeline::TwelveMonths,
        }
    }
}

impl From<ProjectTimeline> for String {
    fn from(v: ProjectTimeline) -> Self {
        v.label().to_string()
    }
}

/// How much hand-holding the rollout gets. Unknown values map to guided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImplementationType {
    Diy,
    Guided,
    FullService,
}

impl ImplementationType {
    pub fn label(&self) -> &'static str {
        match self {
            ImplementationType::Diy => "diy",
            ImplementationType::Guided => "guided",
            ImplementationType::FullService => "full-service",
        }
    }
}

impl From<String> for ImplementationType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "diy" => ImplementationType::Diy,
            "full-service" => ImplementationType::FullService,
            _ => ImplementationType::Guided,
        }
    }
}

impl From<ImplementationType> for String {
    fn from(v: ImplementationType) -> Self {
        v.label().to_string()
    }
}

/// Company facts collected on the first step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub company_name: String,
    pub industry: Industry,
    pub company_size: CompanySize,
    pub location: Location,
    #[serde(default)]
    pub revenue_range: Option<RevenueRange>,
    #[serde(default)]
    pub growth_stage: Option<GrowthStage>,
    #[serde(default)]
    pub current_pain_points: Vec<String>,
}

/// One tool the prospect currently pays for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolEntry {
    pub name: String,
    pub monthly_cost: Decimal,
    pub satisfaction: Decimal,
}

/// Current technology footprint.
///
/// `total_monthly_cost` may be supplied directly or left out, in which case
/// the engine derives an estimate. BTreeMaps keep sink-facing iteration
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechAssessment {
    #[serde(default)]
    pub current_tools: BTreeMap<String, Vec<ToolEntry>>,
    #[serde(default)]
    pub total_monthly_cost: Option<Decimal>,
    #[serde(default)]
    pub satisfaction_scores: BTreeMap<String, Decimal>,
}

/// Where the prospect wants to take the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthGoals {
    #[serde(default)]
    pub business_objectives: Vec<String>,
    #[serde(default)]
    pub tech_barriers: Vec<String>,
    #[serde(default)]
    pub priority_areas: Vec<String>,
}

/// Budget and rollout preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub budget_range: BudgetRange,
    pub timeline: ProjectTimeline,
    pub implementation_type: ImplementationType,
    #[serde(default)]
    pub decision_makers: Vec<String>,
}

/// Identity and consent. Irrelevant to the engine; forwarded to sinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub marketing_consent: bool,
}

/// A complete, validated questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponse {
    pub company_info: CompanyInfo,
    pub tech_assessment: TechAssessment,
    pub growth_goals: GrowthGoals,
    pub preferences: Preferences,
    pub contact_info: ContactInfo,
}

/// The solution tier recommended to the prospect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedSolution {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub benefits: Vec<String>,
}

/// Derived financial projection. Whole dollars / percent / months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    pub estimated_monthly_savings: i64,
    pub estimated_annual_savings: i64,
    pub implementation_cost: i64,
    pub monthly_investment: i64,
    pub payback_period_months: u32,
    pub three_year_roi: i64,
    pub total_three_year_value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VsEnterprise {
    pub cost_difference_percent: i64,
    pub time_to_implement: String,
    pub flexibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VsStatusQuo {
    pub efficiency_gains_percent: i64,
    pub growth_potential_percent: i64,
    pub risk_reduction_percent: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAnalysis {
    pub vs_enterprise: VsEnterprise,
    pub vs_status_quo: VsStatusQuo,
}

/// One implementation phase shown to the prospect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePhase {
    pub phase: String,
    pub duration: String,
    pub milestones: Vec<String>,
}

/// Full output of the estimation engine. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub recommended_solution: RecommendedSolution,
    pub financials: Financials,
    pub competitive_analysis: CompetitiveAnalysis,
    pub timeline: Vec<TimelinePhase>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_enum_values_fall_back_to_defaults() {
        assert_eq!(Industry::from("Quantum Farming".to_string()), Industry::Other);
        assert_eq!(CompanySize::from("9000+".to_string()), CompanySize::Size1To10);
        assert_eq!(BudgetRange::from("moon".to_string()), BudgetRange::Under5k);
        assert_eq!(Location::from("Mars".to_string()), Location::OahuHonolulu);
        assert_eq!(
            ImplementationType::from("psychic".to_string()),
            ImplementationType::Guided
        );
    }

    #[test]
    fn test_enum_labels_round_trip() {
        for industry in [
            Industry::TourismHospitality,
            Industry::RetailEcommerce,
            Industry::FinanceInsurance,
            Industry::Other,
        ] {
            assert_eq!(Industry::from(industry.label().to_string()), industry);
        }
        for size in [
            CompanySize::Size1To10,
            CompanySize::Size11To50,
            CompanySize::Size51To100,
            CompanySize::Size100Plus,
        ] {
            assert_eq!(CompanySize::from(size.label().to_string()), size);
        }
    }

    #[test]
    fn test_questionnaire_deserializes_camel_case() {
        let json = serde_json::json!({
            "companyInfo": {
                "companyName": "Kona Coffee Co",
                "industry": "Retail & E-commerce",
                "companySize": "11-50",
                "location": "Big Island - Kona",
                "currentPainPoints": ["Manual processes"]
            },
            "techAssessment": {
                "totalMonthlyCost": 1500
            },
            "growthGoals": {
                "businessObjectives": ["Scale operations"],
                "techBarriers": ["Budget constraints"],
                "priorityAreas": ["Operations"]
            },
            "preferences": {
                "budgetRange": "under-5k",
                "timeline": "3-months",
                "implementationType": "guided",
                "decisionMakers": ["CEO/Owner"]
            },
            "contactInfo": {
                "firstName": "Kai",
                "lastName": "Nakamura",
                "email": "kai@example.com",
                "marketingConsent": true
            }
        });

        let parsed: QuestionnaireResponse = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.company_info.industry, Industry::RetailEcommerce);
        assert_eq!(parsed.company_info.company_size, CompanySize::Size11To50);
        assert_eq!(parsed.preferences.budget_range, BudgetRange::Under5k);
        assert!(parsed.tech_assessment.total_monthly_cost.is_some());
    }
}
