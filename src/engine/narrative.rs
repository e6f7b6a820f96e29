//! Descriptive text for the recommended solution.
//!
//! Descriptions come from fixed per-tier templates with the industry and
//! location interpolated. Benefits are assembled in a fixed priority order:
//! three baseline entries first, then entries gated on specific pain points,
//! objectives, and industries, truncated to six.

use rust_decimal::Decimal;

use crate::engine::percent_of;
use crate::types::{CompanyInfo, GrowthGoals, Industry, Location};

/// Maximum number of benefit entries surfaced to the prospect.
pub const MAX_BENEFITS: usize = 6;

/// Pick the description template for a solution name and fill it in.
pub fn solution_description(solution_name: &str, industry: Industry, location: Location) -> String {
    let industry_name = industry.label().to_lowercase().replace(" & ", " and ");
    let place = location.region_name();

    match solution_name {
        "Hawaii DIY Digital Transformation Kit" => format!(
            "Perfect for growing {industry_name} businesses in {place}. This self-service kit \
             provides essential tools, templates, and training to modernize your operations at \
             your own pace while keeping costs minimal."
        ),
        "Hawaii Business Starter Package" => format!(
            "Ideal for small {industry_name} businesses in {place} ready to digitize. Core tools \
             with guided implementation help you streamline operations and improve efficiency \
             without breaking the budget."
        ),
        "Hawaii Business Growth Package" => format!(
            "Designed for expanding {industry_name} companies in {place}. Comprehensive tools \
             with professional support to scale your operations and compete more effectively in \
             the local market."
        ),
        "Hawaii Growth Accelerator Platform" => format!(
            "Designed for established {industry_name} companies ready to scale across Hawaii. \
             Advanced automation and AI-powered insights help you compete with larger \
             competitors while maintaining local agility."
        ),
        "Enterprise Hawaii Solution" => format!(
            "Comprehensive platform for large {industry_name} organizations in {place}. Full \
             digital transformation with enterprise features tailored to Hawaii's unique \
             business environment."
        ),
        "Custom Enterprise Transformation" => format!(
            "Bespoke solution for {industry_name} leaders in Hawaii. Complete digital ecosystem \
             designed around your specific needs with unlimited customization and scaling \
             potential."
        ),
        // "Essential Hawaii Business Suite" and anything unrecognized.
        _ => format!(
            "Perfect for growing {industry_name} businesses in {place}. This suite provides \
             core tools to streamline operations, improve customer relationships, and boost \
             efficiency while keeping costs manageable."
        ),
    }
}

/// Assemble the benefit list: 3 baseline entries, then gated extras, max 6.
pub fn generate_benefits(
    company: &CompanyInfo,
    goals: &GrowthGoals,
    efficiency_gains: Decimal,
    savings_percent: Decimal,
) -> Vec<String> {
    let mut benefits = vec![
        format!(
            "{}% increase in operational efficiency",
            percent_of(efficiency_gains)
        ),
        format!(
            "{}% reduction in technology costs",
            percent_of(savings_percent)
        ),
        "Local Hawaii-based support team".to_string(),
    ];

    let has_pain = |p: &str| company.current_pain_points.iter().any(|x| x == p);
    let has_objective = |o: &str| goals.business_objectives.iter().any(|x| x == o);

    if has_pain("High software costs") {
        benefits.push("Consolidated platform reducing vendor costs".to_string());
    }
    if has_pain("Manual processes") {
        benefits.push("Automated workflows saving 10+ hours per week".to_string());
    }
    if has_pain("Poor data insights") {
        benefits.push("Real-time dashboards for data-driven decisions".to_string());
    }

    if has_objective("Scale operations") {
        benefits.push("Scalable infrastructure for multi-island expansion".to_string());
    }
    if has_objective("Improve customer experience") {
        benefits.push("Omnichannel customer engagement tools".to_string());
    }

    if company.industry == Industry::TourismHospitality {
        benefits.push("Tourism-specific booking and guest management".to_string());
    }
    if company.industry == Industry::RealEstate {
        benefits.push("MLS integration and property management tools".to_string());
    }

    benefits.truncate(MAX_BENEFITS);
    benefits
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::types::{CompanySize, Location};

    fn company(industry: Industry, pain_points: &[&str]) -> CompanyInfo {
        CompanyInfo {
            company_name: "Test Co".to_string(),
            industry,
            company_size: CompanySize::Size1To10,
            location: Location::Maui,
            revenue_range: None,
            growth_stage: None,
            current_pain_points: pain_points.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn goals(objectives: &[&str]) -> GrowthGoals {
        GrowthGoals {
            business_objectives: objectives.iter().map(|o| o.to_string()).collect(),
            tech_barriers: vec![],
            priority_areas: vec![],
        }
    }

    #[test]
    fn test_baseline_benefits_always_lead() {
        let benefits = generate_benefits(
            &company(Industry::Technology, &[]),
            &goals(&[]),
            dec!(0.18),
            dec!(0.15),
        );
        assert_eq!(benefits.len(), 3);
        assert_eq!(benefits[0], "18% increase in operational efficiency");
        assert_eq!(benefits[1], "15% reduction in technology costs");
        assert_eq!(benefits[2], "Local Hawaii-based support team");
    }

    #[test]
    fn test_benefits_truncate_at_six_with_baseline_first() {
        let benefits = generate_benefits(
            &company(
                Industry::TourismHospitality,
                &["High software costs", "Manual processes", "Poor data insights"],
            ),
            &goals(&["Scale operations", "Improve customer experience"]),
            dec!(0.28),
            dec!(0.22),
        );
        assert_eq!(benefits.len(), MAX_BENEFITS);
        assert!(benefits[0].contains("operational efficiency"));
        assert!(benefits[1].contains("technology costs"));
        assert_eq!(benefits[2], "Local Hawaii-based support team");
        // Gated entries follow in evaluation order; the industry-specific
        // entry falls off the end.
        assert_eq!(benefits[3], "Consolidated platform reducing vendor costs");
        assert!(!benefits.iter().any(|b| b.contains("Tourism-specific")));
    }

    #[test]
    fn test_description_interpolates_industry_and_place() {
        let text = solution_description(
            "Hawaii Business Starter Package",
            Industry::RetailEcommerce,
            Location::BigIslandKona,
        );
        assert!(text.contains("retail and e-commerce"));
        assert!(text.contains("Kona"));
    }

    #[test]
    fn test_unknown_solution_name_uses_essential_template() {
        let text = solution_description("Mystery Bundle", Industry::Other, Location::Kauai);
        assert!(text.contains("This suite provides"));
        assert!(text.contains("Kauai"));
    }
}
