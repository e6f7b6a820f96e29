//! Structural validation of questionnaire submissions.
//!
//! Runs before the engine. The engine itself never fails; anything
//! malformed enough to matter is rejected here and reported back to the
//! caller as field-level errors.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

use crate::types::QuestionnaireResponse;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+1)?[\s.-]?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}$").expect("valid phone regex")
});

const MIN_SATISFACTION: Decimal = dec!(1);
const MAX_SATISFACTION: Decimal = dec!(5);

/// Error codes for programmatic handling by the form client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCode {
    Required,
    TooShort,
    OutOfRange,
    InvalidFormat,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: ValidationCode,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, code: ValidationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

/// All validation failures for a submission.
#[derive(Debug, Clone, Error, Serialize)]
#[error("submission failed validation with {} error(s)", errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

/// Validate a submission, accumulating every failure rather than stopping
/// at the first.
pub fn validate(data: &QuestionnaireResponse) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    let company = &data.company_info;
    if company.company_name.trim().len() < 2 {
        errors.push(FieldError::new(
            "companyInfo.companyName",
            ValidationCode::TooShort,
            "Company name must be at least 2 characters",
        ));
    }
    if company.current_pain_points.is_empty() {
        errors.push(FieldError::new(
            "companyInfo.currentPainPoints",
            ValidationCode::Required,
            "Please select at least one pain point",
        ));
    }

    let tech = &data.tech_assessment;
    if let Some(total) = tech.total_monthly_cost {
        if total < Decimal::ZERO {
            errors.push(FieldError::new(
                "techAssessment.totalMonthlyCost",
                ValidationCode::OutOfRange,
                "Total monthly cost cannot be negative",
            ));
        }
    }
    for (category, tools) in &tech.current_tools {
        for (idx, tool) in tools.iter().enumerate() {
            if tool.monthly_cost < Decimal::ZERO {
                errors.push(FieldError::new(
                    format!("techAssessment.currentTools.{category}[{idx}].monthlyCost"),
                    ValidationCode::OutOfRange,
                    "Tool cost cannot be negative",
                ));
            }
            if tool.satisfaction < MIN_SATISFACTION || tool.satisfaction > MAX_SATISFACTION {
                errors.push(FieldError::new(
                    format!("techAssessment.currentTools.{category}[{idx}].satisfaction"),
                    ValidationCode::OutOfRange,
                    "Satisfaction must be between 1 and 5",
                ));
            }
        }
    }
    for (category, score) in &tech.satisfaction_scores {
        if *score < MIN_SATISFACTION || *score > MAX_SATISFACTION {
            errors.push(FieldError::new(
                format!("techAssessment.satisfactionScores.{category}"),
                ValidationCode::OutOfRange,
                "Satisfaction must be between 1 and 5",
            ));
        }
    }

    let goals = &data.growth_goals;
    if goals.business_objectives.is_empty() {
        errors.push(FieldError::new(
            "growthGoals.businessObjectives",
            ValidationCode::Required,
            "Please select at least one objective",
        ));
    }
    if goals.tech_barriers.is_empty() {
        errors.push(FieldError::new(
            "growthGoals.techBarriers",
            ValidationCode::Required,
            "Please select at least one barrier",
        ));
    }
    if goals.priority_areas.is_empty() {
        errors.push(FieldError::new(
            "growthGoals.priorityAreas",
            ValidationCode::Required,
            "Please select at least one priority area",
        ));
    }

    if data.preferences.decision_makers.is_empty() {
        errors.push(FieldError::new(
            "preferences.decisionMakers",
            ValidationCode::Required,
            "Please select at least one decision maker",
        ));
    }

    let contact = &data.contact_info;
    if contact.first_name.trim().len() < 2 {
        errors.push(FieldError::new(
            "contactInfo.firstName",
            ValidationCode::TooShort,
            "First name must be at least 2 characters",
        ));
    }
    if contact.last_name.trim().len() < 2 {
        errors.push(FieldError::new(
            "contactInfo.lastName",
            ValidationCode::TooShort,
            "Last name must be at least 2 characters",
        ));
    }
    if !EMAIL_RE.is_match(&contact.email) {
        errors.push(FieldError::new(
            "contactInfo.email",
            ValidationCode::InvalidFormat,
            "Please enter a valid email address",
        ));
    }
    if let Some(phone) = &contact.phone {
        if !phone.is_empty() && !PHONE_RE.is_match(phone) {
            errors.push(FieldError::new(
                "contactInfo.phone",
                ValidationCode::InvalidFormat,
                "Please enter a valid phone number",
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::types::{
        BudgetRange, CompanyInfo, CompanySize, ContactInfo, GrowthGoals, ImplementationType,
        Industry, Location, Preferences, ProjectTimeline, TechAssessment, ToolEntry,
    };

    fn valid_response() -> QuestionnaireResponse {
        QuestionnaireResponse {
            company_info: CompanyInfo {
                company_name: "Pacific Dental".to_string(),
                industry: Industry::Healthcare,
                company_size: CompanySize::Size11To50,
                location: Location::Maui,
                revenue_range: None,
                growth_stage: None,
                current_pain_points: vec!["Manual processes".to_string()],
            },
            tech_assessment: TechAssessment {
                current_tools: BTreeMap::new(),
                total_monthly_cost: Some(dec!(2500)),
                satisfaction_scores: BTreeMap::new(),
            },
            growth_goals: GrowthGoals {
                business_objectives: vec!["Reduce operational costs".to_string()],
                tech_barriers: vec!["Time constraints".to_string()],
                priority_areas: vec!["Operations".to_string()],
            },
            preferences: Preferences {
                budget_range: BudgetRange::Under5k,
                timeline: ProjectTimeline::Immediate,
                implementation_type: ImplementationType::FullService,
                decision_makers: vec!["CEO/Owner".to_string()],
            },
            contact_info: ContactInfo {
                first_name: "Malia".to_string(),
                last_name: "Akana".to_string(),
                email: "malia@pacificdental.com".to_string(),
                phone: Some("(808) 555-0142".to_string()),
                title: Some("Owner".to_string()),
                marketing_consent: true,
            },
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate(&valid_response()).is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut data = valid_response();
        data.contact_info.email = "not-an-email".to_string();
        let errors = validate(&data).unwrap_err();
        assert_eq!(errors.errors.len(), 1);
        assert_eq!(errors.errors[0].field, "contactInfo.email");
        assert_eq!(errors.errors[0].code, ValidationCode::InvalidFormat);
    }

    #[test]
    fn test_empty_selections_rejected() {
        let mut data = valid_response();
        data.company_info.current_pain_points.clear();
        data.growth_goals.priority_areas.clear();
        data.preferences.decision_makers.clear();
        let errors = validate(&data).unwrap_err();
        assert_eq!(errors.errors.len(), 3);
        assert!(errors
            .errors
            .iter()
            .all(|e| e.code == ValidationCode::Required));
    }

    #[test]
    fn test_satisfaction_bounds_enforced() {
        let mut data = valid_response();
        data.tech_assessment
            .satisfaction_scores
            .insert("crm".to_string(), dec!(6));
        let mut tools = BTreeMap::new();
        tools.insert(
            "accounting".to_string(),
            vec![ToolEntry {
                name: "Ledger".to_string(),
                monthly_cost: dec!(-5),
                satisfaction: dec!(0),
            }],
        );
        data.tech_assessment.current_tools = tools;
        let errors = validate(&data).unwrap_err();
        assert_eq!(errors.errors.len(), 3);
        assert!(errors
            .errors
            .iter()
            .all(|e| e.code == ValidationCode::OutOfRange));
    }

    #[test]
    fn test_empty_phone_is_allowed() {
        let mut data = valid_response();
        data.contact_info.phone = Some(String::new());
        assert!(validate(&data).is_ok());

        data.contact_info.phone = Some("call me maybe".to_string());
        assert!(validate(&data).is_err());
    }

    #[test]
    fn test_short_names_rejected() {
        let mut data = valid_response();
        data.company_info.company_name = "X".to_string();
        data.contact_info.first_name = " A ".to_string();
        let errors = validate(&data).unwrap_err();
        assert_eq!(errors.errors.len(), 2);
        assert!(errors
            .errors
            .iter()
            .all(|e| e.code == ValidationCode::TooShort));
    }
}
