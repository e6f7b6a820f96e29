//! HubSpot CRM sink.
//!
//! Upserts the lead as a contact keyed by email (update on hit, create on
//! miss, so resubmissions never duplicate records) and attaches the full
//! submission summary as a note. When only a portal and form GUID are
//! configured, falls back to the public form-submission endpoint.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use secrecy::{ExposeSecret, SecretString};

use crate::config::HubspotSettings;
use crate::sinks::{DeliverySink, SinkError, ensure_success};
use crate::types::{CalculationResult, QuestionnaireResponse};

const HUBSPOT_API_BASE: &str = "https://api.hubapi.com";
const HUBSPOT_FORMS_BASE: &str = "https://api.hsforms.com";

/// Note-to-contact association type in HubSpot's fixed catalog.
const NOTE_TO_CONTACT_ASSOCIATION: u32 = 202;

pub struct HubspotSink {
    client: Client,
    settings: HubspotSettings,
}

impl HubspotSink {
    pub fn new(settings: HubspotSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, settings }
    }

    /// Find an existing contact by email. Returns the contact ID on a hit.
    async fn search_contact(
        &self,
        token: &SecretString,
        email: &str,
    ) -> Result<Option<String>, SinkError> {
        let body = serde_json::json!({
            "filterGroups": [{
                "filters": [{
                    "propertyName": "email",
                    "operator": "EQ",
                    "value": email,
                }],
            }],
            "properties": ["email", "firstname", "lastname"],
            "limit": 1,
        });

        let response = self
            .client
            .post(format!("{HUBSPOT_API_BASE}/crm/v3/objects/contacts/search"))
            .bearer_auth(token.expose_secret())
            .json(&body)
            .send()
            .await?;
        let response = ensure_success("hubspot search", response).await?;

        let parsed: serde_json::Value = response.json().await?;
        let id = parsed
            .get("results")
            .and_then(|r| r.as_array())
            .and_then(|r| r.first())
            .and_then(|c| c.get("id"))
            .and_then(|id| id.as_str())
            .map(|id| id.to_string());
        Ok(id)
    }

    async fn create_contact(
        &self,
        token: &SecretString,
        properties: &serde_json::Value,
    ) -> Result<String, SinkError> {
        let response = self
            .client
            .post(format!("{HUBSPOT_API_BASE}/crm/v3/objects/contacts"))
            .bearer_auth(token.expose_secret())
            .json(&serde_json::json!({ "properties": properties }))
            .send()
            .await?;
        let response = ensure_success("hubspot create", response).await?;

        let parsed: serde_json::Value = response.json().await?;
        Ok(parsed
            .get("id")
            .and_then(|id| id.as_str())
            .unwrap_or_default()
            .to_string())
    }

    async fn update_contact(
        &self,
        token: &SecretString,
        contact_id: &str,
        properties: &serde_json::Value,
    ) -> Result<(), SinkError> {
        let response = self
            .client
            .patch(format!(
                "{HUBSPOT_API_BASE}/crm/v3/objects/contacts/{contact_id}"
            ))
            .bearer_auth(token.expose_secret())
            .json(&serde_json::json!({ "properties": properties }))
            .send()
            .await?;
        ensure_success("hubspot update", response).await?;
        Ok(())
    }

    async fn create_note(
        &self,
        token: &SecretString,
        contact_id: &str,
        note_body: &str,
    ) -> Result<(), SinkError> {
        let body = serde_json::json!({
            "properties": {
                "hs_note_body": note_body,
                "hs_timestamp": Utc::now().timestamp_millis().to_string(),
            },
            "associations": [{
                "to": { "id": contact_id },
                "types": [{
                    "associationCategory": "HUBSPOT_DEFINED",
                    "associationTypeId": NOTE_TO_CONTACT_ASSOCIATION,
                }],
            }],
        });

        let response = self
            .client
            .post(format!("{HUBSPOT_API_BASE}/crm/v3/objects/notes"))
            .bearer_auth(token.expose_secret())
            .json(&body)
            .send()
            .await?;
        ensure_success("hubspot note", response).await?;
        Ok(())
    }

    async fn upsert_via_api(
        &self,
        token: &SecretString,
        data: &QuestionnaireResponse,
        results: &CalculationResult,
        tracking_id: &str,
    ) -> Result<(), SinkError> {
        let properties = contact_properties(data);
        let email = &data.contact_info.email;

        // A failed search should not lose the lead; fall through to create.
        let contact_id = match self.search_contact(token, email).await {
            Ok(Some(id)) => {
                self.update_contact(token, &id, &properties).await?;
                tracing::debug!(contact_id = %id, "updated existing contact");
                id
            }
            Ok(None) => self.create_contact(token, &properties).await?,
            Err(e) => {
                tracing::warn!(error = %e, "contact search failed, creating new contact");
                self.create_contact(token, &properties).await?
            }
        };

        let note = build_summary_note(data, results, tracking_id, Utc::now());
        if let Err(e) = self.create_note(token, &contact_id, &note).await {
            // The contact itself made it in; a missing note is not fatal.
            tracing::warn!(error = %e, contact_id = %contact_id, "failed to attach note");
        }
        Ok(())
    }

    async fn submit_via_form(&self, data: &QuestionnaireResponse) -> Result<(), SinkError> {
        let (Some(portal_id), Some(form_guid)) =
            (&self.settings.portal_id, &self.settings.form_guid)
        else {
            return Err(SinkError::NotConfigured("hubspot form"));
        };

        let contact = &data.contact_info;
        let body = serde_json::json!({
            "fields": [
                { "name": "email", "value": contact.email },
                { "name": "firstname", "value": contact.first_name },
                { "name": "lastname", "value": contact.last_name },
                { "name": "phone", "value": contact.phone.clone().unwrap_or_default() },
                { "name": "company", "value": data.company_info.company_name },
                { "name": "jobtitle", "value": contact.title.clone().unwrap_or_default() },
            ],
            "context": {
                "pageName": "Hawaii Business Growth Calculator Results",
            },
        });

        let response = self
            .client
            .post(format!(
                "{HUBSPOT_FORMS_BASE}/submissions/v3/integration/submit/{portal_id}/{form_guid}"
            ))
            .json(&body)
            .send()
            .await?;
        ensure_success("hubspot form", response).await?;
        Ok(())
    }
}

#[async_trait]
impl DeliverySink for HubspotSink {
    fn name(&self) -> &'static str {
        "hubspot"
    }

    async fn deliver(
        &self,
        data: &QuestionnaireResponse,
        results: &CalculationResult,
        tracking_id: &str,
    ) -> Result<(), SinkError> {
        if let Some(token) = self.settings.access_token.clone() {
            match self.upsert_via_api(&token, data, results, tracking_id).await {
                Ok(()) => return Ok(()),
                Err(e) if self.settings.form_configured() => {
                    tracing::warn!(error = %e, "API upsert failed, trying form submission");
                    return self.submit_via_form(data).await;
                }
                Err(e) => return Err(e),
            }
        }

        if self.settings.form_configured() {
            return self.submit_via_form(data).await;
        }

        Err(SinkError::NotConfigured("hubspot"))
    }
}

/// Standard contact properties sent on create and update.
fn contact_properties(data: &QuestionnaireResponse) -> serde_json::Value {
    let contact = &data.contact_info;
    serde_json::json!({
        "email": contact.email,
        "firstname": contact.first_name,
        "lastname": contact.last_name,
        "phone": contact.phone.clone().unwrap_or_default(),
        "company": data.company_info.company_name,
        "jobtitle": contact.title.clone().unwrap_or_default(),
        "hs_lead_status": "NEW",
        "lifecyclestage": "lead",
    })
}

/// Plain-text submission summary attached to the contact as a note.
pub fn build_summary_note(
    data: &QuestionnaireResponse,
    results: &CalculationResult,
    tracking_id: &str,
    submitted_at: DateTime<Utc>,
) -> String {
    let company = &data.company_info;
    let financials = &results.financials;

    let scores = &data.tech_assessment.satisfaction_scores;
    let avg_satisfaction = if scores.is_empty() {
        0
    } else {
        let sum: Decimal = scores.values().copied().sum();
        (sum / Decimal::from(scores.len() as u64))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or(0)
    };

    let monthly_cost = data
        .tech_assessment
        .total_monthly_cost
        .map(|c| c.to_string())
        .unwrap_or_else(|| "Not specified".to_string());

    format!(
        "Hawaii Business Growth Calculator Submission\n\
         ==========================================\n\
         Source: Hawaii Growth Calculator\n\
         Tracking ID: {tracking_id}\n\
         Date: {date}\n\
         \n\
         Company Information:\n\
         - Industry: {industry}\n\
         - Size: {size}\n\
         - Location: {location}\n\
         - Revenue Range: {revenue}\n\
         - Growth Stage: {stage}\n\
         \n\
         Current Technology:\n\
         - Monthly Tech Spend: ${monthly_cost}\n\
         - Tech Satisfaction Score: {avg_satisfaction}/5\n\
         - Pain Points: {pain_points}\n\
         \n\
         Growth Goals:\n\
         - Business Objectives: {objectives}\n\
         - Tech Barriers: {barriers}\n\
         - Priority Areas: {priorities}\n\
         \n\
         Recommended Solution: {solution}\n\
         \n\
         Financial Analysis:\n\
         - Estimated Monthly Savings: ${monthly_savings}\n\
         - Estimated Annual Savings: ${annual_savings}\n\
         - 3-Year ROI: {roi}%\n\
         - Payback Period: {payback} months\n\
         - Total 3-Year Value: ${total_value}\n\
         \n\
         Preferences:\n\
         - Budget Range: {budget}\n\
         - Timeline: {timeline}\n\
         - Implementation Type: {implementation}\n\
         - Decision Makers: {decision_makers}\n",
        date = submitted_at.to_rfc3339(),
        industry = company.industry.label(),
        size = company.company_size.label(),
        location = company.location.label(),
        revenue = company
            .revenue_range
            .map(|r| r.label())
            .unwrap_or("Not specified"),
        stage = company
            .growth_stage
            .map(|s| s.label())
            .unwrap_or("Not specified"),
        pain_points = join_or_default(&company.current_pain_points),
        objectives = join_or_default(&data.growth_goals.business_objectives),
        barriers = join_or_default(&data.growth_goals.tech_barriers),
        priorities = join_or_default(&data.growth_goals.priority_areas),
        solution = results.recommended_solution.title,
        monthly_savings = financials.estimated_monthly_savings,
        annual_savings = financials.estimated_annual_savings,
        roi = financials.three_year_roi,
        payback = financials.payback_period_months,
        total_value = financials.total_three_year_value,
        budget = data.preferences.budget_range.label(),
        timeline = data.preferences.timeline.label(),
        implementation = data.preferences.implementation_type.label(),
        decision_makers = join_or_default(&data.preferences.decision_makers),
    )
}

fn join_or_default(items: &[String]) -> String {
    if items.is_empty() {
        "None specified".to_string()
    } else {
        items.join(", ")
    }
}
