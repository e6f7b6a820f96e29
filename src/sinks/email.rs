//! Results email sink.
//!
//! Renders the financial projection as a small HTML summary and posts it to
//! a Resend-compatible transactional email API. When no API key is
//! configured the sink logs the intent and reports success, so a missing
//! provider never blocks lead capture.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;

use crate::config::EmailSettings;
use crate::engine::tables::PAYBACK_NEVER_MONTHS;
use crate::sinks::{DeliverySink, SinkError, ensure_success};
use crate::types::{CalculationResult, QuestionnaireResponse};

pub struct EmailSink {
    client: Client,
    settings: EmailSettings,
}

impl EmailSink {
    pub fn new(settings: EmailSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, settings }
    }
}

#[async_trait]
impl DeliverySink for EmailSink {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn deliver(
        &self,
        data: &QuestionnaireResponse,
        results: &CalculationResult,
        _tracking_id: &str,
    ) -> Result<(), SinkError> {
        let to = &data.contact_info.email;
        let subject = results_subject(&data.company_info.company_name);

        let Some(api_key) = &self.settings.api_key else {
            tracing::info!(%to, %subject, "email provider not configured, skipping send");
            return Ok(());
        };

        let body = serde_json::json!({
            "from": self.settings.from_address,
            "to": [to],
            "subject": subject,
            "html": render_results_html(data, results),
        });

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await?;
        ensure_success("email", response).await?;

        tracing::debug!(%to, "results email sent");
        Ok(())
    }
}

fn results_subject(company_name: &str) -> String {
    format!("Your Hawaii Business Growth Calculator Results - {company_name}")
}

/// HTML body with the headline numbers. Dollar figures get thousands
/// separators; user-supplied strings are escaped before interpolation.
fn render_results_html(data: &QuestionnaireResponse, results: &CalculationResult) -> String {
    let financials = &results.financials;
    let solution = &results.recommended_solution;

    let payback = if financials.payback_period_months == PAYBACK_NEVER_MONTHS {
        "Beyond projection window".to_string()
    } else {
        format!("{} months", financials.payback_period_months)
    };

    format!(
        "<html><body style=\"font-family: Arial, sans-serif; color: #1a1a2e;\">\
         <h2>Aloha {first_name},</h2>\
         <p>Thank you for using the Hawaii Business Growth Calculator. Here is the \
         technology growth projection for <strong>{company}</strong>.</p>\
         <h3>Recommended Solution: {solution_title}</h3>\
         <p>{solution_description}</p>\
         <table cellpadding=\"8\" cellspacing=\"0\" border=\"1\" style=\"border-collapse: collapse;\">\
         <tr><td>Monthly Investment</td><td><strong>${monthly_investment}</strong></td></tr>\
         <tr><td>Estimated Monthly Savings</td><td><strong>${monthly_savings}</strong></td></tr>\
         <tr><td>Estimated Annual Savings</td><td><strong>${annual_savings}</strong></td></tr>\
         <tr><td>Implementation Cost</td><td><strong>${implementation_cost}</strong></td></tr>\
         <tr><td>Payback Period</td><td><strong>{payback}</strong></td></tr>\
         <tr><td>3-Year ROI</td><td><strong>{roi}%</strong></td></tr>\
         <tr><td>Total 3-Year Value</td><td><strong>${total_value}</strong></td></tr>\
         </table>\
         <p>Our team will reach out shortly to walk through these numbers with you.</p>\
         <p>Mahalo,<br>The Hawaii Business Growth Team</p>\
         </body></html>",
        first_name = escape_html(&data.contact_info.first_name),
        company = escape_html(&data.company_info.company_name),
        solution_title = escape_html(&solution.title),
        solution_description = escape_html(&solution.description),
        monthly_investment = format_thousands(financials.monthly_investment),
        monthly_savings = format_thousands(financials.estimated_monthly_savings),
        annual_savings = format_thousands(financials.estimated_annual_savings),
        implementation_cost = format_thousands(financials.implementation_cost),
        roi = format_thousands(financials.three_year_roi),
        total_value = format_thousands(financials.total_three_year_value),
    )
}

/// Insert comma separators into a whole number, preserving the sign.
fn format_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let leading = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == leading % 3 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::engine::calculate;

    fn sample() -> (QuestionnaireResponse, CalculationResult) {
        let json = serde_json::json!({
            "companyInfo": {
                "companyName": "Mele & Sons <Plumbing>",
                "industry": "Construction",
                "companySize": "11-50",
                "location": "Maui",
                "currentPainPoints": ["Manual processes"]
            },
            "techAssessment": {
                "totalMonthlyCost": 3000
            },
            "growthGoals": {
                "businessObjectives": ["Scale operations"],
                "techBarriers": [],
                "priorityAreas": ["Operations"]
            },
            "preferences": {
                "budgetRange": "5k-15k",
                "timeline": "6-months",
                "implementationType": "full-service",
                "decisionMakers": ["CEO/Owner"]
            },
            "contactInfo": {
                "firstName": "Mele",
                "lastName": "Kahale",
                "email": "mele@example.com",
                "marketingConsent": true
            }
        });
        let data: QuestionnaireResponse = serde_json::from_value(json).unwrap();
        let results = calculate(&data);
        (data, results)
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(2500), "2,500");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-42000), "-42,000");
    }

    #[test]
    fn test_subject_names_the_company() {
        assert_eq!(
            results_subject("Kona Coffee Co"),
            "Your Hawaii Business Growth Calculator Results - Kona Coffee Co"
        );
    }

    #[test]
    fn test_html_escapes_user_values() {
        let (data, results) = sample();
        let html = render_results_html(&data, &results);
        assert!(html.contains("Mele &amp; Sons &lt;Plumbing&gt;"));
        assert!(!html.contains("<Plumbing>"));
    }

    #[test]
    fn test_html_contains_headline_numbers() {
        let (data, results) = sample();
        let html = render_results_html(&data, &results);
        assert!(html.contains(&format!(
            "${}",
            format_thousands(results.financials.monthly_investment)
        )));
        assert!(html.contains(&format!(
            "{}%",
            format_thousands(results.financials.three_year_roi)
        )));
        assert!(html.contains(&results.recommended_solution.title));
    }

    #[tokio::test]
    async fn test_unconfigured_sink_skips_without_error() {
        let (data, results) = sample();
        let sink = EmailSink::new(EmailSettings {
            api_key: None,
            endpoint: "https://api.resend.com/emails".to_string(),
            from_address: "results@example.com".to_string(),
        });
        let outcome = sink.deliver(&data, &results, "calc-test").await;
        assert!(outcome.is_ok());
    }
}
