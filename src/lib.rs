//! Hawaii Business Growth Calculator.
//!
//! A lead-generation service built around a deterministic estimation
//! engine: a questionnaire about a business goes in, a financial projection
//! (savings, ROI, payback, implementation timeline) and a recommended
//! solution tier come out. Submissions are validated, calculated, and then
//! delivered best-effort to CRM and email sinks.

pub mod config;
pub mod engine;
pub mod intake;
pub mod server;
pub mod sinks;
pub mod types;

pub use engine::calculate;
pub use types::{CalculationResult, QuestionnaireResponse};
