//! Destination for finalized applications

use crate::state::Application;
use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

/// Receives validated applications
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn submit(&mut self, application: &Application) -> Result<()>;
}

/// Emits each submission as a structured log event
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    /// Payload as it is logged, with the password masked
    pub fn redacted_payload(application: &Application) -> Result<serde_json::Value> {
        let mut payload = serde_json::to_value(application)?;
        if let Some(password) = payload.get_mut("password") {
            let masked = "*".repeat(application.password.chars().count());
            *password = serde_json::Value::String(masked);
        }
        Ok(payload)
    }
}

impl SubmissionSink for LogSink {
    fn submit(&mut self, application: &Application) -> Result<()> {
        let payload = Self::redacted_payload(application)?;
        tracing::info!(
            submission_id = %Uuid::new_v4(),
            submitted_at = %Utc::now().to_rfc3339(),
            %payload,
            "application submitted"
        );
        Ok(())
    }
}
