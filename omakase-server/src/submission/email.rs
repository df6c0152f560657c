//! Transactional email channel (EmailJS-compatible REST API)

use super::{ChannelKind, SubmissionChannel, SubmissionPayload, SubmissionReceipt};
use crate::core::Config;
use async_trait::async_trait;
use serde_json::json;
use shared::error::{AppError, AppResult, ErrorCode};

/// Sends the selection as a templated email
pub struct EmailChannel {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    client: reqwest::Client,
}

impl EmailChannel {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.emailjs_endpoint.clone(),
            service_id: config.emailjs_service_id.clone(),
            template_id: config.emailjs_template_id.clone(),
            public_key: config.emailjs_public_key.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// The provider-side template body
    fn template_params(payload: &SubmissionPayload) -> serde_json::Value {
        json!({
            "from_name": payload.customer_name,
            "contact_number": payload.contact_number,
            "booking_date": payload.booking_date,
            "arrival_time": payload.arrival_time,
            "adult_count": payload.adults.to_string(),
            "kid_count": payload.kids.to_string(),
            "toddler_count": payload.toddlers.to_string(),
            "course_details": payload.course_label,
            "menu_price": payload.menu_price,
            "selected_items_text": payload.selections_text,
        })
    }
}

#[async_trait]
impl SubmissionChannel for EmailChannel {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn send(&self, payload: &SubmissionPayload) -> AppResult<SubmissionReceipt> {
        let body = json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": Self::template_params(payload),
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::submission_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::new(ErrorCode::SubmissionFailed)
                .with_detail("status", status.as_u16())
                .with_detail("body", detail));
        }

        Ok(SubmissionReceipt {
            channel: ChannelKind::Email,
            delivered: true,
            link: None,
        })
    }
}
