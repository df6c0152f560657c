//! Submission gateway
//!
//! Formats the finished selection and dispatches it through the two
//! outbound channels: transactional email and a wa.me messaging link.
//! Deliveries are fire-and-forget from the state machine's point of
//! view; the only coordination is a per-session, per-channel in-flight
//! guard so the same control cannot fire twice concurrently.

mod email;
mod message;

pub use email::EmailChannel;
pub use message::MessageChannel;

use crate::core::Config;
use crate::session::MenuSession;
use async_trait::async_trait;
use dashmap::DashSet;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use uuid::Uuid;

/// Which outbound channel to use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Message,
}

impl ChannelKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Everything a channel needs to format an outbound submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionPayload {
    pub customer_name: String,
    pub contact_number: String,
    pub booking_date: String,
    pub arrival_time: String,
    pub adults: u32,
    pub kids: u32,
    pub toddlers: u32,
    /// Descriptive tier label, e.g. "6 Course Menu - 3 starters ($638)"
    pub course_label: String,
    /// Display price, e.g. "$638"
    pub menu_price: String,
    /// The rendered plain-text summary block
    pub selections_text: String,
}

impl SubmissionPayload {
    /// Build the payload from a session's current state
    pub fn from_session(session: &MenuSession) -> Self {
        Self {
            customer_name: session.booking.customer_name.clone(),
            contact_number: session.booking.contact_number.clone(),
            booking_date: session
                .booking
                .booking_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            arrival_time: session.booking.arrival_time.clone(),
            adults: session.guests.adults,
            kids: session.guests.kids,
            toddlers: session.guests.toddlers,
            course_label: session.tier.label.clone(),
            menu_price: format!("${}", session.tier.price.round()),
            selections_text: session.summary_text(),
        }
    }
}

/// Result of a dispatch
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub channel: ChannelKind,
    /// Whether an outbound delivery actually went through
    pub delivered: bool,
    /// Deep link for the client to open (message channel only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One outbound delivery mechanism
#[async_trait]
pub trait SubmissionChannel: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, payload: &SubmissionPayload) -> AppResult<SubmissionReceipt>;
}

/// Dispatches submissions and enforces the in-flight guard
pub struct SubmissionService {
    email: Option<EmailChannel>,
    message: Option<MessageChannel>,
    in_flight: DashSet<(Uuid, &'static str)>,
}

impl SubmissionService {
    pub fn new(config: &Config) -> Self {
        let email = config.email_configured().then(|| EmailChannel::new(config));
        let message = (!config.whatsapp_number.is_empty())
            .then(|| MessageChannel::new(config.whatsapp_number.clone()));
        if email.is_none() {
            tracing::warn!("Email channel not configured; email submissions will be rejected");
        }
        if message.is_none() {
            tracing::warn!("WhatsApp number not configured; message submissions will be rejected");
        }
        Self {
            email,
            message,
            in_flight: DashSet::new(),
        }
    }

    /// Dispatch a payload through a channel
    ///
    /// A second submission for the same session and channel while one
    /// is in flight is rejected; the guard is released afterwards
    /// regardless of outcome. No automatic retry.
    pub async fn submit(
        &self,
        session_id: Uuid,
        kind: ChannelKind,
        payload: &SubmissionPayload,
    ) -> AppResult<SubmissionReceipt> {
        let key = (session_id, kind.name());
        if !self.in_flight.insert(key) {
            return Err(AppError::new(ErrorCode::SubmissionInFlight)
                .with_detail("channel", kind.name()));
        }

        let result = self.dispatch(kind, payload).await;
        self.in_flight.remove(&key);

        match &result {
            Ok(receipt) => {
                tracing::info!(
                    session_id = %session_id,
                    channel = kind.name(),
                    delivered = receipt.delivered,
                    "Submission dispatched"
                );
            }
            Err(e) => {
                tracing::error!(session_id = %session_id, channel = kind.name(), error = %e, "Submission failed");
            }
        }
        result
    }

    async fn dispatch(
        &self,
        kind: ChannelKind,
        payload: &SubmissionPayload,
    ) -> AppResult<SubmissionReceipt> {
        match kind {
            ChannelKind::Email => {
                let email = self.channel_or_unconfigured(self.email.as_ref(), kind)?;
                email.send(payload).await
            }
            ChannelKind::Message => {
                let message = self.channel_or_unconfigured(self.message.as_ref(), kind)?;
                let mut receipt = message.send(payload).await?;

                // The original form fires a backup email alongside the
                // WhatsApp hand-off; a failure there never blocks the
                // message flow.
                if let Some(email) = &self.email {
                    match email.send(payload).await {
                        Ok(_) => receipt.delivered = true,
                        Err(e) => {
                            tracing::warn!(error = %e, "Backup email alongside message failed")
                        }
                    }
                }
                Ok(receipt)
            }
        }
    }

    fn channel_or_unconfigured<'a, T>(
        &self,
        channel: Option<&'a T>,
        kind: ChannelKind,
    ) -> AppResult<&'a T> {
        channel.ok_or_else(|| {
            AppError::new(ErrorCode::ChannelNotConfigured).with_detail("channel", kind.name())
        })
    }
}
