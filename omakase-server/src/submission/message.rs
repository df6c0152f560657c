//! Messaging channel: wa.me deep link
//!
//! A server cannot open a chat window, so this channel's "delivery"
//! is a prebuilt deep link the client opens; the dispatcher fires the
//! backup email alongside it.

use super::{ChannelKind, SubmissionChannel, SubmissionPayload, SubmissionReceipt};
use crate::utils::percent_encode;
use async_trait::async_trait;
use shared::error::AppResult;

/// Builds wa.me hand-off links in the house message format
pub struct MessageChannel {
    number: String,
}

impl MessageChannel {
    pub fn new(number: String) -> Self {
        Self { number }
    }

    fn format_message(payload: &SubmissionPayload) -> String {
        format!(
            "Hi, this is *{name}* regarding my menu selection for *{date}*.\n\n\
             *Arrival Time:* {arrival}\n\
             *#Adults:* {adults}\n\
             *#Kids:* {kids}\n\
             *#Toddlers:* {toddlers}\n\
             *Selected Menu:* {course} ({price})\n\n\
             My choices:\n{choices}",
            name = payload.customer_name,
            date = payload.booking_date,
            arrival = payload.arrival_time,
            adults = payload.adults,
            kids = payload.kids,
            toddlers = payload.toddlers,
            course = payload.course_label,
            price = payload.menu_price,
            choices = payload.selections_text,
        )
    }

    /// The full deep link for a payload
    pub fn link_for(&self, payload: &SubmissionPayload) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.number,
            percent_encode(&Self::format_message(payload))
        )
    }
}

#[async_trait]
impl SubmissionChannel for MessageChannel {
    fn name(&self) -> &'static str {
        "message"
    }

    async fn send(&self, payload: &SubmissionPayload) -> AppResult<SubmissionReceipt> {
        Ok(SubmissionReceipt {
            channel: ChannelKind::Message,
            delivered: false,
            link: Some(self.link_for(payload)),
        })
    }
}
