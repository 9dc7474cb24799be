use crate::config::AppConfig;
use log::{info, warn};
use rocket::serde::Serialize;
use std::time::Duration;

/// Per-recipient outcome of a broadcast: either the provider-assigned
/// message sid or the error for that one send.
#[derive(Serialize, Debug, Clone)]
pub struct DispatchRecord {
    pub recipient: String,
    pub message_sid: Option<String>,
    pub error: Option<String>,
}

/// Wraps the outbound SMS provider (Twilio-style REST API) and the inbound
/// webhook auto-reply. Constructed once at startup from `AppConfig`; no
/// process-wide singletons.
pub struct SmsService {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    sms_from: String,
    messages_url: String,
}

impl SmsService {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        // Bounded per-call timeout; the provider call is otherwise ordinary
        // blocking network I/O from the request's point of view.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        let messages_url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            config.sms_api_base.trim_end_matches('/'),
            config.account_sid
        );

        Ok(Self {
            client,
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            sms_from: config.sms_from.clone(),
            messages_url,
        })
    }

    /// Form parameters for one outbound message: the recipient, the fixed
    /// sender number and the shared body.
    fn message_form<'a>(&'a self, to: &'a str, body: &'a str) -> [(&'static str, &'a str); 3] {
        [("To", to), ("From", self.sms_from.as_str()), ("Body", body)]
    }

    /// Sends one message per recipient, sequentially and independently.
    /// No batching, no deduplication, no rate limiting. A failed provider
    /// call is recorded in that recipient's DispatchRecord and the loop
    /// continues; the batch never aborts on first failure.
    pub async fn send_broadcast(&self, message: &str, recipients: &[String]) -> Vec<DispatchRecord> {
        let mut records = Vec::with_capacity(recipients.len());

        for recipient in recipients {
            match self.send_one(recipient, message).await {
                Ok(sid) => {
                    info!("SMS dispatched to {recipient}: {sid}");
                    records.push(DispatchRecord {
                        recipient: recipient.clone(),
                        message_sid: Some(sid),
                        error: None,
                    });
                }
                Err(e) => {
                    warn!("SMS dispatch to {recipient} failed: {e}");
                    records.push(DispatchRecord {
                        recipient: recipient.clone(),
                        message_sid: None,
                        error: Some(e),
                    });
                }
            }
        }

        records
    }

    async fn send_one(&self, to: &str, body: &str) -> Result<String, String> {
        let response = self
            .client
            .post(&self.messages_url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&self.message_form(to, body))
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = response.status();
        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("invalid provider response: {e}"))?;

        if !status.is_success() {
            let detail = json["message"].as_str().unwrap_or("unknown error");
            return Err(format!("provider returned {status}: {detail}"));
        }

        json["sid"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| "provider response missing message sid".to_string())
    }

    /// Fixed acknowledgment returned for every inbound message, in the
    /// provider's reply markup. Stateless and payload-independent.
    pub fn reply_twiml() -> &'static str {
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
            "<Response><Message>",
            "Can't wait to see you! Find more info at hackbright.com.",
            "</Message></Response>"
        )
    }
}
