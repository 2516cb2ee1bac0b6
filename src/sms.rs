use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::TwilioConfig;
use crate::err::{Error, Result};

/// Identifier the gateway hands back for an accepted message.
pub type MessageSid = String;

#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<MessageSid>;
}

/// Sends `body` to `to`, logging the outcome. Never retries.
pub async fn send_sms(gateway: &dyn SmsGateway, to: &str, body: &str) -> bool {
    log::info!("Sending SMS to {} with message: {}", to, body);
    match gateway.send(to, body).await {
        Ok(sid) => {
            log::info!("Message sent with SID: {}", sid);
            true
        }
        Err(err) => {
            log::error!("Failed to send SMS: {}", err);
            false
        }
    }
}

/// Twilio Programmable Messaging over its REST API.
#[derive(Clone)]
pub struct TwilioGateway {
    client: reqwest::Client,
    config: TwilioConfig,
}

impl fmt::Debug for TwilioGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioGateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

impl TwilioGateway {
    pub fn new(config: TwilioConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait]
impl SmsGateway for TwilioGateway {
    async fn send(&self, to: &str, body: &str) -> Result<MessageSid> {
        let resp = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("To", to),
                ("From", self.config.from_number.as_str()),
                ("Body", body),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let detail = match serde_json::from_str::<ApiError>(&text) {
                Ok(ApiError {
                    code: Some(code),
                    message: Some(message),
                }) => format!("{} (code {})", message, code),
                Ok(ApiError {
                    message: Some(message),
                    ..
                }) => message,
                _ => text,
            };
            return Err(Error::gateway(format!("HTTP {}: {}", status, detail)));
        }

        let message = resp.json::<MessageResource>().await?;
        Ok(message.sid)
    }
}
