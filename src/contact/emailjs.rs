use serde::Serialize;

use super::{DeliveryError, Mailer, OutgoingMessage, TemplateParams};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

impl<'a> From<&'a OutgoingMessage> for SendRequest<'a> {
    fn from(message: &'a OutgoingMessage) -> Self {
        Self {
            service_id: &message.config.service_id,
            template_id: &message.config.template_id,
            user_id: &message.config.public_key,
            template_params: &message.params,
        }
    }
}

/// EmailJS REST relay.
#[derive(Debug, Clone)]
pub struct EmailJs {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for EmailJs {
    fn default() -> Self {
        Self::new(EMAILJS_SEND_URL)
    }
}

impl EmailJs {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Mailer for EmailJs {
    async fn send(&self, message: &OutgoingMessage) -> Result<(), DeliveryError> {
        let res = self
            .client
            .post(&self.endpoint)
            .json(&SendRequest::from(message))
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::DeliveryConfig;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let message = OutgoingMessage {
            config: DeliveryConfig::from_parts(Some("service_x"), Some("template_y"), Some("key_z"))
                .unwrap(),
            params: TemplateParams {
                from_name: "Jane".to_string(),
                from_email: "jane@x.com".to_string(),
                subject: "Hi".to_string(),
                message: "Hello".to_string(),
                to_email: "owner@example.com".to_string(),
            },
        };
        let body = serde_json::to_value(SendRequest::from(&message)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "key_z",
                "template_params": {
                    "from_name": "Jane",
                    "from_email": "jane@x.com",
                    "subject": "Hi",
                    "message": "Hello",
                    "to_email": "owner@example.com"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_error() {
        let mailer = EmailJs::new("http://127.0.0.1:9/api/v1.0/email/send");
        let message = OutgoingMessage {
            config: DeliveryConfig::from_parts(Some("s"), Some("t"), Some("k")).unwrap(),
            params: TemplateParams {
                from_name: "Jane".to_string(),
                from_email: "jane@x.com".to_string(),
                subject: "Hi".to_string(),
                message: "Hello".to_string(),
                to_email: "owner@example.com".to_string(),
            },
        };
        let err = mailer.send(&message).await.unwrap_err();
        assert!(matches!(err, DeliveryError::Transport(_)));
    }
}
