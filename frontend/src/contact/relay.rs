use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::{json, Value};
use thiserror::Error;

use super::form::TemplateParams;
use crate::config::EmailRelayConfig;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RelayError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Something that can deliver a lead inquiry to the studio's inbox.
#[async_trait(?Send)]
pub trait EmailRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError>;
}

/// Sends through the EmailJS REST API.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsRelay {
    config: EmailRelayConfig,
}

/// Outcome of the provider's reply: any 2xx accepts the message.
pub fn check_status(status: u16, body: String) -> Result<(), RelayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RelayError::Rejected { status, body })
    }
}

impl EmailJsRelay {
    pub fn new(config: EmailRelayConfig) -> Self {
        Self { config }
    }

    pub fn request_body(&self, params: &TemplateParams) -> Value {
        json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": params,
        })
    }
}

#[async_trait(?Send)]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
        let request = Request::post(self.config.endpoint)
            .json(&self.request_body(params))
            .map_err(|e| RelayError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = response.status();
        let body = if response.ok() {
            String::new()
        } else {
            response.text().await.unwrap_or_default()
        };
        check_status(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_body_addresses_the_template() {
        let relay = EmailJsRelay::new(config::email_relay());
        let params = TemplateParams {
            from_name: "Jane Doe".to_string(),
            from_email: "jane@x.com".to_string(),
            service_type: "ui-ux".to_string(),
            message: "Need a redesign".to_string(),
        };

        let body = relay.request_body(&params);

        assert_eq!(body["service_id"], config::email_relay().service_id);
        assert_eq!(body["template_id"], config::email_relay().template_id);
        assert_eq!(body["user_id"], config::email_relay().public_key);
        assert_eq!(body["template_params"]["from_name"], "Jane Doe");
        assert_eq!(body["template_params"]["from_email"], "jane@x.com");
        assert_eq!(body["template_params"]["service_type"], "ui-ux");
        assert_eq!(body["template_params"]["message"], "Need a redesign");
    }

    #[test]
    fn errors_describe_the_cause() {
        let err = RelayError::Rejected {
            status: 400,
            body: "The template ID is invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "provider rejected the message (400): The template ID is invalid"
        );
        assert_eq!(
            RelayError::Network("offline".to_string()).to_string(),
            "request failed: offline"
        );
    }

    #[test]
    fn only_2xx_replies_count_as_sent() {
        assert_eq!(check_status(200, String::new()), Ok(()));
        assert_eq!(check_status(204, String::new()), Ok(()));
        for status in [199, 301, 400, 412, 500] {
            assert_eq!(
                check_status(status, "nope".to_string()),
                Err(RelayError::Rejected {
                    status,
                    body: "nope".to_string(),
                })
            );
        }
    }
}
