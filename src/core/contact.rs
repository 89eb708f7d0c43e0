use thiserror::Error;

pub const NO_SUBJECT: &str = "(no subject)";

pub const MSG_SENDING: &str = "Sending...";
pub const MSG_SENT: &str = "Message sent — thank you!";
pub const MSG_SEND_FAILED: &str = "Unable to send message. Try again later.";

/// User-facing validation failures; `Display` is the alert text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please complete name, email and message.")]
    MissingFields,
    #[error("EmailJS not configured. Please set service/template/public key in the form.")]
    NotConfigured,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub from_name: String,
    pub reply_to: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn from_fields(
        name: &str,
        reply_to: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactError> {
        let (name, reply_to, message) = (name.trim(), reply_to.trim(), message.trim());
        if name.is_empty() || reply_to.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        let subject = if subject.is_empty() {
            NO_SUBJECT
        } else {
            subject
        };
        Ok(Self {
            from_name: name.to_string(),
            reply_to: reply_to.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }

    /// Template parameters in the order the email template expects them.
    pub fn template_params(&self) -> [(&'static str, &str); 4] {
        [
            ("from_name", self.from_name.as_str()),
            ("reply_to", self.reply_to.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailServiceConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailServiceConfig {
    pub fn from_fields(
        service_id: &str,
        template_id: &str,
        public_key: &str,
    ) -> Result<Self, ContactError> {
        if service_id.is_empty() || template_id.is_empty() || public_key.is_empty() {
            return Err(ContactError::NotConfigured);
        }
        Ok(Self {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            public_key: public_key.to_string(),
        })
    }
}
