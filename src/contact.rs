mod emailjs;

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

pub use emailjs::EmailJs;

/// How long the "sent" panel stays up before the form comes back.
pub const SENT_RESET_DELAY: Duration = Duration::from_millis(5000);

pub const NOT_CONFIGURED_MESSAGE: &str =
    "Email service is not configured yet. Please contact me directly via email or LinkedIn for now.";
pub const DELIVERY_FAILED_MESSAGE: &str =
    "Failed to send message. Please try again or contact me directly via email.";

/// The three EmailJS settings. All must be present for delivery to be attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl DeliveryConfig {
    /// Builds a config only when every value is present and non-blank.
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        let present = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Some(Self {
            service_id: present(service_id)?,
            template_id: present(template_id)?,
            public_key: present(public_key)?,
        })
    }

    /// Reads the values baked in at compile time (see build.rs).
    pub fn from_build_env() -> Option<Self> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Same rule as the inputs' `required` attribute: only an empty value is missing.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotConfigured,
    DeliveryFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Sent,
    Failed {
        kind: FailureKind,
        fallback_email: String,
    },
}

/// Named template parameters handed to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub config: DeliveryConfig,
    pub params: TemplateParams,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("email service is not configured")]
    NotConfigured,
    #[error("a message is already being sent")]
    InFlight,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("could not reach the relay: {0}")]
    Transport(String),
}

/// Sends a prepared message through an external relay.
pub trait Mailer {
    fn send(&self, message: &OutgoingMessage) -> impl Future<Output = Result<(), DeliveryError>>;
}

/// Owned state of one contact-form interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub fields: ContactFields,
    pub status: SubmissionStatus,
}

impl Default for ContactSubmission {
    fn default() -> Self {
        Self {
            fields: ContactFields::default(),
            status: SubmissionStatus::Idle,
        }
    }
}

impl ContactSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
        // typing again dismisses the thank-you panel early
        if self.status == SubmissionStatus::Sent {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match &self.status {
            SubmissionStatus::Failed { kind, .. } => Some(match kind {
                FailureKind::NotConfigured => NOT_CONFIGURED_MESSAGE,
                FailureKind::DeliveryFailed => DELIVERY_FAILED_MESSAGE,
            }),
            _ => None,
        }
    }

    pub fn fallback_email(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed { fallback_email, .. } => Some(fallback_email),
            _ => None,
        }
    }

    /// Validates the form and, if delivery can be attempted, moves to
    /// `Submitting` and returns the message to hand to a [`Mailer`].
    ///
    /// A missing field leaves the state untouched. Missing configuration
    /// moves straight to `Failed` without producing a message.
    pub fn begin(
        &mut self,
        config: Option<&DeliveryConfig>,
        to_email: &str,
    ) -> Result<OutgoingMessage, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        if let Some(field) = self.fields.first_missing() {
            return Err(SubmitError::MissingField(field));
        }
        let Some(config) = config else {
            log::warn!("contact form submitted without EmailJS configuration");
            self.status = SubmissionStatus::Failed {
                kind: FailureKind::NotConfigured,
                fallback_email: to_email.to_string(),
            };
            return Err(SubmitError::NotConfigured);
        };

        self.status = SubmissionStatus::Submitting;
        Ok(OutgoingMessage {
            config: config.clone(),
            params: TemplateParams {
                from_name: self.fields.name.clone(),
                from_email: self.fields.email.clone(),
                subject: self.fields.subject.clone(),
                message: self.fields.message.clone(),
                to_email: to_email.to_string(),
            },
        })
    }

    /// Applies the relay's answer for a message produced by [`Self::begin`].
    pub fn finish(&mut self, outgoing: &OutgoingMessage, result: Result<(), DeliveryError>) {
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmissionStatus::Sent;
            }
            Err(e) => {
                log::error!("Error sending email: {e}");
                self.status = SubmissionStatus::Failed {
                    kind: FailureKind::DeliveryFailed,
                    fallback_email: outgoing.params.to_email.clone(),
                };
            }
        }
    }

    /// Called when [`SENT_RESET_DELAY`] has elapsed after a successful send.
    pub fn expire_sent(&mut self) {
        if self.status == SubmissionStatus::Sent {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Runs one whole attempt against `mailer`.
    pub async fn submit<M: Mailer>(
        &mut self,
        mailer: &M,
        config: Option<&DeliveryConfig>,
        to_email: &str,
    ) -> Result<(), SubmitError> {
        let outgoing = self.begin(config, to_email)?;
        let result = mailer.send(&outgoing).await;
        self.finish(&outgoing, result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct StubMailer {
        result: Result<(), DeliveryError>,
        calls: Cell<usize>,
        last: RefCell<Option<OutgoingMessage>>,
    }

    impl StubMailer {
        fn resolving() -> Self {
            Self {
                result: Ok(()),
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }

        fn rejecting(reason: &str) -> Self {
            Self {
                result: Err(DeliveryError::Transport(reason.to_string())),
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl Mailer for StubMailer {
        async fn send(&self, message: &OutgoingMessage) -> Result<(), DeliveryError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(message.clone());
            self.result.clone()
        }
    }

    const OWNER: &str = "owner@example.com";

    fn config() -> DeliveryConfig {
        DeliveryConfig::from_parts(Some("service_x"), Some("template_y"), Some("public_z")).unwrap()
    }

    fn filled() -> ContactSubmission {
        let mut form = ContactSubmission::new();
        form.edit(Field::Name, "Jane");
        form.edit(Field::Email, "jane@x.com");
        form.edit(Field::Subject, "Hi");
        form.edit(Field::Message, "Hello");
        form
    }

    #[test]
    fn test_config_requires_all_three_values() {
        assert!(DeliveryConfig::from_parts(Some("s"), Some("t"), Some("k")).is_some());
        assert!(DeliveryConfig::from_parts(None, Some("t"), Some("k")).is_none());
        assert!(DeliveryConfig::from_parts(Some("s"), None, Some("k")).is_none());
        assert!(DeliveryConfig::from_parts(Some("s"), Some("t"), None).is_none());
        assert!(DeliveryConfig::from_parts(Some("s"), Some("  "), Some("k")).is_none());
    }

    #[tokio::test]
    async fn test_successful_send_clears_fields() {
        let mailer = StubMailer::resolving();
        let mut form = filled();

        form.submit(&mailer, Some(&config()), OWNER).await.unwrap();

        assert_eq!(form.status, SubmissionStatus::Sent);
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.error_message(), None);
        assert_eq!(mailer.calls.get(), 1);

        let sent = mailer.last.borrow().clone().unwrap();
        assert_eq!(
            sent.params,
            TemplateParams {
                from_name: "Jane".to_string(),
                from_email: "jane@x.com".to_string(),
                subject: "Hi".to_string(),
                message: "Hello".to_string(),
                to_email: OWNER.to_string(),
            }
        );
        assert_eq!(sent.config, config());

        form.expire_sent();
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_begin_moves_to_submitting() {
        let mut form = filled();
        let outgoing = form.begin(Some(&config()), OWNER).unwrap();
        assert!(form.is_submitting());
        // fields stay put until the relay answers
        assert_eq!(form.fields.name, "Jane");

        assert_eq!(form.begin(Some(&config()), OWNER), Err(SubmitError::InFlight));

        form.finish(&outgoing, Ok(()));
        assert_eq!(form.status, SubmissionStatus::Sent);
    }

    #[tokio::test]
    async fn test_empty_field_never_leaves_idle() {
        let mailer = StubMailer::resolving();
        for missing in Field::ALL {
            let mut form = filled();
            form.edit(missing, "");
            let err = form.submit(&mailer, Some(&config()), OWNER).await.unwrap_err();
            assert_eq!(err, SubmitError::MissingField(missing));
            assert_eq!(form.status, SubmissionStatus::Idle);
        }
        assert_eq!(mailer.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_field_is_sent_as_typed() {
        let mailer = StubMailer::resolving();
        let mut form = filled();
        form.edit(Field::Subject, " ");

        form.submit(&mailer, Some(&config()), OWNER).await.unwrap();
        assert_eq!(form.status, SubmissionStatus::Sent);
        assert_eq!(mailer.calls.get(), 1);
        let sent = mailer.last.borrow().clone().unwrap();
        assert_eq!(sent.params.subject, " ");
    }

    #[tokio::test]
    async fn test_missing_config_fails_without_network() {
        let mailer = StubMailer::resolving();
        let mut form = filled();

        let err = form.submit(&mailer, None, OWNER).await.unwrap_err();

        assert_eq!(err, SubmitError::NotConfigured);
        assert_eq!(mailer.calls.get(), 0);
        assert!(matches!(
            form.status,
            SubmissionStatus::Failed {
                kind: FailureKind::NotConfigured,
                ..
            }
        ));
        assert_eq!(form.error_message(), Some(NOT_CONFIGURED_MESSAGE));
        assert_ne!(form.error_message(), Some(DELIVERY_FAILED_MESSAGE));
        assert_eq!(form.fallback_email(), Some(OWNER));
        assert_eq!(form.fields.name, "Jane");
    }

    #[tokio::test]
    async fn test_rejected_delivery_keeps_fields() {
        let mailer = StubMailer::rejecting("network down");
        let mut form = filled();

        form.submit(&mailer, Some(&config()), OWNER).await.unwrap();

        assert!(matches!(
            form.status,
            SubmissionStatus::Failed {
                kind: FailureKind::DeliveryFailed,
                ..
            }
        ));
        let message = form.error_message().unwrap();
        assert!(message.contains("try again"));
        assert!(message.contains("email"));
        assert_eq!(form.fallback_email(), Some(OWNER));
        assert_eq!(
            form.fields,
            ContactFields {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                subject: "Hi".to_string(),
                message: "Hello".to_string(),
            }
        );
        assert_eq!(mailer.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure() {
        let mut form = filled();
        form.submit(&StubMailer::rejecting("network down"), Some(&config()), OWNER)
            .await
            .unwrap();
        assert!(form.error_message().is_some());

        let outgoing = form.begin(Some(&config()), OWNER).unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.error_message(), None);
        form.finish(&outgoing, Ok(()));
        assert_eq!(form.status, SubmissionStatus::Sent);
    }

    #[test]
    fn test_edit_while_sent_returns_to_idle() {
        let mut form = filled();
        let outgoing = form.begin(Some(&config()), OWNER).unwrap();
        form.finish(&outgoing, Ok(()));
        assert_eq!(form.status, SubmissionStatus::Sent);

        form.edit(Field::Name, "J");
        assert_eq!(form.status, SubmissionStatus::Idle);

        // a late timer is a no-op once the form has moved on
        form.expire_sent();
        assert_eq!(form.status, SubmissionStatus::Idle);
        assert_eq!(form.fields.name, "J");
    }

    #[test]
    fn test_expire_only_affects_sent() {
        let mut form = filled();
        form.expire_sent();
        assert_eq!(form.status, SubmissionStatus::Idle);

        let _ = form.begin(None, OWNER);
        form.expire_sent();
        assert!(form.error_message().is_some());
    }

    #[test]
    fn test_reset_delay_is_five_seconds() {
        assert_eq!(SENT_RESET_DELAY.as_millis(), 5000);
    }
}
