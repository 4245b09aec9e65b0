use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::contact::application::contact_message::ContactMessage;
use crate::contact::application::templates;
use crate::email::application::ports::outgoing::EmailSender;

#[derive(Debug, Clone)]
pub enum SubmitContactError {
    /// No email provider configured. A hard failure, not a silent no-op.
    EmailNotConfigured,
    SendFailed(String),
}

impl fmt::Display for SubmitContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitContactError::EmailNotConfigured => {
                write!(f, "Email service is not configured")
            }
            SubmitContactError::SendFailed(msg) => write!(f, "Failed to send email: {}", msg),
        }
    }
}

/// Delivers a validated submission as two emails: a notification to the
/// site owner (reply-to the visitor) and a confirmation to the visitor.
#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, message: ContactMessage) -> Result<(), SubmitContactError>;
}

pub struct SubmitContactService {
    sender: Option<Arc<dyn EmailSender>>,
    owner_email: String,
    owner_name: String,
}

impl SubmitContactService {
    pub fn new(
        sender: Option<Arc<dyn EmailSender>>,
        owner_email: String,
        owner_name: String,
    ) -> Self {
        Self {
            sender,
            owner_email,
            owner_name,
        }
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, message: ContactMessage) -> Result<(), SubmitContactError> {
        let sender = self
            .sender
            .as_ref()
            .ok_or(SubmitContactError::EmailNotConfigured)?;

        sender
            .send_email(
                &self.owner_email,
                Some(message.email()),
                &templates::owner_notification_subject(&message),
                &templates::owner_notification_html(&message),
            )
            .await
            .map_err(SubmitContactError::SendFailed)?;

        sender
            .send_email(
                message.email(),
                None,
                &templates::confirmation_subject(&self.owner_name),
                &templates::confirmation_html(&message, &self.owner_name),
            )
            .await
            .map_err(SubmitContactError::SendFailed)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::contact::application::contact_message::ContactForm;

    #[derive(Debug, Clone)]
    struct SentMail {
        to: String,
        reply_to: Option<String>,
        subject: String,
    }

    struct RecordingSender {
        sent: Mutex<Vec<SentMail>>,
        fail: bool,
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send_email(
            &self,
            to: &str,
            reply_to: Option<&str>,
            subject: &str,
            _html_body: &str,
        ) -> Result<(), String> {
            if self.fail {
                return Err("smtp unavailable".to_string());
            }
            self.sent.lock().unwrap().push(SentMail {
                to: to.to_string(),
                reply_to: reply_to.map(String::from),
                subject: subject.to_string(),
            });
            Ok(())
        }
    }

    fn message() -> ContactMessage {
        ContactMessage::new(ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_sends_notification_then_confirmation() {
        let sender = Arc::new(RecordingSender {
            sent: Mutex::new(vec![]),
            fail: false,
        });
        let service = SubmitContactService::new(
            Some(Arc::clone(&sender) as Arc<dyn EmailSender>),
            "owner@example.com".to_string(),
            "Site Owner".to_string(),
        );

        service.execute(message()).await.unwrap();

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);

        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].reply_to.as_deref(), Some("ada@example.com"));
        assert!(sent[0].subject.starts_with("[Portfolio Contact]"));

        assert_eq!(sent[1].to, "ada@example.com");
        assert_eq!(sent[1].reply_to, None);
    }

    #[tokio::test]
    async fn test_missing_provider_is_a_hard_error() {
        let service = SubmitContactService::new(
            None,
            "owner@example.com".to_string(),
            "Site Owner".to_string(),
        );

        let result = service.execute(message()).await;

        assert!(matches!(
            result.unwrap_err(),
            SubmitContactError::EmailNotConfigured
        ));
    }

    #[tokio::test]
    async fn test_send_failure_propagates() {
        let sender = Arc::new(RecordingSender {
            sent: Mutex::new(vec![]),
            fail: true,
        });
        let service = SubmitContactService::new(
            Some(sender as Arc<dyn EmailSender>),
            "owner@example.com".to_string(),
            "Site Owner".to_string(),
        );

        let result = service.execute(message()).await;

        assert!(matches!(
            result.unwrap_err(),
            SubmitContactError::SendFailed(_)
        ));
    }
}
