use async_trait::async_trait;

/// Outbound HTML email. `reply_to` lets the notification mail be answered
/// directly from the owner's inbox.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(
        &self,
        to: &str,
        reply_to: Option<&str>,
        subject: &str,
        html_body: &str,
    ) -> Result<(), String>;
}
