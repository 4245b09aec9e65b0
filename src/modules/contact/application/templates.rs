use super::contact_message::ContactMessage;

/// Inline HTML templates for the two contact emails. Visitor-provided text
/// is escaped before interpolation.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn nl2br(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

pub fn owner_notification_subject(msg: &ContactMessage) -> String {
    format!("[Portfolio Contact] {}", msg.subject())
}

pub fn owner_notification_html(msg: &ContactMessage) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333; border-bottom: 2px solid #007bff; padding-bottom: 10px;">
    New message from your portfolio
  </h2>
  <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #495057; margin-top: 0;">Contact details</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Subject:</strong> {subject}</p>
  </div>
  <div style="background-color: #ffffff; padding: 20px; border: 1px solid #dee2e6; border-radius: 8px;">
    <h3 style="color: #495057; margin-top: 0;">Message</h3>
    <p style="line-height: 1.6; color: #333;">{message}</p>
  </div>
</div>"#,
        name = escape_html(msg.name()),
        email = escape_html(msg.email()),
        subject = escape_html(msg.subject()),
        message = nl2br(msg.message()),
    )
}

pub fn confirmation_subject(site_owner: &str) -> String {
    format!("Thanks for getting in touch - {}", site_owner)
}

pub fn confirmation_html(msg: &ContactMessage, site_owner: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333;">Hi {name}!</h2>
  <p>Thanks for reaching out through my portfolio. I received your message:</p>
  <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Subject:</strong> {subject}</p>
    <p><strong>Message:</strong> {message}</p>
  </div>
  <p>I'll get back to you as soon as I can.</p>
  <p><strong>{owner}</strong></p>
  <hr style="margin: 30px 0; border: none; border-top: 1px solid #dee2e6;">
  <p style="font-size: 12px; color: #6c757d;">
    This is an automated confirmation. Please do not reply to this message.
  </p>
</div>"#,
        name = escape_html(msg.name()),
        subject = escape_html(msg.subject()),
        message = nl2br(msg.message()),
        owner = escape_html(site_owner),
    )
}
