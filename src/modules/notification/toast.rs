use std::sync::{Arc, Mutex};
use tokio::time::{Duration, Instant};
use uuid::Uuid;

/// Every toast disappears on its own after this long.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Danger,
}

pub type ToastId = Uuid;

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub variant: ToastVariant,
    pub message: String,
    expires_at: Instant,
}

/// Process-wide ephemeral message queue. Clones share the queue; expiry is
/// stamped at push time and expired entries are purged on access, so there
/// is no per-toast timer to leak.
#[derive(Clone, Default)]
pub struct ToastChannel {
    inner: Arc<Mutex<Vec<Toast>>>,
}

impl ToastChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, message: impl Into<String>, variant: ToastVariant) -> ToastId {
        let toast = Toast {
            id: Uuid::new_v4(),
            variant,
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        };
        let id = toast.id;

        let mut queue = self.inner.lock().expect("toast queue poisoned");
        queue.retain(|t| t.expires_at > Instant::now());
        queue.push(toast);

        id
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastVariant::Success)
    }

    pub fn danger(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastVariant::Danger)
    }

    /// Currently visible toasts, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        let now = Instant::now();
        let mut queue = self.inner.lock().expect("toast queue poisoned");
        queue.retain(|t| t.expires_at > now);
        queue.clone()
    }

    /// Dismiss one toast before its expiry. Unknown ids are ignored.
    pub fn dismiss(&self, id: ToastId) {
        let mut queue = self.inner.lock().expect("toast queue poisoned");
        queue.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_toasts_expire_after_five_seconds() {
        let channel = ToastChannel::new();
        channel.success("Saved");

        assert_eq!(channel.active().len(), 1);

        tokio::time::advance(TOAST_TTL + Duration::from_millis(1)).await;

        assert!(channel.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_is_visible_just_before_expiry() {
        let channel = ToastChannel::new();
        channel.danger("Failed to save");

        tokio::time::advance(TOAST_TTL - Duration::from_millis(10)).await;

        let active = channel.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].variant, ToastVariant::Danger);
    }

    #[tokio::test(start_paused = true)]
    async fn test_individual_dismissal_before_expiry() {
        let channel = ToastChannel::new();
        let first = channel.success("One");
        channel.success("Two");

        channel.dismiss(first);

        let active = channel.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "Two");
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_toast_expires_on_its_own_clock() {
        let channel = ToastChannel::new();
        channel.success("Early");

        tokio::time::advance(Duration::from_secs(3)).await;
        channel.success("Late");

        tokio::time::advance(Duration::from_secs(3)).await;

        let active = channel.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "Late");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_the_queue() {
        let channel = ToastChannel::new();
        let clone = channel.clone();

        channel.success("Shared");

        assert_eq!(clone.active().len(), 1);
    }
}
