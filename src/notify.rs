use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn logged_out() -> Self {
        Self::info("Logged Out", "You have been successfully logged out")
    }

    pub fn fetch_failed() -> Self {
        Self::error("Error", "Failed to fetch sales data")
    }
}

/// Pending toasts. Each one is shown by the next page that drains the queue.
#[derive(Clone, Default)]
pub struct Notices {
    pending: Arc<Mutex<Vec<Notification>>>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, notification: Notification) {
        self.pending.lock().await.push(notification);
    }

    pub async fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.pending.lock().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn drain_empties_the_queue() {
        let notices = Notices::new();
        notices.push(Notification::logged_out()).await;
        notices.push(Notification::fetch_failed()).await;

        let drained = notices.drain().await;
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1].variant, Variant::Destructive);
        assert!(notices.drain().await.is_empty());
    }
}
