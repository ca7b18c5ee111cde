use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Toasts waiting for the next rendered page. Each one is shown once.
#[derive(Default)]
pub struct Notifier {
    queue: Mutex<Vec<Notification>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, notification: Notification) {
        self.queue.lock().await.push(notification);
    }

    pub async fn success(&self, message: impl Into<String>) {
        self.push(Notification::success(message)).await;
    }

    pub async fn error(&self, message: impl Into<String>) {
        self.push(Notification::error(message)).await;
    }

    pub async fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.queue.lock().await)
    }
}
