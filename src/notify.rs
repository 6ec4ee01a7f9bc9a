use std::time::{Duration, Instant};

pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Loading,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    created_at: Instant,
}

impl Toast {
    /// Loading toasts stay until dismissed.
    fn expired(&self, now: Instant) -> bool {
        self.kind != ToastKind::Loading && now.duration_since(self.created_at) >= TOAST_LIFETIME
    }
}

#[derive(Debug, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Error, message.into(), Instant::now())
    }

    pub fn loading(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Loading, message.into(), Instant::now())
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Success, message.into(), Instant::now())
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn prune(&mut self, now: Instant) {
        self.entries.retain(|toast| !toast.expired(now));
    }

    /// Time until the next toast expires, for scheduling a repaint.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.entries
            .iter()
            .filter(|toast| toast.kind != ToastKind::Loading)
            .map(|toast| (toast.created_at + TOAST_LIFETIME).saturating_duration_since(now))
            .min()
    }

    fn push(&mut self, kind: ToastKind, message: String, created_at: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            kind,
            message,
            created_at,
        });
        id
    }
}
