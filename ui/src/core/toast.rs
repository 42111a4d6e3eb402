//! Transient, dismissible notices.

/// At most this many toasts are visible; pushing more drops the oldest.
pub const TOAST_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Destructive,
}

impl ToastVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastVariant::Info => "toast--info",
            ToastVariant::Destructive => "toast--destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
    remaining_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    lifetime_ms: u64,
    next_id: u64,
}

impl ToastQueue {
    pub fn new(lifetime_ms: u64) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime_ms,
            next_id: 1,
        }
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        variant: ToastVariant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            message: message.into(),
            variant,
            remaining_ms: self.lifetime_ms,
        });
        if self.toasts.len() > TOAST_LIMIT {
            let overflow = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Age every toast by `elapsed_ms`, dropping the expired ones.
    pub fn tick(&mut self, elapsed_ms: u64) {
        for toast in &mut self.toasts {
            toast.remaining_ms = toast.remaining_ms.saturating_sub(elapsed_ms);
        }
        self.toasts.retain(|toast| toast.remaining_ms > 0);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
