//! Toast notification queue

/// Toast flavor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "\u{2705}",     // ✅
            ToastKind::Error => "\u{274C}",       // ❌
            ToastKind::Info => "\u{2139}\u{FE0F}", // ℹ️
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastRequest {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub duration_ms: u32,
}

impl ToastRequest {
    pub fn new(kind: ToastKind, title: impl Into<String>, message: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            duration_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub request: ToastRequest,
    /// Playing its exit animation; removed once that ends
    pub leaving: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast and return its id
    pub fn push(&mut self, request: ToastRequest) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            request,
            leaving: false,
        });
        id
    }

    /// Duration elapsed: start the exit animation
    pub fn begin_leave(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    /// Exit animation finished
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut queue = ToastQueue::new();
        let first = queue.push(ToastRequest::new(ToastKind::Info, "Hi", "there", 4000));
        let second = queue.push(ToastRequest::new(ToastKind::Error, "Oops!", "bad", 4000));
        assert_ne!(first, second);
        assert_eq!(queue.toasts().len(), 2);

        queue.begin_leave(first);
        assert!(queue.toasts()[0].leaving);
        assert!(!queue.toasts()[1].leaving);

        queue.remove(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut queue = ToastQueue::new();
        queue.begin_leave(7);
        queue.remove(7);
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn test_kind_presentation() {
        assert_eq!(ToastKind::Success.class(), "toast-success");
        assert_eq!(ToastKind::Error.icon(), "\u{274C}");
    }
}
