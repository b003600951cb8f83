//! Transient user-visible notifications.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single notification in the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Notification queue provided as an `RwSignal` context; the `Toaster`
/// component renders it and dismisses entries after a timeout.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn success(&mut self, title: &str, message: &str) -> u64 {
        self.push(ToastKind::Success, title, message)
    }

    pub fn error(&mut self, title: &str, message: &str) -> u64 {
        self.push(ToastKind::Error, title, message)
    }

    fn push(&mut self, kind: ToastKind, title: &str, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.to_owned(),
            message: message.to_owned(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
