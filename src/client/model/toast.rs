use dioxus::prelude::*;

/// How long a toast stays on screen before dismissing itself.
pub const TOAST_LIFETIME_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide toast queue, provided as a context at the root.
///
/// Pushing a toast schedules its own dismissal; nothing else manages the
/// queue. Toasts only ever report success paths — failures go to the log.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.read().clone()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|toast| toast.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        self.items.write().push(Toast {
            id,
            kind,
            message: message.into(),
        });

        #[cfg(feature = "web")]
        {
            let mut items = self.items;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
                items.write().retain(|toast| toast.id != id);
            });
        }
    }
}
