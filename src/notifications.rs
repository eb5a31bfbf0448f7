use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::timing::sleep_ms;

pub const SHOW_DELAY_MS: u32 = 100;
pub const VISIBLE_UNTIL_MS: u32 = 3000;
pub const EXIT_MS: u32 = 300;
pub const DEFAULT_ERROR_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

/// Milestones of a toast's life, measured from the moment it is pushed.
/// `None` means the toast is removed.
pub const LIFETIME: [(u32, Option<ToastPhase>); 3] = [
    (SHOW_DELAY_MS, Some(ToastPhase::Shown)),
    (VISIBLE_UNTIL_MS, Some(ToastPhase::Leaving)),
    (VISIBLE_UNTIL_MS + EXIT_MS, None),
];

/// Where a toast is in its fixed lifetime; `None` once it has been removed.
pub fn phase_at(elapsed_ms: u32) -> Option<ToastPhase> {
    let mut phase = Some(ToastPhase::Entering);
    for (at, next) in LIFETIME {
        if elapsed_ms >= at {
            phase = next;
        }
    }
    phase
}

/// Walks one toast through `LIFETIME`, handing each milestone to `advance`.
pub async fn run_lifetime(id: u64, mut advance: impl FnMut(u64, Option<ToastPhase>)) {
    let mut elapsed = 0;
    for (at, phase) in LIFETIME {
        sleep_ms(at - elapsed).await;
        elapsed = at;
        advance(id, phase);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub phase: ToastPhase,
}

/// Live toasts in insertion order. Each one runs its own lifetime; nothing
/// is merged or queued.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        let message = if message.trim().is_empty() && kind == ToastKind::Error {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        self.toasts.push(Toast {
            id,
            kind,
            message,
            phase: ToastPhase::Entering,
        });
        id
    }

    pub fn set_phase(&mut self, id: u64, phase: ToastPhase) {
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
            toast.phase = phase;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn advance(&mut self, id: u64, phase: Option<ToastPhase>) {
        match phase {
            Some(phase) => self.set_phase(id, phase),
            None => self.remove(id),
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    queue: Signal<ToastQueue>,
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut queue = self.queue;
        let id = queue.write().push(kind, message);
        // Root scope: the toast outlives whichever component raised it.
        let _ = spawn_forever(run_lifetime(id, move |id, phase| {
            queue.write().advance(id, phase)
        }));
    }
}

pub fn use_notifier_provider() -> Notifier {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Notifier { queue })
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

#[component]
pub fn ToastHost() -> Element {
    let notifier = use_notifier();
    let queue = notifier.queue.read();
    if queue.is_empty() {
        return rsx! {};
    }
    rsx! {
        for toast in queue.toasts().iter() {
            div {
                key: "{toast.id}",
                class: if toast.phase == ToastPhase::Shown { "notification {toast.kind.class()} show" } else { "notification {toast.kind.class()}" },
                role: "status",
                i { class: "{toast.kind.icon()}" }
                span { "{toast.message}" }
            }
        }
    }
}
