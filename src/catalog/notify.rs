//! Transient user-facing notifications.

use std::collections::VecDeque;
use std::time::Duration;

use leptos::prelude::*;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load projects";

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Maximum number of toasts kept at once; the oldest is dropped first.
pub const MAX_TOASTS: usize = 4;

/// Receives fire-and-forget messages meant for the user.
pub trait Notifier {
    fn notify_error(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Adds a message and returns its id. A message identical to one already
    /// queued replaces it.
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let message = message.into();
        self.toasts.retain(|t| t.message != message);

        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast { id, message });

        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Reactive toast queue shared through context and rendered by
/// [`crate::components::Toaster`].
#[derive(Debug, Clone, Copy)]
pub struct ToastNotifier {
    queue: RwSignal<ToastQueue>,
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    #[must_use]
    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Notifier for ToastNotifier {
    fn notify_error(&self, message: &str) {
        let Some(id) = self.queue.try_update(|q| q.push(message)) else {
            return;
        };
        let queue = self.queue;
        set_timeout(move || queue.update(|q| q.dismiss(id)), TOAST_TTL);
    }
}
