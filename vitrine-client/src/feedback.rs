//! Transient user feedback.
//!
//! There is a single notification slot. Showing a notification replaces the
//! current one and cancels its pending dismissal, so a timer can only ever
//! dismiss the notification it was scheduled for.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use log::debug;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// How long a timed notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(1800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub level: NotificationLevel,
}

#[derive(Debug, Default)]
struct Slot {
    current: Option<Notification>,
    timer: Option<JoinHandle<()>>,
}

impl Slot {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    slot: Arc<Mutex<Slot>>,
    next_id: Arc<AtomicU64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification that stays until dismissed.
    pub fn show(
        &self,
        message: impl Into<String>,
        level: NotificationLevel,
    ) -> NotificationId {
        let id = self.allocate_id();
        let mut slot = self.slot.lock();
        slot.cancel_timer();
        slot.current = Some(Notification {
            id,
            message: message.into(),
            level,
        });
        id
    }

    /// Show a notification that dismisses itself after `ttl`.
    ///
    /// Outside a tokio runtime no timer can be scheduled and the
    /// notification behaves like [`show`](Self::show).
    pub fn show_for(
        &self,
        message: impl Into<String>,
        level: NotificationLevel,
        ttl: Duration,
    ) -> NotificationId {
        let id = self.show(message, level);

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            debug!("no async runtime; notification {id:?} stays until dismissed");
            return id;
        };

        let center = self.clone();
        let timer = handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            center.expire(id);
        });

        let mut slot = self.slot.lock();
        // Another notification may have replaced this one in the meantime.
        if slot.current.as_ref().map(|n| n.id) == Some(id) {
            slot.timer = Some(timer);
        } else {
            timer.abort();
        }
        id
    }

    /// Dismiss `id` if it is still the current notification.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut slot = self.slot.lock();
        if slot.current.as_ref().map(|n| n.id) != Some(id) {
            return false;
        }
        slot.cancel_timer();
        slot.current = None;
        true
    }

    pub fn current(&self) -> Option<Notification> {
        self.slot.lock().current.clone()
    }

    fn expire(&self, id: NotificationId) {
        let mut slot = self.slot.lock();
        if slot.current.as_ref().map(|n| n.id) == Some(id) {
            slot.current = None;
            // This is the running timer; dropping the handle detaches it.
            slot.timer = None;
        }
    }

    fn allocate_id(&self) -> NotificationId {
        NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}
