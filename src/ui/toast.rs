use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use uuid::Uuid;

/// Number of toasts kept before the oldest are dropped
pub const DEFAULT_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
}

/// Non-blocking notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Bounded queue of pending notifications
#[derive(Debug, Clone)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    capacity: usize,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Toasts {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> Uuid {
        if self.queue.len() == self.capacity {
            self.queue.pop_front();
        }

        let toast = Toast {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            created_at: Utc::now(),
        };
        let id = toast.id;
        self.queue.push_back(toast);
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Success, message)
    }

    /// Hands every pending toast to the caller, oldest first
    pub fn drain(&mut self) -> Vec<Toast> {
        self.queue.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.queue.iter().map(|t| t.message.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_drain_in_order() {
        let mut toasts = Toasts::default();
        toasts.info("Playing Heat...");
        toasts.success("Liked Heat");

        let drained = toasts.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "Playing Heat...");
        assert_eq!(drained[1].level, ToastLevel::Success);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut toasts = Toasts::with_capacity(2);
        toasts.info("one");
        toasts.info("two");
        toasts.info("three");

        assert_eq!(toasts.messages(), vec!["two", "three"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut toasts = Toasts::default();
        let a = toasts.info("a");
        let b = toasts.info("a");
        assert_ne!(a, b);

        let ids: Vec<Uuid> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, b]);
    }
}
