use contracts::shared::notification::NotificationRecord;

/// A toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotification {
    pub id: u64,
    pub record: NotificationRecord,
}

/// Holds at most one visible toast.
///
/// Showing a new toast evicts the previous one. Each toast gets a fresh id so
/// that the expiry timer of an evicted toast cannot remove its successor.
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Option<ActiveNotification>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ActiveNotification> {
        self.current.as_ref()
    }

    /// Replace whatever is shown; returns the id to expire later
    pub fn show(&mut self, record: NotificationRecord) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(ActiveNotification { id, record });
        id
    }

    /// Timer expiry: removes the toast only if it is still the one shown
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Close control
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_notification_replaces_first() {
        let mut slot = NotificationSlot::new();
        slot.show(NotificationRecord::info("first"));
        slot.show(NotificationRecord::error("second"));
        let current = slot.current().unwrap();
        assert_eq!(current.record.message, "second");
    }

    #[test]
    fn test_stale_expiry_keeps_successor() {
        let mut slot = NotificationSlot::new();
        let first = slot.show(NotificationRecord::info("first"));
        let second = slot.show(NotificationRecord::info("second"));
        assert!(!slot.expire(first));
        assert!(slot.current().is_some());
        assert!(slot.expire(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_dismiss_then_expire_is_noop() {
        let mut slot = NotificationSlot::new();
        let id = slot.show(NotificationRecord::success("done"));
        slot.dismiss();
        assert!(!slot.expire(id));
        assert!(slot.current().is_none());
    }
}
