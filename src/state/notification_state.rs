// ============================================================================
// NOTIFICATION STATE - One visible message at a time, newest wins
// ============================================================================

use crate::models::notification::Notification;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    current: Option<Notification>,
    visible: bool,
    generation: u64,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is shown. Returns the generation the hide timer must carry.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.generation += 1;
        log::debug!("💬 [NOTIFY] #{} {:?}: {}", self.generation, notification.kind, notification.text);
        self.current = Some(notification);
        self.visible = true;
        self.generation
    }

    /// Hide if `generation` is still the newest one. Stale timers are no-ops.
    pub fn hide(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn visible(&self) -> Option<&Notification> {
        if self.visible {
            self.current.as_ref()
        } else {
            None
        }
    }
}
