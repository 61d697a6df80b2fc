//! ==============================================================================
//! notify.rs - transient notifications
//! ==============================================================================
//!
//! a notice is pushed `Visible`, moves to `Leaving` after
//! `NOTICE_DISPLAY_MS` (or when clicked) and is dismissed
//! `NOTICE_EXIT_MS` later. notices stack independently; the timers
//! live in the dashboard.
//!
//! ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Info,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "alert alert-success",
            Severity::Warning => "alert alert-warning",
            Severity::Info => "alert alert-info",
        }
    }
}

/// message plus severity, produced by workflows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self { message: message.into(), severity }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub notice: Notice,
    pub phase: Phase,
}

impl Notification {
    pub fn class(&self) -> String {
        match self.phase {
            Phase::Visible => self.notice.severity.class().to_string(),
            Phase::Leaving => format!("{} leaving", self.notice.severity.class()),
        }
    }
}

/// the on-screen notification stack, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, notice, phase: Phase::Visible });
        id
    }

    /// start the exit transition; false if the notice is gone or already leaving
    pub fn begin_exit(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if n.phase == Phase::Visible => {
                n.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_stack() {
        let mut center = NotificationCenter::new();
        let a = center.push(Notice::warning("uno"));
        let b = center.push(Notice::warning("uno"));
        assert_ne!(a, b);
        assert_eq!(center.items().len(), 2);
    }

    #[test]
    fn test_exit_then_dismiss() {
        let mut center = NotificationCenter::new();
        let id = center.push(Notice::success("ok"));
        assert_eq!(center.items()[0].class(), "alert alert-success");

        assert!(center.begin_exit(id));
        assert!(!center.begin_exit(id));
        assert_eq!(center.items()[0].class(), "alert alert-success leaving");

        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert!(center.is_empty());
    }

    #[test]
    fn test_dismiss_leaves_others() {
        let mut center = NotificationCenter::new();
        let first = center.push(Notice::new("a", Severity::Info));
        let second = center.push(Notice::new("b", Severity::Info));
        assert_eq!(center.items()[0].class(), "alert alert-info");
        center.dismiss(first);
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].id, second);
    }
}
