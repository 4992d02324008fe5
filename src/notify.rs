//! Status/alert notifier
//!
//! One shared footer element with a success/error style switch and two
//! lifetimes:
//! - **persistent** alerts stay until the next status change (validate), and
//! - **transient** alerts auto-hide 3 seconds after they were scheduled
//!   (paste pipeline, copy, download, restore).
//!
//! A transient alert shown while another transient is still pending replaces
//! the text but keeps the earlier hide deadline, so the earliest scheduled
//! hide wins. That matches the original tool, where every transient message
//! armed its own independent hide timer against the shared element.

use std::time::{Duration, Instant};

/// How long a transient alert stays visible.
pub const TRANSIENT_SECS: u64 = 3;

/// Success/error styling for the shared alert element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
struct Alert {
    message: String,
    kind: AlertKind,
    /// None = persistent, Some = hide once this instant has passed
    deadline: Option<Instant>,
}

/// Holds at most one alert; showing a new one replaces the old.
#[derive(Default)]
pub struct Notifier {
    current: Option<Alert>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an alert that stays until the next status change.
    pub fn show_persistent(&mut self, kind: AlertKind, message: impl Into<String>) {
        self.current = Some(Alert {
            message: message.into(),
            kind,
            deadline: None,
        });
    }

    /// Show an auto-hiding alert.
    pub fn show_transient(&mut self, kind: AlertKind, message: impl Into<String>) {
        self.show_transient_at(kind, message, Instant::now());
    }

    /// Clock-injected variant of [`show_transient`](Self::show_transient).
    pub fn show_transient_at(&mut self, kind: AlertKind, message: impl Into<String>, now: Instant) {
        // Keep an unexpired transient's deadline; only the text/kind change.
        let deadline = match &self.current {
            Some(Alert {
                deadline: Some(existing),
                ..
            }) if *existing > now => *existing,
            _ => now + Duration::from_secs(TRANSIENT_SECS),
        };
        self.current = Some(Alert {
            message: message.into(),
            kind,
            deadline: Some(deadline),
        });
    }

    /// The alert to display right now, if any.
    pub fn current(&self) -> Option<(&str, AlertKind)> {
        self.current_at(Instant::now())
    }

    /// Clock-injected variant of [`current`](Self::current).
    pub fn current_at(&self, now: Instant) -> Option<(&str, AlertKind)> {
        self.current.as_ref().and_then(|alert| {
            match alert.deadline {
                Some(deadline) if now >= deadline => None,
                _ => Some((alert.message.as_str(), alert.kind)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistent_alert_survives_any_delay() {
        let mut n = Notifier::new();
        let t0 = Instant::now();
        n.show_persistent(AlertKind::Success, "JSON is valid");
        let later = t0 + Duration::from_secs(3600);
        assert_eq!(n.current_at(later), Some(("JSON is valid", AlertKind::Success)));
    }

    #[test]
    fn transient_alert_expires_after_three_seconds() {
        let mut n = Notifier::new();
        let t0 = Instant::now();
        n.show_transient_at(AlertKind::Success, "Copied", t0);
        assert!(n.current_at(t0 + Duration::from_millis(2999)).is_some());
        assert!(n.current_at(t0 + Duration::from_secs(3)).is_none());
    }

    #[test]
    fn overlapping_transients_keep_earliest_deadline() {
        let mut n = Notifier::new();
        let t0 = Instant::now();
        n.show_transient_at(AlertKind::Success, "first", t0);
        // One second later a second transient replaces the text but must not
        // extend the pending hide.
        let t1 = t0 + Duration::from_secs(1);
        n.show_transient_at(AlertKind::Error, "second", t1);
        assert_eq!(
            n.current_at(t1),
            Some(("second", AlertKind::Error))
        );
        assert!(n.current_at(t0 + Duration::from_secs(3)).is_none());
    }

    #[test]
    fn transient_after_expiry_gets_fresh_deadline() {
        let mut n = Notifier::new();
        let t0 = Instant::now();
        n.show_transient_at(AlertKind::Success, "first", t0);
        let t1 = t0 + Duration::from_secs(10);
        n.show_transient_at(AlertKind::Success, "second", t1);
        assert!(n.current_at(t1 + Duration::from_secs(2)).is_some());
        assert!(n.current_at(t1 + Duration::from_secs(3)).is_none());
    }

    #[test]
    fn persistent_replaces_transient_and_vice_versa() {
        let mut n = Notifier::new();
        let t0 = Instant::now();
        n.show_transient_at(AlertKind::Success, "saved", t0);
        n.show_persistent(AlertKind::Error, "Invalid JSON: oops");
        assert!(n.current_at(t0 + Duration::from_secs(60)).is_some());
        n.show_transient_at(AlertKind::Success, "saved again", t0 + Duration::from_secs(61));
        assert!(n.current_at(t0 + Duration::from_secs(65)).is_none());
    }
}
