//! User-facing notifications
//!
//! The ledger and SMS services report outcomes through a `Notifier`.
//! Delivery is fire-and-forget; nothing reads a result back.

use std::sync::Mutex;

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub is_error: bool,
}

/// Sink for user-facing notifications
pub trait Notifier {
    fn notify(&self, title: &str, body: &str, is_error: bool);
}

/// Prints notifications to the terminal
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str, is_error: bool) {
        if is_error {
            eprintln!("{}: {}", title, body);
        } else {
            println!("{}: {}", title, body);
        }
    }
}

/// Discards everything
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _body: &str, _is_error: bool) {}
}

/// Keeps notifications in memory so they can be inspected later
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications sent so far, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str, is_error: bool) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(Notification {
                title: title.to_string(),
                body: body.to_string(),
                is_error,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        assert!(notifier.last().is_none());

        notifier.notify("Income Added", "Salary: ₹100.00", false);
        notifier.notify("Already Processed", "dup", true);

        let sent = notifier.notifications();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].title, "Income Added");
        assert!(notifier.last().unwrap().is_error);
    }
}
