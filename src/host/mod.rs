//! Collaborator contracts supplied by the host application.
//!
//! The list screen does not own dialogs, toasts or navigation. It asks the
//! host for them through the [`Notifier`] and [`Navigator`] traits. Identity
//! is not a trait here: the acting [`User`](crate::domain::User) is passed
//! explicitly to every mutating operation.

use crate::domain::{MasterStyle, StyleId};

/// Content shown in a modal alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertContent {
    /// The external form for creating a new master style.
    NewStyleForm,
    /// The code display for one style.
    StyleCode(StyleId),
}

/// A button offered by a modal alert, with the value it returns when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertButton {
    pub label: &'static str,
    pub value: bool,
}

impl AlertButton {
    #[must_use]
    pub const fn new(label: &'static str, value: bool) -> Self {
        Self { label, value }
    }
}

/// Dialog and notification surface of the host.
pub trait Notifier {
    /// Asks a yes/no question and blocks until the user answers.
    fn confirm(&mut self, message: &str) -> bool;

    /// Shows a transient message without waiting for the user.
    fn notify(&mut self, message: &str);

    /// Shows modal content and returns the value of the button pressed, or
    /// `None` if the alert was dismissed without pressing one.
    fn alert(&mut self, content: AlertContent, buttons: &[AlertButton]) -> Option<bool>;
}

/// Views the host can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Detail screen for one style, given the full record.
    StyleDetail(MasterStyle),
}

impl View {
    /// Name under which the host registers the view.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::StyleDetail(_) => "MasterStyleDetail",
        }
    }
}

/// Navigation surface of the host.
pub trait Navigator {
    /// Opens `view`, replacing the current screen.
    fn open(&mut self, view: View);
}
