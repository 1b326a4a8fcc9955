// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod inbox;

#[cfg(test)]
mod tests;

pub use inbox::{Inbox, NotificationItem};

use school_admin_domain::{FieldError, RecordKind};
use serde::{Deserialize, Serialize};

/// The severity of a notice, which decides how it is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
    Info,
}

/// What a notice is about.
///
/// Hosts may key presentation or suppression off the topic rather than
/// parsing the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeTopic {
    /// A record was appended to its collection.
    RecordAdded,
    /// A record was changed in place.
    RecordUpdated,
    /// A record was removed after confirmation.
    RecordRemoved,
    /// A form step or submission was blocked by field errors.
    ValidationFailed,
    /// The sidebar preference could not be written and is session-only.
    PreferenceNotSaved,
}

/// A transient message for the user.
///
/// The core emits one notice per user-visible outcome: a successful
/// mutation, a blocked form step, or a preference that could not be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// How the notice should be presented.
    pub kind: NoticeKind,
    /// What the notice is about.
    pub topic: NoticeTopic,
    /// A short headline.
    pub title: String,
    /// Supporting detail.
    pub description: String,
}

impl Notice {
    /// Creates a new `Notice`.
    ///
    /// # Arguments
    ///
    /// * `kind` - The presentation severity
    /// * `topic` - What the notice is about
    /// * `title` - A short headline
    /// * `description` - Supporting detail
    #[must_use]
    pub const fn new(
        kind: NoticeKind,
        topic: NoticeTopic,
        title: String,
        description: String,
    ) -> Self {
        Self {
            kind,
            topic,
            title,
            description,
        }
    }

    /// A record was added to its collection.
    #[must_use]
    pub fn record_added(kind: RecordKind, name: &str) -> Self {
        Self::new(
            NoticeKind::Success,
            NoticeTopic::RecordAdded,
            format!("{} added", capitalized(kind)),
            format!("{name} was added successfully"),
        )
    }

    /// A record was updated in place.
    #[must_use]
    pub fn record_updated(kind: RecordKind, name: &str) -> Self {
        Self::new(
            NoticeKind::Success,
            NoticeTopic::RecordUpdated,
            format!("{} updated", capitalized(kind)),
            format!("{name} was updated successfully"),
        )
    }

    /// A record was removed from its collection.
    #[must_use]
    pub fn record_removed(kind: RecordKind, name: &str) -> Self {
        Self::new(
            NoticeKind::Success,
            NoticeTopic::RecordRemoved,
            format!("{} deleted", capitalized(kind)),
            format!("{name} was deleted successfully"),
        )
    }

    /// A form step or submission was blocked.
    ///
    /// The description lists the first failing field so a single toast is
    /// enough to point the user at the problem.
    #[must_use]
    pub fn validation_failed(errors: &[FieldError]) -> Self {
        let description: String = match errors {
            [] => String::from("Please fix the highlighted fields"),
            [only] => only.message.clone(),
            [first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
        };
        Self::new(
            NoticeKind::Error,
            NoticeTopic::ValidationFailed,
            String::from("Please fill in all required fields correctly"),
            description,
        )
    }

    /// The sidebar preference could not be persisted.
    #[must_use]
    pub fn preference_not_saved(reason: &str) -> Self {
        Self::new(
            NoticeKind::Warning,
            NoticeTopic::PreferenceNotSaved,
            String::from("Sidebar preference not saved"),
            format!("The setting applies until the window is resized: {reason}"),
        )
    }
}

fn capitalized(kind: RecordKind) -> String {
    let text: &str = kind.as_str();
    let mut chars: std::str::Chars<'_> = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Receives notices emitted by the core.
///
/// Sinks must not fail: a notice that cannot be shown is dropped.
pub trait NotificationSink {
    /// Delivers one notice.
    fn notify(&mut self, notice: Notice);
}

/// A sink that records every notice in delivery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            notices: Vec::new(),
        }
    }

    /// Returns the notices received so far.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Takes every recorded notice, leaving the log empty.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Returns true if a notice with `topic` has been received.
    #[must_use]
    pub fn contains(&self, topic: NoticeTopic) -> bool {
        self.notices.iter().any(|n| n.topic == topic)
    }
}

impl NotificationSink for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
