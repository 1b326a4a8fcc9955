// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Notice, NoticeKind, NotificationSink};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One entry in the notification bell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: NoticeKind,
    /// Relative time as displayed, e.g. `2 minutes ago`.
    pub time: String,
    pub read: bool,
}

/// The notification bell's item list with read tracking.
///
/// Items keep their insertion order. Notices delivered through
/// [`NotificationSink`] are appended unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbox {
    items: Vec<NotificationItem>,
    next_id: u64,
}

impl Inbox {
    /// Creates an inbox holding `items`.
    ///
    /// Ids for later notices continue past the largest numeric id present.
    #[must_use]
    pub fn new(items: Vec<NotificationItem>) -> Self {
        let next_id: u64 = items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self { items, next_id }
    }

    #[must_use]
    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    /// Marks one item as read.
    ///
    /// # Returns
    ///
    /// `false` if no item has that id.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_as_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    /// Returns the number of unread items.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.read).count()
    }

    /// Appends a notice as an unread item and returns its id.
    pub fn push(&mut self, notice: Notice, time: impl Into<String>) -> String {
        let id: String = self.next_id.to_string();
        self.next_id = self.next_id.saturating_add(1);
        self.items.push(NotificationItem {
            id: id.clone(),
            title: notice.title,
            description: notice.description,
            kind: notice.kind,
            time: time.into(),
            read: false,
        });
        id
    }
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl NotificationSink for Inbox {
    fn notify(&mut self, notice: Notice) {
        debug!(title = %notice.title, topic = ?notice.topic, "Notice delivered to inbox");
        self.push(notice, "just now");
    }
}
