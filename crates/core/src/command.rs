// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collection::ConfirmedRemoval;
use crate::step_form::{EditorMode, Submission};
use school_admin_domain::{Draft, RecordId};

/// A command represents a requested collection change as data only.
///
/// Commands are the only way to change a record collection through `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordCommand {
    /// Append a new record.
    Add {
        /// The submitted values.
        draft: Draft,
    },
    /// Merge values over an existing record.
    Update {
        /// The record to change.
        id: RecordId,
        /// The values to overlay.
        patch: Draft,
    },
    /// Remove a record the user confirmed.
    Remove {
        /// The confirmation token.
        confirmed: ConfirmedRemoval,
    },
}

impl From<Submission> for RecordCommand {
    fn from(submission: Submission) -> Self {
        match submission.mode {
            EditorMode::Add => Self::Add {
                draft: submission.draft,
            },
            EditorMode::Edit(id) => Self::Update {
                id,
                patch: submission.draft,
            },
        }
    }
}
