// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collection::RecordCollection;
use crate::command::RecordCommand;
use crate::error::CoreError;
use crate::step_form::Submission;
use school_admin_domain::Record;
use school_admin_notifications::Notice;

/// The result of applying a command to a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult<R> {
    /// The record as added, updated or removed. `None` when the target
    /// record does not exist, which is not an error.
    pub record: Option<R>,
    /// The notice to show for this transition, if anything changed.
    pub notice: Option<Notice>,
}

impl<R> TransitionResult<R> {
    const fn unchanged() -> Self {
        Self {
            record: None,
            notice: None,
        }
    }
}

/// Applies a command to a collection.
///
/// Each successful change yields exactly one notice. Commands aimed at a
/// record that no longer exists change nothing and yield no notice.
///
/// # Arguments
///
/// * `collection` - The collection to change
/// * `command` - The change to make
///
/// # Errors
///
/// Returns an error if the command's values do not form a valid record.
/// The collection is unchanged in that case.
pub fn apply<R: Record>(
    collection: &mut RecordCollection<R>,
    command: RecordCommand,
) -> Result<TransitionResult<R>, CoreError> {
    match command {
        RecordCommand::Add { draft } => {
            let record: R = collection.add(&draft)?;
            let notice: Notice = Notice::record_added(R::KIND, record.display_name());
            Ok(TransitionResult {
                record: Some(record),
                notice: Some(notice),
            })
        }
        RecordCommand::Update { id, patch } => match collection.update(&id, &patch)? {
            Some(record) => {
                let notice: Notice = Notice::record_updated(R::KIND, record.display_name());
                Ok(TransitionResult {
                    record: Some(record),
                    notice: Some(notice),
                })
            }
            None => Ok(TransitionResult::unchanged()),
        },
        RecordCommand::Remove { confirmed } => match collection.remove(confirmed) {
            Some(record) => {
                let notice: Notice = Notice::record_removed(R::KIND, record.display_name());
                Ok(TransitionResult {
                    record: Some(record),
                    notice: Some(notice),
                })
            }
            None => Ok(TransitionResult::unchanged()),
        },
    }
}

/// Applies a validated editor submission to its collection.
///
/// # Errors
///
/// Returns `CoreError::WrongCollection` if the submission was made for a
/// different record kind, or any error `apply` returns.
pub fn apply_submission<R: Record>(
    collection: &mut RecordCollection<R>,
    submission: Submission,
) -> Result<TransitionResult<R>, CoreError> {
    if submission.kind != R::KIND {
        return Err(CoreError::WrongCollection {
            expected: R::KIND,
            found: submission.kind,
        });
    }
    apply(collection, RecordCommand::from(submission))
}
