// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_admin_domain::{DomainError, Draft, Record, RecordId, RecordKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info};

/// A stable ordering over records of one type.
pub type Comparator<R> = fn(&R, &R) -> Ordering;

/// Hands out record ids that are never reused.
///
/// Ids are decimal strings. The generator starts past the largest numeric
/// id it was seeded with and only moves forward, so removing a record never
/// frees its id for a later add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdGenerator {
    /// `None` once `u64::MAX` has been handed out.
    next: Option<u64>,
}

impl IdGenerator {
    /// Creates a generator that starts after every numeric id in `ids`.
    pub fn seeded_from<'a>(ids: impl IntoIterator<Item = &'a RecordId>) -> Self {
        let next: Option<u64> = ids
            .into_iter()
            .filter_map(RecordId::numeric)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self { next }
    }

    /// Returns the id the next call to `advance` will commit to, or `None`
    /// if every id has been used.
    #[must_use]
    pub fn peek(&self) -> Option<RecordId> {
        self.next.map(|next| RecordId::new(next.to_string()))
    }

    /// Commits the peeked id.
    pub fn advance(&mut self) {
        self.next = self.next.and_then(|next| next.checked_add(1));
    }
}

/// Narrows a collection listing.
///
/// The search text is matched case-insensitively against each record's
/// search fields. An extra predicate, such as an exact grade, can narrow the
/// result further.
pub struct RecordFilter<'a, R> {
    search: &'a str,
    narrow: Option<Box<dyn Fn(&R) -> bool + 'a>>,
}

impl<'a, R: Record> RecordFilter<'a, R> {
    /// Matches every record.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            search: "",
            narrow: None,
        }
    }

    /// Matches records whose search fields contain `text`.
    #[must_use]
    pub const fn search(text: &'a str) -> Self {
        Self {
            search: text,
            narrow: None,
        }
    }

    /// Additionally requires `predicate` to hold.
    #[must_use]
    pub fn narrowed_by(mut self, predicate: impl Fn(&R) -> bool + 'a) -> Self {
        self.narrow = Some(Box::new(predicate));
        self
    }

    /// Returns true if `record` passes the filter.
    pub fn matches(&self, record: &R) -> bool {
        record.matches_search(self.search) && self.narrow.as_ref().is_none_or(|f| f(record))
    }
}

impl<R> std::fmt::Debug for RecordFilter<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordFilter")
            .field("search", &self.search)
            .field("narrowed", &self.narrow.is_some())
            .finish()
    }
}

/// A removal the confirmation surface asked the user about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalRequest {
    pub kind: RecordKind,
    pub id: RecordId,
    /// The display name of the record.
    pub name: String,
}

impl RemovalRequest {
    /// The confirmation prompt text.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete {}?", self.name)
    }
}

/// Asks the user to confirm a destructive action.
pub trait ConfirmationSurface {
    /// Returns true if the user answered yes.
    fn confirm(&mut self, request: &RemovalRequest) -> bool;
}

/// A confirmation surface whose answer is known up front.
///
/// Hosts that collect the answer before calling in, such as a request
/// carrying an explicit `confirm` flag, use this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetAnswer(pub bool);

impl ConfirmationSurface for PresetAnswer {
    fn confirm(&mut self, _request: &RemovalRequest) -> bool {
        self.0
    }
}

/// Proof that the user confirmed removing one record.
///
/// Only `RecordCollection::request_removal` can create this, so
/// `RecordCollection::remove` cannot run without a yes from the
/// confirmation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedRemoval {
    kind: RecordKind,
    id: RecordId,
}

impl ConfirmedRemoval {
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }
}

/// An in-memory, insertion-ordered collection of one record type.
#[derive(Debug, Clone)]
pub struct RecordCollection<R: Record> {
    records: Vec<R>,
    ids: IdGenerator,
}

impl<R: Record> RecordCollection<R> {
    /// Creates a collection holding `records` in the given order.
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        let ids: IdGenerator = IdGenerator::seeded_from(records.iter().map(|r| r.id()));
        info!(kind = %R::KIND, count = records.len(), "Collection loaded");
        Self { records, ids }
    }

    /// Returns every record in insertion order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Lists the records passing `filter`, optionally sorted.
    ///
    /// The sort is stable, so records that compare equal keep insertion
    /// order.
    #[must_use]
    pub fn list(&self, filter: &RecordFilter<'_, R>, sort: Option<Comparator<R>>) -> Vec<&R> {
        let mut matched: Vec<&R> = self.records.iter().filter(|r| filter.matches(r)).collect();
        if let Some(compare) = sort {
            matched.sort_by(|a, b| compare(a, b));
        }
        matched
    }

    /// Appends a new record built from `draft`.
    ///
    /// Fields the draft leaves blank are filled from the record type's
    /// defaults. The record receives a fresh id.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft cannot be turned into a record, or if
    /// the collection has no ids left. The collection is unchanged and no id
    /// is consumed.
    pub fn add(&mut self, draft: &Draft) -> Result<R, DomainError> {
        let id: RecordId = self.ids.peek().ok_or(DomainError::IdsExhausted(R::KIND))?;

        let mut values: Draft = draft.clone();
        for (field, value) in R::DEFAULTS {
            values.set_default(field, value);
        }

        let record: R = R::from_draft(id, &values)?;
        self.ids.advance();
        self.records.push(record.clone());

        info!(kind = %R::KIND, id = %record.id(), "Record added");
        Ok(record)
    }

    /// Merges `patch` over the record with `id`.
    ///
    /// Fields absent from the patch keep their values. A blank value in the
    /// patch clears an optional field.
    ///
    /// # Returns
    ///
    /// The updated record, or `None` if no record has `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged values do not form a valid record.
    /// The stored record is unchanged.
    pub fn update(&mut self, id: &RecordId, patch: &Draft) -> Result<Option<R>, DomainError> {
        let Some(index) = self.position(id) else {
            debug!(kind = %R::KIND, id = %id, "Update ignored, record not found");
            return Ok(None);
        };

        let mut merged: Draft = self.records[index].to_draft();
        merged.merge(patch);
        let updated: R = R::from_draft(id.clone(), &merged)?;
        self.records[index] = updated.clone();

        info!(kind = %R::KIND, id = %id, "Record updated");
        Ok(Some(updated))
    }

    /// Asks `surface` whether the record with `id` may be removed.
    ///
    /// # Returns
    ///
    /// A removal token if the record exists and the user said yes.
    pub fn request_removal(
        &self,
        id: &RecordId,
        surface: &mut dyn ConfirmationSurface,
    ) -> Option<ConfirmedRemoval> {
        let record: &R = self.get(id)?;
        let request: RemovalRequest = RemovalRequest {
            kind: R::KIND,
            id: id.clone(),
            name: record.display_name().to_string(),
        };

        if !surface.confirm(&request) {
            debug!(kind = %R::KIND, id = %id, "Removal declined");
            return None;
        }

        Some(ConfirmedRemoval {
            kind: R::KIND,
            id: id.clone(),
        })
    }

    /// Removes a confirmed record.
    ///
    /// # Returns
    ///
    /// The removed record, or `None` if it is already gone or the token
    /// was issued for another collection.
    pub fn remove(&mut self, confirmed: ConfirmedRemoval) -> Option<R> {
        if confirmed.kind != R::KIND {
            return None;
        }
        let index: usize = self.position(&confirmed.id)?;
        let removed: R = self.records.remove(index);

        info!(kind = %R::KIND, id = %confirmed.id, "Record removed");
        Some(removed)
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}
