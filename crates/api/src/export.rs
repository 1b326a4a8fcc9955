// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of a record collection.
//!
//! The header row holds the bare field names. Every data value is quoted,
//! and fields a record leaves empty export as `""`. Lines are separated by
//! `\n` with no newline after the last one.

use crate::error::ApiError;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use school_admin_domain::{Draft, Record};
use tracing::debug;

/// Renders `records` as a CSV document.
///
/// # Arguments
///
/// * `records` - The records to export, in output order
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn to_csv<R: Record>(records: &[R]) -> Result<String, ApiError> {
    let columns: Vec<&'static str> = R::columns();

    let mut header: Writer<Vec<u8>> = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    header.write_record(&columns)?;
    let buffer: Vec<u8> = into_bytes(header)?;

    let mut rows: Writer<Vec<u8>> = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer);
    for record in records {
        let draft: Draft = record.to_draft();
        let values: Vec<&str> = columns
            .iter()
            .map(|column| match *column {
                "id" => record.id().value(),
                field => draft.raw(field).unwrap_or_default(),
            })
            .collect();
        rows.write_record(&values)?;
    }

    let mut bytes: Vec<u8> = into_bytes(rows)?;
    // Lines are joined, not terminated
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    debug!(kind = %R::KIND, rows = records.len(), "Exported collection");

    String::from_utf8(bytes).map_err(|e| ApiError::Internal {
        message: format!("CSV export produced invalid UTF-8: {e}"),
    })
}

/// The suggested download name for a collection export.
#[must_use]
pub fn filename<R: Record>() -> String {
    format!("{}s.csv", R::KIND)
}

fn into_bytes(writer: Writer<Vec<u8>>) -> Result<Vec<u8>, ApiError> {
    writer.into_inner().map_err(|e| ApiError::Internal {
        message: format!("CSV export failed: {}", e.error()),
    })
}
