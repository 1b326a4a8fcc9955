// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The JSON-lines protocol.
//!
//! Each input line is one request:
//!
//! ```text
//! {"id": 1, "method": "records.list", "params": {"kind": "student"}}
//! ```
//!
//! Each request produces exactly one output line, either
//! `{"id", "ok": true, "result"}` or
//! `{"id", "ok": false, "error": {"code", "message"}}`. Notices raised while
//! handling the request ride along in `notices` when there are any.

use school_admin::{PreferenceStore, RemovalRequest};
use school_admin_api::request_response::{
    ExportRequest, HolidaysOnRequest, ListRecordsRequest, MarkReadRequest, OpenEditorRequest,
    RemoveRecordRequest, ResizeRequest, SetSidebarRequest, UpdateRecordRequest,
};
use school_admin_api::{ApiError, SchoolAdmin};
use school_admin_domain::{Draft, RecordId, RecordKind, format_number, initials};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// One request line.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// Echoed back unchanged. Any JSON value.
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// The error object of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One response line.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub id: Value,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Value>,
}

/// Errors raised while handling one request.
#[derive(Debug)]
pub enum ProtocolError {
    /// The line is not a valid request object.
    Parse(String),
    /// No handler exists for the method.
    UnknownMethod(String),
    /// The params do not match the method.
    InvalidParams { method: String, message: String },
    /// The facade rejected the request.
    Api(ApiError),
    /// The result could not be encoded.
    Encode(String),
}

impl ProtocolError {
    /// Returns the stable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse_error",
            Self::UnknownMethod(_) => "unknown_method",
            Self::InvalidParams { .. } => "invalid_params",
            Self::Api(err) => err.code(),
            Self::Encode(_) => "internal",
        }
    }
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Malformed request: {msg}"),
            Self::UnknownMethod(method) => write!(f, "Unknown method '{method}'"),
            Self::InvalidParams { method, message } => {
                write!(f, "Invalid params for '{method}': {message}")
            }
            Self::Api(err) => write!(f, "{err}"),
            Self::Encode(msg) => write!(f, "Failed to encode result: {msg}"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<ApiError> for ProtocolError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

#[derive(Debug, Deserialize)]
struct RecordRef {
    kind: RecordKind,
    id: RecordId,
}

#[derive(Debug, Deserialize)]
struct FieldsParams {
    fields: Draft,
}

#[derive(Debug, Deserialize)]
struct NumberParams {
    value: u64,
}

#[derive(Debug, Deserialize)]
struct NameParams {
    name: String,
}

/// Reads requests from `input` until it closes, answering each on `output`.
///
/// Blank lines are skipped.
///
/// # Returns
///
/// The number of requests answered.
///
/// # Errors
///
/// Returns an error only if reading or writing the streams fails.
pub fn serve<S, R, W>(
    admin: &mut SchoolAdmin<S>,
    input: R,
    mut output: W,
) -> std::io::Result<usize>
where
    S: PreferenceStore,
    R: BufRead,
    W: Write,
{
    let mut handled: usize = 0;
    for line in input.lines() {
        let line: String = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response: Response = handle_line(admin, &line);
        let encoded: String = serde_json::to_string(&response).map_err(std::io::Error::other)?;
        writeln!(output, "{encoded}")?;
        output.flush()?;
        handled += 1;
    }
    Ok(handled)
}

/// Answers one request line.
pub fn handle_line<S: PreferenceStore>(admin: &mut SchoolAdmin<S>, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected malformed request");
            return failure(Value::Null, &ProtocolError::Parse(e.to_string()), Vec::new());
        }
    };

    debug!(method = %request.method, "Handling request");
    let outcome: Result<Value, ProtocolError> = dispatch(admin, &request.method, request.params);
    let notices: Vec<Value> = encode_notices(admin.drain_notices());

    match outcome {
        Ok(result) => Response {
            id: request.id,
            ok: true,
            result: Some(result),
            error: None,
            notices,
        },
        Err(err) => {
            debug!(method = %request.method, code = err.code(), "Request failed");
            failure(request.id, &err, notices)
        }
    }
}

/// Encodes notices for a response. A notice that cannot be encoded is logged
/// and left out.
pub fn encode_notices<T: Serialize + std::fmt::Debug>(notices: Vec<T>) -> Vec<Value> {
    notices
        .into_iter()
        .filter_map(|notice| match serde_json::to_value(&notice) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, notice = ?notice, "Dropped notice that could not be encoded");
                None
            }
        })
        .collect()
}

fn failure(id: Value, err: &ProtocolError, notices: Vec<Value>) -> Response {
    Response {
        id,
        ok: false,
        result: None,
        error: Some(ErrorBody {
            code: err.code().to_string(),
            message: err.to_string(),
        }),
        notices,
    }
}

/// Routes a method to the facade.
///
/// # Errors
///
/// Returns an error if the method is unknown, the params do not fit it, or
/// the facade rejects the call.
pub fn dispatch<S: PreferenceStore>(
    admin: &mut SchoolAdmin<S>,
    method: &str,
    params: Value,
) -> Result<Value, ProtocolError> {
    match method {
        "sidebar.get" => encode(&admin.sidebar()),
        "sidebar.toggle" => encode(&admin.toggle_sidebar()),
        "sidebar.setCollapsed" => {
            let request: SetSidebarRequest = parse(method, params)?;
            encode(&admin.set_sidebar_collapsed(request))
        }
        "sidebar.setPreference" => {
            let request: SetSidebarRequest = parse(method, params)?;
            encode(&admin.set_sidebar_preference(request))
        }
        "sidebar.resize" => {
            let request: ResizeRequest = parse(method, params)?;
            encode(&admin.resize(request))
        }

        "records.list" => {
            let request: ListRecordsRequest = parse(method, params)?;
            encode(&admin.list_records(&request)?)
        }
        "records.update" => {
            let request: UpdateRecordRequest = parse(method, params)?;
            encode(&admin.update_record(&request)?)
        }
        "records.removalPrompt" => {
            let target: RecordRef = parse(method, params)?;
            let request: RemovalRequest = admin.removal_request(target.kind, &target.id)?;
            encode(&serde_json::json!({
                "kind": request.kind,
                "id": request.id,
                "name": request.name,
                "prompt": request.prompt(),
            }))
        }
        "records.remove" => {
            let request: RemoveRecordRequest = parse(method, params)?;
            encode(&admin.remove_record(&request)?)
        }

        "editor.open" => {
            let request: OpenEditorRequest = parse(method, params)?;
            encode(&admin.open_editor(&request)?)
        }
        "editor.get" => encode(&admin.editor_view()?),
        "editor.setFields" => {
            let request: FieldsParams = parse(method, params)?;
            encode(&admin.set_editor_fields(&request.fields)?)
        }
        "editor.next" => encode(&admin.editor_next()?),
        "editor.prev" => encode(&admin.editor_prev()?),
        "editor.submit" => encode(&admin.submit_editor()?),
        "editor.close" => encode(&admin.close_editor()),

        "notifications.list" => encode(&admin.notifications()),
        "notifications.markRead" => {
            let request: MarkReadRequest = parse(method, params)?;
            encode(&admin.mark_notification_read(&request)?)
        }
        "notifications.markAllRead" => encode(&admin.mark_all_notifications_read()),

        "dashboard.get" => encode(&admin.dashboard()),
        "holidays.on" => {
            let request: HolidaysOnRequest = parse(method, params)?;
            encode(&admin.holidays_on(request.date))
        }
        "export.csv" => {
            let request: ExportRequest = parse(method, params)?;
            encode(&admin.export(request.kind)?)
        }

        "format.number" => {
            let request: NumberParams = parse(method, params)?;
            encode(&format_number(request.value))
        }
        "format.initials" => {
            let request: NameParams = parse(method, params)?;
            encode(&initials(&request.name))
        }

        other => Err(ProtocolError::UnknownMethod(other.to_string())),
    }
}

fn parse<T: DeserializeOwned>(method: &str, params: Value) -> Result<T, ProtocolError> {
    serde_json::from_value(params).map_err(|e| ProtocolError::InvalidParams {
        method: method.to_string(),
        message: e.to_string(),
    })
}

fn encode<T: Serialize>(value: &T) -> Result<Value, ProtocolError> {
    serde_json::to_value(value).map_err(|e| ProtocolError::Encode(e.to_string()))
}
