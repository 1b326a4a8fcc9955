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

mod apply;
mod collection;
mod command;
mod error;
mod preference;
mod sidenav;
mod step_form;

#[cfg(test)]
mod tests;

pub use apply::{TransitionResult, apply, apply_submission};
pub use collection::{
    Comparator, ConfirmationSurface, ConfirmedRemoval, IdGenerator, PresetAnswer,
    RecordCollection, RecordFilter, RemovalRequest,
};
pub use command::RecordCommand;
pub use error::{CoreError, PreferenceError, ValidationFailure};
pub use preference::{InMemoryPreferenceStore, PreferenceStore};
pub use sidenav::{
    DEFAULT_STORAGE_KEY, PreferenceWrite, SidenavConfig, SidenavController, ViewportMonitor,
};
pub use step_form::{EditorMode, StepFormSession, Submission};
