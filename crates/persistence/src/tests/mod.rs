// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use std::path::PathBuf;

/// Returns a database path unique to one test in this process.
pub fn create_test_db_path(name: &str) -> PathBuf {
    let path: PathBuf =
        std::env::temp_dir().join(format!("school-admin-{}-{name}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}
