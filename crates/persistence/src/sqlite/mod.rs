// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod preferences;
mod schema;

pub use preferences::{delete_preference, load_preference, save_preference};
pub use schema::initialize_schema;
