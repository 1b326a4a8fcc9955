// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The width, in pixels, at which the layout switches from mobile to desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoint(u32);

impl Breakpoint {
    /// The breakpoint used by the dashboard layout.
    pub const DEFAULT_PX: u32 = 768;

    /// Creates a new `Breakpoint`.
    #[must_use]
    pub const fn new(px: u32) -> Self {
        Self(px)
    }

    /// Returns the breakpoint width in pixels.
    #[must_use]
    pub const fn px(&self) -> u32 {
        self.0
    }

    /// Classifies a viewport width against this breakpoint.
    ///
    /// Widths strictly below the breakpoint are mobile.
    #[must_use]
    pub const fn classify(&self, width: u32) -> ViewportClass {
        if width < self.0 {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(Self::DEFAULT_PX)
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Layout class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    #[must_use]
    pub const fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
