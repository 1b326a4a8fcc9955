// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Responsive sidebar collapse state with a persisted desktop preference.
//!
//! On mobile the sidebar is always collapsed. On desktop it follows the
//! user's stored preference, which only desktop interaction may change.

use crate::error::PreferenceError;
use crate::preference::PreferenceStore;
use school_admin_domain::{Breakpoint, ViewportClass};
use tracing::{debug, info, warn};

/// The storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "sidebar-collapsed";

/// Injected configuration for a `SidenavController`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidenavConfig {
    /// Widths below this are mobile.
    pub breakpoint: Breakpoint,
    /// The key the collapse preference is stored under.
    pub storage_key: String,
}

impl Default for SidenavConfig {
    fn default() -> Self {
        Self {
            breakpoint: Breakpoint::default(),
            storage_key: String::from(DEFAULT_STORAGE_KEY),
        }
    }
}

/// Tracks the current viewport width and its layout class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportMonitor {
    breakpoint: Breakpoint,
    width: u32,
    class: ViewportClass,
}

impl ViewportMonitor {
    /// Creates a new `ViewportMonitor`.
    ///
    /// # Arguments
    ///
    /// * `breakpoint` - The mobile/desktop threshold
    /// * `width` - The initial viewport width in pixels
    #[must_use]
    pub const fn new(breakpoint: Breakpoint, width: u32) -> Self {
        Self {
            breakpoint,
            width,
            class: breakpoint.classify(width),
        }
    }

    /// Records a new width and reclassifies it.
    ///
    /// # Returns
    ///
    /// `true` if the layout class changed.
    pub const fn update(&mut self, width: u32) -> bool {
        let previous: ViewportClass = self.class;
        self.width = width;
        self.class = self.breakpoint.classify(width);
        !matches!(
            (previous, self.class),
            (ViewportClass::Mobile, ViewportClass::Mobile)
                | (ViewportClass::Desktop, ViewportClass::Desktop)
        )
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn class(&self) -> ViewportClass {
        self.class
    }

    #[must_use]
    pub const fn is_mobile(&self) -> bool {
        self.class.is_mobile()
    }
}

/// What happened to the durable preference after a setter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceWrite {
    /// The preference was written to the store.
    Saved,
    /// The viewport is mobile, so the preference was left untouched.
    NotPersisted,
    /// The store rejected the write. The new value shows until the next resize.
    Failed(PreferenceError),
}

/// The sidebar collapse state machine.
///
/// `collapsed` is the single value the layout renders. It is recomputed
/// from the viewport class and the preference on every resize, and
/// changed directly by the user through `set_collapsed`/`toggle`.
#[derive(Debug)]
pub struct SidenavController<S: PreferenceStore> {
    config: SidenavConfig,
    store: S,
    viewport: ViewportMonitor,
    preference: Option<bool>,
    collapsed: bool,
}

impl<S: PreferenceStore> SidenavController<S> {
    /// Creates a controller from the stored preference and initial width.
    ///
    /// A store that cannot be read is treated as holding no preference.
    ///
    /// # Arguments
    ///
    /// * `config` - Breakpoint and storage key
    /// * `store` - The durable preference store
    /// * `initial_width` - The viewport width at startup
    pub fn new(config: SidenavConfig, store: S, initial_width: u32) -> Self {
        let preference: Option<bool> = match store.load(&config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Sidebar preference unavailable, using session-only state");
                None
            }
        };
        let viewport: ViewportMonitor = ViewportMonitor::new(config.breakpoint, initial_width);
        let collapsed: bool = resolve_collapsed(viewport.class(), preference);

        info!(
            width = initial_width,
            class = %viewport.class(),
            preference = ?preference,
            collapsed,
            "Sidebar initialized"
        );

        Self {
            config,
            store,
            viewport,
            preference,
            collapsed,
        }
    }

    /// Returns whether the sidebar is currently collapsed.
    #[must_use]
    pub const fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Returns the user's desktop preference, `None` if never set.
    #[must_use]
    pub const fn user_preference(&self) -> Option<bool> {
        self.preference
    }

    #[must_use]
    pub const fn viewport(&self) -> &ViewportMonitor {
        &self.viewport
    }

    #[must_use]
    pub const fn config(&self) -> &SidenavConfig {
        &self.config
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Collapses or expands the sidebar at the user's request.
    ///
    /// The change is visible immediately. On desktop the value also becomes
    /// the stored preference. On mobile the preference is not touched, so
    /// returning to desktop restores the last desktop choice.
    pub fn set_collapsed(&mut self, next: bool) -> PreferenceWrite {
        self.collapsed = next;
        debug!(collapsed = next, class = %self.viewport.class(), "Sidebar toggled");

        if self.viewport.is_mobile() {
            return PreferenceWrite::NotPersisted;
        }
        self.write_preference(next)
    }

    /// Flips the collapse state. See `set_collapsed`.
    pub fn toggle(&mut self) -> PreferenceWrite {
        self.set_collapsed(!self.collapsed)
    }

    /// Stores a new desktop preference.
    ///
    /// On desktop the sidebar follows `next` at once. A failed write leaves
    /// the stored preference in place, so the next resize recomputes from it.
    pub fn set_user_preference(&mut self, next: bool) -> PreferenceWrite {
        let outcome: PreferenceWrite = self.write_preference(next);
        self.collapsed = resolve_collapsed(self.viewport.class(), Some(next));
        outcome
    }

    /// Recomputes the collapse state for a new viewport width.
    ///
    /// Every call recomputes, whether or not the layout class changed.
    /// Resizing never writes the preference.
    ///
    /// # Returns
    ///
    /// The layout class for `width`.
    pub fn handle_resize(&mut self, width: u32) -> ViewportClass {
        if self.viewport.update(width) {
            debug!(width, class = %self.viewport.class(), "Viewport class changed");
        }
        self.collapsed = resolve_collapsed(self.viewport.class(), self.preference);
        self.viewport.class()
    }

    fn write_preference(&mut self, next: bool) -> PreferenceWrite {
        match self.store.save(&self.config.storage_key, next) {
            Ok(()) => {
                self.preference = Some(next);
                PreferenceWrite::Saved
            }
            Err(e) => {
                warn!(
                    error = %e,
                    preference = ?self.preference,
                    "Sidebar preference not saved, keeping the stored value"
                );
                PreferenceWrite::Failed(e)
            }
        }
    }
}

const fn resolve_collapsed(class: ViewportClass, preference: Option<bool>) -> bool {
    match class {
        ViewportClass::Mobile => true,
        ViewportClass::Desktop => match preference {
            Some(value) => value,
            None => false,
        },
    }
}
