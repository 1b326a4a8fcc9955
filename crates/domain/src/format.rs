// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display helpers for dashboard tiles and avatars.

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Abbreviates a count for display.
///
/// Values of a million or more render as `1.5M`, values of a thousand or
/// more as `1.2K`, each rounded half-up to one decimal place. Smaller values
/// render unchanged.
///
/// # Arguments
///
/// * `value` - The count to format
#[must_use]
pub fn format_number(value: u64) -> String {
    if value >= MILLION {
        abbreviate(value, MILLION, 'M')
    } else if value >= THOUSAND {
        abbreviate(value, THOUSAND, 'K')
    } else {
        value.to_string()
    }
}

fn abbreviate(value: u64, unit: u64, suffix: char) -> String {
    let tenth: u64 = unit / 10;
    let tenths: u64 = value.saturating_add(tenth / 2) / tenth;
    format!("{}.{}{suffix}", tenths / 10, tenths % 10)
}

/// Returns up to two uppercase initials for a name.
///
/// Takes the first letter of each whitespace-separated word.
///
/// # Arguments
///
/// * `name` - A display name such as `John Smith`
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
