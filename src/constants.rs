// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Useful constants.

/// The character separating the segments of an option key, e.g.
/// `compile.span.tiling`.
pub const KEY_DELIMITER: char = '.';
pub(crate) const KEY_DELIMITER_STR: &str = ".";

/// The prefix used when building the prompt of a top-level menu.
pub(crate) const ROOT_MENU_PREPEND: &str = "options for:";

/// The prompt of the synthetic reset entry appended to compile-time menus.
pub(crate) const RESET_PROMPT: &str = "reset to defaults (!)";

/// The prompt of the synthetic entry that undoes the last reset.
pub(crate) const UNDO_RESET_PROMPT: &str = "undo last reset";

pub(crate) const RESET_DOC: &str = "Reset all options to their original default values (presumably these are sensible values, supplied by the module designer).";

pub(crate) const UNDO_RESET_DOC: &str =
    "Restore the option values that were in use before the last reset.";

/// String values at least this long are abbreviated to "str" in menu group
/// summaries.
pub(crate) const SUMMARY_MAX_STR_LEN: usize = 5;

/// The separator between a registry name and a key when looking up options
/// through an [`crate::OptionNamespace`], e.g. `ionosphere:tiling`.
pub const NAMESPACE_SEPARATOR: char = ':';
