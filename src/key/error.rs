// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("An option key cannot be empty")]
    Empty,

    #[error("Option key '{0}' contains non-ASCII characters")]
    NotAscii(String),

    #[error("Option key '{0}' contains whitespace or a namespace separator (':')")]
    ForbiddenCharacter(String),

    #[error("Option key '{0}' contains an empty segment")]
    EmptySegment(String),

    #[error("Option key '{0}' only names a section; an option name must follow it")]
    SectionOnly(String),
}
