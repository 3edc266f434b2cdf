// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Hierarchical, typed options for measurement-equation tree modules.

Each module declares its options in an [`OptionRegistry`], reads them back by
full key or unique shorthand, and exposes them to a UI through
[`MenuDescriptor`]s. Overrides are persisted through a [`PersistenceBridge`].
 */

mod cli;
pub mod constants;
mod definitions;
mod error;
mod formats;
mod key;
mod menu;
mod namespace;
mod persist;
mod record;
mod registry;
mod value;

// Re-exports.
pub use cli::{MeqOpts, MeqOptsError};
pub use definitions::{DefinitionsError, OptionDefinition, OptionDefinitions};
pub use error::{CallbackError, OptionWarning, OptionsError};
pub use formats::FileFormat;
pub use key::{KeyError, KeyPath, Section};
pub use menu::{MenuAction, MenuDescriptor, MenuEntry, MenuGroup, MenuLeaf, MenuNode};
pub use namespace::OptionNamespace;
pub use persist::{FileStore, MemoryStore, PersistError, PersistenceBridge};
pub use record::{Callback, OptionRecord, OptionSpec};
pub use registry::{OptionRegistry, SetOutcome};
pub use value::{ScalarType, Value};
