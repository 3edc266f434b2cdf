// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The declaration of a single option, and the record a registry keeps for it.

use itertools::Itertools;

use crate::{
    error::CallbackError,
    key::{KeyPath, Section},
    value::ScalarType,
    Value,
};

/// A function called with the new value whenever an option's value changes.
/// Any context the callback needs must be moved into it.
pub type Callback = Box<dyn FnMut(&Value) -> Result<(), CallbackError>>;

/// Everything needed to declare an option. Only the key and the default are
/// required; everything else is set with builder methods.
///
/// ```
/// use meqtree_options::{OptionSpec, ScalarType};
///
/// let spec = OptionSpec::new("compile.span.tiling", None::<i64>)
///     .choices([1, 2, 4, 8])
///     .custom_type(ScalarType::Int)
///     .doc("The number of timeslots per solution tile");
/// ```
pub struct OptionSpec {
    pub(crate) key: String,
    pub(crate) default: Value,
    pub(crate) choices: Vec<Value>,
    pub(crate) custom_type: Option<ScalarType>,
    pub(crate) prompt: Option<String>,
    pub(crate) doc: Option<String>,
    pub(crate) callback: Option<Callback>,
}

impl OptionSpec {
    pub fn new<K: Into<String>, V: Into<Value>>(key: K, default: V) -> OptionSpec {
        OptionSpec {
            key: key.into(),
            default: default.into(),
            choices: vec![],
            custom_type: None,
            prompt: None,
            doc: None,
            callback: None,
        }
    }

    /// The discrete values this option may take.
    pub fn choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// Allow free entry of this type, in addition to any choices.
    pub fn custom_type(mut self, custom_type: ScalarType) -> Self {
        self.custom_type = Some(custom_type);
        self
    }

    pub fn prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn doc<S: Into<String>>(mut self, doc: S) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Value) -> Result<(), CallbackError> + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }
}

/// A declared option, owned by an [`crate::OptionRegistry`]. Records can only
/// be read from outside the registry.
pub struct OptionRecord {
    pub(crate) key: KeyPath,
    pub(crate) value: Value,
    pub(crate) default: Value,
    pub(crate) choices: Vec<Value>,
    pub(crate) custom_type: Option<ScalarType>,
    pub(crate) prompt: String,
    pub(crate) doc: Option<String>,
    pub(crate) callback: Option<Callback>,
    pub(crate) hidden: bool,
    pub(crate) enabled: bool,
}

impl OptionRecord {
    pub(crate) fn new(key: KeyPath, spec: OptionSpec) -> OptionRecord {
        let prompt = spec.prompt.unwrap_or_else(|| key.name().to_string());
        OptionRecord {
            key,
            value: spec.default.clone(),
            default: spec.default,
            choices: spec.choices,
            custom_type: spec.custom_type,
            prompt,
            doc: spec.doc,
            callback: spec.callback,
            hidden: false,
            enabled: true,
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn key_path(&self) -> &KeyPath {
        &self.key
    }

    pub fn section(&self) -> Section {
        self.key.section()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn default(&self) -> &Value {
        &self.default
    }

    pub fn choices(&self) -> &[Value] {
        &self.choices
    }

    pub fn custom_type(&self) -> Option<ScalarType> {
        self.custom_type
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Has the value been changed away from its default?
    pub fn is_overridden(&self) -> bool {
        self.value != self.default
    }

    /// May this option take the supplied value? The default is always
    /// admissible, so that a reset can never be refused.
    pub fn admits(&self, value: &Value) -> bool {
        if *value == self.default {
            return true;
        }
        if matches!(value, Value::Float(f) if !f.is_finite()) {
            return false;
        }
        if let Some(t) = self.custom_type {
            if t.accepts(value) {
                return true;
            }
        }
        if !self.choices.is_empty() {
            return self.choices.contains(value);
        }
        match (self.custom_type, self.default.scalar_type()) {
            // A custom type was given, but it didn't match.
            (Some(_), _) => false,
            // Free-form; the value must look like the default.
            (None, Some(t)) => t.accepts(value),
            // Declared without a value, so anything goes.
            (None, None) => true,
        }
    }

    /// The form an admitted value is kept in: the matching default or choice
    /// if there is one, so that e.g. `2` becomes the declared `2.0`.
    /// Otherwise integers become floats where a float is expected.
    pub(crate) fn canonical(&self, value: Value) -> Value {
        if let Some(v) = std::iter::once(&self.default)
            .chain(self.choices.iter())
            .find(|v| **v == value)
        {
            return v.clone();
        }
        match (value, self.custom_type.or_else(|| self.default.scalar_type())) {
            (Value::Int(i), Some(ScalarType::Float)) => Value::Float(i as f64),
            (v, _) => v,
        }
    }

    /// Describe what this option accepts, for error messages.
    pub(crate) fn allowed_description(&self) -> String {
        let mut s = String::new();
        if !self.choices.is_empty() {
            s.push_str(&format!(
                "choices are: {}",
                self.choices.iter().join(", ")
            ));
        }
        match (self.custom_type, self.default.scalar_type()) {
            (Some(t), _) => {
                if !s.is_empty() {
                    s.push_str(", or ");
                }
                s.push_str(&format!("any {t}"));
            }
            (None, Some(ScalarType::Float)) if self.choices.is_empty() => {
                s.push_str("expected a finite float")
            }
            (None, Some(t)) if self.choices.is_empty() => s.push_str(&format!("expected a {t}")),
            _ => (),
        }
        if s.is_empty() {
            s.push_str("the value was not accepted");
        }
        s
    }

    /// Interpret some text (e.g. typed into a menu or given on the command
    /// line) as a value for this option. The result still needs to be
    /// admitted.
    pub fn parse_value(&self, text: &str) -> Value {
        let text = text.trim();
        if let Some(v) = std::iter::once(&self.default)
            .chain(self.choices.iter())
            .find(|v| v.to_string() == text)
        {
            return v.clone();
        }
        if let Some(v) = self.custom_type.and_then(|t| t.parse(text)) {
            return v;
        }
        match self.default.scalar_type() {
            Some(t) if self.choices.is_empty() => t.parse(text).unwrap_or_else(|| Value::infer(text)),
            _ => Value::infer(text),
        }
    }

    /// The choices to offer in a menu: the current value first, then the
    /// declared choices, without repeats.
    pub fn menu_choices(&self) -> Vec<Value> {
        let mut choices = vec![self.value.clone()];
        for c in &self.choices {
            if !choices.contains(c) {
                choices.push(c.clone());
            }
        }
        choices
    }
}

impl std::fmt::Debug for OptionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionRecord")
            .field("key", &self.key.as_str())
            .field("value", &self.value)
            .field("default", &self.default)
            .field("choices", &self.choices)
            .field("custom_type", &self.custom_type)
            .field("prompt", &self.prompt)
            .field("doc", &self.doc)
            .field("callback", &self.callback.is_some())
            .field("hidden", &self.hidden)
            .field("enabled", &self.enabled)
            .finish()
    }
}
