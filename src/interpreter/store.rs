use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The flat variable store of one program run.
///
/// There is a single namespace with no scoping and no declarations: assigning
/// to an unseen name creates it, assigning to a known name replaces its value
/// whatever the previous type was.
///
/// # Example
/// ```
/// use alphadelta::interpreter::{store::Variables, value::core::Value};
///
/// let mut variables = Variables::new();
/// variables.set("x", Value::Number(1.0));
/// variables.set("x", Value::from("one"));
///
/// assert_eq!(variables.get("x"), Some(&Value::from("one")));
/// assert_eq!(variables.len(), 1);
/// assert_eq!(variables.get("y"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: HashMap<String, Value>,
}

impl Variables {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.values.insert(name.to_owned(), value);
        }
    }

    /// Number of distinct variables assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
