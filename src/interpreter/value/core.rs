use std::rc::Rc;

use crate::interpreter::value::format::format_number;

/// Represents a runtime value in the interpreter.
///
/// Arrays are fixed-length slices behind an `Rc`: copying an array value
/// (assigning it to another variable, or reading it back) shares the same
/// elements instead of duplicating them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A string, holding the raw literal text.
    Str(String),
    /// A fixed-length array of values.
    Array(Rc<[Self]>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v.into())
    }
}

impl Value {
    /// Returns the value's contribution to arithmetic.
    ///
    /// Numbers contribute themselves. Strings and arrays silently contribute
    /// `0.0`; there is no conversion and no error.
    ///
    /// # Example
    /// ```
    /// use alphadelta::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).arithmetic_operand(), 2.5);
    /// assert_eq!(Value::from("12").arithmetic_operand(), 0.0);
    /// assert_eq!(Value::from(vec![Value::Number(1.0)]).arithmetic_operand(), 0.0);
    /// ```
    #[must_use]
    pub const fn arithmetic_operand(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Str(_) | Self::Array(_) => 0.0,
        }
    }

    /// Writes the value as an array element: strings are quoted.
    fn fmt_element(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "\"{s}\""),
            _ => write!(f, "{self}"),
        }
    }
}

/// The printed form of a value.
///
/// - Numbers use `%g` formatting (see [`format_number`]).
/// - Strings print their raw text.
/// - Arrays print as `[a, b, c]` with string elements quoted.
///
/// # Example
/// ```
/// use alphadelta::interpreter::value::core::Value;
///
/// let array = Value::from(vec![Value::Number(1.0), Value::from("two"), Value::Number(0.5)]);
///
/// assert_eq!(array.to_string(), r#"[1, "two", 0.5]"#);
/// assert_eq!(Value::from("two").to_string(), "two");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    value.fmt_element(f)?;
                }

                write!(f, "]")
            },
        }
    }
}
