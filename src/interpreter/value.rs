/// Represents a runtime value in the interpreter.
///
/// This enum models the types an expression can evaluate to. Values are
/// produced fresh at each evaluation step and have no persistent identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A value with no meaning. Null is produced by the `null` literal, by
    /// empty programs, and by any binary operation with a null operand.
    Null,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl std::fmt::Display for Value {
    /// ## Example
    /// ```
    /// use nulla::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(3.5).to_string(), "3.5");
    /// assert_eq!(Value::Null.to_string(), "null");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Null => write!(f, "null"),
        }
    }
}
