#[derive(Debug)]
/// Represents all errors that can be raised during evaluation.
pub enum RuntimeError {
    /// Encountered an AST node kind that has no evaluation rule.
    ///
    /// With no variable environment, identifiers are the one node kind the
    /// evaluator cannot resolve to a value.
    UnsupportedNode {
        /// A description of the node that could not be evaluated.
        kind: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedNode { kind, line } => {
                write!(f, "Error on line {line}: No evaluation rule for {kind}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
