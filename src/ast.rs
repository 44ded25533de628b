/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct that yields a runtime value: numeric and
/// null literals, identifiers, and binary operations. Each variant carries
/// the source line it was parsed from for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant appearing directly in the source.
    NumericLiteral {
        /// The literal's value, parsed as a double.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// The `null` literal.
    NullLiteral {
        /// Line number in the source code.
        line: usize,
    },
    /// A user-defined symbol in the source.
    Identifier {
        /// The literal identifier text.
        symbol: String,
        /// Line number in the source code.
        line:   usize,
    },
    /// An operation with two operands separated by an operator.
    BinaryExpr {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use nulla::ast::Expr;
    ///
    /// let expr = Expr::Identifier { symbol: "x".to_string(),
    ///                               line:   5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::NumericLiteral { line, .. }
            | Self::NullLiteral { line }
            | Self::Identifier { line, .. }
            | Self::BinaryExpr { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units a program's body is made of. Declarations and
/// assignments are not part of the grammar yet (`let` and `=` are tokenized
/// but unused), so every statement is currently an expression statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression(Expr),
}

/// The root node of a parsed source text.
///
/// A `Program` owns an ordered sequence of statements. Exactly one program
/// is produced per parse, and it is consumed once by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The statements making up the program, in source order.
    pub body: Vec<Statement>,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
