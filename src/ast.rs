/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every node owns its children and is never mutated after the parser builds
/// it. Each variant records the source line it starts on for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal, holding the raw text between the quotes.
    Str {
        /// The literal text.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// Array literal expression (e.g. `[1, "a", x]`).
    ArrayLiteral {
        /// Element expressions in source order.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Indexing into a named array (e.g. `arr[2]`).
    ArrayIndex {
        /// The variable holding the array.
        name:  String,
        /// The index expression.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use alphadelta::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Str { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::ArrayIndex { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `print(expr);`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `name = expr;`, which creates or overwrites the variable.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `expr;`, evaluated for its effects only.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// A parsed program: its top-level statements in source order.
pub type Program = Vec<Statement>;

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
}

impl BinaryOperator {
    /// Applies the operator with IEEE 754 semantics.
    ///
    /// Division by zero is not an error; it yields an infinity or NaN.
    ///
    /// # Example
    /// ```
    /// use alphadelta::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(7.0, 2.0), 5.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
