use std::rc::Rc;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// The language is expression-only: there are no statements, and every
/// construct — bindings and loops included — produces a value. Nodes are
/// created once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a variable by name.
    Var {
        /// Name of the variable.
        name: String,
    },
    /// A single-parameter function literal, `\name => body`.
    ///
    /// The body sits behind an [`Rc`] because every closure created from this
    /// lambda shares it.
    Lambda {
        /// The parameter name.
        binder: String,
        /// The body expression evaluated when the function is applied.
        body:   Rc<Expr>,
    },
    /// Function application by juxtaposition, `func arg`.
    Application {
        /// The expression in function position.
        func: Box<Expr>,
        /// The single argument.
        arg:  Box<Expr>,
    },
    /// An integer literal.
    Number {
        /// The literal value.
        n: i64,
    },
    /// A boolean literal, `true` or `false`.
    Boolean {
        /// The literal value.
        b: bool,
    },
    /// A binary operation (arithmetic, comparison, or equality).
    Binary {
        /// The operator.
        op: BinaryOperator,
        /// Left operand.
        x:  Box<Expr>,
        /// Right operand.
        y:  Box<Expr>,
    },
    /// Conditional expression, `if condition then … else …`.
    If {
        /// The condition, which must evaluate to a boolean.
        condition:   Box<Expr>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Expr>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Expr>,
    },
    /// A scoped binding, `let name = value in body`.
    Let {
        /// The bound name.
        binder: String,
        /// The bound expression.
        value:  Box<Expr>,
        /// The expression in which the binding is visible.
        body:   Box<Expr>,
    },
    /// The accumulator loop, `loop count name { body }`.
    ///
    /// `accumulator` is rebound to the previous body result before each
    /// repetition; the exact iteration contract lives in the evaluator.
    Loop {
        /// The requested repetition count.
        count:       i64,
        /// The name rebound to the running result.
        accumulator: String,
        /// The body evaluated on every repetition.
        body:        Box<Expr>,
    },
    /// A unary operation, `! operand`.
    Unary {
        /// The unary operator to apply.
        op: UnaryOperator,
        /// The operand expression.
        x:  Box<Expr>,
    },
    /// A sequential binding, `: name = value ; rest`.
    ///
    /// Surface sugar for a binding chain without the `let … in` framing; it
    /// evaluates exactly like [`Expr::Let`].
    Binding {
        /// The bound name.
        binder: String,
        /// The bound expression.
        value:  Box<Expr>,
        /// Everything after the `;` — another binding, or the final
        /// expression of the chain.
        rest:   Box<Expr>,
    },
}

/// Represents a binary operator.
///
/// Binary operators cover integer arithmetic, the two strict orderings, and
/// value equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Equal to (`==`)
    Equals,
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Multiply,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (e.g. `! x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equals => "==",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Greater => ">",
            Self::Less => "<",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
        }
    }
}
