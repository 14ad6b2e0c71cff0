use std::rc::Rc;

/// Numeric operators, in the order the evaluator looks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `york`
    Mul,
    /// `edinburgh`, floor division.
    Div,
    /// `newcastle`
    Sub,
}

/// Relational keywords, in the order the condition evaluator looks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `lesser`
    Lesser,
    /// `greater`
    Greater,
    /// `equals`
    Equals,
}

/// An expression tree.
///
/// The shape is decided by the first matching rule, not by operator
/// precedence: a fragment containing `durham` is always a concatenation, even
/// when it also contains `york`. Leaves that depend on runtime state
/// (variables, numerals, integer literals, raw text) stay unresolved as
/// [`Expr::Atom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A quoted literal, or a quoted literal wrapped in `begin ... end`.
    Literal(String),
    /// `a durham b durham c`; every part is evaluated and joined as text.
    Concat(Vec<Self>),
    /// A numeric operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `name begin a and b end`.
    ///
    /// When `name` is not a declared function at evaluation time, the whole
    /// `source` fragment is resolved as an atom instead.
    FunctionCall {
        /// The callee.
        name:      String,
        /// Argument expressions, in order.
        arguments: Vec<Self>,
        /// The original fragment text.
        source:    String,
    },
    /// A leaf resolved at runtime: textual variable, numeric variable,
    /// comma-joined numeral, numeral name, integer literal, or raw text.
    Atom(String),
}

/// `left <relation> right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Left operand.
    pub left:     Expr,
    /// The relation.
    pub relation: Relation,
    /// Right operand.
    pub right:    Expr,
}

/// `name is value`, as used by generic assignments and `for` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// The variable name, taken verbatim from the text before `is`.
    pub name:  String,
    /// The assigned expression.
    pub value: Expr,
}

/// Which table a declaration writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `number <name> is <expr>`
    Number,
    /// `text <name> is <expr>`
    Text,
}

/// A user-defined function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The function's name.
    pub name:   String,
    /// Parameter names, bound positionally.
    pub params: Vec<String>,
    /// The parsed body.
    pub body:   Vec<Statement>,
    /// The source line of the declaration.
    pub line:   usize,
}

/// A parsed statement.
///
/// Block statements own their child statement lists, so the evaluator never
/// re-scans source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `tlc begin <expr> end`
    Print {
        /// The printed expression.
        expr: Expr,
        /// The source line.
        line: usize,
    },
    /// `number <name> is <expr>` or `text <name> is <expr>`.
    Declaration {
        /// Target table.
        kind:  DeclarationKind,
        /// The variable name.
        name:  String,
        /// The initial value.
        value: Expr,
        /// The source line.
        line:  usize,
    },
    /// `<name> is <expr>`; always writes the numeric table.
    Assign {
        /// The assignment.
        assignment: Assignment,
        /// The source line.
        line:       usize,
    },
    /// `if begin <cond> end front ... [back else front ...] back`
    If {
        /// The condition; `None` when no relational keyword was found, which
        /// always evaluates to false.
        condition:   Option<Condition>,
        /// Statements run when the condition holds.
        then_branch: Vec<Self>,
        /// Statements run otherwise; may be empty.
        else_branch: Vec<Self>,
        /// The source line.
        line:        usize,
    },
    /// `for begin <init>. <cond>. <incr> end front ... back`
    For {
        /// Run once before the loop.
        init:      Option<Assignment>,
        /// Checked before every iteration.
        condition: Option<Condition>,
        /// Run after every iteration.
        increment: Option<Assignment>,
        /// The loop body.
        body:      Vec<Self>,
        /// The source line.
        line:      usize,
    },
    /// `function <name> begin <params> end front ... back`
    Function(Rc<FunctionDef>),
    /// `mcs begin <expr> end`
    Return {
        /// The returned expression.
        expr: Expr,
        /// The source line.
        line: usize,
    },
    /// A bare call statement `name begin ... end`, evaluated for its side
    /// effects.
    Expression {
        /// The call expression.
        expr: Expr,
        /// The source line.
        line: usize,
    },
}
