use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{Assignment, DeclarationKind, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        parser::core::parse_program,
        preprocessor::preprocess,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Upper bound on the iterations of a single `for` loop.
pub const MAX_LOOP_ITERATIONS: usize = 10_000;

/// How a statement list finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Every statement ran.
    Continue,
    /// A return statement ran inside a function call.
    Return(Value),
}

/// Stores the state of one interpreter run.
///
/// A session owns the environment and the output buffer. It is consumed by
/// [`Session::run`], so nothing survives from one program to the next.
///
/// ## Usage
///
/// ```
/// use durham::interpreter::evaluator::core::Session;
///
/// let output = Session::new().run("number x is castle. tlc begin x york marys end.")
///                            .unwrap();
///
/// assert_eq!(output, vec!["10".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    /// Variables and functions.
    pub env:                    Environment,
    /// Printed values, in program order.
    pub output:                 Vec<String>,
    pub(in crate::interpreter) call_depth: usize,
}

impl Session {
    /// Creates a session with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preprocesses, parses and executes `source`.
    ///
    /// # Returns
    /// The printed values in order. On the first fatal error the output
    /// collected so far is discarded along with the session.
    pub fn run(mut self, source: &str) -> EvalResult<Vec<String>> {
        let statements = parse_program(preprocess(source));
        debug!(statements = statements.len(), "parsed program");

        self.exec_block(&statements)?;
        Ok(self.output)
    }

    /// Executes statements in order until one returns.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.exec_statement(statement)? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Continue)
    }

    /// Executes a single statement.
    ///
    /// A return statement only takes effect inside a function call; at the
    /// top level it is skipped like any other unrecognized statement. A call
    /// statement runs only when its callee is declared.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        trace!(?statement, "executing");

        match statement {
            Statement::Print { expr, line } => {
                let value = self.eval(expr, *line)?;
                self.output.push(value.to_string());
            },
            Statement::Declaration { kind, name, value, line } => {
                let value = self.eval(value, *line)?;
                match kind {
                    DeclarationKind::Number => {
                        self.env.numbers.insert(name.clone(), value);
                    },
                    DeclarationKind::Text => {
                        self.env.texts.insert(name.clone(), value.to_string());
                    },
                }
            },
            Statement::Assign { assignment, line } => self.assign(assignment, *line)?,
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            line, } => {
                let branch = if self.eval_condition(condition.as_ref(), *line)? {
                    then_branch
                } else {
                    else_branch
                };
                return self.exec_block(branch);
            },
            Statement::For { init,
                             condition,
                             increment,
                             body,
                             line, } => {
                return self.eval_for(init.as_ref(),
                                     condition.as_ref(),
                                     increment.as_ref(),
                                     body,
                                     *line);
            },
            Statement::Function(def) => {
                self.env.functions.insert(def.name.clone(), Rc::clone(def));
            },
            Statement::Return { expr, line } => {
                if self.call_depth > 0 {
                    return Ok(Flow::Return(self.eval(expr, *line)?));
                }
                debug!(line, "return outside of a function, skipping it");
            },
            Statement::Expression { expr, line } => {
                if let Expr::FunctionCall { name, .. } = expr
                   && self.env.functions.contains_key(name)
                {
                    self.eval(expr, *line)?;
                }
            },
        }

        Ok(Flow::Continue)
    }

    /// Evaluates the assignment and stores the result in the numeric table.
    pub fn assign(&mut self, assignment: &Assignment, line: usize) -> EvalResult<()> {
        let value = self.eval(&assignment.value, line)?;
        self.env.numbers.insert(assignment.name.clone(), value);
        Ok(())
    }
}
