use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{binary::eval_binary, core::{EvalResult, Session}},
        value::core::Value,
    },
};

impl Session {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// Literals and concatenations produce text, numeric operators produce
    /// numbers, and atoms are resolved against the environment. A call whose
    /// callee is not declared is resolved as an atom over its whole source
    /// text, which normally yields that text unchanged.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `line`: Line number for error reporting.
    pub fn eval(&mut self, expr: &Expr, line: usize) -> EvalResult<Value> {
        match expr {
            Expr::Literal(text) => Ok(Value::Text(text.clone())),
            Expr::Concat(parts) => {
                let mut joined = String::new();
                for part in parts {
                    joined.push_str(&self.eval(part, line)?.to_string());
                }
                Ok(Value::Text(joined))
            },
            Expr::BinaryOp { op, left, right } => {
                let left = self.eval(left, line)?;
                let right = self.eval(right, line)?;
                eval_binary(*op, &left, &right, line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 source, } => {
                if !self.env.functions.contains_key(name) {
                    return Ok(self.env.resolve(source));
                }

                let arg_vals = arguments.iter()
                                        .map(|argument| self.eval(argument, line))
                                        .collect::<EvalResult<Vec<_>>>()?;
                self.call_function(name, &arg_vals, line)
            },
            Expr::Atom(fragment) => Ok(self.env.resolve(fragment)),
        }
    }
}
