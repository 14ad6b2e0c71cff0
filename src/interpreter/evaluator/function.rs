use crate::interpreter::{
    evaluator::core::{EvalResult, Flow, Session},
    value::core::Value,
};

impl Session {
    /// Calls a user-defined function.
    ///
    /// Unknown names yield `0`. Parameters are bound positionally into the
    /// numeric table; a parameter without an argument is bound to `0`. The
    /// body runs until it finishes or a return statement runs; the returned
    /// value is the result, and a body without a return yields `0`.
    ///
    /// The numeric table is restored to its exact pre-call contents before
    /// returning, so neither parameters nor numeric assignments inside the
    /// body are visible to the caller. The textual table is not restored:
    /// text written by the body stays.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    /// - `line`: Line number of the call.
    ///
    /// # Example
    /// ```
    /// use durham::interpreter::{evaluator::core::Session, value::core::Value};
    ///
    /// let mut session = Session::new();
    ///
    /// assert_eq!(session.call_function("missing", &[], 1).unwrap(), Value::Number(0));
    /// ```
    #[tracing::instrument(level = "debug", skip(self, args))]
    pub fn call_function(&mut self, name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
        let Some(def) = self.env.functions.get(name).cloned() else {
            return Ok(Value::Number(0));
        };

        let saved = self.env.numbers.clone();
        for (index, param) in def.params.iter().enumerate() {
            let arg = args.get(index).cloned().unwrap_or(Value::Number(0));
            self.env.numbers.insert(param.clone(), arg);
        }

        self.call_depth += 1;
        let flow = self.exec_block(&def.body);
        self.call_depth -= 1;
        self.env.numbers = saved;

        match flow? {
            Flow::Return(value) => Ok(value),
            Flow::Continue => Ok(Value::Number(0)),
        }
    }
}
