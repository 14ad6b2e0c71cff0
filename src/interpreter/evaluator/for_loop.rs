use crate::{
    ast::{Assignment, Condition, Statement},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Flow, MAX_LOOP_ITERATIONS, Session},
};

impl Session {
    /// Evaluates a `for` loop.
    ///
    /// Runs `init` once, then repeats: check `condition`, run `body`, run
    /// `increment`. A return from inside the body ends the loop and is passed
    /// on to the enclosing function call.
    ///
    /// # Errors
    /// Returns `RuntimeError::LoopLimitExceeded` when the condition still holds
    /// after [`MAX_LOOP_ITERATIONS`] iterations. This aborts the whole run.
    ///
    /// # Example
    /// ```
    /// use durham::interpreter::evaluator::core::Session;
    ///
    /// let source = "for begin i is butler. i lesser collingwood. i is i newcastle -1 end front \
    ///               tlc begin i end. back.";
    ///
    /// assert_eq!(Session::new().run(source).unwrap(), vec!["0", "1", "2"]);
    /// ```
    pub fn eval_for(&mut self,
                    init: Option<&Assignment>,
                    condition: Option<&Condition>,
                    increment: Option<&Assignment>,
                    body: &[Statement],
                    line: usize)
                    -> EvalResult<Flow> {
        if let Some(init) = init {
            self.assign(init, line)?;
        }

        let mut iterations = 0;
        while self.eval_condition(condition, line)? {
            if iterations == MAX_LOOP_ITERATIONS {
                return Err(RuntimeError::LoopLimitExceeded { limit: MAX_LOOP_ITERATIONS,
                                                             line });
            }

            if let Flow::Return(value) = self.exec_block(body)? {
                return Ok(Flow::Return(value));
            }
            if let Some(increment) = increment {
                self.assign(increment, line)?;
            }
            iterations += 1;
        }

        Ok(Flow::Continue)
    }
}
