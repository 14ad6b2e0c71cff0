use std::cmp::Ordering;

use crate::{
    ast::{Condition, Relation},
    interpreter::evaluator::core::{EvalResult, Session},
};

impl Session {
    /// Evaluates a condition.
    ///
    /// A missing condition (no relational keyword) is false. `equals` is
    /// strict: a number never equals a text. `lesser` and `greater` follow
    /// [`crate::interpreter::value::core::Value::compare`].
    pub fn eval_condition(&mut self, condition: Option<&Condition>, line: usize) -> EvalResult<bool> {
        let Some(condition) = condition else {
            return Ok(false);
        };

        let left = self.eval(&condition.left, line)?;
        let right = self.eval(&condition.right, line)?;

        Ok(match condition.relation {
            Relation::Lesser => left.compare(&right) == Some(Ordering::Less),
            Relation::Greater => left.compare(&right) == Some(Ordering::Greater),
            Relation::Equals => left == right,
        })
    }
}
