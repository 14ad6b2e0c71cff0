use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{NOT_A_NUMBER, Value},
    },
    util::num::floor_div,
};

/// Applies a numeric operator.
///
/// Both operands are coerced to integers first, so text such as the result of
/// a concatenation takes part as long as it reads as an integer. If either
/// operand is other text the result is the text [`NOT_A_NUMBER`], which stays
/// non-numeric in later arithmetic.
///
/// # Errors
/// - `DivisionByZero` for `edinburgh` with a zero right operand.
/// - `Overflow` if the result does not fit into an `i64`.
///
/// # Example
/// ```
/// use durham::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
/// };
///
/// let seven = Value::Number(-7);
/// let two = Value::from("2");
///
/// assert_eq!(eval_binary(BinaryOperator::Div, &seven, &two, 1).unwrap(), Value::Number(-4));
/// assert!(eval_binary(BinaryOperator::Div, &seven, &Value::Number(0), 1).is_err());
/// assert_eq!(eval_binary(BinaryOperator::Sub, &Value::from("foo"), &two, 1).unwrap(),
///            Value::from("NaN"));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let (Some(lhs), Some(rhs)) = (left.as_number(), right.as_number()) else {
        return Ok(Value::from(NOT_A_NUMBER));
    };

    let result = match op {
        BinaryOperator::Mul => lhs.checked_mul(rhs),
        BinaryOperator::Sub => lhs.checked_sub(rhs),
        BinaryOperator::Div => {
            if rhs == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            floor_div(lhs, rhs)
        },
    };

    result.map(Value::Number)
          .ok_or(RuntimeError::Overflow { line })
}
