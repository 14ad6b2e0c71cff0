use crate::{
    ast::{BinaryOperator, Condition, Expr, Relation},
    interpreter::{lexer::Token, parser::utils::TokenSlice},
};

/// Numeric operators in rule order. The first one present in a fragment
/// decides its shape.
const NUMERIC_OPERATORS: [(Token, BinaryOperator); 3] = [(Token::York, BinaryOperator::Mul),
                                                         (Token::Edinburgh, BinaryOperator::Div),
                                                         (Token::Newcastle, BinaryOperator::Sub)];

/// Relational keywords in the order they are looked for.
const RELATIONS: [(Token, Relation); 3] = [(Token::Lesser, Relation::Lesser),
                                           (Token::Greater, Relation::Greater),
                                           (Token::Equals, Relation::Equals)];

/// Parses an expression fragment.
///
/// The first matching rule wins:
/// 1. a single quoted string is a literal,
/// 2. `begin "..." end` is a literal,
/// 3. any `durham` makes a concatenation of all parts,
/// 4. `york`, then `edinburgh`, then `newcastle` split the fragment at their
///    last occurrence, so chains associate to the left,
/// 5. `name begin a and b end` is a call,
/// 6. anything else is an atom resolved at runtime.
///
/// There is no operator precedence beyond this order: `a durham b york c` is
/// the concatenation of `a` and `b york c`.
///
/// # Example
/// ```
/// use durham::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::{expression::parse_expression, utils::TokenSlice}},
/// };
///
/// let source = "snow newcastle marys newcastle chads";
/// let tokens = tokenize(source);
///
/// let expected =
///     Expr::BinaryOp { op:    BinaryOperator::Sub,
///                      left:  Box::new(Expr::BinaryOp { op:    BinaryOperator::Sub,
///                                                       left:  Box::new(Expr::Atom("snow".into())),
///                                                       right: Box::new(Expr::Atom("marys".into())), }),
///                      right: Box::new(Expr::Atom("chads".into())), };
///
/// assert_eq!(parse_expression(TokenSlice::new(source, &tokens)), expected);
/// ```
#[must_use]
pub fn parse_expression(slice: TokenSlice<'_>) -> Expr {
    match slice.tokens() {
        [(Token::Str(text), _)] | [(Token::Begin, _), (Token::Str(text), _), (Token::End, _)] => {
            return Expr::Literal(text.clone());
        },
        _ => {},
    }

    if slice.find(&Token::Durham).is_some() {
        let parts = slice.split_on(&Token::Durham)
                         .into_iter()
                         .map(parse_expression)
                         .collect();
        return Expr::Concat(parts);
    }

    for (token, op) in &NUMERIC_OPERATORS {
        if let Some(index) = slice.rfind(token) {
            return Expr::BinaryOp { op:    *op,
                                    left:  Box::new(parse_expression(slice.slice(0..index))),
                                    right: Box::new(parse_expression(slice.after(index))), };
        }
    }

    parse_call(slice).unwrap_or_else(|| Expr::Atom(slice.text().to_string()))
}

/// Parses `name begin a and b end`.
///
/// Arguments are split on `and` outside of nested `begin ... end` pairs, so a
/// call may appear as an argument. `name begin end` is a call without
/// arguments.
fn parse_call(slice: TokenSlice<'_>) -> Option<Expr> {
    let Some(Token::Identifier(name)) = slice.get(0) else {
        return None;
    };
    if slice.len() < 3 || !slice.is(1, &Token::Begin) || !slice.is(slice.len() - 1, &Token::End) {
        return None;
    }

    let inner = slice.slice(2..slice.len() - 1);
    let arguments = if inner.is_empty() {
        Vec::new()
    } else {
        inner.split_top_level(&Token::And)
             .into_iter()
             .map(parse_expression)
             .collect()
    };

    Some(Expr::FunctionCall { name: name.clone(),
                              arguments,
                              source: slice.text().to_string() })
}

/// Parses a relational fragment.
///
/// `lesser` is looked for first, then `greater`, then `equals`; the fragment
/// is split at the first occurrence of the first keyword found. Returns `None`
/// when no relational keyword is present.
///
/// # Example
/// ```
/// use durham::{
///     ast::Relation,
///     interpreter::{lexer::tokenize, parser::{expression::parse_condition, utils::TokenSlice}},
/// };
///
/// let source = "x equals y greater z";
/// let tokens = tokenize(source);
/// let condition = parse_condition(TokenSlice::new(source, &tokens)).unwrap();
///
/// assert_eq!(condition.relation, Relation::Greater);
///
/// let source = "x is y";
/// let tokens = tokenize(source);
/// assert!(parse_condition(TokenSlice::new(source, &tokens)).is_none());
/// ```
#[must_use]
pub fn parse_condition(slice: TokenSlice<'_>) -> Option<Condition> {
    RELATIONS.iter().find_map(|(token, relation)| {
                        slice.find(token).map(|index| Condition { left:     parse_expression(slice.slice(0..index)),
                                                                  relation: *relation,
                                                                  right:    parse_expression(slice.after(index)), })
                    })
}
