use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::FunctionDef,
    interpreter::value::{
        core::Value,
        numeral::{compose_numeral, numeral_value},
    },
    util::num::parse_integer,
};

/// The variable and function tables of one run.
///
/// The numeric and textual name spaces are separate and may hold the same
/// name. Generic assignment and `number` declarations write `numbers`;
/// `text` declarations write `texts`. Lookups probe `texts` first.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    /// The numeric slot table. Slots normally hold numbers but keep whatever
    /// value an assignment produced, text included.
    pub numbers:   HashMap<String, Value>,
    /// The textual variable table.
    pub texts:     HashMap<String, String>,
    /// Declared functions. A re-declaration replaces the previous entry.
    pub functions: HashMap<String, Rc<FunctionDef>>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a leaf fragment.
    ///
    /// Probes, in order: the textual table, the numeric table, comma-joined
    /// numerals, single numeral names and integer literals. Anything else is
    /// returned as raw text; resolution never fails.
    ///
    /// # Example
    /// ```
    /// use durham::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.numbers.insert("castle".into(), Value::Number(42));
    ///
    /// assert_eq!(env.resolve("castle"), Value::Number(42));
    /// assert_eq!(env.resolve("trevs"), Value::Number(7));
    /// assert_eq!(env.resolve("chads, butler"), Value::Number(10));
    /// assert_eq!(env.resolve("-3"), Value::Number(-3));
    /// assert_eq!(env.resolve("oxford"), Value::Text("oxford".into()));
    /// ```
    #[must_use]
    pub fn resolve(&self, fragment: &str) -> Value {
        if let Some(text) = self.texts.get(fragment) {
            return Value::Text(text.clone());
        }
        if let Some(value) = self.numbers.get(fragment) {
            return value.clone();
        }
        if fragment.contains(',')
           && let Some(number) = compose_numeral(fragment)
        {
            return Value::Number(number);
        }

        numeral_value(fragment).or_else(|| parse_integer(fragment))
                               .map_or_else(|| Value::Text(fragment.to_string()), Value::Number)
    }
}
