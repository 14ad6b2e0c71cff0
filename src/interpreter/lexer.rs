use std::ops::Range;

use logos::Logos;

/// Represents a lexical token inside a single statement fragment.
///
/// Durham is keyword driven: operators, block delimiters and statement
/// prefixes are all plain words. Keywords are matched as whole words, so
/// `durhamite` lexes as an identifier and never as the `durham` operator.
/// Numeral names (`butler`, `castle`, ...) are ordinary identifiers; they are
/// resolved during evaluation so that variables may shadow them.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `tlc`, the print statement.
    #[token("tlc")]
    Tlc,
    /// `mcs`, the return statement.
    #[token("mcs")]
    Mcs,
    /// `number`
    #[token("number")]
    Number,
    /// `text`
    #[token("text")]
    Text,
    /// `function`
    #[token("function")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `for`
    #[token("for")]
    For,
    /// `while`, only meaningful for block nesting.
    #[token("while")]
    While,
    /// `else`
    #[token("else")]
    Else,
    /// `begin`, the opening bracket.
    #[token("begin")]
    Begin,
    /// `end`, the closing bracket.
    #[token("end")]
    End,
    /// `front`, opens a block body.
    #[token("front")]
    Front,
    /// `back`, closes a block body.
    #[token("back")]
    Back,
    /// `is`
    #[token("is")]
    Is,
    /// `and`, separates parameters and arguments.
    #[token("and")]
    And,
    /// `durham`, text concatenation.
    #[token("durham")]
    Durham,
    /// `york`, multiplication.
    #[token("york")]
    York,
    /// `edinburgh`, floor division.
    #[token("edinburgh")]
    Edinburgh,
    /// `newcastle`, subtraction.
    #[token("newcastle")]
    Newcastle,
    /// `lesser`
    #[token("lesser")]
    Lesser,
    /// `greater`
    #[token("greater")]
    Greater,
    /// `equals`
    #[token("equals")]
    Equals,
    /// `,`, joins numeral names into multi-digit numbers.
    #[token(",")]
    Comma,
    /// A double-quoted string. The payload excludes the quotes; there is no
    /// escaping.
    #[regex(r#""[^"]*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Str(String),
    /// Optionally signed decimal literal, such as `42` or `-1`.
    #[regex(r"-?[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable names, function names and numeral names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Whitespace, newlines included.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// Any character the lexer does not recognize, such as a stray `.` inside
    /// a rejoined loop header.
    Unknown,
}

/// A token together with its byte range in the fragment it came from.
pub type Spanned = (Token, Range<usize>);

/// Tokenizes one fragment.
///
/// Lexing never fails: unrecognized input becomes [`Token::Unknown`] so that
/// it can still take part in fallback text.
///
/// # Example
/// ```
/// use durham::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("tlc begin \"hi\" end").into_iter()
///                                                       .map(|(tok, _)| tok)
///                                                       .collect();
///
/// assert_eq!(tokens,
///            vec![Token::Tlc, Token::Begin, Token::Str("hi".into()), Token::End]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Spanned> {
    Token::lexer(source).spanned()
                        .map(|(token, span)| (token.unwrap_or(Token::Unknown), span))
                        .collect()
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal does not fit into an `i64`, which makes
/// logos report the slice as unrecognized.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
