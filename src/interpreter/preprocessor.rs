/// A single period-delimited statement fragment.
///
/// Fragments are the unit the parser dispatches on. The text is trimmed and
/// never empty; `line` is the 1-based source line on which the fragment
/// starts and is only used for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The trimmed statement text, without its terminating period.
    pub text: String,
    /// Source line of the first non-whitespace character.
    pub line: usize,
}

impl Fragment {
    /// Creates a fragment from already trimmed text.
    #[must_use]
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self { text: text.into(),
               line }
    }
}

/// Returns `true` if the line is a comment.
///
/// A comment is a line whose trimmed content is exactly one double-quoted
/// string, such as `"this is a comment"`. A quoted string that shares its line
/// with anything else is not a comment.
///
/// # Example
/// ```
/// use durham::interpreter::preprocessor::is_comment_line;
///
/// assert!(is_comment_line("   \"a comment. with a period\"  "));
/// assert!(!is_comment_line("tlc begin \"not a comment\" end."));
/// assert!(!is_comment_line("\"two\" \"strings\""));
/// ```
#[must_use]
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();

    trimmed.len() >= 2
    && trimmed.starts_with('"')
    && trimmed.ends_with('"')
    && !trimmed[1..trimmed.len() - 1].contains('"')
}

/// Splits source text into statement fragments.
///
/// Comment lines are removed first. The remaining lines are rejoined and split
/// on every period, including periods inside string literals. Fragments are
/// trimmed and empty ones are discarded.
///
/// # Example
/// ```
/// use durham::interpreter::preprocessor::preprocess;
///
/// let fragments = preprocess("\"greeting\"\ntlc begin \"hi\" end.\n\nnumber x is castle.");
/// let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
///
/// assert_eq!(texts, vec!["tlc begin \"hi\" end", "number x is castle"]);
/// assert_eq!(fragments[1].line, 4);
/// ```
#[must_use]
pub fn preprocess(source: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut start_line = 1;
    let mut started = false;

    let lines = source.lines()
                      .enumerate()
                      .filter(|(_, line)| !is_comment_line(line));

    for (index, line) in lines {
        for ch in line.chars() {
            if ch == '.' {
                flush(&mut fragments, &mut current, start_line);
                started = false;
                continue;
            }
            if !started && !ch.is_whitespace() {
                start_line = index + 1;
                started = true;
            }
            current.push(ch);
        }
        current.push('\n');
    }
    flush(&mut fragments, &mut current, start_line);

    fragments
}

/// Pushes the accumulated text as a fragment if it is not blank.
fn flush(fragments: &mut Vec<Fragment>, current: &mut String, line: usize) {
    let text = current.trim();
    if !text.is_empty() {
        fragments.push(Fragment::new(text, line));
    }
    current.clear();
}
