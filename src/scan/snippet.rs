// Mon Oct 19 2026 - Alex

pub const DEFAULT_SNIPPET_LINES: usize = 8;

pub const TRUNCATION_MARKER: &str = " ...";

/// Two-character stand-in for a line break inside a report line.
pub const ESCAPED_NEWLINE: &str = "\\n";

/// Makes every control character visible: CR, LF and TAB become `\r`, `\n`
/// and `\t`, anything else `\u{..}`.
pub fn escape_control(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str(ESCAPED_NEWLINE),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&c.escape_unicode().to_string()),
            c => out.push(c),
        }
    }
    out
}

/// First `max_lines` lines of `text` on a single line.
pub fn first_lines(text: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut snippet = lines
        .iter()
        .take(max_lines)
        .map(|line| escape_control(line))
        .collect::<Vec<_>>()
        .join(ESCAPED_NEWLINE);

    if lines.len() > max_lines {
        snippet.push_str(TRUNCATION_MARKER);
    }
    snippet
}
