//! Render parsed JSON with canonical indentation.
//!
//! Numbers and keywords come out verbatim; strings are decoded and
//! re-encoded with minimal escaping, so the output is independent of the
//! source's spacing and escape spelling.

use std::fmt::Write;
use std::str::Chars;

use crate::error::SyntaxError;
use crate::parser::{Member, Node, parse};

const INDENT: &str = "  ";

/// Format JSON source: parse then render with two-space indentation.
pub fn format_json(source: &str) -> Result<String, SyntaxError> {
    format_json_with(source, INDENT)
}

/// Format JSON source with a caller-supplied indent unit.
pub fn format_json_with(source: &str, indent_unit: &str) -> Result<String, SyntaxError> {
    let node = parse(source)?;
    Ok(render(&node, indent_unit))
}

/// Render an already-parsed value.
#[must_use]
pub fn render(node: &Node, indent_unit: &str) -> String {
    let mut p = Pretty {
        out: String::new(),
        unit: indent_unit,
        indent: 0,
    };
    p.value(node);
    p.out
}

struct Pretty<'a> {
    out: String,
    unit: &'a str,
    indent: usize,
}

impl Pretty<'_> {
    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str(self.unit);
        }
    }

    fn value(&mut self, node: &Node) {
        match node {
            Node::String(text) => {
                let canonical = canonicalize_string(text);
                self.out.push_str(&canonical);
            }
            Node::Number(text) => self.out.push_str(text),
            Node::True => self.out.push_str("true"),
            Node::False => self.out.push_str("false"),
            Node::Null => self.out.push_str("null"),
            Node::Object(members) => self.object(members),
            Node::Array(elements) => self.array(elements),
        }
    }

    fn object(&mut self, members: &[Member]) {
        if members.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str("{\n");
        self.indent += 1;
        for (i, member) in members.iter().enumerate() {
            self.write_indent();
            let key = canonicalize_string(&member.key);
            self.out.push_str(&key);
            self.out.push_str(": ");
            self.value(&member.value);
            if i + 1 < members.len() {
                self.out.push(',');
            }
            self.out.push('\n');
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push('}');
    }

    fn array(&mut self, elements: &[Node]) {
        if elements.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push_str("[\n");
        self.indent += 1;
        for (i, element) in elements.iter().enumerate() {
            self.write_indent();
            self.value(element);
            if i + 1 < elements.len() {
                self.out.push(',');
            }
            self.out.push('\n');
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push(']');
    }
}

// ── string canonicalization ─────────────────────────────────────

/// Decode a verbatim quoted literal and re-encode it minimally. Equivalent
/// escape spellings collapse: `"a"` becomes `"a"`.
fn canonicalize_string(quoted: &str) -> String {
    encode_string(&decode_string(quoted))
}

/// Interpret the escape sequences of a quoted JSON string literal.
///
/// `quoted` includes the surrounding quotes and has already been
/// shape-checked by the lexer. Adjacent `\u` escapes forming a UTF-16
/// surrogate pair combine into one character; a lone surrogate becomes
/// U+FFFD (Rust strings cannot hold one).
fn decode_string(quoted: &str) -> String {
    let inner = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(quoted);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let code = hex4(&mut chars);
                let scalar = if (0xD800..=0xDBFF).contains(&code) {
                    combine_surrogate(code, &mut chars)
                } else if (0xDC00..=0xDFFF).contains(&code) {
                    0xFFFD
                } else {
                    code
                };
                out.push(char::from_u32(scalar).unwrap_or('\u{FFFD}'));
            }
            Some(other) => out.push(other),
            None => break,
        }
    }

    out
}

/// Read exactly four hex digits. The lexer guarantees they are present for
/// well-formed literals; anything else decodes as zero digits.
fn hex4(chars: &mut Chars<'_>) -> u32 {
    let mut value = 0;
    for _ in 0..4 {
        let digit = chars.next().and_then(|c| c.to_digit(16)).unwrap_or(0);
        value = value * 16 + digit;
    }
    value
}

/// Given a high surrogate, consume a following `\uXXXX` low surrogate and
/// combine. Leaves the cursor untouched (and yields U+FFFD) when no low
/// surrogate follows.
fn combine_surrogate(high: u32, chars: &mut Chars<'_>) -> u32 {
    let mut ahead = chars.clone();
    if ahead.next() == Some('\\') && ahead.next() == Some('u') {
        let low = hex4(&mut ahead);
        if (0xDC00..=0xDFFF).contains(&low) {
            *chars = ahead;
            return 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        }
    }
    0xFFFD
}

/// Encode decoded text as a quoted JSON string literal with minimal
/// escaping. Characters the lexer refuses raw inside strings (C0 controls,
/// DEL, the C1 range) use `\uXXXX`, which keeps rendered output
/// re-parseable; everything else is emitted literally.
fn encode_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7F}' || ('\u{80}'..='\u{9F}').contains(&c) => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
