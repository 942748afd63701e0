use once_cell::sync::Lazy;
use regex::Regex;

/// Token kinds for JSON source text.
///
/// `String` and `Number` keep the exact matched substring, verbatim. The
/// keyword variants carry no payload since their spelling is fixed. Tokens
/// have no position metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    /// A quoted string literal, quotes and escapes included.
    String(String),
    /// A number literal, never renormalized.
    Number(String),
    True,
    False,
    Null,
    /// Any other character, consumed one at a time. The parser is what
    /// ultimately rejects these.
    Other(char),
}

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A\s*").unwrap());

// Strings refuse raw control characters (C0, DEL, C1) and only admit the
// standard short escapes plus \u with exactly four hex digits.
static STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\A"(?:[^"\\\x00-\x1F\x7F\x{80}-\x{9F}]|\\["\\/bfnrt]|\\u[0-9a-fA-F]{4})*""#)
        .unwrap()
});

// Permissive about leading zeros: `0012` is a single number token. This is
// a documented lenience relative to strict JSON, kept intentionally.
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A-?[1-9]*[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?").unwrap());

// No word-boundary requirement: `truex` lexes as `true` then `x`.
static KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A(?:true|false|null)").unwrap());

/// Scan `input` into an ordered token sequence.
///
/// Total for any input: unrecognized characters degrade to one-character
/// `Other` tokens rather than failing. Rules apply in priority order —
/// whitespace (discarded), string, number, keyword, single-char fallback.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];

        let ws = WHITESPACE.find(rest).map_or(0, |m| m.end());
        if ws > 0 {
            pos += ws;
            continue;
        }

        if let Some(m) = STRING.find(rest) {
            tokens.push(Token::String(m.as_str().to_string()));
            pos += m.end();
        } else if let Some(m) = NUMBER.find(rest) {
            tokens.push(Token::Number(m.as_str().to_string()));
            pos += m.end();
        } else if let Some(m) = KEYWORD.find(rest) {
            tokens.push(match m.as_str() {
                "true" => Token::True,
                "false" => Token::False,
                _ => Token::Null,
            });
            pos += m.end();
        } else {
            let Some(ch) = rest.chars().next() else { break };
            tokens.push(match ch {
                '{' => Token::LBrace,
                '}' => Token::RBrace,
                '[' => Token::LBracket,
                ']' => Token::RBracket,
                ':' => Token::Colon,
                ',' => Token::Comma,
                other => Token::Other(other),
            });
            pos += ch.len_utf8();
        }
    }

    tokens
}
