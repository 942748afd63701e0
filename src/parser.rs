use crate::error::SyntaxError;
use crate::lexer::{Token, tokenize};

/// Maximum object/array nesting depth. Deeper input is rejected with a
/// syntax error instead of risking stack exhaustion; rendering recurses to
/// the same depth as parsing, so this bounds the formatter too.
const MAX_DEPTH: usize = 512;

/// A parsed JSON value.
///
/// Scalar variants keep the matched source text verbatim; nothing is
/// decoded or renormalized at parse time. `-0.5e-5` stays `-0.5e-5`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A quoted string literal, quotes and escapes included.
    String(String),
    /// A number literal, verbatim.
    Number(String),
    True,
    False,
    Null,
    /// Members in source order. Duplicate keys stay distinct members —
    /// this is a syntax tree, not a decoded map.
    Object(Vec<Member>),
    Array(Vec<Node>),
}

/// One `"key": value` member of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// The key as a verbatim quoted string literal.
    pub key: String,
    pub value: Node,
}

/// Parse JSON source into a single value.
///
/// Trailing tokens after a complete value are ignored: parsing stops as
/// soon as one value has been reduced. `parse("1 2")` succeeds with `1`.
pub fn parse(input: &str) -> Result<Node, SyntaxError> {
    let mut parser = Parser::new(tokenize(input));
    parser.parse()
}

/// Recursive-descent parser with one-token lookahead.
///
/// Each successful sub-parse advances the cursor past its consumed tokens;
/// optional productions (`members?`, `elements?`) peek for the closing
/// delimiter before committing, so they never disturb the cursor.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0, depth: 0 }
    }

    pub fn parse(&mut self) -> Result<Node, SyntaxError> {
        self.parse_value()
    }

    // value := string | number | object | array | true | false | null
    //
    // Each alternative is gated on an unambiguous leading token, so a
    // single match dispatches without backtracking.
    fn parse_value(&mut self) -> Result<Node, SyntaxError> {
        match self.current() {
            Some(Token::String(text)) => {
                let text = text.clone();
                self.advance();
                Ok(Node::String(text))
            }
            Some(Token::Number(text)) => {
                let text = text.clone();
                self.advance();
                Ok(Node::Number(text))
            }
            Some(Token::LBrace) => self.parse_object(),
            Some(Token::LBracket) => self.parse_array(),
            Some(Token::True) => {
                self.advance();
                Ok(Node::True)
            }
            Some(Token::False) => {
                self.advance();
                Ok(Node::False)
            }
            Some(Token::Null) => {
                self.advance();
                Ok(Node::Null)
            }
            _ => Err(SyntaxError::new("expected value")),
        }
    }

    // object := '{' members? '}'
    fn parse_object(&mut self) -> Result<Node, SyntaxError> {
        self.advance(); // consume '{'
        self.enter()?;

        let mut members = Vec::new();
        if !self.check(&Token::RBrace) {
            members.push(self.parse_pair()?);
            while self.check(&Token::Comma) {
                self.advance();
                members.push(self.parse_pair()?);
            }
        }

        if !self.check(&Token::RBrace) {
            return Err(SyntaxError::new("expected '}'"));
        }
        self.advance();
        self.leave();
        Ok(Node::Object(members))
    }

    // pair := string ':' value
    fn parse_pair(&mut self) -> Result<Member, SyntaxError> {
        let key = match self.current() {
            Some(Token::String(text)) => text.clone(),
            _ => return Err(SyntaxError::new("expected pair")),
        };
        self.advance();

        if !self.check(&Token::Colon) {
            return Err(SyntaxError::new("expected ':' after object key"));
        }
        self.advance();

        let value = self.parse_value()?;
        Ok(Member { key, value })
    }

    // array := '[' elements? ']'
    fn parse_array(&mut self) -> Result<Node, SyntaxError> {
        self.advance(); // consume '['
        self.enter()?;

        let mut elements = Vec::new();
        if !self.check(&Token::RBracket) {
            elements.push(self.parse_value()?);
            while self.check(&Token::Comma) {
                self.advance();
                elements.push(self.parse_value()?);
            }
        }

        if !self.check(&Token::RBracket) {
            return Err(SyntaxError::new("expected ']'"));
        }
        self.advance();
        self.leave();
        Ok(Node::Array(elements))
    }

    // --- helpers ---

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn check(&self, token: &Token) -> bool {
        self.current()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
    }

    fn enter(&mut self) -> Result<(), SyntaxError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(SyntaxError::new("maximum nesting depth exceeded"));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
