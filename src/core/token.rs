// src/core/token.rs
use serde::Serialize;

/// Kind tag carried by every token and queue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Error,
    Operator,
    Text,
    Symbol,
    Number,
    Queue,
}

impl TokenKind {
    /// One-character tag used when rendering a queue.
    pub fn chr(self) -> char {
        match self {
            TokenKind::Error => 'E',
            TokenKind::Operator => 'X',
            TokenKind::Text => 'T',
            TokenKind::Symbol => 'S',
            TokenKind::Number => 'N',
            TokenKind::Queue => 'Q',
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Error => "error",
            TokenKind::Operator => "operator",
            TokenKind::Text => "text",
            TokenKind::Symbol => "symbol",
            TokenKind::Number => "number",
            TokenKind::Queue => "queue",
        };
        write!(f, "{}", name)
    }
}

/// A classified run of characters. Text keeps its delimiters exactly as scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    /// The empty ERROR token substituted for an unbound symbol.
    pub fn error() -> Self {
        Self::new(TokenKind::Error, "")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind.chr(), self.text)
    }
}

/// One queue entry: either a scanned token or a whole quoted queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Token),
    Queue(Vec<Value>),
}

impl Value {
    pub fn kind(&self) -> TokenKind {
        match self {
            Value::Scalar(token) => token.kind,
            Value::Queue(_) => TokenKind::Queue,
        }
    }

    /// Symbol name, if this entry is a SYMBOL token.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Scalar(Token { kind: TokenKind::Symbol, text }) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<Token> for Value {
    fn from(token: Token) -> Self {
        Value::Scalar(token)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Scalar(token) => write!(f, "{}", token),
            Value::Queue(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
