use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens, such as `"hello"`. The quotes are not kept.
    #[token("\"", lex_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `print`
    #[token("print")]
    Print,
    /// `input`
    #[token("input")]
    Input,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `while`
    #[token("while")]
    While,
    /// `def`
    #[token("def")]
    Def,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[token("//", skip_line_comment)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Never produced by the lexer itself; [`tokenize`] appends
    /// it so the parser always has a final token to report.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:          usize,
    /// Line breaks inside the token just lexed. They are added to `line` only
    /// after the token is recorded, so the token keeps the line it starts on.
    pub pending_lines: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number '{n}'"),
            Self::Str(s) => write!(f, "string \"{s}\""),
            Self::Bool(b) => write!(f, "'{b}'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Eof => write!(f, "end of input"),
            other => write!(f, "'{}'", other.symbol()),
        }
    }
}

impl Token {
    /// Returns the source spelling of keyword, operator and punctuation
    /// tokens. Tokens carrying a payload have no fixed spelling.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Input => "input",
            Self::If => "if",
            Self::Else => "else",
            Self::Elif => "elif",
            Self::While => "while",
            Self::Def => "def",
            Self::Return => "return",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::AndAnd => "&&",
            Self::PipePipe => "||",
            Self::Bang => "!",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::NewLine => "\\n",
            Self::Number(_)
            | Self::Str(_)
            | Self::Bool(_)
            | Self::Identifier(_)
            | Self::Comment
            | Self::Ignored
            | Self::Eof => "",
        }
    }
}

/// Splits source text into `(token, line)` pairs.
///
/// Lines are counted from 1. The returned sequence always ends with
/// [`Token::Eof`] carrying the last line of the source.
///
/// # Errors
/// Returns a `ParseError` for characters that start no token and for string
/// literals that are never closed.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1;\nprint x").unwrap();
///
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), 1));
/// assert_eq!(tokens[4], (Token::Print, 2));
/// assert_eq!(tokens.last(), Some(&(Token::Eof, 2)));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    tokenize_at(source, 1)
}

/// Splits source text into `(token, line)` pairs, counting lines from
/// `first_line`.
///
/// Used when the source is a fragment of a larger text, such as a single line
/// evaluated in line mode.
///
/// # Errors
/// Same as [`tokenize`].
pub fn tokenize_at(source: &str, first_line: usize) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source,
                                             LexerExtras { line:          first_line,
                                                           pending_lines: 0, });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
            lexer.extras.line += std::mem::take(&mut lexer.extras.pending_lines);
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;
            return Err(match slice {
                "\"" => ParseError::UnterminatedString { line },
                _ => ParseError::InvalidCharacter { text: slice.to_string(),
                                                    line },
            });
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Consumes a string literal after its opening quote.
///
/// Everything up to the next `"` becomes the literal; there are no escape
/// sequences. Newlines inside the literal advance the line counter once the
/// token has been recorded.
/// Returns `None` when the closing quote is missing.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let rest = lex.remainder();
    let end = rest.find('"')?;
    let content = rest[..end].to_string();

    lex.extras.pending_lines = content.matches('\n').count();
    lex.bump(end + 1);
    Some(content)
}

/// Skips a `//` comment up to, not including, the end of the line.
fn skip_line_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let rest = lex.remainder();
    let len = rest.find('\n').unwrap_or(rest.len());

    lex.bump(len);
    logos::Skip
}
