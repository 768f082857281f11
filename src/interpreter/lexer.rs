use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Base-10 ASCII digits only.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"foo bar"`.
    ///
    /// The payload is the raw content between the quotes; no escape
    /// sequences are processed. A string missing its closing quote runs to
    /// the end of input.
    #[regex(r#""[^"]*"?"#, parse_string)]
    Str(String),
    /// Identifier tokens; variable or function names such as `x` or `add`.
    /// Identifiers consist of letters and underscores.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `let`
    #[token("let")]
    Let,
    /// `fn`
    #[token("fn")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Assign,
    /// `!`
    #[token("!")]
    Bang,
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
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
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
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Line feeds are whitespace, but advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// End of input. Never produced by a token rule; the [`Lexer`] wrapper
    /// yields it once the source is exhausted, and keeps yielding it.
    Eof,
    /// An unrecognized byte sequence, carried through as its literal text so
    /// the parser can report it.
    Illegal(String),
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits in 64 bits.
/// - `None`: If the digit run overflows `i64`; the slice then surfaces as an
///   illegal token.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Extracts the content of a string literal from the current token slice.
///
/// Strips the surrounding quotes without interpreting the content. Newlines
/// inside the literal still advance the line counter.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();

    let content = slice.strip_prefix('"').unwrap_or(slice);
    let content = content.strip_suffix('"').unwrap_or(content);
    content.to_string()
}

/// A stateful scanner producing one token per call.
///
/// Wraps the generated [`logos`] lexer behind the on-demand `next_token`
/// contract the parser consumes: every call returns exactly one token paired
/// with its source line, and once the input is exhausted the scanner returns
/// [`Token::Eof`] on every subsequent call without advancing.
///
/// ## Example
/// ```
/// use minnow::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token().0, Token::Let);
/// assert_eq!(lexer.next_token().0, Token::Identifier("five".to_string()));
/// assert_eq!(lexer.next_token().0, Token::Assign);
/// assert_eq!(lexer.next_token().0, Token::Integer(5));
/// assert_eq!(lexer.next_token().0, Token::Semicolon);
/// assert_eq!(lexer.next_token().0, Token::Eof);
/// assert_eq!(lexer.next_token().0, Token::Eof);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over the given source text, starting at line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }), }
    }

    /// Scans and returns the next token together with its source line.
    ///
    /// Whitespace is skipped. Input the token rules cannot match is returned
    /// as [`Token::Illegal`] carrying the offending text, so lexical problems
    /// travel through the token stream instead of aborting the scan.
    pub fn next_token(&mut self) -> (Token, usize) {
        match self.inner.next() {
            Some(Ok(token)) => (token, self.inner.extras.line),
            Some(Err(())) => {
                (Token::Illegal(self.inner.slice().to_string()), self.inner.extras.line)
            },
            None => (Token::Eof, self.inner.extras.line),
        }
    }
}
