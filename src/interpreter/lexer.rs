use std::{fmt, ops::Range};

use logos::Logos;

use crate::interpreter::value::types::DeclaredType;

/// Represents a lexical token in the (comment-free) source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`, kept as written.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// Plain string literals, such as `"hello"`. Holds the unquoted text.
    #[regex(r#""[^"\n]*""#, unquote, allow_greedy = true)]
    Str(String),
    /// Interpolated string literals, such as `f"x is $[x]"`. Holds the
    /// unquoted text.
    #[regex(r#"f"[^"\n]*""#, |lex| {
        let slice = lex.slice();
        slice[2..slice.len() - 1].to_string()
    }, allow_greedy = true)]
    FStr(String),
    /// Type names used in declarations.
    #[token("string", |_| DeclaredType::String)]
    #[token("numeric", |_| DeclaredType::Numeric)]
    #[token("floating", |_| DeclaredType::Floating)]
    #[token("boolean", |_| DeclaredType::Boolean)]
    Type(DeclaredType),
    /// Boolean literal tokens, `TRUE` or `FALSE`.
    #[token("TRUE", |_| true)]
    #[token("FALSE", |_| false)]
    Bool(bool),
    /// `NULL`
    #[token("NULL")]
    Null,
    /// `new`
    #[token("new")]
    New,
    /// `variable`
    #[token("variable")]
    Variable,
    /// `rename`
    #[token("rename")]
    Rename,
    /// `import`
    #[token("import")]
    Import,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `to`
    #[token("to")]
    To,
    /// `resume`
    #[token("resume")]
    Resume,
    /// `perform`
    #[token("perform")]
    Perform,
    /// `endif`
    #[token("endif")]
    Endif,
    /// `ignore`
    #[token("ignore")]
    Ignore,
    /// Identifier tokens; variable or function names such as `x` or `Print`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`, an alias of `^`.
    #[token("**")]
    StarStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,

    /// Line breaks; only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Text that is not part of the language, such as `'` or `&`, or an
    /// unterminated string literal. Never produced by the logos lexer itself;
    /// [`tokenize`] turns lexer errors into it.
    Unknown(String),
}

impl Token {
    /// Returns `true` for the operators accepted in arithmetic expressions.
    #[must_use]
    pub const fn is_arithmetic_operator(&self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::Star
                 | Self::StarStar
                 | Self::Slash
                 | Self::Percent
                 | Self::Caret)
    }

    /// Returns the text of a token that can name a variable.
    ///
    /// Besides identifiers, every keyword and type name is a valid variable
    /// name, so `new variable to numeric = 1;` declares `to`.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        match self {
            Self::Identifier(name) => Some(name.clone()),
            Self::Type(_)
            | Self::New
            | Self::Variable
            | Self::Rename
            | Self::Import
            | Self::If
            | Self::Then
            | Self::Else
            | Self::To
            | Self::Resume
            | Self::Perform
            | Self::Endif
            | Self::Ignore => Some(self.to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    /// Writes the token back as it appears in source.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) | Self::Unknown(text) => write!(f, "{text}"),
            Self::Str(text) => write!(f, "\"{text}\""),
            Self::FStr(text) => write!(f, "f\"{text}\""),
            Self::Type(ty) => write!(f, "{ty}"),
            Self::Bool(true) => write!(f, "TRUE"),
            Self::Bool(false) => write!(f, "FALSE"),
            Self::Null => write!(f, "NULL"),
            Self::New => write!(f, "new"),
            Self::Variable => write!(f, "variable"),
            Self::Rename => write!(f, "rename"),
            Self::Import => write!(f, "import"),
            Self::If => write!(f, "if"),
            Self::Then => write!(f, "then"),
            Self::Else => write!(f, "else"),
            Self::To => write!(f, "to"),
            Self::Resume => write!(f, "resume"),
            Self::Perform => write!(f, "perform"),
            Self::Endif => write!(f, "endif"),
            Self::Ignore => write!(f, "ignore"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::StarStar => write!(f, "**"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Equals => write!(f, "="),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Semicolon => write!(f, ";"),
            Self::Colon => write!(f, ":"),
            Self::Dot => write!(f, "."),
            Self::Comma => write!(f, ","),
            Self::NewLine => writeln!(f),
            Self::Ignored => write!(f, " "),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The token itself.
    pub token: Token,
    /// 1-based source line.
    pub line:  usize,
    /// Byte range of the token in the source.
    pub span:  Range<usize>,
}

/// Strips the surrounding quotes from a string literal slice.
fn unquote(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Tokenizes comment-free source into lexemes.
///
/// Character sequences that are not part of the language become
/// `Token::Unknown` lexemes instead of failing, so only the statement they
/// appear in is rejected later on.
///
/// # Example
/// ```
/// use iorn::interpreter::lexer::{Token, tokenize};
///
/// let lexemes = tokenize("new variable x numeric = 5;\nPrint(\"hi\");");
/// assert_eq!(lexemes[0].token, Token::New);
/// assert_eq!(lexemes[5].token, Token::Number("5".to_string()));
/// assert_eq!(lexemes[7].line, 2);
///
/// let lexemes = tokenize("x = 'a';");
/// assert_eq!(lexemes[2].token, Token::Unknown("'".to_string()));
/// assert_eq!(lexemes[3].token, Token::Identifier("a".to_string()));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let token = token.unwrap_or_else(|()| Token::Unknown(lexer.slice().to_string()));
        lexemes.push(Lexeme { token,
                              line: lexer.extras.line,
                              span: lexer.span() });
    }

    lexemes
}

/// Groups lexemes by source line, in order. Empty lines produce no group.
#[must_use]
pub fn split_lines(lexemes: &[Lexeme]) -> Vec<&[Lexeme]> {
    lexemes.chunk_by(|a, b| a.line == b.line).collect()
}

/// Rebuilds source text from lexemes.
///
/// Adjacent lexemes are joined directly; lexemes that were separated in the
/// source are joined with a single space.
#[must_use]
pub fn source_text(lexemes: &[Lexeme]) -> String {
    let mut text = String::new();
    let mut previous_end = None;
    for lexeme in lexemes {
        if previous_end.is_some_and(|end| end < lexeme.span.start) {
            text.push(' ');
        }
        text.push_str(&lexeme.token.to_string());
        previous_end = Some(lexeme.span.end);
    }
    text
}

/// Rebuilds source text from lexemes with all whitespace removed.
#[must_use]
pub fn compact_text(lexemes: &[Lexeme]) -> String {
    lexemes.iter().map(|lexeme| lexeme.token.to_string()).collect()
}
