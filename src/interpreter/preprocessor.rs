use logos::{Lexer, Logos};

/// Pieces of raw source as seen by the comment stripper.
///
/// Comment fragments are dropped, everything else is copied through.
/// Ordinary string literals are recognised so that comment markers inside
/// them survive.
#[derive(Logos, Debug, PartialEq, Eq)]
enum Fragment {
    /// `@rem ...` to the end of the line, or a bracketed `@remLine(...)`.
    #[token("@rem", remark)]
    Remark,
    /// `## ...` to the end of the line.
    #[regex(r"##[^\r\n]*", allow_greedy = true)]
    LineComment,
    /// `"""` up to the next `"""`, possibly across lines.
    #[token("\"\"\"", block_comment)]
    BlockComment,
    /// A single-line string literal.
    #[regex(r#""[^"\n]*""#, allow_greedy = true)]
    Quoted,
    /// Anything that cannot start a comment.
    #[regex(r#"[^@#"]+"#, allow_greedy = true)]
    Text,
    /// A lone `@`, `#` or `"`.
    #[regex(r#"[@#"]"#)]
    Stray,
}

/// Consumes the rest of a `@rem` comment.
///
/// `@remLine(` followed by a balanced close consumes the bracketed span, which
/// may cross lines. Any other `@rem` runs to the end of its line.
fn remark(lex: &mut Lexer<Fragment>) {
    let rest = lex.remainder();
    if let Some(payload) = rest.strip_prefix("Line(")
       && let Some(close) = closing_paren(payload)
    {
        lex.bump("Line(".len() + close + 1);
        return;
    }
    let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
    lex.bump(end);
}

/// Consumes a block comment up to and including the closing `"""`.
///
/// Fails when there is no closing marker, which leaves the opener as text.
fn block_comment(lex: &mut Lexer<Fragment>) -> bool {
    match lex.remainder().find("\"\"\"") {
        Some(end) => {
            lex.bump(end + 3);
            true
        },
        None => false,
    }
}

/// Finds the byte offset of the `)` closing an already opened `(`.
fn closing_paren(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            },
            _ => {},
        }
    }
    None
}

/// Removes every comment form from raw source.
///
/// Recognised forms are `@rem` and `##` line comments, `"""` block comments
/// and bracketed `@remLine(...)` spans. Line breaks inside removed spans are
/// kept, so every surviving statement stays on its original line, and the
/// transform is idempotent.
///
/// # Example
/// ```
/// use iorn::interpreter::preprocessor::strip_comments;
///
/// let source = "a; @rem note\n\"\"\"block\ncomment\"\"\"b; ## more\n@remLine(x (y))c;";
/// let clean = strip_comments(source);
/// assert_eq!(clean, "a; \n\nb; \nc;");
/// assert_eq!(strip_comments(&clean), clean);
///
/// // Markers inside string literals are text.
/// assert_eq!(strip_comments("Print(\"## not a comment\");"), "Print(\"## not a comment\");");
/// ```
#[must_use]
pub fn strip_comments(source: &str) -> String {
    let mut clean = String::with_capacity(source.len());
    let mut lexer = Fragment::lexer(source);

    while let Some(fragment) = lexer.next() {
        match fragment {
            Ok(Fragment::Remark | Fragment::LineComment | Fragment::BlockComment) => {
                clean.extend(lexer.slice().chars().filter(|&c| c == '\n'));
            },
            Ok(Fragment::Quoted | Fragment::Text | Fragment::Stray) | Err(()) => {
                clean.push_str(lexer.slice());
            },
        }
    }

    clean
}
