//! Directive markup lexer.
//!
//! Splits input on space, newline, `[`, `]` and `:`. Each separator is its
//! own token (runs are merged later by the parser) and the text between
//! separators becomes a [`Token::Text`]. Any input lexes successfully.

/// A lexical token borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Space,
    Newline,
    OpenBracket,
    CloseBracket,
    Colon,
}

impl Token<'_> {
    /// Source text of the token.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Text(text) => text,
            Token::Space => " ",
            Token::Newline => "\n",
            Token::OpenBracket => "[",
            Token::CloseBracket => "]",
            Token::Colon => ":",
        }
    }
}

fn separator(ch: char) -> Option<Token<'static>> {
    match ch {
        ' ' => Some(Token::Space),
        '\n' => Some(Token::Newline),
        '[' => Some(Token::OpenBracket),
        ']' => Some(Token::CloseBracket),
        ':' => Some(Token::Colon),
        _ => None,
    }
}

/// Split `content` into tokens.
pub fn lex(content: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (idx, ch) in content.char_indices() {
        if let Some(token) = separator(ch) {
            if start < idx {
                tokens.push(Token::Text(&content[start..idx]));
            }
            tokens.push(token);
            start = idx + ch.len_utf8();
        }
    }
    if start < content.len() {
        tokens.push(Token::Text(&content[start..]));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use Token::*;

    #[test]
    fn test_empty() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn test_words_and_spaces() {
        assert_eq!(
            lex("Lorem  ipsum\n"),
            vec![Text("Lorem"), Space, Space, Text("ipsum"), Newline]
        );
    }

    #[test]
    fn test_directive() {
        assert_eq!(
            lex("[box:on:thickness:2]"),
            vec![
                OpenBracket,
                Text("box"),
                Colon,
                Text("on"),
                Colon,
                Text("thickness"),
                Colon,
                Text("2"),
                CloseBracket,
            ]
        );
    }

    #[test]
    fn test_adjacent_separators_produce_no_empty_text() {
        assert_eq!(lex("]["), vec![CloseBracket, OpenBracket]);
        assert_eq!(lex("a::b"), vec![Text("a"), Colon, Colon, Text("b")]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(lex("Café:€"), vec![Text("Café"), Colon, Text("€")]);
    }

    #[test]
    fn test_carriage_return_stays_in_text() {
        assert_eq!(lex("a\r\nb"), vec![Text("a\r"), Newline, Text("b")]);
    }
}
