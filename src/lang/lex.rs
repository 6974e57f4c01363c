use super::token::*;

/// Tokenize one whitespace-free chunk of input.
///
/// The legacy splitting rules are reproduced with a single lookahead:
///
/// * `d r + * / % = ^` always stand alone.
/// * A `-` stands alone unless a digit follows it.
/// * A `-` followed by a digit is a sign only when it begins a piece.
///   Otherwise it is a minus and the digits begin the next piece.
/// * A piece that is not a signed integer is broken into characters.
pub fn lex(s: &str) -> Vec<Token> {
    SrpnLexer::lex(s)
}

/// Matches `\s` of the legacy tool.
pub fn is_srpn_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn is_srpn_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_srpn_delimiter(c: char) -> bool {
    matches!(c, 'd' | 'r' | '+' | '*' | '/' | '%' | '=' | '^')
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(is_srpn_digit)
}

struct SrpnLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    piece: String,
    tokens: Vec<Token>,
}

impl<'a> SrpnLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let mut lexer = SrpnLexer {
            chars: s.chars().peekable(),
            piece: String::new(),
            tokens: vec![],
        };
        while let Some(ch) = lexer.chars.next() {
            if is_srpn_delimiter(ch) {
                lexer.flush();
                lexer.tokens.push(Token::from_char(ch));
                continue;
            }
            if ch == '-' {
                let signed = matches!(lexer.chars.peek(), Some(pk) if is_srpn_digit(*pk));
                if !signed || !lexer.piece.is_empty() {
                    lexer.flush();
                    lexer.tokens.push(Token::Operator(Operator::Minus));
                    continue;
                }
            }
            lexer.piece.push(ch);
        }
        lexer.flush();
        lexer.tokens
    }

    fn flush(&mut self) {
        if self.piece.is_empty() {
            return;
        }
        let piece = std::mem::take(&mut self.piece);
        if is_integer(&piece) {
            self.tokens.push(Token::Literal(piece));
        } else {
            self.tokens.extend(piece.chars().map(Token::from_char));
        }
    }
}
