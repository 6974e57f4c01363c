use super::lex::*;
use super::parse::*;
use super::token::*;

/// Comment-free input in execution order.
#[derive(Debug, PartialEq, Default, Clone)]
pub struct Line {
    tokens: Vec<Token>,
}

impl Line {
    /// Each whitespace separated chunk is lexed and reordered on its own,
    /// so operators never reach across whitespace.
    pub fn new(s: &str) -> Line {
        let tokens = s
            .split(is_srpn_whitespace)
            .filter(|chunk| !chunk.is_empty())
            .flat_map(|chunk| parse(lex(chunk)))
            .collect();
        Line { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", s.join(" "))
    }
}
