#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(char),
    Literal(String),
    Operator(Operator),
    Word(Word),
}

impl Token {
    /// Single character tokens. Digits are literals, the rest are
    /// operators or commands. Anything else is unknown.
    pub fn from_char(ch: char) -> Token {
        if ch.is_ascii_digit() {
            return Token::Literal(ch.to_string());
        }
        if let Some(op) = Operator::from_char(ch) {
            return Token::Operator(op);
        }
        if let Some(word) = Word::from_char(ch) {
            return Token::Word(word);
        }
        Token::Unknown(ch)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(c) => write!(f, "{}", c),
            Literal(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
        }
    }
}

/// Commands that are not binary operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Display,
    Random,
    Equal,
}

impl Word {
    pub fn from_char(ch: char) -> Option<Word> {
        use Word::*;
        match ch {
            'd' => Some(Display),
            'r' => Some(Random),
            '=' => Some(Equal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Display => write!(f, "d"),
            Random => write!(f, "r"),
            Equal => write!(f, "="),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Caret,
    Modulus,
    Multiply,
    Divide,
    Plus,
    Minus,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '^' => Some(Caret),
            '%' => Some(Modulus),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '+' => Some(Plus),
            '-' => Some(Minus),
            _ => None,
        }
    }

    /// Lower binds tighter.
    pub fn precedence(self) -> u8 {
        use Operator::*;
        match self {
            Caret => 0,
            Modulus => 1,
            Multiply | Divide => 2,
            Plus => 3,
            Minus => 4,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Modulus => write!(f, "%"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
        }
    }
}
