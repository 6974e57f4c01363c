use super::token::*;

/// Reorder infix tokens into the order the machine executes them.
///
/// This is shunting-yard with the legacy twist: an operator only pops
/// operators that bind strictly tighter. Equal precedence stays on the
/// operator stack, so `10-5-5` groups as `10-(5-5)`.
pub fn parse<I>(tokens: I) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    Parser::default().parse(tokens)
}

#[derive(Default)]
struct Parser {
    operators: Vec<Operator>,
    output: Vec<Token>,
}

impl Parser {
    fn parse<I>(mut self, tokens: I) -> Vec<Token>
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            match token {
                Token::Operator(op) => self.operator(op),
                Token::Word(Word::Display) => {
                    self.flush();
                    self.output.push(token);
                }
                _ => self.output.push(token),
            }
        }
        self.flush();
        self.output
    }

    fn operator(&mut self, op: Operator) {
        while let Some(top) = self.operators.last() {
            if top.precedence() >= op.precedence() {
                break;
            }
            self.output.push(Token::Operator(*top));
            self.operators.pop();
        }
        self.operators.push(op);
    }

    fn flush(&mut self) {
        while let Some(op) = self.operators.pop() {
            self.output.push(Token::Operator(op));
        }
    }
}
