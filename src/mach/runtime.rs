use super::{Operation, Random, Stack, Val};
use crate::error;
use crate::lang::{Comment, Error, Line, Operator, Token, Word};
use log::{debug, trace};
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

pub const STACK_CAPACITY: usize = 23;

/// ## Calculator session
///
/// Lines are queued with `enter` and run with `execute`, which returns
/// each time there is something to show.
#[derive(Debug)]
pub struct Runtime {
    comment: Comment,
    random: Random,
    stack: Stack<Val>,
    pending: VecDeque<Token>,
}

/// ## Events for the user interface
#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Print(String),
    Value(i32),
    Error(Error),
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new()
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime {
            comment: Comment::default(),
            random: Random::default(),
            stack: Stack::new(STACK_CAPACITY),
            pending: VecDeque::new(),
        }
    }

    pub fn enter(&mut self, s: &str) {
        let text = self.comment.strip(s);
        let line = Line::new(&text);
        if line.is_empty() {
            return;
        }
        debug!("{:?} runs as [{}]", s, line);
        self.pending.extend(line.into_tokens());
    }

    pub fn execute(&mut self) -> Event {
        while let Some(token) = self.pending.pop_front() {
            let result = self.step(&token);
            trace!("{} -> {:?}", token, self.stack);
            match result {
                Ok(None) => continue,
                Ok(Some(event)) => return event,
                Err(error) => return Event::Error(error),
            }
        }
        Event::Stopped
    }

    /// Drops whatever was entered but not yet executed.
    pub fn interrupt(&mut self) {
        if !self.pending.is_empty() {
            debug!("interrupted with {} tokens pending", self.pending.len());
            self.pending.clear();
        }
    }

    pub fn peek(&self) -> Option<i32> {
        self.stack.last().map(|val| val.floor())
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn in_comment(&self) -> bool {
        self.comment.is_open()
    }

    fn step(&mut self, token: &Token) -> Result<Option<Event>> {
        match token {
            Token::Literal(s) => self.stack.push(Val::from_literal(s))?,
            Token::Operator(op) => self.binary(*op)?,
            Token::Word(Word::Random) => {
                let n = self.random.draw();
                self.stack.push(Val::from(n))?;
            }
            Token::Word(Word::Display) => return Ok(Some(Event::Print(self.display()))),
            Token::Word(Word::Equal) => match self.peek() {
                Some(n) => return Ok(Some(Event::Value(n))),
                None => return Err(error!(StackEmpty)),
            },
            Token::Unknown(ch) => return Err(error!(Unrecognised; *ch)),
        }
        Ok(None)
    }

    fn binary(&mut self, op: Operator) -> Result<()> {
        let (lhs, rhs) = self.stack.last_2()?;
        let val = Operation::apply(op, lhs, rhs)?;
        self.stack.pop_2()?;
        self.stack.push(val)
    }

    fn display(&self) -> String {
        if self.stack.is_empty() {
            return format!("{}\n", Val::MIN);
        }
        self.stack.iter().map(|val| format!("{}\n", val)).collect()
    }
}
