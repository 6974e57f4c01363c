use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// A push onto a full stack is refused and the value is dropped.

pub struct Stack<T> {
    capacity: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(capacity: usize) -> Stack<T> {
        Stack {
            capacity,
            vec: Vec::with_capacity(capacity),
        }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    /// Top first.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.vec.iter().rev()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(error!(StackOverflow));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(self.underflow_error());
        }
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}

impl<T: Clone> Stack<T> {
    /// The top two values as `(second, top)`, left in place.
    pub fn last_2(&self) -> Result<(T, T)> {
        match self.vec.len() {
            len if len < 2 => Err(self.underflow_error()),
            len => Ok((self.vec[len - 2].clone(), self.vec[len - 1].clone())),
        }
    }
}
