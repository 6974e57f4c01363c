#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    operand: Option<char>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $operand:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).operand($operand)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            operand: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn operand(&self, operand: char) -> Error {
        debug_assert!(self.operand.is_none());
        Error {
            code: self.code,
            operand: Some(operand),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    StackOverflow,
    StackUnderflow,
    DivideByZero,
    StackEmpty,
    Unrecognised,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        match self.code {
            StackOverflow => write!(f, "Stack overflow."),
            StackUnderflow => write!(f, "Stack underflow"),
            DivideByZero => write!(f, "Divide by 0."),
            StackEmpty => write!(f, "Stack empty."),
            Unrecognised => match self.operand {
                Some(ch) => write!(f, "Unrecognised operator or operand \"{}\"", ch),
                None => write!(f, "Unrecognised operator or operand"),
            },
        }
    }
}

impl std::error::Error for Error {}
