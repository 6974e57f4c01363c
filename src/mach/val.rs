/// ## Saturated value
///
/// Every value on the working stack lies within the `i32` range.
/// Quotients keep their fraction until they are reported.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Val(f64);

impl Val {
    pub const MIN: Val = Val(i32::MIN as f64);
    pub const MAX: Val = Val(i32::MAX as f64);

    pub fn saturate(n: f64) -> Val {
        if n.is_nan() {
            return Val(0.0);
        }
        Val(n.max(Val::MIN.0).min(Val::MAX.0))
    }

    /// Parses `-?[0-9]+`, clamping however many digits there are.
    pub fn from_literal(s: &str) -> Val {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, s),
        };
        let mut n: i64 = 0;
        for d in digits.chars().filter_map(|c| c.to_digit(10)) {
            n = n.saturating_mul(10).saturating_add(d as i64);
        }
        if negative {
            n = -n;
        }
        Val::saturate(n as f64)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// The integer the legacy tool prints.
    pub fn floor(self) -> i32 {
        self.0.floor() as i32
    }
}

impl From<i32> for Val {
    fn from(n: i32) -> Val {
        Val(n as f64)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.floor())
    }
}
