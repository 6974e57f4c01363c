use super::lex::is_srpn_whitespace;

/// ## Comment filter
///
/// A `#` with whitespace or the edge of the line on both sides opens or
/// closes a comment. Comments may span lines, so the filter remembers
/// whether it is inside one.
#[derive(Debug, Default, Clone)]
pub struct Comment {
    open: bool,
}

impl Comment {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn strip(&mut self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut prev: Option<char> = None;
        let mut chars = s.chars().peekable();
        while let Some(ch) = chars.next() {
            let bounded = |c: Option<&char>| c.map_or(true, |c| is_srpn_whitespace(*c));
            if ch == '#' && bounded(prev.as_ref()) && bounded(chars.peek()) {
                self.open = !self.open;
            } else if !self.open {
                out.push(ch);
            }
            prev = Some(ch);
        }
        out
    }
}
