const TABLE: [i32; 22] = [
    1804289383, 846930886, 1681692777, 1714636915, 1957747793, 424238335, 719885386, 1649760492,
    596516649, 1189641421, 1025202362, 1350490027, 783368690, 1102520059, 2044897763, 1967513926,
    1365180540, 1540383426, 304089172, 1303455736, 35005211, 521595368,
];

/// ## Pseudo-random sequence
///
/// The legacy tool's `r` replays a fixed table, wrapping after 22 draws.
#[derive(Debug, Default, Clone)]
pub struct Random {
    index: usize,
}

impl Random {
    pub fn len() -> usize {
        TABLE.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn draw(&mut self) -> i32 {
        let n = TABLE[self.index];
        self.index = (self.index + 1) % TABLE.len();
        n
    }
}
