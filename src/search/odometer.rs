/**
Base-k counter over a fixed number of digits. Starts at all-zero and enumerates the k^len
vectors by incrementing the lowest digit (index 0) and carrying into the next ones.
*/
#[derive(Debug, Clone)]
pub struct Odometer {
    /// digits[0] is the lowest-order digit
    digits: Vec<usize>,
    /// every digit is in 0..base
    base: usize,
    /// true once every digit overflowed
    exhausted: bool,
}

impl Odometer {
    /** creates an odometer over len digits in base base (a base of 0 is empty) */
    pub fn new(len:usize, base:usize) -> Self {
        Self { digits: vec![0 ; len], base, exhausted: base == 0 }
    }

    /// current digit vector
    pub fn digits(&self) -> &[usize] { &self.digits }

    /// true once the whole space has been enumerated
    pub fn is_exhausted(&self) -> bool { self.exhausted }

    /**
    moves to the next vector. Returns false (and marks the odometer exhausted) when every
    digit overflowed, the digits are then back to all-zero.
    */
    pub fn advance(&mut self) -> bool {
        if self.exhausted { return false; }
        for d in self.digits.iter_mut() {
            *d += 1;
            if *d < self.base { return true; }
            *d = 0; // carry
        }
        self.exhausted = true;
        false
    }
}
