//! Rock-paper-scissors hand values.

/// Hand choice for the opening rock-paper-scissors.
pub struct Rps;

impl Rps {
    pub const SCISSORS: u8 = 1;
    pub const ROCK: u8 = 2;
    pub const PAPER: u8 = 3;
}
