//! Turn phase values.

/// Phase identifier, as sent by the `NewPhase` message (16-bit on the wire).
pub struct Phase;

impl Phase {
    pub const DRAW: u16 = 0x01;
    pub const STANDBY: u16 = 0x02;
    pub const MAIN1: u16 = 0x04;
    pub const BATTLE_START: u16 = 0x08;
    pub const BATTLE_STEP: u16 = 0x10;
    pub const DAMAGE: u16 = 0x20;
    pub const DAMAGE_CAL: u16 = 0x40;
    pub const BATTLE: u16 = 0x80;
    pub const MAIN2: u16 = 0x100;
    pub const END: u16 = 0x200;
}
