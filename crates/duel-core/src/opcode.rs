//! Card-filter opcodes and their stack evaluator.
//!
//! `AnnounceCard` prompts carry a small postfix program describing which
//! cards are legal answers. Operands are pushed as-is; operators pop their
//! arguments and push an `i64` result. A card is a legal answer when the
//! program leaves exactly one nonzero value on the stack (plus the alias
//! and token rules below).
//!
//! Arithmetic is two's-complement wrapping, matching the engine. Malformed
//! programs never panic: an operator without enough operands is skipped,
//! as is a division by zero.

use crate::card::CardData;
use crate::card_type::CardType;

/// Raw tags of the filter operators. Anything else on the wire is a
/// literal operand.
mod raw {
    pub const ADD: u64 = 0x4000000000000000;
    pub const SUB: u64 = 0x4000000100000000;
    pub const MUL: u64 = 0x4000000200000000;
    pub const DIV: u64 = 0x4000000300000000;
    pub const AND: u64 = 0x4000000400000000;
    pub const OR: u64 = 0x4000000500000000;
    pub const NEG: u64 = 0x4000000600000000;
    pub const NOT: u64 = 0x4000000700000000;
    pub const BAND: u64 = 0x4000000800000000;
    pub const BOR: u64 = 0x4000000900000000;
    pub const BNOT: u64 = 0x4000001000000000;
    pub const BXOR: u64 = 0x4000001100000000;
    pub const LSHIFT: u64 = 0x4000001200000000;
    pub const RSHIFT: u64 = 0x4000001300000000;
    pub const ALLOW_ALIASES: u64 = 0x4000001400000000;
    pub const ALLOW_TOKENS: u64 = 0x4000001500000000;
    pub const ISCODE: u64 = 0x4000010000000000;
    pub const ISSETCARD: u64 = 0x4000010100000000;
    pub const ISTYPE: u64 = 0x4000010200000000;
    pub const ISRACE: u64 = 0x4000010300000000;
    pub const ISATTRIBUTE: u64 = 0x4000010400000000;
    pub const GETCODE: u64 = 0x4000010500000000;
    pub const GETSETCARD: u64 = 0x4000010600000000;
    pub const GETTYPE: u64 = 0x4000010700000000;
    pub const GETRACE: u64 = 0x4000010800000000;
    pub const GETATTRIBUTE: u64 = 0x4000010900000000;
}

/// One instruction of a card-filter program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    /// Literal operand, pushed onto the stack.
    Value(i64),
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Neg,
    Not,
    BAnd,
    BOr,
    BNot,
    BXor,
    LShift,
    RShift,
    /// Permit answering with a card whose alias is set.
    AllowAliases,
    /// Permit answering with a token monster.
    AllowTokens,
    IsCode,
    IsSetCard,
    IsType,
    IsRace,
    IsAttribute,
    GetCode,
    /// Accepted on the wire but has no effect (set codes are variable
    /// width and cannot be pushed as one value).
    GetSetCard,
    GetType,
    GetRace,
    GetAttribute,
}

impl OpCode {
    /// Decode one raw wire word.
    pub fn from_raw(v: u64) -> Self {
        match v {
            raw::ADD => OpCode::Add,
            raw::SUB => OpCode::Sub,
            raw::MUL => OpCode::Mul,
            raw::DIV => OpCode::Div,
            raw::AND => OpCode::And,
            raw::OR => OpCode::Or,
            raw::NEG => OpCode::Neg,
            raw::NOT => OpCode::Not,
            raw::BAND => OpCode::BAnd,
            raw::BOR => OpCode::BOr,
            raw::BNOT => OpCode::BNot,
            raw::BXOR => OpCode::BXor,
            raw::LSHIFT => OpCode::LShift,
            raw::RSHIFT => OpCode::RShift,
            raw::ALLOW_ALIASES => OpCode::AllowAliases,
            raw::ALLOW_TOKENS => OpCode::AllowTokens,
            raw::ISCODE => OpCode::IsCode,
            raw::ISSETCARD => OpCode::IsSetCard,
            raw::ISTYPE => OpCode::IsType,
            raw::ISRACE => OpCode::IsRace,
            raw::ISATTRIBUTE => OpCode::IsAttribute,
            raw::GETCODE => OpCode::GetCode,
            raw::GETSETCARD => OpCode::GetSetCard,
            raw::GETTYPE => OpCode::GetType,
            raw::GETRACE => OpCode::GetRace,
            raw::GETATTRIBUTE => OpCode::GetAttribute,
            _ => OpCode::Value(v as i64),
        }
    }

    /// Encode back to the raw wire word.
    pub fn to_raw(self) -> u64 {
        match self {
            OpCode::Value(v) => v as u64,
            OpCode::Add => raw::ADD,
            OpCode::Sub => raw::SUB,
            OpCode::Mul => raw::MUL,
            OpCode::Div => raw::DIV,
            OpCode::And => raw::AND,
            OpCode::Or => raw::OR,
            OpCode::Neg => raw::NEG,
            OpCode::Not => raw::NOT,
            OpCode::BAnd => raw::BAND,
            OpCode::BOr => raw::BOR,
            OpCode::BNot => raw::BNOT,
            OpCode::BXor => raw::BXOR,
            OpCode::LShift => raw::LSHIFT,
            OpCode::RShift => raw::RSHIFT,
            OpCode::AllowAliases => raw::ALLOW_ALIASES,
            OpCode::AllowTokens => raw::ALLOW_TOKENS,
            OpCode::IsCode => raw::ISCODE,
            OpCode::IsSetCard => raw::ISSETCARD,
            OpCode::IsType => raw::ISTYPE,
            OpCode::IsRace => raw::ISRACE,
            OpCode::IsAttribute => raw::ISATTRIBUTE,
            OpCode::GetCode => raw::GETCODE,
            OpCode::GetSetCard => raw::GETSETCARD,
            OpCode::GetType => raw::GETTYPE,
            OpCode::GetRace => raw::GETRACE,
            OpCode::GetAttribute => raw::GETATTRIBUTE,
        }
    }
}

/// Cards that any filter accepts regardless of the program's verdict.
const EXEMPT_CODES: [u32; 2] = [78734254, 13857930];

fn truthy(v: i64) -> i64 {
    (v != 0) as i64
}

/// Evaluate a filter program against one card's static data.
pub fn card_matches(card: &CardData, opcodes: &[OpCode]) -> bool {
    let mut stack: Vec<i64> = Vec::new();
    let mut allow_aliases = false;
    let mut allow_tokens = false;

    // Pop two operands, or skip the operator if fewer are on the stack.
    macro_rules! binop {
        ($stack:ident, |$a:ident, $b:ident| $e:expr) => {
            if $stack.len() >= 2 {
                let $b = $stack.pop().unwrap();
                let $a = $stack.pop().unwrap();
                $stack.push($e);
            }
        };
    }
    macro_rules! unop {
        ($stack:ident, |$a:ident| $e:expr) => {
            if let Some($a) = $stack.pop() {
                $stack.push($e);
            }
        };
    }

    for &op in opcodes {
        match op {
            OpCode::Value(v) => stack.push(v),
            OpCode::Add => binop!(stack, |a, b| a.wrapping_add(b)),
            OpCode::Sub => binop!(stack, |a, b| a.wrapping_sub(b)),
            OpCode::Mul => binop!(stack, |a, b| a.wrapping_mul(b)),
            OpCode::Div => {
                if stack.len() >= 2 && stack[stack.len() - 1] != 0 {
                    let b = stack.pop().unwrap();
                    let a = stack.pop().unwrap();
                    stack.push(a.wrapping_div(b));
                }
            }
            OpCode::And => binop!(stack, |a, b| truthy(a) & truthy(b)),
            OpCode::Or => binop!(stack, |a, b| truthy(a) | truthy(b)),
            OpCode::Neg => unop!(stack, |a| a.wrapping_neg()),
            OpCode::Not => unop!(stack, |a| (a == 0) as i64),
            OpCode::BAnd => binop!(stack, |a, b| a & b),
            OpCode::BOr => binop!(stack, |a, b| a | b),
            OpCode::BNot => unop!(stack, |a| !a),
            OpCode::BXor => binop!(stack, |a, b| a ^ b),
            OpCode::LShift => binop!(stack, |a, b| a.wrapping_shl(b as u32)),
            OpCode::RShift => binop!(stack, |a, b| a.wrapping_shr(b as u32)),
            OpCode::AllowAliases => allow_aliases = true,
            OpCode::AllowTokens => allow_tokens = true,
            OpCode::IsCode => {
                unop!(stack, |a| (card.code as i64 == a) as i64)
            }
            OpCode::IsSetCard => {
                unop!(stack, |a| is_set_card(card, a as u64) as i64)
            }
            OpCode::IsType => {
                unop!(stack, |a| (card.card_type as i64 & a != 0) as i64)
            }
            OpCode::IsRace => {
                unop!(stack, |a| (card.race as i64 & a != 0) as i64)
            }
            OpCode::IsAttribute => {
                unop!(stack, |a| (card.attribute as i64 & a != 0) as i64)
            }
            OpCode::GetCode => stack.push(card.code as i64),
            OpCode::GetSetCard => {}
            OpCode::GetType => stack.push(card.card_type as i64),
            OpCode::GetRace => stack.push(card.race as i64),
            OpCode::GetAttribute => stack.push(card.attribute as i64),
        }
    }

    let accepted = stack.len() == 1 && stack[0] != 0;
    if !accepted {
        return false;
    }
    // Cards that name themselves in their own effect bypass the alias and
    // token rules.
    if EXEMPT_CODES.contains(&card.code) {
        return true;
    }
    if !allow_aliases && card.alias != 0 {
        return false;
    }
    if !allow_tokens {
        let token = CardType::MONSTER | CardType::TOKEN;
        return card.card_type & token != token;
    }
    true
}

/// Set code match: low 12 bits select the family, high 4 bits are a
/// sub-family mask that must be fully present.
fn is_set_card(card: &CardData, wanted: u64) -> bool {
    let set_type = (wanted & 0xfff) as u16;
    let set_subtype = (wanted & 0xf000) as u16;
    card.setcodes
        .iter()
        .any(|&s| (s & 0xfff) == set_type && (s & 0xf000 & set_subtype) == set_subtype)
}
