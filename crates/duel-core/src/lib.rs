//! duel-core
//!
//! Pure duel-engine domain model:
//! - enum masks (positions, locations, card types, races, ...)
//! - static card data
//! - engine messages (output types)
//! - player responses (input types)
//! - card queries and field snapshots
//! - card-filter opcodes and their evaluator

pub mod attribute;
pub mod card;
pub mod card_type;
pub mod duel_mode;
pub mod hint;
pub mod link_marker;
pub mod location;
pub mod messages;
pub mod opcode;
pub mod phase;
pub mod position;
pub mod query;
pub mod race;
pub mod response;
pub mod rps;

pub use attribute::Attribute;
pub use card::{CardData, NewCardInfo};
pub use card_type::CardType;
pub use duel_mode::DuelMode;
pub use hint::{CardHintType, HintTiming, HintType, PlayerHintType};
pub use link_marker::LinkMarker;
pub use location::Location;
pub use phase::Phase;
pub use position::Position;
pub use race::Race;
pub use rps::Rps;

pub use messages::{Message, MessageType};
pub use opcode::{card_matches, OpCode};
pub use query::{CardQueryInfo, FieldSnapshot, QueryFlag, QueryRequest};
pub use response::{BattleCmdAction, FieldPlace, IdleCmdAction, Response};
