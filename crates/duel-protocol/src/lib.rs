//! duel-protocol
//!
//! Wire-level encoding/decoding for the duel engine.
//!
//! This crate is responsible for turning raw engine buffers into logical
//! `duel_core` values and back again:
//!
//! - [`buffer`]         : little-endian byte cursors
//! - [`message_codec`]  : engine message stream decoding
//! - [`query_codec`]    : card query answers and field snapshots
//! - [`response_codec`] : player response encoding
//! - [`request`]        : fixed request structs (write-only)

pub mod buffer;
pub mod error;
pub mod message_codec;
pub mod query_codec;
pub mod request;
pub mod response_codec;

pub use buffer::{BufferReader, BufferWriter};
pub use error::ProtocolError;
pub use message_codec::{decode_message, decode_message_stream};
pub use query_codec::{decode_field, decode_query, decode_query_location};
pub use request::{encode_new_card, encode_query_request};
pub use response_codec::encode_response;
