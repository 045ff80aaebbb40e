//! Stop-bit varint length framing for FAST message streams.
//!
//! A FAST decoder can echo the message boundaries it finds to an index
//! file as it works through a captured data stream. This crate consumes
//! that pair — the raw capture plus its boundary index — and re-emits
//! the stream with an explicit length prefix before each message:
//! - The prefix is a FAST stop-bit unsigned integer (7 payload bits per
//!   byte, high bit set on the final byte, most-significant group first)
//! - Message bytes are copied through untouched and exactly once
//!
//! No partial reads, no seeking: the raw stream is consumed strictly
//! forward, the index strictly front-to-back, the output append-only.

pub mod codec;
pub mod error;
pub mod framer;
pub mod index;

pub use codec::{encode_uint, encoded_len, DATA_BITS, DATA_SHIFT, STOP_BIT};
pub use error::{FrameError, Result};
pub use framer::{BlockFramer, FramerSummary};
pub use index::{parse_marker, Marker};
