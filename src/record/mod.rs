//! Shared record primitives used by every attribute codec.
//!
//! - [`io`] - big-endian conversions and bounds-checked reads
//! - [`parser`] - cursor used by the decoders
//! - [`writer`] - growable buffer used by the encoders

pub mod io;
pub mod parser;
pub mod writer;

pub use parser::Parser;
pub use writer::ByteVector;
