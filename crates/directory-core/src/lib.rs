//! Directory Core — shared abstractions.
//!
//! This crate holds the pieces every other crate depends on: the clock
//! abstraction and the error taxonomy. It contains no supplier logic.

pub mod clock;
pub mod error;
