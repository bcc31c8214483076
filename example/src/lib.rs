//! A small game-server wire protocol encoded with `binenc`.
//!
//! `proto_encoding.rs` is the output of running `binenc-gen src/proto.rs`
//! inside this crate; regenerate it after touching `proto.rs`. The record
//! types are re-exported at the crate root, which is what the generated
//! module's `use super::*;` resolves against.

pub mod proto;
mod proto_encoding;

pub use proto::*;
