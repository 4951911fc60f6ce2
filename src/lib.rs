//! Craft one 802.11 beacon frame and inject it once.
//!
//! [emitter::emit_beacon] is the whole operation; [tx] holds the frame template and
//! [rawsocks] the Linux injection socket.

pub mod cli;
pub mod emitter;
pub mod error;
pub mod rawsocks;
pub mod tx;

pub use emitter::{emit_beacon, Injection, Injector, RawSocketInjector};
pub use error::EmitError;
