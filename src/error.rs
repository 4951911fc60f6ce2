use std::io;

use libwifi::frame::components::MacParseError;

/// Everything that can go wrong while emitting a beacon.
#[derive(thiserror::Error, Debug)]
pub enum EmitError {
    #[error("invalid hardware address {input:?}: {source}")]
    InvalidHardwareAddress {
        input: String,
        #[source]
        source: MacParseError,
    },

    #[error("ssid is {0} bytes long, an element can carry at most 255")]
    SsidTooLong(usize),

    #[error("cannot open interface {interface} for injection: {source}")]
    Interface {
        interface: String,
        #[source]
        source: io::Error,
    },

    #[error("transmission on {interface} failed: {source}")]
    Transmission {
        interface: String,
        #[source]
        source: io::Error,
    },
}
