/// Contains structs representing recurring sets of structured data.
/// For instance, MAC-Addresses, default headers, etc.
pub mod components;

/// Management frame structs
mod management;

pub use management::*;

use crate::frame::components::MacAddress;
use crate::Addresses;

#[derive(Clone, Debug)]
/// All frames this library knows how to decode.
pub enum Frame {
    Beacon(Beacon),
}

impl Addresses for Frame {
    fn src(&self) -> Option<&MacAddress> {
        match self {
            Frame::Beacon(beacon) => beacon.src(),
        }
    }

    fn dest(&self) -> &MacAddress {
        match self {
            Frame::Beacon(beacon) => beacon.dest(),
        }
    }

    fn bssid(&self) -> Option<&MacAddress> {
        match self {
            Frame::Beacon(beacon) => beacon.bssid(),
        }
    }
}
