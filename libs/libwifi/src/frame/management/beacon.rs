use crate::frame::components::*;
use crate::Addresses;

/// Capability bit announcing an infrastructure (ESS) network.
pub const CAPABILITY_ESS: u16 = 0x0001;
/// Capability bit announcing an ad hoc (IBSS) network.
pub const CAPABILITY_IBSS: u16 = 0x0002;

/// A beacon frame.
///
/// The body consists of three fixed fields followed by the tagged information elements:
/// - Timestamp (8 bytes)
/// - Beacon interval in time units of 1024µs (2 bytes)
/// - Capability info (2 bytes)
/// - [StationInfo]
#[derive(Clone, Debug)]
pub struct Beacon {
    pub header: ManagementHeader,
    pub timestamp: u64,
    pub beacon_interval: u16,
    pub capability_info: u16,
    pub station_info: StationInfo,
}

impl Beacon {
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Encode the ManagementHeader
        bytes.extend(self.header.encode());

        // Encode Timestamp
        bytes.extend_from_slice(&self.timestamp.to_le_bytes());

        // Encode Beacon Interval
        bytes.extend_from_slice(&self.beacon_interval.to_le_bytes());

        // Encode Capability Info
        bytes.extend_from_slice(&self.capability_info.to_le_bytes());

        // Encode Station Info
        bytes.extend(self.station_info.encode());

        bytes
    }

    pub fn is_ess(&self) -> bool {
        self.capability_info & CAPABILITY_ESS != 0
    }

    pub fn is_ibss(&self) -> bool {
        self.capability_info & CAPABILITY_IBSS != 0
    }
}

impl Addresses for Beacon {
    fn src(&self) -> Option<&MacAddress> {
        self.header.src()
    }

    fn dest(&self) -> &MacAddress {
        self.header.dest()
    }

    fn bssid(&self) -> Option<&MacAddress> {
        self.header.bssid()
    }
}
