use libwifi::frame::{
    components::{
        FrameControl, MacAddress, ManagementHeader, SequenceControl, StationInfo, SupportedRate,
    },
    Beacon, CAPABILITY_ESS,
};
use libwifi::FrameSubType;

/// Radiotap header prepended to every injected frame.
///
/// Only the TX flags field is present. Beacons go to broadcast, so the driver must not wait for
/// an ACK.
pub const RTH_NO_ACK: [u8; 10] = [
    0x00, 0x00, /* radiotap version and padding */
    0x0a, 0x00, /* radiotap header length */
    0x00, 0x80, 0x00, 0x00, /* bitmap */
    0x28, 0x00, /* tx flags */
];

/// Beacon interval in TU (1.024ms).
pub const BEACON_INTERVAL: u16 = 100;

/// Capability info of the advertised network. Infrastructure only, no privacy bit.
pub const CAPABILITY_INFO: u16 = CAPABILITY_ESS;

/// 1, 2, 5.5, 6, 9, 11, 12 and 18 Mbps, none of them flagged as basic rate.
/// Encodes to `02 04 0b 0c 12 16 18 24`.
pub const RATES: [SupportedRate; 8] = [
    SupportedRate {
        rate: 1.0,
        mandatory: false,
    },
    SupportedRate {
        rate: 2.0,
        mandatory: false,
    },
    SupportedRate {
        rate: 5.5,
        mandatory: false,
    },
    SupportedRate {
        rate: 6.0,
        mandatory: false,
    },
    SupportedRate {
        rate: 9.0,
        mandatory: false,
    },
    SupportedRate {
        rate: 11.0,
        mandatory: false,
    },
    SupportedRate {
        rate: 12.0,
        mandatory: false,
    },
    SupportedRate {
        rate: 18.0,
        mandatory: false,
    },
];

/// Longest payload a one byte element length can describe.
pub const MAX_ELEMENT_LEN: usize = u8::MAX as usize;

/// Build a radiotap-prefixed beacon announcing `ssid` from `source`.
///
/// `source` is used as transmitter and BSSID, the receiver is always broadcast.
/// The caller has to make sure `ssid` fits into a single element, see [MAX_ELEMENT_LEN].
pub fn build_beacon(source: &MacAddress, ssid: &[u8]) -> Vec<u8> {
    let mut rth: Vec<u8> = RTH_NO_ACK.to_vec();

    let header = ManagementHeader {
        frame_control: FrameControl::management(FrameSubType::Beacon),
        duration: [0x00, 0x00],
        address_1: MacAddress::broadcast(),
        address_2: *source,
        address_3: *source,
        sequence_control: SequenceControl {
            fragment_number: 0u8,
            sequence_number: 0u16,
        },
    };
    let beacon = Beacon {
        header,
        timestamp: 0u64,
        beacon_interval: BEACON_INTERVAL,
        capability_info: CAPABILITY_INFO,
        station_info: StationInfo {
            ssid: Some(ssid.to_vec()),
            supported_rates: RATES.to_vec(),
            ..Default::default()
        },
    };
    rth.extend(beacon.encode());
    rth
}
