/// Element ID of the SSID element.
pub const ELEMENT_SSID: u8 = 0;
/// Element ID of the supported rates element.
pub const ELEMENT_SUPPORTED_RATES: u8 = 1;

#[derive(Clone, Debug, Default, PartialEq)]
/// StationInfo is used to parse and store variable length fields that are sent
/// with management frames.
///
/// Each field has an `id`, the length of the bytes for this field, and then payload of the field.
/// The SSID and the supported rates get their own fields, all other elements are kept as raw
/// bytes in `data` under their element id.
pub struct StationInfo {
    pub ssid: Option<Vec<u8>>,
    pub supported_rates: Vec<SupportedRate>,
    pub data: Vec<(u8, Vec<u8>)>,
}

impl StationInfo {
    /// Encode all elements as `id | length | payload`.
    ///
    /// Every element length is a single byte, payloads longer than 255 bytes can't be represented.
    /// Callers are expected to check this beforehand.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        if let Some(ssid) = &self.ssid {
            bytes.push(ELEMENT_SSID);
            bytes.push(ssid.len() as u8);
            bytes.extend_from_slice(ssid);
        }

        if !self.supported_rates.is_empty() {
            bytes.push(ELEMENT_SUPPORTED_RATES);
            bytes.push(self.supported_rates.len() as u8);
            bytes.extend(self.supported_rates.iter().map(SupportedRate::encode));
        }

        for (id, data) in &self.data {
            bytes.push(*id);
            bytes.push(data.len() as u8);
            bytes.extend(data);
        }

        bytes
    }

    /// The SSID as printable text, `<hidden>` if it is empty.
    pub fn ssid(&self) -> String {
        match &self.ssid {
            Some(ssid) if !ssid.is_empty() => String::from_utf8_lossy(ssid).replace('\0', " "),
            Some(_) => "<hidden>".to_string(),
            None => "".to_string(),
        }
    }
}

/// A single entry of the supported rates element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportedRate {
    /// Rate in Mbps.
    pub rate: f32,
    /// Basic rate every station in the BSS has to support. Encoded as the MSB.
    pub mandatory: bool,
}

impl SupportedRate {
    /// Convert the rate from Mbps to 500 kbps units.
    pub fn encode(&self) -> u8 {
        let rate_byte = (self.rate * 2.0) as u8;
        if self.mandatory {
            rate_byte | 0x80
        } else {
            rate_byte
        }
    }

    pub fn decode(byte: u8) -> Self {
        SupportedRate {
            rate: (byte & 0x7F) as f32 / 2.0,
            mandatory: byte & 0x80 != 0,
        }
    }
}
