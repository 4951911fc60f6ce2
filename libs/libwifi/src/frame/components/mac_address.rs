use std::fmt;

/// This is our representation of a MAC-address
///
/// ```
/// use libwifi::frame::components::MacAddress;
///
/// let address = MacAddress([255, 255, 255, 255, 255, 255]);
/// println!("{}", address.is_broadcast());
/// // -> true
/// ```
///
#[derive(Clone, Debug, Eq, PartialEq, Copy, Ord, PartialOrd, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    pub fn broadcast() -> Self {
        MacAddress([255, 255, 255, 255, 255, 255])
    }

    /// Encode mac address for network.
    pub fn encode(&self) -> [u8; 6] {
        self.0
    }

    /// Check if this is a locally administered address
    pub fn is_private(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Check if this is a multicast address
    pub fn is_mcast(&self) -> bool {
        self.0[0] % 2 == 1
    }

    /// Check whether this MAC addresses the whole network.
    pub fn is_broadcast(&self) -> bool {
        self.0 == [255, 255, 255, 255, 255, 255]
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5],
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MacParseError {
    InvalidDigit,
    InvalidLength,
}

impl fmt::Display for MacParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacParseError::InvalidDigit => write!(f, "mac address contains a non-hex octet"),
            MacParseError::InvalidLength => write!(f, "mac address must consist of six octets"),
        }
    }
}

impl std::error::Error for MacParseError {}

impl std::str::FromStr for MacAddress {
    type Err = MacParseError;

    /// Accepts `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff` and `aabbccddeeff`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut array = [0u8; 6];

        let bytes: Vec<&str> = if input.contains(':') {
            input.split(':').collect()
        } else if input.contains('-') {
            input.split('-').collect()
        } else if input.len() == 12 && input.is_ascii() {
            input
                .as_bytes()
                .chunks(2)
                .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
                .collect()
        } else {
            return Err(MacParseError::InvalidLength);
        };

        if bytes.len() != 6 {
            return Err(MacParseError::InvalidLength);
        }

        for (count, byte) in bytes.iter().enumerate() {
            // from_str_radix tolerates a leading '+', which has no place in an octet.
            if byte.len() != 2 || !byte.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(MacParseError::InvalidDigit);
            }
            array[count] = u8::from_str_radix(byte, 16).map_err(|_| MacParseError::InvalidDigit)?;
        }

        Ok(MacAddress(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separators() {
        let expected = MacAddress([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
        assert_eq!("02:00:00:00:00:01".parse::<MacAddress>(), Ok(expected));
        assert_eq!("02-00-00-00-00-01".parse::<MacAddress>(), Ok(expected));
        assert_eq!("020000000001".parse::<MacAddress>(), Ok(expected));
        assert_eq!(
            "AA:bb:CC:dd:EE:ff".parse::<MacAddress>(),
            Ok(MacAddress([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "02:00:00:00:00".parse::<MacAddress>(),
            Err(MacParseError::InvalidLength)
        );
        assert_eq!(
            "02:00:00:00:00:01:02".parse::<MacAddress>(),
            Err(MacParseError::InvalidLength)
        );
        assert_eq!("".parse::<MacAddress>(), Err(MacParseError::InvalidLength));
        assert_eq!(
            "zz:00:00:00:00:01".parse::<MacAddress>(),
            Err(MacParseError::InvalidDigit)
        );
        assert_eq!(
            "2:00:00:00:00:01".parse::<MacAddress>(),
            Err(MacParseError::InvalidDigit)
        );
        assert_eq!(
            "+2:00:00:00:00:01".parse::<MacAddress>(),
            Err(MacParseError::InvalidDigit)
        );
        assert_eq!(
            "+20000000001".parse::<MacAddress>(),
            Err(MacParseError::InvalidDigit)
        );
    }

    #[test]
    fn test_display() {
        let mac = MacAddress([0x02, 0xab, 0x00, 0x10, 0xff, 0x01]);
        assert_eq!(mac.to_string(), "02:ab:00:10:ff:01");
        assert_eq!(mac.to_string().parse::<MacAddress>(), Ok(mac));
    }

    #[test]
    fn test_flags() {
        assert!(MacAddress::broadcast().is_broadcast());
        assert!(MacAddress::broadcast().is_mcast());

        let local = MacAddress([0x02, 0, 0, 0, 0, 1]);
        assert!(local.is_private());
        assert!(!local.is_mcast());
        assert!(!local.is_broadcast());
    }
}
