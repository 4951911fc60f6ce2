#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceControl {
    /// The 4 bit fragment number from a sequence control field.
    pub fragment_number: u8,
    /// The 12 bit sequence number from a sequence control field.
    pub sequence_number: u16,
}

impl SequenceControl {
    pub fn encode(&self) -> [u8; 2] {
        // The sequence number occupies the upper 12 bits
        let sequence_number_bits = (self.sequence_number & 0x0FFF) << 4;
        // The fragment number occupies the lower 4 bits
        let fragment_number_bits = self.fragment_number & 0x0F;

        let combined = sequence_number_bits | fragment_number_bits as u16;

        combined.to_le_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_sequence_control;

    #[test]
    fn test_encode() {
        let control = SequenceControl {
            fragment_number: 3,
            sequence_number: 0x123,
        };
        assert_eq!(control.encode(), [0x33, 0x12]);

        let (_, parsed) = parse_sequence_control(&control.encode()).unwrap();
        assert_eq!(parsed, control);
    }

    #[test]
    fn test_sequence_number_is_truncated_to_12_bits() {
        let control = SequenceControl {
            fragment_number: 0,
            sequence_number: 0xF001,
        };
        assert_eq!(control.encode(), [0x10, 0x00]);
    }
}
