use nom::number::complete::le_u16;
use nom::IResult;

use crate::frame::components::SequenceControl;

/// Parse the little-endian sequence control field.
/// The lower 4 bits hold the fragment number, the upper 12 bits the sequence number.
pub fn parse_sequence_control(input: &[u8]) -> IResult<&[u8], SequenceControl> {
    let (remaining, raw) = le_u16(input)?;

    Ok((
        remaining,
        SequenceControl {
            fragment_number: (raw & 0x0F) as u8,
            sequence_number: raw >> 4,
        },
    ))
}
