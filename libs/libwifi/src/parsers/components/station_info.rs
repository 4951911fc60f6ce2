use nom::bytes::complete::take;
use nom::number::complete::u8 as get_u8;
use nom::sequence::tuple;
use nom::IResult;

use crate::frame::components::{
    StationInfo, SupportedRate, ELEMENT_SSID, ELEMENT_SUPPORTED_RATES,
};

/// Parse all tagged information elements until the input is exhausted.
///
/// Elements are `id | length | payload`. Empty payloads are kept, an empty SSID element is how
/// hidden networks announce themselves.
pub fn parse_station_info(mut input: &[u8]) -> IResult<&[u8], StationInfo> {
    let mut station_info = StationInfo::default();

    let mut element_id;
    let mut length;
    let mut data;
    while !input.is_empty() {
        (input, (element_id, length)) = tuple((get_u8, get_u8))(input)?;
        (input, data) = take(length)(input)?;
        match element_id {
            ELEMENT_SSID => station_info.ssid = Some(data.to_vec()),
            ELEMENT_SUPPORTED_RATES => {
                station_info.supported_rates =
                    data.iter().copied().map(SupportedRate::decode).collect()
            }
            _ => station_info.data.push((element_id, data.to_vec())),
        }
    }

    Ok((input, station_info))
}
