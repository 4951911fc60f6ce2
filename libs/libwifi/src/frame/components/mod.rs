mod frame_control;
mod header;
mod mac_address;
mod sequence_control;
mod station_info;

pub use frame_control::FrameControl;
pub use header::ManagementHeader;
pub use mac_address::*;
pub use sequence_control::SequenceControl;
pub use station_info::*;
