mod beacon;

pub use beacon::{Beacon, CAPABILITY_ESS, CAPABILITY_IBSS};
