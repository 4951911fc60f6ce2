use crate::frame::components::MacAddress;

/// Helper trait to easily access source, destination and bssid on frames.
pub trait Addresses {
    /// Returns the sender of the Frame.
    fn src(&self) -> Option<&MacAddress>;

    /// Returns the destination of the Frame.
    /// This should always be present.
    fn dest(&self) -> &MacAddress;

    /// The BSSID the frame belongs to.
    fn bssid(&self) -> Option<&MacAddress>;
}
