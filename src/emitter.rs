use std::io;
use std::os::fd::OwnedFd;

use libwifi::frame::components::MacAddress;
use log::debug;

use crate::error::EmitError;
use crate::rawsocks::{open_interface, write_packet};
use crate::tx::{build_beacon, MAX_ELEMENT_LEN};

/// Opens interfaces for frame injection.
pub trait Injector {
    type Handle: Injection;

    fn open(&self, interface: &str) -> io::Result<Self::Handle>;
}

/// An interface opened for injection. Dropping the handle releases it.
pub trait Injection {
    /// Hand one complete frame to the link layer.
    fn transmit(&mut self, frame: &[u8]) -> io::Result<()>;
}

/// Injects through an AF_PACKET socket on a monitor mode interface.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawSocketInjector;

#[derive(Debug)]
pub struct RawSocket {
    fd: OwnedFd,
}

impl Injector for RawSocketInjector {
    type Handle = RawSocket;

    fn open(&self, interface: &str) -> io::Result<RawSocket> {
        open_interface(interface).map(|fd| RawSocket { fd })
    }
}

impl Injection for RawSocket {
    fn transmit(&mut self, frame: &[u8]) -> io::Result<()> {
        write_packet(&self.fd, frame)
    }
}

/// Build a single beacon for `ssid` originating from `mac` and send it once on `interface`.
///
/// The frame is complete before the interface is touched, so an unusable address or SSID never
/// opens a handle. `Ok` only means the frame was handed to the link layer.
pub fn emit_beacon<I: Injector>(
    injector: &I,
    interface: &str,
    ssid: &[u8],
    mac: &str,
) -> Result<(), EmitError> {
    let source: MacAddress = mac
        .parse()
        .map_err(|source| EmitError::InvalidHardwareAddress {
            input: mac.to_string(),
            source,
        })?;

    if ssid.len() > MAX_ELEMENT_LEN {
        return Err(EmitError::SsidTooLong(ssid.len()));
    }

    let frame = build_beacon(&source, ssid);
    debug!(
        "Beacon from {} ({} bytes): {}",
        source,
        frame.len(),
        slice_to_hex_string(&frame)
    );

    let mut handle = injector
        .open(interface)
        .map_err(|source| EmitError::Interface {
            interface: interface.to_string(),
            source,
        })?;

    handle
        .transmit(&frame)
        .map_err(|source| EmitError::Transmission {
            interface: interface.to_string(),
            source,
        })?;

    debug!("Beacon handed to {}", interface);
    Ok(())
}

fn slice_to_hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Records every call; `fail_transmit` makes the handle reject frames.
    #[derive(Default)]
    struct Recorder {
        opened: RefCell<Vec<String>>,
        sent: Rc<RefCell<Vec<Vec<u8>>>>,
        fail_transmit: bool,
    }

    struct RecordingHandle {
        sent: Rc<RefCell<Vec<Vec<u8>>>>,
        fail: bool,
    }

    impl Injector for Recorder {
        type Handle = RecordingHandle;

        fn open(&self, interface: &str) -> io::Result<RecordingHandle> {
            self.opened.borrow_mut().push(interface.to_string());
            if interface != "wlan0mon" {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no such device"));
            }
            Ok(RecordingHandle {
                sent: Rc::clone(&self.sent),
                fail: self.fail_transmit,
            })
        }
    }

    impl Injection for RecordingHandle {
        fn transmit(&mut self, frame: &[u8]) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::from_raw_os_error(libc::ENETDOWN));
            }
            self.sent.borrow_mut().push(frame.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_single_transmission() {
        let recorder = Recorder::default();
        emit_beacon(&recorder, "wlan0mon", b"TestNet", "02:00:00:00:00:01").unwrap();

        assert_eq!(*recorder.opened.borrow(), vec!["wlan0mon".to_string()]);
        let sent = recorder.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], build_beacon(&MacAddress([2, 0, 0, 0, 0, 1]), b"TestNet"));
    }

    #[test]
    fn test_invalid_mac_never_opens() {
        let recorder = Recorder::default();
        let result = emit_beacon(&recorder, "wlan0mon", b"TestNet", "02:00:00:00:00");

        assert!(matches!(
            result,
            Err(EmitError::InvalidHardwareAddress { .. })
        ));
        assert!(recorder.opened.borrow().is_empty());
        assert!(recorder.sent.borrow().is_empty());
    }

    #[test]
    fn test_ssid_too_long() {
        let recorder = Recorder::default();
        let ssid = vec![b'a'; MAX_ELEMENT_LEN + 1];
        let result = emit_beacon(&recorder, "wlan0mon", &ssid, "02:00:00:00:00:01");

        assert!(matches!(result, Err(EmitError::SsidTooLong(256))));
        assert!(recorder.opened.borrow().is_empty());
    }

    #[test]
    fn test_longest_ssid_is_accepted() {
        let recorder = Recorder::default();
        let ssid = vec![b'a'; MAX_ELEMENT_LEN];
        emit_beacon(&recorder, "wlan0mon", &ssid, "02:00:00:00:00:01").unwrap();

        assert_eq!(recorder.sent.borrow().len(), 1);
    }

    #[test]
    fn test_unknown_interface() {
        let recorder = Recorder::default();
        let result = emit_beacon(&recorder, "nope0", b"TestNet", "02:00:00:00:00:01");

        match result {
            Err(EmitError::Interface { interface, source }) => {
                assert_eq!(interface, "nope0");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert!(recorder.sent.borrow().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_raw_socket_missing_interface() {
        let result = emit_beacon(
            &RawSocketInjector,
            "doesnotexist0",
            b"TestNet",
            "02:00:00:00:00:01",
        );

        match result {
            Err(EmitError::Interface { interface, source }) => {
                assert_eq!(interface, "doesnotexist0");
                assert_eq!(source.raw_os_error(), Some(libc::ENODEV));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_transmission_rejected() {
        let recorder = Recorder {
            fail_transmit: true,
            ..Default::default()
        };
        let result = emit_beacon(&recorder, "wlan0mon", b"TestNet", "02:00:00:00:00:01");

        assert!(matches!(result, Err(EmitError::Transmission { .. })));
        assert!(recorder.sent.borrow().is_empty());
    }

    #[test]
    fn test_error_messages() {
        let recorder = Recorder::default();
        let err = emit_beacon(&recorder, "nope0", b"x", "02:00:00:00:00:01").unwrap_err();
        assert!(err.to_string().starts_with("cannot open interface nope0"));

        let err = emit_beacon(&recorder, "wlan0mon", b"x", "bogus").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid hardware address \"bogus\": mac address must consist of six octets"
        );
    }
}
