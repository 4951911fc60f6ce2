use std::io;
use std::os::fd::OwnedFd;

#[cfg(target_os = "linux")]
pub use linux_impl::{interface_index, open_socket_tx, write_packet};

#[cfg(not(target_os = "linux"))]
pub use unsupported_impl::{interface_index, open_socket_tx, write_packet};

#[cfg(target_os = "linux")]
mod linux_impl {
    use std::{
        io, mem,
        os::fd::{AsRawFd, OwnedFd},
    };

    use libc::{sockaddr_ll, ETH_ALEN, ETH_P_ALL, SOL_SOCKET, SO_PRIORITY};
    use log::debug;
    use nix::{
        net::if_::if_nametoindex,
        sys::socket::{socket, AddressFamily, SockFlag, SockProtocol, SockType},
    };

    /// Link type of an interface in monitor mode that expects radiotap-prefixed frames.
    const ARPHRD_IEEE80211_RADIOTAP: u16 = 803;

    pub fn interface_index(name: &str) -> io::Result<i32> {
        let index = if_nametoindex(name)?;
        i32::try_from(index)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "interface index out of range"))
    }

    /// Open a blocking AF_PACKET socket bound to `ifindex`.
    ///
    /// Fails unless the interface is in monitor mode.
    pub fn open_socket_tx(ifindex: i32) -> io::Result<OwnedFd> {
        let mut saddr: sockaddr_ll = unsafe { mem::zeroed() };
        let prioval: libc::c_int = 20;

        let fd_socket_tx = socket(
            AddressFamily::Packet,
            SockType::Raw,
            SockFlag::SOCK_CLOEXEC,
            SockProtocol::EthAll,
        )?;

        let ret = unsafe {
            libc::setsockopt(
                fd_socket_tx.as_raw_fd(),
                SOL_SOCKET,
                SO_PRIORITY,
                &prioval as *const _ as *const libc::c_void,
                mem::size_of::<libc::c_int>() as libc::socklen_t,
            )
        };
        if ret < 0 {
            // Priorities above 6 need CAP_NET_ADMIN; sending works without it.
            debug!(
                "Failed to set SO_PRIORITY: {}",
                io::Error::last_os_error()
            );
        }

        saddr.sll_family = libc::AF_PACKET as u16;
        saddr.sll_protocol = (ETH_P_ALL as u16).to_be();
        saddr.sll_ifindex = ifindex;
        saddr.sll_halen = ETH_ALEN as u8;

        let bind_ret = unsafe {
            libc::bind(
                fd_socket_tx.as_raw_fd(),
                (&saddr as *const libc::sockaddr_ll).cast(),
                mem::size_of::<libc::sockaddr_ll>() as libc::socklen_t,
            )
        };
        if bind_ret < 0 {
            return Err(io::Error::last_os_error());
        }

        let hatype = bound_link_type(&fd_socket_tx)?;
        if hatype != ARPHRD_IEEE80211_RADIOTAP {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "interface is not in monitor mode (link type {}, expected {})",
                    hatype, ARPHRD_IEEE80211_RADIOTAP
                ),
            ));
        }

        debug!(
            "Opened TX socket {} on ifindex {}",
            fd_socket_tx.as_raw_fd(),
            ifindex
        );
        Ok(fd_socket_tx)
    }

    /// Hardware type of the interface a packet socket is bound to.
    ///
    /// The kernel only fills `sll_addr` up to the hardware address length, so the returned
    /// length is usually shorter than `sockaddr_ll`.
    fn bound_link_type(fd: &OwnedFd) -> io::Result<u16> {
        let mut saddr: sockaddr_ll = unsafe { mem::zeroed() };
        let mut len = mem::size_of::<sockaddr_ll>() as libc::socklen_t;

        let ret = unsafe {
            libc::getsockname(
                fd.as_raw_fd(),
                (&mut saddr as *mut libc::sockaddr_ll).cast(),
                &mut len,
            )
        };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }

        let header_len = mem::size_of::<sockaddr_ll>() - mem::size_of_val(&saddr.sll_addr);
        if (len as usize) < header_len || saddr.sll_family != libc::AF_PACKET as u16 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "socket is not bound to a packet interface",
            ));
        }

        Ok(saddr.sll_hatype)
    }

    /// Write one frame. Blocks until the kernel takes it; a partial write counts as failure.
    pub fn write_packet(fd: &OwnedFd, packet: &[u8]) -> io::Result<()> {
        let bytes_written = unsafe {
            libc::write(
                fd.as_raw_fd(),
                packet.as_ptr() as *const libc::c_void,
                packet.len(),
            )
        };

        if bytes_written < 0 {
            return Err(io::Error::last_os_error());
        }

        if bytes_written as usize != packet.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!(
                    "short write: {} of {} bytes",
                    bytes_written,
                    packet.len()
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(not(target_os = "linux"))]
mod unsupported_impl {
    use std::{io, os::fd::OwnedFd};

    // Injection goes through AF_PACKET, which only exists on Linux.

    pub fn interface_index(_name: &str) -> io::Result<i32> {
        Err(unsupported())
    }

    pub fn open_socket_tx(_ifindex: i32) -> io::Result<OwnedFd> {
        Err(unsupported())
    }

    pub fn write_packet(_fd: &OwnedFd, _packet: &[u8]) -> io::Result<()> {
        Err(unsupported())
    }

    fn unsupported() -> io::Error {
        io::Error::new(
            io::ErrorKind::Unsupported,
            "raw frame injection is only supported on Linux",
        )
    }
}

/// Resolve `name` and open an injection socket on it.
pub fn open_interface(name: &str) -> io::Result<OwnedFd> {
    let ifindex = interface_index(name)?;
    open_socket_tx(ifindex)
}
