pub mod protocol_tests;
pub mod registry_tests;

#[cfg(test)]
pub mod setup {
    use lazy_static::lazy_static;
    use std::net::UdpSocket;
    use std::sync::{Mutex, MutexGuard};

    use crate::platform::SocketHandle;

    // Option tests change state on live sockets and the protocol tests walk a
    // process-wide cursor, so they run one at a time.
    lazy_static! {
        static ref TESTMUTEX: Mutex<bool> = Mutex::new(true);
    }

    /// Takes the test lock and brings the network stack up.
    pub fn lock_and_init() -> MutexGuard<'static, bool> {
        let thelock = TESTMUTEX.lock().unwrap_or_else(|e| {
            TESTMUTEX.clear_poison();
            e.into_inner()
        });
        crate::init().unwrap();
        thelock
    }

    /// A bound loopback UDP socket; the test keeps it alive for as long as it
    /// uses the handle.
    pub fn udp_socket() -> UdpSocket {
        UdpSocket::bind("127.0.0.1:0").unwrap()
    }

    #[cfg(unix)]
    pub fn handle_of(socket: &UdpSocket) -> SocketHandle {
        use std::os::unix::io::AsRawFd;
        socket.as_raw_fd()
    }

    #[cfg(windows)]
    pub fn handle_of(socket: &UdpSocket) -> SocketHandle {
        use std::os::windows::io::AsRawSocket;
        socket.as_raw_socket()
    }

    /// A handle no open socket uses.
    #[cfg(unix)]
    pub fn bad_handle() -> SocketHandle {
        -1
    }

    #[cfg(windows)]
    pub fn bad_handle() -> SocketHandle {
        // INVALID_SOCKET
        !0
    }
}
