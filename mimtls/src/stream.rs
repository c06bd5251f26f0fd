//! Blocking TLS stream over a TCP transport.

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use mimtls_core::{Conn, Error, Result};

use crate::ClientConfig;

/// A connected, handshaken TLS stream.
///
/// Construction applies the configured parrot profile, builds the hello
/// state, and runs the overridden client handshake. The configured client
/// flight drives everything after the ClientHello.
#[derive(Debug)]
pub struct TlsStream {
    conn: Conn,
}

impl TlsStream {
    /// Connect to `addr` and perform the mimicked handshake.
    pub fn connect<A: ToSocketAddrs>(config: ClientConfig, addr: A) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        let peer = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_default();
        let reader = stream.try_clone()?;

        let conn = Conn::client(reader, stream, config.config).with_peer(peer);
        let mut state = {
            let mut econf = conn.make_extended_config_parrot(config.profile)?;
            econf.build_state()?
        };
        conn.client_handshake_with_state(&mut state)?;
        Ok(Self { conn })
    }

    /// The underlying connection.
    pub fn conn(&self) -> &Conn {
        &self.conn
    }
}

fn to_io_error(err: Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}

impl Read for TlsStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.conn.read(buf).map_err(to_io_error)
    }
}

impl Write for TlsStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.conn.write(buf).map_err(to_io_error)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
