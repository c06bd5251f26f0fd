//! Record-layer halves of a connection.
//!
//! The inbound half owns the transport reader and may be held across
//! blocking reads; the outbound half buffers serialized records until an
//! explicit flush, which is what lets a failed handshake's pending alert be
//! flushed best-effort. Record protection (once a handshake establishes
//! keys) is the host TLS engine's concern and is applied on its side of the
//! flight seam.

use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::protocol::{ContentType, ProtocolVersion};

/// Maximum plaintext fragment carried by one record.
pub const MAX_FRAGMENT_LEN: usize = 16384;

/// A record as read off the wire, header parsed, payload opaque.
#[derive(Debug, Clone)]
pub struct RawRecord {
    /// Record content type
    pub content_type: ContentType,

    /// Record-layer version field, verbatim
    pub version: u16,

    /// Record payload
    pub payload: Vec<u8>,
}

pub(crate) struct RecordIn {
    reader: Box<dyn Read + Send>,
}

impl RecordIn {
    pub(crate) fn new(reader: Box<dyn Read + Send>) -> Self {
        Self { reader }
    }

    pub(crate) fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.reader.read(buf).map_err(Error::from)
    }

    pub(crate) fn read_record(&mut self) -> Result<RawRecord> {
        let mut header = [0u8; 5];
        self.reader.read_exact(&mut header)?;

        let content_type = ContentType::from_u8(header[0]).ok_or_else(|| {
            Error::Handshake(format!("unknown record content type {}", header[0]))
        })?;
        let version = u16::from_be_bytes([header[1], header[2]]);
        let length = u16::from_be_bytes([header[3], header[4]]) as usize;
        // Allow AEAD expansion over the plaintext limit, per RFC 5246 §6.2.3.
        if length > MAX_FRAGMENT_LEN + 2048 {
            return Err(Error::Handshake(format!("oversized record: {} bytes", length)));
        }

        let mut payload = vec![0u8; length];
        self.reader.read_exact(&mut payload)?;
        Ok(RawRecord {
            content_type,
            version,
            payload,
        })
    }
}

pub(crate) struct RecordOut {
    writer: Box<dyn Write + Send>,
    pending: Vec<u8>,
}

impl RecordOut {
    pub(crate) fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer,
            pending: Vec::new(),
        }
    }

    /// Serialize a record into the pending buffer, fragmenting oversized
    /// payloads.
    pub(crate) fn write_record(
        &mut self,
        content_type: ContentType,
        version: ProtocolVersion,
        payload: &[u8],
    ) -> Result<()> {
        let mut rest = payload;
        loop {
            let take = rest.len().min(MAX_FRAGMENT_LEN);
            self.pending.push(content_type.to_u8());
            self.pending.extend_from_slice(&version.to_u16().to_be_bytes());
            self.pending.extend_from_slice(&(take as u16).to_be_bytes());
            self.pending.extend_from_slice(&rest[..take]);
            rest = &rest[take..];
            if rest.is_empty() {
                return Ok(());
            }
        }
    }

    /// Write out and clear all pending records.
    pub(crate) fn flush(&mut self) -> Result<()> {
        if !self.pending.is_empty() {
            let pending = std::mem::take(&mut self.pending);
            self.writer.write_all(&pending)?;
        }
        self.writer.flush().map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_buffers_until_flush() {
        let sink = SharedBuf::default();
        let mut out = RecordOut::new(Box::new(sink.clone()));

        out.write_record(ContentType::Handshake, ProtocolVersion::Tls10, &[1, 2, 3])
            .unwrap();
        assert!(sink.0.lock().unwrap().is_empty(), "record leaked before flush");

        out.flush().unwrap();
        let written = sink.0.lock().unwrap().clone();
        assert_eq!(written, vec![22, 0x03, 0x01, 0x00, 0x03, 1, 2, 3]);
    }

    #[test]
    fn test_read_record_round_trip() {
        let wire = vec![22, 0x03, 0x03, 0x00, 0x02, 0xAB, 0xCD];
        let mut incoming = RecordIn::new(Box::new(Cursor::new(wire)));
        let record = incoming.read_record().unwrap();

        assert_eq!(record.content_type, ContentType::Handshake);
        assert_eq!(record.version, 0x0303);
        assert_eq!(record.payload, vec![0xAB, 0xCD]);
    }

    #[test]
    fn test_read_record_rejects_unknown_type() {
        let wire = vec![99, 0x03, 0x03, 0x00, 0x00];
        let mut incoming = RecordIn::new(Box::new(Cursor::new(wire)));
        assert!(matches!(incoming.read_record(), Err(Error::Handshake(_))));
    }

    #[test]
    fn test_write_record_fragments_large_payload() {
        let sink = SharedBuf::default();
        let mut out = RecordOut::new(Box::new(sink.clone()));
        let payload = vec![0x42u8; MAX_FRAGMENT_LEN + 10];

        out.write_record(ContentType::ApplicationData, ProtocolVersion::Tls12, &payload)
            .unwrap();
        out.flush().unwrap();

        let written = sink.0.lock().unwrap().clone();
        assert_eq!(written.len(), payload.len() + 2 * 5);
        let second_header = &written[5 + MAX_FRAGMENT_LEN..5 + MAX_FRAGMENT_LEN + 5];
        assert_eq!(second_header, &[23, 0x03, 0x03, 0x00, 0x0a]);
    }
}
