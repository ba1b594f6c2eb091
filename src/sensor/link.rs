//! Serial transport seam.
//!
//! The game loop only ever asks "is a full line waiting?". Reads must not
//! block past the current tick, so the port is probed for pending bytes
//! before any read is issued.

use std::io::{self, Read};
use std::time::Duration;

use serialport::SerialPort;

/// Line-oriented, non-blocking transport to the load-cell controller.
pub trait SerialLink {
    /// Return one complete pending line (without the terminator), or `None`
    /// when no full line is waiting. Must not block past the current tick.
    fn try_read_line(&mut self) -> io::Result<Option<String>>;

    /// Release the underlying transport. Idempotent.
    fn close(&mut self);
}

/// Transport over a real serial port.
pub struct SerialPortLink {
    port: Option<Box<dyn SerialPort>>,
    /// Bytes received but not yet terminated by a newline.
    pending: Vec<u8>,
}

impl SerialPortLink {
    /// Open the given port. Returns an error when the device is missing or
    /// busy; callers are expected to degrade to [`NullLink`].
    pub fn open(path: &str, baud: u32) -> Result<Self, serialport::Error> {
        let port = serialport::new(path, baud)
            // The timeout only bounds reads we already know have data.
            .timeout(Duration::from_millis(5))
            .open()?;
        log::info!("connected to load cell on {path} at {baud} baud");
        Ok(Self {
            port: Some(port),
            pending: Vec::new(),
        })
    }

    /// Pop the first complete line out of the pending buffer.
    fn take_line(&mut self) -> Option<String> {
        let nl = self.pending.iter().position(|&b| b == b'\n')?;
        let line: Vec<u8> = self.pending.drain(..=nl).collect();
        let text = String::from_utf8_lossy(&line);
        Some(text.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl SerialLink for SerialPortLink {
    fn try_read_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.take_line() {
            return Ok(Some(line));
        }

        let Some(port) = self.port.as_mut() else {
            return Ok(None);
        };

        let waiting = port
            .bytes_to_read()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        if waiting == 0 {
            return Ok(None);
        }

        let mut buf = vec![0u8; waiting as usize];
        let n = port.read(&mut buf)?;
        self.pending.extend_from_slice(&buf[..n]);

        Ok(self.take_line())
    }

    fn close(&mut self) {
        if self.port.take().is_some() {
            log::info!("serial link closed");
        }
    }
}

impl SerialLink for Box<dyn SerialLink> {
    fn try_read_line(&mut self) -> io::Result<Option<String>> {
        (**self).try_read_line()
    }

    fn close(&mut self) {
        (**self).close();
    }
}

/// Transport that never produces data. Used when the port cannot be opened:
/// the game stays playable but only ends by timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLink;

impl SerialLink for NullLink {
    fn try_read_line(&mut self) -> io::Result<Option<String>> {
        Ok(None)
    }

    fn close(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_link_never_yields_data() {
        let mut link = NullLink;
        for _ in 0..10 {
            assert_eq!(link.try_read_line().unwrap(), None);
        }
        link.close();
        link.close();
    }
}
