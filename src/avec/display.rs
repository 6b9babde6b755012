//! Display adapters for raw bytes.

use core::fmt::{self, Display, Formatter, Write};

/// Bytes as space-prefixed lowercase hex pairs, e.g. ` 00 50 f2`.
#[derive(Debug, Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl Display for Hex<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, " {b:02x}"))
    }
}

/// An SSID, with unprintable bytes, backslashes and leading or trailing
/// spaces escaped as `\xNN`.
#[derive(Debug, Clone, Copy)]
pub struct Ssid<'a>(pub &'a [u8]);

impl Display for Ssid<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let last = self.0.len().saturating_sub(1);

        for (i, &b) in self.0.iter().enumerate() {
            match b {
                b' ' if i != 0 && i != last => f.write_str(" ")?,
                b'\\' | b' ' => write!(f, "\\x{b:02x}")?,
                _ if b.is_ascii_graphic() => write!(f, "{}", b as char)?,
                _ => write!(f, "\\x{b:02x}")?,
            }
        }

        Ok(())
    }
}

/// A hardware address, e.g. `02:00:5e:10:00:01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mac(pub [u8; 6]);

impl Display for Mac {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// A byte string up to its first NUL, with invalid UTF-8 replaced.
#[derive(Debug, Clone, Copy)]
pub struct Text<'a>(pub &'a [u8]);

impl Display for Text<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(self.0.len());

        for chunk in self.0[..end].utf8_chunks() {
            f.write_str(chunk.valid())?;

            if !chunk.invalid().is_empty() {
                f.write_str("\u{fffd}")?;
            }
        }

        Ok(())
    }
}

/// Line starts for a list continuing the element name: the first line is
/// written as is, and every later one gets an extra tab.
#[derive(Debug)]
pub struct Lines {
    first: bool,
}

impl Lines {
    pub fn new() -> Self {
        Self { first: true }
    }

    pub fn next(&mut self, f: &mut dyn Write) -> fmt::Result {
        match core::mem::replace(&mut self.first, false) {
            true => Ok(()),
            false => f.write_str("\t"),
        }
    }
}

impl Default for Lines {
    fn default() -> Self {
        Self::new()
    }
}
