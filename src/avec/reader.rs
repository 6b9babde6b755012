//! Reader-based renderer implementation.
//!
//! _Requires Cargo feature `std`._

use std::{
    io::{self, ErrorKind, Read},
    string::String,
    vec::Vec,
};

use thiserror::Error;

use super::{Options, slice};

extern crate std;

/// Errors occurring while rendering from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader or writer.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A decoder failed to write its output.
    #[error("Failed to format rendered output.")]
    Fmt(#[from] core::fmt::Error),
}

/// Render every element read from a reader, writing text to a writer.
///
/// Elements are read until the end of the reader. An element cut short by the
/// end is dropped, as is any element after it. This method is also
/// re-exported as `elemental::avec::render_reader`.
///
/// _Requires Cargo feature `std`._
pub fn render(r: &mut impl Read, options: &Options, w: &mut impl io::Write) -> Result<(), Error> {
    let ies = collect(r)?;

    let mut s = String::new();
    slice::render(&ies, options, &mut s)?;

    w.write_all(s.as_bytes())?;

    Ok(())
}

/// Read whole elements into a buffer, stopping at the end of the reader.
fn collect(r: &mut impl Read) -> Result<Vec<u8>, Error> {
    let mut ies = Vec::new();

    loop {
        let Some(header @ [_, len]) = take::<2>(r)? else {
            break;
        };

        let mut body = std::vec![0; len as usize];

        match r.read_exact(&mut body) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                log::debug!("element {} cut short by end of input", header[0]);
                break;
            }
            Err(e) => Err(e)?,
        }

        ies.extend_from_slice(&header);
        ies.extend_from_slice(&body);
    }

    Ok(ies)
}

/// Take an exact number of bytes from a reader, or `None` at its end.
fn take<const N: usize>(r: &mut impl Read) -> Result<Option<[u8; N]>, Error> {
    let mut buf = [0; N];

    match r.read_exact(&mut buf) {
        Ok(()) => Ok(Some(buf)),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e)?,
    }
}
