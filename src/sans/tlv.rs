//! Walking the sub-records nested inside vendor elements.
//!
//! Every nested format shares the bounds discipline of
//! [`Elements`](super::element::Elements): read a header, require the declared
//! body to be present, and otherwise stop. Unlike the top-level walk, a
//! violation is reported as a final [`Item::BogusTail`] holding every byte
//! not yet consumed, header included.

use core::marker::PhantomData;

/// The header shape of a nested record format.
pub trait Dialect {
    /// Header size in bytes.
    const HEADER: usize;

    /// Decode a header from exactly [`Self::HEADER`] bytes, returning the record
    /// type and declared body length.
    fn header(r: &[u8]) -> Option<(u16, usize)>;
}

/// Wi-Fi Protected Setup attributes: 2-byte type, 2-byte length, big-endian.
#[derive(Debug)]
pub struct Wps;

impl Dialect for Wps {
    const HEADER: usize = 4;

    fn header(r: &[u8]) -> Option<(u16, usize)> {
        let &[t0, t1, l0, l1] = r.first_chunk::<4>()?;

        Some((u16::from_be_bytes([t0, t1]), u16::from_be_bytes([l0, l1]) as usize))
    }
}

/// Wi-Fi Direct (P2P) attributes: 1-byte type, 2-byte little-endian length.
#[derive(Debug)]
pub struct P2p;

impl Dialect for P2p {
    const HEADER: usize = 3;

    fn header(r: &[u8]) -> Option<(u16, usize)> {
        let &[t, l0, l1] = r.first_chunk::<3>()?;

        Some((t as u16, u16::from_le_bytes([l0, l1]) as usize))
    }
}

/// 802.11 subelements: 1-byte id, 1-byte length.
#[derive(Debug)]
pub struct Subelement;

impl Dialect for Subelement {
    const HEADER: usize = 2;

    fn header(r: &[u8]) -> Option<(u16, usize)> {
        let &[t, l] = r.first_chunk::<2>()?;

        Some((t as u16, l as usize))
    }
}

/// An item produced while walking nested records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    /// A complete record.
    Record { kind: u16, body: &'a [u8] },
    /// Bytes that could not be read as a complete record. Always the last item.
    BogusTail(&'a [u8]),
}

/// Iterator over nested records of a dialect.
#[derive(Debug)]
pub struct Records<'a, D> {
    r: &'a [u8],
    dialect: PhantomData<D>,
}

impl<'a, D: Dialect> Records<'a, D> {
    pub fn new(r: &'a [u8]) -> Self {
        Self {
            r,
            dialect: PhantomData,
        }
    }
}

impl<'a, D: Dialect> Iterator for Records<'a, D> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.r.is_empty() {
            return None;
        }

        let rest = self.r;

        let record = D::header(rest).and_then(|(kind, len)| {
            let body = rest.get(D::HEADER..D::HEADER + len)?;
            Some((kind, body, D::HEADER + len))
        });

        match record {
            Some((kind, body, n)) => {
                self.r = &rest[n..];
                Some(Item::Record { kind, body })
            }
            None => {
                log::debug!("{} byte(s) of nested data do not form a record", rest.len());
                self.r = &[];
                Some(Item::BogusTail(rest))
            }
        }
    }
}

impl<D: Dialect> core::iter::FusedIterator for Records<'_, D> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    #[test]
    fn wps_headers_are_big_endian() {
        let r = [0x10, 0x4a, 0x00, 0x01, 0x10, 0x10, 0x44, 0x00, 0x01, 0x02];
        let items: Vec<_> = Records::<Wps>::new(&r).collect();
        assert_eq!(
            items,
            [
                Item::Record { kind: 0x104a, body: &[0x10] },
                Item::Record { kind: 0x1044, body: &[0x02] },
            ]
        );
    }

    #[test]
    fn p2p_length_is_little_endian() {
        let r = [0x02, 0x02, 0x00, 0x25, 0x08];
        let items: Vec<_> = Records::<P2p>::new(&r).collect();
        assert_eq!(items, [Item::Record { kind: 2, body: &[0x25, 0x08] }]);
    }

    #[test]
    fn overlong_record_becomes_tail() {
        let r = [221, 3, 1, 2, 3, 221, 9, 1];
        let items: Vec<_> = Records::<Subelement>::new(&r).collect();
        assert_eq!(
            items,
            [
                Item::Record { kind: 221, body: &[1, 2, 3] },
                Item::BogusTail(&[221, 9, 1]),
            ]
        );
    }

    #[test]
    fn partial_header_becomes_tail() {
        let r = [0x10, 0x4a, 0x00];
        let items: Vec<_> = Records::<Wps>::new(&r).collect();
        assert_eq!(items, [Item::BogusTail(&[0x10, 0x4a, 0x00])]);
    }

    #[test]
    fn empty_body_record() {
        let items: Vec<_> = Records::<Wps>::new(&[0x10, 0x49, 0x00, 0x00]).collect();
        assert_eq!(items, [Item::Record { kind: 0x1049, body: &[] }]);
    }
}
