//! High Efficiency (802.11ax) elements.
//!
//! The HE Capabilities element is decoded by a chain of state tokens, each
//! advanced with exactly the bytes its block occupies:
//!
//! ```text
//! HeCapabilities --[6]--> Phy --[11]--> McsNss --[4]--> McsNss ...
//!                                                  \--> Ppe --[rest]--> PpeThresholds
//! ```
//!
//! The number of HE-MCS/NSS blocks depends on the channel width set decoded
//! from the PHY block, and the PPE state is only reached when the PHY block
//! announces one.

use thiserror::Error;

pub mod capabilities;
pub mod operation;
pub mod ppe;

/// Not enough bytes remained for a fixed-size block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Needed {needed} bytes at offset {offset}, found {remaining}.")]
pub struct Truncated {
    pub offset: usize,
    pub needed: usize,
    pub remaining: usize,
}

/// Take an exact number of bytes from an offset in a slice, advancing the
/// offset.
///
/// The offset is left unchanged when too few bytes remain.
pub fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Truncated> {
    let s = *i;

    let &bytes = r
        .get(s..)
        .and_then(|r| r.first_chunk::<N>())
        .ok_or(Truncated {
            offset: s,
            needed: N,
            remaining: r.len().saturating_sub(s),
        })?;

    *i += N;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_advances_offset() {
        let r = [1, 2, 3, 4, 5];
        let i = &mut 0;
        assert_eq!(take::<2>(&r, i), Ok([1, 2]));
        assert_eq!(take::<3>(&r, i), Ok([3, 4, 5]));
        assert_eq!(*i, 5);
    }

    #[test]
    fn take_past_end() {
        let r = [1, 2, 3];
        let i = &mut 2;
        assert_eq!(
            take::<4>(&r, i),
            Err(Truncated {
                offset: 2,
                needed: 4,
                remaining: 1
            })
        );
        assert_eq!(*i, 2);
    }
}
