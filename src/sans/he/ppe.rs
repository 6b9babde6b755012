//! The PPE Thresholds field of the HE Capabilities element.
//!
//! The field opens with a 3-bit NSTS count and a 4-bit RU index bitmask. For
//! each spatial stream and each RU size set in the bitmask, a 6-bit group
//! follows holding two 3-bit constellation indices, PPET16 then PPET8. Groups
//! are packed back to back, so their alignment repeats every 24 bits.

use thiserror::Error;

use crate::sans::bits::{Field, Spanning};

/// An error reading the PPE Thresholds field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The field is empty.
    #[error("PPE thresholds field is empty.")]
    Empty,
    /// The field is too short for the groups its header announces.
    #[error("PPE thresholds need {needed} bits, found {available}.")]
    Truncated { needed: usize, available: usize },
}

const NSTS: Field = Field::new(0, 0x07);
const RU_INDEX_BITMASK: Field = Field::new(0, 0x78);

const HEADER_BITS: usize = 7;
const GROUP_BITS: usize = 6;

/// Positions of the PPET16 and PPET8 indices for each of the four alignments
/// of a group, relative to the first byte of its 3-byte period.
const PHASES: [(Spanning, Spanning); 4] = {
    const fn one(byte: usize, mask: u8) -> Spanning {
        Spanning::new(Field::new(byte, mask), Field::new(byte, 0))
    }

    [
        (Spanning::new(Field::new(0, 0x80), Field::new(1, 0x03)), one(1, 0x1c)),
        (one(1, 0xe0), one(2, 0x07)),
        (one(2, 0x38), Spanning::new(Field::new(2, 0xc0), Field::new(3, 0x01))),
        (one(3, 0x0e), one(3, 0x70)),
    ]
};

/// RU allocation sizes, indexed by bit position in the RU index bitmask.
pub const RU_ALLOCATIONS: [&str; 4] = ["242", "448", "996", "2x996"];

/// A 3-bit constellation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constellation(pub u8);

impl Constellation {
    pub fn name(self) -> &'static str {
        match self.0 & 0x07 {
            0 => "BPSK",
            1 => "QPSK",
            2 => "QAM_16",
            3 => "QAM_64",
            4 => "QAM_256",
            5 => "QAM_1024",
            6 => "RESERVED",
            _ => "NONE",
        }
    }
}

/// A single threshold entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    /// Zero-based spatial stream index.
    pub nss: u8,
    /// Index into [`RU_ALLOCATIONS`].
    pub ru: u8,
    pub ppet16: Constellation,
    pub ppet8: Constellation,
}

/// A validated PPE Thresholds field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpeThresholds<'a> {
    r: &'a [u8],
}

impl<'a> PpeThresholds<'a> {
    /// Validate that `r` holds every group its header announces.
    pub fn new(r: &'a [u8]) -> Result<Self, Error> {
        let &first = r.first().ok_or(Error::Empty)?;

        let nsts = NSTS.read(&[first]) as usize;
        let ru_mask = RU_INDEX_BITMASK.read(&[first]);

        let needed = HEADER_BITS + GROUP_BITS * (nsts + 1) * ru_mask.count_ones() as usize;
        let available = 8 * r.len();

        if needed > available {
            log::debug!("PPE thresholds need {needed} bits, found {available}");
            Err(Error::Truncated { needed, available })?;
        }

        Ok(Self { r })
    }

    /// Number of spatial streams covered, minus one.
    pub fn nsts(&self) -> u8 {
        NSTS.read(self.r)
    }

    pub fn ru_mask(&self) -> u8 {
        RU_INDEX_BITMASK.read(self.r)
    }

    /// Read the `index`th group of the field.
    fn group(&self, index: usize) -> (Constellation, Constellation) {
        let base = 3 * (index / 4);
        let (ppet16, ppet8) = PHASES[index % 4];

        let r = self.r.get(base..).unwrap_or_default();

        (
            Constellation(ppet16.read(r) as u8),
            Constellation(ppet8.read(r) as u8),
        )
    }

    /// Iterate over every entry, by spatial stream then RU size.
    pub fn iter(&self) -> impl Iterator<Item = Threshold> + '_ {
        let ru_mask = self.ru_mask();

        (0..=self.nsts())
            .flat_map(move |nss| {
                (0..4u8)
                    .filter(move |&ru| ru_mask & (1 << ru) != 0)
                    .map(move |ru| (nss, ru))
            })
            .enumerate()
            .map(move |(index, (nss, ru))| {
                let (ppet16, ppet8) = self.group(index);
                Threshold {
                    nss,
                    ru,
                    ppet16,
                    ppet8,
                }
            })
    }
}
