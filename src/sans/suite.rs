//! Cipher and authentication (AKM) suite selectors.
//!
//! A selector is a 3-byte OUI followed by a 1-byte suite type. Names are
//! resolved per organization, so the same type number can mean different
//! things under different OUIs.

use core::fmt::{self, Display, Formatter};

use tartan_bitfield::bitfield;

use super::element::Oui;

/// A suite selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suite {
    pub oui: Oui,
    pub kind: u8,
}

impl Suite {
    pub fn new(r: [u8; 4]) -> Self {
        let [a, b, c, kind] = r;

        Self {
            oui: Oui([a, b, c]),
            kind,
        }
    }

    /// The name of this selector read as a cipher suite.
    pub fn cipher(self) -> Option<&'static str> {
        Some(match (self.oui, self.kind) {
            (Oui::MSFT | Oui::IEEE, 0) => "Use group cipher suite",
            (Oui::MSFT | Oui::IEEE, 1) => "WEP-40",
            (Oui::MSFT | Oui::IEEE, 2) => "TKIP",
            (Oui::MSFT | Oui::IEEE, 4) => "CCMP",
            (Oui::MSFT | Oui::IEEE, 5) => "WEP-104",
            (Oui::IEEE, 6) => "AES-128-CMAC",
            (Oui::IEEE, 7) => "NO-GROUP",
            (Oui::IEEE, 8) => "GCMP",
            _ => None?,
        })
    }

    /// The name of this selector read as an authentication and key management
    /// suite.
    pub fn akm(self) -> Option<&'static str> {
        Some(match (self.oui, self.kind) {
            (Oui::MSFT | Oui::IEEE, 1) => "IEEE 802.1X",
            (Oui::MSFT | Oui::IEEE, 2) => "PSK",
            (Oui::IEEE, 3) => "FT/IEEE 802.1X",
            (Oui::IEEE, 4) => "FT/PSK",
            (Oui::IEEE, 5) => "IEEE 802.1X/SHA-256",
            (Oui::IEEE, 6) => "PSK/SHA-256",
            (Oui::IEEE, 7) => "TDLS/TPK",
            (Oui::IEEE, 8) => "SAE",
            (Oui::IEEE, 9) => "FT/SAE",
            (Oui::IEEE, 11) => "IEEE 802.1X/SUITE-B",
            (Oui::IEEE, 12) => "IEEE 802.1X/SUITE-B-192",
            (Oui::IEEE, 13) => "FT/IEEE 802.1X/SHA-384",
            (Oui::IEEE, 14) => "FILS/SHA-256",
            (Oui::IEEE, 15) => "FILS/SHA-384",
            (Oui::IEEE, 16) => "FT/FILS/SHA-256",
            (Oui::IEEE, 17) => "FT/FILS/SHA-384",
            (Oui::IEEE, 18) => "OWE",
            (Oui::WFA, 1) => "OSEN",
            (Oui::WFA, 2) => "DPP",
            _ => None?,
        })
    }
}

/// Raw form used for selectors without a known name.
impl Display for Suite {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.oui.0;
        write!(f, "{a:02x}-{b:02x}-{c:02x}:{}", self.kind)
    }
}

/// Read a little-endian count followed by that many selectors.
///
/// Returns the selectors' bytes and the remainder, or `None` when the count
/// is missing or declares more selectors than are present.
pub fn list(r: &[u8]) -> Option<(Suites<'_>, &[u8])> {
    let (&count, rest) = r.split_first_chunk::<2>()?;
    let count = u16::from_le_bytes(count) as usize;

    let (suites, rest) = rest.split_at_checked(count * 4)?;

    Some((Suites(suites.chunks_exact(4)), rest))
}

/// Iterator over a list of selectors.
#[derive(Debug, Clone)]
pub struct Suites<'a>(core::slice::ChunksExact<'a, u8>);

impl Iterator for Suites<'_> {
    type Item = Suite;

    fn next(&mut self) -> Option<Self::Item> {
        let &chunk = self.0.next()?.first_chunk::<4>()?;
        Some(Suite::new(chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Suites<'_> {}

bitfield! {
    /// The RSN capabilities field.
    pub struct Capabilities(u16) {
        [0] pub pre_auth,
        [1] pub no_pairwise,
        [2..4] pub ptksa_replay_counter: u8,
        [4..6] pub gtksa_replay_counter: u8,
        [6] pub mfp_required,
        [7] pub mfp_capable,
        [9] pub peerkey_enabled,
        [10] pub spp_amsdu_capable,
        [11] pub spp_amsdu_required,
        [13] pub extended_key_id,
    }
}

impl Capabilities {
    pub fn from_le_bytes(r: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(r))
    }

    pub fn bits(&self) -> u16 {
        self.0
    }
}

/// The number of replay counters encoded in a 2-bit replay counter field.
pub fn replay_counters(v: u8) -> u8 {
    match v & 0b11 {
        0 => 1,
        1 => 2,
        2 => 4,
        _ => 16,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn names_depend_on_organization() {
        assert_eq!(Suite::new([0x00, 0x0f, 0xac, 8]).cipher(), Some("GCMP"));
        assert_eq!(Suite::new([0x00, 0x50, 0xf2, 8]).cipher(), None);
        assert_eq!(Suite::new([0x50, 0x6f, 0x9a, 1]).akm(), Some("OSEN"));
        assert_eq!(Suite::new([0x00, 0x0f, 0xac, 8]).akm(), Some("SAE"));
    }

    #[test]
    fn unknown_suite_display() {
        assert_eq!(Suite::new([0x00, 0x10, 0x18, 7]).to_string(), "00-10-18:7");
    }

    #[test]
    fn list_checks_declared_count() {
        let r = [2, 0, 0x00, 0x0f, 0xac, 4, 0x00, 0x0f, 0xac, 2, 0xff];
        let (suites, rest) = list(&r).unwrap();
        assert_eq!(suites.len(), 2);
        assert_eq!(rest, &[0xff]);

        assert!(list(&[3, 0, 0x00, 0x0f, 0xac, 4]).is_none());
        assert!(list(&[1]).is_none());
    }

    #[test]
    fn capabilities_fields() {
        let capabilities = Capabilities::from_le_bytes([0xcc, 0x00]);
        assert!(!capabilities.pre_auth());
        assert_eq!(replay_counters(capabilities.ptksa_replay_counter()), 16);
        assert_eq!(replay_counters(capabilities.gtksa_replay_counter()), 1);
        assert!(capabilities.mfp_capable());
        assert!(capabilities.mfp_required());
    }
}
