//! Walking a buffer of concatenated information elements.

use core::fmt::{self, Display, Formatter};

/// An element identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub u8);

macro_rules! id {
    ($($name:ident = $val:expr,)*) => {
        impl Id {
            $(pub const $name: Self = Self($val);)*
        }
    };
}

id! {
    SSID = 0,
    SUPPORTED_RATES = 1,
    DSSS_PARAMETER_SET = 3,
    TIM = 5,
    IBSS_PARAMETER_SET = 6,
    COUNTRY = 7,
    BSS_LOAD = 11,
    POWER_CONSTRAINT = 32,
    TPC_REPORT = 35,
    ERP_INFORMATION = 42,
    HT_CAPABILITIES = 45,
    ERP_D4 = 47,
    RSN = 48,
    EXTENDED_SUPPORTED_RATES = 50,
    AP_CHANNEL_REPORT = 51,
    SUPPORTED_OPERATING_CLASSES = 59,
    HT_OPERATION = 61,
    SECONDARY_CHANNEL_OFFSET = 62,
    MEASUREMENT_PILOT_TRANSMISSION = 66,
    RM_ENABLED_CAPABILITIES = 70,
    OBSS_SCAN_PARAMETERS = 74,
    INTERWORKING = 107,
    ADVERTISEMENT_PROTOCOL = 108,
    ROAMING_CONSORTIUM = 111,
    MESH_CONFIGURATION = 113,
    MESH_ID = 114,
    EXTENDED_CAPABILITIES = 127,
    VHT_CAPABILITIES = 191,
    VHT_OPERATION = 192,
    TRANSMIT_POWER_ENVELOPE = 195,
    SHORT_BEACON_INTERVAL = 214,
    S1G_CAPABILITIES = 217,
    VENDOR_SPECIFIC = 221,
    S1G_OPERATION = 232,
    EXTENSION = 255,
}

/// Extension identifiers carried in the first body byte of an
/// [`Id::EXTENSION`] element.
pub mod ext {
    pub const HE_CAPABILITIES: u8 = 35;
    pub const HE_OPERATION: u8 = 36;
}

/// A single element, borrowed from the buffer it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    pub id: Id,
    pub body: &'a [u8],
}

/// Iterator over the elements of a buffer.
///
/// Iteration ends when fewer than two bytes remain, or when an element
/// declares a body longer than what remains. The truncated element and
/// anything after it are dropped.
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    r: &'a [u8],
}

impl<'a> Elements<'a> {
    pub fn new(r: &'a [u8]) -> Self {
        Self { r }
    }

    /// Bytes not yet consumed by the iterator.
    pub fn remaining(&self) -> &'a [u8] {
        self.r
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let &[id, len, ref rest @ ..] = self.r else {
            if !self.r.is_empty() {
                log::debug!("dropping {} trailing byte(s) after last element", self.r.len());
                self.r = &[];
            }
            return None;
        };

        let Some((body, rest)) = rest.split_at_checked(len as usize) else {
            log::debug!(
                "element {id} declares {len} bytes but only {} remain, stopping",
                rest.len()
            );
            self.r = &[];
            return None;
        };

        self.r = rest;

        Some(Element { id: Id(id), body })
    }
}

impl core::iter::FusedIterator for Elements<'_> {}

/// A 3-byte organizationally unique identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Oui(pub [u8; 3]);

impl Oui {
    pub const MSFT: Self = Self([0x00, 0x50, 0xf2]);
    pub const IEEE: Self = Self([0x00, 0x0f, 0xac]);
    pub const WFA: Self = Self([0x50, 0x6f, 0x9a]);
}

impl Display for Oui {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}:{:02x}:{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

/// Organizations with their own vendor-specific sub-type registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Organization {
    Microsoft,
    Ieee80211,
    WiFiAlliance,
}

impl Organization {
    pub fn from_oui(oui: Oui) -> Option<Self> {
        match oui {
            Oui::MSFT => Some(Self::Microsoft),
            Oui::IEEE => Some(Self::Ieee80211),
            Oui::WFA => Some(Self::WiFiAlliance),
            _ => None,
        }
    }
}

/// The secondary key of a vendor-specific element: its OUI, and the sub-type
/// byte following it when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorKey<'a> {
    pub oui: Oui,
    pub kind: Option<u8>,
    /// The body following the OUI and sub-type.
    pub body: &'a [u8],
}

impl<'a> VendorKey<'a> {
    /// Split a vendor-specific element body. Returns `None` when the body is
    /// too short to hold an OUI.
    pub fn parse(r: &'a [u8]) -> Option<Self> {
        let (&oui, rest) = r.split_first_chunk::<3>()?;

        Some(match rest.split_first() {
            Some((&kind, body)) => Self {
                oui: Oui(oui),
                kind: Some(kind),
                body,
            },
            None => Self {
                oui: Oui(oui),
                kind: None,
                body: rest,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    #[test]
    fn empty() {
        assert_eq!(None, Elements::new(&[]).next());
    }

    #[test]
    fn less_than_header() {
        assert_eq!(None, Elements::new(&[0]).next());
    }

    #[test]
    fn body_too_short() {
        assert_eq!(None, Elements::new(&[0, 2, 10]).next());
    }

    #[test]
    fn empty_body() {
        let elements: Vec<_> = Elements::new(&[0, 0]).collect();
        assert_eq!(elements, [Element { id: Id::SSID, body: &[] }]);
    }

    #[test]
    fn two_elements() {
        let r = [0, 2, 10, 20, 1, 3, 11, 22, 33];
        let elements: Vec<_> = Elements::new(&r).collect();
        assert_eq!(
            elements,
            [
                Element { id: Id::SSID, body: &[10, 20] },
                Element { id: Id::SUPPORTED_RATES, body: &[11, 22, 33] },
            ]
        );
    }

    #[test]
    fn truncated_element_stops_iteration() {
        let r = [0, 1, 0x41, 3, 9, 1, 7, 1, 2];
        let mut elements = Elements::new(&r);
        assert_eq!(elements.next(), Some(Element { id: Id::SSID, body: &[0x41] }));
        assert_eq!(elements.next(), None);
        assert!(elements.remaining().is_empty());
        assert_eq!(elements.next(), None);
    }

    #[test]
    fn element_ending_exactly_at_buffer_end() {
        let r = [221, 4, 0x00, 0x50, 0xf2, 0x02];
        let elements: Vec<_> = Elements::new(&r).collect();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].body.len(), 4);
    }

    #[test]
    fn vendor_key() {
        let key = VendorKey::parse(&[0x00, 0x50, 0xf2, 0x04, 0x10]).unwrap();
        assert_eq!(key.oui, Oui::MSFT);
        assert_eq!(key.kind, Some(4));
        assert_eq!(key.body, &[0x10]);

        let key = VendorKey::parse(&[0x50, 0x6f, 0x9a]).unwrap();
        assert_eq!(Organization::from_oui(key.oui), Some(Organization::WiFiAlliance));
        assert_eq!(key.kind, None);

        assert!(VendorKey::parse(&[0x00, 0x50]).is_none());
    }
}
