//! Static tables mapping element identifiers to decoders.
//!
//! Three tables are kept: top-level elements by tag, vendor-specific elements
//! by sub-type (one table per organization with registered decoders), and
//! extension elements by extension id. Each is a 256-entry array built at
//! compile time, so a lookup is a single index.

use core::fmt::{self, Write};

use crate::sans::element::{Id, ext};

use super::{Context, Contexts, Options, basic, display::Hex, he, ht, security, vendor};

/// A decoder, receiving an element body whose length is within the bounds of
/// its descriptor.
pub type Decode = fn(r: &[u8], scope: &Scope<'_>, f: &mut dyn Write) -> fmt::Result;

/// State shared by every decoder during one rendering call.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    /// The complete element buffer being rendered.
    pub ies: &'a [u8],
    pub options: &'a Options,
}

/// How to render one kind of element.
#[derive(Clone, Copy)]
pub struct Descriptor {
    pub name: &'static str,
    pub decode: Decode,
    pub min_len: u8,
    pub max_len: u8,
    pub contexts: Contexts,
}

impl Descriptor {
    const fn scan(name: &'static str, decode: Decode, min_len: u8, max_len: u8) -> Self {
        Self {
            name,
            decode,
            min_len,
            max_len,
            contexts: Contexts::SCAN,
        }
    }

    const fn within(self, contexts: Contexts) -> Self {
        Self { contexts, ..self }
    }

    /// Whether a body of `len` bytes is within this descriptor's bounds.
    pub fn accepts(&self, len: usize) -> bool {
        (self.min_len as usize..=self.max_len as usize).contains(&len)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("min_len", &self.min_len)
            .field("max_len", &self.max_len)
            .field("contexts", &self.contexts)
            .finish_non_exhaustive()
    }
}

/// A table of descriptors indexed by identifier.
pub type Table = [Option<Descriptor>; 256];

const fn table<const N: usize>(entries: [(u8, Descriptor); N]) -> Table {
    let mut table = [None; 256];

    let mut i = 0;
    while i < N {
        let (id, descriptor) = entries[i];
        table[id as usize] = Some(descriptor);
        i += 1;
    }

    table
}

/// Top-level elements, by tag.
pub static ELEMENTS: Table = table([
    (
        Id::SSID.0,
        Descriptor::scan("SSID", basic::ssid, 0, 32)
            .within(Contexts::SCAN.union(Contexts::LINK).union(Contexts::LINK_MLO_MLD)),
    ),
    (Id::SUPPORTED_RATES.0, Descriptor::scan("Supported rates", basic::supported_rates, 0, 255)),
    (Id::DSSS_PARAMETER_SET.0, Descriptor::scan("DS Parameter set", basic::ds, 1, 1)),
    (Id::TIM.0, Descriptor::scan("TIM", basic::tim, 4, 255)),
    (Id::IBSS_PARAMETER_SET.0, Descriptor::scan("IBSS ATIM window", basic::ibss_atim, 2, 2)),
    (Id::COUNTRY.0, Descriptor::scan("Country", basic::country, 3, 255)),
    (Id::BSS_LOAD.0, Descriptor::scan("BSS Load", basic::bss_load, 5, 5)),
    (Id::POWER_CONSTRAINT.0, Descriptor::scan("Power constraint", basic::power_constraint, 1, 1)),
    (Id::TPC_REPORT.0, Descriptor::scan("TPC report", basic::tpc_report, 2, 2)),
    (Id::ERP_INFORMATION.0, Descriptor::scan("ERP", basic::erp, 1, 255)),
    (Id::HT_CAPABILITIES.0, Descriptor::scan("HT capabilities", ht::capabilities, 26, 26)),
    (Id::ERP_D4.0, Descriptor::scan("ERP D4.0", basic::erp, 1, 255)),
    (Id::RSN.0, Descriptor::scan("RSN", security::rsn, 2, 255)),
    (
        Id::EXTENDED_SUPPORTED_RATES.0,
        Descriptor::scan("Extended supported rates", basic::supported_rates, 0, 255),
    ),
    (Id::AP_CHANNEL_REPORT.0, Descriptor::scan("AP Channel Report", basic::ap_channel_report, 1, 255)),
    (
        Id::SUPPORTED_OPERATING_CLASSES.0,
        Descriptor::scan("Supported operating classes", basic::operating_classes, 1, 255),
    ),
    (Id::HT_OPERATION.0, Descriptor::scan("HT operation", ht::operation, 22, 22)),
    (
        Id::SECONDARY_CHANNEL_OFFSET.0,
        Descriptor::scan("Secondary Channel Offset", ht::secondary_channel_offset, 1, 1),
    ),
    (
        Id::MEASUREMENT_PILOT_TRANSMISSION.0,
        Descriptor::scan("Measurement Pilot Transmission", basic::measurement_pilot, 1, 255),
    ),
    (
        Id::RM_ENABLED_CAPABILITIES.0,
        Descriptor::scan("RM enabled capabilities", basic::rm_enabled_capabilities, 5, 5),
    ),
    (
        Id::OBSS_SCAN_PARAMETERS.0,
        Descriptor::scan("Overlapping BSS scan params", basic::obss_scan_parameters, 14, 255),
    ),
    (Id::INTERWORKING.0, Descriptor::scan("802.11u Interworking", basic::interworking, 0, 255)),
    (
        Id::ADVERTISEMENT_PROTOCOL.0,
        Descriptor::scan("802.11u Advertisement", basic::advertisement_protocol, 0, 255),
    ),
    (
        Id::ROAMING_CONSORTIUM.0,
        Descriptor::scan("802.11u Roaming Consortium", basic::roaming_consortium, 2, 255),
    ),
    (Id::MESH_CONFIGURATION.0, Descriptor::scan("MESH Configuration", basic::mesh_configuration, 7, 7)),
    (
        Id::MESH_ID.0,
        Descriptor::scan("MESH ID", basic::ssid, 0, 32).within(Contexts::SCAN.union(Contexts::LINK)),
    ),
    (
        Id::EXTENDED_CAPABILITIES.0,
        Descriptor::scan("Extended capabilities", basic::extended_capabilities, 0, 255),
    ),
    (Id::VHT_CAPABILITIES.0, Descriptor::scan("VHT capabilities", ht::vht_capabilities, 12, 255)),
    (Id::VHT_OPERATION.0, Descriptor::scan("VHT operation", ht::vht_operation, 5, 255)),
    (
        Id::TRANSMIT_POWER_ENVELOPE.0,
        Descriptor::scan("Transmit Power Envelope", basic::transmit_power_envelope, 2, 5),
    ),
    (
        Id::SHORT_BEACON_INTERVAL.0,
        Descriptor::scan("Short beacon interval", basic::short_beacon_interval, 2, 2),
    ),
    (Id::S1G_CAPABILITIES.0, Descriptor::scan("S1G capabilities", ht::s1g_capabilities, 15, 15)),
    (Id::S1G_OPERATION.0, Descriptor::scan("S1G operation", ht::s1g_operation, 6, 6)),
]);

/// Microsoft vendor-specific elements, by sub-type.
pub static MICROSOFT: Table = table([
    (1, Descriptor::scan("WPA", security::wpa, 2, 255)),
    (2, Descriptor::scan("WMM", vendor::wmm, 1, 255)),
    (4, Descriptor::scan("WPS", vendor::wps, 0, 255)),
]);

/// Wi-Fi Alliance vendor-specific elements, by sub-type.
pub static WIFI_ALLIANCE: Table = table([
    (9, Descriptor::scan("P2P", vendor::p2p, 2, 255)),
    (16, Descriptor::scan("HotSpot 2.0 Indication", vendor::hotspot_indication, 1, 255)),
    (18, Descriptor::scan("HotSpot 2.0 OSEN", security::osen, 1, 255)),
    (28, Descriptor::scan("OWE Transition Mode", vendor::owe_transition, 7, 255)),
]);

/// Extension elements, by extension id.
pub static EXTENSIONS: Table = table([
    (ext::HE_CAPABILITIES, Descriptor::scan("HE capabilities", he::capabilities, 21, 54)),
    (ext::HE_OPERATION, Descriptor::scan("HE operation", he::operation, 6, 255)),
]);

/// Find the descriptor for `key` applying in `context`.
pub fn lookup(table: &'static Table, key: u8, context: Context) -> Option<&'static Descriptor> {
    table[key as usize]
        .as_ref()
        .filter(|d| d.contexts.contains(context.flag()))
}

/// Render an element with its descriptor.
///
/// Writes the display name, then either the decoded body or, when the body
/// length is out of bounds, an invalid marker with the raw bytes.
pub fn render_entry(
    descriptor: &Descriptor,
    r: &[u8],
    scope: &Scope<'_>,
    f: &mut dyn Write,
) -> fmt::Result {
    write!(f, "\t{}:", descriptor.name)?;

    if descriptor.accepts(r.len()) {
        return (descriptor.decode)(r, scope, f);
    }

    log::debug!(
        "{} body of {} byte(s) outside {}..={}",
        descriptor.name,
        r.len(),
        descriptor.min_len,
        descriptor.max_len
    );

    match r {
        [] => writeln!(f, " <invalid: no data>"),
        [b] => writeln!(f, " <invalid: 1 byte: {b:02x}>"),
        _ => writeln!(f, " <invalid: {} bytes:{}>", r.len(), Hex(r)),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::String;

    use super::*;

    fn entry(descriptor: &Descriptor, r: &[u8]) -> String {
        let options = Options::default();
        let scope = Scope { ies: r, options: &options };

        let mut s = String::new();
        render_entry(descriptor, r, &scope, &mut s).unwrap();
        s
    }

    #[test]
    fn tables_hold_registered_entries() {
        assert_eq!(ELEMENTS[0].map(|d| d.name), Some("SSID"));
        assert_eq!(ELEMENTS[7].map(|d| (d.min_len, d.max_len)), Some((3, 255)));
        assert!(ELEMENTS[2].is_none());
        assert!(ELEMENTS[221].is_none());
        assert!(ELEMENTS[255].is_none());
        assert_eq!(MICROSOFT[2].map(|d| d.name), Some("WMM"));
        assert_eq!(EXTENSIONS[35].map(|d| (d.min_len, d.max_len)), Some((21, 54)));
    }

    #[test]
    fn lookup_respects_context() {
        assert!(lookup(&ELEMENTS, 0, Context::LinkMloMld).is_some());
        assert!(lookup(&ELEMENTS, 114, Context::Link).is_some());
        assert!(lookup(&ELEMENTS, 114, Context::LinkMloMld).is_none());
        assert!(lookup(&ELEMENTS, 7, Context::Link).is_none());
        assert!(lookup(&ELEMENTS, 7, Context::Scan).is_some());
    }

    #[test]
    fn invalid_lengths() {
        let ds = ELEMENTS[3].unwrap();
        assert_eq!(entry(&ds, &[]), "\tDS Parameter set: <invalid: no data>\n");
        assert_eq!(entry(&ds, &[1, 2]), "\tDS Parameter set: <invalid: 2 bytes: 01 02>\n");

        let country = ELEMENTS[7].unwrap();
        assert_eq!(entry(&country, &[0x55]), "\tCountry: <invalid: 1 byte: 55>\n");
    }

    #[test]
    fn valid_length_decodes() {
        let ds = ELEMENTS[3].unwrap();
        assert_eq!(entry(&ds, &[6]), "\tDS Parameter set: channel 6\n");
    }
}
