//! Slice-based renderer implementation.

use core::fmt::{self, Write};

use crate::sans::element::{Element, Elements, Id, Organization, VendorKey};

use super::{
    Options,
    display::Hex,
    registry::{self, EXTENSIONS, MICROSOFT, Scope, WIFI_ALLIANCE, render_entry},
};

/// Render every element of a buffer.
///
/// Iteration stops silently at an element whose declared length runs past the
/// end of `r`. This method is also re-exported as `elemental::avec::render`.
pub fn render(r: &[u8], options: &Options, f: &mut impl Write) -> fmt::Result {
    render_dyn(r, options, f)
}

fn render_dyn(r: &[u8], options: &Options, f: &mut dyn Write) -> fmt::Result {
    let scope = Scope { ies: r, options };

    for Element { id, body } in Elements::new(r) {
        match registry::lookup(&registry::ELEMENTS, id.0, options.context) {
            Some(descriptor) => render_entry(descriptor, body, &scope, f)?,
            None if id == Id::VENDOR_SPECIFIC => vendor(body, &scope, f)?,
            None if id == Id::EXTENSION => extension(body, &scope, f)?,
            None if options.unknown => writeln!(f, "\tUnknown IE ({}):{}", id.0, Hex(body))?,
            None => log::trace!("skipping element {}", id.0),
        }
    }

    Ok(())
}

/// Dispatch a vendor-specific element on its OUI and sub-type.
fn vendor(r: &[u8], scope: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let Some(key) = VendorKey::parse(r) else {
        return writeln!(f, "\tVendor specific: <too short> data:{}", Hex(r));
    };

    let registered = match (Organization::from_oui(key.oui), key.kind) {
        (Some(Organization::Microsoft), Some(kind)) => Some((&MICROSOFT, "MS/WiFi", kind)),
        (Some(Organization::WiFiAlliance), Some(kind)) => Some((&WIFI_ALLIANCE, "WFA", kind)),
        _ => None,
    };

    match registered {
        Some((table, label, kind)) => {
            match registry::lookup(table, kind, scope.options.context) {
                Some(descriptor) => render_entry(descriptor, key.body, scope, f),
                None if scope.options.unknown => {
                    writeln!(f, "\t{label} {kind:#04x}, data:{}", Hex(key.body))
                }
                None => Ok(()),
            }
        }
        None if scope.options.unknown => {
            let data = r.get(3..).unwrap_or_default();
            writeln!(f, "\tVendor specific: OUI {}, data:{}", key.oui, Hex(data))
        }
        None => Ok(()),
    }
}

/// Dispatch an extension element on its extension id.
fn extension(r: &[u8], scope: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let Some((&id, body)) = r.split_first() else {
        return writeln!(f, "\tExtension IE: <empty>");
    };

    match registry::lookup(&EXTENSIONS, id, scope.options.context) {
        Some(descriptor) => render_entry(descriptor, body, scope, f),
        None if scope.options.unknown => {
            writeln!(f, "\tUnknown Extension ID ({id}):{}", Hex(body))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::String;

    use super::*;
    use crate::avec::Context;

    fn rendered(r: &[u8], unknown: bool) -> String {
        let options = Options {
            unknown,
            context: Context::Scan,
        };

        let mut s = String::new();
        render(r, &options, &mut s).unwrap();
        s
    }

    #[test]
    fn unknown_elements_are_opt_in() {
        let r = [2, 2, 0xab, 0xcd];
        assert_eq!(rendered(&r, false), "");
        assert_eq!(rendered(&r, true), "\tUnknown IE (2): ab cd\n");
    }

    #[test]
    fn truncated_trailing_element_is_dropped() {
        let r = [3, 1, 6, 0, 9, b'a'];
        assert_eq!(rendered(&r, true), "\tDS Parameter set: channel 6\n");
    }

    #[test]
    fn vendor_fallbacks() {
        assert_eq!(
            rendered(&[221, 2, 0x00, 0x50], false),
            "\tVendor specific: <too short> data: 00 50\n"
        );

        let r = [221, 5, 0x00, 0x50, 0xf2, 0x07, 0x01];
        assert_eq!(rendered(&r, false), "");
        assert_eq!(rendered(&r, true), "\tMS/WiFi 0x07, data: 01\n");

        let r = [221, 5, 0x50, 0x6f, 0x9a, 0x0a, 0x02];
        assert_eq!(rendered(&r, true), "\tWFA 0x0a, data: 02\n");

        let r = [221, 4, 0x00, 0x10, 0x18, 0x02];
        assert_eq!(rendered(&r, true), "\tVendor specific: OUI 00:10:18, data: 02\n");

        // The IEEE 802.11 organization has no registered sub-types.
        let r = [221, 4, 0x00, 0x0f, 0xac, 0x01];
        assert_eq!(rendered(&r, true), "\tVendor specific: OUI 00:0f:ac, data: 01\n");

        // Without a sub-type byte, a known organization is handled as unknown.
        let r = [221, 3, 0x00, 0x50, 0xf2];
        assert_eq!(rendered(&r, true), "\tVendor specific: OUI 00:50:f2, data:\n");
    }

    #[test]
    fn extension_fallbacks() {
        assert_eq!(rendered(&[255, 0], false), "\tExtension IE: <empty>\n");

        let r = [255, 3, 108, 0x01, 0x02];
        assert_eq!(rendered(&r, false), "");
        assert_eq!(rendered(&r, true), "\tUnknown Extension ID (108): 01 02\n");

        let r = [255, 5, 35, 0, 0, 0, 0];
        assert_eq!(
            rendered(&r, false),
            "\tHE capabilities: <invalid: 4 bytes: 00 00 00 00>\n"
        );
    }

    #[test]
    fn context_filters_decoders() {
        let r = [7, 3, b'U', b'S', b' '];
        let options = Options {
            unknown: true,
            context: Context::Link,
        };

        let mut s = String::new();
        render(&r, &options, &mut s).unwrap();
        assert_eq!(s, "\tUnknown IE (7): 55 53 20\n");
    }
}
