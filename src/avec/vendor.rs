//! Decoders for vendor-specific elements: WMM, WPS, P2P and the Wi-Fi
//! Alliance HotSpot 2.0 and OWE transition elements.

use core::fmt::{self, Write};

use zerocopy::FromBytes;

use crate::sans::tlv::{Item, P2p, Records, Wps};

use super::{
    display::{Hex, Lines, Mac, Ssid, Text},
    registry::Scope,
};

/// WMM information and parameter elements, by OUI sub-type.
pub fn wmm(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let Some((&subtype, data)) = r.split_first() else {
        return Ok(());
    };

    match subtype {
        0 => f.write_str(" information:")?,
        1 => {
            if wmm_parameter(data, f)? {
                return Ok(());
            }
        }
        _ => write!(f, " type {subtype}:")?,
    }

    writeln!(f, "{}", Hex(data))
}

/// Renders a version 1 WMM parameter element, returning whether it did.
///
/// Otherwise only a prefix is written, and the caller dumps the body.
fn wmm_parameter(r: &[u8], f: &mut dyn Write) -> Result<bool, fmt::Error> {
    const ACI: [&str; 4] = ["BE", "BK", "VI", "VO"];

    #[repr(C)]
    #[derive(FromBytes)]
    struct AccessCategory {
        aci_aifsn: u8,
        ecw: u8,
        txop_limit: [u8; 2],
    }

    #[repr(C)]
    #[derive(FromBytes)]
    struct Parameter {
        version: u8,
        qos_info: u8,
        _reserved: u8,
        categories: [AccessCategory; 4],
    }

    let Some(&r) = r.first_chunk::<19>() else {
        f.write_str(" invalid:")?;
        return Ok(false);
    };

    let Parameter {
        version,
        qos_info,
        categories,
        ..
    } = zerocopy::transmute!(r);

    if version != 1 {
        f.write_str(" Parameter: not version 1:")?;
        return Ok(false);
    }

    f.write_str("\t * Parameter version 1")?;

    if qos_info & 0x80 != 0 {
        f.write_str("\n\t\t * u-APSD")?;
    }

    for AccessCategory {
        aci_aifsn,
        ecw,
        txop_limit,
    } in categories
    {
        write!(f, "\n\t\t * {}:", ACI[((aci_aifsn >> 5) & 3) as usize])?;

        if aci_aifsn & 0x10 != 0 {
            f.write_str(" acm")?;
        }

        write!(
            f,
            " CW {}-{}, AIFSN {}",
            (1u16 << (ecw & 0xf)) - 1,
            (1u16 << (ecw >> 4)) - 1,
            aci_aifsn & 0xf
        )?;

        let txop = u16::from_le_bytes(txop_limit);
        if txop != 0 {
            write!(f, ", TXOP {} usec", txop as u32 * 32)?;
        }
    }

    writeln!(f)?;
    Ok(true)
}

fn password_id(id: u16) -> &'static str {
    match id {
        0 => "Default (PIN)",
        1 => "User-specified",
        2 => "Machine-specified",
        3 => "Rekey",
        4 => "PushButton",
        5 => "Registrar-specified",
        _ => "??",
    }
}

mod attribute {
    pub const CONFIG_METHODS: u16 = 0x1008;
    pub const DEVICE_NAME: u16 = 0x1011;
    pub const DEVICE_PASSWORD_ID: u16 = 0x1012;
    pub const MANUFACTURER: u16 = 0x1021;
    pub const MODEL: u16 = 0x1023;
    pub const MODEL_NUMBER: u16 = 0x1024;
    pub const RESPONSE_TYPE: u16 = 0x103b;
    pub const RF_BANDS: u16 = 0x103c;
    pub const SELECTED_REGISTRAR: u16 = 0x1041;
    pub const SERIAL_NUMBER: u16 = 0x1042;
    pub const STATE: u16 = 0x1044;
    pub const UUID: u16 = 0x1047;
    pub const VENDOR_EXTENSION: u16 = 0x1049;
    pub const VERSION: u16 = 0x104a;
    pub const SELECTED_REGISTRAR_CONFIG_METHODS: u16 = 0x1053;
    pub const PRIMARY_DEVICE_TYPE: u16 = 0x1054;
    pub const AP_SETUP_LOCKED: u16 = 0x1057;
}

/// Wi-Fi Protected Setup attributes.
pub fn wps(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    use attribute::*;

    const WFA_VERSION2: [u8; 5] = [0x00, 0x37, 0x2a, 0x00, 0x01];

    if r.is_empty() {
        return writeln!(f);
    }

    let mut lines = Lines::new();

    for item in Records::<Wps>::new(r) {
        let (kind, body) = match item {
            Item::Record { kind, body } => (kind, body),
            Item::BogusTail(tail) => {
                writeln!(f, "\t\t * bogus tail data ({}):{}", tail.len(), Hex(tail))?;
                break;
            }
        };

        lines.next(f)?;

        let name = match kind {
            VERSION => "Version",
            DEVICE_PASSWORD_ID => "Device Password ID",
            RESPONSE_TYPE => "Response Type",
            RF_BANDS => "RF Bands",
            SELECTED_REGISTRAR => "Selected Registrar",
            STATE => "Wi-Fi Protected Setup State",
            PRIMARY_DEVICE_TYPE => "Primary Device Type",
            AP_SETUP_LOCKED => "AP setup locked",
            CONFIG_METHODS => "Config methods",
            SELECTED_REGISTRAR_CONFIG_METHODS => "Selected Registrar Config methods",
            _ => "",
        };

        match (kind, body) {
            (DEVICE_NAME, _) => writeln!(f, "\t * Device name: {}", Text(body))?,
            (MANUFACTURER, _) => writeln!(f, "\t * Manufacturer: {}", Text(body))?,
            (MODEL, _) => writeln!(f, "\t * Model: {}", Text(body))?,
            (MODEL_NUMBER, _) => writeln!(f, "\t * Model Number: {}", Text(body))?,
            (SERIAL_NUMBER, _) => writeln!(f, "\t * Serial Number: {}", Text(body))?,
            (VERSION, &[v, ..]) => writeln!(f, "\t * Version: {}.{}", v >> 4, v & 0xf)?,
            (DEVICE_PASSWORD_ID, &[a, b]) => {
                let id = u16::from_be_bytes([a, b]);
                writeln!(f, "\t * Device Password ID: {id} ({})", password_id(id))?;
            }
            (RESPONSE_TYPE, &[v, ..]) => {
                writeln!(f, "\t * Response Type: {v}{}", if v == 3 { " (AP)" } else { "" })?
            }
            (RF_BANDS, &[v, ..]) => writeln!(f, "\t * RF Bands: {v:#x}")?,
            (SELECTED_REGISTRAR, &[v, ..]) => writeln!(f, "\t * Selected Registrar: {v:#x}")?,
            (STATE, &[v, ..]) => {
                let state = match v {
                    1 => " (Unconfigured)",
                    2 => " (Configured)",
                    _ => "",
                };

                writeln!(f, "\t * Wi-Fi Protected Setup State: {v}{state}")?;
            }
            (UUID, _) => match body.first_chunk::<16>() {
                Some(uuid) if body.len() == 16 => {
                    f.write_str("\t * UUID: ")?;

                    for (i, b) in uuid.iter().enumerate() {
                        if matches!(i, 4 | 6 | 8 | 10) {
                            f.write_str("-")?;
                        }
                        write!(f, "{b:02x}")?;
                    }

                    writeln!(f)?;
                }
                _ => writeln!(f, "\t * UUID: (invalid, length={})", body.len())?,
            },
            (VENDOR_EXTENSION, &[a, b, c, d, e, v]) if [a, b, c, d, e] == WFA_VERSION2 => {
                writeln!(f, "\t * Version2: {}.{}", v >> 4, v & 0xf)?
            }
            (VENDOR_EXTENSION, _) => {
                writeln!(f, "\t * Unknown vendor extension. len={}", body.len())?
            }
            (PRIMARY_DEVICE_TYPE, &[c0, c1, o0, o1, o2, o3, s0, s1]) => writeln!(
                f,
                "\t * Primary Device Type: {}-{o0:02x}{o1:02x}{o2:02x}{o3:02x}-{}",
                u16::from_be_bytes([c0, c1]),
                u16::from_be_bytes([s0, s1])
            )?,
            (AP_SETUP_LOCKED, &[v, ..]) => writeln!(f, "\t * AP setup locked: {v:#04x}")?,
            (CONFIG_METHODS | SELECTED_REGISTRAR_CONFIG_METHODS, &[a, b, ..]) => {
                write!(f, "\t * {name}:")?;
                config_methods(u16::from_be_bytes([a, b]), f)?;
            }
            (
                VERSION | DEVICE_PASSWORD_ID | RESPONSE_TYPE | RF_BANDS | SELECTED_REGISTRAR
                | STATE | PRIMARY_DEVICE_TYPE | AP_SETUP_LOCKED | CONFIG_METHODS
                | SELECTED_REGISTRAR_CONFIG_METHODS,
                _,
            ) => writeln!(f, "\t * {name}: (invalid length {})", body.len())?,
            _ => writeln!(
                f,
                "\t * Unknown TLV ({kind:#06x}, {} bytes):{}",
                body.len(),
                Hex(body)
            )?,
        }
    }

    Ok(())
}

fn config_methods(methods: u16, f: &mut dyn Write) -> fmt::Result {
    const METHODS: [&str; 9] = [
        "USB",
        "Ethernet",
        "Label",
        "Display",
        "Ext. NFC",
        "Int. NFC",
        "NFC Intf.",
        "PBC",
        "Keypad",
    ];

    let mut separator = " ";

    for (bit, name) in METHODS.iter().enumerate() {
        if methods & 1 << bit != 0 {
            write!(f, "{separator}{name}")?;
            separator = ", ";
        }
    }

    writeln!(f)
}

/// Wi-Fi Direct attributes. Only the capability attribute is decoded.
pub fn p2p(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    const CAPABILITY: u16 = 0x02;
    const DEVICE_INFO: u16 = 0x0d;
    const DEVICE_INFO_MIN: usize = 6 + 2 + 8 + 1;

    let mut lines = Lines::new();

    for item in Records::<P2p>::new(r) {
        lines.next(f)?;

        match item {
            Item::Record {
                kind: CAPABILITY,
                body: &[group, device, ..],
            } => writeln!(f, "\t * Group capa: {group:#04x}, Device capa: {device:#04x}")?,
            Item::Record {
                kind: CAPABILITY, ..
            } => writeln!(f, "\t * malformed capability")?,
            Item::Record {
                kind: DEVICE_INFO,
                body,
            } if body.len() < DEVICE_INFO_MIN => writeln!(f, "\t * malformed device info")?,
            Item::Record { kind, body } => writeln!(
                f,
                "\t * Unknown TLV ({kind:#04x}, {} bytes):{}",
                body.len(),
                Hex(body)
            )?,
            Item::BogusTail(tail) => {
                writeln!(f, "\t * bogus tail data ({}):{}", tail.len(), Hex(tail))?
            }
        }
    }

    Ok(())
}

pub fn hotspot_indication(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let &[configuration, ..] = r else { return Ok(()) };

    writeln!(f)?;
    writeln!(f, "\t\tDGAF: {}", configuration & 1)
}

/// OWE transition mode: the BSSID and SSID of the paired open or OWE network,
/// then optional band and channel.
pub fn owe_transition(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    writeln!(f)?;

    let Some((&bssid, rest)) = r.split_first_chunk::<6>() else {
        return Ok(());
    };

    writeln!(f, "\t\tBSSID: {}", Mac(bssid))?;

    let Some((&len, rest)) = rest.split_first() else {
        return Ok(());
    };

    let Some((ssid, rest)) = rest.split_at_checked(len as usize) else {
        return Ok(());
    };

    writeln!(f, "\t\tSSID: {}", Ssid(ssid))?;

    if let &[band, channel, ..] = rest {
        writeln!(f, "\t\tBand Info: {band}")?;
        writeln!(f, "\t\tChannel Info: {channel}")?;
    }

    Ok(())
}
