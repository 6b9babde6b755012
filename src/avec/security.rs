//! Decoders for RSN, WPA and OSEN security elements.
//!
//! The three share one layout: an optional version, a group cipher, pairwise
//! cipher and AKM suite lists, RSN capabilities, PMKIDs and a group management
//! cipher. Every field after the version is optional, and each element type
//! has its own defaults for suites that are absent.

use core::fmt::{self, Write};

use crate::sans::suite::{self, Capabilities, Suite, replay_counters};

use super::{
    display::{Hex, Lines},
    registry::Scope,
};

/// Suite names assumed when the element omits them.
#[derive(Debug, Clone, Copy)]
struct Defaults {
    cipher: &'static str,
    akm: &'static str,
}

pub fn rsn(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let defaults = Defaults {
        cipher: "CCMP",
        akm: "IEEE 802.1X",
    };

    body(r, defaults, true, f)
}

pub fn wpa(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let defaults = Defaults {
        cipher: "TKIP",
        akm: "IEEE 802.1X",
    };

    body(r, defaults, true, f)
}

/// HotSpot 2.0 OSEN, an RSN body without a version.
pub fn osen(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let defaults = Defaults {
        cipher: "OSEN",
        akm: "OSEN",
    };

    f.write_str("\n\t")?;
    body(r, defaults, false, f)
}

fn write_suite(f: &mut dyn Write, suite: Suite, name: Option<&str>) -> fmt::Result {
    match name {
        Some(name) => f.write_str(name),
        None => write!(f, "{suite}"),
    }
}

fn body(mut r: &[u8], defaults: Defaults, versioned: bool, f: &mut dyn Write) -> fmt::Result {
    let mut lines = Lines::new();

    if versioned {
        let Some((&version, rest)) = r.split_first_chunk::<2>() else {
            return Ok(());
        };

        lines.next(f)?;
        writeln!(f, "\t * Version: {}", u16::from_le_bytes(version))?;
        r = rest;
    }

    let Some((&group, rest)) = r.split_first_chunk::<4>() else {
        lines.next(f)?;
        writeln!(f, "\t * Group cipher: {}", defaults.cipher)?;
        lines.next(f)?;
        return writeln!(f, "\t * Pairwise ciphers: {}", defaults.cipher);
    };

    let group = Suite::new(group);

    lines.next(f)?;
    f.write_str("\t * Group cipher: ")?;
    write_suite(f, group, group.cipher())?;
    writeln!(f)?;
    r = rest;

    if r.len() < 2 {
        lines.next(f)?;
        return writeln!(f, "\t * Pairwise ciphers: {}", defaults.cipher);
    }

    let Some((pairwise, rest)) = suite::list(r) else {
        return bogus_tail(r, f);
    };

    lines.next(f)?;
    f.write_str("\t * Pairwise ciphers:")?;
    for suite in pairwise {
        f.write_str(" ")?;
        write_suite(f, suite, suite.cipher())?;
    }
    writeln!(f)?;
    r = rest;

    if r.len() < 2 {
        lines.next(f)?;
        return writeln!(f, "\t * Authentication suites: {}", defaults.akm);
    }

    let Some((akms, rest)) = suite::list(r) else {
        return bogus_tail(r, f);
    };

    lines.next(f)?;
    f.write_str("\t * Authentication suites:")?;
    for suite in akms {
        f.write_str(" ")?;
        write_suite(f, suite, suite.akm())?;
    }
    writeln!(f)?;
    r = rest;

    if let Some((&capabilities, rest)) = r.split_first_chunk::<2>() {
        lines.next(f)?;
        rsn_capabilities(Capabilities::from_le_bytes(capabilities), f)?;
        r = rest;
    }

    if let Some((&count, rest)) = r.split_first_chunk::<2>() {
        let count = u16::from_le_bytes(count) as usize;

        // PMKID values are not printed.
        let Some(rest) = rest.get(16 * count..) else {
            return bogus_tail(r, f);
        };

        lines.next(f)?;
        writeln!(f, "\t * {count} PMKIDs")?;
        r = rest;
    }

    if let Some((&group_management, rest)) = r.split_first_chunk::<4>() {
        let suite = Suite::new(group_management);

        lines.next(f)?;
        f.write_str("\t * Group mgmt cipher suite: ")?;
        write_suite(f, suite, suite.cipher())?;
        writeln!(f)?;
        r = rest;
    }

    bogus_tail(r, f)
}

fn rsn_capabilities(capabilities: Capabilities, f: &mut dyn Write) -> fmt::Result {
    f.write_str("\t * Capabilities:")?;

    if capabilities.pre_auth() {
        f.write_str(" PreAuth")?;
    }
    if capabilities.no_pairwise() {
        f.write_str(" NoPairwise")?;
    }

    write!(
        f,
        " {}-PTKSA-RC {}-GTKSA-RC",
        replay_counters(capabilities.ptksa_replay_counter()),
        replay_counters(capabilities.gtksa_replay_counter())
    )?;

    for (set, name) in [
        (capabilities.mfp_required(), " MFP-required"),
        (capabilities.mfp_capable(), " MFP-capable"),
        (capabilities.peerkey_enabled(), " Peerkey-enabled"),
        (capabilities.spp_amsdu_capable(), " SPP-AMSDU-capable"),
        (capabilities.spp_amsdu_required(), " SPP-AMSDU-required"),
        (capabilities.extended_key_id(), " Extended-Key-ID"),
    ] {
        if set {
            f.write_str(name)?;
        }
    }

    writeln!(f, " ({:#06x})", capabilities.bits())
}

fn bogus_tail(r: &[u8], f: &mut dyn Write) -> fmt::Result {
    if r.is_empty() {
        return Ok(());
    }

    log::debug!("{} byte(s) of security element left unparsed", r.len());
    writeln!(f, "\t\t * bogus tail data ({}):{}", r.len(), Hex(r))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::String;

    use super::*;
    use crate::avec::{Options, registry::Decode};

    fn decoded(decode: Decode, r: &[u8]) -> String {
        let options = Options::default();
        let scope = Scope { ies: &[], options: &options };

        let mut s = String::new();
        decode(r, &scope, &mut s).unwrap();
        s
    }

    #[test]
    fn wpa2_personal() {
        let r = [
            0x01, 0x00, 0x00, 0x0f, 0xac, 0x04, 0x01, 0x00, 0x00, 0x0f, 0xac, 0x04, 0x01, 0x00,
            0x00, 0x0f, 0xac, 0x02, 0x0c, 0x00,
        ];

        assert_eq!(
            decoded(rsn, &r),
            "\t * Version: 1\n\
             \t\t * Group cipher: CCMP\n\
             \t\t * Pairwise ciphers: CCMP\n\
             \t\t * Authentication suites: PSK\n\
             \t\t * Capabilities: 16-PTKSA-RC 1-GTKSA-RC (0x000c)\n"
        );
    }

    #[test]
    fn defaults_for_absent_suites() {
        assert_eq!(
            decoded(rsn, &[0x01, 0x00]),
            "\t * Version: 1\n\t\t * Group cipher: CCMP\n\t\t * Pairwise ciphers: CCMP\n"
        );

        assert_eq!(
            decoded(wpa, &[0x01, 0x00, 0x00, 0x50, 0xf2, 0x02]),
            "\t * Version: 1\n\t\t * Group cipher: TKIP\n\t\t * Pairwise ciphers: TKIP\n"
        );
    }

    #[test]
    fn overlong_count_is_bogus_tail() {
        let r = [0x01, 0x00, 0x00, 0x0f, 0xac, 0x04, 0x05, 0x00, 0x00, 0x0f, 0xac, 0x04];

        assert_eq!(
            decoded(rsn, &r),
            "\t * Version: 1\n\
             \t\t * Group cipher: CCMP\n\
             \t\t * bogus tail data (6): 05 00 00 0f ac 04\n"
        );
    }

    #[test]
    fn pmkids_and_management_cipher() {
        let mut r = std::vec![
            0x01, 0x00, 0x00, 0x0f, 0xac, 0x04, 0x01, 0x00, 0x00, 0x0f, 0xac, 0x04, 0x01, 0x00,
            0x00, 0x0f, 0xac, 0x08, 0xc0, 0x00, 0x01, 0x00,
        ];
        r.extend([0xaa; 16]);
        r.extend([0x00, 0x0f, 0xac, 0x06, 0xee]);

        assert_eq!(
            decoded(rsn, &r),
            "\t * Version: 1\n\
             \t\t * Group cipher: CCMP\n\
             \t\t * Pairwise ciphers: CCMP\n\
             \t\t * Authentication suites: SAE\n\
             \t\t * Capabilities: 1-PTKSA-RC 1-GTKSA-RC MFP-required MFP-capable (0x00c0)\n\
             \t\t * 1 PMKIDs\n\
             \t\t * Group mgmt cipher suite: AES-128-CMAC\n\
             \t\t * bogus tail data (1): ee\n"
        );
    }

    #[test]
    fn osen_has_no_version() {
        let r = [
            0x00, 0x0f, 0xac, 0x04, 0x01, 0x00, 0x00, 0x0f, 0xac, 0x04, 0x01, 0x00, 0x50, 0x6f,
            0x9a, 0x01,
        ];

        assert_eq!(
            decoded(osen, &r),
            "\n\t\t * Group cipher: CCMP\n\
             \t\t * Pairwise ciphers: CCMP\n\
             \t\t * Authentication suites: OSEN\n"
        );
    }
}
