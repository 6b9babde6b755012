//! Decoders for HT, VHT and S1G capability and operation elements.

use core::fmt::{self, Write};

use tartan_bitfield::bitfield;
use zerocopy::FromBytes;

use crate::sans::bits::{Field, extract};

use super::{display::Hex, registry::Scope};

const SECONDARY_OFFSETS: [&str; 4] = ["no secondary", "above", "[reserved!]", "below"];

pub fn secondary_channel_offset(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let &[offset, ..] = r else { return Ok(()) };

    match SECONDARY_OFFSETS.get(offset as usize) {
        Some(name) => writeln!(f, " {name} ({offset})"),
        None => writeln!(f, " {offset}"),
    }
}

pub fn operation(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    const PROTECTION: [&str; 4] = ["no", "nonmember", "20 MHz", "non-HT mixed"];
    const STA_CHANNEL_WIDTH: [&str; 2] = ["20 MHz", "any"];

    let &[primary, info1, info2, _, info4, info5, ..] = r else {
        return Ok(());
    };

    bitfield! {
        struct Information1(u8) {
            [0..2] secondary_offset: u8,
            [2..3] sta_channel_width: u8,
            [3..4] rifs: u8,
        }
    }

    let info = Information1(info1);

    writeln!(f)?;
    writeln!(f, "\t\t * primary channel: {primary}")?;
    writeln!(
        f,
        "\t\t * secondary channel offset: {}",
        SECONDARY_OFFSETS[info.secondary_offset() as usize & 3]
    )?;
    writeln!(
        f,
        "\t\t * STA channel width: {}",
        STA_CHANNEL_WIDTH[info.sta_channel_width() as usize & 1]
    )?;
    writeln!(f, "\t\t * RIFS: {}", info.rifs())?;
    writeln!(f, "\t\t * HT protection: {}", PROTECTION[(info2 & 3) as usize])?;
    writeln!(f, "\t\t * non-GF present: {}", extract(info2, 0x04))?;
    writeln!(f, "\t\t * OBSS non-GF present: {}", extract(info2, 0x10))?;
    writeln!(f, "\t\t * dual beacon: {}", extract(info4, 0x40))?;
    writeln!(f, "\t\t * dual CTS protection: {}", extract(info4, 0x80))?;
    writeln!(f, "\t\t * STBC beacon: {}", extract(info5, 0x01))?;
    writeln!(f, "\t\t * L-SIG TXOP Prot: {}", extract(info5, 0x02))?;
    writeln!(f, "\t\t * PCO active: {}", extract(info5, 0x04))?;
    writeln!(f, "\t\t * PCO phase: {}", extract(info5, 0x08))
}

/// HT capabilities: capability information, A-MPDU parameters and the
/// supported MCS set.
pub fn capabilities(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct HtCapabilities {
        info: [u8; 2],
        ampdu: u8,
        mcs: [u8; 16],
    }

    bitfield! {
        struct Information(u16) {
            [0] rx_ldpc,
            [1] ht40,
            [2..4] sm_power_save: u8,
            [4] rx_greenfield,
            [5] rx_ht20_sgi,
            [6] rx_ht40_sgi,
            [7] tx_stbc,
            [8..10] rx_stbc: u8,
            [10] delayed_block_ack,
            [11] max_amsdu_7935,
            [12] dsss_cck_ht40,
            [14] intolerant_40,
            [15] lsig_txop_protection,
        }
    }

    // Extended capabilities, beamforming and antenna selection follow.
    let Some(&r) = r.first_chunk::<19>() else {
        return Ok(());
    };

    let HtCapabilities { info, ampdu, mcs } = zerocopy::transmute!(r);

    let raw = u16::from_le_bytes(info);
    let info = Information(raw);

    writeln!(f)?;
    writeln!(f, "\t\tCapabilities: {raw:#04x}")?;

    let mut line = |set: bool, s: &str| match set {
        true => writeln!(f, "\t\t\t{s}"),
        false => Ok(()),
    };

    line(info.rx_ldpc(), "RX LDPC")?;
    line(info.ht40(), "HT20/HT40")?;
    line(!info.ht40(), "HT20")?;
    line(info.sm_power_save() == 0, "Static SM Power Save")?;
    line(info.sm_power_save() == 1, "Dynamic SM Power Save")?;
    line(info.sm_power_save() == 3, "SM Power Save disabled")?;
    line(info.rx_greenfield(), "RX Greenfield")?;
    line(info.rx_ht20_sgi(), "RX HT20 SGI")?;
    line(info.rx_ht40_sgi(), "RX HT40 SGI")?;
    line(info.tx_stbc(), "TX STBC")?;
    line(info.rx_stbc() == 0, "No RX STBC")?;
    line(info.rx_stbc() == 1, "RX STBC 1-stream")?;
    line(info.rx_stbc() == 2, "RX STBC 2-streams")?;
    line(info.rx_stbc() == 3, "RX STBC 3-streams")?;
    line(info.delayed_block_ack(), "HT Delayed Block Ack")?;
    line(!info.max_amsdu_7935(), "Max AMSDU length: 3839 bytes")?;
    line(info.max_amsdu_7935(), "Max AMSDU length: 7935 bytes")?;
    line(info.dsss_cck_ht40(), "DSSS/CCK HT40")?;
    line(!info.dsss_cck_ht40(), "No DSSS/CCK HT40")?;
    line(info.intolerant_40(), "40 MHz Intolerant")?;
    line(info.lsig_txop_protection(), "L-SIG TXOP protection")?;

    ampdu_parameters(ampdu, f)?;
    mcs_set(&mcs, f)
}

fn ampdu_parameters(ampdu: u8, f: &mut dyn Write) -> fmt::Result {
    const SPACING: [&str; 8] = [
        "No restriction",
        "1/4 usec",
        "1/2 usec",
        "1 usec",
        "2 usec",
        "4 usec",
        "8 usec",
        "16 usec",
    ];

    let exponent = ampdu & 3;
    let spacing = (ampdu >> 2) & 7;

    writeln!(
        f,
        "\t\tMaximum RX AMPDU length {} bytes (exponent: 0x0{exponent:02x})",
        (1u32 << (13 + exponent)) - 1
    )?;
    writeln!(
        f,
        "\t\tMinimum RX AMPDU time spacing: {} (0x{spacing:02x})",
        SPACING[spacing as usize]
    )
}

/// The 16-byte HT supported MCS set.
fn mcs_set(mcs: &[u8; 16], f: &mut dyn Write) -> fmt::Result {
    let max_rate = u16::from_le_bytes([mcs[10], mcs[11] & 3]);
    let tx = mcs[12];

    let defined = tx & 0x01 != 0;
    let equal = tx & 0x02 == 0;

    if max_rate != 0 {
        writeln!(f, "\t\tHT Max RX data rate: {max_rate} Mbps")?;
    }

    if defined && equal {
        f.write_str("\t\tHT TX/RX MCS rate indexes supported:")?;
        return mcs_indexes(mcs, f);
    }

    f.write_str("\t\tHT RX MCS rate indexes supported:")?;
    mcs_indexes(mcs, f)?;

    if !defined {
        return writeln!(f, "\t\tHT TX MCS rate indexes are undefined");
    }

    match tx & 0x10 {
        0 => writeln!(f, "\t\tTX unequal modulation not supported")?,
        _ => writeln!(f, "\t\tTX unequal modulation supported")?,
    }

    writeln!(f, "\t\tHT TX Max spatial streams: {}", ((tx >> 2) & 3) + 1)?;
    writeln!(f, "\t\tHT TX MCS rate indexes supported may differ")
}

/// Supported MCS indexes 0 to 76 as ranges, e.g. ` 0-15, 32`.
fn mcs_indexes(mcs: &[u8; 16], f: &mut dyn Write) -> fmt::Result {
    let supported = |i: usize| mcs[i / 8] & 1 << (i % 8) != 0;

    let mut first = true;
    let mut i = 0;

    while i <= 76 {
        if !supported(i) {
            i += 1;
            continue;
        }

        let start = i;
        while i < 76 && supported(i + 1) {
            i += 1;
        }

        f.write_str(if first { " " } else { ", " })?;
        first = false;

        match start == i {
            true => write!(f, "{start}")?,
            false => write!(f, "{start}-{i}")?,
        }

        i += 1;
    }

    writeln!(f)
}

/// VHT capabilities: the capability word, then the RX and TX MCS maps.
pub fn vht_capabilities(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    const FLAGS: [(u32, &str); 12] = [
        (4, "RX LDPC"),
        (5, "short GI (80 MHz)"),
        (6, "short GI (160/80+80 MHz)"),
        (7, "TX STBC"),
        (11, "SU Beamformer"),
        (12, "SU Beamformee"),
        (19, "MU Beamformer"),
        (20, "MU Beamformee"),
        (21, "VHT TXOP PS"),
        (22, "+HTC-VHT"),
        (28, "RX antenna pattern consistency"),
        (29, "TX antenna pattern consistency"),
    ];

    #[repr(C)]
    #[derive(FromBytes)]
    struct VhtCapabilities {
        info: [u8; 4],
        rx_map: [u8; 2],
        rx_highest: [u8; 2],
        tx_map: [u8; 2],
        tx_highest: [u8; 2],
    }

    let Some(&r) = r.first_chunk::<12>() else {
        return Ok(());
    };

    let VhtCapabilities {
        info,
        rx_map,
        rx_highest,
        tx_map,
        tx_highest,
    } = zerocopy::transmute!(r);

    let info = u32::from_le_bytes(info);

    let max_mpdu = match info & 3 {
        0 => "3895",
        1 => "7991",
        2 => "11454",
        _ => "(reserved)",
    };

    let widths = match (info >> 2) & 3 {
        0 => "neither 160 nor 80+80",
        1 => "160 MHz",
        2 => "160 MHz, 80+80 MHz",
        _ => "(reserved)",
    };

    writeln!(f)?;
    writeln!(f, "\t\tVHT Capabilities ({info:#010x}):")?;
    writeln!(f, "\t\t\tMax MPDU length: {max_mpdu}")?;
    writeln!(f, "\t\t\tSupported Channel Width: {widths}")?;

    for (bit, name) in FLAGS {
        if info & 1 << bit != 0 {
            writeln!(f, "\t\t\t{name}")?;
        }
    }

    let tx_highest = u16::from_le_bytes(tx_highest);

    writeln!(f, "\t\tVHT RX MCS set:")?;
    vht_mcs_map(u16::from_le_bytes(rx_map), f)?;
    writeln!(
        f,
        "\t\tVHT RX highest supported: {} Mbps",
        u16::from_le_bytes(rx_highest) & 0x1fff
    )?;
    writeln!(f, "\t\tVHT TX MCS set:")?;
    vht_mcs_map(u16::from_le_bytes(tx_map), f)?;
    writeln!(f, "\t\tVHT TX highest supported: {} Mbps", tx_highest & 0x1fff)?;
    writeln!(
        f,
        "\t\tVHT extended NSS: {}supported",
        if tx_highest & 1 << 13 != 0 { "" } else { "not " }
    )
}

fn vht_mcs_map(map: u16, f: &mut dyn Write) -> fmt::Result {
    for streams in 1..=8 {
        let support = match (map >> (2 * (streams - 1))) & 3 {
            0 => "MCS 0-7",
            1 => "MCS 0-8",
            2 => "MCS 0-9",
            _ => "not supported",
        };

        writeln!(f, "\t\t\t{streams} streams: {support}")?;
    }

    Ok(())
}

pub fn vht_operation(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let &[width, segment0, segment1, mcs0, mcs1, ..] = r else {
        return Ok(());
    };

    let name = match width {
        0 => "20 or 40 MHz",
        1 => "80 MHz",
        2 => "160 MHz",
        3 => "80+80 MHz",
        _ => "unknown",
    };

    writeln!(f)?;
    writeln!(f, "\t\t * channel width: {width} ({name})")?;
    writeln!(f, "\t\t * center freq segment 0: {segment0}")?;
    writeln!(f, "\t\t * center freq segment 1: {segment1}")?;
    writeln!(f, "\t\t * VHT basic MCS set: 0x{mcs1:02x}{mcs0:02x}")
}

/// S1G (802.11ah) capabilities: ten bytes of capability information, then the
/// supported S1G-MCS and NSS set.
///
/// Each non-zero information byte is printed in hex, followed by the
/// capabilities it carries.
pub fn s1g_capabilities(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    const FLAGS: [(Field, &str); 20] = [
        (Field::new(0, 0x01), "S1G_LONG"),
        (Field::new(0, 0x02), "Short GI for 1 MHz"),
        (Field::new(0, 0x04), "Short GI for 2 MHz"),
        (Field::new(0, 0x08), "Short GI for 4 MHz"),
        (Field::new(0, 0x10), "Short GI for 8 MHz"),
        (Field::new(0, 0x20), "Short GI for 16 MHz"),
        (Field::new(1, 0x01), "Rx LDPC"),
        (Field::new(1, 0x02), "Tx STBC"),
        (Field::new(1, 0x04), "Rx STBC"),
        (Field::new(1, 0x08), "SU Beamformer"),
        (Field::new(1, 0x10), "SU Beamformee"),
        (Field::new(2, 0x08), "MU Beamformer"),
        (Field::new(2, 0x10), "MU Beamformee"),
        (Field::new(2, 0x20), "+HTC-VHT"),
        (Field::new(3, 0x01), "RD Responder"),
        (Field::new(3, 0x02), "HT-Delayed Block Ack"),
        (Field::new(4, 0x01), "Uplink Sync"),
        (Field::new(4, 0x02), "Dynamic AID"),
        (Field::new(4, 0x04), "BAT"),
        (Field::new(4, 0x08), "TIM ADE"),
    ];

    const WIDTHS: [&str; 4] = ["1, 2 MHz", "1, 2, 4 MHz", "1, 2, 4, 8 MHz", "1, 2, 4, 8, 16 MHz"];

    const STA_TYPES: [&str; 4] = ["sensor and non-sensor", "sensor only", "non-sensor only", "reserved"];

    let Some((&info, mcs)) = r.split_first_chunk::<10>() else {
        return Ok(());
    };

    let width = Field::new(0, 0xc0);
    let sounding = Field::new(2, 0x07);
    let max_mpdu = Field::new(3, 0x04);
    let ampdu_exponent = Field::new(3, 0x18);
    let sta_type = Field::new(4, 0xc0);

    writeln!(f)?;

    for (byte, &b) in info.iter().enumerate() {
        if b == 0 {
            continue;
        }

        writeln!(f, "\t\tByte[{byte}]: {b:#04x}")?;

        for (field, name) in FLAGS.iter().filter(|(field, _)| field.byte == byte) {
            if field.is_set(&info) {
                writeln!(f, "\t\t\t{name}")?;
            }
        }

        match byte {
            0 => writeln!(
                f,
                "\t\t\tSupported Channel Width: {}",
                WIDTHS[width.read(&info) as usize & 3]
            )?,
            2 => writeln!(f, "\t\t\tNumber Of Sounding Dimensions: {}", sounding.read(&info) + 1)?,
            3 => {
                writeln!(
                    f,
                    "\t\t\tMaximum MPDU Length: {}",
                    if max_mpdu.is_set(&info) { 7991 } else { 3895 }
                )?;
                writeln!(
                    f,
                    "\t\t\tMaximum A-MPDU Length: {} bytes",
                    (1u32 << (13 + ampdu_exponent.read(&info))) - 1
                )?;
            }
            4 => writeln!(
                f,
                "\t\t\tSTA Type: {}",
                STA_TYPES[sta_type.read(&info) as usize & 3]
            )?,
            _ => {}
        }
    }

    writeln!(f, "\t\tSupported S1G-MCS and NSS Set:{}", Hex(mcs))
}

pub fn s1g_operation(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    fn max_mcs(v: u8) -> &'static str {
        match v & 3 {
            0 => "Max S1G-MCS 2",
            1 => "Max S1G-MCS 7",
            2 => "Max S1G-MCS 9",
            _ => "Not supported",
        }
    }

    fn min_mcs(v: u8) -> &'static str {
        match v & 3 {
            0 => "no minimum restriction",
            1 => "MCS 0 not recommended",
            2 => "MCS 0 and 1 not recommended",
            _ => "invalid",
        }
    }

    bitfield! {
        struct ChannelWidth(u8) {
            [0] primary_1mhz,
            [1..5] width: u8,
            [5] lower_side,
            [7] mcs10_not_recommended,
        }
    }

    let &[width, class, primary, index, mcs0, mcs1] = r else {
        return Ok(());
    };

    let width = ChannelWidth(width);

    let primary_width = if width.primary_1mhz() { 1 } else { 2 };
    let widths = match width.width() {
        0 if width.primary_1mhz() => Some((1, 1)),
        1 => Some((primary_width, 2)),
        3 => Some((primary_width, 4)),
        7 => Some((primary_width, 8)),
        15 => Some((primary_width, 16)),
        _ => None,
    };

    writeln!(f)?;
    writeln!(f, "\t\tChannel width:")?;

    match widths {
        Some((primary, operating)) => {
            writeln!(f, "\t\t\tBSS primary channel width: {primary} MHz")?;
            writeln!(f, "\t\t\tBSS operating channel width: {operating} MHz")?;
        }
        None => {
            writeln!(f, "\t\t\tBSS primary channel width: invalid")?;
            writeln!(f, "\t\t\tBSS operating channel width: invalid")?;
        }
    }

    writeln!(
        f,
        "\t\t\t1 MHz primary channel located at the {} side of 2 MHz",
        if width.lower_side() { "lower" } else { "upper" }
    )?;

    if width.mcs10_not_recommended() {
        writeln!(f, "\t\t\tMCS 10 not recommended")?;
    }

    writeln!(f, "\t\t* operating class: {class}")?;
    writeln!(f, "\t\t* primary channel number: {primary}")?;
    writeln!(f, "\t\t* channel index: {index}")?;

    writeln!(f, "\t\tMax S1G MCS Map:")?;
    writeln!(f, "\t\t\tFor 1 SS: {}", max_mcs(mcs0 >> 2))?;
    writeln!(f, "\t\t\tFor 2 SS: {}", max_mcs(mcs0 >> 6))?;
    writeln!(f, "\t\t\tFor 3 SS: {}", max_mcs(mcs1 >> 2))?;
    writeln!(f, "\t\t\tFor 4 SS: {}", max_mcs(mcs1 >> 6))?;

    writeln!(f, "\t\tMin S1G MCS Map:")?;
    writeln!(f, "\t\t\tFor 1 SS: {}", min_mcs(mcs0))?;
    writeln!(f, "\t\t\tFor 2 SS: {}", min_mcs(mcs0 >> 4))?;
    writeln!(f, "\t\t\tFor 3 SS: {}", min_mcs(mcs1))?;
    writeln!(f, "\t\t\tFor 4 SS: {}", min_mcs(mcs1 >> 4))
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
    fn secondary_offsets() {
        assert_eq!(decoded(secondary_channel_offset, &[3]), " below (3)\n");
        assert_eq!(decoded(secondary_channel_offset, &[7]), " 7\n");
    }

    #[test]
    fn ht_operation_fields() {
        let mut r = [0u8; 22];
        r[..6].copy_from_slice(&[36, 0x05, 0x06, 0, 0x40, 0x03]);

        assert_eq!(
            decoded(operation, &r),
            "\n\t\t * primary channel: 36\n\
             \t\t * secondary channel offset: above\n\
             \t\t * STA channel width: any\n\
             \t\t * RIFS: 0\n\
             \t\t * HT protection: 20 MHz\n\
             \t\t * non-GF present: 1\n\
             \t\t * OBSS non-GF present: 0\n\
             \t\t * dual beacon: 1\n\
             \t\t * dual CTS protection: 0\n\
             \t\t * STBC beacon: 1\n\
             \t\t * L-SIG TXOP Prot: 1\n\
             \t\t * PCO active: 0\n\
             \t\t * PCO phase: 0\n"
        );
    }

    #[test]
    fn ht_capabilities_lines() {
        let mut r = [0u8; 26];
        r[0] = 0xef;
        r[1] = 0x01;
        r[2] = 0x17;
        r[3] = 0xff;
        r[4] = 0xff;
        r[7] = 0x01;
        r[15] = 0x01;

        let s = decoded(capabilities, &r);
        assert!(s.starts_with("\n\t\tCapabilities: 0x1ef\n\t\t\tRX LDPC\n\t\t\tHT20/HT40\n"));
        assert!(s.contains("\t\t\tSM Power Save disabled\n"));
        assert!(s.contains("\t\t\tRX STBC 1-stream\n"));
        assert!(s.contains("\t\tMaximum RX AMPDU length 65535 bytes (exponent: 0x003)\n"));
        assert!(s.contains("\t\tMinimum RX AMPDU time spacing: 4 usec (0x05)\n"));
        assert!(s.contains("\t\tHT TX/RX MCS rate indexes supported: 0-15, 32\n"));
    }

    #[test]
    fn ht_mcs_undefined_tx() {
        let mut mcs = [0u8; 16];
        mcs[0] = 0x0b;
        mcs[10] = 0x2c;
        mcs[11] = 0x01;

        let mut s = String::new();
        mcs_set(&mcs, &mut s).unwrap();
        assert_eq!(
            s,
            "\t\tHT Max RX data rate: 300 Mbps\n\
             \t\tHT RX MCS rate indexes supported: 0-1, 3\n\
             \t\tHT TX MCS rate indexes are undefined\n"
        );
    }

    #[test]
    fn vht_capabilities_maps() {
        let r = [
            0x92, 0x01, 0x80, 0x33, 0xfa, 0xff, 0x00, 0x00, 0xfa, 0xff, 0x00, 0x20,
        ];
        let s = decoded(vht_capabilities, &r);

        assert!(s.starts_with("\n\t\tVHT Capabilities (0x33800192):\n\t\t\tMax MPDU length: 11454\n"));
        assert!(s.contains("\t\t\tSupported Channel Width: neither 160 nor 80+80\n"));
        assert!(s.contains("\t\t\tRX LDPC\n\t\t\tTX STBC\n"));
        assert!(s.contains("\t\t\t1 streams: MCS 0-9\n\t\t\t2 streams: MCS 0-9\n\t\t\t3 streams: not supported\n"));
        assert!(s.ends_with("\t\tVHT TX highest supported: 0 Mbps\n\t\tVHT extended NSS: supported\n"));
    }

    #[test]
    fn vht_operation_widths() {
        assert_eq!(
            decoded(vht_operation, &[1, 42, 0, 0xfa, 0xff]),
            "\n\t\t * channel width: 1 (80 MHz)\n\
             \t\t * center freq segment 0: 42\n\
             \t\t * center freq segment 1: 0\n\
             \t\t * VHT basic MCS set: 0xfffa\n"
        );
        assert!(decoded(vht_operation, &[9, 0, 0, 0, 0]).contains(" 9 (unknown)\n"));
    }

    #[test]
    fn s1g_operation_widths() {
        let s = decoded(s1g_operation, &[0x23, 68, 36, 37, 0x00, 0xff]);
        assert!(s.starts_with(
            "\n\t\tChannel width:\n\
             \t\t\tBSS primary channel width: 1 MHz\n\
             \t\t\tBSS operating channel width: 2 MHz\n\
             \t\t\t1 MHz primary channel located at the lower side of 2 MHz\n"
        ));
        assert!(s.contains("\t\tMax S1G MCS Map:\n\t\t\tFor 1 SS: Max S1G-MCS 2\n"));
        assert!(s.ends_with("\t\t\tFor 4 SS: invalid\n"));

        let s = decoded(s1g_operation, &[0x00, 0, 0, 0, 0, 0]);
        assert!(s.contains("\t\t\tBSS primary channel width: invalid\n"));
    }

    #[test]
    fn s1g_capabilities_bytes() {
        let mut r = [0u8; 15];
        r[0] = 0x43;
        r[1] = 0x01;

        assert_eq!(
            decoded(s1g_capabilities, &r),
            "\n\t\tByte[0]: 0x43\n\
             \t\t\tS1G_LONG\n\
             \t\t\tShort GI for 1 MHz\n\
             \t\t\tSupported Channel Width: 1, 2, 4 MHz\n\
             \t\tByte[1]: 0x01\n\
             \t\t\tRx LDPC\n\
             \t\tSupported S1G-MCS and NSS Set: 00 00 00 00 00\n"
        );
    }
}
