//! Decoders for simple and bitmask elements.

use core::fmt::{self, Write};

use tartan_bitfield::bitfield;
use zerocopy::FromBytes;

use crate::sans::{
    element::{Elements, Id, Oui},
    tlv::{Item, Records, Subelement},
};

use super::{
    display::{Hex, Mac, Ssid, Text},
    registry::Scope,
};

pub fn ssid(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    writeln!(f, " {}", Ssid(r))
}

/// Supported and extended supported rates, in Mb/s. Basic rates are starred.
pub fn supported_rates(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    const VHT_PHY: u8 = 126;
    const HT_PHY: u8 = 127;

    f.write_str(" ")?;

    for &b in r {
        let rate = b & 0x7f;
        let basic = b & 0x80 != 0;

        match rate {
            VHT_PHY if basic => f.write_str("VHT")?,
            HT_PHY if basic => f.write_str("HT")?,
            _ => write!(f, "{}.{}", rate / 2, 5 * (rate & 1))?,
        }

        f.write_str(if basic { "* " } else { " " })?;
    }

    writeln!(f)
}

pub fn ds(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let &[channel, ..] = r else { return Ok(()) };
    writeln!(f, " channel {channel}")
}

pub fn tim(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let &[count, period, control, bitmap, ref rest @ ..] = r else {
        return Ok(());
    };

    write!(
        f,
        " DTIM Count {count} DTIM Period {period} Bitmap Control {control:#x} Bitmap[0] {bitmap:#x}"
    )?;

    match rest.len() {
        0 => {}
        1 => write!(f, " (+ 1 octet)")?,
        n => write!(f, " (+ {n} octets)")?,
    }

    writeln!(f)
}

pub fn ibss_atim(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let Some(&window) = r.first_chunk::<2>() else {
        return Ok(());
    };

    writeln!(f, " {} TUs", u16::from_le_bytes(window))
}

/// Country code, environment, and the channel or regulatory triplets.
pub fn country(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    const EXTENSION_ID: u8 = 201;

    let &[a, b, environment, ref triplets @ ..] = r else {
        return Ok(());
    };

    let environment = match environment {
        b'I' => "Indoor only",
        b'O' => "Outdoor only",
        b' ' => "Indoor/Outdoor",
        _ => "bogus",
    };

    writeln!(f, " {}\tEnvironment: {environment}", Text(&[a, b]))?;

    if triplets.len() < 3 {
        return writeln!(f, "\t\tNo country IE triplets present");
    }

    for triplet in triplets.chunks_exact(3) {
        let &[first, second, third] = triplet else {
            continue;
        };

        if first >= EXTENSION_ID {
            writeln!(
                f,
                "\t\tExtension ID: {first} Regulatory Class: {second} Coverage class: {third} (up to {}m)",
                third as u32 * 450
            )?;
            continue;
        }

        // Channels are spaced by one in the 2.4 GHz band, by four above it.
        let (start, count) = (first as i32, second as i32);
        let end = match first {
            ..=14 => start + (count - 1),
            _ => start + 4 * (count - 1),
        };

        writeln!(f, "\t\tChannels [{start} - {end}] @ {} dBm", third as i8)?;
    }

    Ok(())
}

pub fn bss_load(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct BssLoad {
        station_count: [u8; 2],
        channel_utilization: u8,
        available_capacity: [u8; 2],
    }

    let Some(&r) = r.first_chunk::<5>() else {
        return Ok(());
    };

    let BssLoad {
        station_count,
        channel_utilization,
        available_capacity,
    } = zerocopy::transmute!(r);

    writeln!(f)?;
    writeln!(f, "\t\t * station count: {}", u16::from_le_bytes(station_count))?;
    writeln!(f, "\t\t * channel utilisation: {channel_utilization}/255")?;
    writeln!(
        f,
        "\t\t * available admission capacity: {} [*32us]",
        u16::from_le_bytes(available_capacity)
    )
}

pub fn power_constraint(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let &[constraint, ..] = r else { return Ok(()) };
    writeln!(f, " {constraint} dB")
}

pub fn tpc_report(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    // The link margin is reserved in beacons.
    let &[power, ..] = r else { return Ok(()) };
    writeln!(f, " TX power: {power} dBm")
}

/// ERP information, and its pre-standard draft variant.
pub fn erp(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let &[b, ..] = r else { return Ok(()) };

    bitfield! {
        struct Erp(u8) {
            [0] non_erp_present,
            [1] use_protection,
            [2] barker_preamble_mode,
        }
    }

    let erp = Erp(b);

    if b == 0 {
        f.write_str(" <no flags>")?;
    }
    if erp.non_erp_present() {
        f.write_str(" NonERP_Present")?;
    }
    if erp.use_protection() {
        f.write_str(" Use_Protection")?;
    }
    if erp.barker_preamble_mode() {
        f.write_str(" Barker_Preamble_Mode")?;
    }

    writeln!(f)
}

pub fn ap_channel_report(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let Some((class, channels)) = r.split_first() else {
        return Ok(());
    };

    writeln!(f)?;
    writeln!(f, "\t\t * operating class: {class}")?;
    f.write_str("\t\t * channel(s):")?;
    channels.iter().try_for_each(|c| write!(f, " {c}"))?;
    writeln!(f)
}

/// Supported operating classes.
///
/// The current class is followed by the other supported classes. A 130
/// delimiter introduces the current operating class extension sequence, and a
/// zero delimiter introduces operating class duples.
pub fn operating_classes(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    const EXTENSION: u8 = 130;
    const DUPLES: u8 = 0;

    fn split_at_delimiter<'a>(r: &'a [u8], delimiters: &[u8]) -> (&'a [u8], &'a [u8]) {
        let end = r.iter().position(|c| delimiters.contains(c)).unwrap_or(r.len());
        r.split_at(end)
    }

    let Some((current, rest)) = r.split_first() else {
        return Ok(());
    };

    writeln!(f)?;
    writeln!(f, "\t\t * current operating class: {current}")?;

    let (classes, rest) = split_at_delimiter(rest, &[EXTENSION, DUPLES]);

    for class in classes {
        writeln!(f, "\t\t * operating class: {class}")?;
    }

    let rest = match rest.split_first() {
        Some((&EXTENSION, rest)) => {
            let (extensions, rest) = split_at_delimiter(rest, &[DUPLES]);

            for class in extensions {
                writeln!(f, "\t\t * current operating class extension: {class}")?;
            }

            rest
        }
        _ => rest,
    };

    if let Some((&DUPLES, duples)) = rest.split_first() {
        for duple in duples.chunks_exact(2) {
            let &[class, channel] = duple else { continue };
            writeln!(f, "\t\t * operating class tuple: {class} {channel}")?;
        }
    }

    Ok(())
}

/// Measurement pilot interval, then vendor-specific subelements.
pub fn measurement_pilot(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    const VENDOR_SPECIFIC: u16 = Id::VENDOR_SPECIFIC.0 as u16;

    let Some((interval, subelements)) = r.split_first() else {
        return Ok(());
    };

    writeln!(f)?;
    writeln!(f, "\t\t * interval: {interval} TUs")?;

    for item in Records::<Subelement>::new(subelements) {
        match item {
            Item::Record {
                kind: VENDOR_SPECIFIC,
                body,
            } => {
                let Some((&oui, data)) = body.split_first_chunk::<3>() else {
                    return writeln!(f, "\t\t * <Parse error, element too short>");
                };

                writeln!(f, "\t\t * vendor specific: OUI {}, data:{}", Oui(oui), Hex(data))?;
            }
            Item::Record { kind, .. } => {
                // Only vendor-specific subelements are defined.
                return writeln!(f, "\t\t * <Invalid subelement ID {kind}>");
            }
            Item::BogusTail(tail) => {
                writeln!(f, "\t\t * bogus tail data ({}):{}", tail.len(), Hex(tail))?;
            }
        }
    }

    Ok(())
}

const RM_CAPABILITIES: [(u8, &str); 27] = [
    (0, "Link Measurement"),
    (1, "Neighbor Report"),
    (2, "Parallel Measurements"),
    (3, "Repeated Measurements"),
    (4, "Beacon Passive Measurement"),
    (5, "Beacon Active Measurement"),
    (6, "Beacon Table Measurement"),
    (7, "Beacon Measurement Reporting Conditions"),
    (8, "Frame Measurement"),
    (9, "Channel Load"),
    (10, "Noise Histogram Measurement"),
    (11, "Statistics Measurement"),
    (12, "LCI Measurement"),
    (13, "LCI Azimuth"),
    (14, "Transmit Stream/Category Measurement"),
    (15, "Triggered Transmit Stream/Category"),
    (16, "AP Channel Report"),
    (17, "RM MIB Capability"),
    (27, "Measurement Pilot Transmission Information"),
    (28, "Neighbor Report TSF Offset"),
    (29, "RCPI Measurement"),
    (30, "RSNI Measurement"),
    (31, "BSS Average Access Delay"),
    (32, "BSS Available Admission"),
    (33, "Antenna"),
    (34, "FTM Range Report"),
    (35, "Civic Location Measurement"),
];

pub fn rm_enabled_capabilities(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let Some(&[a, b, c, d, e]) = r.first_chunk::<5>() else {
        return Ok(());
    };

    let capabilities = u64::from_le_bytes([a, b, c, d, e, 0, 0, 0]);

    writeln!(f)?;
    writeln!(
        f,
        "\t\tCapabilities: {a:#04x} {b:#04x} {c:#04x} {d:#04x} {e:#04x}"
    )?;

    for (bit, name) in RM_CAPABILITIES {
        if capabilities & 1 << bit != 0 {
            writeln!(f, "\t\t\t{name}")?;
        }
    }

    writeln!(f, "\t\tNonoperating Channel Max Measurement Duration: {}", d >> 5)?;
    writeln!(f, "\t\tMeasurement Pilot Capability: {}", e & 7)
}

pub fn obss_scan_parameters(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct ScanParameters {
        passive_dwell: [u8; 2],
        active_dwell: [u8; 2],
        trigger_interval: [u8; 2],
        passive_total: [u8; 2],
        active_total: [u8; 2],
        delay_factor: [u8; 2],
        activity_threshold: [u8; 2],
    }

    let Some(&r) = r.first_chunk::<14>() else {
        return Ok(());
    };

    let ScanParameters {
        passive_dwell,
        active_dwell,
        trigger_interval,
        passive_total,
        active_total,
        delay_factor,
        activity_threshold,
    } = zerocopy::transmute!(r);

    let threshold = u16::from_le_bytes(activity_threshold);

    writeln!(f)?;
    writeln!(f, "\t\t * passive dwell: {} TUs", u16::from_le_bytes(passive_dwell))?;
    writeln!(f, "\t\t * active dwell: {} TUs", u16::from_le_bytes(active_dwell))?;
    writeln!(
        f,
        "\t\t * channel width trigger scan interval: {} s",
        u16::from_le_bytes(trigger_interval)
    )?;
    writeln!(
        f,
        "\t\t * scan passive total per channel: {} TUs",
        u16::from_le_bytes(passive_total)
    )?;
    writeln!(
        f,
        "\t\t * scan active total per channel: {} TUs",
        u16::from_le_bytes(active_total)
    )?;
    writeln!(
        f,
        "\t\t * BSS width channel transition delay factor: {}",
        u16::from_le_bytes(delay_factor)
    )?;
    writeln!(
        f,
        "\t\t * OBSS Scan Activity Threshold: {}.{:02} %",
        threshold / 100,
        threshold % 100
    )
}

fn network_type(v: u8) -> &'static str {
    match v {
        0 => "Private",
        1 => "Private with Guest",
        2 => "Chargeable Public",
        3 => "Free Public",
        4 => "Personal Device",
        5 => "Emergency Services Only",
        14 => "Test or Experimental",
        15 => "Wildcard",
        _ => "Reserved",
    }
}

fn venue_group(v: u8) -> &'static str {
    match v {
        0 => "Unspecified",
        1 => "Assembly",
        2 => "Business",
        3 => "Educational",
        4 => "Factory and Industrial",
        5 => "Institutional",
        6 => "Mercantile",
        7 => "Residential",
        8 => "Storage",
        9 => "Utility and Miscellaneous",
        10 => "Vehicular",
        11 => "Outdoor",
        _ => "Reserved",
    }
}

/// 802.11u Interworking: access network options, then an optional venue and
/// HESSID.
pub fn interworking(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    bitfield! {
        struct NetworkOptions(u8) {
            [0..4] network_type: u8,
            [4] internet,
            [5] asra,
            [6] esr,
            [7] uesa,
        }
    }

    writeln!(f)?;

    if let Some(&options) = r.first() {
        let network = NetworkOptions(options);
        let kind = network.network_type();

        writeln!(f, "\t\tNetwork Options: {options:#x}")?;
        writeln!(f, "\t\t\tNetwork Type: {kind} ({})", network_type(kind))?;

        for (set, name) in [
            (network.internet(), "Internet"),
            (network.asra(), "ASRA"),
            (network.esr(), "ESR"),
            (network.uesa(), "UESA"),
        ] {
            if set {
                writeln!(f, "\t\t\t{name}")?;
            }
        }
    }

    let (venue, hessid) = match r {
        &[_, group, kind] => (Some((group, kind)), None),
        &[_, group, kind, ref hessid @ ..] if hessid.len() == 6 => {
            (Some((group, kind)), Some(hessid))
        }
        [_, hessid @ ..] if hessid.len() == 6 => (None, Some(hessid)),
        _ => (None, None),
    };

    if let Some((group, kind)) = venue {
        writeln!(f, "\t\tVenue Group: {group} ({})", venue_group(group))?;
        writeln!(f, "\t\tVenue Type: {kind}")?;
    }

    if let Some(&hessid) = hessid.and_then(|r| r.first_chunk::<6>()) {
        writeln!(f, "\t\tHESSID: {}", Mac(hessid))?;
    }

    Ok(())
}

/// 802.11u Advertisement Protocol tuples.
pub fn advertisement_protocol(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    writeln!(f)?;

    for tuple in r.chunks_exact(2) {
        let &[info, protocol] = tuple else { continue };

        writeln!(f, "\t\tQuery Response Info: {info:#x}")?;
        writeln!(f, "\t\t\tQuery Response Length Limit: {}", info & 0x7f)?;

        if info & 0x80 != 0 {
            writeln!(f, "\t\t\tPAME-BI")?;
        }

        match protocol {
            0 => writeln!(f, "\t\t\tANQP")?,
            1 => writeln!(f, "\t\t\tMIH Information Service")?,
            2 => writeln!(f, "\t\t\tMIH Command and Event Services Capability Discovery")?,
            3 => writeln!(f, "\t\t\tEmergency Alert System (EAS)")?,
            221 => writeln!(f, "\t\t\tVendor Specific")?,
            _ => writeln!(f, "\t\t\tReserved: {protocol}")?,
        }
    }

    Ok(())
}

/// 802.11u Roaming Consortium: up to three organization identifiers, with
/// the first two lengths given by the nibbles of the second byte.
pub fn roaming_consortium(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let &[anqp_ois, lengths, ref ois @ ..] = r else {
        return Ok(());
    };

    let first = (lengths & 0x0f) as usize;
    let second = (lengths >> 4) as usize;
    let third = match second {
        0 => 0,
        _ => ois.len().saturating_sub(first + second),
    };

    writeln!(f)?;
    writeln!(f, "\t\tANQP OIs: {anqp_ois}")?;

    let mut start = 0;

    for (n, len) in [first, second, third].into_iter().enumerate() {
        if len == 0 {
            continue;
        }

        write!(f, "\t\tOI {}: ", n + 1)?;

        match ois.get(start..start + len) {
            Some(oi) => {
                oi.iter().try_for_each(|b| write!(f, "{b:02x}"))?;
                writeln!(f)?;
            }
            None => writeln!(f, "Invalid IE length.")?,
        }

        start += len;
    }

    Ok(())
}

/// Transmit power envelope, in half-dBm steps.
pub fn transmit_power_envelope(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    const NAMES: [&str; 4] = [
        "Local Maximum Transmit Power For 20 MHz",
        "Local Maximum Transmit Power For 40 MHz",
        "Local Maximum Transmit Power For 80 MHz",
        "Local Maximum Transmit Power For 160/80+80 MHz",
    ];

    bitfield! {
        struct PowerInformation(u8) {
            [0..3] count: u8,
            [3..6] unit_interpretation: u8,
        }
    }

    let Some((&information, powers)) = r.split_first() else {
        return Ok(());
    };

    let information = PowerInformation(information);

    writeln!(f)?;

    // Only the EIRP interpretation with one entry per width is understood.
    if information.count() as usize + 1 != powers.len() || information.unit_interpretation() != 0 {
        return Ok(());
    }

    for (name, &power) in NAMES.iter().zip(powers) {
        let power = power as i8;
        let sign = if power < 0 { "-" } else { "" };
        let half_dbm = power.unsigned_abs();

        match half_dbm & 1 {
            0 => writeln!(f, "\t\t * {name}: {sign}{} dBm", half_dbm / 2)?,
            _ => writeln!(f, "\t\t * {name}: {sign}{}.5 dBm", half_dbm / 2)?,
        }
    }

    Ok(())
}

pub fn mesh_configuration(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    const CAPABILITIES: [(u8, &str); 7] = [
        (0x01, "Accepting Additional Mesh Peerings"),
        (0x02, "MCCA Supported"),
        (0x04, "MCCA Enabled"),
        (0x08, "Forwarding"),
        (0x10, "MBCA Supported"),
        (0x20, "TBTT Adjusting"),
        (0x40, "Mesh Power Save Level"),
    ];

    bitfield! {
        struct FormationInfo(u8) {
            [0] connected_to_gate,
            [1..7] peerings: u8,
            [7] connected_to_as,
        }
    }

    let Some(&[protocol, metric, congestion, synchronization, authentication, formation, capability]) =
        r.first_chunk::<7>()
    else {
        return Ok(());
    };

    let formation = FormationInfo(formation);

    writeln!(f)?;
    writeln!(f, "\t\t * Active Path Selection Protocol ID: {protocol}")?;
    writeln!(f, "\t\t * Active Path Selection Metric ID: {metric}")?;
    writeln!(f, "\t\t * Congestion Control Mode ID: {congestion}")?;
    writeln!(f, "\t\t * Synchronization Method ID: {synchronization}")?;
    writeln!(f, "\t\t * Authentication Protocol ID: {authentication}")?;
    writeln!(f, "\t\t * Mesh Formation Info:")?;
    writeln!(f, "\t\t\t Number of Peerings: {}", formation.peerings())?;

    if formation.connected_to_gate() {
        writeln!(f, "\t\t\t Connected to Mesh Gate")?;
    }
    if formation.connected_to_as() {
        writeln!(f, "\t\t\t Connected to AS")?;
    }

    writeln!(f, "\t\t * Mesh Capability")?;

    for (mask, name) in CAPABILITIES {
        if capability & mask != 0 {
            writeln!(f, "\t\t\t {name}")?;
        }
    }

    Ok(())
}

pub fn short_beacon_interval(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let Some(&interval) = r.first_chunk::<2>() else {
        return Ok(());
    };

    writeln!(f, " {}", u16::from_le_bytes(interval))
}

fn extended_capability(bit: usize) -> Option<&'static str> {
    Some(match bit {
        0 => "HT Information Exchange Supported",
        1 => "reserved (On-demand Beacon)",
        2 => "Extended Channel Switching",
        3 => "reserved (Wave Indication)",
        4 => "PSMP Capability",
        5 => "reserved (Service Interval Granularity)",
        6 => "S-PSMP Capability",
        7 => "Event",
        8 => "Diagnostics",
        9 => "Multicast Diagnostics",
        10 => "Location Tracking",
        11 => "FMS",
        12 => "Proxy ARP Service",
        13 => "Collocated Interference Reporting",
        14 => "Civic Location",
        15 => "Geospatial Location",
        16 => "TFS",
        17 => "WNM-Sleep Mode",
        18 => "TIM Broadcast",
        19 => "BSS Transition",
        20 => "QoS Traffic Capability",
        21 => "AC Station Count",
        22 => "Multiple BSSID",
        23 => "Timing Measurement",
        24 => "Channel Usage",
        25 => "SSID List",
        26 => "DMS",
        27 => "UTC TSF Offset",
        28 => "TDLS Peer U-APSD Buffer STA Support",
        29 => "TDLS Peer PSM Support",
        30 => "TDLS channel switching",
        31 => "Interworking",
        32 => "QoS Map",
        33 => "EBR",
        34 => "SSPN Interface",
        35 => "Reserved",
        36 => "MSGCF Capability",
        37 => "TDLS Support",
        38 => "TDLS Prohibited",
        39 => "TDLS Channel Switching Prohibited",
        40 => "Reject Unadmitted Frame",
        44 => "Identifier Location",
        45 => "U-APSD Coexistence",
        46 => "WNM-Notification",
        47 => "Reserved",
        48 => "UTF-8 SSID",
        49 => "QMFActivated",
        50 => "QMFReconfigurationActivated",
        51 => "Robust AV Streaming",
        52 => "Advanced GCR",
        53 => "Mesh GCR",
        54 => "SCS",
        55 => "QLoad Report",
        56 => "Alternate EDCA",
        57 => "Unprotected TXOP Negotiation",
        58 => "Protected TXOP Negotiation",
        59 => "Reserved",
        60 => "Protected QLoad Report",
        61 => "TDLS Wider Bandwidth",
        62 => "Operating Mode Notification",
        65 => "Channel Schedule Management",
        66 => "Geodatabase Inband Enabling Signal",
        67 => "Network Channel Control",
        68 => "White Space Map",
        69 => "Channel Availability Query",
        70 => "FTM Responder",
        71 => "FTM Initiator",
        72 => "Reserved",
        73 => "Extended Spectrum Management Capable",
        74 => "Reserved",
        77 => "TWT Requester Support",
        78 => "TWT Responder Support",
        79 => "OBSS Narrow Bandwidth RU in UL OFDMA Tolerance Support",
        _ => None?,
    })
}

/// Extended capabilities, one line per set bit.
///
/// Bits 41 to 43 carry the S-PSMP service interval granularity, and bits 63
/// and 64 the A-MSDU limit when a VHT Capabilities element is present in the
/// same buffer; otherwise they are reserved.
pub fn extended_capabilities(r: &[u8], scope: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    const S_PSMP: usize = 6;

    let vht = Elements::new(scope.ies).any(|e| e.id == Id::VHT_CAPABILITIES);

    let mut s_psmp = false;
    let mut granularity = 0;
    let mut max_msdus = 0;

    let bits = r
        .iter()
        .enumerate()
        .flat_map(|(i, &b)| (0..8).filter(move |n| b & 1 << n != 0).map(move |n| 8 * i + n));

    for bit in bits {
        f.write_str("\n\t\t *")?;

        match bit {
            S_PSMP => {
                s_psmp = true;
                f.write_str(" S-PSMP Capability")?;
            }
            41..=43 if s_psmp => granularity += 1 << (bit - 41),
            63 | 64 if vht => max_msdus += 1 << (bit - 63),
            41..=43 | 63 | 64 => f.write_str(" Reserved")?,
            _ => match extended_capability(bit) {
                Some(name) => write!(f, " {name}")?,
                None => write!(f, " {bit}")?,
            },
        }
    }

    if s_psmp {
        write!(
            f,
            "\n\t\t * Service Interval Granularity is {} ms",
            (granularity + 1) * 5
        )?;
    }

    if vht {
        let limit = match max_msdus {
            0 => "unlimited",
            1 => "32",
            2 => "16",
            _ => "8",
        };

        write!(f, "\n\t\t * Max Number Of MSDUs In A-MSDU is {limit}")?;
    }

    writeln!(f)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::String;

    use super::*;
    use crate::avec::{Options, registry::Decode};

    fn decoded(decode: Decode, r: &[u8], ies: &[u8]) -> String {
        let options = Options::default();
        let scope = Scope { ies, options: &options };

        let mut s = String::new();
        decode(r, &scope, &mut s).unwrap();
        s
    }

    #[test]
    fn rates_with_membership_selectors() {
        let r = [0x82, 0x84, 0x0b, 0x16, 0xff, 0xfe];
        assert_eq!(decoded(supported_rates, &r, &[]), " 1.0* 2.0* 5.5 11.0 HT* VHT* \n");
    }

    #[test]
    fn country_triplets() {
        let r = [b'D', b'E', b' ', 1, 13, 20, 36, 4, 23, 201, 1, 3];
        assert_eq!(
            decoded(country, &r, &[]),
            " DE\tEnvironment: Indoor/Outdoor\n\
             \t\tChannels [1 - 13] @ 20 dBm\n\
             \t\tChannels [36 - 48] @ 23 dBm\n\
             \t\tExtension ID: 201 Regulatory Class: 1 Coverage class: 3 (up to 1350m)\n"
        );

        assert_eq!(
            decoded(country, &[b'U', b'S', b'I', 1, 11], &[]),
            " US\tEnvironment: Indoor only\n\t\tNo country IE triplets present\n"
        );
    }

    #[test]
    fn single_operating_class() {
        assert_eq!(
            decoded(operating_classes, &[81], &[]),
            "\n\t\t * current operating class: 81\n"
        );
    }

    #[test]
    fn operating_class_delimiters() {
        let r = [81, 115, 130, 128, 0, 81, 6];
        assert_eq!(
            decoded(operating_classes, &r, &[]),
            "\n\t\t * current operating class: 81\n\
             \t\t * operating class: 115\n\
             \t\t * current operating class extension: 128\n\
             \t\t * operating class tuple: 81 6\n"
        );
    }

    #[test]
    fn measurement_pilot_subelements() {
        let r = [10, 221, 4, 0x00, 0x10, 0x18, 0x01, 1, 1, 0];
        assert_eq!(
            decoded(measurement_pilot, &r, &[]),
            "\n\t\t * interval: 10 TUs\n\
             \t\t * vendor specific: OUI 00:10:18, data: 01\n\
             \t\t * <Invalid subelement ID 1>\n"
        );

        let r = [10, 221, 9, 0x00];
        assert_eq!(
            decoded(measurement_pilot, &r, &[]),
            "\n\t\t * interval: 10 TUs\n\t\t * bogus tail data (3): dd 09 00\n"
        );
    }

    #[test]
    fn extended_capabilities_gated_on_vht() {
        // Bit 6 (S-PSMP), bit 42, bit 19 and bit 63.
        let r = [0x40, 0x00, 0x08, 0x00, 0x00, 0x04, 0x00, 0x80];

        assert_eq!(
            decoded(extended_capabilities, &r, &[]),
            "\n\t\t * S-PSMP Capability\
             \n\t\t * BSS Transition\
             \n\t\t *\
             \n\t\t * Reserved\
             \n\t\t * Service Interval Granularity is 15 ms\n"
        );

        let ies = [191, 0];
        assert_eq!(
            decoded(extended_capabilities, &r, &ies),
            "\n\t\t * S-PSMP Capability\
             \n\t\t * BSS Transition\
             \n\t\t *\
             \n\t\t *\
             \n\t\t * Service Interval Granularity is 15 ms\
             \n\t\t * Max Number Of MSDUs In A-MSDU is 32\n"
        );
    }

    #[test]
    fn roaming_consortium_lengths() {
        let r = [0, 0x33, 0x50, 0x6f, 0x9a, 0x00, 0x1b, 0xc5, 0x04, 0xbd];
        assert_eq!(
            decoded(roaming_consortium, &r, &[]),
            "\n\t\tANQP OIs: 0\n\t\tOI 1: 506f9a\n\t\tOI 2: 001bc5\n\t\tOI 3: 04bd\n"
        );

        let r = [1, 0x05, 0x50, 0x6f];
        assert_eq!(
            decoded(roaming_consortium, &r, &[]),
            "\n\t\tANQP OIs: 1\n\t\tOI 1: Invalid IE length.\n"
        );
    }

    #[test]
    fn transmit_power_half_steps() {
        let r = [0x01, 0x29, 0xff];
        assert_eq!(
            decoded(transmit_power_envelope, &r, &[]),
            "\n\t\t * Local Maximum Transmit Power For 20 MHz: 20.5 dBm\
             \n\t\t * Local Maximum Transmit Power For 40 MHz: -0.5 dBm\n"
        );

        assert_eq!(decoded(transmit_power_envelope, &[0x02, 0x28], &[]), "\n");
    }

    #[test]
    fn interworking_with_venue_and_hessid() {
        let r = [0x12, 2, 8, 0x02, 0, 0x5e, 0x10, 0, 0x01];
        assert_eq!(
            decoded(interworking, &r, &[]),
            "\n\t\tNetwork Options: 0x12\n\
             \t\t\tNetwork Type: 2 (Chargeable Public)\n\
             \t\t\tInternet\n\
             \t\tVenue Group: 2 (Business)\n\
             \t\tVenue Type: 8\n\
             \t\tHESSID: 02:00:5e:10:00:01\n"
        );
    }
}
