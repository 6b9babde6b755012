//! Rendering of a whole scan result: the BSS summary, then its element sets.

use core::fmt::{self, Write};

use tartan_bitfield::bitfield;

use super::{Options, display::Mac, slice};

/// The station's relation to a BSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Authenticated,
    Associated,
    IbssJoined,
    Unknown(u32),
}

/// A scan result, as reported for one BSS.
///
/// Every field except the BSSID is optional, as drivers report different
/// subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bss<'a> {
    pub bssid: [u8; 6],
    /// Name of the interface the result was seen on.
    pub ifname: Option<&'a str>,
    pub status: Option<Status>,
    /// Boot time of the last sighting, in nanoseconds.
    pub last_seen_boottime: Option<u64>,
    /// Timing synchronization function value, in microseconds.
    pub tsf: Option<u64>,
    /// Primary channel frequency, in MHz.
    pub frequency: Option<u32>,
    /// Fractional part of the frequency, in KHz.
    pub frequency_offset: Option<u32>,
    /// Beacon interval, in time units.
    pub beacon_interval: Option<u16>,
    pub capability: Option<u16>,
    /// Signal strength, in mBm.
    pub signal_mbm: Option<i32>,
    /// Signal strength, in unspecified units up to 100.
    pub signal_unspecified: Option<u8>,
    /// Noise level, in dBm.
    pub noise: Option<i8>,
    pub seen_ms_ago: Option<u32>,
    /// Elements from a probe response, or from whichever frame was last seen.
    pub ies: Option<&'a [u8]>,
    /// Elements from a beacon.
    pub beacon_ies: Option<&'a [u8]>,
    /// Whether [`ies`](Self::ies) is known to come from a probe response.
    pub probe_response_data: bool,
}

/// The element sets to render for a BSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IeSets {
    /// The probe response set if present, otherwise the beacon set.
    #[default]
    Preferred,
    Both,
    ProbeResponse,
    Beacon,
}

/// Frequencies above this are directional multi-gigabit channels, which
/// redefine the capability field.
const DMG_FREQUENCY: u32 = 45000;

bitfield! {
    struct Capability(u16) {
        [0] ess,
        [1] ibss,
        [2] cf_pollable,
        [3] cf_poll_request,
        [4] privacy,
        [5] short_preamble,
        [6] pbcc,
        [7] channel_agility,
        [8] spectrum_management,
        [9] qos,
        [10] short_slot_time,
        [11] apsd,
        [12] radio_measurement,
        [13] dsss_ofdm,
        [14] delayed_block_ack,
        [15] immediate_block_ack,
    }
}

bitfield! {
    struct DmgCapability(u16) {
        [0..2] kind: u8,
        [2] cbap_only,
        [3] cbap_source,
        [4] privacy,
        [5] ecpac,
        [8] spectrum_management,
        [12] radio_measurement,
    }
}

fn capability(v: u16, f: &mut dyn Write) -> fmt::Result {
    let c = Capability(v);

    for (set, name) in [
        (c.ess(), " ESS"),
        (c.ibss(), " IBSS"),
        (c.cf_pollable(), " CfPollable"),
        (c.cf_poll_request(), " CfPollReq"),
        (c.privacy(), " Privacy"),
        (c.short_preamble(), " ShortPreamble"),
        (c.pbcc(), " PBCC"),
        (c.channel_agility(), " ChannelAgility"),
        (c.spectrum_management(), " SpectrumMgmt"),
        (c.qos(), " QoS"),
        (c.short_slot_time(), " ShortSlotTime"),
        (c.apsd(), " APSD"),
        (c.radio_measurement(), " RadioMeasure"),
        (c.dsss_ofdm(), " DSSS-OFDM"),
        (c.delayed_block_ack(), " DelayedBACK"),
        (c.immediate_block_ack(), " ImmediateBACK"),
    ] {
        if set {
            f.write_str(name)?;
        }
    }

    Ok(())
}

fn dmg_capability(v: u16, f: &mut dyn Write) -> fmt::Result {
    let c = DmgCapability(v);

    match c.kind() {
        1 => f.write_str(" DMG_IBSS")?,
        2 => f.write_str(" DMG_PCP")?,
        3 => f.write_str(" DMG_ESS")?,
        _ => {}
    }

    for (set, name) in [
        (c.cbap_only(), " CBAP_Only"),
        (c.cbap_source(), " CBAP_Src"),
        (c.privacy(), " Privacy"),
        (c.ecpac(), " ECPAC"),
        (c.spectrum_management(), " SpectrumMgmt"),
        (c.radio_measurement(), " RadioMeasure"),
    ] {
        if set {
            f.write_str(name)?;
        }
    }

    Ok(())
}

/// A signal in mBm as dBm with two decimals.
fn mbm(v: i32, f: &mut dyn Write) -> fmt::Result {
    let sign = if v < 0 { "-" } else { "" };
    let v = v.unsigned_abs();

    write!(f, "{sign}{}.{:02}", v / 100, v % 100)
}

fn summary(bss: &Bss<'_>, f: &mut dyn Write) -> fmt::Result {
    write!(f, "BSS {}", Mac(bss.bssid))?;

    if let Some(ifname) = bss.ifname {
        write!(f, "(on {ifname})")?;
    }

    match bss.status {
        Some(Status::Authenticated) => f.write_str(" -- authenticated")?,
        Some(Status::Associated) => f.write_str(" -- associated")?,
        Some(Status::IbssJoined) => f.write_str(" -- joined")?,
        Some(Status::Unknown(status)) => write!(f, " -- unknown status: {status}")?,
        None => {}
    }

    writeln!(f)?;

    if let Some(ns) = bss.last_seen_boottime {
        writeln!(
            f,
            "\tlast seen: {}.{:03}s [boottime]",
            ns / 1_000_000_000,
            ns % 1_000_000_000 / 1_000_000
        )?;
    }

    if let Some(tsf) = bss.tsf {
        let s = tsf / 1_000_000;

        writeln!(
            f,
            "\tTSF: {tsf} usec ({}d, {:02}:{:02}:{:02})",
            s / 86400,
            s / 3600 % 24,
            s / 60 % 60,
            s % 60
        )?;
    }

    if let Some(frequency) = bss.frequency {
        match bss.frequency_offset {
            Some(offset) => writeln!(f, "\tfreq: {frequency}.{offset}")?,
            None => writeln!(f, "\tfreq: {frequency}")?,
        }
    }

    if let Some(interval) = bss.beacon_interval {
        writeln!(f, "\tbeacon interval: {interval} TUs")?;
    }

    if let Some(v) = bss.capability {
        f.write_str("\tcapability:")?;

        match bss.frequency {
            Some(frequency) if frequency > DMG_FREQUENCY => dmg_capability(v, f)?,
            _ => capability(v, f)?,
        }

        writeln!(f, " ({v:#06x})")?;
    }

    if let Some(signal) = bss.signal_mbm {
        f.write_str("\tsignal: ")?;
        mbm(signal, f)?;
        writeln!(f, " dBm")?;
    }

    if let Some(signal) = bss.signal_unspecified {
        writeln!(f, "\tsignal: {signal}/100")?;
    }

    if let Some(noise) = bss.noise {
        writeln!(f, "\tnoise: {noise}.00 dBm")?;
    }

    if let Some(age) = bss.seen_ms_ago {
        writeln!(f, "\tlast seen: {age} ms ago")?;
    }

    Ok(())
}

/// Render a BSS summary followed by the selected element sets.
///
/// The probe response set is headed by a title only when it is known to
/// differ from the beacon set.
pub fn render(bss: &Bss<'_>, options: &Options, ies: IeSets, f: &mut impl Write) -> fmt::Result {
    summary(bss, f)?;

    let (probe_response, beacon) = match ies {
        IeSets::Preferred => (bss.ies, bss.ies.is_none().then_some(bss.beacon_ies).flatten()),
        IeSets::Both => (bss.ies, bss.beacon_ies),
        IeSets::ProbeResponse => (bss.ies, None),
        IeSets::Beacon => (None, bss.beacon_ies),
    };

    if let Some(r) = probe_response {
        let distinct = bss.probe_response_data || bss.beacon_ies.is_some_and(|b| b != r);

        if distinct {
            writeln!(f, "\tInformation elements from Probe Response frame:")?;
        }

        slice::render(r, options, f)?;
    }

    if let Some(r) = beacon {
        writeln!(f, "\tInformation elements from Beacon frame:")?;
        slice::render(r, options, f)?;
    }

    Ok(())
}
