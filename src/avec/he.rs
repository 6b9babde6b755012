//! Renderers for the HE Capabilities and HE Operation extension elements.
//!
//! HE capabilities are rendered while the state machine of
//! [`sans::he::capabilities`](crate::sans::he::capabilities) advances, so the
//! blocks decoded before a truncation are still printed, followed by
//! `invalid`.

use core::fmt::{self, Write};

use either::Either::{Left, Right};

use crate::sans::{
    bits::Field,
    he::{
        capabilities::{
            HeCapabilities, MacCapabilities, McsMap, McsNssSet, PhyCapabilities, Width, mac, phy,
        },
        operation::{Fixed, HeOperation, SixGhzOperationInfo, VhtOperationInfo},
        ppe::{PpeThresholds, RU_ALLOCATIONS},
        take,
    },
};

use super::registry::Scope;

/// Writes a line for each set flag.
fn flags<const N: usize>(
    f: &mut dyn Write,
    set: impl Fn(Field) -> bool,
    flags: [(Field, &str); N],
) -> fmt::Result {
    for (field, name) in flags {
        if set(field) {
            writeln!(f, "\t\t\t{name}")?;
        }
    }

    Ok(())
}

fn mac_capabilities(mac: &MacCapabilities, f: &mut dyn Write) -> fmt::Result {
    const DYNAMIC_FRAGMENTATION: [&str; 4] = [
        "No support for dynamic fragmentation",
        "Support for dynamic fragments within S-MPDU",
        "Single MPDU & up to 1 dynamic fragment for MSDU & MMPDU in AMPDU/multi-TID AMPDU",
        "Single MPDU & multiple dynamic fragments for MSDU within AMPDU/multi-TID AMPDU",
    ];
    const MINIMUM_FRAGMENT_SIZE: [&str; 4] = ["No restriction", "128 bytes", "256 bytes", "512 bytes"];
    const TRIGGER_PADDING: [&str; 4] = [
        "No additional processing time",
        "8 uSec",
        "16 uSec",
        "Reserved",
    ];
    const LINK_ADAPTATION: [&str; 4] = [
        "No Feedback",
        "Reserved",
        "STA provides only unsolicited HE MFB",
        "STA provides HE MFB and unsolicited HE MFB",
    ];

    let set = |field| mac.is_set(field);

    flags(
        f,
        set,
        [
            (mac::HTC_HE, "* +HTC HE Support"),
            (mac::TWT_REQUESTER, "* TWT Requester Support"),
            (mac::TWT_RESPONDER, "* TWT Responder Support"),
        ],
    )?;

    let fragmentation = mac.get(mac::DYNAMIC_FRAGMENTATION);

    writeln!(
        f,
        "\t\t\t* Dynamic Fragmentation Support: {}",
        DYNAMIC_FRAGMENTATION[fragmentation as usize & 3]
    )?;
    writeln!(
        f,
        "\t\t\t* Maximum Number Of Fragmented MSDUs/A-MSDUs Exponent: {}",
        match fragmentation {
            0 => "Reserved",
            _ => "2^Maximum Number Of Fragmented MSDUs/AMSDUs Exponent",
        }
    )?;
    writeln!(
        f,
        "\t\t\t* Minimum Fragment Size: {}",
        MINIMUM_FRAGMENT_SIZE[mac.get(mac::MINIMUM_FRAGMENT_SIZE) as usize & 3]
    )?;
    writeln!(
        f,
        "\t\t\t* Trigger Frame MAC Padding Duration: {}",
        TRIGGER_PADDING[mac.get(mac::TRIGGER_FRAME_MAC_PADDING) as usize & 3]
    )?;
    writeln!(
        f,
        "\t\t\t* Multi-TID Aggregation Rx Support: {}",
        mac.get(mac::MULTI_TID_AGGREGATION_RX)
    )?;
    writeln!(
        f,
        "\t\t\t* HE Link Adaptation Support: {}",
        LINK_ADAPTATION[mac.get_spanning(mac::LINK_ADAPTATION) as usize & 3]
    )?;

    flags(
        f,
        set,
        [
            (mac::ALL_ACK, "* All Ack Support"),
            (mac::TRS, "* TRS Support"),
            (mac::BSR, "* BSR Support"),
            (mac::BROADCAST_TWT, "* Broadcast TWT Support"),
            (mac::BA_BITMAP_32, "* 32-bit BA Bitmap Support"),
            (mac::MU_CASCADING, "* MU Cascading Support"),
            (mac::ACK_ENABLED_AGGREGATION, "* AckEnabled Aggregation Support"),
            (mac::OM_CONTROL, "* OM Control Support"),
            (mac::OFDMA_RA, "* OFDMA RA Support"),
        ],
    )?;

    writeln!(
        f,
        "\t\t\t* Maximum A-MPDU Length Exponent: {}",
        mac.get(mac::MAX_AMPDU_LENGTH_EXPONENT_EXTENSION)
    )?;

    flags(
        f,
        set,
        [
            (mac::AMSDU_FRAGMENTATION, "* A-MSDU Fragmentation Support"),
            (mac::FLEXIBLE_TWT_SCHEDULE, "* Flexible TWT Schedule Support"),
            (mac::RX_CONTROL_FRAME_TO_MULTIBSS, "* Rx Control Frame to MultiBSS"),
            (mac::BSRP_BQRP_AMPDU_AGGREGATION, "* BSRP BQRPP A-MPDU Aggregation"),
            (mac::QTP, "* QTP Support"),
            (mac::BQR, "* BQR Support"),
            (mac::SRP_RESPONDER, "* SRP Responder"),
            (mac::NDP_FEEDBACK_REPORT, "* NDP Feedback Report Support"),
            (mac::OPS, "* OPS Support"),
            (mac::AMSDU_IN_AMPDU, "* A-MSDU In A-MPDU Support"),
        ],
    )?;

    writeln!(
        f,
        "\t\t\t* Multi-TID Aggregation TX Support: {}",
        mac.get_spanning(mac::MULTI_TID_AGGREGATION_TX)
    )?;

    flags(
        f,
        set,
        [
            (
                mac::SUBCHANNEL_SELECTIVE_TRANSMISSION,
                "* HE Subchannel Selective Transmission Support",
            ),
            (mac::UL_2X996_TONE_RU, "* UL 2x996-tone RU Support"),
            (
                mac::OM_CONTROL_UL_MU_DATA_DISABLE_RX,
                "* OM Control UL MU Data Disable RX Support",
            ),
            (mac::DYNAMIC_SM_POWER_SAVE, "* HE Dynamic SM Power Save"),
            (mac::PUNCTURED_SOUNDING, "* Punctured Sounding Support"),
            (mac::HT_VHT_TRIGGER_FRAME_RX, "* HT And VHT Trigger Frame RX Support"),
        ],
    )
}

fn phy_capabilities(phy: &PhyCapabilities, f: &mut dyn Write) -> fmt::Result {
    const MIDAMBLE_NSTS: [&str; 4] = [
        "1 space-time stream",
        "2 space-time stream",
        "3 space-time stream",
        "4 space-time stream",
    ];
    const DCM_CONSTELLATION_RX: [&str; 4] = [
        "Set to 0 if DCM is not supported",
        "Set to 1 for BPSK",
        "Set to 2 for QPSK",
        "Set to 3 for 16-QAM",
    ];
    const DCM_NSS_RX: [&str; 2] = ["1 spatial stream", "2 spatial streams"];
    const DCM_MAX_RU: [&str; 4] = ["242-tone RU", "484-tone RU", "996-tone RU", "2x996-tone RU"];
    const NOMINAL_PADDING: [&str; 4] = [
        "0 us for all constellations",
        "8 us for all constellations",
        "16 us for all constellations",
        "Reserved",
    ];

    let set = |field| phy.is_set(field);

    writeln!(f, "\t\t\t* Supported Channel Width Set")?;

    for (field, name) in [
        (phy::WIDTH_40_IN_2_4_GHZ, "* 40MHz in 2.4GHz band"),
        (phy::WIDTH_40_80_IN_5_GHZ, "* 40 & 80MHz in the 5GHz band or 6 GHz band"),
        (phy::WIDTH_160_IN_5_GHZ, "* 160MHz in the 5GHz band or 6 GHz band"),
        (phy::WIDTH_160_80_80_IN_5_GHZ, "* 160/80+80MHz in the 5GHz band or 6 GHz band"),
        (phy::RU_242_IN_2_4_GHZ, "* 242 tone RUs in the 2.4GHz band"),
        (phy::RU_242_IN_5_GHZ, "* 242 tone RUs in the 5GHz band or 6 GHz band"),
    ] {
        if set(field) {
            writeln!(f, "\t\t\t\t{name}")?;
        }
    }

    writeln!(
        f,
        "\t\t\t* Punctured Preamble Rx: {}",
        phy.get(phy::PUNCTURED_PREAMBLE_RX)
    )?;

    flags(
        f,
        set,
        [
            (phy::DEVICE_CLASS, "* Device Class"),
            (phy::LDPC_CODING_IN_PAYLOAD, "* LDPC Coding In Payload"),
            (phy::SU_PPDU_1X_LTF_0_8_GI, "* HE SU PPDU With 1x HE-LTF And 0.8 us GI"),
        ],
    )?;

    writeln!(
        f,
        "\t\t\t* Midamble Tx/Rx Max NSTS: {}",
        MIDAMBLE_NSTS[phy.get_spanning(phy::MIDAMBLE_MAX_NSTS) as usize & 3]
    )?;

    flags(
        f,
        set,
        [
            (phy::NDP_4X_LTF_3_2_GI, "* NDP With 4x HE-LTF And 3.2 us GI"),
            (phy::STBC_TX_UP_TO_80, "* STBC Tx <= 80 MHz"),
            (phy::STBC_RX_UP_TO_80, "* STBC Rx <= 80 MHz"),
            (phy::DOPPLER_TX, "* Doppler Tx"),
            (phy::DOPPLER_RX, "* Doppler Rx"),
            (phy::FULL_BANDWIDTH_UL_MU_MIMO, "* Full Bandwidth UL MU-MIMO"),
            (phy::PARTIAL_BANDWIDTH_UL_MU_MIMO, "* Partial Bandwidth UL MU-MIMO"),
        ],
    )?;

    // The transmit constellation field is reserved in beacons.
    writeln!(f, "\t\t\t* DCM Max Constellation Tx: Reserved for an AP")?;

    flags(f, set, [(phy::DCM_MAX_NSS_TX, "* DCM Max NSS Tx")])?;

    writeln!(
        f,
        "\t\t\t* DCM Max Constellation Rx: {}",
        DCM_CONSTELLATION_RX[phy.get(phy::DCM_MAX_CONSTELLATION_RX) as usize & 3]
    )?;
    writeln!(
        f,
        "\t\t\t* DCM Max NSS Rx: {}",
        DCM_NSS_RX[phy.get(phy::DCM_MAX_NSS_RX) as usize & 1]
    )?;

    flags(
        f,
        set,
        [
            (
                phy::RX_PARTIAL_BW_SU_IN_MU_PPDU,
                "* Rx Partial BW SU Using HE MU PPDU From Non-AP STA",
            ),
            (phy::SU_BEAMFORMER, "* SU Beamformer"),
            (phy::SU_BEAMFORMEE, "* SU Beamformee"),
            (phy::MU_BEAMFORMER, "* MU Beamformer"),
        ],
    )?;

    writeln!(
        f,
        "\t\t\t* Beamformee STS <= 80 MHz: {}",
        phy.get(phy::BEAMFORMEE_STS_UP_TO_80)
    )?;
    writeln!(
        f,
        "\t\t\t* Beamformee STS > 80 MHz: {}",
        phy.get(phy::BEAMFORMEE_STS_ABOVE_80)
    )?;
    writeln!(
        f,
        "\t\t\t* Number Of Sounding Dimensions <= 80 MHz: {}",
        phy.get(phy::SOUNDING_DIMENSIONS_UP_TO_80)
    )?;
    writeln!(
        f,
        "\t\t\t* Number Of Sounding Dimensions > 80 MHz: {}",
        phy.get(phy::SOUNDING_DIMENSIONS_ABOVE_80)
    )?;

    flags(
        f,
        set,
        [
            (phy::NG_16_SU_FEEDBACK, "* SU Ng = 16 SU Feedback"),
            (phy::NG_16_MU_FEEDBACK, "* MU Ng = 16 MU Feedback"),
            (phy::CODEBOOK_4_2_SU_FEEDBACK, "* Codebook Size {4, 2} SU Feedback 1"),
            (phy::CODEBOOK_7_5_MU_FEEDBACK, "* Codebook Size {7, 5} SU Feedback 1"),
            (phy::TRIGGERED_SU_BEAMFORMING_FEEDBACK, "* Triggered SU Beamforming Feedback"),
            (
                phy::TRIGGERED_MU_BEAMFORMING_FEEDBACK,
                "* Triggered MU Beamforming Partial BW Feedback",
            ),
            (phy::TRIGGERED_CQI_FEEDBACK, "* Triggered CQI Feedback"),
            (phy::PARTIAL_BANDWIDTH_EXTENDED_RANGE, "* Partial Bandwidth Extended Range"),
            (phy::PARTIAL_BANDWIDTH_DL_MU_MIMO, "* Partial Bandwidth DL MU-MIMO"),
            (phy::PPE_THRESHOLDS_PRESENT, "* PPE Thresholds Present"),
            (phy::SRP_BASED_SR, "* SRPbased SR Support"),
            (phy::POWER_BOOST_FACTOR, "* Power Boost Factor Support"),
            (
                phy::SU_MU_PPDU_4X_LTF_0_8_GI,
                "* HE SU PPDU And HE MU PPDU With 4x HE-LTF And 0.8 u GI",
            ),
        ],
    )?;

    writeln!(f, "\t\t\t* Max Nc: {}", phy.get(phy::MAX_NC))?;

    flags(
        f,
        set,
        [
            (phy::STBC_TX_ABOVE_80, "* STBC Tx > 80 MHz"),
            (phy::STBC_RX_ABOVE_80, "* STBC Rx > 80 MHz"),
            (phy::ER_SU_PPDU_4X_LTF_0_8_GI, "* HE ER SU PPDU With 4x HE-LTF And 0.8 u GI"),
            (
                phy::PPDU_20_IN_40_IN_2_4_GHZ,
                "* 20 MHz In 40 MHz HE PPDU In 2.4 GHz Band",
            ),
            (phy::PPDU_20_IN_160, "* 20 MHz In 160/80+80 MHz HE PPDU"),
            (phy::PPDU_80_IN_160, "* 80 MHz In 160/80+80 MHz HE PPDU"),
            (phy::ER_SU_PPDU_1X_LTF_0_8_GI, "* HE ER SU PPDU With 1x HE-LTF And 0.8 u GI"),
            (phy::MIDAMBLE_2X_1X_LTF, "* Midamble Tx/Rx 2x And 1x HE-LTF"),
        ],
    )?;

    writeln!(
        f,
        "\t\t\t* DCM Max RU: {}",
        DCM_MAX_RU[phy.get(phy::DCM_MAX_RU) as usize & 3]
    )?;

    flags(
        f,
        set,
        [
            (phy::SIGB_SYMBOLS_ABOVE_16, "* Longer Than 16 HE SIG-B OFDM Symbols Support"),
            (phy::NON_TRIGGERED_CQI_FEEDBACK, "* NonTriggered CQI Feedback"),
            (phy::TX_1024_QAM_BELOW_242_RU, "* Tx 1024-QAM < 242-tone RU Support"),
            (phy::RX_1024_QAM_BELOW_242_RU, "* Rx 1024-QAM < 242-tone RU Support"),
            (
                phy::RX_FULL_BW_SU_COMPRESSED_SIGB,
                "* Rx Full BW SU Using HE MU PPDU With Compressed SIGB",
            ),
            (
                phy::RX_FULL_BW_SU_NON_COMPRESSED_SIGB,
                "* Rx Full BW SU Using HE MU PPDU With NonCompressed SIGB",
            ),
        ],
    )?;

    writeln!(
        f,
        "\t\t\t* Nominal Packet Padding: {}",
        NOMINAL_PADDING[phy.get(phy::NOMINAL_PACKET_PADDING) as usize & 3]
    )
}

/// An HE-MCS map with its per-stream maximums.
fn mcs_map(map: McsMap, label: &str, f: &mut dyn Write) -> fmt::Result {
    writeln!(f, "\t\t\t {label} {:#06x}", map.value())?;

    for nss in 1..=8 {
        if let Some(max) = map.max_mcs(nss) {
            writeln!(f, "\t\t\t\t Max HE-MCS For {nss} SS : {}", max.description())?;
        }
    }

    Ok(())
}

fn mcs_nss_set(set: &McsNssSet, f: &mut dyn Write) -> fmt::Result {
    let width = set.width.label();

    let rx = match set.width {
        Width::UpTo80 => "* Rx HE-MCS Map <= 80 MHz:",
        Width::W160 => "* Rx HE-MCS Map 160 MHz:",
        Width::W80Plus80 => "* Rx HE-MCS Map 80+80 MHz:",
    };
    let tx = match set.width {
        Width::UpTo80 => "* Tx HE-MCS Map <= 80 MHz:",
        Width::W160 => "* Tx HE-MCS Map 160 MHz:",
        Width::W80Plus80 => "* Tx HE-MCS Map 80+80 MHz:",
    };

    log::trace!("HE-MCS/NSS block for {width}");

    mcs_map(set.rx, rx, f)?;
    mcs_map(set.tx, tx, f)
}

fn ppe_thresholds(ppe: &PpeThresholds<'_>, f: &mut dyn Write) -> fmt::Result {
    writeln!(f, "\t\t\t NSTS = {}", ppe.nsts())?;
    writeln!(f, "\t\t\t RU Index Bitmask = {}", ppe.ru_mask())?;

    let mut nss = None;

    for threshold in ppe.iter() {
        if nss != Some(threshold.nss) {
            writeln!(f, "\t\t\t\t NSS {}", threshold.nss)?;
            nss = Some(threshold.nss);
        }

        writeln!(
            f,
            "\t\t\t\t\t RU allocation {}",
            RU_ALLOCATIONS[threshold.ru as usize & 3]
        )?;
        writeln!(f, "\t\t\t\t\t\tPPET16: {}", threshold.ppet16.name())?;
        writeln!(f, "\t\t\t\t\t\tPPET8: {}", threshold.ppet8.name())?;
    }

    Ok(())
}

fn invalid(f: &mut dyn Write, error: impl fmt::Display) -> fmt::Result {
    log::debug!("{error}");
    writeln!(f, "\n\t\tinvalid")
}

/// HE capabilities, block by block.
pub fn capabilities(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    let i = &mut 0; // Counter of bytes read.

    let (mac, state) = match take(r, i) {
        Ok(block) => HeCapabilities::advance(block),
        Err(error) => return invalid(f, error),
    };

    writeln!(f, "\n\t\tHE MAC Capabilities:")?;
    mac_capabilities(&mac, f)?;

    let (phy, mut state) = match take(r, i) {
        Ok(block) => state.advance(block),
        Err(error) => return invalid(f, error),
    };

    writeln!(f, "\n\t\tHE PHY Capabilities:")?;
    phy_capabilities(&phy, f)?;

    writeln!(f, "\n\t\tSupported HE-MCS and NSS Set:")?;

    let ppe = loop {
        let (set, successor) = match take(r, i) {
            Ok(block) => state.advance(block),
            Err(error) => return invalid(f, error),
        };

        mcs_nss_set(&set, f)?;

        state = match successor {
            Left(state) => state,
            Right(ppe) => break ppe,
        };
    };

    writeln!(f, "\n\t\tPPE Thresholds")?;

    let Some(ppe) = ppe else {
        return Ok(());
    };

    match ppe.advance(r.get(*i..).unwrap_or_default()) {
        Ok(thresholds) => ppe_thresholds(&thresholds, f),
        Err(error) => invalid(f, error),
    }
}

fn operation_fixed(fixed: &Fixed, f: &mut dyn Write) -> fmt::Result {
    let parameters = fixed.parameters;
    let color = fixed.bss_color();

    writeln!(f, "\t\t\t* Default PE Duration {}", parameters.default_pe_duration())?;
    writeln!(f, "\t\t\t* TWT Required {}", parameters.twt_required() as u8)?;
    writeln!(
        f,
        "\t\t\t* TXOP Duration RTS Threshold {}",
        parameters.txop_duration_rts_threshold()
    )?;
    writeln!(
        f,
        "\t\t\t* VHT Operation Information Present {}",
        parameters.vht_operation_info_present() as u8
    )?;
    writeln!(f, "\t\t\t* Co-Hosted BSS {}", parameters.co_hosted_bss() as u8)?;
    writeln!(f, "\t\t\t* ER SU Disable {}", parameters.er_su_disable() as u8)?;
    writeln!(
        f,
        "\t\t\t* 6 GHz Operation Information Present {}",
        parameters.six_ghz_operation_info_present() as u8
    )?;
    writeln!(f, "\t\t\t* BSS Color {:x}", color.color())?;
    writeln!(f, "\t\t\t* Partial BSS Color {}", color.partial() as u8)?;
    writeln!(f, "\t\t\t* BSS Color Disabled {}", color.disabled() as u8)?;

    mcs_map(fixed.basic_mcs_nss, "* Basic HE-MCS And NSS Set:", f)
}

fn vht_operation_info(info: &VhtOperationInfo, f: &mut dyn Write) -> fmt::Result {
    writeln!(f, "\t\t\tVHT Operation Information:")?;

    match info.channel_width_name() {
        Some(name) => writeln!(f, "\t\t\t\tChannel Width : {name}")?,
        None => writeln!(f, "\t\t\t\tInvalid Channel Width : {}", info.channel_width)?,
    }

    writeln!(f, "\t\t\t\tcenter freq segment 1 : {}", info.center_freq_segment_0)?;
    writeln!(f, "\t\t\t\tcenter freq segment 2 : {}", info.center_freq_segment_1)
}

fn six_ghz_operation_info(info: &SixGhzOperationInfo, f: &mut dyn Write) -> fmt::Result {
    writeln!(f, "\t\t\t6 GHz Operation Information:")?;
    writeln!(f, "\t\t\t\tPrimary Channel {}", info.primary_channel)?;
    writeln!(f, "\t\t\t\tControl:")?;
    writeln!(f, "\t\t\t\t\tChannel Width {}", info.channel_width_name())?;
    writeln!(
        f,
        "\t\t\t\tChannel Center Frequency Segment 0 {}",
        info.center_freq_segment_0
    )?;
    writeln!(
        f,
        "\t\t\t\tChannel Center Frequency Segment 1 {}",
        info.center_freq_segment_1
    )?;
    writeln!(f, "\t\t\t\tMinimum Rate {}", info.minimum_rate)
}

/// HE operation: parameters, BSS color, basic HE-MCS set, then the optional
/// blocks the parameters announce.
///
/// When an announced block is cut short, only the fixed part is rendered.
pub fn operation(r: &[u8], _: &Scope<'_>, f: &mut dyn Write) -> fmt::Result {
    writeln!(f)?;

    let operation = match HeOperation::parse(r) {
        Ok(operation) => operation,
        Err(error) => {
            log::debug!("{error}");

            if let Some(&fixed) = r.first_chunk::<6>() {
                operation_fixed(&Fixed::new(fixed), f)?;
            }

            return writeln!(f, "\t\t\tinvalid");
        }
    };

    operation_fixed(&operation.fixed, f)?;

    if let Some(info) = &operation.vht_operation_info {
        vht_operation_info(info, f)?;
    }

    if let Some(indicator) = operation.max_co_hosted_bssid_indicator {
        writeln!(f, "\t\t\tMax Co-Hosted BSSID Indicator: {indicator:x}")?;
    }

    if let Some(info) = &operation.six_ghz_operation_info {
        six_ghz_operation_info(info, f)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::{string::String, vec::Vec};

    use super::*;
    use crate::avec::{Options, registry::Decode};

    fn decoded(decode: Decode, r: &[u8]) -> String {
        let options = Options::default();
        let scope = Scope { ies: &[], options: &options };

        let mut s = String::new();
        decode(r, &scope, &mut s).unwrap();
        s
    }

    fn element(phy0: u8, phy6: u8, tail: &[u8]) -> Vec<u8> {
        let mut r = std::vec![0x01, 0, 0, 0, 0, 0];
        r.extend([phy0, 0, 0, 0, 0, 0, phy6, 0, 0, 0, 0]);
        r.extend(tail);
        r
    }

    #[test]
    fn minimal_capabilities() {
        let r = element(0x02, 0, &[0xfa, 0xff, 0xfa, 0xff]);
        let s = decoded(capabilities, &r);

        assert!(s.starts_with("\n\t\tHE MAC Capabilities:\n\t\t\t* +HTC HE Support\n"));
        assert!(s.contains("\n\t\tHE PHY Capabilities:\n\t\t\t* Supported Channel Width Set\n\t\t\t\t* 40MHz in 2.4GHz band\n"));
        assert!(s.contains(
            "\n\t\tSupported HE-MCS and NSS Set:\n\
             \t\t\t * Rx HE-MCS Map <= 80 MHz: 0xfffa\n\
             \t\t\t\t Max HE-MCS For 1 SS : Support for HE-MCS 0-11\n\
             \t\t\t\t Max HE-MCS For 2 SS : Support for HE-MCS 0-11\n\
             \t\t\t\t Max HE-MCS For 3 SS : Not supported for HE PPDUs\n"
        ));
        assert!(s.ends_with("\t\t\t\t Max HE-MCS For 8 SS : Not supported for HE PPDUs\n\n\t\tPPE Thresholds\n"));
    }

    #[test]
    fn missing_width_block_is_invalid() {
        // 160 MHz announced, but only one HE-MCS/NSS block present.
        let r = element(0x08, 0, &[0xfa, 0xff, 0xfa, 0xff, 0xfa]);
        let s = decoded(capabilities, &r);

        assert!(s.contains("* Tx HE-MCS Map <= 80 MHz: 0xfffa\n"));
        assert!(!s.contains("160 MHz:"));
        assert!(s.ends_with("\n\t\tinvalid\n"));
    }

    #[test]
    fn ppe_thresholds_rendered() {
        // NSTS 0, RU bitmask 0b0001: one group, PPET16 = QPSK, PPET8 = BPSK.
        let r = element(0, 0x80, &[0xfa, 0xff, 0xfa, 0xff, 0x88, 0x00]);
        let s = decoded(capabilities, &r);

        assert!(s.ends_with(
            "\n\t\tPPE Thresholds\n\
             \t\t\t NSTS = 0\n\
             \t\t\t RU Index Bitmask = 1\n\
             \t\t\t\t NSS 0\n\
             \t\t\t\t\t RU allocation 242\n\
             \t\t\t\t\t\tPPET16: QPSK\n\
             \t\t\t\t\t\tPPET8: BPSK\n"
        ));
    }

    #[test]
    fn truncated_ppe_is_invalid() {
        let r = element(0, 0x80, &[0xfa, 0xff, 0xfa, 0xff, 0x79]);
        assert!(decoded(capabilities, &r).ends_with("\n\t\tPPE Thresholds\n\n\t\tinvalid\n"));
    }

    #[test]
    fn operation_with_optional_blocks() {
        let r = [
            0x04, 0x40, 0x02, 0x8a, 0xfc, 0xff, // fixed
            0x01, 0x2a, 0x00, // VHT operation information
            0x25, 0x02, 0x27, 0x00, 0x06, // 6 GHz operation information
        ];

        let s = decoded(operation, &r);

        assert!(s.starts_with(
            "\n\t\t\t* Default PE Duration 4\n\
             \t\t\t* TWT Required 0\n\
             \t\t\t* TXOP Duration RTS Threshold 0\n\
             \t\t\t* VHT Operation Information Present 1\n\
             \t\t\t* Co-Hosted BSS 0\n\
             \t\t\t* ER SU Disable 0\n\
             \t\t\t* 6 GHz Operation Information Present 1\n\
             \t\t\t* BSS Color a\n\
             \t\t\t* Partial BSS Color 0\n\
             \t\t\t* BSS Color Disabled 1\n\
             \t\t\t * Basic HE-MCS And NSS Set: 0xfffc\n"
        ));
        assert!(s.ends_with(
            "\t\t\tVHT Operation Information:\n\
             \t\t\t\tChannel Width : 80 MHz\n\
             \t\t\t\tcenter freq segment 1 : 42\n\
             \t\t\t\tcenter freq segment 2 : 0\n\
             \t\t\t6 GHz Operation Information:\n\
             \t\t\t\tPrimary Channel 37\n\
             \t\t\t\tControl:\n\
             \t\t\t\t\tChannel Width 80 MHz\n\
             \t\t\t\tChannel Center Frequency Segment 0 39\n\
             \t\t\t\tChannel Center Frequency Segment 1 0\n\
             \t\t\t\tMinimum Rate 6\n"
        ));
    }

    #[test]
    fn operation_missing_block() {
        let r = [0x00, 0x80, 0x00, 0x01, 0xfc, 0xff];
        let s = decoded(operation, &r);

        assert!(s.contains("\t\t\t* Co-Hosted BSS 1\n"));
        assert!(s.ends_with("\t\t\tinvalid\n"));
    }
}
