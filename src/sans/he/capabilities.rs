//! States processing the HE Capabilities element.

use either::Either::{self, Left, Right};
use thiserror::Error;
use tinyvec::ArrayVec;

use crate::sans::bits::{Field, Spanning};

use super::{Truncated, ppe, take};

/// An error parsing an HE Capabilities element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A fixed-size block was cut short.
    #[error("Truncated HE capabilities: {0}")]
    Truncated(#[from] Truncated),
    /// The PPE thresholds field could not be read.
    #[error("Invalid PPE thresholds: {0}")]
    Ppe(#[from] ppe::Error),
}

/// Field positions within the 6-byte HE MAC Capabilities Information block.
pub mod mac {
    use crate::sans::bits::{Field, Spanning};

    pub const HTC_HE: Field = Field::new(0, 0x01);
    pub const TWT_REQUESTER: Field = Field::new(0, 0x02);
    pub const TWT_RESPONDER: Field = Field::new(0, 0x04);
    pub const DYNAMIC_FRAGMENTATION: Field = Field::new(0, 0x18);
    pub const MAX_FRAGMENTED_MSDUS_EXPONENT: Field = Field::new(0, 0xe0);

    pub const MINIMUM_FRAGMENT_SIZE: Field = Field::new(1, 0x03);
    pub const TRIGGER_FRAME_MAC_PADDING: Field = Field::new(1, 0x0c);
    pub const MULTI_TID_AGGREGATION_RX: Field = Field::new(1, 0x70);
    pub const LINK_ADAPTATION: Spanning = Spanning::new(Field::new(1, 0x80), Field::new(2, 0x01));

    pub const ALL_ACK: Field = Field::new(2, 0x02);
    pub const TRS: Field = Field::new(2, 0x04);
    pub const BSR: Field = Field::new(2, 0x08);
    pub const BROADCAST_TWT: Field = Field::new(2, 0x10);
    pub const BA_BITMAP_32: Field = Field::new(2, 0x20);
    pub const MU_CASCADING: Field = Field::new(2, 0x40);
    pub const ACK_ENABLED_AGGREGATION: Field = Field::new(2, 0x80);

    pub const OM_CONTROL: Field = Field::new(3, 0x02);
    pub const OFDMA_RA: Field = Field::new(3, 0x04);
    pub const MAX_AMPDU_LENGTH_EXPONENT_EXTENSION: Field = Field::new(3, 0x18);
    pub const AMSDU_FRAGMENTATION: Field = Field::new(3, 0x20);
    pub const FLEXIBLE_TWT_SCHEDULE: Field = Field::new(3, 0x40);
    pub const RX_CONTROL_FRAME_TO_MULTIBSS: Field = Field::new(3, 0x80);

    pub const BSRP_BQRP_AMPDU_AGGREGATION: Field = Field::new(4, 0x01);
    pub const QTP: Field = Field::new(4, 0x02);
    pub const BQR: Field = Field::new(4, 0x04);
    pub const SRP_RESPONDER: Field = Field::new(4, 0x08);
    pub const NDP_FEEDBACK_REPORT: Field = Field::new(4, 0x10);
    pub const OPS: Field = Field::new(4, 0x20);
    pub const AMSDU_IN_AMPDU: Field = Field::new(4, 0x40);
    pub const MULTI_TID_AGGREGATION_TX: Spanning =
        Spanning::new(Field::new(4, 0x80), Field::new(5, 0x03));

    pub const SUBCHANNEL_SELECTIVE_TRANSMISSION: Field = Field::new(5, 0x04);
    pub const UL_2X996_TONE_RU: Field = Field::new(5, 0x08);
    pub const OM_CONTROL_UL_MU_DATA_DISABLE_RX: Field = Field::new(5, 0x10);
    pub const DYNAMIC_SM_POWER_SAVE: Field = Field::new(5, 0x20);
    pub const PUNCTURED_SOUNDING: Field = Field::new(5, 0x40);
    pub const HT_VHT_TRIGGER_FRAME_RX: Field = Field::new(5, 0x80);
}

/// Field positions within the 11-byte HE PHY Capabilities Information block.
pub mod phy {
    use crate::sans::bits::{Field, Spanning};

    pub const WIDTH_40_IN_2_4_GHZ: Field = Field::new(0, 0x02);
    pub const WIDTH_40_80_IN_5_GHZ: Field = Field::new(0, 0x04);
    pub const WIDTH_160_IN_5_GHZ: Field = Field::new(0, 0x08);
    pub const WIDTH_160_80_80_IN_5_GHZ: Field = Field::new(0, 0x10);
    pub const RU_242_IN_2_4_GHZ: Field = Field::new(0, 0x20);
    pub const RU_242_IN_5_GHZ: Field = Field::new(0, 0x40);

    pub const PUNCTURED_PREAMBLE_RX: Field = Field::new(1, 0x0f);
    pub const DEVICE_CLASS: Field = Field::new(1, 0x10);
    pub const LDPC_CODING_IN_PAYLOAD: Field = Field::new(1, 0x20);
    pub const SU_PPDU_1X_LTF_0_8_GI: Field = Field::new(1, 0x40);
    pub const MIDAMBLE_MAX_NSTS: Spanning = Spanning::new(Field::new(1, 0x80), Field::new(2, 0x01));

    pub const NDP_4X_LTF_3_2_GI: Field = Field::new(2, 0x02);
    pub const STBC_TX_UP_TO_80: Field = Field::new(2, 0x04);
    pub const STBC_RX_UP_TO_80: Field = Field::new(2, 0x08);
    pub const DOPPLER_TX: Field = Field::new(2, 0x10);
    pub const DOPPLER_RX: Field = Field::new(2, 0x20);
    pub const FULL_BANDWIDTH_UL_MU_MIMO: Field = Field::new(2, 0x40);
    pub const PARTIAL_BANDWIDTH_UL_MU_MIMO: Field = Field::new(2, 0x80);

    pub const DCM_MAX_CONSTELLATION_TX: Field = Field::new(3, 0x03);
    pub const DCM_MAX_NSS_TX: Field = Field::new(3, 0x04);
    pub const DCM_MAX_CONSTELLATION_RX: Field = Field::new(3, 0x18);
    pub const DCM_MAX_NSS_RX: Field = Field::new(3, 0x20);
    pub const RX_PARTIAL_BW_SU_IN_MU_PPDU: Field = Field::new(3, 0x40);
    pub const SU_BEAMFORMER: Field = Field::new(3, 0x80);

    pub const SU_BEAMFORMEE: Field = Field::new(4, 0x01);
    pub const MU_BEAMFORMER: Field = Field::new(4, 0x02);
    pub const BEAMFORMEE_STS_UP_TO_80: Field = Field::new(4, 0x1c);
    pub const BEAMFORMEE_STS_ABOVE_80: Field = Field::new(4, 0xe0);

    pub const SOUNDING_DIMENSIONS_UP_TO_80: Field = Field::new(5, 0x07);
    pub const SOUNDING_DIMENSIONS_ABOVE_80: Field = Field::new(5, 0x38);
    pub const NG_16_SU_FEEDBACK: Field = Field::new(5, 0x40);
    pub const NG_16_MU_FEEDBACK: Field = Field::new(5, 0x80);

    pub const CODEBOOK_4_2_SU_FEEDBACK: Field = Field::new(6, 0x01);
    pub const CODEBOOK_7_5_MU_FEEDBACK: Field = Field::new(6, 0x02);
    pub const TRIGGERED_SU_BEAMFORMING_FEEDBACK: Field = Field::new(6, 0x04);
    pub const TRIGGERED_MU_BEAMFORMING_FEEDBACK: Field = Field::new(6, 0x08);
    pub const TRIGGERED_CQI_FEEDBACK: Field = Field::new(6, 0x10);
    pub const PARTIAL_BANDWIDTH_EXTENDED_RANGE: Field = Field::new(6, 0x20);
    pub const PARTIAL_BANDWIDTH_DL_MU_MIMO: Field = Field::new(6, 0x40);
    pub const PPE_THRESHOLDS_PRESENT: Field = Field::new(6, 0x80);

    pub const SRP_BASED_SR: Field = Field::new(7, 0x01);
    pub const POWER_BOOST_FACTOR: Field = Field::new(7, 0x02);
    pub const SU_MU_PPDU_4X_LTF_0_8_GI: Field = Field::new(7, 0x04);
    pub const MAX_NC: Field = Field::new(7, 0x38);
    pub const STBC_TX_ABOVE_80: Field = Field::new(7, 0x40);
    pub const STBC_RX_ABOVE_80: Field = Field::new(7, 0x80);

    pub const ER_SU_PPDU_4X_LTF_0_8_GI: Field = Field::new(8, 0x01);
    pub const PPDU_20_IN_40_IN_2_4_GHZ: Field = Field::new(8, 0x02);
    pub const PPDU_20_IN_160: Field = Field::new(8, 0x04);
    pub const PPDU_80_IN_160: Field = Field::new(8, 0x08);
    pub const ER_SU_PPDU_1X_LTF_0_8_GI: Field = Field::new(8, 0x10);
    pub const MIDAMBLE_2X_1X_LTF: Field = Field::new(8, 0x20);
    pub const DCM_MAX_RU: Field = Field::new(8, 0xc0);

    pub const SIGB_SYMBOLS_ABOVE_16: Field = Field::new(9, 0x01);
    pub const NON_TRIGGERED_CQI_FEEDBACK: Field = Field::new(9, 0x02);
    pub const TX_1024_QAM_BELOW_242_RU: Field = Field::new(9, 0x04);
    pub const RX_1024_QAM_BELOW_242_RU: Field = Field::new(9, 0x08);
    pub const RX_FULL_BW_SU_COMPRESSED_SIGB: Field = Field::new(9, 0x10);
    pub const RX_FULL_BW_SU_NON_COMPRESSED_SIGB: Field = Field::new(9, 0x20);
    pub const NOMINAL_PACKET_PADDING: Field = Field::new(9, 0xc0);
}

/// The HE MAC Capabilities Information block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacCapabilities(pub [u8; 6]);

/// The HE PHY Capabilities Information block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhyCapabilities(pub [u8; 11]);

macro_rules! accessors {
    ($($ty:ty),*) => {$(
        impl $ty {
            /// Read a single-byte field.
            pub fn get(&self, field: Field) -> u8 {
                field.read(&self.0)
            }

            /// Read a single-byte field as a flag.
            pub fn is_set(&self, field: Field) -> bool {
                field.is_set(&self.0)
            }

            /// Read a field crossing a byte boundary.
            pub fn get_spanning(&self, field: Spanning) -> u16 {
                field.read(&self.0)
            }
        }
    )*};
}

accessors!(MacCapabilities, PhyCapabilities);

/// Channel width of an HE-MCS/NSS block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    #[default]
    UpTo80,
    W160,
    W80Plus80,
}

impl Width {
    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo80 => "<= 80 MHz",
            Self::W160 => "160 MHz",
            Self::W80Plus80 => "80+80 MHz",
        }
    }
}

/// Maximum HE-MCS for a spatial stream count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxMcs {
    Mcs0To7,
    Mcs0To9,
    Mcs0To11,
    NotSupported,
}

impl MaxMcs {
    fn new(v: u8) -> Self {
        match v & 0b11 {
            0 => Self::Mcs0To7,
            1 => Self::Mcs0To9,
            2 => Self::Mcs0To11,
            _ => Self::NotSupported,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Mcs0To7 => "Support for HE-MCS 0-7",
            Self::Mcs0To9 => "Support for HE-MCS 0-9",
            Self::Mcs0To11 => "Support for HE-MCS 0-11",
            Self::NotSupported => "Not supported for HE PPDUs",
        }
    }
}

/// A 2-byte HE-MCS map: eight 2-bit maximum-MCS fields, one per spatial
/// stream count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct McsMap(pub [u8; 2]);

impl McsMap {
    const MASKS: [u8; 4] = [0x03, 0x0c, 0x30, 0xc0];

    pub fn value(self) -> u16 {
        u16::from_le_bytes(self.0)
    }

    /// Maximum HE-MCS for `nss` spatial streams (1 to 8).
    pub fn max_mcs(self, nss: usize) -> Option<MaxMcs> {
        let n = nss.checked_sub(1)?;
        let mask = *Self::MASKS.get(n % 4)?;
        let field = Field::new(n / 4, mask);

        (n < 8).then(|| MaxMcs::new(field.read(&self.0)))
    }
}

/// One Rx/Tx pair of HE-MCS maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct McsNssSet {
    pub width: Width,
    pub rx: McsMap,
    pub tx: McsMap,
}

/// State token to decode the HE MAC Capabilities Information block.
#[derive(Debug)]
pub struct HeCapabilities;

impl HeCapabilities {
    /// Transition to another state by decoding the MAC capabilities block.
    ///
    /// Returns the MAC capabilities and a successor state token.
    pub fn advance(r: [u8; 6]) -> (MacCapabilities, Phy) {
        (MacCapabilities(r), Phy(()))
    }
}

/// State token to decode the HE PHY Capabilities Information block.
#[derive(Debug)]
pub struct Phy(pub(super) ());

impl Phy {
    /// Transition to another state by decoding the PHY capabilities block.
    ///
    /// Returns the PHY capabilities and a successor state token.
    pub fn advance(self, r: [u8; 11]) -> (PhyCapabilities, McsNss) {
        let phy = PhyCapabilities(r);

        let successor = McsNss {
            width: Width::UpTo80,
            w160: phy.is_set(phy::WIDTH_160_IN_5_GHZ),
            w80_plus_80: phy.is_set(phy::WIDTH_160_80_80_IN_5_GHZ),
            ppe: phy.is_set(phy::PPE_THRESHOLDS_PRESENT),
        };

        (phy, successor)
    }
}

/// State token to decode one block of the Supported HE-MCS and NSS Set.
#[derive(Debug)]
pub struct McsNss {
    width: Width,
    w160: bool,
    w80_plus_80: bool,
    ppe: bool,
}

impl McsNss {
    /// The channel width of the block this state will decode.
    pub fn width(&self) -> Width {
        self.width
    }

    /// Transition to another state by decoding an Rx/Tx map pair.
    ///
    /// Returns the map pair, and a successor state token: another block, or the
    /// PPE thresholds state if thresholds are present.
    pub fn advance(self, r: [u8; 4]) -> (McsNssSet, Either<McsNss, Option<Ppe>>) {
        let [rx0, rx1, tx0, tx1] = r;

        let set = McsNssSet {
            width: self.width,
            rx: McsMap([rx0, rx1]),
            tx: McsMap([tx0, tx1]),
        };

        let next = match self.width {
            Width::UpTo80 if self.w160 => Some(Width::W160),
            Width::UpTo80 | Width::W160 if self.w80_plus_80 => Some(Width::W80Plus80),
            _ => None,
        };

        let successor = match next {
            Some(width) => Left(McsNss { width, ..self }),
            None => Right(self.ppe.then_some(Ppe(()))),
        };

        (set, successor)
    }
}

/// State token to decode the PPE Thresholds field.
#[derive(Debug)]
pub struct Ppe(pub(super) ());

impl Ppe {
    /// Transition to the final state by validating the PPE Thresholds field,
    /// which occupies the remainder of the element.
    pub fn advance(self, r: &[u8]) -> Result<ppe::PpeThresholds<'_>, ppe::Error> {
        ppe::PpeThresholds::new(r)
    }
}

/// A fully decoded HE Capabilities element body (without the extension id).
#[derive(Debug, Clone)]
pub struct Capabilities<'a> {
    pub mac: MacCapabilities,
    pub phy: PhyCapabilities,
    pub mcs_nss: ArrayVec<[McsNssSet; 3]>,
    pub ppe: Option<ppe::PpeThresholds<'a>>,
    /// Bytes consumed by the MAC, PHY and HE-MCS/NSS blocks.
    pub len: usize,
}

/// Decode an HE Capabilities element body.
pub fn parse(r: &[u8]) -> Result<Capabilities<'_>, Error> {
    let i = &mut 0; // Counter of bytes read.

    let (mac, state) = HeCapabilities::advance(take(r, i)?);
    let (phy, mut state) = state.advance(take(r, i)?);

    let mut mcs_nss = ArrayVec::new();

    let ppe = loop {
        let (set, successor) = state.advance(take(r, i)?);
        mcs_nss.push(set);

        state = match successor {
            Left(state) => state,
            Right(ppe) => break ppe,
        };
    };

    let len = *i;

    let ppe = match ppe {
        Some(state) => Some(state.advance(r.get(len..).unwrap_or_default())?),
        None => None,
    };

    Ok(Capabilities {
        mac,
        phy,
        mcs_nss,
        ppe,
        len,
    })
}
