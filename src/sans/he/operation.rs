//! The HE Operation element.

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::FromBytes;

use crate::sans::bits::{Field, Spanning};

use super::{Truncated, capabilities::McsMap, take};

/// An error parsing an HE Operation element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The fixed part, or an optional block announced by the parameters, was
    /// cut short.
    #[error("Truncated HE operation: {0}")]
    Truncated(#[from] Truncated),
}

/// The 3-byte HE Operation Parameters field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters(pub [u8; 3]);

impl Parameters {
    pub const DEFAULT_PE_DURATION: Field = Field::new(0, 0x07);
    pub const TWT_REQUIRED: Field = Field::new(0, 0x08);
    pub const TXOP_DURATION_RTS_THRESHOLD: Spanning =
        Spanning::new(Field::new(0, 0xf0), Field::new(1, 0x3f));
    pub const VHT_OPERATION_INFO_PRESENT: Field = Field::new(1, 0x40);
    pub const CO_HOSTED_BSS: Field = Field::new(1, 0x80);
    pub const ER_SU_DISABLE: Field = Field::new(2, 0x01);
    pub const SIX_GHZ_OPERATION_INFO_PRESENT: Field = Field::new(2, 0x02);

    pub fn default_pe_duration(&self) -> u8 {
        Self::DEFAULT_PE_DURATION.read(&self.0)
    }

    pub fn twt_required(&self) -> bool {
        Self::TWT_REQUIRED.is_set(&self.0)
    }

    pub fn txop_duration_rts_threshold(&self) -> u16 {
        Self::TXOP_DURATION_RTS_THRESHOLD.read(&self.0)
    }

    pub fn vht_operation_info_present(&self) -> bool {
        Self::VHT_OPERATION_INFO_PRESENT.is_set(&self.0)
    }

    pub fn co_hosted_bss(&self) -> bool {
        Self::CO_HOSTED_BSS.is_set(&self.0)
    }

    pub fn er_su_disable(&self) -> bool {
        Self::ER_SU_DISABLE.is_set(&self.0)
    }

    pub fn six_ghz_operation_info_present(&self) -> bool {
        Self::SIX_GHZ_OPERATION_INFO_PRESENT.is_set(&self.0)
    }
}

bitfield! {
    /// The BSS Color Information field.
    pub struct BssColor(u8) {
        [0..6] pub color: u8,
        [6] pub partial,
        [7] pub disabled,
    }
}

/// The fixed 6-byte part of the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed {
    pub parameters: Parameters,
    pub bss_color_info: u8,
    pub basic_mcs_nss: McsMap,
}

impl Fixed {
    pub fn new(r: [u8; 6]) -> Self {
        let [p0, p1, p2, color, m0, m1] = r;

        Self {
            parameters: Parameters([p0, p1, p2]),
            bss_color_info: color,
            basic_mcs_nss: McsMap([m0, m1]),
        }
    }

    pub fn bss_color(&self) -> BssColor {
        BssColor(self.bss_color_info)
    }
}

/// The optional VHT Operation Information block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VhtOperationInfo {
    pub channel_width: u8,
    pub center_freq_segment_0: u8,
    pub center_freq_segment_1: u8,
}

impl VhtOperationInfo {
    pub fn new(r: [u8; 3]) -> Self {
        let [channel_width, center_freq_segment_0, center_freq_segment_1] = r;

        Self {
            channel_width,
            center_freq_segment_0,
            center_freq_segment_1,
        }
    }

    /// The channel width, if it is a defined value.
    pub fn channel_width_name(&self) -> Option<&'static str> {
        Some(match self.channel_width {
            0 => "20 or 40 MHz",
            1 => "80 MHz",
            2 => "160 MHz",
            3 => "80+80 MHz",
            _ => None?,
        })
    }
}

/// The optional 6 GHz Operation Information block.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes)]
pub struct SixGhzOperationInfo {
    pub primary_channel: u8,
    pub control: u8,
    pub center_freq_segment_0: u8,
    pub center_freq_segment_1: u8,
    pub minimum_rate: u8,
}

impl SixGhzOperationInfo {
    const CHANNEL_WIDTH: Field = Field::new(0, 0x03);

    pub fn new(r: [u8; 5]) -> Self {
        zerocopy::transmute!(r)
    }

    pub fn channel_width_name(&self) -> &'static str {
        match Self::CHANNEL_WIDTH.read(&[self.control]) {
            0 => "20 MHz",
            1 => "40 MHz",
            2 => "80 MHz",
            _ => "80+80 or 160 Mhz",
        }
    }
}

/// A decoded HE Operation element body (without the extension id).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeOperation {
    pub fixed: Fixed,
    pub vht_operation_info: Option<VhtOperationInfo>,
    pub max_co_hosted_bssid_indicator: Option<u8>,
    pub six_ghz_operation_info: Option<SixGhzOperationInfo>,
}

impl HeOperation {
    /// Decode an HE Operation element body. Every optional block announced in
    /// the parameters must be present in full.
    pub fn parse(r: &[u8]) -> Result<Self, Error> {
        let i = &mut 0; // Counter of bytes read.

        let fixed = Fixed::new(take(r, i)?);
        let parameters = fixed.parameters;

        let vht_operation_info = match parameters.vht_operation_info_present() {
            true => Some(VhtOperationInfo::new(take(r, i)?)),
            false => None,
        };

        let max_co_hosted_bssid_indicator = match parameters.co_hosted_bss() {
            true => Some(u8::from_le_bytes(take(r, i)?)),
            false => None,
        };

        let six_ghz_operation_info = match parameters.six_ghz_operation_info_present() {
            true => Some(SixGhzOperationInfo::new(take(r, i)?)),
            false => None,
        };

        Ok(Self {
            fixed,
            vht_operation_info,
            max_co_hosted_bssid_indicator,
            six_ghz_operation_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_part_only() {
        let operation = HeOperation::parse(&[0x34, 0x00, 0x00, 0x45, 0xfc, 0xff]).unwrap();
        let parameters = operation.fixed.parameters;

        assert_eq!(parameters.default_pe_duration(), 4);
        assert!(!parameters.twt_required());
        assert_eq!(parameters.txop_duration_rts_threshold(), 3);
        assert_eq!(operation.fixed.bss_color().color(), 5);
        assert!(operation.fixed.bss_color().partial());
        assert!(!operation.fixed.bss_color().disabled());
        assert_eq!(operation.fixed.basic_mcs_nss.value(), 0xfffc);
        assert!(operation.vht_operation_info.is_none());
    }

    #[test]
    fn txop_threshold_spans_bytes() {
        let parameters = Parameters([0xf0, 0x3f, 0x00]);
        assert_eq!(parameters.txop_duration_rts_threshold(), 1023);
        assert!(!parameters.vht_operation_info_present());
    }

    #[test]
    fn optional_blocks_in_order() {
        let r = [0x00, 0xc0, 0x02, 0x00, 0x00, 0x00, 1, 42, 0, 3, 37, 0x02, 39, 0, 6];
        let operation = HeOperation::parse(&r).unwrap();

        let vht = operation.vht_operation_info.unwrap();
        assert_eq!(vht.channel_width_name(), Some("80 MHz"));
        assert_eq!(vht.center_freq_segment_0, 42);
        assert_eq!(operation.max_co_hosted_bssid_indicator, Some(3));

        let six_ghz = operation.six_ghz_operation_info.unwrap();
        assert_eq!(six_ghz.primary_channel, 37);
        assert_eq!(six_ghz.channel_width_name(), "80 MHz");
        assert_eq!(six_ghz.minimum_rate, 6);
    }

    #[test]
    fn announced_block_missing() {
        let r = [0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 37, 0x02];
        assert_eq!(
            HeOperation::parse(&r),
            Err(Error::Truncated(Truncated {
                offset: 6,
                needed: 5,
                remaining: 2
            }))
        );
    }
}
