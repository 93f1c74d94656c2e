/// Automatic version selection
use crate::encoder::modes::DataSegment;
use crate::encoder::tables::data_capacity_bits;
use crate::error::QrError;
use crate::models::{ECLevel, Version};
use log::debug;

/// Finds the smallest version that holds a set of segments
pub struct VersionSelector;

impl VersionSelector {
    /// Bits `segments` occupy at `version`, headers included
    pub fn required_bits(segments: &[DataSegment], version: Version) -> usize {
        segments.iter().map(|s| s.encoded_len(version)).sum()
    }

    /// Smallest version whose data capacity at `ec_level` holds `segments`
    pub fn smallest_fitting(
        segments: &[DataSegment],
        ec_level: ECLevel,
    ) -> Result<Version, QrError> {
        for version in Version::all() {
            let needed = Self::required_bits(segments, version);
            let capacity = data_capacity_bits(version, ec_level)?;
            if needed <= capacity {
                debug!("auto version {version}: {needed}/{capacity} bits at {ec_level:?}");
                return Ok(version);
            }
        }
        Err(QrError::DataTooLong {
            level: ec_level,
            needed: Self::required_bits(segments, Version::MAX),
        })
    }
}
