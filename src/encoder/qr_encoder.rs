use crate::encoder::codewords::CodewordAssembler;
use crate::encoder::config;
use crate::encoder::mask::MaskEvaluator;
use crate::encoder::matrix_builder::MatrixBuilder;
use crate::encoder::modes::DataSegment;
use crate::encoder::version::VersionSelector;
/// Main QR encoder - wires everything together
use crate::error::QrError;
use crate::models::{ECLevel, MaskPattern, Mode, QRCode, Version};
use log::debug;

/// Per-call encoding parameters. `None` fields are chosen automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Error correction level (default H)
    pub level: ECLevel,
    /// Fixed version; the smallest fitting one when `None`
    pub version: Option<Version>,
    /// Fixed segment mode; the densest valid one when `None`
    pub mode: Option<Mode>,
    /// Fixed mask; the lowest-penalty one when `None`
    pub mask: Option<MaskPattern>,
}

/// Main QR encoder that runs the encoding pipeline
pub struct QrEncoder;

impl QrEncoder {
    /// Encode `data` as a single segment
    pub fn encode(data: &[u8], options: &EncodeOptions) -> Result<QRCode, QrError> {
        let segment = match options.mode {
            Some(mode) => DataSegment::with_mode(data, mode)?,
            None => DataSegment::auto(data),
        };
        debug!(
            "{} input bytes as {:?} segment",
            data.len(),
            segment.mode()
        );
        Self::encode_segments(&[segment], options)
    }

    /// Encode pre-built segments into one symbol.
    ///
    /// `options.mode` is ignored here; each segment carries its own.
    pub fn encode_segments(
        segments: &[DataSegment],
        options: &EncodeOptions,
    ) -> Result<QRCode, QrError> {
        let level = options.level;
        let version = match options.version {
            Some(version) => version,
            None => VersionSelector::smallest_fitting(segments, level)?,
        };

        let codewords = CodewordAssembler::new(version, level)?.assemble(segments)?;
        let builder = MatrixBuilder::new(version, level, &codewords);

        let mask = match options.mask {
            Some(mask) => mask,
            None => {
                let parallel = config::parallel_masks()
                    && version.number() >= config::parallel_min_version();
                let (mask, scores) = MaskEvaluator::select(&builder, parallel)?;
                debug!(
                    "selected mask {} (penalty {})",
                    mask.index(),
                    scores[mask.index() as usize].total()
                );
                mask
            }
        };

        let modules = builder.build_resolved(mask, false)?;
        debug!(
            "encoded version {} level {:?} mask {} ({}x{})",
            version,
            level,
            mask.index(),
            modules.width(),
            modules.height()
        );

        let data = segments.iter().flat_map(|s| s.data().iter().copied()).collect();
        let mode = segments.first().map(DataSegment::mode).unwrap_or(Mode::Byte);
        Ok(QRCode::new(data, version, level, mask, mode, modules))
    }
}
