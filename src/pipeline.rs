use crate::debug::trace_stage;
use crate::encoder::CodewordSet;
use crate::encoder::config;
use crate::encoder::format::FormatInfo;
use crate::encoder::function_patterns::{ReservationGrid, build_function_layout};
use crate::encoder::mask::{self, MaskCandidate};
use crate::encoder::placement::place_data_bits;
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, ModuleMatrix, QrSymbol, Version};

/// Per-call encoding overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Fixed version number; `None` picks the smallest version that fits
    pub version: Option<u8>,
    /// Score masks on the rayon pool; `None` falls back to `QR_PARALLEL_MASKS`
    pub parallel_masks: Option<bool>,
}

impl EncodeOptions {
    /// Options pinned to one version
    pub fn with_version(version: u8) -> Self {
        Self {
            version: Some(version),
            ..Self::default()
        }
    }

    fn parallel(&self) -> bool {
        self.parallel_masks.unwrap_or_else(config::parallel_masks)
    }
}

/// Snapshot of the matrix after every stage, for inspection and tooling
#[derive(Debug, Clone)]
pub struct PipelineStages {
    /// Resolved version
    pub version: Version,
    /// Data and ECC codewords as placed
    pub codewords: CodewordSet,
    /// Function patterns only; data and format cells unset
    pub patterns: ModuleMatrix,
    /// Cells owned by function patterns and format areas
    pub reserved: ReservationGrid,
    /// Codeword bits placed, before masking
    pub data: ModuleMatrix,
    /// Unreserved cells left unset after placement
    pub remainder_bits: usize,
    /// All eight masked candidates in mask id order
    pub candidates: Vec<MaskCandidate>,
    /// Index of the winner in `candidates`
    pub selected: usize,
    /// Winning candidate before format information is written
    pub masked: ModuleMatrix,
    /// Finished symbol
    pub final_symbol: QrSymbol,
}

/// Pick the version for a payload of `length` bytes
pub fn resolve_version(length: usize, requested: Option<u8>) -> Result<Version> {
    match requested {
        Some(number) => {
            let version = Version::new(number)?;
            let capacity = version.spec().byte_capacity();
            if length > capacity {
                return Err(QrError::TextTooLong { length, capacity });
            }
            Ok(version)
        }
        None => Version::all()
            .find(|v| length <= v.spec().byte_capacity())
            .ok_or(QrError::TextTooLong {
                length,
                capacity: Version::MAX.spec().byte_capacity(),
            }),
    }
}

/// Run the full pipeline and keep every intermediate matrix
pub fn encode_with_stages(payload: &[u8], options: &EncodeOptions) -> Result<PipelineStages> {
    let version = resolve_version(payload.len(), options.version)?;
    let spec = version.spec();
    trace_stage!(
        "[pipeline] payload={}B version={} capacity={}B",
        payload.len(),
        version,
        spec.byte_capacity()
    );

    let codewords = CodewordSet::build(payload, spec)?;
    debug_assert!(
        ReedSolomonEncoder::new(spec.ecc_codewords)
            .syndromes(&codewords.to_bytes())
            .iter()
            .all(|&s| s == 0),
        "codeword block has non-zero syndromes"
    );

    let mut layout = build_function_layout(version);
    let patterns = layout.matrix.clone();

    let remainder_bits = place_data_bits(&mut layout.matrix, &layout.reserved, &codewords.to_bits());
    debug_assert_eq!(remainder_bits, spec.remainder_bits);
    let data = layout.matrix;

    let candidates = mask::evaluate_candidates(&data, &layout.reserved, options.parallel());
    let selected = mask::best_candidate_index(&candidates);
    let best = &candidates[selected];

    let masked = best.matrix.clone();
    let mut modules = masked.clone();
    let format = FormatInfo::new(ECLevel::L, best.mask);
    let format_bits = format.place(&mut modules);
    debug_assert_eq!(modules.unset_count(), remainder_bits);

    let final_symbol = QrSymbol {
        version,
        error_correction: ECLevel::L,
        mask_pattern: best.mask,
        penalty: best.penalty.total(),
        format_bits,
        modules,
    };

    Ok(PipelineStages {
        version,
        codewords,
        patterns,
        reserved: layout.reserved,
        data,
        remainder_bits,
        candidates,
        selected,
        masked,
        final_symbol,
    })
}

/// Encode raw bytes into a finished symbol
pub fn encode_payload(payload: &[u8], options: &EncodeOptions) -> Result<QrSymbol> {
    encode_with_stages(payload, options).map(|stages| stages.final_symbol)
}
