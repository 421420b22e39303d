/// Mask application and best-mask search
use rayon::prelude::*;

use crate::debug::trace_stage;
use crate::encoder::function_patterns::ReservationGrid;
use crate::encoder::penalty::{self, PenaltyScore};
use crate::models::{MaskPattern, ModuleMatrix};

/// One masked version of the symbol with its score
#[derive(Debug, Clone)]
pub struct MaskCandidate {
    pub mask: MaskPattern,
    pub matrix: ModuleMatrix,
    pub penalty: PenaltyScore,
}

/// Copy of `matrix` with every unreserved, set module under the mask inverted
pub fn apply_mask(matrix: &ModuleMatrix, reserved: &ReservationGrid, mask: MaskPattern) -> ModuleMatrix {
    let mut masked = matrix.clone();
    let size = matrix.size();
    for y in 0..size {
        for x in 0..size {
            if !reserved.is_reserved(x, y) && matrix.get(x, y).is_set() && mask.is_masked(y, x) {
                masked.invert(x, y);
            }
        }
    }
    masked
}

fn candidate(matrix: &ModuleMatrix, reserved: &ReservationGrid, mask: MaskPattern) -> MaskCandidate {
    let masked = apply_mask(matrix, reserved, mask);
    let penalty = penalty::score(&masked);
    MaskCandidate {
        mask,
        matrix: masked,
        penalty,
    }
}

/// All eight candidates in ascending mask id order
pub fn evaluate_candidates(
    matrix: &ModuleMatrix,
    reserved: &ReservationGrid,
    parallel: bool,
) -> Vec<MaskCandidate> {
    let candidates: Vec<MaskCandidate> = if parallel {
        MaskPattern::ALL
            .par_iter()
            .map(|&mask| candidate(matrix, reserved, mask))
            .collect()
    } else {
        MaskPattern::ALL
            .iter()
            .map(|&mask| candidate(matrix, reserved, mask))
            .collect()
    };

    for c in &candidates {
        trace_stage!(
            "[mask] {} penalty={} (runs={} blocks={} finder={} balance={})",
            c.mask.id(),
            c.penalty.total(),
            c.penalty.runs,
            c.penalty.blocks,
            c.penalty.finder_like,
            c.penalty.balance
        );
    }
    candidates
}

/// Index of the minimum-penalty candidate; exact ties go to the lowest mask id
pub fn best_candidate_index(candidates: &[MaskCandidate]) -> usize {
    assert!(!candidates.is_empty(), "no mask candidates to choose from");
    let best = candidates
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| (c.penalty.total(), c.mask.id()))
        .map(|(i, _)| i)
        .unwrap_or(0);
    trace_stage!(
        "[mask] selected {} with penalty {}",
        candidates[best].mask.id(),
        candidates[best].penalty.total()
    );
    best
}
