//! Mask penalty rules N1-N4
//!
//! Rules work on the three module states. Unset cells (remainder bits,
//! format strips before they are written) only match other unset cells:
//! they extend runs and blocks among themselves, are neither dark nor light
//! for the finder-like rule, and do not count as dark for the balance rule.

use crate::models::{Module, ModuleMatrix};

const N1_BASE: u32 = 3;
const N2_BLOCK: u32 = 3;
const N3_FINDER_LIKE: u32 = 40;
const N4_STEP: u32 = 10;

/// Dark, light, dark, dark, dark, light, dark
const FINDER_LIKE: [Module; 7] = [
    Module::Dark,
    Module::Light,
    Module::Dark,
    Module::Dark,
    Module::Dark,
    Module::Light,
    Module::Dark,
];

/// Per-rule breakdown of a candidate's penalty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PenaltyScore {
    /// Runs of five or more same-state modules
    pub runs: u32,
    /// 2x2 same-state blocks
    pub blocks: u32,
    /// Finder-like 1:1:3:1:1 sequences next to light space
    pub finder_like: u32,
    /// Dark/light balance
    pub balance: u32,
}

impl PenaltyScore {
    /// Sum of all four rules
    pub fn total(&self) -> u32 {
        self.runs + self.blocks + self.finder_like + self.balance
    }
}

/// Score all four rules
pub fn score(matrix: &ModuleMatrix) -> PenaltyScore {
    let size = matrix.size();
    let rows: Vec<&[Module]> = (0..size).map(|y| matrix.row(y)).collect();
    let cols: Vec<Vec<Module>> = (0..size).map(|x| matrix.column(x)).collect();
    let lines = || rows.iter().copied().chain(cols.iter().map(Vec::as_slice));

    PenaltyScore {
        runs: lines().map(run_penalty).sum(),
        blocks: block_penalty(&rows),
        finder_like: lines().map(finder_like_penalty).sum(),
        balance: balance_penalty(matrix.dark_count(), size * size),
    }
}

/// N1: each maximal run of length >= 5 costs 3 + (length - 5)
pub fn run_penalty(line: &[Module]) -> u32 {
    let mut penalty = 0;
    let mut run_len = 0u32;
    let mut run_state = None;

    for &module in line {
        if Some(module) == run_state {
            run_len += 1;
        } else {
            penalty += run_cost(run_len);
            run_state = Some(module);
            run_len = 1;
        }
    }
    penalty + run_cost(run_len)
}

fn run_cost(run_len: u32) -> u32 {
    if run_len >= 5 { N1_BASE + (run_len - 5) } else { 0 }
}

/// N2: every 2x2 single-state block, overlapping blocks included
pub fn block_penalty<R: AsRef<[Module]>>(rows: &[R]) -> u32 {
    rows.windows(2)
        .map(|pair| {
            let (top, bottom) = (pair[0].as_ref(), pair[1].as_ref());
            (0..top.len().saturating_sub(1))
                .filter(|&x| {
                    let v = top[x];
                    top[x + 1] == v && bottom[x] == v && bottom[x + 1] == v
                })
                .count() as u32
                * N2_BLOCK
        })
        .sum()
}

/// N3: 40 per side of a 1011101 sequence that has four light modules on
/// that side. Only modules inside the symbol are considered.
pub fn finder_like_penalty(line: &[Module]) -> u32 {
    let len = line.len();
    if len < FINDER_LIKE.len() {
        return 0;
    }

    let light_run = |start: usize| line[start..start + 4].iter().all(|&m| m == Module::Light);
    let mut penalty = 0;
    for start in 0..=len - FINDER_LIKE.len() {
        if line[start..start + FINDER_LIKE.len()] != FINDER_LIKE {
            continue;
        }
        if start >= 4 && light_run(start - 4) {
            penalty += N3_FINDER_LIKE;
        }
        let after = start + FINDER_LIKE.len();
        if after + 4 <= len && light_run(after) {
            penalty += N3_FINDER_LIKE;
        }
    }
    penalty
}

/// N4: 10 points for every full 5% step the dark ratio sits away from 50%
pub fn balance_penalty(dark: usize, total: usize) -> u32 {
    assert!(total > 0, "empty matrix has no balance");
    // floor(percent / 5) * 5 in exact integer arithmetic
    let prev = (dark * 100 / (total * 5)) * 5;
    let next = prev + 5;
    let k = prev.abs_diff(50).min(next.abs_diff(50));
    (k / 5) as u32 * N4_STEP
}
