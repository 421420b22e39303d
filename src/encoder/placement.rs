/// Zigzag placement of codeword bits into the data region
use crate::debug::trace_stage;
use crate::encoder::function_patterns::ReservationGrid;
use crate::models::{Module, ModuleMatrix};

/// Data cell coordinates (x, y) in placement order.
///
/// Column pairs from the right edge, skipping the vertical timing column,
/// sweeping up first and alternating direction; reserved cells are skipped.
pub fn zigzag_positions(reserved: &ReservationGrid) -> Vec<(usize, usize)> {
    let dimension = reserved.size();
    let mut positions = Vec::with_capacity(reserved.data_modules_count());

    let mut upward = true;
    let mut col = dimension as i32 - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }

        for i in 0..dimension {
            let row = if upward { dimension - 1 - i } else { i };
            for c in [col as usize, col as usize - 1] {
                if !reserved.is_reserved(c, row) {
                    positions.push((c, row));
                }
            }
        }

        upward = !upward;
        col -= 2;
    }

    positions
}

/// Write `bits` into the unreserved cells in zigzag order.
///
/// Cells left over after the last bit stay unset (the remainder bits).
/// Returns how many cells were left unset.
pub fn place_data_bits(matrix: &mut ModuleMatrix, reserved: &ReservationGrid, bits: &[bool]) -> usize {
    let positions = zigzag_positions(reserved);
    assert!(
        bits.len() <= positions.len(),
        "{} bits exceed {} data modules",
        bits.len(),
        positions.len()
    );

    for (&(x, y), &bit) in positions.iter().zip(bits) {
        debug_assert_eq!(matrix.get(x, y), Module::Unset, "data cell ({x}, {y}) written twice");
        matrix.set(x, y, Module::from_bit(bit));
    }

    let remainder = positions.len() - bits.len();
    trace_stage!(
        "[placement] placed {} bits into {} data modules, {} remainder",
        bits.len(),
        positions.len(),
        remainder
    );
    remainder
}
