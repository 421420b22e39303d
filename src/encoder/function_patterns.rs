use crate::debug::trace_stage;
use crate::models::{BitMatrix, Module, ModuleMatrix, Version};

/// Cells owned by function patterns or the format area.
/// true = function module (never data), false = data module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationGrid {
    mask: BitMatrix,
}

impl ReservationGrid {
    pub fn new(size: usize) -> Self {
        Self {
            mask: BitMatrix::square(size),
        }
    }

    pub fn size(&self) -> usize {
        self.mask.width()
    }

    /// Mark (x, y) reserved; reserving twice is a no-op
    pub fn reserve(&mut self, x: usize, y: usize) {
        self.mask.set(x, y, true);
    }

    pub fn is_reserved(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    pub fn reserved_count(&self) -> usize {
        self.mask.count_ones()
    }

    /// Cells available for data and ECC bits
    pub fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.reserved_count()
    }
}

/// Matrix and reservation grid, built up pass by pass
#[derive(Debug, Clone)]
pub struct FunctionLayout {
    pub matrix: ModuleMatrix,
    pub reserved: ReservationGrid,
}

impl FunctionLayout {
    /// Empty layout: everything unset and unreserved
    pub fn blank(size: usize) -> Self {
        Self {
            matrix: ModuleMatrix::new(size),
            reserved: ReservationGrid::new(size),
        }
    }

    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Write a function module and reserve it
    fn put(&mut self, x: usize, y: usize, dark: bool) {
        self.matrix.set(x, y, Module::from_bit(dark));
        self.reserved.reserve(x, y);
    }
}

/// Run every reservation pass in order for `version`
pub fn build_function_layout(version: Version) -> FunctionLayout {
    let mut layout = FunctionLayout::blank(version.size());
    place_finder_patterns(&mut layout);
    place_alignment_patterns(&mut layout, version);
    place_timing_patterns(&mut layout);
    place_dark_module(&mut layout, version);
    reserve_format_areas(&mut layout);

    trace_stage!(
        "[patterns] v{} size={} reserved={} data_modules={}",
        version,
        layout.size(),
        layout.reserved.reserved_count(),
        layout.reserved.data_modules_count()
    );
    layout
}

/// Three 7x7 finders with their light separators, clipped to bounds
pub fn place_finder_patterns(layout: &mut FunctionLayout) {
    let size = layout.size();
    for (left, top) in [(0, 0), (size - 7, 0), (0, size - 7)] {
        mark_finder_area(layout, left, top);
    }
}

fn mark_finder_area(layout: &mut FunctionLayout, left: usize, top: usize) {
    let size = layout.size();
    for dy in -1i32..=7 {
        for dx in -1i32..=7 {
            let x = left as i32 + dx;
            let y = top as i32 + dy;
            if x < 0 || y < 0 || x >= size as i32 || y >= size as i32 {
                continue;
            }
            let in_finder = (0..=6).contains(&dx) && (0..=6).contains(&dy);
            let dark = in_finder
                && (dx == 0
                    || dx == 6
                    || dy == 0
                    || dy == 6
                    || ((2..=4).contains(&dx) && (2..=4).contains(&dy)));
            layout.put(x as usize, y as usize, dark);
        }
    }
}

/// 5x5 alignment patterns at every center pair clear of the finders
pub fn place_alignment_patterns(layout: &mut FunctionLayout, version: Version) {
    let size = layout.size();
    let centers = version.spec().alignment_centers;
    for &cy in centers {
        for &cx in centers {
            // Skip the three finder corners
            let in_tl = cx <= 6 && cy <= 6;
            let in_tr = cx >= size - 7 && cy <= 6;
            let in_bl = cx <= 6 && cy >= size - 7;
            if in_tl || in_tr || in_bl {
                continue;
            }
            for dy in -2i32..=2 {
                for dx in -2i32..=2 {
                    let dark = dx.abs() == 2 || dy.abs() == 2 || (dx == 0 && dy == 0);
                    layout.put((cx as i32 + dx) as usize, (cy as i32 + dy) as usize, dark);
                }
            }
        }
    }
}

/// Alternating strips on row 6 and column 6 between the finders
pub fn place_timing_patterns(layout: &mut FunctionLayout) {
    let size = layout.size();
    for i in 8..=size - 9 {
        let dark = i % 2 == 0;
        if !layout.reserved.is_reserved(i, 6) {
            layout.put(i, 6, dark);
        }
        if !layout.reserved.is_reserved(6, i) {
            layout.put(6, i, dark);
        }
    }
}

/// Single always-dark module beside the bottom-left finder
pub fn place_dark_module(layout: &mut FunctionLayout, version: Version) {
    layout.put(8, dark_module_row(version), true);
}

/// Row of the dark module in column 8 (always `size - 8`)
pub fn dark_module_row(version: Version) -> usize {
    4 * version.number() as usize + 9
}

/// Reserve both format-information strips; values are written after masking
pub fn reserve_format_areas(layout: &mut FunctionLayout) {
    let size = layout.size();
    for i in 0..=8 {
        layout.reserved.reserve(i, 8);
        layout.reserved.reserve(8, i);
    }
    for i in size - 8..size {
        layout.reserved.reserve(i, 8);
        layout.reserved.reserve(8, i);
    }
}
