use crate::models::BitMatrix;
use crate::pipeline::PipelineStages;
use crate::render::RenderOptions;
use image::GrayImage;
use std::path::Path;

/// Load an image as 8-bit grayscale.
pub fn load_luma<P: AsRef<Path>>(path: P) -> Result<GrayImage, image::ImageError> {
    Ok(image::open(path)?.to_luma8())
}

/// Read back a rendered symbol by sampling the center pixel of every module.
///
/// Returns `None` when the image is smaller than `size` modules at the given
/// scale and border.
pub fn sample_modules(img: &GrayImage, size: usize, options: &RenderOptions) -> Option<BitMatrix> {
    let needed = options.image_size(size) as u32;
    if img.width() < needed || img.height() < needed || options.scale == 0 {
        return None;
    }

    let mut modules = BitMatrix::square(size);
    let half = options.scale / 2;
    for y in 0..size {
        for x in 0..size {
            let px = (options.border + x) * options.scale + half;
            let py = (options.border + y) * options.scale + half;
            let luma = img.get_pixel(px as u32, py as u32)[0];
            modules.set(x, y, luma < 128);
        }
    }
    Some(modules)
}

/// Summary statistics for a module matrix.
#[derive(Debug, Clone, Copy)]
pub struct MatrixStats {
    /// Count of dark modules.
    pub dark_modules: usize,
    /// Total modules in the matrix.
    pub total_modules: usize,
    /// Ratio of dark modules to total modules.
    pub dark_ratio: f64,
}

/// Compute dark module stats for a matrix.
pub fn matrix_stats(matrix: &BitMatrix) -> MatrixStats {
    let dark = matrix.count_ones();
    let total = matrix.width() * matrix.height();
    let ratio = if total == 0 {
        0.0
    } else {
        dark as f64 / total as f64
    };
    MatrixStats {
        dark_modules: dark,
        total_modules: total,
        dark_ratio: ratio,
    }
}

/// One line per mask candidate, the selected one marked with `*`.
pub fn describe_candidates(stages: &PipelineStages) -> Vec<String> {
    stages
        .candidates
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let marker = if i == stages.selected { '*' } else { ' ' };
            format!(
                "{marker} mask {}: total={:>4}  runs={:>3} blocks={:>3} finder={:>3} balance={:>3}",
                c.mask.id(),
                c.penalty.total(),
                c.penalty.runs,
                c.penalty.blocks,
                c.penalty.finder_like,
                c.penalty.balance
            )
        })
        .collect()
}
