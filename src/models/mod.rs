pub mod matrix;
pub mod module_matrix;
pub mod qr_code;

pub use matrix::BitMatrix;
pub use module_matrix::{Module, ModuleMatrix};
pub use qr_code::{ECLevel, MaskPattern, QrSymbol, Version};
