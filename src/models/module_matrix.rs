use super::BitMatrix;

/// State of a single module during symbol construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not written yet (only transient, or a remainder cell)
    #[default]
    Unset,
    /// Light module (bit 0)
    Light,
    /// Dark module (bit 1)
    Dark,
}

impl Module {
    /// Module for a data bit
    pub fn from_bit(bit: bool) -> Self {
        if bit { Module::Dark } else { Module::Light }
    }

    /// True only for dark modules; unset renders as light
    pub fn is_dark(self) -> bool {
        self == Module::Dark
    }

    pub fn is_set(self) -> bool {
        self != Module::Unset
    }

    /// Dark <-> light; unset stays unset
    pub fn inverted(self) -> Self {
        match self {
            Module::Dark => Module::Light,
            Module::Light => Module::Dark,
            Module::Unset => Module::Unset,
        }
    }
}

/// Square grid of modules, addressed as (x, y) = (column, row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<Module>,
}

impl ModuleMatrix {
    /// Create a `size` x `size` matrix with every module unset
    pub fn new(size: usize) -> Self {
        Self {
            size,
            modules: vec![Module::Unset; size * size],
        }
    }

    /// Width and height in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at (x, y). Panics when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Module {
        assert!(x < self.size && y < self.size, "module ({x}, {y}) out of bounds");
        self.modules[y * self.size + x]
    }

    /// Overwrite the module at (x, y). Panics when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, module: Module) {
        assert!(x < self.size && y < self.size, "module ({x}, {y}) out of bounds");
        self.modules[y * self.size + x] = module;
    }

    /// Dark test with unset treated as light
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_dark()
    }

    /// Flip a set module between dark and light
    pub fn invert(&mut self, x: usize, y: usize) {
        let module = self.get(x, y);
        self.set(x, y, module.inverted());
    }

    /// Cells set to `Module::Dark`
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_dark()).count()
    }

    /// Cells not yet written
    pub fn unset_count(&self) -> usize {
        self.modules.iter().filter(|m| !m.is_set()).count()
    }

    /// Row `y`, left to right
    pub fn row(&self, y: usize) -> &[Module] {
        &self.modules[y * self.size..(y + 1) * self.size]
    }

    /// Column `x`, top to bottom
    pub fn column(&self, x: usize) -> Vec<Module> {
        (0..self.size).map(|y| self.get(x, y)).collect()
    }

    /// Rendered view: dark = 1, everything else = 0
    pub fn to_bit_matrix(&self) -> BitMatrix {
        let mut bits = BitMatrix::square(self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                if self.is_dark(x, y) {
                    bits.set(x, y, true);
                }
            }
        }
        bits
    }
}
