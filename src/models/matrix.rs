/// Compact bit matrix for storing binary data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new bit matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height + 7) / 8;
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y)
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set bit at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Toggle bit at (x, y)
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        self.data[byte_index] ^= 1 << bit_index;
    }

    /// Number of bits set to 1
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

/// Square module grid for a QR symbol under construction.
///
/// Each cell carries a dark/light value plus a function-pattern flag.
/// Function cells (finders, separators, timing, alignment, format/version
/// info, dark module) are fixed per version and never altered by data
/// placement or masking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    modules: BitMatrix,
    function: BitMatrix,
}

impl Matrix {
    /// Create an all-light matrix with no function cells marked
    pub fn new(size: usize) -> Self {
        Self {
            size,
            modules: BitMatrix::new(size, size),
            function: BitMatrix::new(size, size),
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module color at (x, y); true = dark
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Set the color of a data cell
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
    }

    /// Set a cell's color and mark it as a function pattern
    pub fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
        self.function.set(x, y, true);
    }

    /// Whether (x, y) belongs to a function pattern
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.function.get(x, y)
    }

    /// Invert the color of a data cell
    pub fn flip(&mut self, x: usize, y: usize) {
        self.modules.toggle(x, y);
    }

    /// Number of dark modules in the whole grid
    pub fn count_dark(&self) -> usize {
        self.modules.count_ones()
    }

    /// Number of cells available for data bits
    pub fn data_module_count(&self) -> usize {
        self.size * self.size - self.function.count_ones()
    }
}
