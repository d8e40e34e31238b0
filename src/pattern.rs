//! Digit bitmaps and the logical-to-physical LED map.
//!
//! A [`DigitPattern`] is a 5×5 grid stored row-major, top-to-bottom and
//! left-to-right. A [`PhysicalMap`] says where each of those logical cells
//! sits along the LED string, so the wiring can change without touching the
//! patterns or the renderer.

/// Matrix width in LEDs.
pub const GRID_WIDTH: usize = 5;
/// Matrix height in LEDs.
pub const GRID_HEIGHT: usize = 5;
/// Total number of LEDs in the matrix.
pub const LED_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;

/// Row-major 5×5 on/off bitmap of one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPattern([bool; LED_COUNT]);

impl DigitPattern {
    /// Builds a pattern from row-major cells.
    pub const fn new(cells: [bool; LED_COUNT]) -> Self {
        Self(cells)
    }

    /// Builds a pattern from 0/1 cells, which reads closer to the bitmap.
    pub const fn from_bits(bits: [u8; LED_COUNT]) -> Self {
        let mut cells = [false; LED_COUNT];
        let mut i = 0;
        while i < LED_COUNT {
            cells[i] = bits[i] != 0;
            i += 1;
        }
        Self(cells)
    }

    /// Returns whether the cell at a logical (row-major) index is lit.
    ///
    /// Out-of-range indices read as unlit.
    pub fn is_lit(&self, logical: usize) -> bool {
        self.0.get(logical).copied().unwrap_or(false)
    }

    /// Returns whether the cell at `(row, col)` is lit.
    pub fn is_lit_at(&self, row: usize, col: usize) -> bool {
        row < GRID_HEIGHT && col < GRID_WIDTH && self.is_lit(row * GRID_WIDTH + col)
    }

    /// Number of lit cells.
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&lit| lit).count()
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[bool; LED_COUNT] {
        &self.0
    }
}

/// Exactly one [`DigitPattern`] per digit 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternTable([DigitPattern; 10]);

impl PatternTable {
    /// Builds a table; entry `n` is the bitmap of digit `n`.
    pub const fn new(patterns: [DigitPattern; 10]) -> Self {
        Self(patterns)
    }

    /// The bitmaps the matrix ships with.
    pub const fn standard() -> Self {
        STANDARD_PATTERNS
    }

    /// Returns the pattern for a digit value (taken mod 10).
    pub fn pattern(&self, digit: u8) -> &DigitPattern {
        let index = usize::from(digit % 10);
        &self.0[index]
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[rustfmt::skip]
const STANDARD_PATTERNS: PatternTable = PatternTable::new([
    DigitPattern::from_bits([1,1,1,1,1, 1,0,0,0,1, 1,0,0,0,1, 1,0,0,0,1, 1,1,1,1,1]), // 0
    DigitPattern::from_bits([0,0,1,0,0, 0,0,1,1,0, 0,0,1,0,0, 0,0,1,0,0, 0,1,1,1,0]), // 1
    DigitPattern::from_bits([0,0,1,1,0, 0,1,0,0,1, 0,0,0,1,0, 0,0,1,0,0, 0,1,1,1,1]), // 2
    DigitPattern::from_bits([1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1]), // 3
    DigitPattern::from_bits([1,0,0,0,1, 1,0,0,0,1, 1,1,1,1,1, 1,0,0,0,0, 0,0,0,0,1]), // 4
    DigitPattern::from_bits([1,1,1,1,1, 1,0,0,0,0, 1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1]), // 5
    DigitPattern::from_bits([1,1,1,1,1, 1,0,0,0,0, 1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1]), // 6
    DigitPattern::from_bits([1,1,1,1,1, 0,1,0,0,0, 0,0,1,0,0, 0,0,0,1,0, 1,0,0,0,0]), // 7
    DigitPattern::from_bits([1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1]), // 8
    DigitPattern::from_bits([1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1]), // 9
]);

/// Physical map validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MapError {
    /// A logical cell maps past the end of the string.
    OutOfRange {
        /// Logical cell index.
        logical: usize,
        /// Offending physical position.
        physical: u8,
    },

    /// Two logical cells map to the same physical LED.
    Duplicate {
        /// Physical position claimed twice.
        physical: u8,
    },
}

impl core::fmt::Display for MapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MapError::OutOfRange { logical, physical } => {
                write!(
                    f,
                    "logical cell {} maps to LED {}, but the string has {} LEDs",
                    logical, physical, LED_COUNT
                )
            }
            MapError::Duplicate { physical } => {
                write!(f, "LED {} is mapped from more than one logical cell", physical)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MapError {}

/// Permutation from logical (row-major) cell index to physical LED position.
///
/// Always a bijection over `0..LED_COUNT`. Maps built in `const` context are
/// checked at compile time:
///
/// ```
/// use digit_matrix::pattern::PhysicalMap;
///
/// const FLIPPED: PhysicalMap = PhysicalMap::new([
///     24, 23, 22, 21, 20,
///     19, 18, 17, 16, 15,
///     14, 13, 12, 11, 10,
///      9,  8,  7,  6,  5,
///      4,  3,  2,  1,  0,
/// ]);
/// assert_eq!(FLIPPED.physical(0), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalMap([u8; LED_COUNT]);

impl PhysicalMap {
    /// Builds a map, panicking (at compile time in `const` context) unless it is a bijection.
    pub const fn new(map: [u8; LED_COUNT]) -> Self {
        let mut seen = [false; LED_COUNT];
        let mut i = 0;
        while i < LED_COUNT {
            let physical = map[i] as usize;
            assert!(physical < LED_COUNT, "physical LED index out of range");
            assert!(!seen[physical], "duplicate physical LED index");
            seen[physical] = true;
            i += 1;
        }
        Self(map)
    }

    /// Builds a map from runtime data.
    pub fn try_new(map: [u8; LED_COUNT]) -> Result<Self, MapError> {
        let mut seen = [false; LED_COUNT];
        for (logical, &physical) in map.iter().enumerate() {
            let slot = seen
                .get_mut(usize::from(physical))
                .ok_or(MapError::OutOfRange { logical, physical })?;
            if *slot {
                return Err(MapError::Duplicate { physical });
            }
            *slot = true;
        }
        Ok(Self(map))
    }

    /// LED string runs in reading order.
    pub const fn row_major() -> Self {
        let mut map = [0u8; LED_COUNT];
        let mut i = 0;
        while i < LED_COUNT {
            map[i] = i as u8;
            i += 1;
        }
        Self::new(map)
    }

    /// Every row is wired right-to-left, rows top-to-bottom.
    ///
    /// ```text
    ///    4  3  2  1  0
    ///    9  8  7  6  5
    ///   14 13 12 11 10
    ///   19 18 17 16 15
    ///   24 23 22 21 20
    /// ```
    pub const fn row_reversed() -> Self {
        let mut map = [0u8; LED_COUNT];
        let mut row = 0;
        while row < GRID_HEIGHT {
            let mut col = 0;
            while col < GRID_WIDTH {
                map[row * GRID_WIDTH + col] = (row * GRID_WIDTH + (GRID_WIDTH - 1 - col)) as u8;
                col += 1;
            }
            row += 1;
        }
        Self::new(map)
    }

    /// Snake wiring: even rows left-to-right, odd rows right-to-left.
    ///
    /// ```text
    ///    0  1  2  3  4
    ///    9  8  7  6  5
    ///   10 11 12 13 14
    ///   19 18 17 16 15
    ///   20 21 22 23 24
    /// ```
    pub const fn serpentine() -> Self {
        let mut map = [0u8; LED_COUNT];
        let mut row = 0;
        while row < GRID_HEIGHT {
            let mut col = 0;
            while col < GRID_WIDTH {
                let along = if row % 2 == 0 { col } else { GRID_WIDTH - 1 - col };
                map[row * GRID_WIDTH + col] = (row * GRID_WIDTH + along) as u8;
                col += 1;
            }
            row += 1;
        }
        Self::new(map)
    }

    /// Physical LED position of a logical cell.
    ///
    /// # Panics
    /// If `logical >= LED_COUNT`.
    pub fn physical(&self, logical: usize) -> usize {
        usize::from(self.0[logical])
    }

    /// Logical cell shown by a physical LED, if `physical` is in range.
    pub fn logical(&self, physical: usize) -> Option<usize> {
        self.0.iter().position(|&p| usize::from(p) == physical)
    }

    /// Logical-to-physical table.
    pub fn as_array(&self) -> &[u8; LED_COUNT] {
        &self.0
    }
}

impl Default for PhysicalMap {
    fn default() -> Self {
        Self::row_reversed()
    }
}
