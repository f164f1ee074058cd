use std::collections::BTreeMap;

use ndarray::{array, Array2};

use crate::error::{BinmorphError, Result};

/// A validated binary structuring element.
///
/// The pattern is a rectangular 0/1 grid with odd height and width, so the
/// center cell at `(half_height, half_width)` is well defined. Morphological
/// operations iterate over the active offsets relative to that center.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuringElement {
    height: usize,
    width: usize,
    offsets: Vec<(isize, isize)>,
}

impl StructuringElement {
    /// Build an element from a literal 0/1 pattern.
    ///
    /// Fails if either dimension is even or zero, if any entry is outside
    /// {0, 1}, or if no entry is active.
    pub fn from_pattern(pattern: &Array2<u8>) -> Result<Self> {
        let (h, w) = pattern.dim();
        if h == 0 || w == 0 || h % 2 == 0 || w % 2 == 0 {
            return Err(BinmorphError::InvalidStructuringElement(format!(
                "dimensions must be odd and >= 1, got {h}x{w}"
            )));
        }
        if let Some(v) = pattern.iter().find(|&&v| v > 1) {
            return Err(BinmorphError::InvalidStructuringElement(format!(
                "entries must be 0 or 1, found {v}"
            )));
        }

        let py = (h - 1) / 2;
        let px = (w - 1) / 2;
        let mut offsets = Vec::new();
        for ((row, col), &v) in pattern.indexed_iter() {
            if v == 1 {
                offsets.push((row as isize - py as isize, col as isize - px as isize));
            }
        }
        if offsets.is_empty() {
            return Err(BinmorphError::InvalidStructuringElement(
                "at least one active cell is required".to_string(),
            ));
        }

        Ok(Self {
            height: h,
            width: w,
            offsets,
        })
    }

    /// Plus-shaped 3x3 element (corners excluded).
    pub fn cross() -> Self {
        Self::from_pattern(&array![[0, 1, 0], [1, 1, 1], [0, 1, 0]])
            .expect("preset pattern is valid")
    }

    /// All-ones 3x3 element.
    pub fn square3() -> Self {
        Self::from_pattern(&Array2::from_elem((3, 3), 1)).expect("preset pattern is valid")
    }

    /// All-ones 5x5 element.
    pub fn square5() -> Self {
        Self::from_pattern(&Array2::from_elem((5, 5), 1)).expect("preset pattern is valid")
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows above (and below) the center cell.
    pub fn half_height(&self) -> usize {
        (self.height - 1) / 2
    }

    /// Columns left (and right) of the center cell.
    pub fn half_width(&self) -> usize {
        (self.width - 1) / 2
    }

    /// Active `(dy, dx)` offsets relative to the center, row-major.
    pub fn offsets(&self) -> &[(isize, isize)] {
        &self.offsets
    }

    /// Number of active cells.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Name -> element map backing the CLI presets.
///
/// Built once at startup and passed into configuration resolution; replaces
/// any ambient preset table.
#[derive(Clone, Debug, Default)]
pub struct ElementRegistry {
    elements: BTreeMap<String, StructuringElement>,
}

impl ElementRegistry {
    /// Registry pre-populated with the preset vocabulary of the legacy tool.
    pub fn with_builtin() -> Self {
        let mut registry = Self::default();
        registry.register("cruz", StructuringElement::cross());
        registry.register("quadrado", StructuringElement::square3());
        registry.register("quadrado5x5", StructuringElement::square5());
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, element: StructuringElement) {
        self.elements.insert(name.into(), element);
    }

    /// Look up an element by name; unknown names fail before any pixel work.
    pub fn get(&self, name: &str) -> Result<&StructuringElement> {
        self.elements.get(name).ok_or_else(|| {
            BinmorphError::InvalidStructuringElement(format!("unknown element '{name}'"))
        })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }
}
