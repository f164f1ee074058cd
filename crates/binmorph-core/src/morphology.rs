use ndarray::Array2;

use crate::element::StructuringElement;

/// Aggregation rule applied to the neighborhood carved out by the element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Aggregate {
    /// Every active offset must be foreground (erosion).
    All,
    /// At least one active offset must be foreground (dilation).
    Any,
}

/// Footprint-bounded neighborhood scan shared by erosion and dilation.
///
/// Only cells where the element fits entirely inside the mask are evaluated;
/// everything else stays background in the pre-zeroed output. This is the
/// zero-padding border contract: out-of-bounds neighborhoods fail erosion
/// and contribute nothing to dilation.
fn neighborhood_scan(
    mask: &Array2<bool>,
    element: &StructuringElement,
    aggregate: Aggregate,
) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut result = Array2::from_elem((h, w), false);

    // The footprint never fits; every cell keeps the border default.
    if h < element.height() || w < element.width() {
        return result;
    }

    let py = element.half_height();
    let px = element.half_width();
    for row in py..h - py {
        for col in px..w - px {
            let hit = match aggregate {
                Aggregate::All => element.offsets().iter().all(|&(dy, dx)| {
                    mask[[(row as isize + dy) as usize, (col as isize + dx) as usize]]
                }),
                Aggregate::Any => element.offsets().iter().any(|&(dy, dx)| {
                    mask[[(row as isize + dy) as usize, (col as isize + dx) as usize]]
                }),
            };
            result[[row, col]] = hit;
        }
    }

    result
}

/// Binary erosion: a cell survives only if every active offset of the
/// element lands on a foreground cell.
///
/// Cells whose footprint would extend past the border are left background.
pub fn erode(mask: &Array2<bool>, element: &StructuringElement) -> Array2<bool> {
    neighborhood_scan(mask, element, Aggregate::All)
}

/// Binary dilation: a cell becomes foreground if any active offset of the
/// element lands on a foreground cell.
///
/// Border cells stay background, same contract as [`erode`].
pub fn dilate(mask: &Array2<bool>, element: &StructuringElement) -> Array2<bool> {
    neighborhood_scan(mask, element, Aggregate::Any)
}

/// Morphological opening (erosion followed by dilation).
///
/// Removes small isolated foreground regions while preserving larger ones.
pub fn open(mask: &Array2<bool>, element: &StructuringElement) -> Array2<bool> {
    dilate(&erode(mask, element), element)
}

/// Morphological closing (dilation followed by erosion).
///
/// Fills small background gaps while preserving overall shape.
pub fn close(mask: &Array2<bool>, element: &StructuringElement) -> Array2<bool> {
    erode(&dilate(mask, element), element)
}

/// Number of foreground cells in a mask.
pub fn foreground_count(mask: &Array2<bool>) -> usize {
    mask.iter().filter(|&&v| v).count()
}
