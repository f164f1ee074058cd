use ndarray::{array, Array2};

use binmorph_core::element::{ElementRegistry, StructuringElement};
use binmorph_core::error::BinmorphError;

// ---------------------------------------------------------------------------
// Construction and validation
// ---------------------------------------------------------------------------

#[test]
fn test_from_pattern_accepts_cross() {
    let element =
        StructuringElement::from_pattern(&array![[0, 1, 0], [1, 1, 1], [0, 1, 0]]).unwrap();
    assert_eq!(element.height(), 3);
    assert_eq!(element.width(), 3);
    assert_eq!(element.half_height(), 1);
    assert_eq!(element.half_width(), 1);
    assert_eq!(
        element.offsets(),
        &[(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)]
    );
}

#[test]
fn test_from_pattern_accepts_single_row() {
    let element = StructuringElement::from_pattern(&array![[1, 1, 1]]).unwrap();
    assert_eq!(element.half_height(), 0);
    assert_eq!(element.half_width(), 1);
    assert_eq!(element.offsets(), &[(0, -1), (0, 0), (0, 1)]);
}

#[test]
fn test_from_pattern_accepts_trivial_center() {
    let element = StructuringElement::from_pattern(&array![[1]]).unwrap();
    assert_eq!(element.offsets(), &[(0, 0)]);
    assert_eq!(element.len(), 1);
    assert!(!element.is_empty());
}

#[test]
fn test_from_pattern_rejects_even_dimensions() {
    let even_height = Array2::<u8>::from_elem((2, 3), 1);
    let even_width = Array2::<u8>::from_elem((3, 4), 1);
    for pattern in [even_height, even_width] {
        let err = StructuringElement::from_pattern(&pattern).unwrap_err();
        assert!(matches!(err, BinmorphError::InvalidStructuringElement(_)));
    }
}

#[test]
fn test_from_pattern_rejects_empty_pattern() {
    let pattern = Array2::<u8>::from_elem((0, 0), 1);
    let err = StructuringElement::from_pattern(&pattern).unwrap_err();
    assert!(matches!(err, BinmorphError::InvalidStructuringElement(_)));
}

#[test]
fn test_from_pattern_rejects_non_binary_entries() {
    let err =
        StructuringElement::from_pattern(&array![[0, 1, 0], [1, 2, 1], [0, 1, 0]]).unwrap_err();
    assert!(matches!(err, BinmorphError::InvalidStructuringElement(_)));
}

#[test]
fn test_from_pattern_rejects_all_zero_pattern() {
    let pattern = Array2::<u8>::from_elem((3, 3), 0);
    let err = StructuringElement::from_pattern(&pattern).unwrap_err();
    assert!(matches!(err, BinmorphError::InvalidStructuringElement(_)));
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

#[test]
fn test_cross_preset() {
    let cross = StructuringElement::cross();
    assert_eq!(cross.len(), 5);
    assert_eq!((cross.height(), cross.width()), (3, 3));
    // Corners are excluded.
    assert!(!cross.offsets().contains(&(-1, -1)));
    assert!(!cross.offsets().contains(&(1, 1)));
    assert!(cross.offsets().contains(&(0, 0)));
}

#[test]
fn test_square_presets() {
    let square3 = StructuringElement::square3();
    assert_eq!(square3.len(), 9);
    assert_eq!((square3.half_height(), square3.half_width()), (1, 1));

    let square5 = StructuringElement::square5();
    assert_eq!(square5.len(), 25);
    assert_eq!((square5.half_height(), square5.half_width()), (2, 2));
    assert!(square5.offsets().contains(&(-2, 2)));
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn test_registry_builtin_names() {
    let registry = ElementRegistry::with_builtin();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["cruz", "quadrado", "quadrado5x5"]);
}

#[test]
fn test_registry_resolves_presets() {
    let registry = ElementRegistry::with_builtin();
    assert_eq!(registry.get("cruz").unwrap(), &StructuringElement::cross());
    assert_eq!(
        registry.get("quadrado").unwrap(),
        &StructuringElement::square3()
    );
    assert_eq!(
        registry.get("quadrado5x5").unwrap(),
        &StructuringElement::square5()
    );
}

#[test]
fn test_registry_rejects_unknown_name() {
    let registry = ElementRegistry::with_builtin();
    let err = registry.get("hexagono").unwrap_err();
    assert!(matches!(err, BinmorphError::InvalidStructuringElement(_)));
}

#[test]
fn test_registry_accepts_custom_element() {
    let mut registry = ElementRegistry::with_builtin();
    let column = StructuringElement::from_pattern(&array![[1], [1], [1]]).unwrap();
    registry.register("coluna", column.clone());
    assert_eq!(registry.get("coluna").unwrap(), &column);
}
