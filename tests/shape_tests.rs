//! Shape tests - catalog grids and rotation geometry

use termtris::core::{spawn_shape, Shape};
use termtris::types::ShapeKind;

fn grid(shape: &Shape) -> Vec<Vec<u8>> {
    (0..shape.height())
        .map(|y| (0..shape.width()).map(|x| shape.at(x, y)).collect())
        .collect()
}

#[test]
fn every_shape_has_four_cells() {
    for kind in ShapeKind::ALL {
        assert_eq!(spawn_shape(kind).occupied().count(), 4, "{kind:?}");
    }
}

#[test]
fn canonical_grids_match_the_catalog() {
    assert_eq!(grid(&spawn_shape(ShapeKind::I)), vec![vec![1, 1, 1, 1]]);
    assert_eq!(grid(&spawn_shape(ShapeKind::O)), vec![vec![1, 1], vec![1, 1]]);
    assert_eq!(
        grid(&spawn_shape(ShapeKind::T)),
        vec![vec![0, 1, 0], vec![1, 1, 1]]
    );
    assert_eq!(
        grid(&spawn_shape(ShapeKind::S)),
        vec![vec![0, 1, 1], vec![1, 1, 0]]
    );
    assert_eq!(
        grid(&spawn_shape(ShapeKind::Z)),
        vec![vec![1, 1, 0], vec![0, 1, 1]]
    );
    assert_eq!(
        grid(&spawn_shape(ShapeKind::J)),
        vec![vec![1, 0, 0], vec![1, 1, 1]]
    );
    assert_eq!(
        grid(&spawn_shape(ShapeKind::L)),
        vec![vec![0, 0, 1], vec![1, 1, 1]]
    );
}

#[test]
fn rotation_swaps_the_bounding_box() {
    for kind in ShapeKind::ALL {
        let shape = spawn_shape(kind);
        let rotated = shape.rotated();
        assert_eq!(rotated.width(), shape.height(), "{kind:?}");
        assert_eq!(rotated.height(), shape.width(), "{kind:?}");
    }
}

#[test]
fn rotation_is_clockwise() {
    // The J hook moves from the top-left to the top-right corner.
    let rotated = spawn_shape(ShapeKind::J).rotated();
    assert_eq!(grid(&rotated), vec![vec![1, 1], vec![1, 0], vec![1, 0]]);

    // A flat bar becomes a column.
    let rotated = spawn_shape(ShapeKind::I).rotated();
    assert_eq!(grid(&rotated), vec![vec![1], vec![1], vec![1], vec![1]]);
}

#[test]
fn four_rotations_return_the_original() {
    for kind in ShapeKind::ALL {
        let shape = spawn_shape(kind);
        let back = shape.rotated().rotated().rotated().rotated();
        assert_eq!(back, shape, "{kind:?}");
    }
}

#[test]
fn o_is_rotation_invariant() {
    let o = spawn_shape(ShapeKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn rotation_preserves_the_cell_count() {
    for kind in ShapeKind::ALL {
        let shape = spawn_shape(kind);
        assert_eq!(shape.rotated().occupied().count(), 4, "{kind:?}");
    }
}
