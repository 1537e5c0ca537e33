//! Bounds-checked neighbor enumeration for the supported grid shapes.
//!
//! Each table lists offsets in the order candidates are produced.

use tacgrid_core::{Point, Range};

/// Left, right, down, up.
const SQUARE_4: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// Left column first (left, left-down, left-up), then the right column, then
/// down and up.
const SQUARE_8: [Point; 8] = [
    Point::new(-1, 0),
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, 0),
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// Even rows reach diagonally to the left.
const HEX_EVEN_ROW: [Point; 6] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Odd rows are shifted right by half a cell and reach diagonally to the right.
const HEX_ODD_ROW: [Point; 6] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, 1),
    Point::new(1, -1),
];

#[inline]
fn push_offsets(p: Point, offsets: &[Point], bounds: Range, buf: &mut Vec<Point>) {
    for &d in offsets {
        let n = p + d;
        if bounds.contains(n) {
            buf.push(n);
        }
    }
}

/// Orthogonal neighbors of `p`.
pub fn square_4(p: Point, bounds: Range, buf: &mut Vec<Point>) {
    push_offsets(p, &SQUARE_4, bounds, buf);
}

/// Orthogonal and diagonal neighbors of `p`. Diagonals are offered even when
/// both cells they cut past are blocked.
pub fn square_8(p: Point, bounds: Range, buf: &mut Vec<Point>) {
    push_offsets(p, &SQUARE_8, bounds, buf);
}

/// The six neighbors of `p` in an odd-row-shifted hexagon layout.
pub fn hex_odd_row(p: Point, bounds: Range, buf: &mut Vec<Point>) {
    let offsets = if p.is_odd_row() { &HEX_ODD_ROW } else { &HEX_EVEN_ROW };
    push_offsets(p, offsets, bounds, buf);
}
