//! Plain-text renderings of a [`WallSet`].

use std::collections::HashSet;

use crate::maze::{Coordinate, WallSet, coordinate, edge};

/// Renders walls with `+`, `-` and `|` on a `(2n+1)`×`(2n+1)` character grid.
///
/// Lattice vertex `(x, y)` lands on row `2y`, column `2x`. Vertices are only drawn when a wall
/// touches them.
pub fn render_ascii(walls: &WallSet) -> String {
    let side = walls.size() as usize * 2 + 1;
    let mut canvas = vec![vec![' '; side]; side];
    for wall in walls.iter() {
        let (a, b) = (wall.a(), wall.b());
        let (ax, ay) = (a.x as usize * 2, a.y as usize * 2);
        canvas[ay][ax] = '+';
        canvas[b.y as usize * 2][b.x as usize * 2] = '+';
        if b.x > a.x {
            canvas[ay][ax + 1] = '-';
        } else {
            canvas[ay + 1][ax] = '|';
        }
    }
    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Box-drawing glyph for a lattice vertex with wall arms pointing north, east, south, west.
fn vertex_glyph(north: bool, east: bool, south: bool, west: bool) -> char {
    match (north, east, south, west) {
        (true, true, true, true) => '┼',
        (true, true, true, false) => '├',
        (true, true, false, true) => '┴',
        (true, false, true, true) => '┤',
        (false, true, true, true) => '┬',
        (true, true, false, false) => '└',
        (true, false, true, false) => '│',
        (true, false, false, true) => '┘',
        (false, true, true, false) => '┌',
        (false, true, false, true) => '─',
        (false, false, true, true) => '┐',
        (true, false, false, false) => '╵',
        (false, true, false, false) => '╶',
        (false, false, true, false) => '╷',
        (false, false, false, true) => '╴',
        (false, false, false, false) => ' ',
    }
}

/// Renders walls with Unicode box-drawing characters.
///
/// Each lattice vertex becomes one glyph chosen from the walls meeting at it. Vertices in a row
/// are spaced one column apart, with `─` filling the gap where a horizontal wall runs.
pub fn render_unicode(walls: &WallSet) -> String {
    let segments = walls.iter().copied().collect::<HashSet<_>>();
    let has = |a: Coordinate, b: Coordinate| segments.contains(&edge(a, b));
    let n = walls.size() as i32;

    (0..=n)
        .map(|y| {
            let mut row = String::new();
            for x in 0..=n {
                let here = coordinate(x, y);
                let east = has(here, coordinate(x + 1, y));
                let glyph = vertex_glyph(
                    has(here, coordinate(x, y - 1)),
                    east,
                    has(here, coordinate(x, y + 1)),
                    has(here, coordinate(x - 1, y)),
                );

                #[cfg(debug_assertions)]
                {
                    use unicode_width::UnicodeWidthChar;
                    assert_eq!(
                        glyph.width(),
                        Some(1),
                        "Each vertex glyph must occupy exactly one character width."
                    );
                }

                row.push(glyph);
                if x < n {
                    row.push(if east { '─' } else { ' ' });
                }
            }
            row
        })
        .collect::<Vec<_>>()
        .join("\n")
}
