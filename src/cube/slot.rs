use crate::prelude::*;

/// A single sticker location on the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickerPos {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

const fn at(face: Face, row: usize, col: usize) -> StickerPos {
    StickerPos { face, row, col }
}

use super::Face::*;

/// Fixed corner positions: UFR, UFL, UBL, UBR, DFR, DFL, DBL, DBR.
/// The up/down sticker always comes first.
pub const CORNER_SLOTS: [[StickerPos; 3]; 8] = [
    [at(Up, 2, 2), at(Front, 0, 2), at(Right, 0, 0)],
    [at(Up, 2, 0), at(Front, 0, 0), at(Left, 0, 2)],
    [at(Up, 0, 0), at(Back, 0, 2), at(Left, 0, 0)],
    [at(Up, 0, 2), at(Back, 0, 0), at(Right, 0, 2)],
    [at(Down, 0, 2), at(Front, 2, 2), at(Right, 2, 0)],
    [at(Down, 0, 0), at(Front, 2, 0), at(Left, 2, 2)],
    [at(Down, 2, 0), at(Back, 2, 2), at(Left, 2, 0)],
    [at(Down, 2, 2), at(Back, 2, 0), at(Right, 2, 2)],
];

/// Fixed edge positions: UF, UR, UB, UL, DF, DR, DB, DL, FR, FL, BR, BL.
pub const EDGE_SLOTS: [[StickerPos; 2]; 12] = [
    [at(Up, 2, 1), at(Front, 0, 1)],
    [at(Up, 1, 2), at(Right, 0, 1)],
    [at(Up, 0, 1), at(Back, 0, 1)],
    [at(Up, 1, 0), at(Left, 0, 1)],
    [at(Down, 0, 1), at(Front, 2, 1)],
    [at(Down, 1, 2), at(Right, 2, 1)],
    [at(Down, 2, 1), at(Back, 2, 1)],
    [at(Down, 1, 0), at(Left, 2, 1)],
    [at(Front, 1, 2), at(Right, 1, 0)],
    [at(Front, 1, 0), at(Left, 1, 2)],
    [at(Back, 1, 0), at(Right, 1, 2)],
    [at(Back, 1, 2), at(Left, 1, 0)],
];

impl Cube {
    pub fn sticker(&self, pos: StickerPos) -> Color {
        self.face(pos.face)[(pos.row, pos.col)]
    }

    pub fn slot_colors<const N: usize>(&self, slot: &[StickerPos; N]) -> [Color; N] {
        (*slot).map(|pos| self.sticker(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn sorted<const N: usize>(mut colors: [Color; N]) -> [Color; N] {
        colors.sort();
        colors
    }

    fn all_positions() -> Vec<StickerPos> {
        CORNER_SLOTS
            .iter()
            .flat_map(|s| s.iter().copied())
            .chain(EDGE_SLOTS.iter().flat_map(|s| s.iter().copied()))
            .collect()
    }

    #[test]
    fn slots_cover_every_non_center_sticker_once() {
        let positions = all_positions();
        assert_eq!(positions.len(), 48);
        for (i, a) in positions.iter().enumerate() {
            assert!(!(a.row == 1 && a.col == 1));
            for b in &positions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn solved_slots_touch_distinct_faces() {
        let cube = Cube::solved();
        for slot in CORNER_SLOTS {
            let colors = sorted(cube.slot_colors(&slot));
            assert!(colors[0] != colors[1] && colors[1] != colors[2]);
        }
        for slot in EDGE_SLOTS {
            let colors = cube.slot_colors(&slot);
            assert_ne!(colors[0], colors[1]);
        }
    }

    // Every slot must still hold a real piece after any sequence; a wrong
    // neighbor strip would glue stickers of different pieces together.
    #[quickcheck]
    fn pieces_survive_moves(moves: Vec<Move>) -> bool {
        let solved = Cube::solved();
        let cube = Cube::solved().apply_all(moves);

        let mut corners = CORNER_SLOTS
            .iter()
            .map(|s| sorted(cube.slot_colors(s)))
            .collect::<Vec<_>>();
        let mut home_corners = CORNER_SLOTS
            .iter()
            .map(|s| sorted(solved.slot_colors(s)))
            .collect::<Vec<_>>();
        corners.sort();
        home_corners.sort();

        let mut edges = EDGE_SLOTS
            .iter()
            .map(|s| sorted(cube.slot_colors(s)))
            .collect::<Vec<_>>();
        let mut home_edges = EDGE_SLOTS
            .iter()
            .map(|s| sorted(solved.slot_colors(s)))
            .collect::<Vec<_>>();
        edges.sort();
        home_edges.sort();

        corners == home_corners && edges == home_edges
    }
}
