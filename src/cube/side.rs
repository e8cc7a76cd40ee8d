use crate::prelude::*;

pub const SIZE: usize = 3;

/// Three stickers read off a row or column of a side.
pub type Strip = [Color; SIZE];

/// One face's 3x3 grid of stickers, row-major, as seen from outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Side([[Color; SIZE]; SIZE]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
}

impl Line {
    fn cells(self) -> [(usize, usize); SIZE] {
        match self {
            Line::Row(r) => [(r, 0), (r, 1), (r, 2)],
            Line::Col(c) => [(0, c), (1, c), (2, c)],
        }
    }
}

impl Side {
    pub fn filled(color: Color) -> Side {
        Side([[color; SIZE]; SIZE])
    }

    pub fn from_rows(rows: [[Color; SIZE]; SIZE]) -> Side {
        Side(rows)
    }

    pub fn center(&self) -> Color {
        self.0[1][1]
    }

    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().flat_map(|row| row.iter().copied())
    }

    pub fn mismatches(&self) -> usize {
        let center = self.center();
        self.stickers().filter(|&c| c != center).count()
    }

    pub fn is_uniform(&self) -> bool {
        self.mismatches() == 0
    }

    pub fn rotate_cw(&mut self) {
        let old = self.0;
        for r in 0..SIZE {
            for c in 0..SIZE {
                self.0[r][c] = old[SIZE - 1 - c][r];
            }
        }
    }

    pub fn rotate_ccw(&mut self) {
        let old = self.0;
        for r in 0..SIZE {
            for c in 0..SIZE {
                self.0[r][c] = old[c][SIZE - 1 - r];
            }
        }
    }

    pub fn rotate_180(&mut self) {
        self.rotate_cw();
        self.rotate_cw();
    }

    pub fn rotate(&mut self, turn: Turn) {
        match turn {
            Turn::Clockwise => self.rotate_cw(),
            Turn::CounterClockwise => self.rotate_ccw(),
            Turn::Double => self.rotate_180(),
        }
    }

    pub fn strip(&self, line: Line) -> Strip {
        line.cells().map(|(r, c)| self.0[r][c])
    }

    pub fn set_strip(&mut self, line: Line, strip: Strip) {
        for ((r, c), color) in line.cells().into_iter().zip(strip) {
            self.0[r][c] = color;
        }
    }
}

impl core::ops::Index<(usize, usize)> for Side {
    type Output = Color;

    fn index(&self, (row, col): (usize, usize)) -> &Color {
        &self.0[row][col]
    }
}

impl core::ops::IndexMut<(usize, usize)> for Side {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Color {
        &mut self.0[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn numbered() -> Side {
        Side::from_rows([
            [White, Yellow, Orange],
            [Red, Green, Blue],
            [Orange, Red, White],
        ])
    }

    #[test]
    fn rotate_cw() {
        let mut side = numbered();
        side.rotate_cw();
        assert_eq!(
            side,
            Side::from_rows([
                [Orange, Red, White],
                [Red, Green, Yellow],
                [White, Blue, Orange],
            ])
        );
    }

    #[test]
    fn rotate_ccw() {
        let mut side = numbered();
        side.rotate_ccw();
        assert_eq!(
            side,
            Side::from_rows([
                [Orange, Blue, White],
                [Yellow, Green, Red],
                [White, Red, Orange],
            ])
        );
    }

    #[test]
    fn rotate_180() {
        let mut side = numbered();
        side.rotate_180();
        assert_eq!(
            side,
            Side::from_rows([
                [White, Red, Orange],
                [Blue, Green, Red],
                [Orange, Yellow, White],
            ])
        );
    }

    #[test]
    fn cw_then_ccw_is_identity() {
        let mut side = numbered();
        side.rotate_cw();
        side.rotate_ccw();
        assert_eq!(side, numbered());
    }

    #[test]
    fn center_never_moves() {
        let mut side = numbered();
        for turn in enum_iterator::all::<Turn>() {
            side.rotate(turn);
            assert_eq!(side.center(), Green);
        }
    }

    #[test]
    fn strips_read_in_index_order() {
        let side = numbered();
        assert_eq!(side.strip(Line::Row(0)), [White, Yellow, Orange]);
        assert_eq!(side.strip(Line::Col(2)), [Orange, Blue, White]);
    }

    #[test]
    fn set_strip_touches_only_that_line() {
        let mut side = numbered();
        side.set_strip(Line::Col(0), [Blue, Blue, Blue]);
        assert_eq!(side.strip(Line::Col(0)), [Blue, Blue, Blue]);
        assert_eq!(side.strip(Line::Col(1)), numbered().strip(Line::Col(1)));
        assert_eq!(side.strip(Line::Col(2)), numbered().strip(Line::Col(2)));
    }

    #[test]
    fn mismatches_count_against_center() {
        assert_eq!(Side::filled(Red).mismatches(), 0);
        assert_eq!(numbered().mismatches(), 8);
    }
}
