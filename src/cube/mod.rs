use crate::prelude::*;

use enum_iterator::Sequence;
use rand::{seq::SliceRandom, Rng};

mod side;
pub use side::*;

mod slot;
pub use slot::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum Color {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
}

impl Color {
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Color> {
        enum_iterator::all::<Color>().find(|color| color.letter() == c.to_ascii_uppercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Color of this face's center on a solved cube.
    pub fn home_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Face> {
        enum_iterator::all::<Face>().find(|face| face.letter() == c.to_ascii_uppercase())
    }
}

impl core::fmt::Display for Face {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Full sticker state of the cube, one [`Side`] per [`Face`].
///
/// Sides are laid out as the usual unfolded net: Front, Right, Back and Left
/// are seen from outside with Up at the top, Up is seen from above with Back
/// at the top, and Down is seen from below with Front at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    sides: [Side; 6],
}

/// Number of stickers on the whole cube.
pub const STICKERS: usize = 6 * SIZE * SIZE;

impl Cube {
    pub fn solved() -> Cube {
        use Face::*;

        Cube {
            sides: [Up, Down, Left, Right, Front, Back].map(|face| Side::filled(face.home_color())),
        }
    }

    /// Builds a cube from explicit sides in [`Face`] order. No check is made
    /// that the result is reachable from solved.
    pub fn from_faces(sides: [Side; 6]) -> Cube {
        Cube { sides }
    }

    pub fn face(&self, face: Face) -> &Side {
        &self.sides[face.index()]
    }

    pub fn face_mut(&mut self, face: Face) -> &mut Side {
        &mut self.sides[face.index()]
    }

    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.sides.iter().flat_map(|side| side.stickers())
    }

    pub fn is_solved(&self) -> bool {
        self.sides.iter().all(|side| side.is_uniform())
    }

    pub fn apply(mut self, move_: Move) -> Self {
        self.apply_move(move_);
        self
    }

    pub fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }

    pub fn apply_move(&mut self, move_: impl Into<Move>) {
        let move_ = move_.into();

        self.face_mut(move_.face).rotate(move_.turn);
        for _ in 0..move_.turn.quarter_turns() {
            self.cycle_neighbors(move_.face);
        }
    }

    /// One clockwise step of the four strips bordering `face`.
    fn cycle_neighbors(&mut self, face: Face) {
        let ring = neighbor_ring(face);
        let strips = ring.map(|n| self.read_strip(n));

        for (i, strip) in strips.into_iter().enumerate() {
            self.write_strip(ring[(i + 1) % ring.len()], strip);
        }
    }

    fn read_strip(&self, n: Neighbor) -> Strip {
        let mut strip = self.face(n.face).strip(n.line);
        if n.reversed {
            strip.reverse();
        }
        strip
    }

    fn write_strip(&mut self, n: Neighbor, mut strip: Strip) {
        if n.reversed {
            strip.reverse();
        }
        self.face_mut(n.face).set_strip(n.line, strip);
    }

    /// Applies `count` uniformly random moves and returns them.
    pub fn scramble(&mut self, count: usize) -> Vec<Move> {
        self.scramble_with(count, &mut rand::thread_rng())
    }

    pub fn scramble_with<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<Move> {
        let moves = Move::all().collect::<Vec<_>>();
        let applied = (0..count)
            .filter_map(|_| moves.choose(rng).copied())
            .collect::<Vec<_>>();

        for m in &applied {
            self.apply_move(*m);
        }
        applied
    }

    /// 64-bit FNV-1a over all stickers in face, row, column order.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;

        self.stickers().fold(OFFSET, |h, color| {
            (h ^ color as u64).wrapping_mul(PRIME)
        })
    }

    /// The default cost-to-go estimate, see [`FaceletMismatch`].
    pub fn heuristic(&self) -> u32 {
        FaceletMismatch.estimate(self)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::solved()
    }
}

impl core::hash::Hash for Cube {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint());
    }
}

/// Writes the 54 sticker letters in face, row, column order.
impl core::fmt::Display for Cube {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for color in self.stickers() {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

impl core::str::FromStr for Cube {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Cube> {
        let colors = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Color::from_letter(c).ok_or_else(|| anyhow::anyhow!("Unrecognized color {}", c)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        if colors.len() != STICKERS {
            anyhow::bail!("Expected {} stickers, got {}", STICKERS, colors.len());
        }

        let mut cube = Cube::solved();
        let mut colors = colors.into_iter();
        for side in cube.sides.iter_mut() {
            for r in 0..SIZE {
                for c in 0..SIZE {
                    if let Some(color) = colors.next() {
                        side[(r, c)] = color;
                    }
                }
            }
        }
        Ok(cube)
    }
}

#[derive(Debug, Clone, Copy)]
struct Neighbor {
    face: Face,
    line: Line,
    reversed: bool,
}

const fn strip(face: Face, line: Line, reversed: bool) -> Neighbor {
    Neighbor {
        face,
        line,
        reversed,
    }
}

/// The strips around `face` in clockwise cycle order: a clockwise turn carries
/// each entry's strip into the next entry, position by position.
fn neighbor_ring(face: Face) -> [Neighbor; 4] {
    use Face::*;
    use Line::*;

    match face {
        Up => [
            strip(Front, Row(0), false),
            strip(Left, Row(0), false),
            strip(Back, Row(0), false),
            strip(Right, Row(0), false),
        ],
        Down => [
            strip(Front, Row(2), false),
            strip(Right, Row(2), false),
            strip(Back, Row(2), false),
            strip(Left, Row(2), false),
        ],
        Left => [
            strip(Up, Col(0), false),
            strip(Front, Col(0), false),
            strip(Down, Col(0), false),
            strip(Back, Col(2), true),
        ],
        Right => [
            strip(Up, Col(2), false),
            strip(Back, Col(0), true),
            strip(Down, Col(2), false),
            strip(Front, Col(2), false),
        ],
        Front => [
            strip(Up, Row(2), false),
            strip(Right, Col(0), false),
            strip(Down, Row(0), true),
            strip(Left, Col(2), true),
        ],
        Back => [
            strip(Up, Row(0), true),
            strip(Left, Col(0), false),
            strip(Down, Row(2), false),
            strip(Right, Col(2), true),
        ],
    }
}
