use crate::prelude::*;

/// A cost-to-go estimate. Zero on a solved cube.
pub trait Heuristic {
    fn estimate(&self, cube: &Cube) -> u32;
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn estimate(&self, cube: &Cube) -> u32 {
        (**self).estimate(cube)
    }
}

/// Counts stickers that differ from their face's center.
///
/// One turn can fix up to 8 stickers at once and the count is not scaled
/// down, so this overestimates. Cheap and still a useful guide.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceletMismatch;

impl Heuristic for FaceletMismatch {
    fn estimate(&self, cube: &Cube) -> u32 {
        enum_iterator::all::<Face>()
            .map(|face| cube.face(face).mismatches() as u32)
            .sum()
    }
}

/// Lower bound from misplaced and misoriented corner and edge pieces.
///
/// A single turn moves exactly 4 corners and 4 edges, so none of the four
/// counts can drop by more than 4 per move.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubieBound;

const CORNERS_PER_MOVE: u32 = 4;
const EDGES_PER_MOVE: u32 = 4;
const CORNER_TWISTS_PER_MOVE: u32 = 4;
const EDGE_FLIPS_PER_MOVE: u32 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCounts {
    pub misplaced_corners: u32,
    pub misoriented_corners: u32,
    pub misplaced_edges: u32,
    pub misoriented_edges: u32,
}

impl PieceCounts {
    pub fn lower_bound(&self) -> u32 {
        [
            ceil_div(self.misplaced_corners, CORNERS_PER_MOVE),
            ceil_div(self.misoriented_corners, CORNER_TWISTS_PER_MOVE),
            ceil_div(self.misplaced_edges, EDGES_PER_MOVE),
            ceil_div(self.misoriented_edges, EDGE_FLIPS_PER_MOVE),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

fn ceil_div(n: u32, d: u32) -> u32 {
    (n + d - 1) / d
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Home,
    Misoriented,
    Misplaced,
}

fn classify<const N: usize>(current: [Color; N], solved: &[Color; N]) -> SlotState {
    if current == *solved {
        return SlotState::Home;
    }

    let mut a = current;
    let mut b = *solved;
    a.sort();
    b.sort();
    if a == b {
        SlotState::Misoriented
    } else {
        SlotState::Misplaced
    }
}

struct SolvedSlots {
    corners: [[Color; 3]; 8],
    edges: [[Color; 2]; 12],
}

impl SolvedSlots {
    fn from_cube(cube: &Cube) -> Self {
        SolvedSlots {
            corners: CORNER_SLOTS.map(|slot| cube.slot_colors(&slot)),
            edges: EDGE_SLOTS.map(|slot| cube.slot_colors(&slot)),
        }
    }
}

lazy_static::lazy_static! {
    static ref SOLVED_SLOTS: SolvedSlots = SolvedSlots::from_cube(&Cube::solved());
}

/// Builds the solved reference tables now rather than on first use.
pub fn init_tables() {
    lazy_static::initialize(&SOLVED_SLOTS);
}

impl CubieBound {
    pub fn counts(cube: &Cube) -> PieceCounts {
        let mut counts = PieceCounts::default();

        for (slot, solved) in CORNER_SLOTS.iter().zip(&SOLVED_SLOTS.corners) {
            match classify(cube.slot_colors(slot), solved) {
                SlotState::Home => {}
                SlotState::Misoriented => counts.misoriented_corners += 1,
                SlotState::Misplaced => counts.misplaced_corners += 1,
            }
        }

        for (slot, solved) in EDGE_SLOTS.iter().zip(&SOLVED_SLOTS.edges) {
            match classify(cube.slot_colors(slot), solved) {
                SlotState::Home => {}
                SlotState::Misoriented => counts.misoriented_edges += 1,
                SlotState::Misplaced => counts.misplaced_edges += 1,
            }
        }

        counts
    }
}

impl Heuristic for CubieBound {
    fn estimate(&self, cube: &Cube) -> u32 {
        Self::counts(cube).lower_bound()
    }
}
