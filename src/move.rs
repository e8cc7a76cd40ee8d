use crate::cube::*;

use enum_iterator::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

/// Direction of a face turn, as seen by someone looking straight at that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Double,
}

impl Turn {
    pub fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }

    /// How many clockwise quarter turns this turn is equivalent to.
    pub fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }
}

impl Move {
    pub fn new(face: Face, turn: Turn) -> Move {
        Move { face, turn }
    }

    /// All 18 moves, grouped by face.
    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all::<Face>()
            .flat_map(|face| enum_iterator::all::<Turn>().map(move |turn| Move { face, turn }))
    }

    pub fn inverse(self) -> Move {
        Move {
            face: self.face,
            turn: self.turn.inverse(),
        }
    }

    pub fn is_inverse_of(&self, other: &Move) -> bool {
        self.inverse() == *other
    }

    /// Whether searching `self` directly after `prev` can lead anywhere new.
    ///
    /// Two turns of one face collapse into a single turn, and turns of
    /// opposite faces commute, so only one ordering of those is kept.
    pub fn could_follow(&self, prev: &Move) -> bool {
        if self.face == prev.face {
            return false;
        }
        if self.face.opposite() == prev.face {
            return prev.face < self.face;
        }
        true
    }

    pub fn inverse_seq(moves: &[Move]) -> Vec<Move> {
        moves.iter().rev().map(|m| m.inverse()).collect()
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    pub fn format_sequence(moves: &[Move]) -> String {
        moves
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<(Face, Turn)> for Move {
    fn from((face, turn): (Face, Turn)) -> Move {
        Move { face, turn }
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match Face::from_letter(face_char) {
            Some(f) => f,
            None => return Err(anyhow::anyhow!("Unrecognized face {} in {:?}", face_char, s)),
        };

        let turn = match chars.next() {
            None => Turn::Clockwise,
            Some('\'') => Turn::CounterClockwise,
            Some('2') => Turn::Double,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized turn {} in {:?}", c, s)),
        };

        if let Some(c) = chars.next() {
            anyhow::bail!("Unexpected {} after move in {:?}", c, s);
        }

        Ok(Move { face, turn })
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Move {
        let index = <usize as quickcheck::Arbitrary>::arbitrary(g) % 18;
        Move::all().nth(index).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn eighteen_moves() {
        assert_eq!(Move::all().count(), 18);
    }

    #[test]
    fn all_moves_are_distinct() {
        let moves = Move::all().collect::<Vec<_>>();
        for (i, a) in moves.iter().enumerate() {
            for b in &moves[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn parses_all_turns() {
        assert_eq!("U".parse::<Move>().unwrap(), Move::new(Face::Up, Turn::Clockwise));
        assert_eq!(
            "r'".parse::<Move>().unwrap(),
            Move::new(Face::Right, Turn::CounterClockwise)
        );
        assert_eq!("B2".parse::<Move>().unwrap(), Move::new(Face::Back, Turn::Double));
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<Move>().is_err());
        assert!("X".parse::<Move>().is_err());
        assert!("U3".parse::<Move>().is_err());
        assert!("U2'".parse::<Move>().is_err());
    }

    #[test]
    fn parse_sequence_tolerates_extra_whitespace() {
        let moves = Move::parse_sequence("  R U'\tF2 \n").unwrap();
        assert_eq!(Move::format_sequence(&moves), "R U' F2");
    }

    #[test]
    fn parse_sequence_reports_bad_token() {
        let err = Move::parse_sequence("R U Q").unwrap_err();
        assert!(err.to_string().contains('Q'));
    }

    #[test]
    fn double_is_its_own_inverse() {
        for face in enum_iterator::all::<Face>() {
            let m = Move::new(face, Turn::Double);
            assert_eq!(m.inverse(), m);
        }
    }

    #[test]
    fn same_face_cannot_follow() {
        let r: Move = "R".parse().unwrap();
        let r2: Move = "R2".parse().unwrap();
        assert!(!r2.could_follow(&r));
        assert!(!r.inverse().could_follow(&r));
    }

    #[test]
    fn opposite_faces_only_in_one_order() {
        let u: Move = "U".parse().unwrap();
        let d: Move = "D'".parse().unwrap();
        assert!(d.could_follow(&u));
        assert!(!u.could_follow(&d));
    }

    #[test]
    fn adjacent_faces_follow_freely() {
        let u: Move = "U".parse().unwrap();
        let f: Move = "F".parse().unwrap();
        assert!(f.could_follow(&u));
        assert!(u.could_follow(&f));
    }

    #[quickcheck]
    fn display_round_trips(m: Move) -> bool {
        m.to_string().parse::<Move>().unwrap() == m
    }

    #[quickcheck]
    fn inverse_is_involution(m: Move) -> bool {
        m.inverse().inverse() == m && m.is_inverse_of(&m.inverse())
    }
}
