#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place { x: usize, y: usize },
    Pass,
}

impl Move {
    pub fn place(x: usize, y: usize) -> Self {
        Move::Place { x, y }
    }

    pub fn pass() -> Self {
        Move::Pass
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn x(&self) -> Option<usize> {
        match self {
            Move::Place { x, .. } => Some(*x),
            Move::Pass => None,
        }
    }

    pub fn y(&self) -> Option<usize> {
        match self {
            Move::Place { y, .. } => Some(*y),
            Move::Pass => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { x, y } => write!(f, "Place({}, {})", x, y),
            Move::Pass => write!(f, "Pass"),
        }
    }
}
