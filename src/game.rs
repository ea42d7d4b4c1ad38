use std::fmt;
use std::rc::Rc;

use crate::board::BoardState;
use crate::error::MoveError;
use crate::geometry::Geometry;
use crate::player::Player;
use crate::r#move::Move;

pub const STANDARD_SIZE: usize = 19;

/// A game session: the mutable front over a chain of immutable positions.
///
/// The session holds the board geometry and the single `current` reference,
/// which is replaced on every accepted move or pass. Rejected moves leave it
/// untouched. The session itself is not synchronized; callers sharing one
/// across threads of control must serialize access to `play`/`pass`.
pub struct Game {
    geometry: Rc<Geometry>,
    current: Rc<BoardState>,
    moves: Vec<Move>,
}

impl Game {
    /// A new game on a `size × size` board: empty, Black to move.
    pub fn new(size: usize) -> Game {
        assert!(size >= 1, "board size must be at least 1");
        let geometry = Rc::new(Geometry::new(size));
        let current = Rc::new(BoardState::initial(Rc::clone(&geometry)));
        Game {
            geometry,
            current,
            moves: Vec::new(),
        }
    }

    pub fn standard() -> Game {
        Game::new(STANDARD_SIZE)
    }

    pub fn size(&self) -> usize {
        self.geometry.size()
    }

    /// The player whose turn it is.
    pub fn to_play(&self) -> Player {
        self.current.to_play()
    }

    /// The stone at `(x, y)`, or `None` for an empty or out-of-range point.
    pub fn at(&self, x: usize, y: usize) -> Option<Player> {
        self.current.at(x, y)
    }

    /// True after two consecutive passes.
    pub fn game_over(&self) -> bool {
        self.current.game_over()
    }

    /// Consecutive passes ending at the current position.
    pub fn passes(&self) -> u32 {
        self.current.passes()
    }

    /// Stones `player` has captured so far.
    pub fn prisoners(&self, player: Player) -> u32 {
        self.current.prisoners(player)
    }

    /// Every accepted move and pass, in order.
    pub fn move_history(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Place a stone at `(x, y)` for the player to move.
    pub fn play(&mut self, x: usize, y: usize) -> Result<(), MoveError> {
        if self.current.game_over() {
            return Err(MoveError::GameOver);
        }
        self.current = self.current.play(x, y)?;
        self.moves.push(Move::place(x, y));
        Ok(())
    }

    /// Pass the turn.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        if self.current.game_over() {
            return Err(MoveError::GameOver);
        }
        self.current = self.current.pass();
        self.moves.push(Move::pass());
        Ok(())
    }

    /// Apply a recorded move.
    pub fn make_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        match *mv {
            Move::Place { x, y } => self.play(x, y),
            Move::Pass => self.pass(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current)
    }
}
