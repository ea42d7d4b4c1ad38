use std::fmt;
use std::rc::Rc;

use crate::bitvec::BitVector;
use crate::error::MoveError;
use crate::geometry::Geometry;
use crate::player::Player;

/// A single game position. Immutable once constructed: every accepted move
/// or pass builds a brand-new state referencing this one as `prev`, and the
/// linked history is what the ko check reads. The two stone vectors are
/// mutually exclusive; emptiness of a point means it is absent from both.
pub(crate) struct BoardState {
    geometry: Rc<Geometry>,
    prev: Option<Rc<BoardState>>,
    black: BitVector,
    white: BitVector,
    to_play: Player,
    passes: u32,
    black_prisoners: u32,
    white_prisoners: u32,
}

impl BoardState {
    /// The empty starting position: Black to move, no passes.
    pub(crate) fn initial(geometry: Rc<Geometry>) -> BoardState {
        let area = geometry.area();
        BoardState {
            prev: None,
            black: BitVector::new(area),
            white: BitVector::new(area),
            to_play: Player::Black,
            passes: 0,
            black_prisoners: 0,
            white_prisoners: 0,
            geometry,
        }
    }

    /// Evaluate a stone placement at `(x, y)` for the player to move.
    ///
    /// On success returns the successor position: captures removed,
    /// prisoners credited, turn flipped, pass counter reset. On failure the
    /// receiver is untouched and nothing is observable.
    pub(crate) fn play(self: &Rc<Self>, x: usize, y: usize) -> Result<Rc<BoardState>, MoveError> {
        let size = self.geometry.size();
        if x >= size || y >= size {
            return Err(MoveError::OutOfBounds);
        }
        let idx = y * size + x;
        if self.black.get(idx) || self.white.get(idx) {
            return Err(MoveError::Occupied);
        }

        let (mut mine, mut theirs) = match self.to_play {
            Player::Black => (self.black.clone(), self.white.clone()),
            Player::White => (self.white.clone(), self.black.clone()),
        };
        mine.set(idx);

        // Capture any adjacent opponent group the new stone leaves without
        // a liberty. Captures come off the board before the mover's own
        // group is tested, so a stone that takes its last liberty by
        // capturing is legal.
        let mut captured = 0;
        for nidx in orthogonal_neighbors(size, x, y) {
            if !theirs.get(nidx) {
                continue;
            }
            if let Some(group) = dead_group(&self.geometry, nidx, &theirs, &mine) {
                captured += group.count();
                theirs.and_not(&group);
            }
        }

        if dead_group(&self.geometry, idx, &mine, &theirs).is_some() {
            return Err(MoveError::SelfCapture);
        }

        let (black, white) = match self.to_play {
            Player::Black => (mine, theirs),
            Player::White => (theirs, mine),
        };

        // Simple ko: the move may not recreate the position that stood
        // before the opponent's last move.
        if let Some(prev) = &self.prev {
            if prev.black == black && prev.white == white {
                return Err(MoveError::Ko);
            }
        }

        let (black_prisoners, white_prisoners) = match self.to_play {
            Player::Black => (self.black_prisoners + captured, self.white_prisoners),
            Player::White => (self.black_prisoners, self.white_prisoners + captured),
        };

        Ok(Rc::new(BoardState {
            geometry: Rc::clone(&self.geometry),
            prev: Some(Rc::clone(self)),
            black,
            white,
            to_play: self.to_play.opposite(),
            passes: 0,
            black_prisoners,
            white_prisoners,
        }))
    }

    pub(crate) fn pass(self: &Rc<Self>) -> Rc<BoardState> {
        Rc::new(BoardState {
            geometry: Rc::clone(&self.geometry),
            prev: Some(Rc::clone(self)),
            black: self.black.clone(),
            white: self.white.clone(),
            to_play: self.to_play.opposite(),
            passes: self.passes + 1,
            black_prisoners: self.black_prisoners,
            white_prisoners: self.white_prisoners,
        })
    }

    pub(crate) fn game_over(&self) -> bool {
        self.passes >= 2
    }

    pub(crate) fn to_play(&self) -> Player {
        self.to_play
    }

    pub(crate) fn passes(&self) -> u32 {
        self.passes
    }

    pub(crate) fn prisoners(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black_prisoners,
            Player::White => self.white_prisoners,
        }
    }

    pub(crate) fn at(&self, x: usize, y: usize) -> Option<Player> {
        let size = self.geometry.size();
        if x >= size || y >= size {
            return None;
        }
        let idx = y * size + x;
        if self.black.get(idx) {
            Some(Player::Black)
        } else if self.white.get(idx) {
            Some(Player::White)
        } else {
            None
        }
    }
}

/// On-board orthogonal neighbors of `(x, y)` as linear indexes.
fn orthogonal_neighbors(size: usize, x: usize, y: usize) -> impl Iterator<Item = usize> {
    let idx = y * size + x;
    [
        (x > 0).then(|| idx - 1),
        (x + 1 < size).then(|| idx + 1),
        (y > 0).then(|| idx - size),
        (y + 1 < size).then(|| idx + size),
    ]
    .into_iter()
    .flatten()
}

/// The maximal connected group of `me`-colored stones containing `idx`, if
/// that group has no liberty left; `None` while it still has one.
///
/// Liberties are computed without any per-cell traversal: dilate the group
/// one step, drop the group itself and the surrounding `them` stones, and
/// whatever remains is empty points adjacent to the group.
fn dead_group(
    geometry: &Geometry,
    idx: usize,
    me: &BitVector,
    them: &BitVector,
) -> Option<BitVector> {
    let seed = BitVector::with_bit(me.len(), idx);
    let group = geometry.flood_fill(&seed, me);
    let mut liberties = geometry.dilate(&group);
    liberties.and_not(&group);
    liberties.and_not(them);
    if liberties.count() == 0 {
        Some(group)
    } else {
        None
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.geometry.size();
        for y in 0..size {
            write!(f, "{:2}", y)?;
            for x in 0..size {
                match self.at(x, y) {
                    Some(player) => write!(f, " {}", player.to_char())?,
                    None => write!(f, " +")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(size: usize) -> Rc<BoardState> {
        Rc::new(BoardState::initial(Rc::new(Geometry::new(size))))
    }

    #[test]
    fn test_receiver_untouched_by_failure() {
        let s = state(5).play(1, 0).expect("legal move");
        assert_eq!(s.play(1, 0).err(), Some(MoveError::Occupied));
        assert_eq!(s.play(5, 0).err(), Some(MoveError::OutOfBounds));
        assert_eq!(s.at(1, 0), Some(Player::Black));
        assert_eq!(s.to_play(), Player::White);
    }

    #[test]
    fn test_stone_vectors_mutually_exclusive() {
        // Black captures the white stone at (1,1); the point must end up in
        // neither vector.
        let mut s = state(5);
        for (x, y) in [(1, 0), (1, 1), (0, 1), (3, 3), (2, 1), (4, 4), (1, 2)] {
            s = s.play(x, y).expect("legal move");
        }
        assert_eq!(s.at(1, 1), None);
        assert_eq!((&s.black & &s.white).count(), 0);
        assert_eq!(s.prisoners(Player::Black), 1);
        assert_eq!(s.prisoners(Player::White), 0);
    }

    #[test]
    fn test_history_preserved_across_capture() {
        let first = state(5).play(1, 0).expect("legal move");
        let before = first.black.clone();
        let mut s = Rc::clone(&first);
        for (x, y) in [(1, 1), (0, 1), (3, 3), (2, 1), (4, 4), (1, 2)] {
            s = s.play(x, y).expect("legal move");
        }
        // Earlier snapshots must not see later captures.
        assert_eq!(first.black, before);
        assert_eq!(first.at(1, 1), None);
    }

    #[test]
    fn test_pass_chain() {
        let s = state(5);
        let one = s.pass();
        let two = one.pass();
        assert!(!s.game_over());
        assert!(!one.game_over());
        assert!(two.game_over());
        assert_eq!(two.passes(), 2);
        assert_eq!(two.to_play(), Player::Black);
    }
}
