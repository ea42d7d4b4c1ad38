use thiserror::Error;

/// Rule violations reported by the engine.
///
/// Every variant is an ordinary recoverable outcome: a rejected move leaves
/// the game state untouched, and the same move against the same position
/// fails the same way every time. Internal invariant breaches (mismatched
/// vector widths, indexes past a vector's declared width) are not errors of
/// this type; they panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position out of bounds")]
    OutOfBounds,
    #[error("requested position is already occupied")]
    Occupied,
    #[error("requested move results in self-capture")]
    SelfCapture,
    #[error("move results in an illegal ko capture")]
    Ko,
    #[error("game is over")]
    GameOver,
}
