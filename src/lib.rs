pub mod bitvec;
mod board;
pub mod error;
pub mod game;
pub mod geometry;
pub mod r#move;
pub mod player;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn bitvec_go(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use player::Player;
    use python_bindings::*;
    m.add_class::<PyGame>()?;
    m.add_class::<PyMove>()?;
    m.add("BLACK", Player::Black as i8)?;
    m.add("WHITE", Player::White as i8)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::error::MoveError;
    use crate::game::Game;
    use crate::player::Player;
    use crate::r#move::Move;

    fn rule_error(err: MoveError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        pub fn new(size: usize) -> PyResult<Self> {
            if size == 0 {
                return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                    "Board size must be at least 1",
                ));
            }
            Ok(PyGame {
                game: Game::new(size),
            })
        }

        #[staticmethod]
        pub fn standard() -> Self {
            PyGame {
                game: Game::standard(),
            }
        }

        pub fn size(&self) -> usize {
            self.game.size()
        }

        pub fn to_play(&self) -> i8 {
            self.game.to_play() as i8
        }

        pub fn at(&self, x: usize, y: usize) -> Option<i8> {
            self.game.at(x, y).map(|p| p as i8)
        }

        pub fn game_over(&self) -> bool {
            self.game.game_over()
        }

        pub fn passes(&self) -> u32 {
            self.game.passes()
        }

        pub fn prisoners(&self, player: i8) -> PyResult<u32> {
            let player = Player::from_int(player).ok_or_else(|| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>("Unrecognized player value")
            })?;
            Ok(self.game.prisoners(player))
        }

        pub fn play(&mut self, x: usize, y: usize) -> PyResult<()> {
            self.game.play(x, y).map_err(rule_error)
        }

        pub fn pass_turn(&mut self) -> PyResult<()> {
            self.game.pass().map_err(rule_error)
        }

        pub fn make_move(&mut self, move_: &PyMove) -> PyResult<()> {
            self.game.make_move(&move_.move_).map_err(rule_error)
        }

        pub fn move_count(&self) -> usize {
            self.game.move_count()
        }

        pub fn move_history(&self) -> Vec<PyMove> {
            self.game
                .move_history()
                .iter()
                .map(|m| PyMove { move_: *m })
                .collect()
        }

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(size={}, to_play={}, over={})",
                self.game.size(),
                self.game.to_play(),
                self.game.game_over()
            )
        }
    }

    #[pyclass(name = "Move")]
    #[derive(Clone, Debug)]
    pub struct PyMove {
        pub(crate) move_: Move,
    }

    #[pymethods]
    impl PyMove {
        #[staticmethod]
        pub fn place(x: usize, y: usize) -> Self {
            PyMove {
                move_: Move::place(x, y),
            }
        }

        #[staticmethod]
        pub fn pass_move() -> Self {
            PyMove {
                move_: Move::pass(),
            }
        }

        pub fn is_pass(&self) -> bool {
            self.move_.is_pass()
        }

        pub fn x(&self) -> Option<usize> {
            self.move_.x()
        }

        pub fn y(&self) -> Option<usize> {
            self.move_.y()
        }

        pub fn __str__(&self) -> String {
            self.move_.to_string()
        }

        pub fn __eq__(&self, other: &PyMove) -> bool {
            self.move_ == other.move_
        }
    }
}
