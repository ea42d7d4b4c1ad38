use crate::game::Game;
use crate::r#move::Move;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let moves: Vec<String> = self
            .move_history()
            .iter()
            .map(|m| match m {
                Move::Place { x, y } => format!("{},{}", x, y),
                Move::Pass => "pass".to_string(),
            })
            .collect();

        // "size:moves" — replayable through the rules engine.
        let full = format!("{}:{}", self.size(), moves.join(";"));
        serializer.serialize_str(&full)
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let (size_str, moves_str) = s
            .split_once(':')
            .ok_or_else(|| serde::de::Error::custom("Missing board size prefix"))?;
        let size: usize = size_str
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("Invalid board size: {}", e)))?;
        if size == 0 {
            return Err(serde::de::Error::custom("Board size must be at least 1"));
        }

        let mut game = Game::new(size);

        if moves_str.is_empty() {
            return Ok(game);
        }

        for move_str in moves_str.split(';') {
            let move_str = move_str.trim();

            let mv = if move_str == "pass" {
                Move::pass()
            } else {
                let (x, y) = move_str.split_once(',').ok_or_else(|| {
                    serde::de::Error::custom(format!("Invalid move format: {}", move_str))
                })?;
                let x: usize = x
                    .parse()
                    .map_err(|e| serde::de::Error::custom(format!("Invalid move: {}", e)))?;
                let y: usize = y
                    .parse()
                    .map_err(|e| serde::de::Error::custom(format!("Invalid move: {}", e)))?;
                Move::place(x, y)
            };

            game.make_move(&mv).map_err(|e| {
                serde::de::Error::custom(format!("Illegal move {}: {}", move_str, e))
            })?;
        }

        Ok(game)
    }
}
