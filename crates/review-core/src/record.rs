//! Input contract for one game to review.

/// A game handed in for review: the moves in play order plus the player
/// names carried over from the source headers.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Move descriptors in standard algebraic notation.
    pub moves: Vec<String>,
    /// Name of the player with the white pieces, when known.
    pub white: Option<String>,
    /// Name of the player with the black pieces, when known.
    pub black: Option<String>,
}

impl GameRecord {
    pub fn new(moves: Vec<String>, white: Option<String>, black: Option<String>) -> Self {
        GameRecord { moves, white, black }
    }

    /// Builds a record from whitespace-separated move text.
    pub fn from_moves_text(text: &str, white: Option<String>, black: Option<String>) -> Self {
        let moves = text.split_whitespace().map(str::to_owned).collect();
        Self::new(moves, white, black)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
