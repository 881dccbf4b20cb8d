use crate::Word;

/// Tile points for letters A..Z, as specified on the
/// [Hasbro website](https://scrabble.hasbro.com/en-us/faq): Tile Values.
const TILE_POINTS: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// The tile values used to score words.
#[derive(Debug, Clone)]
pub struct TileSet {
    points: &'static [u32; 26],
}

impl TileSet {
    /// Return a new `TileSet` with the standard english tile values.
    pub fn new() -> TileSet {
        TileSet {
            points: &TILE_POINTS,
        }
    }

    /// Return the points for an uppercase ascii letter, or 0 if not a letter.
    pub fn points(&self, letter: u8) -> u32 {
        match letter {
            b'A'..=b'Z' => self.points[(letter - b'A') as usize],
            _ => 0,
        }
    }

    /// Return the total points of all letters in `word`.
    /// ## Example
    /// ```
    /// # use std::convert::TryFrom;
    /// use stepladder_solver::{TileSet, Word};
    /// let tileset = TileSet::new();
    /// let quiz = Word::try_from("QUIZ")?;
    /// assert_eq!(tileset.score(&quiz), 22);
    /// # Ok::<(), stepladder_solver::Error>(())
    /// ```
    pub fn score(&self, word: &Word) -> u32 {
        word.iter().map(|&letter| self.points(letter)).sum()
    }
}

impl Default for TileSet {
    fn default() -> Self {
        Self::new()
    }
}
