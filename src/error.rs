use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Requested word length is zero or above [`MAX_WORD_LEN`](crate::MAX_WORD_LEN)
    #[error("Invalid word length {0}")]
    InvalidWordLength(usize),

    /// The string has more letters than a `Word` can hold
    #[error("Word \"{0}\" is too long")]
    WordTooLong(String),

    /// The string contains a character outside a..z / A..Z
    #[error("Word \"{word}\" contains invalid letter '{letter}'")]
    InvalidLetter { word: String, letter: char },
}
