use std::convert::TryFrom;
use std::fmt;
use std::fs::read_to_string;

use crate::word::MAX_WORD_LEN;
use crate::{Error, Word};

/// A set of distinct uppercase words of a single length.
///
/// The dictionary owns the input contract of the solver: words are folded to
/// uppercase, words of the wrong length or with characters outside A..Z are
/// dropped, and duplicates are removed.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    word_len: usize,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not built from a file.
    wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words of length {} from '{}'>",
            self.words.len(),
            self.word_len,
            self.wordfile
        )
    }
}

impl Dictionary {
    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line. Lines that do not survive the word filter are
    /// skipped.
    /// ## Errors
    /// Fails if the wordlist can not be read, or `word_len` is out of range.
    pub fn from_file(wordfile: &str, word_len: usize) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dictionary = Self::collect(contents.lines(), word_len)?;
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    /// Build a dictionary from a list of words.
    /// ## Errors
    /// If `word_len` is out of range.
    /// ## Example
    /// ```
    /// use stepladder_solver::Dictionary;
    /// let dictionary = Dictionary::from_words(&["sour", "spur", "sour", "oops!"], 4)?;
    /// assert_eq!(dictionary.len(), 2);
    /// # Ok::<(), stepladder_solver::Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S], word_len: usize) -> Result<Dictionary, Error> {
        Self::collect(words.iter().map(AsRef::as_ref), word_len)
    }

    fn collect<'a, I>(lines: I, word_len: usize) -> Result<Dictionary, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if word_len == 0 || word_len > MAX_WORD_LEN {
            return Err(Error::InvalidWordLength(word_len));
        }
        let mut words: Vec<Word> = lines
            .into_iter()
            .map(str::trim)
            .filter_map(|line| Word::try_from(line).ok())
            .filter(|word| word.len() == word_len)
            .collect();
        words.sort();
        words.dedup();
        Ok(Dictionary {
            words,
            word_len,
            wordfile: String::new(),
        })
    }

    /// The words in the dictionary, sorted and distinct.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The length of every word in the dictionary.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// The number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    const WORDS: &[&str] = &[
        "sour", "spur", "spud", "stud", "stun", "so", "sauce", "st1n", "SPUR", " stun ",
    ];

    #[test]
    fn test_filter() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS, 4)?;
        let words: Vec<String> = dictionary.words().iter().map(Word::to_string).collect();
        // uppercased, wrong lengths and non-letters dropped, duplicates removed
        assert_eq!(words, &["SOUR", "SPUD", "SPUR", "STUD", "STUN"]);
        assert_eq!(dictionary.word_len(), 4);
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS, 9)?;
        assert!(dictionary.is_empty());
        Ok(())
    }

    #[test]
    fn test_word_len_out_of_range() {
        assert!(matches!(
            Dictionary::from_words(WORDS, 0),
            Err(Error::InvalidWordLength(0))
        ));
        assert!(matches!(
            Dictionary::from_words(WORDS, MAX_WORD_LEN + 1),
            Err(Error::InvalidWordLength(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Dictionary::from_file("no-such-wordfile.txt", 4),
            Err(Error::ReadError { .. })
        ));
    }
}
