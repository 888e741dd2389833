use failure::Fail;

/// Sometimes, bad stuff happens.
///
/// Note that a move the rules reject is *not* an error: `Game::make_move` and friends just answer
/// `false`.  Errors are reserved for text that cannot be understood at all.
#[derive(Clone, Debug, PartialEq, Eq, Fail)]
pub enum Error {
    /// The square text is not a file `a`-`h` followed by a rank `1`-`8`
    #[fail(display = "Invalid square: '{}'", square)]
    InvalidSquare { square: String },

    /// An attempt was made to convert a string not equal to "1"-"8" to a rank
    #[fail(display = "The string specified does not contain a valid rank")]
    InvalidRank,

    /// An attempt was made to convert a string not equal to "a"-"h" to a file
    #[fail(display = "The string specified does not contain a valid file")]
    InvalidFile,

    /// The move text is not two squares, such as "e2e4"
    #[fail(display = "Invalid move text: '{}'", text)]
    InvalidMove { text: String },

    /// The piece placement text could not be parsed
    #[fail(display = "Invalid position string: '{}'", position)]
    InvalidPosition { position: String },

    /// The position built by a `BoardBuilder` cannot start a game
    #[fail(display = "The board specified did not pass sanity checks: {}", reason)]
    InvalidBoard { reason: String },
}
