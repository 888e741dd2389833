use crate::board::Board;
use crate::board_builder::BoardBuilder;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::error::Error;
use crate::rules;
use crate::square::Square;
use crate::variant::{FinishRule, GameConfig};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Where is the game at?  Once it leaves `InProgress` it never comes back.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    InProgress,
    WonBy(Color),
    Tie,
}

impl GameState {
    /// Is the game finished?
    #[inline]
    pub fn is_over(&self) -> bool {
        *self != GameState::InProgress
    }

    /// Who won, if anybody?
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        match *self {
            GameState::WonBy(color) => Some(color),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GameState::InProgress => write!(f, "UNFINISHED"),
            GameState::WonBy(Color::White) => write!(f, "WHITE_WON"),
            GameState::WonBy(Color::Black) => write!(f, "BLACK_WON"),
            GameState::Tie => write!(f, "TIE"),
        }
    }
}

/// Why a move was turned down.
///
/// `Game::make_move` only ever answers yes or no.  Callers that want to tell the player what went
/// wrong can ask `Game::rejection` for the first rule the move broke.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Rejection {
    /// The game has already been decided.
    GameOver,
    /// There is no piece on the source square.
    EmptySource,
    /// The piece on the source square belongs to the other side.
    WrongTurn,
    /// The piece cannot move that way: bad geometry, a blocked path, or its own piece on the
    /// destination.
    IllegalMove,
    /// After the move some king could be captured, and this game does not allow checks.
    KingAttacked,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match *self {
            Rejection::GameOver => "the game is over",
            Rejection::EmptySource => "there is no piece on that square",
            Rejection::WrongTurn => "that piece belongs to the other side",
            Rejection::IllegalMove => "that piece cannot move there",
            Rejection::KingAttacked => "the move would leave a king in check",
        };
        write!(f, "{}", text)
    }
}

/// One game: the board, whose turn it is, and how things stand.
///
/// Each `Game` is an independent value.  Run as many side by side as you like; they share
/// nothing.
///
/// ```
/// use kingrace::{Game, GameState, Color, Square};
///
/// let mut game = Game::new();
/// assert_eq!(game.side_to_move(), Color::White);
///
/// // The knight on c2 jumps to d4.
/// assert_eq!(game.attempt_move("c2", "d4"), Ok(true));
/// assert_eq!(game.board().piece_at(Square::C2), None);
/// assert_eq!(game.side_to_move(), Color::Black);
///
/// // It is Black's move now, so White's knight stays put.
/// assert_eq!(game.attempt_move("d4", "e6"), Ok(false));
///
/// // Squares that do not exist are reported as errors, not as illegal moves.
/// assert!(game.attempt_move("f2", "z9").is_err());
/// assert_eq!(game.state(), GameState::InProgress);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    state: GameState,
    config: GameConfig,
}

impl Game {
    /// Start the pawnless race from its initial position.
    pub fn new() -> Game {
        Game::with_config(GameConfig::default())
    }

    /// Start a game from the initial position `config` describes.  White moves first.
    pub fn with_config(config: GameConfig) -> Game {
        Game {
            board: Board::initial(&config),
            side_to_move: Color::White,
            state: GameState::InProgress,
            config,
        }
    }

    /// Start a game from an arbitrary position.
    ///
    /// The position must hold exactly one king of each color.  The win condition is only looked
    /// at after a move, so a king may already stand on its target rank.
    ///
    /// ```
    /// use kingrace::{BoardBuilder, Color, Game, GameConfig};
    /// use std::str::FromStr;
    ///
    /// let position = BoardBuilder::from_str("k7/8/8/8/8/8/8/7K b").expect("valid position");
    /// let game = Game::from_position(&position, GameConfig::racing()).expect("two kings");
    /// assert_eq!(game.side_to_move(), Color::Black);
    ///
    /// let kingless = BoardBuilder::from_str("8/8/8/8/8/8/8/7K w").expect("valid position");
    /// assert!(Game::from_position(&kingless, GameConfig::racing()).is_err());
    /// ```
    pub fn from_position(position: &BoardBuilder, config: GameConfig) -> Result<Game, Error> {
        Ok(Game {
            board: Board::try_from(position)?,
            side_to_move: position.get_side_to_move(),
            state: GameState::InProgress,
            config,
        })
    }

    /// The current game state.
    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whose turn is it to move?
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The current position.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The rules this game is played under.
    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The first rule `chess_move` breaks, or `None` if `make_move` would accept it.
    ///
    /// The checks run in a fixed order: the game must still be going, the source square must
    /// hold a piece of the side to move, the piece must be able to reach the destination, and
    /// (when checks are forbidden) no king may be attacked afterwards.
    pub fn rejection(&self, chess_move: ChessMove) -> Option<Rejection> {
        if self.state.is_over() {
            return Some(Rejection::GameOver);
        }

        let piece = match self.board.piece_at(chess_move.get_source()) {
            Some(piece) => piece,
            None => return Some(Rejection::EmptySource),
        };
        if piece.color != self.side_to_move {
            return Some(Rejection::WrongTurn);
        }

        if !rules::is_legal_move(&self.board, chess_move.get_source(), chess_move.get_dest()) {
            return Some(Rejection::IllegalMove);
        }

        if self.config.enforce_no_check
            && rules::kings_in_check(&self.board.relocate_new(chess_move))
        {
            return Some(Rejection::KingAttacked);
        }

        None
    }

    /// Would `make_move` accept this move?
    #[inline]
    pub fn legal(&self, chess_move: ChessMove) -> bool {
        self.rejection(chess_move).is_none()
    }

    /// Make a move.  Returns `false`, and changes nothing at all, if the move is refused.
    ///
    /// On success the piece on the destination (if any) is captured, the moving piece takes its
    /// place, the game state is re-evaluated, and the turn passes to the other side.
    #[instrument(level = "debug", skip(self), fields(side = %self.side_to_move))]
    pub fn make_move(&mut self, chess_move: ChessMove) -> bool {
        if let Some(reason) = self.rejection(chess_move) {
            debug!(%reason, "move rejected");
            return false;
        }

        let mover = self.side_to_move;
        let captured = self.board.relocate(chess_move);
        self.state = self.evaluate(mover);
        self.side_to_move = !mover;

        debug!(?captured, state = %self.state, "move accepted");
        if self.state.is_over() {
            info!(result = %self.state, "game over");
        }
        true
    }

    /// Make a move given as two algebraic squares, such as `"e2"` and `"e4"`.
    ///
    /// Text that is not a square is an `Error::InvalidSquare`, so that a caller can point out the
    /// typo.  Every other problem is an ordinary refusal: `Ok(false)`.
    pub fn attempt_move(&mut self, from: &str, to: &str) -> Result<bool, Error> {
        if self.state.is_over() {
            debug!(from, to, "move rejected: the game is over");
            return Ok(false);
        }
        let chess_move = ChessMove::from_squares(from, to)?;
        Ok(self.make_move(chess_move))
    }

    /// Make a move given as zero-based `(row, col)` pairs, row 0 being rank 8.
    ///
    /// Coordinates off the board are simply refused.
    ///
    /// ```
    /// use kingrace::Game;
    ///
    /// let mut game = Game::new();
    /// assert!(!game.attempt_move_at((6, 2), (8, 3)));
    /// assert!(game.attempt_move_at((6, 2), (4, 3))); // c2 to d4
    /// ```
    pub fn attempt_move_at(&mut self, from: (i32, i32), to: (i32, i32)) -> bool {
        match (
            Square::from_coords(from.0, from.1),
            Square::from_coords(to.0, to.1),
        ) {
            (Some(source), Some(dest)) => self.make_move(ChessMove::new(source, dest)),
            _ => {
                debug!(?from, ?to, "move rejected: square off the board");
                false
            }
        }
    }

    /// Decide the state after `mover` has moved, before the turn passes.
    fn evaluate(&self, mover: Color) -> GameState {
        // Only reachable when checks are allowed.
        if self.board.king_square(!mover).is_none() {
            return GameState::WonBy(mover);
        }

        let arrived = |color: Color| {
            self.board
                .king_square(color)
                .map_or(false, |sq| sq.get_rank() == self.config.target_rank(color))
        };

        match (arrived(Color::White), arrived(Color::Black)) {
            (true, true) => GameState::Tie,
            (true, false) => {
                if self.config.finish == FinishRule::BlackReply && mover == Color::White {
                    GameState::InProgress
                } else {
                    GameState::WonBy(Color::White)
                }
            }
            (false, true) => GameState::WonBy(Color::Black),
            (false, false) => GameState::InProgress,
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

/// Start a pawnless race from a position string.  See `BoardBuilder` for the format.
impl FromStr for Game {
    type Err = Error;

    fn from_str(position: &str) -> Result<Self, Self::Err> {
        Game::from_position(&BoardBuilder::from_str(position)?, GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{ColoredPiece, Piece};

    fn play(game: &mut Game, moves: &[(&str, &str)]) {
        for (from, to) in moves.iter() {
            assert_eq!(
                game.attempt_move(from, to),
                Ok(true),
                "{}{} should be accepted",
                from,
                to
            );
        }
    }

    fn position(text: &str, config: GameConfig) -> Game {
        Game::from_position(&BoardBuilder::from_str(text).unwrap(), config).unwrap()
    }

    /// White walks the king up the a-file while Black shuffles knights.  Every move keeps both
    /// kings out of check.
    const WHITE_RACE: [(&str, &str); 17] = [
        ("a2", "a6"),
        ("f1", "g3"),
        ("a6", "c6"),
        ("f2", "h3"),
        ("a1", "a2"),
        ("h3", "f2"),
        ("a2", "a3"),
        ("f2", "h3"),
        ("a3", "a4"),
        ("h3", "f2"),
        ("a4", "a5"),
        ("f2", "h3"),
        ("a5", "a6"),
        ("h3", "f2"),
        ("a6", "a7"),
        ("g3", "f1"),
        ("a7", "a8"),
    ];

    #[test]
    fn knight_opening() {
        let mut game = Game::new();
        assert!(game.make_move(ChessMove::new(Square::C2, Square::D4)));
        assert_eq!(game.board().piece_at(Square::C2), None);
        assert_eq!(
            game.board().piece_at(Square::D4),
            Some(ColoredPiece::new(Piece::Knight, Color::White))
        );
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.state(), GameState::InProgress);
    }

    #[test]
    fn rejections_in_order() {
        let game = Game::new();
        assert_eq!(
            game.rejection(ChessMove::new(Square::E4, Square::E5)),
            Some(Rejection::EmptySource)
        );
        assert_eq!(
            game.rejection(ChessMove::new(Square::F2, Square::E4)),
            Some(Rejection::WrongTurn)
        );
        assert_eq!(
            game.rejection(ChessMove::new(Square::A2, Square::A2)),
            Some(Rejection::IllegalMove)
        );
        assert_eq!(
            game.rejection(ChessMove::new(Square::B1, Square::C2)),
            Some(Rejection::IllegalMove)
        );
        assert_eq!(game.rejection(ChessMove::new(Square::C2, Square::D4)), None);
    }

    #[test]
    fn rejected_moves_change_nothing() {
        let mut game = Game::new();
        play(&mut game, &[("c2", "d4")]);
        let before = game.clone();

        for _ in 0..3 {
            assert!(!game.make_move(ChessMove::new(Square::D4, Square::E6)));
            assert!(!game.make_move(ChessMove::new(Square::H2, Square::A2)));
            assert!(!game.make_move(ChessMove::new(Square::D5, Square::D6)));
            assert_eq!(game.attempt_move("h2", "h2"), Ok(false));
            assert_eq!(game, before);
        }
    }

    #[test]
    fn turns_alternate_on_accepted_moves_only() {
        let mut game = Game::new();
        let mut expected = Color::White;
        for (from, to) in WHITE_RACE.iter().take(6) {
            assert!(!game.attempt_move(to, from).unwrap_or(false));
            assert_eq!(game.side_to_move(), expected);
            assert_eq!(game.attempt_move(from, to), Ok(true));
            expected = !expected;
            assert_eq!(game.side_to_move(), expected);
        }
    }

    #[test]
    fn off_board_coordinates_are_refused() {
        let mut game = Game::new();
        let before = game.clone();
        for bad in [(-1, 0), (0, -1), (8, 0), (0, 8), (100, 100)].iter() {
            assert!(!game.attempt_move_at(*bad, (4, 3)));
            assert!(!game.attempt_move_at((6, 2), *bad));
        }
        assert_eq!(game, before);
    }

    #[test]
    fn malformed_squares_are_errors() {
        let mut game = Game::new();
        assert_eq!(
            game.attempt_move("c2", "d44"),
            Err(Error::InvalidSquare {
                square: "d44".to_string()
            })
        );
        assert_eq!(
            game.attempt_move("", "d4"),
            Err(Error::InvalidSquare {
                square: "".to_string()
            })
        );
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn checks_are_refused_and_the_board_stays_put() {
        // The white rook on a2 shields its king from the black rook on a8.
        let mut game = position("r7/8/8/8/8/8/R7/K6k w", GameConfig::racing());
        let before = *game.board();

        assert_eq!(
            game.rejection(ChessMove::new(Square::A2, Square::B2)),
            Some(Rejection::KingAttacked)
        );
        assert!(!game.make_move(ChessMove::new(Square::A2, Square::B2)));
        assert_eq!(*game.board(), before);
        assert_eq!(game.side_to_move(), Color::White);

        // Capturing the attacker keeps the king safe.
        assert!(game.make_move(ChessMove::new(Square::A2, Square::A8)));
    }

    #[test]
    fn giving_check_is_refused_too() {
        let mut game = position("8/8/8/8/8/8/2R5/K6k w", GameConfig::racing());
        assert_eq!(
            game.rejection(ChessMove::new(Square::C2, Square::C1)),
            Some(Rejection::KingAttacked)
        );
        assert!(!game.make_move(ChessMove::new(Square::C2, Square::H2)));
        assert!(game.make_move(ChessMove::new(Square::C2, Square::C8)));
    }

    #[test]
    fn checks_are_allowed_when_configured() {
        let mut game = position("r7/8/8/8/8/8/R7/K6k w", GameConfig::racing().with_no_check(false));
        assert!(game.make_move(ChessMove::new(Square::A2, Square::B2)));
        // Black's rook takes the exposed king and wins on the spot.
        assert!(game.make_move(ChessMove::new(Square::A8, Square::A1)));
        assert_eq!(game.state(), GameState::WonBy(Color::Black));
        assert_eq!(game.board().king_square(Color::White), None);
    }

    #[test]
    fn white_wins_the_race() {
        let mut game = Game::new();
        let (last, rest) = WHITE_RACE.split_last().unwrap();
        play(&mut game, rest);
        assert_eq!(game.state(), GameState::InProgress);

        play(&mut game, &[*last]);
        assert_eq!(game.state(), GameState::WonBy(Color::White));
        assert_eq!(game.board().king_square(Color::White), Some(Square::A8));

        // Nothing moves once the game is decided.
        let before = game.clone();
        assert_eq!(game.attempt_move("f2", "h3"), Ok(false));
        assert_eq!(game.attempt_move("zz", "h3"), Ok(false));
        assert_eq!(
            game.rejection(ChessMove::new(Square::F2, Square::H3)),
            Some(Rejection::GameOver)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn black_reply_postpones_the_result() {
        let mut game = Game::with_config(GameConfig::racing().with_finish(FinishRule::BlackReply));
        play(&mut game, &WHITE_RACE);
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.side_to_move(), Color::Black);

        // Black's king is nowhere near rank 8, so any reply loses.
        play(&mut game, &[("f1", "g3")]);
        assert_eq!(game.state(), GameState::WonBy(Color::White));
    }

    #[test]
    fn black_reaching_first_wins() {
        let mut game = position("8/6k1/8/8/8/8/8/K7 w", GameConfig::racing());
        play(&mut game, &[("a1", "a2"), ("g7", "g8")]);
        assert_eq!(game.state(), GameState::WonBy(Color::Black));
    }

    #[test]
    fn both_kings_home_is_a_tie() {
        // Black's king already stands on rank 8; White's arrival ties the game.
        let mut game = position("k7/6K1/8/8/8/8/8/8 w", GameConfig::racing());
        play(&mut game, &[("g7", "g8")]);
        assert_eq!(game.state(), GameState::Tie);
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn black_reply_can_tie() {
        let config = GameConfig::racing().with_finish(FinishRule::BlackReply);
        let mut game = position("8/1k5K/8/8/8/8/8/8 w", config);
        play(&mut game, &[("h7", "h8")]);
        assert_eq!(game.state(), GameState::InProgress);
        play(&mut game, &[("b7", "b8")]);
        assert_eq!(game.state(), GameState::Tie);
    }

    #[test]
    fn standard_kings_race_for_the_enemy_back_rank() {
        let config = GameConfig::standard();
        let mut game = position("8/8/8/8/8/8/1k6/4K3 b", config);
        play(&mut game, &[("b2", "b1")]);
        assert_eq!(game.state(), GameState::WonBy(Color::Black));

        let mut game = position("4k3/K7/8/8/8/8/8/8 w", config);
        play(&mut game, &[("a7", "a8")]);
        assert_eq!(game.state(), GameState::WonBy(Color::White));
    }

    #[test]
    fn standard_game_with_pawns() {
        let mut game = Game::with_config(GameConfig::standard().with_pawns(true));
        assert!(game.config().pawns_enabled);
        play(&mut game, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")]);
        // Pawns cannot move backwards or sideways.
        assert_eq!(game.attempt_move("e4", "e3"), Ok(false));
        assert_eq!(game.attempt_move("e4", "d4"), Ok(false));
        // A pawn may double-step from any rank.
        play(&mut game, &[("d2", "d3"), ("a7", "a6"), ("d3", "d5")]);
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn games_parse_from_position_text() {
        let game = Game::from_str("8/8/8/8/8/8/RBN2nbr/KBN2nbk w").unwrap();
        assert_eq!(game, Game::new());
        assert!(Game::from_str("8/8/8/8/8/8/RBN2nbr/KBN2nb1 w").is_err());
    }

    #[test]
    fn result_spellings() {
        assert_eq!(GameState::InProgress.to_string(), "UNFINISHED");
        assert_eq!(GameState::WonBy(Color::White).to_string(), "WHITE_WON");
        assert_eq!(GameState::WonBy(Color::Black).to_string(), "BLACK_WON");
        assert_eq!(GameState::Tie.to_string(), "TIE");
        assert_eq!(GameState::Tie.winner(), None);
        assert_eq!(GameState::WonBy(Color::Black).winner(), Some(Color::Black));
    }
}
