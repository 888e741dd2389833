use crate::color::Color;
use crate::display::GlyphSet;
use crate::rank::Rank;

/// The starting position, and with it the rank each king races toward.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// Kings, rooks, bishops and knights only.  Both armies start on ranks 1 and 2, White on the
    /// a- to c-files and Black on the f- to h-files, and both kings race for rank 8.
    Racing,
    /// The usual chess army on the usual squares.  Each king races for the enemy back rank.
    Standard,
}

impl Layout {
    /// The rank `color`'s king must reach to win.
    ///
    /// ```
    /// use kingrace::{Color, Layout, Rank};
    ///
    /// assert_eq!(Layout::Racing.target_rank(Color::Black), Rank::Eighth);
    /// assert_eq!(Layout::Standard.target_rank(Color::Black), Rank::First);
    /// ```
    pub fn target_rank(&self, color: Color) -> Rank {
        match *self {
            Layout::Racing => Rank::Eighth,
            Layout::Standard => color.to_their_backrank(),
        }
    }
}

/// When a king reaching its target rank ends the game.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum FinishRule {
    /// The game ends on the move a king arrives.
    Immediate,
    /// White moves first, so a White arrival gives Black one reply.  If Black's king arrives on
    /// that reply the game is tied, otherwise White wins.
    BlackReply,
}

/// Every rule switch of a game.
///
/// ```
/// use kingrace::{GameConfig, GlyphSet, Layout};
///
/// let config = GameConfig::standard().with_pawns(true).with_glyphs(GlyphSet::Letters);
/// assert_eq!(config.layout, Layout::Standard);
/// assert!(config.pawns_enabled);
/// assert!(!config.enforce_no_check);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub layout: Layout,
    /// Put pawns on ranks 2 and 7.  Only the standard layout has room for them.
    pub pawns_enabled: bool,
    /// Refuse any move after which either king could be captured.
    pub enforce_no_check: bool,
    pub glyphs: GlyphSet,
    pub finish: FinishRule,
}

impl GameConfig {
    /// The pawnless race: no checks allowed, drawn with letters.
    pub fn racing() -> GameConfig {
        GameConfig {
            layout: Layout::Racing,
            pawns_enabled: false,
            enforce_no_check: true,
            glyphs: GlyphSet::Letters,
            finish: FinishRule::Immediate,
        }
    }

    /// The full army.  Checks are allowed and pawns start switched off.
    pub fn standard() -> GameConfig {
        GameConfig {
            layout: Layout::Standard,
            pawns_enabled: false,
            enforce_no_check: false,
            glyphs: GlyphSet::Unicode,
            finish: FinishRule::Immediate,
        }
    }

    pub fn with_pawns(mut self, pawns_enabled: bool) -> GameConfig {
        self.pawns_enabled = pawns_enabled;
        self
    }

    pub fn with_no_check(mut self, enforce_no_check: bool) -> GameConfig {
        self.enforce_no_check = enforce_no_check;
        self
    }

    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> GameConfig {
        self.glyphs = glyphs;
        self
    }

    pub fn with_finish(mut self, finish: FinishRule) -> GameConfig {
        self.finish = finish;
        self
    }

    /// The rank `color`'s king must reach to win.
    #[inline]
    pub fn target_rank(&self, color: Color) -> Rank {
        self.layout.target_rank(color)
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig::racing()
    }
}
