use clap::{Parser, ValueEnum};
use kingrace::{ChessMove, FinishRule, Game, GameConfig, GlyphSet, MoveGen};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Kings, rooks, bishops and knights on ranks 1 and 2; both kings race for rank 8
    Racing,
    /// The usual chess army; each king races for the enemy back rank
    Standard,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Glyphs {
    Letters,
    Unicode,
}

/// Play the king race on the console, two players taking turns at the keyboard
#[derive(Parser, Debug)]
#[command(name = "kingrace")]
#[command(version)]
struct Cli {
    /// Starting layout
    #[arg(long, value_enum, default_value_t = Variant::Racing)]
    variant: Variant,

    /// Put pawns on ranks 2 and 7 (standard layout only)
    #[arg(long)]
    pawns: bool,

    /// Allow moves that leave a king attacked
    #[arg(long)]
    allow_checks: bool,

    /// How to draw the pieces; each layout has its own default
    #[arg(long, value_enum)]
    glyphs: Option<Glyphs>,

    /// Give Black one reply after White's king arrives
    #[arg(long)]
    black_reply: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let mut config = match self.variant {
            Variant::Racing => GameConfig::racing(),
            Variant::Standard => GameConfig::standard(),
        }
        .with_pawns(self.pawns);

        if self.allow_checks {
            config = config.with_no_check(false);
        }
        match self.glyphs {
            Some(Glyphs::Letters) => config = config.with_glyphs(GlyphSet::Letters),
            Some(Glyphs::Unicode) => config = config.with_glyphs(GlyphSet::Unicode),
            None => {}
        }
        if self.black_reply {
            config = config.with_finish(FinishRule::BlackReply);
        }
        config
    }
}

/// Print `text`, then read one trimmed line.  `None` once input runs out.
fn prompt<B: BufRead>(input: &mut io::Lines<B>, text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn list_moves(game: &Game) {
    let moves: Vec<String> = MoveGen::new_legal(game).map(|m| m.to_string()).collect();
    if moves.is_empty() {
        println!("No legal moves.");
    } else {
        println!("Legal moves: {}", moves.join(" "));
    }
}

fn main() -> Result<(), failure::Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = cli.config();
    info!(?config, "starting game");
    let mut game = Game::with_config(config);

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    while !game.state().is_over() {
        println!("{}", game.board().display(config.glyphs));

        let side = game.side_to_move();
        let from = match prompt(&mut input, &format!("{} to move. From (or 'moves'): ", side))? {
            Some(text) => text,
            None => return Ok(()),
        };
        if from.is_empty() {
            continue;
        }
        if from == "moves" {
            list_moves(&game);
            continue;
        }

        let to = match prompt(&mut input, "To (or 'u' to choose another piece): ")? {
            Some(text) => text,
            None => return Ok(()),
        };
        if to == "u" {
            continue;
        }

        match game.attempt_move(&from, &to) {
            Ok(true) => {}
            Ok(false) => {
                if let Ok(m) = ChessMove::from_squares(&from, &to) {
                    if let Some(reason) = game.rejection(m) {
                        debug!(%m, %reason, "refused");
                    }
                }
                println!("Invalid move. Try again.");
            }
            Err(e) => println!("{}", e),
        }
    }

    println!("{}", game.board().display(config.glyphs));
    println!("Game over. Result: {}", game.state());
    Ok(())
}
