#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod report;

use std::{
  fs::{self, File},
  io::Write,
  path::Path,
  process::ExitCode,
};

use args::{Args, Command, LexiconIndex, OutputFormat};
use clap::Parser;
use env_logger::Builder;
use hunt::{Board, WordHunt};
use lexicon::{Lexicon, SortedLexicon, TrieLexicon};
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};
use report::{BoardView, Report, StatsView};
use util::{error::CliResult, text::canonicalize, time::time_fn};

const COMPILED_EXTENSION: &str = "bin";

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    _ => LevelFilter::Debug,
  };
  Builder::new()
    .filter_level(level)
    .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
    .init();
}

fn is_compiled(path: &Path) -> bool {
  path
    .extension()
    .is_some_and(|ext| ext == COMPILED_EXTENSION)
}

fn load_trie(path: &Path) -> CliResult<TrieLexicon> {
  if is_compiled(path) {
    let lexicon = TrieLexicon::from_bytes(&fs::read(path)?)?;
    log::info!("Loaded {} compiled words from {}", lexicon.len(), path.display());
    Ok(lexicon)
  } else {
    Ok(TrieLexicon::from_path(path)?)
  }
}

fn load_lexicon(path: &Path, index: LexiconIndex) -> CliResult<Box<dyn Lexicon>> {
  Ok(match index {
    LexiconIndex::Trie => Box::new(load_trie(path)?),
    LexiconIndex::Sorted => {
      if is_compiled(path) {
        return Err(
          format!(
            "{} is a compiled lexicon, which only the trie index can read",
            path.display()
          )
          .into(),
        );
      }
      Box::new(SortedLexicon::from_path(path)?)
    }
  })
}

fn select_board(args: &Args) -> CliResult<Board> {
  Ok(match (&args.board, args.random) {
    (Some(layout), _) => Board::parse(layout)?,
    (None, Some(side)) => {
      let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
      };
      Board::random(side, &mut rng)?
    }
    (None, None) => Board::default(),
  })
}

fn compile(args: &Args, out: &Path) -> CliResult<Report> {
  let lexicon = load_trie(&args.lexicon)?;
  let bytes = lexicon.to_bytes();
  File::create(out)?.write_all(&bytes)?;

  Ok(Report::Compile {
    out: out.display().to_string(),
    words: lexicon.len(),
    bytes: bytes.len(),
  })
}

fn load_game(args: &Args) -> CliResult<WordHunt<Box<dyn Lexicon>>> {
  let mut game = WordHunt::with_lexicon(load_lexicon(&args.lexicon, args.index)?);
  game.replace_board(select_board(args)?);
  Ok(game)
}

fn run(args: &Args) -> CliResult<Report> {
  Ok(match &args.command {
    Command::Solve { min_length } => {
      let game = load_game(args)?;
      let (elapsed, result) = time_fn(|| game.scorable_words_with_stats(*min_length));
      let (words, stats) = result?;
      log::info!("Took {}s", elapsed.as_secs_f32());
      let score = game.score_for_words(&words, *min_length)?;
      Report::Solve {
        board: BoardView::new(game.board()),
        min_length: *min_length,
        words: words.into_iter().collect(),
        score,
        stats: StatsView::new(stats, elapsed),
      }
    }
    Command::Locate { word } => {
      let game = load_game(args)?;
      Report::Locate {
        board: BoardView::new(game.board()),
        word: canonicalize(word),
        path: game.is_on_board(word)?,
      }
    }
    Command::Score { min_length, words } => {
      let game = load_game(args)?;
      Report::Score {
        board: BoardView::new(game.board()),
        min_length: *min_length,
        words: words.clone(),
        score: game.score_for_words(words, *min_length)?,
      }
    }
    Command::Compile { out } => compile(args, out)?,
  })
}

fn print_report(report: &Report, format: OutputFormat) -> CliResult {
  match format {
    OutputFormat::Text => println!("{report}"),
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
  }
  Ok(())
}

fn main() -> ExitCode {
  let args = Args::parse();
  init_logging(args.verbose);

  if let Err(err) = run(&args).and_then(|report| print_report(&report, args.format)) {
    eprintln!("Error: {err}");
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  }
}
