use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::io::IsTerminal;

use rps_lab::console::{prompt_rounds, LinePrompter, Prompter, TermPrompter};
use rps_lab::demos;
use rps_lab::{play_configured, GameConfig, Result, SeriesFormat, Variant};

#[derive(Parser, Debug)]
#[command(name = "rps-lab", version, about = "Rock, Paper, Scissors, Lizard, Spock and friends")]
struct Cli {
    /// Log debug detail to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a single round (the default).
    Play(GameArgs),
    /// Play a best-of-N or first-to-K series.
    Series {
        #[command(flatten)]
        game: GameArgs,
        /// Number of rounds in a best-of series; prompted for when omitted.
        #[arg(long, conflicts_with = "first_to")]
        rounds: Option<u32>,
        /// Wins needed in a first-to series.
        #[arg(long)]
        first_to: Option<u32>,
    },
    /// Print the summation demonstrations.
    Sums,
    /// Print the set and short-circuit demonstrations.
    Sets,
}

#[derive(Args, Debug, Default)]
struct GameArgs {
    /// Use only rock, paper and scissors.
    #[arg(long)]
    classic: bool,
    /// Seed the computer's choices.
    #[arg(long)]
    seed: Option<u64>,
}

impl GameArgs {
    fn config(&self) -> GameConfig {
        let variant = if self.classic { Variant::Classic } else { Variant::Extended };
        let config = GameConfig::new().with_variant(variant);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn log(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

fn prompter() -> Box<dyn Prompter> {
    if std::io::stdin().is_terminal() {
        Box::new(TermPrompter::new())
    } else {
        Box::new(LinePrompter::new(std::io::stdin().lock(), std::io::stdout()))
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Play(args) => {
            play_configured(&args.config(), &mut *prompter())?;
        }
        Command::Series { game, rounds, first_to } => {
            let mut prompter = prompter();
            let format = match (rounds, first_to) {
                (_, Some(target)) => SeriesFormat::first_to(target)?,
                (Some(rounds), None) => SeriesFormat::best_of(rounds)?,
                (None, None) => prompt_rounds(&mut *prompter)?,
            };
            play_configured(&game.config().with_format(format), &mut *prompter)?;
        }
        Command::Sums => {
            for line in demos::aggregate::demo_lines() {
                println!("{}", line);
            }
        }
        Command::Sets => {
            for line in demos::sets::demo_lines()? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    log(cli.verbose);

    let command = cli.command.unwrap_or(Command::Play(GameArgs::default()));
    if let Err(e) = run(command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
