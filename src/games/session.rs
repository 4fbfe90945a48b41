//! Interactive game loops: a single round or a whole series.

use log::info;

use crate::console::{prompt_choice, Prompter};
use crate::core::{GameConfig, Result, SeriesFormat};
use crate::rules::{RulesEngine, StandardRules};

use super::round::{Game, Round};
use super::series::{Series, Side};

const CHOICE_PROMPT: &str = "Enter your choice: ";

fn greet<R: RulesEngine, P: Prompter + ?Sized>(game: &Game<R>, prompter: &mut P) -> Result<()> {
    let names: Vec<&str> = game.rules().legal_choices().iter().map(|c| c.name()).collect();
    prompter.say(&format!("Welcome to {}!", game.rules().variant().title()))?;
    prompter.say(&format!("Choices: {}", names.join(", ")))
}

fn play_round<R: RulesEngine, P: Prompter + ?Sized>(game: &mut Game<R>, prompter: &mut P) -> Result<Round> {
    let choice = prompt_choice(prompter, CHOICE_PROMPT, game.rules().legal_choices())?;
    let round = game.play(choice)?;

    prompter.say(&format!("Computer chose: {}", round.computer))?;
    if let Some(line) = game.describe(&round) {
        prompter.say(&line)?;
    }
    prompter.say(round.outcome.announcement())?;
    Ok(round)
}

/// Play one round: greet, prompt, resolve, announce.
pub fn play_single<R: RulesEngine, P: Prompter + ?Sized>(game: &mut Game<R>, prompter: &mut P) -> Result<Round> {
    greet(game, prompter)?;
    play_round(game, prompter)
}

/// Play rounds until one side reaches the format's target.
pub fn play_series<R: RulesEngine, P: Prompter + ?Sized>(
    game: &mut Game<R>,
    format: SeriesFormat,
    prompter: &mut P,
) -> Result<Series> {
    greet(game, prompter)?;
    prompter.say(&format!("Playing {} (first to {} wins).", format, format.target()))?;

    let mut series = Series::new(format);
    while !series.is_over() {
        let round = play_round(game, prompter)?;
        let score = series.record(round)?;
        prompter.say(&format!("Score - {}", score))?;
    }

    prompter.say(&format!("Final Score - {}", series.score()))?;
    match series.winner() {
        Some(Side::Player) => prompter.say("You take the series!")?,
        Some(Side::Computer) => prompter.say("The computer takes the series!")?,
        None => {}
    }
    Ok(series)
}

/// What a configured game produced.
#[derive(Clone, Debug)]
pub enum Played {
    Single(Round),
    Series(Series),
}

/// Build a game from `config` and play it: a series when a format is
/// configured, otherwise a single round.
pub fn play_configured<P: Prompter + ?Sized>(config: &GameConfig, prompter: &mut P) -> Result<Played> {
    let mut game: Game<StandardRules> = Game::from_config(config);
    let played = match config.format {
        Some(format) => Played::Series(play_series(&mut game, format, prompter)?),
        None => Played::Single(play_single(&mut game, prompter)?),
    };
    info!("{} game finished (seed {})", config.variant, game.seed());
    Ok(played)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{LinePrompter, INVALID_CHOICE};
    use crate::core::{Choice, GameConfig, Variant};

    fn run_single(input: &str, config: &GameConfig) -> (Result<Round>, String) {
        let mut game = Game::from_config(config);
        let mut prompter = LinePrompter::new(input.as_bytes(), Vec::new());
        let result = play_single(&mut game, &mut prompter);
        (result, String::from_utf8(prompter.into_output()).unwrap())
    }

    #[test]
    fn test_single_round_transcript() {
        let config = GameConfig::new().with_seed(11);
        let (result, out) = run_single("banana\nRock\n", &config);
        let round = result.unwrap();

        assert!(out.starts_with("Welcome to Rock, Paper, Scissors, Lizard, Spock!\n"));
        assert!(out.contains("Choices: rock, paper, scissors, lizard, spock\n"));
        assert!(out.contains(INVALID_CHOICE));
        assert!(out.contains(&format!("Computer chose: {}\n", round.computer)));
        assert!(out.trim_end().ends_with(round.outcome.announcement()));
        assert_eq!(round.player, Choice::Rock);
    }

    #[test]
    fn test_classic_greeting() {
        let config = GameConfig::new().with_variant(Variant::Classic).with_seed(5);
        let (result, out) = run_single("lizard\nscissors\n", &config);

        assert_eq!(result.unwrap().player, Choice::Scissors);
        assert!(out.starts_with("Welcome to Rock, Paper, Scissors!\nChoices: rock, paper, scissors\n"));
        assert!(out.contains(INVALID_CHOICE));
    }

    #[test]
    fn test_series_runs_to_completion() {
        let config = GameConfig::new().with_seed(99);
        let mut game = Game::from_config(&config);
        let input = "rock\n".repeat(200);
        let mut prompter = LinePrompter::new(input.as_bytes(), Vec::new());

        let series = play_series(&mut game, SeriesFormat::BestOf(3), &mut prompter).unwrap();
        let out = String::from_utf8(prompter.into_output()).unwrap();

        assert!(series.is_over());
        let score = series.score();
        assert!(score.player == 2 || score.computer == 2);
        assert!(out.contains(&format!("Final Score - {}", score)));
        assert_eq!(out.matches("Score - ").count(), series.history().len() + 1);
    }

    #[test]
    fn test_configured_format_drives_series() {
        let config = GameConfig::new().with_seed(8).with_format(SeriesFormat::FirstTo(2));
        let input = "spock\n".repeat(200);
        let mut prompter = LinePrompter::new(input.as_bytes(), Vec::new());

        match play_configured(&config, &mut prompter).unwrap() {
            Played::Series(series) => {
                assert_eq!(series.format(), SeriesFormat::FirstTo(2));
                assert!(series.is_over());
            }
            Played::Single(_) => panic!("configured format should play a series"),
        }
    }

    #[test]
    fn test_configured_without_format_plays_once() {
        let config = GameConfig::new().with_seed(8);
        let mut prompter = LinePrompter::new("paper\nrock\n".as_bytes(), Vec::new());

        match play_configured(&config, &mut prompter).unwrap() {
            Played::Single(round) => assert_eq!(round.player, Choice::Paper),
            Played::Series(_) => panic!("no format should play a single round"),
        }
    }

    #[test]
    fn test_series_input_closed() {
        let mut game = Game::from_config(&GameConfig::new().with_seed(1));
        let mut prompter = LinePrompter::new("".as_bytes(), Vec::new());

        assert!(play_series(&mut game, SeriesFormat::FirstTo(2), &mut prompter).is_err());
    }
}
