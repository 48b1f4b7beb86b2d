//! Run a batch of President games and print where each hand finished.
//!
//! ```text
//! president --games 1000 --hands 5 --strategy lowest --assign 2=highest
//! ```

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use president_sim::{Batch, BatchConfig, GameConfig, HandId, Strategy, StrategyError, DEFAULT_MAX_TURNS};

#[derive(Parser, Debug)]
#[command(name = "president", about = "Simulate President games and tabulate finishing positions")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 1000)]
    games: usize,

    /// Number of hands at the table (2-60)
    #[arg(long, default_value_t = 5)]
    hands: usize,

    /// Hand that leads the first game
    #[arg(long, default_value_t = 0)]
    starter: usize,

    /// Strategy for every hand without an override (lowest, highest, random)
    #[arg(short, long, default_value = "random", value_parser = parse_strategy)]
    strategy: Strategy,

    /// Per-hand override as <hand>=<strategy>, repeatable
    #[arg(short, long = "assign", value_parser = parse_assignment)]
    assignments: Vec<(HandId, Strategy)>,

    /// Master seed for the batch
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Turn ceiling per game
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Leave games stopped by the turn ceiling out of the table
    #[arg(long)]
    exclude_anomalies: bool,

    /// Trace every turn at debug level
    #[arg(long)]
    trace: bool,

    /// Print the scoreboard as JSON
    #[arg(long)]
    json: bool,
}

fn parse_strategy(s: &str) -> Result<Strategy, StrategyError> {
    s.parse()
}

fn parse_assignment(s: &str) -> Result<(HandId, Strategy), StrategyError> {
    let (hand, tag) = s
        .split_once('=')
        .ok_or_else(|| StrategyError::MalformedAssignment(s.to_string()))?;
    let hand = hand
        .trim()
        .parse::<u8>()
        .map_err(|_| StrategyError::MalformedAssignment(s.to_string()))?;
    Ok((HandId::new(hand), tag.parse()?))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.trace {
        "president_sim=debug"
    } else {
        "president_sim=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let game = args
        .assignments
        .iter()
        .fold(
            GameConfig::new(args.hands)
                .with_starter(args.starter)
                .with_default_strategy(args.strategy)
                .with_max_turns(args.max_turns)
                .with_trace(args.trace),
            |config, &(hand, strategy)| config.with_strategy(hand, strategy),
        );
    let config = BatchConfig::new()
        .with_games(args.games)
        .with_seed(args.seed)
        .with_include_anomalies(!args.exclude_anomalies)
        .with_progress_every((args.games / 10).max(1));

    let batch = Batch::new(game, config);
    let mut observer = batch.game_config().observer();
    let board = batch
        .run(observer.as_mut())
        .context("batch could not be run")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        if let Some(first) = board.first_game() {
            let order: Vec<_> = first.iter().map(|h| h.0).collect();
            println!("Results for first game: {order:?}");
        }
        println!("{board}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("2=highest"),
            Ok((HandId::new(2), Strategy::Highest))
        );
        assert_eq!(
            parse_assignment("0 = 1"),
            Ok((HandId::new(0), Strategy::Highest))
        );
        assert_eq!(
            parse_assignment("two=highest"),
            Err(StrategyError::MalformedAssignment("two=highest".into()))
        );
        assert_eq!(
            parse_assignment("1=sneaky"),
            Err(StrategyError::UnknownTag("sneaky".into()))
        );
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "president", "--games", "10", "--hands", "4", "-s", "lowest", "-a", "3=random", "--json",
        ])
        .unwrap();

        assert_eq!(args.games, 10);
        assert_eq!(args.hands, 4);
        assert_eq!(args.strategy, Strategy::Lowest);
        assert_eq!(args.assignments, vec![(HandId::new(3), Strategy::Random)]);
        assert!(args.json);
    }

    #[test]
    fn test_args_reject_unknown_strategy() {
        assert!(Args::try_parse_from(["president", "--strategy", "bluff"]).is_err());
    }
}
