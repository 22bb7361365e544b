//! Console blackjack against the house.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Action, BetError, Card, Decisions, HandView, Renderer, RoundError, RoundState, Table,
    TableOptions, TableView,
};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blackjack")]
#[command(about = "Single-player blackjack against a house dealer")]
struct Args {
    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting chip balance
    #[arg(long, default_value_t = 1000)]
    chips: usize,

    /// Player name
    #[arg(long, default_value = "Player")]
    name: String,

    /// Push a player natural when the dealer also holds one
    #[arg(long)]
    check_dealer_natural: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = TableOptions::default()
        .with_starting_chips(args.chips)
        .with_player_name(args.name)
        .with_dealer_natural_pushes(args.check_dealer_natural);
    let mut table = Table::new(options, seed);

    println!("Welcome to the Blackjack game!");

    while table.can_play() {
        match table.play_round(&mut ConsoleDecisions, &mut ConsoleRenderer) {
            Ok(_) => {}
            Err(RoundError::Abandoned) => break,
            Err(err) => {
                error!(%err, "round failed");
                break;
            }
        }

        println!("You now have {} chips.", table.chips());
        if !table.can_play() {
            println!("You are out of chips.");
            break;
        }

        let again = prompt_line("Do you want to play again? (y/n): ");
        if !matches!(again.as_deref(), Some("y" | "yes")) {
            break;
        }
    }

    println!("Thanks for playing!");
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// Reads one trimmed, lowercased line. `None` on end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

struct ConsoleDecisions;

impl Decisions for ConsoleDecisions {
    fn request_bet(&mut self, chips: usize) -> Option<i64> {
        loop {
            let input = prompt_line(&format!(
                "\nYou have {chips} chips. How many do you want to bet? (q to quit) "
            ))?;
            if input == "q" || input == "quit" {
                return None;
            }
            match input.parse::<i64>() {
                Ok(amount) => return Some(amount),
                Err(_) => println!("Please enter a number."),
            }
        }
    }

    fn request_action(&mut self, view: &TableView<'_>) -> Action {
        print_hand(&view.dealer);
        print_hand(&view.player);

        match prompt_line("Do you want to hit or stand? (h/s): ").as_deref() {
            Some("h" | "hit") => Action::Hit,
            _ => Action::Stand,
        }
    }
}

struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&mut self, view: &TableView<'_>) {
        match view.state {
            RoundState::DealerTurn => {
                if let Some(card) = view.dealer.cards.last() {
                    println!("{} draws {card}", view.dealer.name);
                }
            }
            RoundState::Settlement if view.player.total > bjtable::BLACKJACK => {
                print_hand(&view.player);
                println!("{} - Busted!", view.player.total);
            }
            RoundState::RoundOver => {
                print_hand(&view.player);
                print_hand(&view.dealer);
                if let Some(outcome) = view.outcome {
                    println!("{}", outcome.message());
                }
            }
            _ => {}
        }
    }

    fn bet_rejected(&mut self, err: &BetError) {
        println!("Invalid bet ({err}). Please enter a valid amount.");
    }
}

fn print_hand(hand: &HandView<'_>) {
    let mut parts: Vec<String> = hand.cards.iter().map(Card::to_string).collect();
    parts.extend((0..hand.hidden).map(|_| "XX".to_string()));

    if hand.is_revealed() {
        println!("{}: {} [{}]", hand.name, parts.join(" "), hand.total);
    } else {
        println!("{}: {}", hand.name, parts.join(" "));
    }
}
