//! Plays a few seeded rounds with no console input.
//!
//! The player bets a tenth of their chips and hits below 17, like the dealer.

use bjtable::{Action, Decisions, Renderer, RoundError, Table, TableOptions, TableView};

struct MimicTheDealer;

impl Decisions for MimicTheDealer {
    fn request_bet(&mut self, chips: usize) -> Option<i64> {
        i64::try_from((chips / 10).max(1)).ok()
    }

    fn request_action(&mut self, view: &TableView<'_>) -> Action {
        if view.player.total < 17 {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

#[derive(Default)]
struct Tally {
    renders: usize,
}

impl Renderer for Tally {
    fn render(&mut self, _view: &TableView<'_>) {
        self.renders += 1;
    }
}

fn main() -> Result<(), RoundError> {
    let mut table = Table::new(TableOptions::default(), 2024);
    let mut tally = Tally::default();

    for round in 1..=10 {
        if !table.can_play() {
            break;
        }
        let result = table.play_round(&mut MimicTheDealer, &mut tally)?;
        println!(
            "round {round}: {:?} ({} vs {}), delta {:+}, chips {}",
            result.outcome,
            result.player_total,
            result.dealer_total,
            result.chip_delta,
            result.chips
        );
    }

    println!("{} table updates rendered", tally.renders);
    Ok(())
}
