//! Card, shoe and hand tests.

use std::collections::HashSet;

use bjtable::{Card, DECK_SIZE, DealError, Hand, HandError, Rank, Shoe, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand(cards: &[Card]) -> Hand {
    cards.iter().copied().collect()
}

fn any_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

fn non_ace_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len() - 1, 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

fn face_value_sum(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.value())).sum()
}

#[test]
fn card_values_cover_every_rank() {
    let expected: [u8; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11];
    for (rank, value) in Rank::ALL.into_iter().zip(expected) {
        assert_eq!(card(rank, Suit::Hearts).value(), value, "{rank:?}");
    }
}

#[test]
fn card_display_uses_rank_and_suit_letter() {
    assert_eq!(card(Rank::Ten, Suit::Clubs).to_string(), "10C");
    assert_eq!(card(Rank::Ace, Suit::Spades).to_string(), "AS");
    assert_eq!(card(Rank::Queen, Suit::Diamonds).to_string(), "QD");
    assert_eq!(card(Rank::Seven, Suit::Hearts).to_string(), "7H");
}

#[test]
fn new_shoe_is_a_full_deck_in_canonical_order() {
    let shoe = Shoe::new();
    assert_eq!(shoe.len(), DECK_SIZE);
    assert_eq!(shoe.remaining(), DECK_SIZE);
    assert_eq!(shoe.dealt(), 0);

    let unique: HashSet<Card> = shoe.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(shoe.cards()[0], card(Rank::Two, Suit::Clubs));
    assert_eq!(shoe.cards()[12], card(Rank::Ace, Suit::Clubs));
    assert_eq!(shoe.cards()[DECK_SIZE - 1], card(Rank::Ace, Suit::Spades));
}

#[test]
fn unshuffled_shoe_deals_in_canonical_order() {
    let mut shoe = Shoe::new();
    assert_eq!(shoe.deal().unwrap(), card(Rank::Two, Suit::Clubs));
    assert_eq!(shoe.deal().unwrap(), card(Rank::Three, Suit::Clubs));
    assert_eq!(shoe.dealt(), 2);
}

#[test]
fn exhausted_shoe_reports_an_error() {
    let mut shoe = Shoe::new();
    for _ in 0..DECK_SIZE {
        shoe.deal().unwrap();
    }
    assert_eq!(shoe.remaining(), 0);
    assert_eq!(shoe.deal().unwrap_err(), DealError::ShoeExhausted);
    assert_eq!(shoe.deal().unwrap_err(), DealError::ShoeExhausted);
}

#[test]
fn shuffle_resets_the_cursor() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut shoe = Shoe::new();
    for _ in 0..10 {
        shoe.deal().unwrap();
    }

    shoe.shuffle(&mut rng);
    assert_eq!(shoe.dealt(), 0);
    assert_eq!(shoe.remaining(), DECK_SIZE);
}

#[test]
fn same_seed_gives_same_order() {
    let mut a = Shoe::new();
    let mut b = Shoe::new();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn replayed_shoe_deals_exactly_what_it_was_given() {
    let seven = card(Rank::Seven, Suit::Hearts);
    // Duplicates are accepted as-is.
    let mut shoe = Shoe::from_cards(vec![seven, seven, card(Rank::Ace, Suit::Clubs)]);

    assert_eq!(shoe.len(), 3);
    assert_eq!(shoe.deal().unwrap(), seven);
    assert_eq!(shoe.deal().unwrap(), seven);
    assert_eq!(shoe.deal().unwrap(), card(Rank::Ace, Suit::Clubs));
    assert_eq!(shoe.deal().unwrap_err(), DealError::ShoeExhausted);
    assert!(Shoe::from_cards(Vec::new()).is_empty());
}

#[test]
fn hand_without_aces_sums_face_values() {
    let h = hand(&[
        card(Rank::King, Suit::Clubs),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
    ]);
    assert_eq!(h.total(), 25);
    assert!(h.is_bust());
}

#[test]
fn long_hand_total_does_not_saturate() {
    let cards: Vec<Card> = Suit::ALL
        .iter()
        .cycle()
        .take(30)
        .map(|suit| card(Rank::Ten, *suit))
        .collect();
    let h = hand(&cards);

    assert_eq!(h.count(), 30);
    assert_eq!(h.total(), 300);
    assert!(h.is_bust());
}

#[test]
fn single_ace_drops_to_one_when_over_21() {
    let soft = hand(&[card(Rank::Ace, Suit::Clubs), card(Rank::Six, Suit::Hearts)]);
    assert_eq!(soft.total(), 17);

    let hard = hand(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
    ]);
    assert_eq!(hard.total(), 16);
}

#[test]
fn only_one_ace_is_ever_reduced() {
    let two_aces = hand(&[card(Rank::Ace, Suit::Clubs), card(Rank::Ace, Suit::Hearts)]);
    assert_eq!(two_aces.total(), 12);

    let two_aces_and_king = hand(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::King, Suit::Spades),
    ]);
    assert_eq!(two_aces_and_king.total(), 22);
    assert!(two_aces_and_king.is_bust());

    let three_aces_and_nine = hand(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
    ]);
    assert_eq!(three_aces_and_nine.total(), 32);
}

#[test]
fn blackjack_needs_exactly_an_ace_and_a_ten_value_card() {
    let natural = hand(&[card(Rank::Ten, Suit::Clubs), card(Rank::Ace, Suit::Spades)]);
    assert!(natural.is_blackjack());

    let reversed = hand(&[card(Rank::Ace, Suit::Spades), card(Rank::Jack, Suit::Clubs)]);
    assert!(reversed.is_blackjack());

    let twenty = hand(&[card(Rank::King, Suit::Clubs), card(Rank::Queen, Suit::Hearts)]);
    assert_eq!(twenty.total(), 20);
    assert!(!twenty.is_blackjack());

    let three_card_21 = hand(&[
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Seven, Suit::Spades),
    ]);
    assert_eq!(three_card_21.total(), 21);
    assert!(!three_card_21.is_blackjack());

    let soft_21 = hand(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
    ]);
    assert_eq!(soft_21.total(), 21);
    assert!(!soft_21.is_blackjack());

    assert!(!Hand::new().is_blackjack());
}

#[test]
fn hand_card_access_is_bounds_checked() {
    let h = hand(&[card(Rank::Two, Suit::Clubs), card(Rank::Ace, Suit::Hearts)]);
    assert_eq!(h.card(1).unwrap(), card(Rank::Ace, Suit::Hearts));
    assert_eq!(
        h.card(2).unwrap_err(),
        HandError::OutOfRange { index: 2, len: 2 }
    );
    assert_eq!(
        Hand::new().card(0).unwrap_err(),
        HandError::OutOfRange { index: 0, len: 0 }
    );
}

#[test]
fn cleared_hand_is_reusable() {
    let mut h = hand(&[card(Rank::Two, Suit::Clubs), card(Rank::Ace, Suit::Hearts)]);
    h.clear();
    assert!(h.is_empty());
    assert_eq!(h.count(), 0);
    assert_eq!(h.total(), 0);

    h.add_card(card(Rank::Nine, Suit::Spades));
    assert_eq!(h.count(), 1);
    assert_eq!(h.total(), 9);
}

proptest! {
    #[test]
    fn total_without_aces_is_the_sum(cards in prop::collection::vec(non_ace_card(), 0..12)) {
        prop_assert_eq!(u32::from(hand(&cards).total()), face_value_sum(&cards));
    }

    #[test]
    fn total_with_aces_reduces_at_most_once(
        mut cards in prop::collection::vec(any_card(), 0..11),
        suit in 0..Suit::ALL.len(),
    ) {
        cards.push(Card::new(Rank::Ace, Suit::ALL[suit]));
        let sum = face_value_sum(&cards);
        let expected = if sum > 21 { sum - 10 } else { sum };
        prop_assert_eq!(u32::from(hand(&cards).total()), expected);
    }

    #[test]
    fn total_is_independent_of_order(mut cards in prop::collection::vec(any_card(), 0..10)) {
        let before = hand(&cards).total();
        cards.reverse();
        prop_assert_eq!(hand(&cards).total(), before);
    }

    #[test]
    fn shuffled_shoe_deals_every_card_once(seed in any::<u64>()) {
        let mut shoe = Shoe::new();
        shoe.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(shoe.dealt(), 0);

        let order = shoe.cards().to_vec();
        let mut dealt = Vec::with_capacity(DECK_SIZE);
        for _ in 0..DECK_SIZE {
            dealt.push(shoe.deal().unwrap());
        }

        prop_assert_eq!(&dealt, &order);
        let unique: HashSet<Card> = dealt.into_iter().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
        prop_assert_eq!(shoe.deal().unwrap_err(), DealError::ShoeExhausted);
    }
}
