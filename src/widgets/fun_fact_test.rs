use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

const FACTS: [&str; 3] = ["alpha", "beta", "gamma"];

fn deck() -> FactDeck {
    FactDeck::new(FACTS.iter().map(|f| (*f).to_string()).collect())
}

#[test]
fn every_draw_is_a_member_of_the_list() {
    let deck = deck();
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..200 {
        let fact = deck.draw(&mut rng).unwrap();
        assert!(FACTS.contains(&fact), "{fact}");
    }
}

#[test]
fn all_facts_are_reachable() {
    let deck = deck();
    let mut rng = SmallRng::seed_from_u64(42);
    let mut seen = [false; 3];
    for _ in 0..500 {
        let fact = deck.draw(&mut rng).unwrap();
        let index = FACTS.iter().position(|f| *f == fact).unwrap();
        seen[index] = true;
    }
    assert!(seen.iter().all(|s| *s), "{seen:?}");
}

#[test]
fn single_fact_deck_repeats_same_fact() {
    let deck = FactDeck::new(vec!["only".into()]);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(deck.draw(&mut rng), Some("only"));
    assert_eq!(deck.draw(&mut rng), Some("only"));
}

#[test]
fn empty_deck_draws_nothing() {
    let deck = FactDeck::new(Vec::new());
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(deck.draw(&mut rng), None);
    assert_eq!(deck.draw(&mut rng), None);
}
