use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

fn open_count(acc: &Accordion, len: usize) -> usize {
    (0..len).filter(|i| acc.is_open(*i)).count()
}

#[test]
fn starts_with_all_panels_closed() {
    let acc = Accordion::new(4);
    assert_eq!(open_count(&acc, 4), 0);
}

#[test]
fn click_opens_clicked_panel() {
    let mut acc = Accordion::new(4);
    assert_eq!(acc.click(2), Some(2));
    assert!(acc.is_open(2));
}

#[test]
fn clicking_another_item_closes_the_first() {
    let mut acc = Accordion::new(4);
    acc.click(0);
    assert_eq!(acc.click(3), Some(3));
    assert!(!acc.is_open(0));
    assert_eq!(open_count(&acc, 4), 1);
}

#[test]
fn clicking_open_item_closes_everything() {
    let mut acc = Accordion::new(4);
    acc.click(1);
    assert_eq!(acc.click(1), None);
    assert_eq!(open_count(&acc, 4), 0);
}

#[test]
fn out_of_range_click_is_ignored() {
    let mut acc = Accordion::new(2);
    acc.click(1);
    assert_eq!(acc.click(5), Some(1));
    assert!(acc.is_open(1));
    assert!(!acc.is_open(5));
}

#[test]
fn exclusivity_holds_over_random_click_sequences() {
    let mut rng = SmallRng::seed_from_u64(99);
    for len in 1..6 {
        let mut acc = Accordion::new(len);
        for _ in 0..300 {
            let index = rng.random_range(0..len);
            let was_open = acc.is_open(index);
            acc.click(index);
            let count = open_count(&acc, len);
            assert!(count <= 1);
            assert_eq!(count == 1, !was_open);
            assert_eq!(acc.is_open(index), !was_open);
        }
    }
}
