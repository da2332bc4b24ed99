//! Year grouping for the round navigation.

use crate::model::Round;

/// All rounds held in one year, in the order they were published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup {
    pub year: i32,
    pub rounds: Vec<Round>,
}

/// Partition `items` by `key_fn`.
///
/// Groups come out in the order their key was first seen, and items keep
/// their relative order inside a group.
pub fn group_by<K, T, F>(items: impl IntoIterator<Item = T>, key_fn: F) -> Vec<(K, Vec<T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let key = key_fn(&item);
        if let Some(g) = groups.iter_mut().find(|(k, _)| *k == key) {
            g.1.push(item);
        } else {
            groups.push((key, vec![item]));
        }
    }
    groups
}

/// Group rounds by year, oldest year first.
pub fn group_rounds_by_year(rounds: &[Round]) -> Vec<YearGroup> {
    let mut groups: Vec<YearGroup> = group_by(rounds.iter().cloned(), |r| r.year)
        .into_iter()
        .map(|(year, rounds)| YearGroup { year, rounds })
        .collect();
    groups.sort_by_key(|g| g.year);
    groups
}

/// The year left expanded after the header for `clicked` is pressed.
///
/// Only one year is open at a time; pressing the open year closes it.
pub fn toggle_year(open: Option<i32>, clicked: i32) -> Option<i32> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Expanded year of the drawer list.
///
/// Header clicks toggle it locally; a new value from the owner overrides
/// whatever the user left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearAccordion {
    open: Option<i32>,
}

impl YearAccordion {
    pub fn new(open: Option<i32>) -> Self {
        Self { open }
    }

    pub fn open(&self) -> Option<i32> {
        self.open
    }

    pub fn click(&mut self, year: i32) {
        self.open = toggle_year(self.open, year);
    }

    pub fn sync(&mut self, open: Option<i32>) {
        self.open = open;
    }
}
