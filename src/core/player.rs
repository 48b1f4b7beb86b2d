//! Hand identification and per-hand data storage.
//!
//! ## HandId
//!
//! Type-safe identifier for a seat at the table. Every dealt hand, strategy
//! assignment and scoreboard row is keyed by one.
//!
//! ## HandMap
//!
//! Per-hand storage backed by `Vec` for O(1) access, indexable by `HandId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Upper bound on hands at one table: one card each from a full deck.
pub const MAX_HANDS: usize = 60;

/// Identifier of a hand (and of the player holding it).
///
/// Indices are 0-based: the first hand is `HandId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandId(pub u8);

impl HandId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every hand of a table with `hand_count` hands.
    ///
    /// ```
    /// use president_sim::core::HandId;
    ///
    /// let hands: Vec<_> = HandId::all(5).collect();
    /// assert_eq!(hands.len(), 5);
    /// assert_eq!(hands[4], HandId::new(4));
    /// ```
    pub fn all(hand_count: usize) -> impl Iterator<Item = HandId> {
        (0..hand_count as u8).map(HandId)
    }
}

impl std::fmt::Display for HandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hand {}", self.0)
    }
}

/// Per-hand data storage with O(1) access.
///
/// ```
/// use president_sim::core::{HandId, HandMap};
///
/// let mut wins: HandMap<u32> = HandMap::with_default(3);
/// wins[HandId::new(2)] += 1;
/// assert_eq!(wins[HandId::new(2)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandMap<T> {
    data: Vec<T>,
}

impl<T> HandMap<T> {
    /// Build a map with one value per hand from a factory.
    pub fn new(hand_count: usize, factory: impl Fn(HandId) -> T) -> Self {
        assert!(hand_count > 0, "Must have at least 1 hand");
        assert!(hand_count <= MAX_HANDS, "At most {MAX_HANDS} hands supported");

        let data = HandId::all(hand_count).map(factory).collect();
        Self { data }
    }

    pub fn with_value(hand_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(hand_count, |_| value.clone())
    }

    pub fn with_default(hand_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(hand_count, |_| T::default())
    }

    /// Wrap values that are already ordered by hand index.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 hand");
        assert!(data.len() <= MAX_HANDS, "At most {MAX_HANDS} hands supported");
        Self { data }
    }

    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.data.len()
    }

    /// Returns `None` for an id beyond the table.
    #[must_use]
    pub fn get(&self, hand: HandId) -> Option<&T> {
        self.data.get(hand.index())
    }

    pub fn get_mut(&mut self, hand: HandId) -> Option<&mut T> {
        self.data.get_mut(hand.index())
    }

    /// Iterate over (HandId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (HandId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (HandId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn hand_ids(&self) -> impl Iterator<Item = HandId> {
        HandId::all(self.data.len())
    }
}

impl<T> Index<HandId> for HandMap<T> {
    type Output = T;

    fn index(&self, hand: HandId) -> &Self::Output {
        &self.data[hand.index()]
    }
}

impl<T> IndexMut<HandId> for HandMap<T> {
    fn index_mut(&mut self, hand: HandId) -> &mut Self::Output {
        &mut self.data[hand.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_id_basics() {
        let h3 = HandId::new(3);
        assert_eq!(h3.index(), 3);
        assert_eq!(format!("{}", h3), "Hand 3");
        assert!(HandId::new(1) < h3);
    }

    #[test]
    fn test_hand_map_new() {
        let map: HandMap<usize> = HandMap::new(4, |h| h.index() * 10);

        assert_eq!(map[HandId::new(0)], 0);
        assert_eq!(map[HandId::new(3)], 30);
        assert_eq!(map.hand_count(), 4);
    }

    #[test]
    fn test_hand_map_get_out_of_range() {
        let map: HandMap<i32> = HandMap::with_value(2, 7);
        assert_eq!(map.get(HandId::new(1)), Some(&7));
        assert_eq!(map.get(HandId::new(2)), None);
    }

    #[test]
    fn test_hand_map_iter_and_mutation() {
        let mut map: HandMap<Vec<u32>> = HandMap::with_default(3);
        map[HandId::new(1)].push(5);

        let pairs: Vec<_> = map.iter().map(|(h, v)| (h, v.len())).collect();
        assert_eq!(
            pairs,
            vec![(HandId::new(0), 0), (HandId::new(1), 1), (HandId::new(2), 0)]
        );
    }

    #[test]
    fn test_hand_map_serialization() {
        let map: HandMap<i32> = HandMap::from_vec(vec![1, 2, 3]);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: HandMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 hand")]
    fn test_hand_map_zero_hands() {
        let _: HandMap<i32> = HandMap::with_value(0, 0);
    }
}
