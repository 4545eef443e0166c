//! Deduplicating, enumerable index set over subscription identifiers
//!
//! This is the bookkeeping primitive underneath the directory's `created_by`
//! and `subscribed_by` indices and the bounty board's registration set. It
//! pairs a dense ordered sequence with a position map so membership checks,
//! insertion, and removal never scan the sequence.
//!
//! Removal swaps the target with the last element and pops, so enumeration
//! order is insertion order only until the first removal.

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::constants::MAX_INDEX_ENTRIES;
use crate::errors::SubscriptionError;

/// Set of pubkeys with O(1)-style membership and swap-remove semantics
///
/// Invariants:
/// - `items` contains no duplicates.
/// - `positions[id]` is the 1-based position of `id` in `items`; a missing
///   key means absent (the zero position of the original formulation).
/// - Positions are contiguous starting at 1.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct IndexedSet {
    items: Vec<Pubkey>,
    positions: BTreeMap<Pubkey, u32>,
}

impl IndexedSet {
    /// Serialized size of a set at full capacity, for account space math
    ///
    /// items: 4-byte len + 32 bytes per entry.
    /// positions: 4-byte len + (32 + 4) bytes per entry.
    pub const SPACE: usize = 4 + 32 * MAX_INDEX_ENTRIES + 4 + 36 * MAX_INDEX_ENTRIES;

    /// Appends `id` to the sequence and records its position
    ///
    /// # Errors
    /// - `AlreadyPresent` if `id` is already a member
    /// - `IndexFull` if the set is at capacity
    pub fn add(&mut self, id: Pubkey) -> Result<()> {
        require!(
            !self.positions.contains_key(&id),
            SubscriptionError::AlreadyPresent
        );
        require!(
            self.items.len() < MAX_INDEX_ENTRIES,
            SubscriptionError::IndexFull
        );

        self.items.push(id);
        let position = u32::try_from(self.items.len())
            .map_err(|_| SubscriptionError::ArithmeticError)?;
        self.positions.insert(id, position);
        Ok(())
    }

    /// Removes `id` by swapping it with the last element and popping
    ///
    /// Does not preserve the relative order of the remaining elements.
    ///
    /// # Errors
    /// - `NotPresent` if `id` is not a member
    pub fn remove(&mut self, id: &Pubkey) -> Result<()> {
        let position = self
            .positions
            .remove(id)
            .ok_or(SubscriptionError::NotPresent)?;

        // positions are 1-based
        let index = usize::try_from(position)
            .map_err(|_| SubscriptionError::ArithmeticError)?
            .checked_sub(1)
            .ok_or(SubscriptionError::ArithmeticError)?;

        let last = self
            .items
            .pop()
            .ok_or(SubscriptionError::ArithmeticError)?;

        if index < self.items.len() {
            self.items[index] = last;
            self.positions.insert(last, position);
        }
        Ok(())
    }

    /// Whether `id` is a member
    #[must_use]
    pub fn contains(&self, id: &Pubkey) -> bool {
        self.positions.contains_key(id)
    }

    /// Returns the member at sequence position `index`
    ///
    /// # Errors
    /// - `IndexOutOfBounds` if `index >= count()`
    pub fn get(&self, index: u32) -> Result<Pubkey> {
        let index =
            usize::try_from(index).map_err(|_| SubscriptionError::ArithmeticError)?;
        self.items
            .get(index)
            .copied()
            .ok_or_else(|| SubscriptionError::IndexOutOfBounds.into())
    }

    /// Number of members
    #[must_use]
    pub fn count(&self) -> u32 {
        u32::try_from(self.items.len()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<Pubkey> {
        (0..n).map(|_| Pubkey::new_unique()).collect()
    }

    #[test]
    fn add_records_membership_and_position() {
        let mut set = IndexedSet::default();
        let id = Pubkey::new_unique();

        set.add(id).unwrap();

        assert_eq!(set.count(), 1);
        assert_eq!(set.get(0).unwrap(), id);
        assert!(set.contains(&id));
    }

    #[test]
    fn add_rejects_duplicate() {
        let mut set = IndexedSet::default();
        let id = Pubkey::new_unique();

        set.add(id).unwrap();

        let err = set.add(id).unwrap_err();
        assert_eq!(err, SubscriptionError::AlreadyPresent.into());
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn add_rejects_when_full() {
        let mut set = IndexedSet::default();
        for id in keys(MAX_INDEX_ENTRIES) {
            set.add(id).unwrap();
        }

        let err = set.add(Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, SubscriptionError::IndexFull.into());
    }

    #[test]
    fn remove_swaps_last_into_hole() {
        let mut set = IndexedSet::default();
        let ids = keys(3);
        for id in &ids {
            set.add(*id).unwrap();
        }

        set.remove(&ids[1]).unwrap();

        assert_eq!(set.count(), 2);
        assert_eq!(set.get(0).unwrap(), ids[0]);
        // last element moved into the removed slot
        assert_eq!(set.get(1).unwrap(), ids[2]);
        assert!(!set.contains(&ids[1]));
        assert!(set.contains(&ids[2]));
    }

    #[test]
    fn remove_last_element_needs_no_swap() {
        let mut set = IndexedSet::default();
        let ids = keys(2);
        for id in &ids {
            set.add(*id).unwrap();
        }

        set.remove(&ids[1]).unwrap();

        assert_eq!(set.count(), 1);
        assert_eq!(set.get(0).unwrap(), ids[0]);
    }

    #[test]
    fn remove_rejects_absent_id() {
        let mut set = IndexedSet::default();
        let id = Pubkey::new_unique();
        set.add(id).unwrap();
        set.remove(&id).unwrap();

        let err = set.remove(&id).unwrap_err();
        assert_eq!(err, SubscriptionError::NotPresent.into());
    }

    #[test]
    fn get_rejects_out_of_bounds() {
        let mut set = IndexedSet::default();
        set.add(Pubkey::new_unique()).unwrap();

        let err = set.get(1).unwrap_err();
        assert_eq!(err, SubscriptionError::IndexOutOfBounds.into());
    }

    #[test]
    fn removed_member_can_be_added_again() {
        let mut set = IndexedSet::default();
        let id = Pubkey::new_unique();

        set.add(id).unwrap();
        set.remove(&id).unwrap();
        set.add(id).unwrap();

        assert!(set.contains(&id));
        assert_eq!(set.count(), 1);
    }

    /// Interleaved adds and removes keep count, membership, and enumeration
    /// consistent with each other.
    #[test]
    fn mixed_operations_keep_indices_consistent() {
        let mut set = IndexedSet::default();
        let ids = keys(8);

        for id in &ids {
            set.add(*id).unwrap();
        }
        set.remove(&ids[0]).unwrap();
        set.remove(&ids[4]).unwrap();
        set.remove(&ids[7]).unwrap();

        assert_eq!(set.count(), 5);

        let mut enumerated = Vec::new();
        for i in 0..set.count() {
            let id = set.get(i).unwrap();
            assert!(set.contains(&id), "enumerated id must be a member");
            enumerated.push(id);
        }
        enumerated.sort();
        enumerated.dedup();
        assert_eq!(enumerated.len(), 5, "enumerated ids must be distinct");

        for removed in [&ids[0], &ids[4], &ids[7]] {
            assert!(!set.contains(removed));
        }
    }
}
