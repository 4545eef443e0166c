//! Tests for the index-set primitive underlying directory and bounty
//! bookkeeping
//!
//! Covers the consistency property the rest of the protocol relies on: for
//! any sequence of successful adds and removes, `count()` equals adds minus
//! removes, `contains` agrees with enumeration, and enumeration yields
//! distinct members.

use anchor_lang::prelude::*;
use recur_protocol::errors::SubscriptionError;
use recur_protocol::indexed_set::IndexedSet;

fn unique_keys(n: usize) -> Vec<Pubkey> {
    (0..n).map(|_| Pubkey::new_unique()).collect()
}

fn enumerate(set: &IndexedSet) -> Vec<Pubkey> {
    (0..set.count()).map(|i| set.get(i).unwrap()).collect()
}

#[test]
fn count_tracks_successful_adds_and_removes() {
    let mut set = IndexedSet::default();
    let ids = unique_keys(10);

    for id in &ids {
        set.add(*id).unwrap();
    }
    assert_eq!(set.count(), 10);

    for id in ids.iter().take(4) {
        set.remove(id).unwrap();
    }
    assert_eq!(set.count(), 6);
}

#[test]
fn contains_is_consistent_with_enumeration() {
    let mut set = IndexedSet::default();
    let ids = unique_keys(6);

    for id in &ids {
        set.add(*id).unwrap();
    }
    set.remove(&ids[2]).unwrap();
    set.remove(&ids[5]).unwrap();

    let members = enumerate(&set);
    for member in &members {
        assert!(set.contains(member));
    }
    for id in &ids {
        assert_eq!(set.contains(id), members.contains(id));
    }
}

#[test]
fn enumeration_yields_distinct_ids() {
    let mut set = IndexedSet::default();
    let ids = unique_keys(8);

    for id in &ids {
        set.add(*id).unwrap();
    }
    set.remove(&ids[0]).unwrap();
    set.remove(&ids[3]).unwrap();

    let mut members = enumerate(&set);
    members.sort();
    members.dedup();
    assert_eq!(members.len() as u32, set.count());
}

#[test]
fn insertion_order_is_preserved_until_first_removal() {
    let mut set = IndexedSet::default();
    let ids = unique_keys(5);

    for id in &ids {
        set.add(*id).unwrap();
    }
    assert_eq!(enumerate(&set), ids);

    // swap-remove moves the last element into the hole; relative order of
    // the survivors is not insertion order any more
    set.remove(&ids[1]).unwrap();
    let members = enumerate(&set);
    assert_eq!(members[0], ids[0]);
    assert_eq!(members[1], ids[4]);
}

#[test]
fn add_remove_errors_leave_state_untouched() {
    let mut set = IndexedSet::default();
    let ids = unique_keys(2);
    set.add(ids[0]).unwrap();

    let err = set.add(ids[0]).unwrap_err();
    assert_eq!(err, SubscriptionError::AlreadyPresent.into());

    let err = set.remove(&ids[1]).unwrap_err();
    assert_eq!(err, SubscriptionError::NotPresent.into());

    assert_eq!(set.count(), 1);
    assert_eq!(set.get(0).unwrap(), ids[0]);
}

#[test]
fn get_past_count_is_out_of_bounds() {
    let mut set = IndexedSet::default();
    set.add(Pubkey::new_unique()).unwrap();
    set.add(Pubkey::new_unique()).unwrap();

    assert!(set.get(1).is_ok());
    let err = set.get(2).unwrap_err();
    assert_eq!(err, SubscriptionError::IndexOutOfBounds.into());
}
