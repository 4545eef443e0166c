//! Program constants
//!
//! Protocol-level invariants used throughout the recurring-payment program.
//! These values are immutable and should never change post-deployment.

/// Maximum billing interval in seconds (100 days)
///
/// Intervals longer than this are rejected at subscription creation. The cap
/// keeps unpaid claims reasonably short-lived and bounds the schedule
/// arithmetic (`next_payment_at + interval`) well inside the i64 epoch range.
pub const MAX_INTERVAL_SECS: u64 = 100 * 24 * 60 * 60;

/// Maximum number of entries in an embedded index set
///
/// Solana accounts are fixed-size at allocation, so every [`IndexedSet`]
/// embedded in a PDA carries this compile-time capacity. Adding beyond it
/// fails with `IndexFull`.
///
/// [`IndexedSet`]: crate::indexed_set::IndexedSet
pub const MAX_INDEX_ENTRIES: usize = 64;

/// PDA seed for the singleton directory account
pub const DIRECTORY_SEED: &[u8] = b"directory";

/// PDA seed for the singleton bounty board account
pub const BOUNTY_BOARD_SEED: &[u8] = b"bounty_board";

/// PDA seed prefix for subscription terms accounts
pub const SUBSCRIPTION_SEED: &[u8] = b"subscription";

/// PDA seed prefix for per-(subscription, subscriber) billing state
pub const SUBSCRIBER_SEED: &[u8] = b"subscriber";

/// PDA seed prefix for the payee-owned `created_by` index
pub const CREATED_BY_SEED: &[u8] = b"created_by";

/// PDA seed prefix for the subscriber-owned `subscribed_by` index
pub const SUBSCRIBED_BY_SEED: &[u8] = b"subscribed_by";

/// PDA seed prefix for per-subscription bounty entries
pub const BOUNTY_SEED: &[u8] = b"bounty";

/// PDA seed for the program's global transfer delegate
///
/// Subscribers approve this PDA as the delegate on their token accounts so
/// that due charges can be pulled without a subscriber signature. Payees
/// approve the same PDA to fund bounty rewards.
pub const DELEGATE_SEED: &[u8] = b"delegate";
