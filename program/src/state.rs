use anchor_lang::prelude::*;

use crate::indexed_set::IndexedSet;

/// Singleton directory account, the root authority of the protocol
///
/// The directory allocates subscription identifiers, owns the authoritative
/// identifier-to-payee mapping (through [`SubscriptionTerms`] PDAs), and is
/// the only identity the bounty board trusts.
///
/// PDA seeds: ["directory"]
#[account]
#[derive(InitSpace)]
pub struct Directory {
    /// Authority that initialized the protocol
    pub authority: Pubkey, // 32 bytes
    /// The bounty board PDA wired to this directory at initialization
    pub bounty_board: Pubkey, // 32 bytes
    /// Monotonic counter used to allocate fresh subscription identifiers.
    /// Never decremented, so identifiers are never reused.
    pub subscriptions_created: u64, // 8 bytes
    /// PDA bump seed
    pub bump: u8, // 1 byte
}

impl Directory {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;
}

/// Subscription terms, the directory's record of one subscription
///
/// Exists iff the subscription is registered; `delete_subscription` closes
/// the account.
///
/// PDA seeds: ["subscription", nonce_le_bytes]
#[account]
#[derive(InitSpace)]
pub struct SubscriptionTerms {
    /// Party entitled to receive payments and administer the subscription
    pub payee: Pubkey, // 32 bytes
    /// Funding token mint
    pub token: Pubkey, // 32 bytes
    /// Per-cycle charge in the token's smallest unit, strictly positive
    pub amount: u64, // 8 bytes
    /// Seconds between charges, in (0, 100 days]
    pub interval: u64, // 8 bytes
    /// When true, subscribe and charge operations are blocked
    pub paused: bool, // 1 byte
    /// Directory nonce this identifier was allocated from
    pub nonce: u64, // 8 bytes
    /// PDA bump seed
    pub bump: u8, // 1 byte
}

impl SubscriptionTerms {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;
}

/// Per-(subscription, subscriber) billing state
///
/// Created on `subscribe` with `next_payment_at = now` (first charge is
/// immediately due) and closed on `unsubscribe`, so existence of this
/// account is the subscribed predicate. `next_payment_at` is advanced by
/// the subscription interval on every successful charge.
///
/// PDA seeds: ["subscriber", subscription, subscriber]
#[account]
#[derive(InitSpace)]
pub struct SubscriberState {
    /// The subscription this state belongs to
    pub subscription: Pubkey, // 32 bytes
    /// The subscriber's pubkey
    pub subscriber: Pubkey, // 32 bytes
    /// Unix timestamp of the next due charge; 0 means not subscribed
    pub next_payment_at: i64, // 8 bytes
    /// PDA bump seed
    pub bump: u8, // 1 byte
}

impl SubscriberState {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;
}

/// Index of subscriptions created by one payee
///
/// PDA seeds: ["created_by", payee]
#[account]
pub struct PayeeIndex {
    /// The payee this index belongs to
    pub payee: Pubkey,
    /// Identifiers of subscriptions created by `payee`
    pub subscriptions: IndexedSet,
    /// PDA bump seed
    pub bump: u8,
}

impl PayeeIndex {
    // discriminator + payee + set + bump
    pub const SPACE: usize = 8 + 32 + IndexedSet::SPACE + 1;
}

/// Index of subscriptions one subscriber is subscribed to
///
/// PDA seeds: ["subscribed_by", subscriber]
#[account]
pub struct SubscriberIndex {
    /// The subscriber this index belongs to
    pub subscriber: Pubkey,
    /// Identifiers of subscriptions `subscriber` is subscribed to
    pub subscriptions: IndexedSet,
    /// PDA bump seed
    pub bump: u8,
}

impl SubscriberIndex {
    pub const SPACE: usize = 8 + 32 + IndexedSet::SPACE + 1;
}

/// Singleton bounty board, the protocol's incentive ledger
///
/// Administratively owned by the directory: `directory` is set exactly once
/// at initialization and every bounty mutation validates against it. The
/// board never re-implements payee authorization; it trusts the directory's
/// subscription records.
///
/// PDA seeds: ["bounty_board"]
#[account]
pub struct BountyBoard {
    /// The directory PDA this board answers to, set once at initialization
    pub directory: Pubkey,
    /// Subscriptions with an active bounty
    pub registered: IndexedSet,
    /// PDA bump seed
    pub bump: u8,
}

impl BountyBoard {
    pub const SPACE: usize = 8 + 32 + IndexedSet::SPACE + 1;
}

/// Bounty entry for one subscription
///
/// Created by `register_bounty`, closed by `unregister_bounty` or by the
/// deletion cascade of the owning subscription.
///
/// PDA seeds: ["bounty", subscription]
#[account]
#[derive(InitSpace)]
pub struct Bounty {
    /// The subscription this bounty pays for
    pub subscription: Pubkey, // 32 bytes
    /// Reward paid to whoever triggers a due charge, in the funding token's
    /// smallest unit. Held in (0, subscription.amount] on every mutation.
    pub reward: u64, // 8 bytes
    /// PDA bump seed
    pub bump: u8, // 1 byte
}

impl Bounty {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;
}
