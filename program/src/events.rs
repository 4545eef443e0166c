use anchor_lang::prelude::*;

/// Event emitted when the directory registers a new subscription
#[event]
pub struct SubscriptionCreated {
    /// Identifier of the new subscription (terms PDA)
    pub subscription: Pubkey,
    /// Payee who created the subscription and receives its payments
    pub payee: Pubkey,
    /// Funding token mint
    pub token: Pubkey,
    /// Per-cycle charge in the token's smallest unit
    pub amount: u64,
    /// Seconds between charges
    pub interval: u64,
}

/// Event emitted when a subscription is deleted from the directory
#[event]
pub struct SubscriptionDeleted {
    /// Identifier of the deleted subscription
    pub subscription: Pubkey,
    /// Payee who owned the subscription
    pub payee: Pubkey,
}

/// Event emitted when a payee pauses a subscription
#[event]
pub struct SubscriptionPaused {
    /// Identifier of the paused subscription
    pub subscription: Pubkey,
}

/// Event emitted when a payee unpauses a subscription
#[event]
pub struct SubscriptionUnpaused {
    /// Identifier of the unpaused subscription
    pub subscription: Pubkey,
}

/// Event emitted when a subscriber opts in to a subscription
#[event]
pub struct Subscribed {
    /// Identifier of the subscription
    pub subscription: Pubkey,
    /// Payee who owns the subscription
    pub payee: Pubkey,
    /// The new subscriber
    pub subscriber: Pubkey,
}

/// Event emitted when a subscriber opts out of a subscription
#[event]
pub struct Unsubscribed {
    /// Identifier of the subscription
    pub subscription: Pubkey,
    /// Payee who owns the subscription
    pub payee: Pubkey,
    /// The departing subscriber
    pub subscriber: Pubkey,
}

/// Event emitted when a due charge is successfully executed
#[event]
pub struct PaymentProcessed {
    /// Identifier of the subscription
    pub subscription: Pubkey,
    /// Subscriber who was charged
    pub subscriber: Pubkey,
    /// Unix timestamp of the next due charge after this one
    pub next_payment_at: i64,
}

/// Event emitted when a payee registers a bounty for a subscription
#[event]
pub struct BountyRegistered {
    /// Identifier of the subscription
    pub subscription: Pubkey,
    /// Funding token mint the reward is paid in
    pub token: Pubkey,
    /// Reward paid to whoever triggers a due charge
    pub reward: u64,
}

/// Event emitted when a payee changes a registered bounty's reward
#[event]
pub struct BountyUpdated {
    /// Identifier of the subscription
    pub subscription: Pubkey,
    /// New reward amount
    pub reward: u64,
}

/// Event emitted when a bounty is unregistered
#[event]
pub struct BountyUnregistered {
    /// Identifier of the subscription
    pub subscription: Pubkey,
}

/// Event emitted when a caller triggers a due charge and collects the bounty
#[event]
pub struct BountyClaimed {
    /// Identifier of the subscription
    pub subscription: Pubkey,
    /// Subscriber who was charged
    pub subscriber: Pubkey,
    /// Funding token mint the reward was paid in
    pub token: Pubkey,
    /// Reward paid out to the caller
    pub reward: u64,
}
