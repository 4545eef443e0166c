use anchor_lang::prelude::*;

/// Custom error codes for the recurring-payment protocol
///
/// Note: Anchor automatically assigns error codes starting from 6000.
#[error_code]
pub enum SubscriptionError {
    /// When an identifier is added to an index set it is already a member of
    #[msg("Identifier is already present in the index set.")]
    AlreadyPresent,

    /// When an identifier is removed from an index set it is not a member of
    #[msg("Identifier is not present in the index set.")]
    NotPresent,

    /// When enumerating an index set past its last element
    #[msg("Index is out of bounds for the index set.")]
    IndexOutOfBounds,

    /// When an index set has reached its fixed account capacity
    #[msg("Index set is full. Remove an entry before adding another.")]
    IndexFull,

    /// When an operation references a subscription the directory does not know
    #[msg("Subscription is not registered with the directory.")]
    SubscriptionNotRegistered,

    /// When a non-payee or non-owner calls a privileged operation
    #[msg("Unauthorized. Only the subscription payee can perform this action.")]
    Unauthorized,

    /// When subscription terms are out of range (zero amount, zero interval,
    /// or interval above the 100-day cap)
    #[msg("Invalid subscription terms. Check amount and interval bounds.")]
    InvalidTerms,

    /// When a subscriber subscribes twice without unsubscribing in between
    #[msg("Subscriber is already subscribed to this subscription.")]
    AlreadySubscribed,

    /// When an operation requires an active subscriber state that is absent
    #[msg("Subscriber is not subscribed to this subscription.")]
    NotSubscribed,

    /// When a charge is attempted before the next payment is due
    #[msg("Payment is not due yet. Retry after the next due time.")]
    NotDue,

    /// When an operation is blocked by the subscription's pause state
    #[msg("Subscription is paused.")]
    Paused,

    /// When a bounty reward exceeds the subscription's per-cycle amount
    #[msg("Bounty reward must not exceed the subscription amount.")]
    RewardExceedsAmount,

    /// When a bounty is registered for a subscription that already has one
    #[msg("A bounty is already registered for this subscription.")]
    RewardAlreadyRegistered,

    /// When a bounty operation targets a subscription with no active bounty
    #[msg("No bounty is registered for this subscription.")]
    RewardNotRegistered,

    /// When the delegated allowance is insufficient to pull the charge
    #[msg("Insufficient delegated allowance to pull the due payment.")]
    InsufficientAllowance,

    /// When the subscriber's token balance cannot cover the charge
    #[msg("Insufficient token balance to cover the due payment.")]
    InsufficientFunds,

    /// When the subscriber-to-payee transfer did not move the expected amount
    #[msg("Payment transfer failed or did not move the expected amount.")]
    PaymentFailed,

    /// When the payee-to-caller reward transfer did not move the expected amount
    #[msg("Bounty reward transfer failed or did not move the expected amount.")]
    BountyPaymentFailed,

    /// When arithmetic operations would overflow/underflow
    #[msg("Arithmetic operation would result in overflow or underflow.")]
    ArithmeticError,

    /// When a token account is for a different mint than the subscription's
    #[msg("Token account mint does not match the subscription's funding token.")]
    WrongMint,

    /// When a provided token account is invalid or owned by the wrong party
    #[msg("Invalid token account for this operation.")]
    InvalidTokenAccount,

    /// When deleting a subscription whose registered bounty account was not
    /// supplied for the cascade
    #[msg("A bounty is registered for this subscription. Pass its account so deletion can close it.")]
    BountyAccountRequired,
}
