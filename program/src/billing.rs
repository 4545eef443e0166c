//! Billing state machine: interval enforcement and schedule arithmetic
//!
//! Pure logic shared by `subscribe`, `process_payment`, and `claim_bounty`.
//! Handlers are responsible for loading accounts and moving tokens; the
//! functions here decide whether a charge is allowed and what the schedule
//! looks like afterwards.

use anchor_lang::prelude::*;

use crate::constants::MAX_INTERVAL_SECS;
use crate::errors::SubscriptionError;
use crate::state::{SubscriberState, SubscriptionTerms};

/// Validates subscription terms at creation time
///
/// # Errors
/// - `InvalidTerms` if `amount == 0`, `interval == 0`, or
///   `interval > MAX_INTERVAL_SECS`
pub fn validate_terms(amount: u64, interval: u64) -> Result<()> {
    require!(amount > 0, SubscriptionError::InvalidTerms);
    require!(interval > 0, SubscriptionError::InvalidTerms);
    require!(interval <= MAX_INTERVAL_SECS, SubscriptionError::InvalidTerms);
    Ok(())
}

/// Whether the subscriber's next payment has come due
#[must_use]
pub const fn is_due(next_payment_at: i64, now: i64) -> bool {
    next_payment_at != 0 && now >= next_payment_at
}

/// Pure predicate: subscribed, not paused, and due
#[must_use]
pub const fn can_charge(
    terms: &SubscriptionTerms,
    state: &SubscriberState,
    now: i64,
) -> bool {
    !terms.paused && is_due(state.next_payment_at, now)
}

/// Maps a failing charge precondition to its specific error
///
/// # Errors
/// - `Paused` if the subscription is paused
/// - `NotSubscribed` if the billing state carries no schedule
/// - `NotDue` if called before `next_payment_at`; retryable next cycle
pub fn assert_chargeable(
    terms: &SubscriptionTerms,
    state: &SubscriberState,
    now: i64,
) -> Result<()> {
    require!(!terms.paused, SubscriptionError::Paused);
    require!(state.next_payment_at != 0, SubscriptionError::NotSubscribed);
    require!(now >= state.next_payment_at, SubscriptionError::NotDue);
    Ok(())
}

/// Rejects a second subscribe without an intervening unsubscribe
///
/// A nonzero `next_payment_at` means a live billing schedule already exists
/// for this (subscription, subscriber) pair.
///
/// # Errors
/// - `AlreadySubscribed` if `next_payment_at != 0`
pub fn assert_not_subscribed(next_payment_at: i64) -> Result<()> {
    require!(next_payment_at == 0, SubscriptionError::AlreadySubscribed);
    Ok(())
}

/// Next due time after a successful charge
///
/// Advances from the previous due time rather than from `now`, so late
/// charges do not accumulate drift across cycles.
///
/// # Errors
/// - `ArithmeticError` on i64 overflow (unreachable under the interval cap,
///   still checked)
pub fn advance_schedule(next_payment_at: i64, interval: u64) -> Result<i64> {
    let interval =
        i64::try_from(interval).map_err(|_| SubscriptionError::ArithmeticError)?;
    next_payment_at
        .checked_add(interval)
        .ok_or_else(|| SubscriptionError::ArithmeticError.into())
}

/// Whether a claimed reward actually needs to move tokens
///
/// When the payee claims their own bounty the reward leg would be a
/// self-transfer with zero balance delta, which the post-transfer delta
/// check would reject. The leg is skipped instead; the payee simply keeps
/// the reward out of the charge they just received.
#[must_use]
pub fn reward_transfer_needed(payee_account: &Pubkey, claimer_account: &Pubkey) -> bool {
    payee_account != claimer_account
}

/// Predicate combining `can_charge` with the bounty funding requirement:
/// a reward is registered and the payee's delegated allowance covers it
#[must_use]
pub const fn can_claim_bounty(
    terms: &SubscriptionTerms,
    state: &SubscriberState,
    reward: u64,
    payee_delegated_amount: u64,
    now: i64,
) -> bool {
    can_charge(terms, state, now) && reward > 0 && payee_delegated_amount >= reward
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(amount: u64, interval: u64, paused: bool) -> SubscriptionTerms {
        SubscriptionTerms {
            payee: Pubkey::new_unique(),
            token: Pubkey::new_unique(),
            amount,
            interval,
            paused,
            nonce: 0,
            bump: 255,
        }
    }

    fn state(next_payment_at: i64) -> SubscriberState {
        SubscriberState {
            subscription: Pubkey::new_unique(),
            subscriber: Pubkey::new_unique(),
            next_payment_at,
            bump: 255,
        }
    }

    #[test]
    fn terms_require_positive_amount() {
        let err = validate_terms(0, 1000).unwrap_err();
        assert_eq!(err, SubscriptionError::InvalidTerms.into());
    }

    #[test]
    fn terms_require_positive_interval() {
        let err = validate_terms(100, 0).unwrap_err();
        assert_eq!(err, SubscriptionError::InvalidTerms.into());
    }

    #[test]
    fn interval_cap_is_inclusive() {
        validate_terms(100, MAX_INTERVAL_SECS).unwrap();

        let err = validate_terms(100, MAX_INTERVAL_SECS + 1).unwrap_err();
        assert_eq!(err, SubscriptionError::InvalidTerms.into());
    }

    #[test]
    fn charge_due_exactly_at_next_payment_time() {
        let state = state(1_000);

        assert!(!is_due(state.next_payment_at, 999));
        assert!(is_due(state.next_payment_at, 1_000));
        assert!(is_due(state.next_payment_at, 5_000));
    }

    #[test]
    fn zero_schedule_is_never_due() {
        assert!(!is_due(0, i64::MAX));
    }

    #[test]
    fn can_charge_blocked_by_pause() {
        let terms = terms(100, 1_000, true);
        let state = state(1_000);

        assert!(!can_charge(&terms, &state, 2_000));

        let err = assert_chargeable(&terms, &state, 2_000).unwrap_err();
        assert_eq!(err, SubscriptionError::Paused.into());
    }

    #[test]
    fn assert_chargeable_distinguishes_not_subscribed_from_not_due() {
        let terms = terms(100, 1_000, false);

        let err = assert_chargeable(&terms, &state(0), 2_000).unwrap_err();
        assert_eq!(err, SubscriptionError::NotSubscribed.into());

        let err = assert_chargeable(&terms, &state(3_000), 2_000).unwrap_err();
        assert_eq!(err, SubscriptionError::NotDue.into());
    }

    #[test]
    fn schedule_advances_by_interval_not_from_now() {
        // charge executed late at t=1_700 must still schedule t=2_000
        let next = advance_schedule(1_000, 1_000).unwrap();
        assert_eq!(next, 2_000);
    }

    #[test]
    fn schedule_overflow_is_checked() {
        let err = advance_schedule(i64::MAX, 1).unwrap_err();
        assert_eq!(err, SubscriptionError::ArithmeticError.into());
    }

    #[test]
    fn bounty_claim_requires_funded_allowance() {
        let terms = terms(100, 1_000, false);
        let state = state(1_000);

        assert!(can_claim_bounty(&terms, &state, 10, 10, 1_000));
        assert!(!can_claim_bounty(&terms, &state, 10, 9, 1_000));
        assert!(!can_claim_bounty(&terms, &state, 0, 100, 1_000));
        // not due yet
        assert!(!can_claim_bounty(&terms, &state, 10, 100, 999));
    }
}
