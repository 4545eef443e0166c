//! Unit tests for the protocol's error taxonomy
//!
//! The error split matters to callers: `NotDue` means retry next cycle,
//! `InsufficientAllowance`/`InsufficientFunds` mean the precondition read
//! failed, and `PaymentFailed`/`BountyPaymentFailed` mean a transfer was
//! attempted and did not move the expected amount. These tests pin the
//! distinctions so they cannot silently collapse.

use recur_protocol::errors::SubscriptionError;

fn code(error: SubscriptionError) -> u32 {
    let anchor_error: anchor_lang::error::Error = error.into();
    match anchor_error {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(_) => panic!("expected AnchorError variant"),
    }
}

#[test]
fn error_codes_start_at_anchor_custom_base() {
    assert_eq!(code(SubscriptionError::AlreadyPresent), 6000);
}

#[test]
fn transfer_failures_are_distinct_from_precondition_failures() {
    // a failed subscriber->payee transfer is not the same as a stale
    // allowance read, and the reward leg has its own failure
    let codes = [
        code(SubscriptionError::InsufficientAllowance),
        code(SubscriptionError::InsufficientFunds),
        code(SubscriptionError::PaymentFailed),
        code(SubscriptionError::BountyPaymentFailed),
    ];
    let mut deduped = codes.to_vec();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), codes.len());
}

#[test]
fn retryable_not_due_is_distinct_from_terminal_states() {
    assert_ne!(code(SubscriptionError::NotDue), code(SubscriptionError::Paused));
    assert_ne!(
        code(SubscriptionError::NotDue),
        code(SubscriptionError::NotSubscribed)
    );
    assert_ne!(
        code(SubscriptionError::NotDue),
        code(SubscriptionError::SubscriptionNotRegistered)
    );
}

#[test]
fn index_set_errors_map_cleanly() {
    assert_ne!(
        code(SubscriptionError::AlreadyPresent),
        code(SubscriptionError::NotPresent)
    );
    assert_ne!(
        code(SubscriptionError::IndexOutOfBounds),
        code(SubscriptionError::IndexFull)
    );
}

/// A deletion blocked by an unsupplied bounty account is not a registration
/// conflict; its error must tell the payee what to pass, not report a
/// duplicate bounty.
#[test]
fn missing_cascade_account_is_distinct_from_registration_conflict() {
    assert_ne!(
        code(SubscriptionError::BountyAccountRequired),
        code(SubscriptionError::RewardAlreadyRegistered)
    );

    let anchor_error: anchor_lang::error::Error = SubscriptionError::BountyAccountRequired.into();
    if let anchor_lang::error::Error::AnchorError(e) = anchor_error {
        assert_eq!(
            e.error_msg,
            "A bounty is registered for this subscription. Pass its account so deletion can close it."
        );
    } else {
        panic!("expected AnchorError variant");
    }
}

#[test]
fn not_due_message_tells_callers_to_retry() {
    let anchor_error: anchor_lang::error::Error = SubscriptionError::NotDue.into();
    if let anchor_lang::error::Error::AnchorError(e) = anchor_error {
        assert_eq!(e.error_msg, "Payment is not due yet. Retry after the next due time.");
    } else {
        panic!("expected AnchorError variant");
    }
}
