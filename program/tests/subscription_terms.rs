//! Boundary tests for subscription-terms validation

use recur_protocol::billing;
use recur_protocol::constants::MAX_INTERVAL_SECS;
use recur_protocol::errors::SubscriptionError;

#[test]
fn hundred_day_interval_is_accepted() {
    assert_eq!(MAX_INTERVAL_SECS, 8_640_000);
    billing::validate_terms(1, MAX_INTERVAL_SECS).unwrap();
}

#[test]
fn interval_one_second_past_the_cap_is_rejected() {
    let err = billing::validate_terms(1, MAX_INTERVAL_SECS + 1).unwrap_err();
    assert_eq!(err, SubscriptionError::InvalidTerms.into());
}

#[test]
fn zero_amount_is_rejected() {
    let err = billing::validate_terms(0, 3_600).unwrap_err();
    assert_eq!(err, SubscriptionError::InvalidTerms.into());
}

#[test]
fn zero_interval_is_rejected() {
    let err = billing::validate_terms(10, 0).unwrap_err();
    assert_eq!(err, SubscriptionError::InvalidTerms.into());
}

#[test]
fn minimal_terms_are_accepted() {
    billing::validate_terms(1, 1).unwrap();
}
