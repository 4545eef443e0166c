use anchor_lang::prelude::*;

use crate::billing;
use crate::constants::{SUBSCRIBED_BY_SEED, SUBSCRIBER_SEED, SUBSCRIPTION_SEED};
use crate::errors::SubscriptionError;
use crate::events::Subscribed;
use crate::state::{SubscriberIndex, SubscriberState, SubscriptionTerms};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct SubscribeArgs {}

#[derive(Accounts)]
pub struct Subscribe<'info> {
    #[account(
        seeds = [SUBSCRIPTION_SEED, &subscription.nonce.to_le_bytes()],
        bump = subscription.bump,
        constraint = !subscription.paused @ SubscriptionError::Paused
    )]
    pub subscription: Account<'info, SubscriptionTerms>,

    /// Billing state for this (subscription, subscriber) pair.
    ///
    /// `init_if_needed` so a subscriber who unsubscribed (account closed)
    /// can subscribe again; the zero-schedule check in the handler rejects
    /// double subscription.
    #[account(
        init_if_needed,
        payer = subscriber,
        space = SubscriberState::SPACE,
        seeds = [SUBSCRIBER_SEED, subscription.key().as_ref(), subscriber.key().as_ref()],
        bump
    )]
    pub subscriber_state: Account<'info, SubscriberState>,

    /// The subscriber's `subscribed_by` index, created lazily on first use
    #[account(
        init_if_needed,
        payer = subscriber,
        space = SubscriberIndex::SPACE,
        seeds = [SUBSCRIBED_BY_SEED, subscriber.key().as_ref()],
        bump
    )]
    pub subscriber_index: Account<'info, SubscriberIndex>,

    #[account(mut)]
    pub subscriber: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handler for subscribing to a subscription
///
/// Initializes the billing schedule with `next_payment_at = now`, making the
/// first charge immediately due, and indexes the subscription into the
/// subscriber's `subscribed_by` set.
pub fn handler(ctx: Context<Subscribe>, _args: SubscribeArgs) -> Result<()> {
    let subscriber_state = &mut ctx.accounts.subscriber_state;
    billing::assert_not_subscribed(subscriber_state.next_payment_at)?;

    let clock = Clock::get()?;

    subscriber_state.subscription = ctx.accounts.subscription.key();
    subscriber_state.subscriber = ctx.accounts.subscriber.key();
    subscriber_state.next_payment_at = clock.unix_timestamp;
    subscriber_state.bump = ctx.bumps.subscriber_state;

    let subscriber_index = &mut ctx.accounts.subscriber_index;
    subscriber_index.subscriber = ctx.accounts.subscriber.key();
    subscriber_index.bump = ctx.bumps.subscriber_index;
    subscriber_index
        .subscriptions
        .add(ctx.accounts.subscription.key())?;

    emit!(Subscribed {
        subscription: ctx.accounts.subscription.key(),
        payee: ctx.accounts.subscription.payee,
        subscriber: ctx.accounts.subscriber.key(),
    });

    msg!(
        "Subscriber {} subscribed to {}, first payment due {}",
        ctx.accounts.subscriber.key(),
        ctx.accounts.subscription.key(),
        clock.unix_timestamp
    );

    Ok(())
}
