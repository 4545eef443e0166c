use anchor_lang::prelude::*;

use crate::constants::{SUBSCRIBED_BY_SEED, SUBSCRIBER_SEED, SUBSCRIPTION_SEED};
use crate::errors::SubscriptionError;
use crate::events::Unsubscribed;
use crate::state::{SubscriberIndex, SubscriberState, SubscriptionTerms};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct UnsubscribeArgs {}

#[derive(Accounts)]
pub struct Unsubscribe<'info> {
    /// Subscription being left. Unsubscribe is deliberately not blocked by
    /// the pause flag so subscribers can always exit.
    #[account(
        seeds = [SUBSCRIPTION_SEED, &subscription.nonce.to_le_bytes()],
        bump = subscription.bump
    )]
    pub subscription: Account<'info, SubscriptionTerms>,

    /// Billing state to clear; closing it zeroes the schedule and refunds
    /// rent to the subscriber
    #[account(
        mut,
        close = subscriber,
        seeds = [SUBSCRIBER_SEED, subscription.key().as_ref(), subscriber.key().as_ref()],
        bump = subscriber_state.bump
    )]
    pub subscriber_state: Account<'info, SubscriberState>,

    #[account(
        mut,
        seeds = [SUBSCRIBED_BY_SEED, subscriber.key().as_ref()],
        bump = subscriber_index.bump
    )]
    pub subscriber_index: Account<'info, SubscriberIndex>,

    #[account(mut)]
    pub subscriber: Signer<'info>,
}

/// Handler for unsubscribing from a subscription
pub fn handler(ctx: Context<Unsubscribe>, _args: UnsubscribeArgs) -> Result<()> {
    require!(
        ctx.accounts.subscriber_state.next_payment_at != 0,
        SubscriptionError::NotSubscribed
    );

    ctx.accounts
        .subscriber_index
        .subscriptions
        .remove(&ctx.accounts.subscription.key())?;

    emit!(Unsubscribed {
        subscription: ctx.accounts.subscription.key(),
        payee: ctx.accounts.subscription.payee,
        subscriber: ctx.accounts.subscriber.key(),
    });

    msg!(
        "Subscriber {} unsubscribed from {}",
        ctx.accounts.subscriber.key(),
        ctx.accounts.subscription.key()
    );

    Ok(())
}
