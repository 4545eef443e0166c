use anchor_lang::prelude::*;

use crate::constants::SUBSCRIPTION_SEED;
use crate::errors::SubscriptionError;
use crate::events::SubscriptionPaused;
use crate::state::SubscriptionTerms;

/// Arguments for pausing a subscription
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct PauseSubscriptionArgs {}

/// Accounts required for pausing a subscription
#[derive(Accounts)]
pub struct PauseSubscription<'info> {
    #[account(
        mut,
        seeds = [SUBSCRIPTION_SEED, &subscription.nonce.to_le_bytes()],
        bump = subscription.bump,
        has_one = payee @ SubscriptionError::Unauthorized
    )]
    pub subscription: Account<'info, SubscriptionTerms>,

    /// Subscription payee (must sign)
    pub payee: Signer<'info>,
}

/// Handler for pausing a subscription
///
/// While paused, `subscribe` and charge operations against this subscription
/// fail with `Paused`. Unsubscribe stays available so subscribers are never
/// locked in.
pub fn handler(ctx: Context<PauseSubscription>, _args: PauseSubscriptionArgs) -> Result<()> {
    let subscription = &mut ctx.accounts.subscription;
    subscription.paused = true;

    emit!(SubscriptionPaused {
        subscription: subscription.key(),
    });

    msg!("Subscription {} paused", subscription.key());

    Ok(())
}
