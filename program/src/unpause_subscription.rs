use anchor_lang::prelude::*;

use crate::constants::SUBSCRIPTION_SEED;
use crate::errors::SubscriptionError;
use crate::events::SubscriptionUnpaused;
use crate::state::SubscriptionTerms;

/// Arguments for unpausing a subscription
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct UnpauseSubscriptionArgs {}

/// Accounts required for unpausing a subscription
#[derive(Accounts)]
pub struct UnpauseSubscription<'info> {
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

/// Handler for unpausing a subscription
///
/// Re-enables `subscribe` and charge operations. Schedules are not shifted
/// by a pause: a charge that came due while paused is immediately chargeable
/// again after unpausing.
pub fn handler(ctx: Context<UnpauseSubscription>, _args: UnpauseSubscriptionArgs) -> Result<()> {
    let subscription = &mut ctx.accounts.subscription;
    subscription.paused = false;

    emit!(SubscriptionUnpaused {
        subscription: subscription.key(),
    });

    msg!("Subscription {} unpaused", subscription.key());

    Ok(())
}
