use anchor_lang::prelude::*;

use crate::constants::{BOUNTY_SEED, SUBSCRIPTION_SEED};
use crate::errors::SubscriptionError;
use crate::events::BountyUpdated;
use crate::state::{Bounty, SubscriptionTerms};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct UpdateBountyArgs {
    /// New reward amount
    pub reward: u64,
}

#[derive(Accounts)]
pub struct UpdateBounty<'info> {
    #[account(
        seeds = [SUBSCRIPTION_SEED, &subscription.nonce.to_le_bytes()],
        bump = subscription.bump,
        has_one = payee @ SubscriptionError::Unauthorized
    )]
    pub subscription: Account<'info, SubscriptionTerms>,

    #[account(
        mut,
        seeds = [BOUNTY_SEED, subscription.key().as_ref()],
        bump = bounty.bump
    )]
    pub bounty: Account<'info, Bounty>,

    pub payee: Signer<'info>,
}

/// Handler for changing a registered bounty's reward
///
/// The subscription amount is immutable, so re-checking `reward <= amount`
/// here keeps the registration-time invariant true for the bounty's whole
/// lifetime.
pub fn handler(ctx: Context<UpdateBounty>, args: UpdateBountyArgs) -> Result<()> {
    require!(args.reward > 0, SubscriptionError::InvalidTerms);
    require!(
        args.reward <= ctx.accounts.subscription.amount,
        SubscriptionError::RewardExceedsAmount
    );

    let bounty = &mut ctx.accounts.bounty;
    bounty.reward = args.reward;

    emit!(BountyUpdated {
        subscription: ctx.accounts.subscription.key(),
        reward: args.reward,
    });

    msg!(
        "Bounty for subscription {} updated to {}",
        ctx.accounts.subscription.key(),
        args.reward
    );

    Ok(())
}
