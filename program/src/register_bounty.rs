use anchor_lang::prelude::*;

use crate::constants::{BOUNTY_BOARD_SEED, BOUNTY_SEED, DIRECTORY_SEED, SUBSCRIPTION_SEED};
use crate::errors::SubscriptionError;
use crate::events::BountyRegistered;
use crate::state::{Bounty, BountyBoard, Directory, SubscriptionTerms};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct RegisterBountyArgs {
    /// Reward paid to whoever triggers a due charge, in the funding token's
    /// smallest unit
    pub reward: u64,
}

#[derive(Accounts)]
pub struct RegisterBounty<'info> {
    #[account(
        seeds = [DIRECTORY_SEED],
        bump = directory.bump
    )]
    pub directory: Account<'info, Directory>,

    /// Bounty board; only mutable through the directory that owns it
    #[account(
        mut,
        seeds = [BOUNTY_BOARD_SEED],
        bump = bounty_board.bump,
        constraint = bounty_board.directory == directory.key()
            @ SubscriptionError::Unauthorized
    )]
    pub bounty_board: Account<'info, BountyBoard>,

    /// Subscription the bounty pays for; the payee check is the directory's
    /// delegated authorization on the board's behalf
    #[account(
        seeds = [SUBSCRIPTION_SEED, &subscription.nonce.to_le_bytes()],
        bump = subscription.bump,
        has_one = payee @ SubscriptionError::Unauthorized
    )]
    pub subscription: Account<'info, SubscriptionTerms>,

    #[account(
        init,
        payer = payee,
        space = Bounty::SPACE,
        seeds = [BOUNTY_SEED, subscription.key().as_ref()],
        bump
    )]
    pub bounty: Account<'info, Bounty>,

    #[account(mut)]
    pub payee: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handler for registering a bounty
///
/// The reward is validated against the subscription amount here and on every
/// later mutation: a bounty can never promise more than the charge it pays
/// for, which keeps the caller incentive funded by the payee rather than the
/// subscriber.
pub fn handler(ctx: Context<RegisterBounty>, args: RegisterBountyArgs) -> Result<()> {
    require!(args.reward > 0, SubscriptionError::InvalidTerms);
    require!(
        args.reward <= ctx.accounts.subscription.amount,
        SubscriptionError::RewardExceedsAmount
    );

    let subscription_key = ctx.accounts.subscription.key();
    let bounty_board = &mut ctx.accounts.bounty_board;
    require!(
        !bounty_board.registered.contains(&subscription_key),
        SubscriptionError::RewardAlreadyRegistered
    );
    bounty_board.registered.add(subscription_key)?;

    let bounty = &mut ctx.accounts.bounty;
    bounty.subscription = subscription_key;
    bounty.reward = args.reward;
    bounty.bump = ctx.bumps.bounty;

    emit!(BountyRegistered {
        subscription: subscription_key,
        token: ctx.accounts.subscription.token,
        reward: args.reward,
    });

    msg!(
        "Bounty of {} registered for subscription {}",
        args.reward,
        subscription_key
    );

    Ok(())
}
