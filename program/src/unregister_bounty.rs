use anchor_lang::prelude::*;

use crate::constants::{BOUNTY_BOARD_SEED, BOUNTY_SEED, DIRECTORY_SEED, SUBSCRIPTION_SEED};
use crate::errors::SubscriptionError;
use crate::events::BountyUnregistered;
use crate::state::{Bounty, BountyBoard, Directory, SubscriptionTerms};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct UnregisterBountyArgs {}

#[derive(Accounts)]
pub struct UnregisterBounty<'info> {
    #[account(
        seeds = [DIRECTORY_SEED],
        bump = directory.bump
    )]
    pub directory: Account<'info, Directory>,

    #[account(
        mut,
        seeds = [BOUNTY_BOARD_SEED],
        bump = bounty_board.bump,
        constraint = bounty_board.directory == directory.key()
            @ SubscriptionError::Unauthorized
    )]
    pub bounty_board: Account<'info, BountyBoard>,

    #[account(
        seeds = [SUBSCRIPTION_SEED, &subscription.nonce.to_le_bytes()],
        bump = subscription.bump,
        has_one = payee @ SubscriptionError::Unauthorized
    )]
    pub subscription: Account<'info, SubscriptionTerms>,

    #[account(
        mut,
        close = payee,
        seeds = [BOUNTY_SEED, subscription.key().as_ref()],
        bump = bounty.bump
    )]
    pub bounty: Account<'info, Bounty>,

    #[account(mut)]
    pub payee: Signer<'info>,
}

/// Handler for unregistering a bounty
///
/// Removes the board entry and closes the bounty account. A later
/// `register_bounty` for the same subscription starts from a clean slate.
pub fn handler(ctx: Context<UnregisterBounty>, _args: UnregisterBountyArgs) -> Result<()> {
    let subscription_key = ctx.accounts.subscription.key();

    let bounty_board = &mut ctx.accounts.bounty_board;
    require!(
        bounty_board.registered.contains(&subscription_key),
        SubscriptionError::RewardNotRegistered
    );
    bounty_board.registered.remove(&subscription_key)?;

    emit!(BountyUnregistered {
        subscription: subscription_key,
    });

    msg!("Bounty unregistered for subscription {}", subscription_key);

    Ok(())
}
