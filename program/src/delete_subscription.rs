use anchor_lang::prelude::*;

use crate::constants::{
    BOUNTY_BOARD_SEED, BOUNTY_SEED, CREATED_BY_SEED, DIRECTORY_SEED, SUBSCRIPTION_SEED,
};
use crate::errors::SubscriptionError;
use crate::events::{BountyUnregistered, SubscriptionDeleted};
use crate::state::{Bounty, BountyBoard, Directory, PayeeIndex, SubscriptionTerms};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DeleteSubscriptionArgs {}

#[derive(Accounts)]
pub struct DeleteSubscription<'info> {
    #[account(
        seeds = [DIRECTORY_SEED],
        bump = directory.bump
    )]
    pub directory: Account<'info, Directory>,

    #[account(
        mut,
        close = payee,
        seeds = [SUBSCRIPTION_SEED, &subscription.nonce.to_le_bytes()],
        bump = subscription.bump,
        has_one = payee @ SubscriptionError::Unauthorized
    )]
    pub subscription: Account<'info, SubscriptionTerms>,

    #[account(
        mut,
        seeds = [CREATED_BY_SEED, payee.key().as_ref()],
        bump = payee_index.bump
    )]
    pub payee_index: Account<'info, PayeeIndex>,

    /// Bounty board, checked against the directory that owns it
    #[account(
        mut,
        seeds = [BOUNTY_BOARD_SEED],
        bump = bounty_board.bump,
        constraint = bounty_board.directory == directory.key()
            @ SubscriptionError::Unauthorized
    )]
    pub bounty_board: Account<'info, BountyBoard>,

    /// Active bounty entry for this subscription, if one exists; closed as
    /// part of the deletion cascade
    #[account(
        mut,
        close = payee,
        seeds = [BOUNTY_SEED, subscription.key().as_ref()],
        bump = bounty.bump
    )]
    pub bounty: Option<Account<'info, Bounty>>,

    #[account(mut)]
    pub payee: Signer<'info>,
}

/// Handler for deleting a subscription
///
/// Removes the terms record, deindexes it from the payee's `created_by` set,
/// and cascades deletion of any registered bounty so the board never carries
/// an entry for an identifier the directory no longer knows.
pub fn handler(ctx: Context<DeleteSubscription>, _args: DeleteSubscriptionArgs) -> Result<()> {
    let subscription_key = ctx.accounts.subscription.key();
    let payee_key = ctx.accounts.payee.key();

    // the created_by index is authoritative for registration
    require!(
        ctx.accounts
            .payee_index
            .subscriptions
            .contains(&subscription_key),
        SubscriptionError::SubscriptionNotRegistered
    );
    ctx.accounts
        .payee_index
        .subscriptions
        .remove(&subscription_key)?;

    let bounty_board = &mut ctx.accounts.bounty_board;
    if ctx.accounts.bounty.is_some() {
        bounty_board.registered.remove(&subscription_key)?;

        emit!(BountyUnregistered {
            subscription: subscription_key,
        });
    } else {
        // a registered bounty must be passed in so the cascade can close it
        require!(
            !bounty_board.registered.contains(&subscription_key),
            SubscriptionError::BountyAccountRequired
        );
    }

    emit!(SubscriptionDeleted {
        subscription: subscription_key,
        payee: payee_key,
    });

    msg!("Subscription {} deleted by payee {}", subscription_key, payee_key);

    Ok(())
}
