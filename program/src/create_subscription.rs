use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::billing;
use crate::constants::{CREATED_BY_SEED, DIRECTORY_SEED, SUBSCRIPTION_SEED};
use crate::errors::SubscriptionError;
use crate::events::SubscriptionCreated;
use crate::state::{Directory, PayeeIndex, SubscriptionTerms};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CreateSubscriptionArgs {
    /// Per-cycle charge in the funding token's smallest unit
    pub amount: u64,
    /// Seconds between charges
    pub interval: u64,
}

#[derive(Accounts)]
pub struct CreateSubscription<'info> {
    /// Directory singleton; its nonce allocates the new identifier
    #[account(
        mut,
        seeds = [DIRECTORY_SEED],
        bump = directory.bump
    )]
    pub directory: Account<'info, Directory>,

    #[account(
        init,
        payer = payee,
        space = SubscriptionTerms::SPACE,
        seeds = [SUBSCRIPTION_SEED, &directory.subscriptions_created.to_le_bytes()],
        bump
    )]
    pub subscription: Account<'info, SubscriptionTerms>,

    /// The payee's `created_by` index, created lazily on first use
    #[account(
        init_if_needed,
        payer = payee,
        space = PayeeIndex::SPACE,
        seeds = [CREATED_BY_SEED, payee.key().as_ref()],
        bump
    )]
    pub payee_index: Account<'info, PayeeIndex>,

    /// Funding token mint. Deserializing as a `Mint` guarantees the token
    /// reference is a real, initialized mint rather than a null address.
    pub token: Account<'info, Mint>,

    #[account(mut)]
    pub payee: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handler for creating a subscription
///
/// Allocates a fresh identifier from the directory nonce, validates the
/// terms, stores them with the caller as payee, and indexes the new
/// subscription into the payee's `created_by` set.
pub fn handler(ctx: Context<CreateSubscription>, args: CreateSubscriptionArgs) -> Result<()> {
    billing::validate_terms(args.amount, args.interval)?;

    let nonce = ctx.accounts.directory.subscriptions_created;

    let subscription = &mut ctx.accounts.subscription;
    subscription.payee = ctx.accounts.payee.key();
    subscription.token = ctx.accounts.token.key();
    subscription.amount = args.amount;
    subscription.interval = args.interval;
    subscription.paused = false;
    subscription.nonce = nonce;
    subscription.bump = ctx.bumps.subscription;

    let payee_index = &mut ctx.accounts.payee_index;
    payee_index.payee = ctx.accounts.payee.key();
    payee_index.bump = ctx.bumps.payee_index;
    payee_index.subscriptions.add(subscription.key())?;

    ctx.accounts.directory.subscriptions_created = nonce
        .checked_add(1)
        .ok_or(SubscriptionError::ArithmeticError)?;

    emit!(SubscriptionCreated {
        subscription: subscription.key(),
        payee: ctx.accounts.payee.key(),
        token: ctx.accounts.token.key(),
        amount: args.amount,
        interval: args.interval,
    });

    msg!(
        "Subscription {} created by payee {}",
        subscription.key(),
        ctx.accounts.payee.key()
    );

    Ok(())
}
