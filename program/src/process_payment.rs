use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::billing;
use crate::constants::{DELEGATE_SEED, SUBSCRIBER_SEED, SUBSCRIPTION_SEED};
use crate::errors::SubscriptionError;
use crate::events::PaymentProcessed;
use crate::state::{SubscriberState, SubscriptionTerms};
use crate::utils::{assert_delegate_approval, transfer_via_delegate};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ProcessPaymentArgs {}

#[derive(Accounts)]
pub struct ProcessPayment<'info> {
    #[account(
        seeds = [SUBSCRIPTION_SEED, &subscription.nonce.to_le_bytes()],
        bump = subscription.bump
    )]
    pub subscription: Account<'info, SubscriptionTerms>,

    #[account(
        mut,
        seeds = [
            SUBSCRIBER_SEED,
            subscription.key().as_ref(),
            subscriber_state.subscriber.as_ref()
        ],
        bump = subscriber_state.bump
    )]
    pub subscriber_state: Account<'info, SubscriberState>,

    /// Subscriber's funding token account the charge is pulled from
    #[account(
        mut,
        constraint = subscriber_token_account.owner == subscriber_state.subscriber
            @ SubscriptionError::InvalidTokenAccount,
        constraint = subscriber_token_account.mint == subscription.token
            @ SubscriptionError::WrongMint
    )]
    pub subscriber_token_account: Account<'info, TokenAccount>,

    /// Payee's token account the charge is delivered to
    #[account(
        mut,
        constraint = payee_token_account.owner == subscription.payee
            @ SubscriptionError::InvalidTokenAccount,
        constraint = payee_token_account.mint == subscription.token
            @ SubscriptionError::WrongMint
    )]
    pub payee_token_account: Account<'info, TokenAccount>,

    #[account(address = subscription.token @ SubscriptionError::WrongMint)]
    pub token: Account<'info, Mint>,

    /// Program PDA the subscriber approved as transfer delegate
    /// CHECK: PDA derived from the program, used only as CPI signer
    #[account(
        seeds = [DELEGATE_SEED],
        bump
    )]
    pub program_delegate: UncheckedAccount<'info>,

    /// Whoever triggers the due charge; any signer is accepted
    pub executor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Handler for executing a due charge
///
/// Callable by anyone once `next_payment_at` has passed. Pulls `amount` from
/// the subscriber to the payee through the program delegate and advances the
/// schedule by one interval from the previous due time.
///
/// The schedule is advanced before the token CPI so any reentrant call
/// observes an already-advanced `next_payment_at`; a failed transfer reverts
/// the whole instruction, schedule included.
pub fn handler(ctx: Context<ProcessPayment>, _args: ProcessPaymentArgs) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    billing::assert_chargeable(
        &ctx.accounts.subscription,
        &ctx.accounts.subscriber_state,
        now,
    )?;

    let amount = ctx.accounts.subscription.amount;

    assert_delegate_approval(
        &ctx.accounts.subscriber_token_account,
        &ctx.accounts.program_delegate.key(),
        amount,
    )?;
    require!(
        ctx.accounts.subscriber_token_account.amount >= amount,
        SubscriptionError::InsufficientFunds
    );

    let next_payment_at = billing::advance_schedule(
        ctx.accounts.subscriber_state.next_payment_at,
        ctx.accounts.subscription.interval,
    )?;
    ctx.accounts.subscriber_state.next_payment_at = next_payment_at;

    transfer_via_delegate(
        &ctx.accounts.token_program,
        &ctx.accounts.subscriber_token_account,
        &mut ctx.accounts.payee_token_account,
        &ctx.accounts.token,
        &ctx.accounts.program_delegate,
        ctx.bumps.program_delegate,
        amount,
        SubscriptionError::PaymentFailed,
    )?;

    emit!(PaymentProcessed {
        subscription: ctx.accounts.subscription.key(),
        subscriber: ctx.accounts.subscriber_state.subscriber,
        next_payment_at,
    });

    msg!(
        "Charged {} from {} for subscription {}, next payment due {}",
        amount,
        ctx.accounts.subscriber_state.subscriber,
        ctx.accounts.subscription.key(),
        next_payment_at
    );

    Ok(())
}
