use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::billing;
use crate::constants::{
    BOUNTY_BOARD_SEED, BOUNTY_SEED, DELEGATE_SEED, SUBSCRIBER_SEED, SUBSCRIPTION_SEED,
};
use crate::errors::SubscriptionError;
use crate::events::{BountyClaimed, PaymentProcessed};
use crate::state::{Bounty, BountyBoard, SubscriberState, SubscriptionTerms};
use crate::utils::{assert_delegate_approval, transfer_via_delegate};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ClaimBountyArgs {}

#[derive(Accounts)]
pub struct ClaimBounty<'info> {
    #[account(
        seeds = [BOUNTY_BOARD_SEED],
        bump = bounty_board.bump
    )]
    pub bounty_board: Account<'info, BountyBoard>,

    #[account(
        seeds = [SUBSCRIPTION_SEED, &subscription.nonce.to_le_bytes()],
        bump = subscription.bump
    )]
    pub subscription: Account<'info, SubscriptionTerms>,

    #[account(
        seeds = [BOUNTY_SEED, subscription.key().as_ref()],
        bump = bounty.bump
    )]
    pub bounty: Account<'info, Bounty>,

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

    /// Payee's token account: receives the charge and funds the reward
    #[account(
        mut,
        constraint = payee_token_account.owner == subscription.payee
            @ SubscriptionError::InvalidTokenAccount,
        constraint = payee_token_account.mint == subscription.token
            @ SubscriptionError::WrongMint
    )]
    pub payee_token_account: Account<'info, TokenAccount>,

    /// Claimer's token account the reward is paid to
    #[account(
        mut,
        constraint = claimer_token_account.owner == claimer.key()
            @ SubscriptionError::InvalidTokenAccount,
        constraint = claimer_token_account.mint == subscription.token
            @ SubscriptionError::WrongMint
    )]
    pub claimer_token_account: Account<'info, TokenAccount>,

    #[account(address = subscription.token @ SubscriptionError::WrongMint)]
    pub token: Account<'info, Mint>,

    /// Program PDA approved as delegate by both subscriber and payee
    /// CHECK: PDA derived from the program, used only as CPI signer
    #[account(
        seeds = [DELEGATE_SEED],
        bump
    )]
    pub program_delegate: UncheckedAccount<'info>,

    /// Whoever triggers the due charge and collects the reward
    pub claimer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Handler for claiming a bounty
///
/// Executes the underlying due charge exactly as `process_payment` would,
/// then pays the registered reward from the payee's pre-approved balance to
/// the claimer. The two transfers compose atomically: if either leg fails
/// the instruction reverts and neither takes effect, so racing claimers
/// cannot double-charge a cycle — the loser fails on `NotDue`.
pub fn handler(ctx: Context<ClaimBounty>, _args: ClaimBountyArgs) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let subscription_key = ctx.accounts.subscription.key();
    require!(
        ctx.accounts.bounty_board.registered.contains(&subscription_key),
        SubscriptionError::RewardNotRegistered
    );

    billing::assert_chargeable(
        &ctx.accounts.subscription,
        &ctx.accounts.subscriber_state,
        now,
    )?;

    let amount = ctx.accounts.subscription.amount;
    let reward = ctx.accounts.bounty.reward;

    // a payee claiming their own bounty keeps the reward out of the charge,
    // so no second transfer (or payee approval) is needed
    let reward_transfer_needed = billing::reward_transfer_needed(
        &ctx.accounts.payee_token_account.key(),
        &ctx.accounts.claimer_token_account.key(),
    );

    assert_delegate_approval(
        &ctx.accounts.subscriber_token_account,
        &ctx.accounts.program_delegate.key(),
        amount,
    )?;
    require!(
        ctx.accounts.subscriber_token_account.amount >= amount,
        SubscriptionError::InsufficientFunds
    );
    if reward_transfer_needed {
        assert_delegate_approval(
            &ctx.accounts.payee_token_account,
            &ctx.accounts.program_delegate.key(),
            reward,
        )?;
    }

    // effects before interactions: the advanced schedule is what any
    // reentrant or racing caller observes
    let next_payment_at = billing::advance_schedule(
        ctx.accounts.subscriber_state.next_payment_at,
        ctx.accounts.subscription.interval,
    )?;
    ctx.accounts.subscriber_state.next_payment_at = next_payment_at;

    // charge leg: subscriber -> payee
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

    // reward leg: payee -> claimer, funded independently of the subscriber
    if reward_transfer_needed {
        transfer_via_delegate(
            &ctx.accounts.token_program,
            &ctx.accounts.payee_token_account,
            &mut ctx.accounts.claimer_token_account,
            &ctx.accounts.token,
            &ctx.accounts.program_delegate,
            ctx.bumps.program_delegate,
            reward,
            SubscriptionError::BountyPaymentFailed,
        )?;
    }

    emit!(PaymentProcessed {
        subscription: subscription_key,
        subscriber: ctx.accounts.subscriber_state.subscriber,
        next_payment_at,
    });

    emit!(BountyClaimed {
        subscription: subscription_key,
        subscriber: ctx.accounts.subscriber_state.subscriber,
        token: ctx.accounts.subscription.token,
        reward,
    });

    msg!(
        "Bounty of {} claimed by {} for charging subscription {}",
        reward,
        ctx.accounts.claimer.key(),
        subscription_key
    );

    Ok(())
}
