//! Decentralized Recurring-Payment Protocol
//!
//! A Solana program implementing trust-minimized recurring payments. Payees
//! publish subscription terms (token, amount, billing interval), subscribers
//! opt in by approving a program-owned transfer delegate, and anyone may
//! trigger a due charge — optionally collecting a payee-funded bounty — so
//! no trusted operator has to run a billing cron job.
//!
//! ## Core Features
//! - Directory of subscription terms with payee-administered lifecycle
//!   (create, pause/unpause, delete with bounty cascade)
//! - Per-subscriber billing schedules with drift-free interval advancement
//! - Permissionless charge execution via delegate-based token pulls
//! - Payee-funded bounties rewarding whoever executes a due charge
//! - Enumerable payee and subscriber indices with swap-remove bookkeeping

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(unexpected_cfgs)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::needless_pass_by_value)] // Anchor handlers must take owned Context by design
#![allow(clippy::unnecessary_wraps)] // Anchor handlers return Result<()> for consistency

use anchor_lang::prelude::*;

pub mod billing;
mod claim_bounty;
pub mod constants;
mod create_subscription;
mod delete_subscription;
pub mod errors;
pub mod events;
pub mod indexed_set;
mod initialize;
mod pause_subscription;
mod process_payment;
mod register_bounty;
pub mod state;
mod subscribe;
mod unpause_subscription;
mod unregister_bounty;
mod unsubscribe;
mod update_bounty;
pub mod utils;

use claim_bounty::*;
use create_subscription::*;
use delete_subscription::*;
use initialize::*;
use pause_subscription::*;
use process_payment::*;
use register_bounty::*;
use subscribe::*;
use unpause_subscription::*;
use unregister_bounty::*;
use unsubscribe::*;
use update_bounty::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod recur {
    use super::*;

    /// Initialize the subscription directory and bounty board
    ///
    /// Wires the bounty board's authority to the directory. This happens
    /// exactly once, before any bounty operation is reachable.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The directory or bounty board account already exists
    pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
        initialize::handler(ctx, args)
    }

    /// Create a subscription with the caller as payee
    ///
    /// Allocates a fresh identifier, stores the terms, and indexes the
    /// subscription into the payee's `created_by` set.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - Interval is zero or exceeds 100 days
    /// - The payee's index is at capacity
    pub fn create_subscription(
        ctx: Context<CreateSubscription>,
        args: CreateSubscriptionArgs,
    ) -> Result<()> {
        create_subscription::handler(ctx, args)
    }

    /// Delete a subscription and cascade any registered bounty
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the subscription's payee
    /// - A registered bounty exists but was not passed for the cascade
    pub fn delete_subscription(
        ctx: Context<DeleteSubscription>,
        args: DeleteSubscriptionArgs,
    ) -> Result<()> {
        delete_subscription::handler(ctx, args)
    }

    /// Pause a subscription, blocking subscribe and charge operations
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the subscription's payee
    pub fn pause_subscription(
        ctx: Context<PauseSubscription>,
        args: PauseSubscriptionArgs,
    ) -> Result<()> {
        pause_subscription::handler(ctx, args)
    }

    /// Unpause a subscription
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the subscription's payee
    pub fn unpause_subscription(
        ctx: Context<UnpauseSubscription>,
        args: UnpauseSubscriptionArgs,
    ) -> Result<()> {
        unpause_subscription::handler(ctx, args)
    }

    /// Subscribe the caller to a subscription
    ///
    /// Sets the first due time to now; the first charge is immediately
    /// executable.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The subscription is paused
    /// - The caller is already subscribed
    /// - The subscriber's index is at capacity
    pub fn subscribe(ctx: Context<Subscribe>, args: SubscribeArgs) -> Result<()> {
        subscribe::handler(ctx, args)
    }

    /// Unsubscribe the caller from a subscription
    ///
    /// Allowed while the subscription is paused.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The caller is not subscribed
    pub fn unsubscribe(ctx: Context<Unsubscribe>, args: UnsubscribeArgs) -> Result<()> {
        unsubscribe::handler(ctx, args)
    }

    /// Execute a due charge for a subscriber; callable by anyone
    ///
    /// # Errors
    /// Returns an error if:
    /// - The subscription is paused
    /// - The subscriber is not subscribed or the charge is not yet due
    /// - The delegate allowance or subscriber balance is insufficient
    /// - The token transfer fails or moves less than the full amount
    pub fn process_payment(
        ctx: Context<ProcessPayment>,
        args: ProcessPaymentArgs,
    ) -> Result<()> {
        process_payment::handler(ctx, args)
    }

    /// Register a bounty rewarding whoever executes this subscription's
    /// due charges
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the subscription's payee
    /// - Reward is zero or exceeds the subscription amount
    /// - A bounty is already registered
    pub fn register_bounty(
        ctx: Context<RegisterBounty>,
        args: RegisterBountyArgs,
    ) -> Result<()> {
        register_bounty::handler(ctx, args)
    }

    /// Change a registered bounty's reward
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the subscription's payee
    /// - Reward is zero or exceeds the subscription amount
    pub fn update_bounty(ctx: Context<UpdateBounty>, args: UpdateBountyArgs) -> Result<()> {
        update_bounty::handler(ctx, args)
    }

    /// Unregister a bounty and close its entry
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the subscription's payee
    /// - No bounty is registered
    pub fn unregister_bounty(
        ctx: Context<UnregisterBounty>,
        args: UnregisterBountyArgs,
    ) -> Result<()> {
        unregister_bounty::handler(ctx, args)
    }

    /// Execute a due charge and collect the registered bounty
    ///
    /// The charge and the reward payout compose atomically; exactly one
    /// caller can claim per due cycle.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No bounty is registered
    /// - The charge preconditions fail (paused, not subscribed, not due)
    /// - Either the charge or the reward transfer fails
    pub fn claim_bounty(ctx: Context<ClaimBounty>, args: ClaimBountyArgs) -> Result<()> {
        claim_bounty::handler(ctx, args)
    }
}
