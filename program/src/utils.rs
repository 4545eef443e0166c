use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::DELEGATE_SEED;
use crate::errors::SubscriptionError;

/// Validates that a token account carries an active approval for the
/// program's global delegate PDA covering at least `required` units.
///
/// The delegated amount read here may already be stale by the time the
/// transfer CPI executes (the owner can race an `approve`), so callers must
/// still treat the transfer itself as fallible. This check only exists to
/// surface `InsufficientAllowance` instead of an opaque token-program error.
///
/// # Errors
/// - `Unauthorized` if the account's delegate is not the program delegate
///   (revoked, never approved, or approved to someone else)
/// - `InsufficientAllowance` if the delegated amount is below `required`
pub fn assert_delegate_approval(
    token_account: &TokenAccount,
    program_delegate: &Pubkey,
    required: u64,
) -> Result<()> {
    let actual_delegate = Option::<Pubkey>::from(token_account.delegate);
    require!(
        actual_delegate == Some(*program_delegate),
        SubscriptionError::Unauthorized
    );
    require!(
        token_account.delegated_amount >= required,
        SubscriptionError::InsufficientAllowance
    );
    Ok(())
}

/// Pulls `amount` from `from` to `to` through the program's delegate PDA and
/// verifies the destination balance actually grew by `amount`.
///
/// Some tokens report success without moving funds, so the boolean-style
/// success signal of the transfer is not trusted on its own: the destination
/// account is reloaded after the CPI and the observed balance delta must
/// match. Any shortfall fails the instruction with `failure`, which reverts
/// every state change in the transaction.
///
/// # Errors
/// - `failure` if the CPI fails or the destination delta is not `amount`
/// - `ArithmeticError` if the expected destination balance overflows
pub fn transfer_via_delegate<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    to: &mut Account<'info, TokenAccount>,
    mint: &Account<'info, Mint>,
    program_delegate: &UncheckedAccount<'info>,
    delegate_bump: u8,
    amount: u64,
    failure: SubscriptionError,
) -> Result<()> {
    let expected = to
        .amount
        .checked_add(amount)
        .ok_or(SubscriptionError::ArithmeticError)?;

    let delegate_seeds: &[&[&[u8]]] = &[&[DELEGATE_SEED, &[delegate_bump]]];

    let transfer = TransferChecked {
        from: from.to_account_info(),
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority: program_delegate.to_account_info(),
    };

    token::transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            transfer,
            delegate_seeds,
        ),
        amount,
        mint.decimals,
    )
    .map_err(|_| failure)?;

    to.reload()?;
    if to.amount != expected {
        return Err(failure.into());
    }

    Ok(())
}
