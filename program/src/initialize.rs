use anchor_lang::prelude::*;

use crate::constants::{BOUNTY_BOARD_SEED, DIRECTORY_SEED};
use crate::indexed_set::IndexedSet;
use crate::state::{BountyBoard, Directory};

/// Arguments for initializing the protocol
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeArgs {}

/// Accounts required to initialize the directory and bounty board
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = Directory::SPACE,
        seeds = [DIRECTORY_SEED],
        bump
    )]
    pub directory: Account<'info, Directory>,

    #[account(
        init,
        payer = authority,
        space = BountyBoard::SPACE,
        seeds = [BOUNTY_BOARD_SEED],
        bump
    )]
    pub bounty_board: Account<'info, BountyBoard>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handler for initializing the protocol
///
/// Creates the singleton directory and bounty board PDAs and hands the board
/// to the directory. This wiring happens exactly once (`init` fails on
/// re-initialization), before any bounty operation is reachable, and is the
/// only assignment of the board's authority.
pub fn handler(ctx: Context<Initialize>, _args: InitializeArgs) -> Result<()> {
    let directory = &mut ctx.accounts.directory;
    directory.authority = ctx.accounts.authority.key();
    directory.bounty_board = ctx.accounts.bounty_board.key();
    directory.subscriptions_created = 0;
    directory.bump = ctx.bumps.directory;

    let bounty_board = &mut ctx.accounts.bounty_board;
    bounty_board.directory = directory.key();
    bounty_board.registered = IndexedSet::default();
    bounty_board.bump = ctx.bumps.bounty_board;

    msg!(
        "Protocol initialized: directory {} owns bounty board {}",
        directory.key(),
        bounty_board.key()
    );

    Ok(())
}
