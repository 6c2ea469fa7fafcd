use anchor_lang::prelude::*;
use crate::error::PoetryError;
use crate::state::PoetryAccount;

pub fn close_poetry_account(ctx: Context<ClosePoetryAccount>) -> Result<()> {
    let poetry_account = &ctx.accounts.poetry_account;
    poetry_account.ensure_closable_by(&ctx.accounts.owner.key())?;

    // The close constraint zeroes the data, hands the account back to the
    // system program and refunds every lamport to the owner on exit.
    msg!(
        "Poetry account {} closed, rent returned to {}",
        poetry_account.key(),
        ctx.accounts.owner.key()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct ClosePoetryAccount<'info> {
    #[account(
        mut,
        has_one = owner @ PoetryError::Unauthorized,
        close = owner
    )]
    pub poetry_account: Account<'info, PoetryAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,
}
