use anchor_lang::prelude::*;
use crate::error::PoetryError;
use crate::state::PoetryAccount;

/// Freezes the current poem. Closing stays possible.
pub fn lock_poetry_account(ctx: Context<LockPoetryAccount>) -> Result<()> {
    let poetry_account = &mut ctx.accounts.poetry_account;
    poetry_account.lock(&ctx.accounts.owner.key())?;

    msg!("Poetry account {} locked", poetry_account.key());
    Ok(())
}

#[derive(Accounts)]
pub struct LockPoetryAccount<'info> {
    #[account(
        mut,
        has_one = owner @ PoetryError::Unauthorized
    )]
    pub poetry_account: Account<'info, PoetryAccount>,

    pub owner: Signer<'info>,
}
