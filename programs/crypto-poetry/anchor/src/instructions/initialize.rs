use anchor_lang::prelude::*;
use crate::state::PoetryAccount;

/// Creates an empty poem record owned by the paying signer.
///
/// `init` refuses an address that already holds an account; the
/// record's own flag guards the fields once the allocation exists.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let poetry_account = &mut ctx.accounts.poetry_account;
    poetry_account.create(ctx.accounts.user.key())?;

    msg!(
        "Poetry account {} created for {}",
        poetry_account.key(),
        poetry_account.owner
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = user,
        space = PoetryAccount::LEN
    )]
    pub poetry_account: Account<'info, PoetryAccount>,

    /// Pays for the allocation and becomes the owner
    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}
