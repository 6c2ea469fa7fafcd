use anchor_lang::prelude::*;
use crate::poetry::{generate_poem, SeedStream};
use crate::state::PoetryAccount;

/// Replaces the stored poem with a freshly generated one.
///
/// Open to any signer; only a lock set by the owner stops regeneration.
pub fn generate_poetry(ctx: Context<GeneratePoetry>) -> Result<()> {
    let clock = Clock::get()?;
    let poetry_account = &mut ctx.accounts.poetry_account;

    let mut rng = SeedStream::new(clock.slot, clock.unix_timestamp, &poetry_account.key());
    poetry_account.replace_poem(generate_poem(&mut rng))?;

    msg!(
        "Poem regenerated for {} by {} ({} bytes)",
        poetry_account.key(),
        ctx.accounts.caller.key(),
        poetry_account.poem.len()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct GeneratePoetry<'info> {
    #[account(mut)]
    pub poetry_account: Account<'info, PoetryAccount>,

    pub caller: Signer<'info>,
}
