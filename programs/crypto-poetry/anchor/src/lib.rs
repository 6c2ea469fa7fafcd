use anchor_lang::prelude::*;

declare_id!("6cesC5Z7g527BeuDpDKyzP7rjgn17HfKEshspHXYFaUL");

pub mod error;
pub mod instructions;
pub mod poetry;
pub mod state;

pub use error::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod crypto_poetry {
    use super::*;

    /// Allocate a poem record owned by the signer, with an empty poem
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Overwrite the poem with a new one. Any signer may call this;
    /// only a locked record refuses.
    pub fn generate_poetry(ctx: Context<GeneratePoetry>) -> Result<()> {
        instructions::generate_poetry(ctx)
    }

    /// Owner-only: destroy the record and reclaim its rent
    pub fn close_poetry_account(ctx: Context<ClosePoetryAccount>) -> Result<()> {
        instructions::close_poetry_account(ctx)
    }

    /// Owner-only: stop any further regeneration
    pub fn lock_poetry_account(ctx: Context<LockPoetryAccount>) -> Result<()> {
        instructions::lock_poetry_account(ctx)
    }
}
