use anchor_lang::prelude::*;

#[error_code]
pub enum PoetryError {
    #[msg("Poetry account is already initialized")]
    AlreadyInitialized,
    #[msg("Poetry account is not initialized")]
    NotInitialized,
    #[msg("Only the owner of the poetry account may do this")]
    Unauthorized,
    #[msg("This account is locked and cannot generate new poems")]
    AccountLocked,
    #[msg("Generated poem does not fit in the account")]
    PoemTooLong,
}
