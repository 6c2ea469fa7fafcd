use anchor_lang::prelude::*;

use crate::error::PoetryError;

/// A single poem owned by the account that paid for it.
///
/// The runtime hands out a zeroed allocation before any instruction logic
/// runs, so `initialized` separates "reserved" from "written".
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct PoetryAccount {
    /// Creator of the record; the only key allowed to close or lock it
    pub owner: Pubkey,
    /// Latest generated poem, empty until the first generation
    pub poem: String,
    pub initialized: bool,
    /// Once set, the poem is frozen
    pub locked: bool,
}

impl PoetryAccount {
    /// Upper bound on the poem's UTF-8 length
    pub const MAX_POEM_LEN: usize = 352;

    /// discriminator + pubkey + (string prefix + poem) + bool + bool
    pub const LEN: usize = 8 + 32 + (4 + Self::MAX_POEM_LEN) + 1 + 1;

    pub fn create(&mut self, owner: Pubkey) -> Result<()> {
        require!(!self.initialized, PoetryError::AlreadyInitialized);

        self.owner = owner;
        self.poem = String::new();
        self.initialized = true;
        self.locked = false;
        Ok(())
    }

    /// Overwrites the poem. Anyone may regenerate; only the lock stops it.
    pub fn replace_poem(&mut self, poem: String) -> Result<()> {
        require!(self.initialized, PoetryError::NotInitialized);
        require!(!self.locked, PoetryError::AccountLocked);
        require!(
            poem.len() <= Self::MAX_POEM_LEN,
            PoetryError::PoemTooLong
        );

        self.poem = poem;
        Ok(())
    }

    pub fn ensure_closable_by(&self, caller: &Pubkey) -> Result<()> {
        self.ensure_owner(caller)
    }

    pub fn lock(&mut self, caller: &Pubkey) -> Result<()> {
        self.ensure_owner(caller)?;
        self.locked = true;
        Ok(())
    }

    /// Reads a record out of raw account data.
    ///
    /// Returns `None` for anything that is not a live record: empty data,
    /// data zeroed by a close, a foreign discriminator, or a reserved but
    /// never initialized allocation.
    pub fn fetch(data: &[u8]) -> Option<Self> {
        let mut buf = data;
        let record = Self::try_deserialize(&mut buf).ok()?;
        record.initialized.then_some(record)
    }

    fn ensure_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(self.initialized, PoetryError::NotInitialized);
        require_keys_eq!(self.owner, *caller, PoetryError::Unauthorized);
        Ok(())
    }
}
