//! # State Module
//!
//! This module contains the account structures and seed definitions
//! for the PDA counter program.

use anchor_lang::prelude::*;

use crate::errors::CounterError;

/// Seed of the singleton global counter.
pub const GLOBAL_COUNTER_SEED: &[u8] = b"global_counter";

/// Seed prefix of per-owner counters, followed by the owner's key.
pub const USER_COUNTER_SEED: &[u8] = b"user_counter";

/// Distinguishes the two counter families in events.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterKind {
    /// The singleton [`GlobalCounter`].
    Global,
    /// A per-owner [`UserCounter`].
    User,
}

/// Global counter state, one account per program deployment
#[account]
#[derive(InitSpace, Default)]
pub struct GlobalCounter {
    /// The authority that can increment, decrement and reassign this counter
    pub authority: Pubkey,
    /// The current count value
    pub count: u64,
    /// Canonical bump of the global counter address
    pub bump: u8,
    /// Timestamp of the last update
    pub updated_at: i64,
}

/// Per-owner counter state, one account per owner
#[account]
#[derive(InitSpace, Default)]
pub struct UserCounter {
    /// The owner of this counter, fixed for the lifetime of the account
    pub owner: Pubkey,
    /// The current count value
    pub count: u64,
    /// Canonical bump of this counter's address
    pub bump: u8,
    /// Timestamp of the last update
    pub updated_at: i64,
}

impl GlobalCounter {
    /// Whether an authority has been recorded.
    ///
    /// A slot created by `init_if_needed` is zero-filled, so the default key
    /// marks a counter that has not been initialized yet.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Initialize the counter at zero under `authority`
    pub fn initialize(&mut self, authority: Pubkey, bump: u8, clock: &Clock) -> Result<()> {
        require!(!self.is_initialized(), CounterError::AlreadyInitialized);
        require_keys_neq!(authority, Pubkey::default(), CounterError::InvalidAuthority);

        self.authority = authority;
        self.count = 0;
        self.bump = bump;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }

    /// Add `amount` to the counter, returning the new count
    pub fn increment(&mut self, amount: u64, clock: &Clock) -> Result<u64> {
        self.count = checked_increment(self.count, amount)?;
        self.updated_at = clock.unix_timestamp;
        Ok(self.count)
    }

    /// Subtract `amount` from the counter, returning the new count
    pub fn decrement(&mut self, amount: u64, clock: &Clock) -> Result<u64> {
        self.count = checked_decrement(self.count, amount)?;
        self.updated_at = clock.unix_timestamp;
        Ok(self.count)
    }

    /// Hand control of the counter to `new_authority`
    pub fn transfer_authority(&mut self, new_authority: Pubkey, clock: &Clock) -> Result<()> {
        require_keys_neq!(new_authority, Pubkey::default(), CounterError::InvalidAuthority);

        self.authority = new_authority;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }
}

impl UserCounter {
    /// Whether an owner has been recorded.
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Initialize the counter at zero for `owner`
    pub fn initialize(&mut self, owner: Pubkey, bump: u8, clock: &Clock) -> Result<()> {
        require!(!self.is_initialized(), CounterError::AlreadyInitialized);

        self.owner = owner;
        self.count = 0;
        self.bump = bump;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }

    /// Add `amount` to the counter, returning the new count
    pub fn increment(&mut self, amount: u64, clock: &Clock) -> Result<u64> {
        self.count = checked_increment(self.count, amount)?;
        self.updated_at = clock.unix_timestamp;
        Ok(self.count)
    }

    /// Subtract `amount` from the counter, returning the new count
    pub fn decrement(&mut self, amount: u64, clock: &Clock) -> Result<u64> {
        self.count = checked_decrement(self.count, amount)?;
        self.updated_at = clock.unix_timestamp;
        Ok(self.count)
    }
}

fn checked_increment(count: u64, amount: u64) -> Result<u64> {
    require_gt!(amount, 0, CounterError::InvalidAmount);
    count
        .checked_add(amount)
        .ok_or_else(|| error!(CounterError::Overflow))
}

fn checked_decrement(count: u64, amount: u64) -> Result<u64> {
    require_gt!(amount, 0, CounterError::InvalidAmount);
    count
        .checked_sub(amount)
        .ok_or_else(|| error!(CounterError::Underflow))
}
