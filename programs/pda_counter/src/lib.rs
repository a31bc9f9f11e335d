//! # PDA Counter Program
//!
//! A counter program built with the Anchor framework. It keeps a singleton
//! global counter controlled by a transferable authority, and one counter per
//! owner that only that owner can move or close.
//!
//! ## Accounts
//! - `GlobalCounter` at `[b"global_counter"]`
//! - `UserCounter` at `[b"user_counter", owner]`
//!
//! ## Security
//! - Every mutation requires the signature of the recorded authority or owner
//! - Counter addresses are re-derived from the stored bump on every mutation
//! - Arithmetic is checked; overflow and underflow abort the instruction

// Anchor's generated code trips these lints
#![allow(deprecated)]
#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;
pub mod errors;
pub mod events;
pub mod pda;

pub use instructions::*;
pub use state::*;
pub use errors::*;
pub use events::*;

declare_id!("3BxPymFpACUfcSpNrW813gy9EXQMZ99GA9sGCoehxZ8m");

/// Main program module containing all instruction handlers
#[program]
pub mod pda_counter {
    use super::*;

    /// Initialize the global counter
    ///
    /// Creates the global counter with a count of zero and the signer as
    /// authority. Callable once per deployment.
    ///
    /// # Events
    /// * `CounterInitialized` - Emitted when the counter is created
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the global counter already exists
    pub fn initialize_global_counter(ctx: Context<InitializeGlobalCounter>) -> Result<()> {
        instructions::initialize_global_counter(ctx)
    }

    /// Initialize the signer's user counter
    ///
    /// # Events
    /// * `CounterInitialized` - Emitted when the counter is created
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the signer's counter is still open
    pub fn initialize_user_counter(ctx: Context<InitializeUserCounter>) -> Result<()> {
        instructions::initialize_user_counter(ctx)
    }

    /// Increment the global counter. Only the authority can call.
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `amount` - The positive amount to add
    ///
    /// # Errors
    /// * `Unauthorized` - If the signer is not the authority
    /// * `Overflow` - If the count would exceed `u64::MAX`
    pub fn increment_global(ctx: Context<UpdateGlobalCounter>, amount: u64) -> Result<()> {
        instructions::increment_global(ctx, amount)
    }

    /// Decrement the global counter. Only the authority can call.
    ///
    /// # Errors
    /// * `Unauthorized` - If the signer is not the authority
    /// * `Underflow` - If `amount` is larger than the count
    pub fn decrement_global(ctx: Context<UpdateGlobalCounter>, amount: u64) -> Result<()> {
        instructions::decrement_global(ctx, amount)
    }

    /// Transfer the global counter to a new authority
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `new_authority` - The public key of the new authority
    ///
    /// # Events
    /// * `AuthorityTransferred` - Emitted with the old and new authorities
    pub fn transfer_global_authority(
        ctx: Context<TransferGlobalAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::transfer_global_authority(ctx, new_authority)
    }

    /// Increment the signer's user counter. Only the owner can call.
    pub fn increment_user(ctx: Context<UpdateUserCounter>, amount: u64) -> Result<()> {
        instructions::increment_user(ctx, amount)
    }

    /// Decrement the signer's user counter. Only the owner can call.
    pub fn decrement_user(ctx: Context<UpdateUserCounter>, amount: u64) -> Result<()> {
        instructions::decrement_user(ctx, amount)
    }

    /// Close the signer's user counter and return its deposit to the owner
    ///
    /// # Events
    /// * `UserCounterClosed` - Emitted with the refunded lamports
    pub fn close_user_counter(ctx: Context<CloseUserCounter>) -> Result<()> {
        instructions::close_user_counter(ctx)
    }

    /// Legacy greeting, kept for backward compatibility
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }
}
