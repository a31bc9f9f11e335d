//! Errors module for the PDA Counter program
//!
//! Every failure is a local validation error raised before the counter
//! account is written, so a failed instruction leaves the ledger untouched.

use anchor_lang::prelude::*;

/// Custom error codes for the PDA Counter program
#[error_code]
pub enum CounterError {
    /// The supplied counter account is not at its derived address
    ///
    /// This error occurs when:
    /// - The account passed as the global counter is not the
    ///   `[b"global_counter"]` derivation for this program
    /// - The account passed as a user counter is not the
    ///   `[b"user_counter", owner]` derivation for its stored owner
    ///
    /// Initialize instructions create the account from its seeds, so a
    /// substituted address there fails earlier with Anchor's
    /// `ConstraintSeeds` (2006). Clients should expect either code.
    #[msg("Address mismatch: account is not at the derived counter address")]
    AddressMismatch,

    /// The counter slot already holds a live record
    ///
    /// This error occurs when an initialize instruction targets a counter
    /// that was initialized before and has not been closed since.
    #[msg("Already initialized: counter has already been initialized")]
    AlreadyInitialized,

    /// The signer is not the controller recorded in the counter
    ///
    /// This error occurs when:
    /// - The global counter is mutated by anyone other than its `authority`
    /// - A user counter is mutated or closed by anyone other than its `owner`
    #[msg("Unauthorized: signer does not control this counter")]
    Unauthorized,

    /// Counter overflow: addition would exceed u64::MAX
    #[msg("Counter overflow: addition would exceed u64::MAX")]
    Overflow,

    /// Counter underflow: subtraction would go below zero
    #[msg("Counter underflow: subtraction would go below zero")]
    Underflow,

    /// Increments and decrements must move the counter by a positive amount
    #[msg("Invalid amount: amount must be greater than zero")]
    InvalidAmount,

    /// The proposed global authority cannot be stored
    ///
    /// This error occurs when the new authority is the default (all-zero)
    /// public key, which marks an uninitialized counter.
    #[msg("Invalid authority: the provided authority address is invalid")]
    InvalidAuthority,
}
