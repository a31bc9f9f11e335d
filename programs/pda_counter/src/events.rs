//! Events module for the PDA Counter program
//!
//! Every state transition emits one of these events so off-chain indexers
//! can follow counters without polling account data.

use anchor_lang::prelude::*;

use crate::state::CounterKind;

/// Event emitted when a counter is initialized
#[event]
pub struct CounterInitialized {
    /// The newly initialized counter account
    pub counter: Pubkey,
    /// Which counter family this account belongs to
    pub kind: CounterKind,
    /// The authority (global) or owner (user) recorded in the counter
    pub controller: Pubkey,
    /// Timestamp when the counter was initialized
    pub timestamp: i64,
}

/// Event emitted when a counter is incremented
///
/// # Fields
/// * `counter` - The counter account
/// * `kind` - Global or user counter
/// * `amount` - The amount added
/// * `previous_count` - The value before incrementing
/// * `new_count` - The value after incrementing
/// * `timestamp` - Unix timestamp of the increment
#[event]
pub struct CounterIncremented {
    pub counter: Pubkey,
    pub kind: CounterKind,
    pub amount: u64,
    pub previous_count: u64,
    pub new_count: u64,
    pub timestamp: i64,
}

/// Event emitted when a counter is decremented
#[event]
pub struct CounterDecremented {
    pub counter: Pubkey,
    pub kind: CounterKind,
    pub amount: u64,
    pub previous_count: u64,
    pub new_count: u64,
    pub timestamp: i64,
}

/// Event emitted when the global counter authority is transferred
#[event]
pub struct AuthorityTransferred {
    /// The global counter account
    pub counter: Pubkey,
    /// The previous authority
    pub previous_authority: Pubkey,
    /// The new authority
    pub new_authority: Pubkey,
    /// Timestamp when transferred
    pub timestamp: i64,
}

/// Event emitted when a user counter is closed and its deposit refunded
#[event]
pub struct UserCounterClosed {
    /// The closed counter account
    pub counter: Pubkey,
    /// The owner who received the refund
    pub owner: Pubkey,
    /// The count held by the counter when it was closed
    pub final_count: u64,
    /// Lamports moved from the counter account to the owner
    pub reclaimed_lamports: u64,
    /// Timestamp when closed
    pub timestamp: i64,
}
