//! # Instructions Module
//!
//! This module contains all instruction handlers and account validation contexts
//! for the PDA counter program.
//!
//! Mutating contexts re-derive the counter address from the stored bump and
//! compare the stored controller against the signer before the handler runs,
//! so handlers only ever see accounts that passed both checks.

use anchor_lang::prelude::*;
use crate::errors::CounterError;
use crate::pda;
use crate::state::*;

pub mod initialize;
pub mod initialize_global_counter;
pub mod initialize_user_counter;
pub mod update;
pub mod transfer_authority;
pub mod close_user_counter;

pub use initialize::*;
pub use initialize_global_counter::*;
pub use initialize_user_counter::*;
pub use update::*;
pub use transfer_authority::*;
pub use close_user_counter::*;

/// Account validation context for the legacy greeting instruction
#[derive(Accounts)]
pub struct Initialize {}

/// Account validation context for creating the global counter
///
/// `init_if_needed` lets the handler tell a second initialization apart
/// and fail it with `AlreadyInitialized`.
#[derive(Accounts)]
pub struct InitializeGlobalCounter<'info> {
    /// The global counter account, created on first use
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + GlobalCounter::INIT_SPACE,
        seeds = [GLOBAL_COUNTER_SEED],
        bump
    )]
    pub global_counter: Account<'info, GlobalCounter>,

    /// The authority who will control the counter and pays its deposit
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Account validation context for creating a user counter
#[derive(Accounts)]
pub struct InitializeUserCounter<'info> {
    /// The owner's counter account, created on first use
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + UserCounter::INIT_SPACE,
        seeds = [USER_COUNTER_SEED, owner.key().as_ref()],
        bump
    )]
    pub user_counter: Account<'info, UserCounter>,

    /// The owner of the new counter, pays its deposit
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Account validation context for incrementing or decrementing the global counter
#[derive(Accounts)]
pub struct UpdateGlobalCounter<'info> {
    #[account(
        mut,
        has_one = authority @ CounterError::Unauthorized,
        constraint = pda::is_global_counter_address(&global_counter.key(), global_counter.bump)
            @ CounterError::AddressMismatch
    )]
    pub global_counter: Account<'info, GlobalCounter>,

    /// The current authority of the global counter
    pub authority: Signer<'info>,
}

/// Account validation context for incrementing or decrementing a user counter
#[derive(Accounts)]
pub struct UpdateUserCounter<'info> {
    #[account(
        mut,
        has_one = owner @ CounterError::Unauthorized,
        constraint = pda::is_user_counter_address(
            &user_counter.key(),
            &user_counter.owner,
            user_counter.bump,
        ) @ CounterError::AddressMismatch
    )]
    pub user_counter: Account<'info, UserCounter>,

    /// The owner of the counter
    pub owner: Signer<'info>,
}

/// Account validation context for transferring the global counter authority
#[derive(Accounts)]
pub struct TransferGlobalAuthority<'info> {
    /// The global counter whose authority will be transferred
    #[account(
        mut,
        has_one = authority @ CounterError::Unauthorized,
        constraint = pda::is_global_counter_address(&global_counter.key(), global_counter.bump)
            @ CounterError::AddressMismatch
    )]
    pub global_counter: Account<'info, GlobalCounter>,

    /// The current authority
    pub authority: Signer<'info>,
}

/// Account validation context for closing a user counter
#[derive(Accounts)]
pub struct CloseUserCounter<'info> {
    /// The counter to close; all of its lamports go back to the owner
    #[account(
        mut,
        close = owner,
        has_one = owner @ CounterError::Unauthorized,
        constraint = pda::is_user_counter_address(
            &user_counter.key(),
            &user_counter.owner,
            user_counter.bump,
        ) @ CounterError::AddressMismatch
    )]
    pub user_counter: Account<'info, UserCounter>,

    /// The owner, receives the refunded deposit
    #[account(mut)]
    pub owner: Signer<'info>,
}
