//! # Update Instructions
//!
//! This module contains the logic for moving counter values:
//! increment and decrement of the global counter and of user counters.

use anchor_lang::prelude::*;
use crate::events::*;
use crate::state::CounterKind;
use super::{UpdateGlobalCounter, UpdateUserCounter};

/// Increment the global counter by `amount`
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `amount` - The positive amount to add
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * Emits `CounterIncremented` event with before/after values
pub fn increment_global(ctx: Context<UpdateGlobalCounter>, amount: u64) -> Result<()> {
    let counter = &mut ctx.accounts.global_counter;
    let clock = Clock::get()?;
    let previous_count = counter.count;

    let new_count = counter.increment(amount, &clock)?;

    emit!(CounterIncremented {
        counter: counter.key(),
        kind: CounterKind::Global,
        amount,
        previous_count,
        new_count,
        timestamp: clock.unix_timestamp,
    });

    msg!("Global counter incremented by {} to {}", amount, new_count);

    Ok(())
}

/// Decrement the global counter by `amount`
///
/// # Errors
/// * `Underflow` - If `amount` is larger than the current count
pub fn decrement_global(ctx: Context<UpdateGlobalCounter>, amount: u64) -> Result<()> {
    let counter = &mut ctx.accounts.global_counter;
    let clock = Clock::get()?;
    let previous_count = counter.count;

    let new_count = counter.decrement(amount, &clock)?;

    emit!(CounterDecremented {
        counter: counter.key(),
        kind: CounterKind::Global,
        amount,
        previous_count,
        new_count,
        timestamp: clock.unix_timestamp,
    });

    msg!("Global counter decremented by {} to {}", amount, new_count);

    Ok(())
}

/// Increment the signer's counter by `amount`
pub fn increment_user(ctx: Context<UpdateUserCounter>, amount: u64) -> Result<()> {
    let counter = &mut ctx.accounts.user_counter;
    let clock = Clock::get()?;
    let previous_count = counter.count;

    let new_count = counter.increment(amount, &clock)?;

    emit!(CounterIncremented {
        counter: counter.key(),
        kind: CounterKind::User,
        amount,
        previous_count,
        new_count,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "User counter of {} incremented by {} to {}",
        counter.owner,
        amount,
        new_count
    );

    Ok(())
}

/// Decrement the signer's counter by `amount`
pub fn decrement_user(ctx: Context<UpdateUserCounter>, amount: u64) -> Result<()> {
    let counter = &mut ctx.accounts.user_counter;
    let clock = Clock::get()?;
    let previous_count = counter.count;

    let new_count = counter.decrement(amount, &clock)?;

    emit!(CounterDecremented {
        counter: counter.key(),
        kind: CounterKind::User,
        amount,
        previous_count,
        new_count,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "User counter of {} decremented by {} to {}",
        counter.owner,
        amount,
        new_count
    );

    Ok(())
}
