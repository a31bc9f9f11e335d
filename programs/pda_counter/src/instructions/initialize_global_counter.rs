//! Initialize instruction for the global counter

use anchor_lang::prelude::*;
use crate::events::CounterInitialized;
use crate::instructions::InitializeGlobalCounter;
use crate::state::CounterKind;

/// Initialize the singleton global counter
///
/// The signer becomes the counter authority and pays the account deposit.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Errors
/// * `AlreadyInitialized` - If the global counter already has an authority
pub fn initialize_global_counter(ctx: Context<InitializeGlobalCounter>) -> Result<()> {
    let counter = &mut ctx.accounts.global_counter;
    let authority = ctx.accounts.authority.key();
    let clock = Clock::get()?;

    counter.initialize(authority, ctx.bumps.global_counter, &clock)?;

    emit!(CounterInitialized {
        counter: counter.key(),
        kind: CounterKind::Global,
        controller: authority,
        timestamp: clock.unix_timestamp,
    });

    msg!("Global counter initialized with authority: {}", authority);

    Ok(())
}
