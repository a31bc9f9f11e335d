//! Initialize instruction for per-owner counters

use anchor_lang::prelude::*;
use crate::events::CounterInitialized;
use crate::instructions::InitializeUserCounter;
use crate::state::CounterKind;

/// Initialize the signer's own counter
///
/// Also used to bring a closed counter back, starting again from zero.
///
/// # Errors
/// * `AlreadyInitialized` - If the owner's counter is still open
pub fn initialize_user_counter(ctx: Context<InitializeUserCounter>) -> Result<()> {
    let counter = &mut ctx.accounts.user_counter;
    let owner = ctx.accounts.owner.key();
    let clock = Clock::get()?;

    counter.initialize(owner, ctx.bumps.user_counter, &clock)?;

    emit!(CounterInitialized {
        counter: counter.key(),
        kind: CounterKind::User,
        controller: owner,
        timestamp: clock.unix_timestamp,
    });

    msg!("User counter initialized for owner: {}", owner);

    Ok(())
}
