//! Close instruction for per-owner counters

use anchor_lang::prelude::*;
use crate::events::UserCounterClosed;
use super::CloseUserCounter;

/// Close the signer's counter and refund its deposit
///
/// The `close = owner` constraint moves every lamport of the counter to the
/// owner and wipes the account once this handler returns, so the owner can
/// later initialize a fresh counter at the same address.
pub fn close_user_counter(ctx: Context<CloseUserCounter>) -> Result<()> {
    let counter = &ctx.accounts.user_counter;
    let clock = Clock::get()?;
    let reclaimed_lamports = counter.to_account_info().lamports();

    emit!(UserCounterClosed {
        counter: counter.key(),
        owner: counter.owner,
        final_count: counter.count,
        reclaimed_lamports,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "User counter closed for {}, returning {} lamports",
        counter.owner,
        reclaimed_lamports
    );

    Ok(())
}
