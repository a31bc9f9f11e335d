//! # Transfer Authority Instruction
//!
//! This module contains the logic for handing the global counter
//! to a new authority. User counters have no equivalent: their owner is
//! part of their address.

use anchor_lang::prelude::*;
use crate::events::AuthorityTransferred;
use super::TransferGlobalAuthority;

/// Transfer authority of the global counter to a new account
///
/// After the transfer only `new_authority` can increment, decrement or
/// transfer the global counter. The count is left as it is.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_authority` - The public key of the new authority
///
/// # Errors
/// * `Unauthorized` - If the signer is not the current authority
/// * `InvalidAuthority` - If `new_authority` is the default key
pub fn transfer_global_authority(
    ctx: Context<TransferGlobalAuthority>,
    new_authority: Pubkey,
) -> Result<()> {
    let counter = &mut ctx.accounts.global_counter;
    let clock = Clock::get()?;
    let previous_authority = counter.authority;

    counter.transfer_authority(new_authority, &clock)?;

    emit!(AuthorityTransferred {
        counter: counter.key(),
        previous_authority,
        new_authority,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Global counter authority transferred! Previous: {}, New: {}",
        previous_authority,
        new_authority
    );

    Ok(())
}
