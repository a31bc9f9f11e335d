//! Legacy greeting instruction, kept so existing clients keep working

use anchor_lang::prelude::*;
use crate::instructions::Initialize;

/// Log a greeting with the program id. Touches no accounts.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    msg!("Greetings from: {:?}", ctx.program_id);
    Ok(())
}
