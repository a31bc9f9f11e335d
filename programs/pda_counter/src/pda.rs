//! Address derivation for counter accounts.
//!
//! Clients use the `find_*` functions to locate counters; the program uses
//! the stored bump with the `*_address` functions to re-verify an account
//! passed into an instruction without repeating the bump search.

use anchor_lang::prelude::*;

use crate::state::{GLOBAL_COUNTER_SEED, USER_COUNTER_SEED};

/// Find the global counter address and its canonical bump for `program_id`.
pub fn find_global_counter_address_with_program_id(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GLOBAL_COUNTER_SEED], program_id)
}

/// Find the global counter address of this program.
pub fn find_global_counter_address() -> (Pubkey, u8) {
    find_global_counter_address_with_program_id(&crate::ID)
}

/// Find the counter address of `owner` and its canonical bump for `program_id`.
pub fn find_user_counter_address_with_program_id(
    owner: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_COUNTER_SEED, owner.as_ref()], program_id)
}

/// Find the counter address of `owner` for this program.
pub fn find_user_counter_address(owner: &Pubkey) -> (Pubkey, u8) {
    find_user_counter_address_with_program_id(owner, &crate::ID)
}

/// Rebuild the global counter address from a stored bump.
///
/// Returns `None` if the seeds and bump land on the curve.
pub fn global_counter_address(bump: u8, program_id: &Pubkey) -> Option<Pubkey> {
    Pubkey::create_program_address(&[GLOBAL_COUNTER_SEED, &[bump]], program_id).ok()
}

/// Rebuild the counter address of `owner` from a stored bump.
pub fn user_counter_address(owner: &Pubkey, bump: u8, program_id: &Pubkey) -> Option<Pubkey> {
    Pubkey::create_program_address(&[USER_COUNTER_SEED, owner.as_ref(), &[bump]], program_id)
        .ok()
}

/// Whether `address` is the global counter of this program under `bump`.
pub fn is_global_counter_address(address: &Pubkey, bump: u8) -> bool {
    global_counter_address(bump, &crate::ID).as_ref() == Some(address)
}

/// Whether `address` is the counter of `owner` in this program under `bump`.
pub fn is_user_counter_address(address: &Pubkey, owner: &Pubkey, bump: u8) -> bool {
    user_counter_address(owner, bump, &crate::ID).as_ref() == Some(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(find_global_counter_address(), find_global_counter_address());

        let owner = Pubkey::new_unique();
        assert_eq!(
            find_user_counter_address(&owner),
            find_user_counter_address(&owner)
        );
    }

    #[test]
    fn test_derivation_is_off_curve() {
        let (global, _) = find_global_counter_address();
        assert!(!global.is_on_curve());

        let (user, _) = find_user_counter_address(&Pubkey::new_unique());
        assert!(!user.is_on_curve());
    }

    #[test]
    fn test_distinct_owners_get_distinct_counters() {
        let (global, _) = find_global_counter_address();
        let owners: Vec<_> = (0..16).map(|_| Pubkey::new_unique()).collect();
        let addresses: Vec<_> = owners
            .iter()
            .map(|owner| find_user_counter_address(owner).0)
            .collect();

        for (i, a) in addresses.iter().enumerate() {
            assert_ne!(*a, global);
            for b in &addresses[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_program_id_changes_address() {
        let other_program = Pubkey::new_unique();
        assert_ne!(
            find_global_counter_address().0,
            find_global_counter_address_with_program_id(&other_program).0
        );

        let owner = Pubkey::new_unique();
        assert_ne!(
            find_user_counter_address(&owner).0,
            find_user_counter_address_with_program_id(&owner, &other_program).0
        );
    }

    #[test]
    fn test_stored_bump_verification() {
        let (global, global_bump) = find_global_counter_address();
        assert_eq!(global_counter_address(global_bump, &crate::ID), Some(global));
        assert!(is_global_counter_address(&global, global_bump));
        assert!(!is_global_counter_address(&Pubkey::new_unique(), global_bump));

        let owner = Pubkey::new_unique();
        let (user, user_bump) = find_user_counter_address(&owner);
        assert!(is_user_counter_address(&user, &owner, user_bump));
        assert!(!is_user_counter_address(&user, &Pubkey::new_unique(), user_bump));
        assert!(!is_user_counter_address(&global, &owner, user_bump));
    }

    #[test]
    fn test_wrong_bump_is_rejected() {
        let (global, bump) = find_global_counter_address();
        for other in (0..=u8::MAX).filter(|b| *b != bump) {
            assert!(!is_global_counter_address(&global, other));
        }
    }
}
