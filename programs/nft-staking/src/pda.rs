use crate::error::StakingError;
use crate::state::{CONFIG_SEED, STAKE_SEED, USER_SEED};
use anchor_lang::prelude::*;

pub fn find_config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], &crate::ID)
}

pub fn find_user_address(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_SEED, authority.as_ref()], &crate::ID)
}

pub fn find_stake_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_SEED, mint.as_ref()], &crate::ID)
}

/// Signer seeds for the stake record, which is the delegate on the staked
/// token account.
pub fn stake_signer_seeds<'a>(mint: &'a Pubkey, bump: &'a [u8; 1]) -> [&'a [u8]; 3] {
    [STAKE_SEED, mint.as_ref(), bump]
}

/// Re-derives `address` from `seeds` and the bump stored in the record.
pub fn verify_address(address: &Pubkey, seeds: &[&[u8]], bump: u8) -> Result<()> {
    let bump = [bump];
    let mut full_seeds = seeds.to_vec();
    full_seeds.push(&bump);

    let derived = Pubkey::create_program_address(&full_seeds, &crate::ID)
        .map_err(|_| StakingError::InvalidAccountAddress)?;
    require_keys_eq!(derived, *address, StakingError::InvalidAccountAddress);
    Ok(())
}
