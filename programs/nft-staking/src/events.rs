use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub points_per_stake: u64,
    pub max_stake: u32,
    pub freeze_period: i64,
}

#[event]
pub struct UserRegistered {
    pub authority: Pubkey,
    pub user: Pubkey,
}

#[event]
pub struct StakeAdded {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub stake: Pubkey,
    pub start_stake: i64,
    pub amount_staked: u32,
}

#[event]
pub struct StakeRemoved {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub points_awarded: u64,
    pub points: u64,
    pub amount_staked: u32,
}
