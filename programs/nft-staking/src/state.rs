use crate::error::StakingError;
use anchor_lang::prelude::*;

pub const CONFIG_SEED: &[u8] = b"config";
pub const USER_SEED: &[u8] = b"user";
pub const STAKE_SEED: &[u8] = b"stake";

/// An NFT is staked as a single indivisible unit.
pub const STAKED_AMOUNT: u64 = 1;

pub const DISCRIMINATOR_LEN: usize = 8;

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Config {
    pub admin: Pubkey,
    pub points_per_stake: u64,
    pub max_stake: u32,
    pub freeze_period: i64, // seconds
    pub bump: u8,
}

impl Config {
    pub fn new(admin: Pubkey, args: &InitConfigArgs, bump: u8) -> Result<Self> {
        require!(args.freeze_period >= 0, StakingError::InvalidFreezePeriod);
        Ok(Self {
            admin,
            points_per_stake: args.points_per_stake,
            max_stake: args.max_stake,
            freeze_period: args.freeze_period,
            bump,
        })
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitConfigArgs {
    pub points_per_stake: u64,
    pub max_stake: u32,
    pub freeze_period: i64,
}

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct User {
    pub authority: Pubkey,
    pub points: u64,
    pub amount_staked: u32,
    pub bump: u8,
}

impl User {
    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            authority,
            points: 0,
            amount_staked: 0,
            bump,
        }
    }

    pub fn ensure_capacity(&self, config: &Config) -> Result<()> {
        require!(
            self.amount_staked < config.max_stake,
            StakingError::CapacityExceeded
        );
        Ok(())
    }

    /// Counts a newly opened stake against the user's capacity.
    pub fn record_stake(&mut self, config: &Config) -> Result<()> {
        self.ensure_capacity(config)?;
        self.amount_staked = self
            .amount_staked
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    /// Closes out one stake and credits the flat per-stake award.
    /// Both counters are computed before either is written.
    pub fn release_stake(&mut self, config: &Config) -> Result<u64> {
        let amount_staked = self
            .amount_staked
            .checked_sub(1)
            .ok_or(StakingError::InvariantViolation)?;
        let points = self
            .points
            .checked_add(config.points_per_stake)
            .ok_or(StakingError::MathOverflow)?;

        self.amount_staked = amount_staked;
        self.points = points;
        Ok(config.points_per_stake)
    }
}

// existence of this record = the mint is staked
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Stake {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub start_stake: i64,
    pub bump: u8,
}

impl Stake {
    pub fn open(authority: Pubkey, mint: Pubkey, start_stake: i64, bump: u8) -> Self {
        Self {
            authority,
            mint,
            start_stake,
            bump,
        }
    }

    pub fn unlocks_at(&self, config: &Config) -> Result<i64> {
        self.start_stake
            .checked_add(config.freeze_period)
            .ok_or_else(|| error!(StakingError::MathOverflow))
    }

    pub fn ensure_unlocked(&self, now: i64, config: &Config) -> Result<()> {
        require!(
            now >= self.unlocks_at(config)?,
            StakingError::FreezePeriodNotOver
        );
        Ok(())
    }
}
