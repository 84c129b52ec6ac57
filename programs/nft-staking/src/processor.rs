use crate::account_structs::*;
use crate::collection::verify_membership;
use crate::custody::Custody;
use crate::error::*;
use crate::events::*;
use crate::pda;
use crate::state::*;
use crate::store::{self, Record};
use anchor_lang::prelude::*;

pub fn init_config(ctx: Context<InitConfig>, args: InitConfigArgs) -> Result<()> {
    let accounts = &ctx.accounts;
    Record::<Config>::load(&accounts.config)?.ensure_absent(StakingError::AlreadyInitialized)?;

    let config = Config::new(accounts.admin.key(), &args, ctx.bumps.config)?;

    let bump = [config.bump];
    store::create(
        &config,
        &accounts.config,
        &accounts.admin,
        &accounts.system_program,
        &[CONFIG_SEED, &bump],
    )?;

    msg!(
        "Config initialized: {} points per stake, max {} stakes, freeze period {}s",
        config.points_per_stake,
        config.max_stake,
        config.freeze_period
    );

    emit!(ConfigInitialized {
        admin: config.admin,
        points_per_stake: config.points_per_stake,
        max_stake: config.max_stake,
        freeze_period: config.freeze_period,
    });

    Ok(())
}

pub fn register_user(ctx: Context<RegisterUser>) -> Result<()> {
    let accounts = &ctx.accounts;
    Record::<User>::load(&accounts.user)?.ensure_absent(StakingError::AlreadyInitialized)?;

    let authority = accounts.authority.key();
    let user = User::new(authority, ctx.bumps.user);

    let bump = [user.bump];
    store::create(
        &user,
        &accounts.user,
        &accounts.authority,
        &accounts.system_program,
        &[USER_SEED, authority.as_ref(), &bump],
    )?;

    emit!(UserRegistered {
        authority,
        user: accounts.user.key(),
    });

    Ok(())
}

// Preconditions are checked in a fixed order, each with its own error, and
// all of them before anything is written.
pub fn add_stake(ctx: Context<AddStake>) -> Result<()> {
    let accounts = &ctx.accounts;
    let authority = accounts.authority.key();
    let mint = accounts.mint.key();

    let config = Record::<Config>::load(&accounts.config)?.open()?;
    pda::verify_address(accounts.config.key, &[CONFIG_SEED], config.bump)?;

    let mut user = Record::<User>::load(&accounts.user)?.open()?;
    pda::verify_address(accounts.user.key, &[USER_SEED, authority.as_ref()], user.bump)?;
    user.ensure_capacity(&config)?;

    verify_membership(
        accounts.metadata.collection.as_ref(),
        &accounts.collection_mint.key(),
    )?;

    require!(
        accounts.token_account.amount == STAKED_AMOUNT,
        StakingError::InsufficientBalance
    );

    Record::<Stake>::load(&accounts.stake)?.ensure_absent(StakingError::AlreadyStaked)?;

    let now = Clock::get()?.unix_timestamp;
    let stake = Stake::open(authority, mint, now, ctx.bumps.stake);
    user.record_stake(&config)?;

    let bump = [stake.bump];
    let stake_seeds = pda::stake_signer_seeds(&mint, &bump);

    store::create(
        &stake,
        &accounts.stake,
        &accounts.authority,
        &accounts.system_program,
        &stake_seeds,
    )?;

    Custody {
        owner: &accounts.authority,
        token_account: &accounts.token_account.to_account_info(),
        delegate: &accounts.stake,
        mint: &accounts.mint.to_account_info(),
        edition: &accounts.edition.to_account_info(),
        token_program: &accounts.token_program,
        metadata_program: &accounts.metadata_program,
    }
    .lock(&stake_seeds)?;

    store::save(&user, &accounts.user)?;

    msg!(
        "Staked {} for {} at {}; {} of {} slots used",
        mint,
        authority,
        now,
        user.amount_staked,
        config.max_stake
    );

    emit!(StakeAdded {
        authority,
        mint,
        stake: accounts.stake.key(),
        start_stake: now,
        amount_staked: user.amount_staked,
    });

    Ok(())
}

pub fn remove_stake(ctx: Context<RemoveStake>) -> Result<()> {
    let accounts = &ctx.accounts;
    let authority = accounts.authority.key();
    let mint = accounts.mint.key();

    let stake = Record::<Stake>::load(&accounts.stake)?.open()?;
    require_keys_eq!(stake.authority, authority, StakingError::Unauthorized);
    pda::verify_address(accounts.stake.key, &[STAKE_SEED, mint.as_ref()], stake.bump)?;

    let config = Record::<Config>::load(&accounts.config)?.open()?;
    pda::verify_address(accounts.config.key, &[CONFIG_SEED], config.bump)?;

    let now = Clock::get()?.unix_timestamp;
    stake.ensure_unlocked(now, &config)?;

    let mut user = Record::<User>::load(&accounts.user)?.open()?;
    pda::verify_address(accounts.user.key, &[USER_SEED, authority.as_ref()], user.bump)?;
    let points_awarded = user.release_stake(&config)?;

    let bump = [stake.bump];
    let stake_seeds = pda::stake_signer_seeds(&mint, &bump);

    Custody {
        owner: &accounts.authority,
        token_account: &accounts.token_account.to_account_info(),
        delegate: &accounts.stake,
        mint: &accounts.mint.to_account_info(),
        edition: &accounts.edition.to_account_info(),
        token_program: &accounts.token_program,
        metadata_program: &accounts.metadata_program,
    }
    .release(&stake_seeds)?;

    store::close(&accounts.stake, &accounts.authority)?;
    store::save(&user, &accounts.user)?;

    msg!(
        "Unstaked {} for {} after {}s; {} points",
        mint,
        authority,
        now - stake.start_stake,
        user.points
    );

    emit!(StakeRemoved {
        authority,
        mint,
        points_awarded,
        points: user.points,
        amount_staked: user.amount_staked,
    });

    Ok(())
}
