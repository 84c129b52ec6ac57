pub mod account_structs;
/// # nft staking - Collection NFT Staking for Points
///
/// ## Business Process Flow
///
/// 1. Initial Setup:
///    - Admin initializes the singleton config with points per stake,
///      the maximum number of concurrent stakes per user and the freeze period
///
/// 2. Registration:
///    - Each staker registers once, creating a user record that tracks
///      accrued points and the number of open stakes
///
/// 3. Staking Flow:
///    - User presents an NFT whose metadata carries a verified membership
///      of the expected collection
///    - System opens a stake record bound to the NFT mint
///    - The NFT is delegated to the stake record and its token account frozen;
///      the user keeps ownership, but cannot move or burn it
///
/// 4. Unstaking Flow:
///    - Once the freeze period has elapsed since staking, the user removes the stake
///    - The token account is thawed and the delegation revoked
///    - The stake record is closed, rent goes back to the user
///    - The user is credited the configured points per stake
///
/// Every record lives at a PDA derived from its seeds, and the existence of a
/// stake record is what marks a mint as staked. Each instruction checks all of
/// its preconditions before writing, so a failing instruction leaves no trace.
pub mod collection;
pub mod custody;
pub mod error;
pub mod events;
pub mod pda;
pub mod processor;
pub mod state;
pub mod store;


use account_structs::*;
use anchor_lang::prelude::*;
use state::InitConfigArgs;

declare_id!("5oYCMpmb2QkCjYtMX5vLseoYpDF62sbgkVyeLHyu1r7c");

#[program]
pub mod nft_staking {
    use super::*;

    /// Creates the singleton config; the signer becomes the admin.
    /// - points_per_stake: Points credited for each completed stake
    /// - max_stake: Maximum number of concurrently staked NFTs per user
    /// - freeze_period: Seconds an NFT must stay staked before removal
    pub fn init_config(ctx: Context<InitConfig>, args: InitConfigArgs) -> Result<()> {
        processor::init_config(ctx, args)
    }

    /// Creates the signer's user record with zero points and no stakes.
    pub fn register_user(ctx: Context<RegisterUser>) -> Result<()> {
        processor::register_user(ctx)
    }

    /// Stakes an NFT of the given collection:
    /// - Opens the stake record for the mint
    /// - Delegates the NFT to the stake record and freezes it
    pub fn add_stake(ctx: Context<AddStake>) -> Result<()> {
        processor::add_stake(ctx)
    }

    /// Removes a stake after the freeze period:
    /// - Thaws the NFT and revokes the delegation
    /// - Closes the stake record and credits the points
    pub fn remove_stake(ctx: Context<RemoveStake>) -> Result<()> {
        processor::remove_stake(ctx)
    }
}
