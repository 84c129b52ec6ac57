use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::metadata::{MasterEditionAccount, Metadata, MetadataAccount};
use anchor_spl::token::{Mint, Token, TokenAccount};

// Record accounts are taken unchecked: the framework re-derives their
// addresses from the seeds, and the handlers load them as `Record`s so that
// absence is a state rather than a deserialization failure.

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: Config PDA, validated by seeds; must still be empty
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RegisterUser<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: User PDA for the signer, validated by seeds; must still be empty
    #[account(
        mut,
        seeds = [USER_SEED, authority.key().as_ref()],
        bump
    )]
    pub user: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AddStake<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Config PDA, validated by seeds and loaded by the handler
    #[account(
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: UncheckedAccount<'info>,

    /// CHECK: User PDA for the signer, validated by seeds and loaded by the handler
    #[account(
        mut,
        seeds = [USER_SEED, authority.key().as_ref()],
        bump
    )]
    pub user: UncheckedAccount<'info>,

    /// CHECK: Stake PDA for the mint, validated by seeds; must still be empty
    #[account(
        mut,
        seeds = [STAKE_SEED, mint.key().as_ref()],
        bump
    )]
    pub stake: UncheckedAccount<'info>,

    pub mint: Account<'info, Mint>,

    pub collection_mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = authority,
    )]
    pub token_account: Account<'info, TokenAccount>,

    #[account(
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            mint.key().as_ref()
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub metadata: Account<'info, MetadataAccount>,

    // master edition, the freeze authority of the mint
    #[account(
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            mint.key().as_ref(),
            b"edition"
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub edition: Account<'info, MasterEditionAccount>,

    pub token_program: Program<'info, Token>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RemoveStake<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Config PDA, validated by seeds and loaded by the handler
    #[account(
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: UncheckedAccount<'info>,

    /// CHECK: User PDA for the signer, validated by seeds and loaded by the handler
    #[account(
        mut,
        seeds = [USER_SEED, authority.key().as_ref()],
        bump
    )]
    pub user: UncheckedAccount<'info>,

    /// CHECK: Stake PDA for the mint, validated by seeds; closed to the authority
    #[account(
        mut,
        seeds = [STAKE_SEED, mint.key().as_ref()],
        bump
    )]
    pub stake: UncheckedAccount<'info>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = authority,
    )]
    pub token_account: Account<'info, TokenAccount>,

    #[account(
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            mint.key().as_ref(),
            b"edition"
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub edition: Account<'info, MasterEditionAccount>,

    pub token_program: Program<'info, Token>,
    pub metadata_program: Program<'info, Metadata>,
}
