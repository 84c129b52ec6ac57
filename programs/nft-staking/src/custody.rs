use crate::error::StakingError;
use crate::state::STAKED_AMOUNT;
use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use anchor_spl::metadata::{
    freeze_delegated_account, thaw_delegated_account, FreezeDelegatedAccount,
    ThawDelegatedAccount,
};
use anchor_spl::token::{self, Approve, Revoke};

/// Accounts taking part in locking or releasing a staked token. The stake
/// record is the delegate; the master edition is the freeze authority.
pub struct Custody<'a, 'info> {
    pub owner: &'a AccountInfo<'info>,
    pub token_account: &'a AccountInfo<'info>,
    pub delegate: &'a AccountInfo<'info>,
    pub mint: &'a AccountInfo<'info>,
    pub edition: &'a AccountInfo<'info>,
    pub token_program: &'a AccountInfo<'info>,
    pub metadata_program: &'a AccountInfo<'info>,
}

impl<'a, 'info> Custody<'a, 'info> {
    /// Delegates the token to the stake record, then freezes the owner's
    /// token account with the delegate's authority.
    pub fn lock(&self, delegate_seeds: &[&[u8]]) -> Result<()> {
        token::approve(
            CpiContext::new(
                self.token_program.clone(),
                Approve {
                    to: self.token_account.clone(),
                    delegate: self.delegate.clone(),
                    authority: self.owner.clone(),
                },
            ),
            STAKED_AMOUNT,
        )
        .map_err(|e| custody_failure("approve", e))?;

        freeze_delegated_account(CpiContext::new_with_signer(
            self.metadata_program.clone(),
            FreezeDelegatedAccount {
                metadata: self.metadata_program.clone(),
                delegate: self.delegate.clone(),
                token_account: self.token_account.clone(),
                edition: self.edition.clone(),
                mint: self.mint.clone(),
                token_program: self.token_program.clone(),
            },
            &[delegate_seeds],
        ))
        .map_err(|e| custody_failure("freeze", e))?;

        msg!(
            "Token account {} frozen with delegate {}",
            self.token_account.key(),
            self.delegate.key()
        );
        Ok(())
    }

    /// Thaws the owner's token account and clears the delegation.
    pub fn release(&self, delegate_seeds: &[&[u8]]) -> Result<()> {
        thaw_delegated_account(CpiContext::new_with_signer(
            self.metadata_program.clone(),
            ThawDelegatedAccount {
                metadata: self.metadata_program.clone(),
                delegate: self.delegate.clone(),
                token_account: self.token_account.clone(),
                edition: self.edition.clone(),
                mint: self.mint.clone(),
                token_program: self.token_program.clone(),
            },
            &[delegate_seeds],
        ))
        .map_err(|e| custody_failure("thaw", e))?;

        token::revoke(CpiContext::new(
            self.token_program.clone(),
            Revoke {
                source: self.token_account.clone(),
                authority: self.owner.clone(),
            },
        ))
        .map_err(|e| custody_failure("revoke", e))?;

        msg!("Token account {} thawed and revoked", self.token_account.key());
        Ok(())
    }
}

fn custody_failure(call: &str, err: Error) -> Error {
    msg!("Custody call {} failed: {}", call, err);
    error!(StakingError::CustodyFailure)
}
