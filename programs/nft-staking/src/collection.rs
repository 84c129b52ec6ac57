use crate::error::StakingError;
use anchor_lang::prelude::*;
use anchor_spl::metadata::mpl_token_metadata::types::Collection;

/// Checks the collection recorded in a token's metadata against the expected
/// collection mint. Unverified membership counts as no membership.
pub fn verify_membership(collection: Option<&Collection>, collection_mint: &Pubkey) -> Result<()> {
    match collection {
        Some(collection)
            if collection.verified && collection.key.as_ref() == collection_mint.as_ref() =>
        {
            Ok(())
        }
        Some(collection) => {
            msg!(
                "Collection mismatch: metadata {} (verified {}), expected {}",
                collection.key,
                collection.verified,
                collection_mint
            );
            err!(StakingError::InvalidCollection)
        }
        None => {
            msg!("Token metadata carries no collection");
            err!(StakingError::InvalidCollection)
        }
    }
}
