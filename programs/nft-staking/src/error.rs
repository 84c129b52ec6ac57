use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Max stake limit reached")]
    CapacityExceeded = 0,
    #[msg("Freeze period not over")]
    FreezePeriodNotOver = 1,
    #[msg("Account already initialized")]
    AlreadyInitialized = 2,
    #[msg("Account not found")]
    NotFound = 3,
    #[msg("Signer does not match the record authority")]
    Unauthorized = 4,
    #[msg("Token is not a verified member of the collection")]
    InvalidCollection = 5,
    #[msg("Token is already staked")]
    AlreadyStaked = 6,

    #[msg("Token custody call failed")]
    CustodyFailure = 7,
    #[msg("Stake bookkeeping is inconsistent")]
    InvariantViolation = 8,
    #[msg("Token account does not hold exactly one token")]
    InsufficientBalance = 9,
    #[msg("Freeze period cannot be negative")]
    InvalidFreezePeriod = 11,
    #[msg("Account address does not match its derivation")]
    InvalidAccountAddress = 12,
    #[msg("Arithmetic overflow")]
    MathOverflow = 13,
}

#[cfg(test)]
pub(crate) fn code_of(err: anchor_lang::error::Error) -> u32 {
    use anchor_lang::error::Error;
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => panic!("expected an anchor error, got {}", e.program_error),
    }
}
