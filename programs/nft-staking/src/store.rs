use crate::error::StakingError;
use crate::state::DISCRIMINATOR_LEN;
use anchor_lang::error::{Error, ErrorCode};
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use anchor_lang::Space;

/// A program record as found at its derived address.
#[derive(Debug, PartialEq)]
pub enum Record<T> {
    Open(T),
    Absent,
}

impl<T> Record<T>
where
    T: AccountDeserialize + Owner,
{
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.owner == &system_program::ID && info.data_is_empty() {
            return Ok(Record::Absent);
        }
        if info.owner != &T::owner() {
            return Err(Error::from(ErrorCode::AccountOwnedByWrongProgram)
                .with_pubkeys((*info.owner, T::owner())));
        }
        let data = info.try_borrow_data()?;
        let record = T::try_deserialize(&mut &data[..])?;
        Ok(Record::Open(record))
    }

    pub fn open(self) -> Result<T> {
        match self {
            Record::Open(record) => Ok(record),
            Record::Absent => err!(StakingError::NotFound),
        }
    }

    pub fn ensure_absent(&self, occupied: StakingError) -> Result<()> {
        match self {
            Record::Open(_) => Err(error!(occupied)),
            Record::Absent => Ok(()),
        }
    }
}

/// Allocates a rent-exempt account at a program address and writes `record`
/// into it. An address that was pre-funded is topped up, allocated and
/// assigned instead of created.
pub fn create<'info, T>(
    record: &T,
    target: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    signer_seeds: &[&[u8]],
) -> Result<()>
where
    T: AccountSerialize + Owner + Space,
{
    let space = DISCRIMINATOR_LEN + T::INIT_SPACE;
    let required = Rent::get()?.minimum_balance(space);
    let signer = &[signer_seeds];
    let current = target.lamports();

    if current == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer,
            ),
            required,
            space as u64,
            &T::owner(),
        )?;
    } else {
        let shortfall = required.saturating_sub(current);
        if shortfall > 0 {
            system_program::transfer(
                CpiContext::new(
                    system_program.clone(),
                    Transfer {
                        from: payer.clone(),
                        to: target.clone(),
                    },
                ),
                shortfall,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                Allocate {
                    account_to_allocate: target.clone(),
                },
                signer,
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system_program.clone(),
                Assign {
                    account_to_assign: target.clone(),
                },
                signer,
            ),
            &T::owner(),
        )?;
    }

    save(record, target)
}

pub fn save<T: AccountSerialize>(record: &T, target: &AccountInfo) -> Result<()> {
    let mut data = target.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)?;
    Ok(())
}

/// Closes a program account, returning its lamports to `destination`.
/// The address reads as [`Record::Absent`] afterwards.
pub fn close<'info>(target: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<()> {
    let reclaimed = target.lamports();
    let balance = destination
        .lamports()
        .checked_add(reclaimed)
        .ok_or(StakingError::MathOverflow)?;

    **destination.try_borrow_mut_lamports()? = balance;
    **target.try_borrow_mut_lamports()? = 0;

    target.assign(&system_program::ID);
    #[allow(deprecated)]
    target.realloc(0, false)?;
    Ok(())
}
