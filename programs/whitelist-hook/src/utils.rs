/*
 * Copyright (c) 2025, Circle Internet Financial LTD All Rights Reserved.
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Common utility functions.

use {
    crate::{
        error::WhitelistHookError,
        seeds::{EXTRA_ACCOUNT_METAS_SEED, WHITELIST_SEED},
        state::WhitelistRecord,
    },
    anchor_lang::{prelude::*, solana_program::program_error::ProgramError},
    spl_tlv_account_resolution::{
        account::ExtraAccountMeta, seeds::Seed, state::ExtraAccountMetaList,
    },
    spl_transfer_hook_interface::instruction::ExecuteInstruction,
};

pub const DISCRIMINATOR_SIZE: usize = 2;

/// The account resolution list registered for every mint using this hook.
///
/// Both whitelist records are declared with derived seeds so the token
/// runtime resolves them at transfer time from the transfer's own accounts:
/// the source record from the transfer authority (Execute account 3), the
/// destination record from the owner field of the destination token account
/// (bytes 32..64 of Execute account 2).
pub fn extra_account_metas() -> Result<Vec<ExtraAccountMeta>> {
    Ok(vec![
        ExtraAccountMeta::new_with_seeds(
            &[
                Seed::Literal {
                    bytes: WHITELIST_SEED.to_vec(),
                },
                Seed::AccountKey { index: 3 },
            ],
            false, // is_signer
            false, // is_writable
        )?,
        ExtraAccountMeta::new_with_seeds(
            &[
                Seed::Literal {
                    bytes: WHITELIST_SEED.to_vec(),
                },
                Seed::AccountData {
                    account_index: 2,
                    data_index: 32,
                    length: 32,
                },
            ],
            false,
            false,
        )?,
    ])
}

/// Creates the extra account meta list PDA for a mint and writes the TLV
/// payload. The deterministic address doubles as the one-shot lock: a second
/// creation attempt finds the account populated and fails.
///
/// # Arguments
/// * `list_account` - The extra account meta list PDA (unchecked, with seeds
///   constraint on the context)
/// * `mint` - The mint the list belongs to
/// * `bump` - The bump seed for the PDA
/// * `payer` - The account funding the rent
/// * `system_program` - The system program account info
pub fn create_extra_account_meta_list_account<'info>(
    list_account: &AccountInfo<'info>,
    mint: &Pubkey,
    bump: u8,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    require!(
        list_account.data_is_empty(),
        WhitelistHookError::ExtraAccountMetasAlreadyInitialized
    );

    let extra_account_metas = extra_account_metas()?;
    let space = ExtraAccountMetaList::size_of(extra_account_metas.len())?;
    let required_rent = Rent::get()?.minimum_balance(space);
    let current_lamports = list_account.lamports();

    let signer_seeds: &[&[&[u8]]] = &[&[EXTRA_ACCOUNT_METAS_SEED, mint.as_ref(), &[bump]]];

    if current_lamports == 0 {
        anchor_lang::system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                anchor_lang::system_program::CreateAccount {
                    from: payer.clone(),
                    to: list_account.clone(),
                },
                signer_seeds,
            ),
            required_rent,
            space as u64,
            &crate::ID,
        )?;
    } else {
        // The address was pre-funded, so create_account is unavailable.
        // Top up the rent if needed, then allocate and assign the account.
        if current_lamports < required_rent {
            anchor_lang::system_program::transfer(
                CpiContext::new(
                    system_program.clone(),
                    anchor_lang::system_program::Transfer {
                        from: payer.clone(),
                        to: list_account.clone(),
                    },
                ),
                required_rent - current_lamports,
            )?;
        }

        anchor_lang::system_program::allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                anchor_lang::system_program::Allocate {
                    account_to_allocate: list_account.clone(),
                },
                signer_seeds,
            ),
            space as u64,
        )?;

        anchor_lang::system_program::assign(
            CpiContext::new_with_signer(
                system_program.clone(),
                anchor_lang::system_program::Assign {
                    account_to_assign: list_account.clone(),
                },
                signer_seeds,
            ),
            &crate::ID,
        )?;
    }

    ExtraAccountMetaList::init::<ExecuteInstruction>(
        &mut list_account.try_borrow_mut_data()?,
        &extra_account_metas,
    )?;

    Ok(())
}

/// Check whether a wallet is currently whitelisted.
///
/// The record account arrives as an UncheckedAccount resolved by the token
/// runtime; absence of the record, foreign ownership, or a cleared flag all
/// read as "not whitelisted" rather than an error.
///
/// # Arguments
/// * `record_account` - The whitelist record UncheckedAccount (with seeds
///   constraint)
/// * `owner` - The wallet the record must have been created for
pub fn is_wallet_whitelisted<'info>(
    record_account: &UncheckedAccount<'info>,
    owner: &Pubkey,
) -> bool {
    if record_account.owner != &crate::ID || record_account.data_is_empty() {
        return false;
    }

    let data = match record_account.try_borrow_data() {
        Ok(data) => data,
        Err(_) => return false,
    };
    let mut slice: &[u8] = &data;

    match WhitelistRecord::try_deserialize(&mut slice) {
        Ok(record) => record.approves(owner),
        Err(_) => false,
    }
}

/// Close a program-owned account, returning its lamports to `destination`.
pub fn close_record_account<'info>(
    account: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<()> {
    let lamports = account.lamports();

    **destination.try_borrow_mut_lamports()? = destination
        .lamports()
        .checked_add(lamports)
        .ok_or(ProgramError::ArithmeticOverflow)?;
    **account.try_borrow_mut_lamports()? = 0;

    account.assign(&anchor_lang::system_program::ID);
    account.realloc(0, false)?;

    Ok(())
}
