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

//! Transfer hook Execute handler
//!
//! Invoked by the token program via CPI on every transfer of a mint carrying
//! the hook extension. Read-only with respect to whitelist state; the only
//! outcomes are returning Ok (the transfer proceeds) or an error (the whole
//! transaction aborts).

use {
    crate::{
        error::WhitelistHookError,
        seeds::{EXTRA_ACCOUNT_METAS_SEED, WHITELIST_SEED},
        utils,
    },
    anchor_lang::prelude::*,
    anchor_spl::{
        token_2022::spl_token_2022::{
            extension::{
                transfer_hook::TransferHookAccount, BaseStateWithExtensions,
                PodStateWithExtensionsMut,
            },
            pod::PodAccount,
        },
        token_interface::{Mint, TokenAccount},
    },
    std::cell::RefMut,
};

#[derive(Accounts)]
pub struct TransferHookContext<'info> {
    #[account(
        token::mint = mint,
        token::authority = owner,
    )]
    pub source_token: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        token::mint = mint,
    )]
    pub destination_token: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: owner of the source token account, passed by the token program
    pub owner: UncheckedAccount<'info>,

    /// CHECK: extra account meta list PDA, existence checked in the handler
    #[account(
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump
    )]
    pub extra_account_meta_list: UncheckedAccount<'info>,

    /// CHECK: whitelist record for the source owner, may not exist
    #[account(
        seeds = [WHITELIST_SEED, owner.key().as_ref()],
        bump
    )]
    pub source_whitelist: UncheckedAccount<'info>,

    /// CHECK: whitelist record for the destination owner, may not exist
    #[account(
        seeds = [WHITELIST_SEED, destination_token.owner.as_ref()],
        bump
    )]
    pub destination_whitelist: UncheckedAccount<'info>,
}

impl<'info> TransferHookContext<'info> {
    /// The token program flips the `transferring` flag on the source account
    /// for the duration of the transfer. Rejecting invocations without the
    /// flag closes off direct calls to this instruction.
    fn check_is_transferring(&self) -> Result<()> {
        let source_token_info = self.source_token.to_account_info();
        let mut account_data_ref: RefMut<&mut [u8]> = source_token_info.try_borrow_mut_data()?;

        let account = PodStateWithExtensionsMut::<PodAccount>::unpack(*account_data_ref)?;
        let extension = account.get_extension::<TransferHookAccount>()?;

        require!(
            bool::from(extension.transferring),
            WhitelistHookError::TransferNotInProgress
        );

        Ok(())
    }
}

pub fn transfer_hook(ctx: Context<TransferHookContext>, amount: u64) -> Result<()> {
    ctx.accounts.check_is_transferring()?;

    // The list must have been created at mint initialization; an empty
    // account here means the supplied accounts cannot match any declared
    // resolution.
    require!(
        !ctx.accounts.extra_account_meta_list.data_is_empty(),
        WhitelistHookError::AccountResolutionFailure
    );

    let source_owner = ctx.accounts.owner.key();
    require!(
        utils::is_wallet_whitelisted(&ctx.accounts.source_whitelist, &source_owner),
        WhitelistHookError::OwnerNotWhitelisted
    );

    #[cfg(feature = "enforce-both-parties")]
    require!(
        utils::is_wallet_whitelisted(
            &ctx.accounts.destination_whitelist,
            &ctx.accounts.destination_token.owner,
        ),
        WhitelistHookError::RecipientNotWhitelisted
    );

    msg!("Transfer of {} approved for {}", amount, source_owner);

    Ok(())
}
