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

//! Initialize extra account metas instruction handler
//!
//! Standalone creation of the extra account meta list for a mint that already
//! exists, wire-compatible with the transfer hook interface's
//! InitializeExtraAccountMetaList instruction (account order included).

use {
    crate::{error::WhitelistHookError, seeds::EXTRA_ACCOUNT_METAS_SEED, utils},
    anchor_lang::{prelude::*, solana_program::program_option::COption},
    anchor_spl::token_interface::Mint,
};

#[derive(Accounts)]
pub struct InitializeExtraAccountMetasContext<'info> {
    /// CHECK: extra account meta list PDA, created and written in the handler
    #[account(
        mut,
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump
    )]
    pub extra_account_meta_list: UncheckedAccount<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// The mint authority, which also funds the list account.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_extra_account_metas(
    ctx: Context<InitializeExtraAccountMetasContext>,
) -> Result<()> {
    require!(
        ctx.accounts.mint.mint_authority == COption::Some(ctx.accounts.authority.key()),
        WhitelistHookError::Unauthorized
    );

    utils::create_extra_account_meta_list_account(
        &ctx.accounts.extra_account_meta_list.to_account_info(),
        &ctx.accounts.mint.key(),
        ctx.bumps.extra_account_meta_list,
        &ctx.accounts.authority.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
    )?;

    Ok(())
}
