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

//! Initialize mint with hook instruction handler

use {
    crate::{events::MintInitialized, seeds::EXTRA_ACCOUNT_METAS_SEED, utils},
    anchor_lang::prelude::*,
    anchor_spl::token_interface::{Mint, TokenInterface},
};

#[event_cpi]
#[derive(Accounts)]
#[instruction(params: InitializeMintWithHookParams)]
pub struct InitializeMintWithHookContext<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The new mint, created with the transfer hook extension pointing at
    /// this program.
    #[account(
        init,
        payer = payer,
        mint::decimals = params.decimals,
        mint::authority = payer,
        extensions::transfer_hook::authority = payer,
        extensions::transfer_hook::program_id = crate::ID,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// CHECK: extra account meta list PDA, created and written in the handler
    #[account(
        mut,
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump
    )]
    pub extra_account_meta_list: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Interface<'info, TokenInterface>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone)]
pub struct InitializeMintWithHookParams {
    pub decimals: u8,
}

pub fn initialize_mint_with_hook(
    ctx: Context<InitializeMintWithHookContext>,
    _params: &InitializeMintWithHookParams,
) -> Result<()> {
    let mint = ctx.accounts.mint.key();

    utils::create_extra_account_meta_list_account(
        &ctx.accounts.extra_account_meta_list.to_account_info(),
        &mint,
        ctx.bumps.extra_account_meta_list,
        &ctx.accounts.payer.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
    )?;

    emit_cpi!(MintInitialized {
        mint,
        extra_account_meta_list: ctx.accounts.extra_account_meta_list.key(),
    });

    Ok(())
}
