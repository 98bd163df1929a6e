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

//! Add to whitelist instruction handler

use {
    crate::{
        error::WhitelistHookError,
        events::WalletWhitelisted,
        seeds::{CONFIG_SEED, WHITELIST_SEED},
        state::{HookConfig, WhitelistRecord},
        utils,
    },
    anchor_lang::prelude::*,
};

#[event_cpi]
#[derive(Accounts)]
#[instruction(params: AddToWhitelistParams)]
pub struct AddToWhitelistContext<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(address = config.admin @ WhitelistHookError::Unauthorized)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, HookConfig>,

    // init_if_needed so a live record reaches the handler, which rejects it
    // with AlreadyWhitelisted instead of a raw system error.
    #[account(
        init_if_needed,
        payer = payer,
        space = utils::DISCRIMINATOR_SIZE + WhitelistRecord::INIT_SPACE,
        seeds = [WHITELIST_SEED, params.owner.as_ref()],
        bump
    )]
    pub whitelist_record: Account<'info, WhitelistRecord>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone)]
pub struct AddToWhitelistParams {
    pub owner: Pubkey,
}

pub fn add_to_whitelist(
    ctx: Context<AddToWhitelistContext>,
    params: &AddToWhitelistParams,
) -> Result<()> {
    require_keys_neq!(
        params.owner,
        Pubkey::default(),
        WhitelistHookError::InvalidOwner
    );

    let record = &mut ctx.accounts.whitelist_record;

    // A freshly created record has a zeroed owner; anything else means the
    // wallet already holds a record.
    require_keys_eq!(
        record.owner,
        Pubkey::default(),
        WhitelistHookError::AlreadyWhitelisted
    );

    record.bump = ctx.bumps.whitelist_record;
    record.owner = params.owner;
    record.is_whitelisted = true;

    emit_cpi!(WalletWhitelisted {
        owner: params.owner,
    });

    Ok(())
}
