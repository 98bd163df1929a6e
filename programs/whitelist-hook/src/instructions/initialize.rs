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

//! Initialize instruction handler

use {
    crate::{
        error::WhitelistHookError, events::HookConfigInitialized, seeds::CONFIG_SEED,
        state::HookConfig, utils,
    },
    anchor_lang::prelude::*,
};

#[event_cpi]
#[derive(Accounts)]
pub struct InitializeContext<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Recorded as the whitelist administrator. Must sign so the role cannot
    /// be assigned to an arbitrary third party.
    pub admin: Signer<'info>,

    /// HookConfig state account; the deterministic address makes this a
    /// one-shot instruction.
    #[account(
        init,
        payer = payer,
        space = utils::DISCRIMINATOR_SIZE + HookConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, HookConfig>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<InitializeContext>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    require_keys_neq!(admin, Pubkey::default(), WhitelistHookError::InvalidOwner);

    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.admin = admin;

    emit_cpi!(HookConfigInitialized { admin });

    Ok(())
}
