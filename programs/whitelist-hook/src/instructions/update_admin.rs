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

//! Update admin instruction handler

use {
    crate::{error::WhitelistHookError, events::AdminUpdated, seeds::CONFIG_SEED, state::HookConfig},
    anchor_lang::prelude::*,
};

#[event_cpi]
#[derive(Accounts)]
pub struct UpdateAdminContext<'info> {
    #[account(address = config.admin @ WhitelistHookError::Unauthorized)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, HookConfig>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone)]
pub struct UpdateAdminParams {
    pub new_admin: Pubkey,
}

pub fn update_admin(ctx: Context<UpdateAdminContext>, params: &UpdateAdminParams) -> Result<()> {
    require_keys_neq!(
        params.new_admin,
        Pubkey::default(),
        WhitelistHookError::InvalidOwner
    );

    let config = &mut ctx.accounts.config;
    let old_admin = config.admin;
    config.admin = params.new_admin;

    emit_cpi!(AdminUpdated {
        old_admin,
        new_admin: params.new_admin,
    });

    Ok(())
}
