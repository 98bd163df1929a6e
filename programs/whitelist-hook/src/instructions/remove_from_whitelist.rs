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

//! Remove from whitelist instruction handler

use {
    crate::{
        error::WhitelistHookError,
        events::WalletRemovedFromWhitelist,
        seeds::{CONFIG_SEED, WHITELIST_SEED},
        state::{HookConfig, WhitelistRecord},
        utils,
    },
    anchor_lang::prelude::*,
};

#[event_cpi]
#[derive(Accounts)]
#[instruction(params: RemoveFromWhitelistParams)]
pub struct RemoveFromWhitelistContext<'info> {
    /// Receives the closed record's rent deposit.
    #[account(mut, address = config.admin @ WhitelistHookError::Unauthorized)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, HookConfig>,

    /// CHECK: validated and closed in the handler so a missing record
    /// surfaces as WhitelistRecordNotFound
    #[account(
        mut,
        seeds = [WHITELIST_SEED, params.owner.as_ref()],
        bump
    )]
    pub whitelist_record: UncheckedAccount<'info>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone)]
pub struct RemoveFromWhitelistParams {
    pub owner: Pubkey,
}

pub fn remove_from_whitelist(
    ctx: Context<RemoveFromWhitelistContext>,
    params: &RemoveFromWhitelistParams,
) -> Result<()> {
    let record_account = &ctx.accounts.whitelist_record;

    require!(
        record_account.owner == &crate::ID && !record_account.data_is_empty(),
        WhitelistHookError::WhitelistRecordNotFound
    );

    {
        let data = record_account.try_borrow_data()?;
        let mut slice: &[u8] = &data;
        let record = WhitelistRecord::try_deserialize(&mut slice)?;
        require_keys_eq!(
            record.owner,
            params.owner,
            WhitelistHookError::AccountResolutionFailure
        );
    }

    utils::close_record_account(
        &record_account.to_account_info(),
        &ctx.accounts.admin.to_account_info(),
    )?;

    emit_cpi!(WalletRemovedFromWhitelist {
        owner: params.owner,
    });

    Ok(())
}
