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

#![allow(unexpected_cfgs)]

//! WhitelistHook program entrypoint

pub mod error;
pub mod events;
pub mod instructions;
pub mod seeds;
pub mod state;
pub mod utils;

#[cfg(test)]
mod tests;

use {anchor_lang::prelude::*, instructions::*};

use spl_discriminator::SplDiscriminate;
use spl_transfer_hook_interface::instruction::{
    ExecuteInstruction, InitializeExtraAccountMetaListInstruction,
};

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Whitelist Hook",
    project_url: "https://github.com/circlefin/solana-whitelist-hook",
    contacts: "link:https://github.com/circlefin/solana-whitelist-hook/blob/master/SECURITY.md",
    policy: "https://github.com/circlefin/solana-whitelist-hook/blob/master/SECURITY.md"
}

declare_id!("2wYxJbLHEv8ye6bFfFRW8tJf8ZQz2MaY5uHR4wFftndU");

#[program]
pub mod whitelist_hook {
    use super::*;

    #[instruction(discriminator = [12, 0])]
    pub fn initialize(ctx: Context<InitializeContext>) -> Result<()> {
        instructions::initialize(ctx)
    }

    #[instruction(discriminator = [12, 1])]
    pub fn update_admin(
        ctx: Context<UpdateAdminContext>,
        params: UpdateAdminParams,
    ) -> Result<()> {
        instructions::update_admin(ctx, &params)
    }

    #[instruction(discriminator = [12, 2])]
    pub fn add_to_whitelist(
        ctx: Context<AddToWhitelistContext>,
        params: AddToWhitelistParams,
    ) -> Result<()> {
        instructions::add_to_whitelist(ctx, &params)
    }

    #[instruction(discriminator = [12, 3])]
    pub fn remove_from_whitelist(
        ctx: Context<RemoveFromWhitelistContext>,
        params: RemoveFromWhitelistParams,
    ) -> Result<()> {
        instructions::remove_from_whitelist(ctx, &params)
    }

    #[instruction(discriminator = [12, 4])]
    pub fn initialize_mint_with_hook(
        ctx: Context<InitializeMintWithHookContext>,
        params: InitializeMintWithHookParams,
    ) -> Result<()> {
        instructions::initialize_mint_with_hook(ctx, &params)
    }

    #[instruction(discriminator = InitializeExtraAccountMetaListInstruction::SPL_DISCRIMINATOR_SLICE)]
    pub fn initialize_extra_account_metas(
        ctx: Context<InitializeExtraAccountMetasContext>,
    ) -> Result<()> {
        instructions::initialize_extra_account_metas(ctx)
    }

    #[instruction(discriminator = ExecuteInstruction::SPL_DISCRIMINATOR_SLICE)]
    pub fn transfer_hook(ctx: Context<TransferHookContext>, amount: u64) -> Result<()> {
        instructions::transfer_hook(ctx, amount)
    }
}
