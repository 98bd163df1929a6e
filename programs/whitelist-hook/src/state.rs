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

use anchor_lang::prelude::*;

#[account(discriminator = [11, 0])]
#[derive(Debug, InitSpace)]
/// Program configuration, created once. The recorded admin is the only
/// signer allowed to mutate whitelist records.
pub struct HookConfig {
    pub bump: u8,
    pub admin: Pubkey,
}

#[account(discriminator = [11, 1])]
#[derive(Debug, InitSpace)]
/// Per-wallet whitelist record. The address is derived from
/// `["whitelist", owner]`, so the record is a pure function of the wallet
/// address and distinct owners can never collide.
pub struct WhitelistRecord {
    pub bump: u8,
    /// Immutable once set
    pub owner: Pubkey,
    pub is_whitelisted: bool,
}

impl WhitelistRecord {
    /// A record approves a transfer party only if it was created for that
    /// exact owner and the flag is still set.
    pub fn approves(&self, owner: &Pubkey) -> bool {
        self.owner == *owner && self.is_whitelisted
    }
}
