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

#[event(discriminator = [10, 0])]
pub struct HookConfigInitialized {
    pub admin: Pubkey,
}

#[event(discriminator = [10, 1])]
pub struct AdminUpdated {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event(discriminator = [10, 2])]
pub struct WalletWhitelisted {
    pub owner: Pubkey,
}

#[event(discriminator = [10, 3])]
pub struct WalletRemovedFromWhitelist {
    pub owner: Pubkey,
}

#[event(discriminator = [10, 4])]
pub struct MintInitialized {
    pub mint: Pubkey,
    pub extra_account_meta_list: Pubkey,
}
