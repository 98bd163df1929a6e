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

#[error_code]
pub enum WhitelistHookError {
    // Authorization
    #[msg("Invalid authority")]
    Unauthorized,

    // Whitelist management
    #[msg("Wallet is already whitelisted")]
    AlreadyWhitelisted,
    #[msg("Whitelist record not found")]
    WhitelistRecordNotFound,
    #[msg("Invalid whitelist owner")]
    InvalidOwner,

    // Mint initialization
    #[msg("Extra account metas already initialized")]
    ExtraAccountMetasAlreadyInitialized,

    // Transfer hook
    #[msg("Source owner is not whitelisted")]
    OwnerNotWhitelisted,
    #[msg("Recipient is not whitelisted")]
    RecipientNotWhitelisted,
    #[msg("Extra accounts do not match the declared resolution list")]
    AccountResolutionFailure,
    #[msg("Source token account is not in a transfer")]
    TransferNotInProgress,
}
