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

//! PDA seed constants

/// Seed for the HookConfig PDA
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix for per-wallet whitelist record PDAs
pub const WHITELIST_SEED: &[u8] = b"whitelist";

/// Seed prefix for the per-mint extra account meta list PDA, fixed by the
/// transfer hook interface convention
pub const EXTRA_ACCOUNT_METAS_SEED: &[u8] = b"extra-account-metas";
