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

//! Instructions

pub mod add_to_whitelist;
pub mod initialize;
pub mod initialize_extra_account_metas;
pub mod initialize_mint_with_hook;
pub mod remove_from_whitelist;
pub mod transfer_hook;
pub mod update_admin;

pub use add_to_whitelist::*;
pub use initialize::*;
pub use initialize_extra_account_metas::*;
pub use initialize_mint_with_hook::*;
pub use remove_from_whitelist::*;
pub use transfer_hook::*;
pub use update_admin::*;
