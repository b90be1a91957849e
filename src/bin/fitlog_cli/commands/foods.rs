// ABOUTME: Food catalog commands for fitlog-cli
// ABOUTME: Fetches the backend food catalog and filters it by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitlog::errors::AppResult;
use fitlog::external::FitnessApiClient;
use fitlog::intelligence::search_foods;

use crate::helpers::display::print_json;

/// Print catalog foods whose name contains `query`
pub async fn search(query: &str) -> AppResult<()> {
    let client = FitnessApiClient::from_env()?;
    let catalog = client.list_foods().await?;
    let matches = search_foods(&catalog, query);
    print_json(&matches)
}
