// ABOUTME: Application constants re-exported from fitlog-core
// ABOUTME: Energy densities, backend endpoints, service names, and goal defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module

pub use fitlog_core::constants::*;
