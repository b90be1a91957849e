// ABOUTME: Re-exports command modules for fitlog-cli
// ABOUTME: Provides access to solver, goal, food catalog, and meal commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod foods;
pub mod goal;
pub mod meals;
pub mod solver;
