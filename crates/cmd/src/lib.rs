// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod commands;
pub mod common;
pub mod error_utils;
pub mod parse;
pub mod session;

pub use session::{Flow, Session};

#[cfg(test)]
mod tests;
