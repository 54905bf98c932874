//! # Commands
//!
//! CLI command implementations for rdesk.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod convert;
pub mod init;
pub mod preview;
pub mod session;

pub use self::{
    completions::execute as completions,
    convert::{execute as convert, ConvertArgs},
    init::execute as init,
    preview::{execute as preview, PreviewArgs},
    session::{execute as session, SessionArgs},
};
