//! # Review Session
//!
//! Upload records, the caller-owned upload queue and the page handlers of
//! the interactive session.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod pages;
pub mod queue;
pub mod upload;

pub use self::{
    pages::{HomeSummary, Page, ProcessOutcome},
    queue::{UploadQueue, UploadRecord},
    upload::{inspect, is_accepted, DocumentType, UploadLimits},
};
