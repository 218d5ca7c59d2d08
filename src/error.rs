// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required field is missing or invalid. The message is what the user sees.
    #[error("{0}")]
    Validation(&'static str),
    #[error("Invalid file format")]
    InvalidImport,
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Failures surfaced to the user as a notification; everything else propagates.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::InvalidImport)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
