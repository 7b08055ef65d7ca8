// Copyright 2026 The stackbench Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error and Result implementations.

use std::fmt;

/// Kind of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An argument supplied to a scenario is missing, malformed or does not
    /// match the cloud state unambiguously.
    InvalidScenarioArgument,

    /// A lifecycle operation failed to complete.
    OperationFailed,

    /// A lifecycle operation has reached the specified time out.
    OperationTimedOut,
}

/// Error from a benchmarking call.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

/// Result of a benchmarking call.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new error with a message.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Error {
        Error {
            kind,
            message: message.into(),
        }
    }

    /// Error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ErrorKind {
    /// Short description of the error kind.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::InvalidScenarioArgument => "Invalid scenario argument",
            ErrorKind::OperationFailed => "Requested operation has failed",
            ErrorKind::OperationTimedOut => "Time out reached while waiting for the operation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

// Both conversions can only be triggered by user-supplied scenario
// arguments: invalid regular expressions and malformed argument values.

impl From<regex::Error> for Error {
    fn from(value: regex::Error) -> Error {
        Error::new(ErrorKind::InvalidScenarioArgument, value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Error {
        Error::new(ErrorKind::InvalidScenarioArgument, value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::InvalidScenarioArgument, "flavor not found");
        assert_eq!(
            err.to_string(),
            "Invalid scenario argument: flavor not found"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidScenarioArgument);
        assert_eq!(err.message(), "flavor not found");
    }

    #[test]
    fn test_from_regex_error() {
        let err = Error::from(regex::Regex::new("[").unwrap_err());
        assert_eq!(err.kind(), ErrorKind::InvalidScenarioArgument);
    }
}
