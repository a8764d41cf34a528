// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised when an inspection session cannot be configured.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Inspection was started without a document to observe.
    #[error("document required")]
    DocumentRequired,
    /// The document refused to attach a listener.
    ///
    /// The session stays idle; listeners attached before the failure are
    /// detached again.
    #[error("document refused the `{event}` listener")]
    ListenerRejected {
        /// DOM name of the event kind that could not be observed.
        event: &'static str,
    },
}
