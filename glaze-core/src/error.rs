// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::borrow::Cow;

use thiserror::Error;

/// Boxed error produced by user-registered handlers.
///
/// Custom serializers, deserializers and instance creators may fail with any
/// error type; the pipeline wraps it in [`Error::Handler`] together with the
/// type the handler was invoked for.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for Glaze serialization and deserialization.
///
/// Every variant is terminal for the call that produced it: the partially
/// built node tree is discarded and nothing is emitted. Informational
/// warnings (such as a handler registration being overwritten) never surface
/// here; they go through the `log` facade so hosts can separate them from
/// failures.
///
/// Prefer the static constructor functions (`Error::cycle`,
/// `Error::mismatch`, ...) over building variants directly; they keep
/// message formatting in one place.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The object graph contains a directed cycle reachable from the root.
    #[error("circular reference while serializing {0}")]
    Cycle(Cow<'static, str>),

    /// Reading or writing a field failed; carries the failing field and the
    /// underlying cause.
    #[error("cannot access field {type_name}.{field}: {source}")]
    Access {
        type_name: Cow<'static, str>,
        field: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// A user-registered handler raised; the original error is chained.
    #[error("custom handler for {type_name} failed: {source}")]
    Handler {
        type_name: Cow<'static, str>,
        #[source]
        source: HandlerError,
    },

    /// A JSON node's shape is incompatible with the declared type.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: Cow<'static, str>,
        found: Cow<'static, str>,
    },

    /// No instance creator and no viable default construction path.
    #[error("cannot construct {type_name}: {reason}")]
    Unconstructible {
        type_name: Cow<'static, str>,
        reason: Cow<'static, str>,
    },

    /// Malformed JSON text.
    #[error("syntax error at offset {offset}: {message}")]
    Syntax {
        offset: usize,
        message: Cow<'static, str>,
    },
}

impl Error {
    /// Creates a new [`Error::Cycle`] naming the type that closed the cycle.
    #[cold]
    #[track_caller]
    pub fn cycle<S: Into<Cow<'static, str>>>(type_name: S) -> Self {
        Error::Cycle(type_name.into())
    }

    /// Creates a new [`Error::Access`] wrapping a field-level failure.
    #[cold]
    #[track_caller]
    pub fn access<S: Into<Cow<'static, str>>>(type_name: S, field: &'static str, source: Error) -> Self {
        Error::Access {
            type_name: type_name.into(),
            field,
            source: Box::new(source),
        }
    }

    /// Creates a new [`Error::Handler`] chaining the handler's own error.
    #[cold]
    #[track_caller]
    pub fn handler<S: Into<Cow<'static, str>>>(type_name: S, source: HandlerError) -> Self {
        Error::Handler {
            type_name: type_name.into(),
            source,
        }
    }

    /// Creates a new [`Error::Mismatch`] between an expected shape and what
    /// was actually found.
    #[cold]
    #[track_caller]
    pub fn mismatch<E, F>(expected: E, found: F) -> Self
    where
        E: Into<Cow<'static, str>>,
        F: Into<Cow<'static, str>>,
    {
        Error::Mismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates a new [`Error::Unconstructible`].
    #[cold]
    #[track_caller]
    pub fn unconstructible<S, R>(type_name: S, reason: R) -> Self
    where
        S: Into<Cow<'static, str>>,
        R: Into<Cow<'static, str>>,
    {
        Error::Unconstructible {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new [`Error::Syntax`] at a byte offset of the input text.
    #[cold]
    #[track_caller]
    pub fn syntax<S: Into<Cow<'static, str>>>(offset: usize, message: S) -> Self {
        Error::Syntax {
            offset,
            message: message.into(),
        }
    }

    /// True for cycle failures; convenient in tests.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Error::Cycle(_))
    }
}
