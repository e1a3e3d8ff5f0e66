// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settle-all fan-out with explicit per-branch fallbacks.
//!
//! [`settle_all`] drives every future to completion and hands back one
//! `Result` per branch; a failing branch never cancels its siblings.
//! [`Settle::or_fallback`] then turns each `Result` into a value, logging the
//! failure and naming the slice it affected.

use std::fmt::Display;
use std::future::Future;

use futures::future::join_all;
use serde::Serialize;
use tracing::warn;

/// Await every future, in input order, keeping each outcome.
pub async fn settle_all<I, F, T, E>(futures: I) -> Vec<Result<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    join_all(futures).await
}

/// A dashboard slice that was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceFailure {
    pub slice: &'static str,
    pub message: String,
}

/// Outcome of [`Settle::or_fallback`].
#[derive(Debug, Clone, PartialEq)]
#[must_use = "record the failure or inspect it"]
pub struct Settled<T> {
    pub value: T,
    pub failure: Option<SliceFailure>,
}

impl<T> Settled<T> {
    /// Push any failure onto `failures` and return the value.
    pub fn record(self, failures: &mut Vec<SliceFailure>) -> T {
        failures.extend(self.failure);
        self.value
    }
}

pub trait Settle<T> {
    /// The success value, or `default` with the failure logged and attached.
    fn or_fallback(self, slice: &'static str, default: T) -> Settled<T>;
}

impl<T, E: Display> Settle<T> for Result<T, E> {
    fn or_fallback(self, slice: &'static str, default: T) -> Settled<T> {
        match self {
            Ok(value) => Settled {
                value,
                failure: None,
            },
            Err(e) => {
                warn!(slice, error = %e, "request failed, using fallback");
                Settled {
                    value: default,
                    failure: Some(SliceFailure {
                        slice,
                        message: e.to_string(),
                    }),
                }
            }
        }
    }
}
