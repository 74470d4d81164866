// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default name width.
//!
//! This is the only piece of global state in the crate.  It is read exactly once per
//! [`Logger`](crate::Logger), when the logger is constructed without an explicit width, and
//! the logger keeps its own copy from then on.  Changing the default therefore affects
//! loggers constructed *afterwards* and leaves existing ones alone.
//!
//! # Examples
//!
//! ```
//! use tagwise::{Logger, NameWidth, default_name_width, set_default_name_width};
//!
//! let before = Logger::new();
//! let old = default_name_width();
//! set_default_name_width(NameWidth::Chars(8));
//! let after = Logger::new();
//!
//! assert_eq!(before.name_width(), old);
//! assert_eq!(after.name_width(), NameWidth::Chars(8));
//! # set_default_name_width(old);
//! ```
//!
//! # Thread Safety
//!
//! The value sits behind a single `RwLock`.  Reads and writes are each one copy of a
//! two-word value, so the lock is held only for that long.  A poisoned lock is recovered,
//! since a `NameWidth` cannot be left half-written.

use crate::name_tag::NameWidth;
use std::sync::{PoisonError, RwLock};

static DEFAULT_NAME_WIDTH: RwLock<NameWidth> = RwLock::new(NameWidth::DEFAULT);

/// Serializes unit tests that touch or depend on the default.
#[cfg(test)]
pub(crate) static TEST_WIDTH_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// The width new loggers start with when their [`Config`](crate::Config) names none.
pub fn default_name_width() -> NameWidth {
    *DEFAULT_NAME_WIDTH
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Changes the width for loggers constructed from now on.
pub fn set_default_name_width(width: impl Into<NameWidth>) {
    replace_default_name_width(width.into());
}

/// Changes the default and returns the previous one, e.g. to restore it later.
pub fn replace_default_name_width(width: NameWidth) -> NameWidth {
    let mut slot = DEFAULT_NAME_WIDTH
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let previous = *slot;
    *slot = width;
    log::debug!("default name width {previous:?} -> {width:?}");
    previous
}
