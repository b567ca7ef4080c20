//! Fatal-failure path and error taxonomy.
//!
//! Every precondition violation in the crate ends up here: a cast that was
//! asserted to succeed but did not, a non-nullable operation that was handed
//! an absent value, or an extensible type whose metadata names a base it does
//! not embed.
//!
//! The failure is reported through the `log` facade at error level (target
//! `tola_cast`) and then turned into a panic carrying the same text. The
//! checks are not compiled out in release builds.

use core::any::type_name;
use core::panic::Location;

/// Log target used by every record the crate emits.
pub const LOG_TARGET: &str = "tola_cast";

/// A violated casting precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    /// A checked cast was applied to a value of a different kind.
    #[error("{op}<{to}>({from}) argument of incompatible type")]
    Incompatible {
        op: &'static str,
        to: &'static str,
        from: &'static str,
    },

    /// A non-nullable operation received an absent value.
    #[error("{op}<{to}>({from}) called on a non-existent value")]
    Absent {
        op: &'static str,
        to: &'static str,
        from: &'static str,
    },

    /// Identity metadata claims a base that the object does not embed.
    #[error("`{from}` reports `{to}` as a base but embeds no such sub-object")]
    MissingBase { to: &'static str, from: &'static str },
}

impl CastError {
    pub fn incompatible<To: ?Sized, From: ?Sized>(op: &'static str) -> Self {
        CastError::Incompatible {
            op,
            to: type_name::<To>(),
            from: type_name::<From>(),
        }
    }

    pub fn absent<To: ?Sized, From: ?Sized>(op: &'static str) -> Self {
        CastError::Absent {
            op,
            to: type_name::<To>(),
            from: type_name::<From>(),
        }
    }

    pub fn missing_base<To: ?Sized>(from: &'static str) -> Self {
        CastError::MissingBase {
            to: type_name::<To>(),
            from,
        }
    }

    /// Name of the operation that tripped, if the variant records one.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            CastError::Incompatible { op, .. } | CastError::Absent { op, .. } => Some(*op),
            CastError::MissingBase { .. } => None,
        }
    }
}

/// Report `error` and abort the current operation by panicking.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fatal(error: CastError) -> ! {
    let location = Location::caller();
    log::error!(target: LOG_TARGET, "{error} at {location}");
    panic!("{error}")
}

#[cold]
#[track_caller]
pub(crate) fn incompatible<To: ?Sized, From: ?Sized>(op: &'static str) -> ! {
    fatal(CastError::incompatible::<To, From>(op))
}

#[cold]
#[track_caller]
pub(crate) fn absent<To: ?Sized, From: ?Sized>(op: &'static str) -> ! {
    fatal(CastError::absent::<To, From>(op))
}
