//! Command Option Encoders
//!
//! Small closed enums mapped onto fixed command-flag tokens:
//!
//! - [`Expiration`] → `EX` / `PX` / nothing
//! - [`SetMode`] → `NX` / `XX` / nothing
//! - [`BitOperation`] → `AND` / `OR` / `NOT` / `XOR`
//! - [`ListPosition`] → `BEFORE` / `AFTER`
//!
//! Every mapping is an exhaustive `match`, so adding a variant without a
//! token is a compile error rather than a runtime surprise.

use crate::codec::unsigned_long_to_bytes;
use crate::params::CommandArgs;
use crate::protocol::tokens;
use bytes::Bytes;
use std::time::Duration;

/// Unit an expiration amount is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Milliseconds,
}

/// How long a written key lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    /// No expiry; the key lives until deleted
    Persistent,

    /// Expire after `amount` units. A missing unit means seconds.
    Timeout {
        amount: u64,
        unit: Option<TimeUnit>,
    },
}

impl Expiration {
    pub fn persistent() -> Self {
        Expiration::Persistent
    }

    pub fn new(amount: u64, unit: Option<TimeUnit>) -> Self {
        Expiration::Timeout { amount, unit }
    }

    pub fn seconds(amount: u64) -> Self {
        Self::new(amount, Some(TimeUnit::Seconds))
    }

    pub fn milliseconds(amount: u64) -> Self {
        Self::new(amount, Some(TimeUnit::Milliseconds))
    }

    /// Whole seconds stay in seconds; anything with a sub-second part is
    /// expressed in milliseconds, rounded up so a non-zero duration never
    /// becomes `PX 0`. Amounts beyond `u64::MAX` milliseconds saturate.
    pub fn from_duration(duration: Duration) -> Self {
        if duration.subsec_nanos() == 0 {
            Self::seconds(duration.as_secs())
        } else {
            let millis = duration.as_nanos().div_ceil(1_000_000);
            Self::milliseconds(u64::try_from(millis).unwrap_or(u64::MAX))
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Expiration::Persistent)
    }

    /// The amount, or `None` for a persistent expiration.
    pub fn amount(&self) -> Option<u64> {
        match self {
            Expiration::Persistent => None,
            Expiration::Timeout { amount, .. } => Some(*amount),
        }
    }

    /// The effective unit; seconds when none was given.
    pub fn unit(&self) -> TimeUnit {
        match self {
            Expiration::Persistent => TimeUnit::Seconds,
            Expiration::Timeout { unit, .. } => unit.unwrap_or_default(),
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Expiration::Persistent => None,
            Expiration::Timeout { amount, .. } => Some(match self.unit() {
                TimeUnit::Seconds => Duration::from_secs(*amount),
                TimeUnit::Milliseconds => Duration::from_millis(*amount),
            }),
        }
    }
}

/// Write condition for SET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetMode {
    /// Always write
    #[default]
    Upsert,
    /// Write only if the key does not exist (`NX`)
    IfAbsent,
    /// Write only if the key already exists (`XX`)
    IfPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOperation {
    And,
    Or,
    Not,
    Xor,
}

/// Insert position relative to the pivot element of LINSERT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPosition {
    Before,
    After,
}

/// Sort direction. Ascending is the server default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// SET expiry flag: empty for persistent (or absent) expirations, `PX` for
/// milliseconds, `EX` otherwise.
pub fn expiration_to_command_flag(expiration: Option<&Expiration>) -> Bytes {
    match expiration {
        None | Some(Expiration::Persistent) => Bytes::new(),
        Some(exp) => match exp.unit() {
            TimeUnit::Milliseconds => Bytes::from_static(tokens::PX),
            TimeUnit::Seconds => Bytes::from_static(tokens::EX),
        },
    }
}

/// SET condition flag: empty for [`SetMode::Upsert`].
pub fn set_mode_to_command_flag(mode: SetMode) -> Bytes {
    match mode {
        SetMode::Upsert => Bytes::new(),
        SetMode::IfAbsent => Bytes::from_static(tokens::NX),
        SetMode::IfPresent => Bytes::from_static(tokens::XX),
    }
}

pub fn bit_operation_to_token(op: BitOperation) -> Bytes {
    Bytes::from_static(match op {
        BitOperation::And => tokens::AND,
        BitOperation::Or => tokens::OR,
        BitOperation::Not => tokens::NOT,
        BitOperation::Xor => tokens::XOR,
    })
}

pub fn list_position_to_token(position: ListPosition) -> Bytes {
    Bytes::from_static(match position {
        ListPosition::Before => tokens::BEFORE,
        ListPosition::After => tokens::AFTER,
    })
}

/// Builds the option tail of `SET key value`: `[EX|PX amount] [NX|XX]`.
///
/// Parts that encode to nothing are left out entirely.
///
/// # Example
///
/// ```
/// use flashkv_convert::options::{set_command_args, Expiration, SetMode};
///
/// let args = set_command_args(Some(&Expiration::milliseconds(1500)), SetMode::IfAbsent);
/// let args: Vec<&[u8]> = args.iter().map(|a| &a[..]).collect();
/// assert_eq!(args, vec![&b"PX"[..], &b"1500"[..], &b"NX"[..]]);
/// ```
pub fn set_command_args(expiration: Option<&Expiration>, mode: SetMode) -> CommandArgs {
    let mut args = CommandArgs::new();

    if let Some(amount) = expiration.and_then(Expiration::amount) {
        args.push(expiration_to_command_flag(expiration));
        args.push(unsigned_long_to_bytes(amount));
    }

    let condition = set_mode_to_command_flag(mode);
    if !condition.is_empty() {
        args.push(condition);
    }

    args
}
