//! protospec-core
//!
//! Core primitives for protospec:
//! - Protocol-Buffer document model (syntax, package, imports, messages, enums, services)
//! - Canonical `.proto` text generation
//! - Rule-based structural validation
//! - LCS-based line diffing with aligned columns
//! - Wire-compatibility analysis between document versions
//! - Diff rendering adapters (unified text, HTML)
//!
//! Every function in this crate is pure and synchronous: documents go in by
//! reference, results come out by value, and nothing here touches the
//! filesystem, the network, or a clock. Persistence, transport, and editing
//! surfaces are the callers' concern.

pub mod compat;
pub mod diff;
pub mod errors;
pub mod generate;
pub mod model;
pub mod render;
pub mod validate;

pub use crate::errors::{ProtoSpecError, ProtoSpecResult};

/// Field-number bounds for message fields.
/// These are fixed by the Protocol-Buffer wire format and must remain stable.
pub mod limits {
    /// Smallest assignable field number.
    pub const FIELD_NUMBER_MIN: i32 = 1;
    /// Largest assignable field number (2^29 - 1).
    pub const FIELD_NUMBER_MAX: i32 = 536_870_911;
    /// First field number of the implementation-reserved band.
    pub const RESERVED_RANGE_START: i32 = 19_000;
    /// Last field number of the implementation-reserved band.
    pub const RESERVED_RANGE_END: i32 = 19_999;
}

/// Convenience re-exports.
pub mod prelude {
    pub use crate::compat::{check_compatibility, CompatibilityIssue, IssueKind};
    pub use crate::diff::{diff_lines, diff_text, DiffKind, DiffLine, DiffStats, LineDiff};
    pub use crate::generate::generate;
    pub use crate::model::{
        EnumDef, EnumValue, Field, Message, ProtoDocument, Service, ServiceMethod, Streaming,
        Syntax,
    };
    pub use crate::validate::{validate, RuleResult};
    pub use crate::{ProtoSpecError, ProtoSpecResult};
}
