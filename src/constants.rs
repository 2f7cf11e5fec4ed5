#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Namespace URI declared by XMILE v1.0 documents. Elements may or may not be
/// bound to it; lookups try this namespace first and then the bare name.
pub const XMILE_NS: &str = "http://docs.oasis-open.org/xmile/ns/XMILE/v1.0";

/// Percentage at or above which a graded submission counts as passing.
pub const DEFAULT_PASS_THRESHOLD: f64 = 60.0;

/// File extension of Stella model exports.
pub const DEFAULT_EXTENSION: &str = "stmx";

/// Substring marking a file as the unedited assignment template.
pub const DEFAULT_TEMPLATE_MARKER: &str = "starter";

/// Default tracing level when `STMX_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// `max_score` reported when the submission could not be parsed at all.
pub const FAILED_MAX_SCORE: f64 = 100.0;
