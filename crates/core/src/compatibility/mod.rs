//! Screen-to-mount compatibility pipeline.
//!
//! Three pure stages run in order: [`normalize`] folds legacy field names
//! into the canonical schema, [`validate`] checks the canonical shape and
//! hands back a typed view, [`evaluate`] turns that view into a
//! [`CompatibilityVerdict`]. No stage keeps state between calls, so the
//! pipeline can run for any number of requests concurrently.

pub mod evaluate;
pub mod normalize;
pub mod policy;
pub mod validate;
pub mod verdict;

pub use self::evaluate::evaluate;
pub use self::normalize::normalize;
pub use self::policy::CompatibilityPolicy;
pub use self::validate::{validate, ValidRequest};
pub use self::verdict::{
    CheckResult, CheckSet, CompatibilityVerdict, ResolvedSpecs, ScreenType,
};
