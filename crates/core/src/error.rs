/// Domain-level errors from the compatibility pipeline.
///
/// Messages are static, pre-written strings. They are part of the public
/// error contract and never embed request data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The request body violated a validation rule. Carries the first
    /// violated rule's message verbatim.
    #[error("{0}")]
    Validation(&'static str),
}
