use thiserror::Error;

/// Returned by the checked accessors of an empty `Optional`
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("bad optional access")]
pub struct BadOptionalAccess;
