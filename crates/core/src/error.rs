//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is raised synchronously at the call that caused it; nothing
/// is retried or partially applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A catalog key did not resolve to any menu entry. Carries the key.
    #[error("There's no such item on the menu.")]
    UnknownMenuItem(String),

    /// A salad was requested without a usable portion size.
    #[error("Undefined portion size")]
    UndefinedPortion,

    /// The order was already closed (paid).
    #[error("The order was closed. You can't edit it anymore.")]
    ClosedOrder,
}

impl DomainError {
    pub fn unknown_item(key: impl Into<String>) -> Self {
        Self::UnknownMenuItem(key.into())
    }

    pub fn undefined_portion() -> Self {
        Self::UndefinedPortion
    }

    pub fn closed_order() -> Self {
        Self::ClosedOrder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            DomainError::unknown_item("PIZZA").to_string(),
            "There's no such item on the menu."
        );
        assert_eq!(
            DomainError::unknown_item("PIZZA"),
            DomainError::UnknownMenuItem("PIZZA".to_string())
        );
        assert_eq!(
            DomainError::undefined_portion().to_string(),
            "Undefined portion size"
        );
        assert_eq!(
            DomainError::closed_order().to_string(),
            "The order was closed. You can't edit it anymore."
        );
    }
}
