//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("menu not found")]
    MenuNotFound,

    #[error("submenu not found")]
    SubmenuNotFound,

    #[error("dish not found")]
    DishNotFound,

    #[error("menu title already exists: {0}")]
    MenuTitleAlreadyExists(String),

    #[error("submenu title already exists: {0}")]
    SubmenuTitleAlreadyExists(String),

    #[error("dish title already exists: {0}")]
    DishTitleAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // The not-found messages are part of the HTTP contract.
    #[test]
    fn not_found_messages_are_fixed() {
        assert_eq!(DomainError::MenuNotFound.to_string(), "menu not found");
        assert_eq!(DomainError::SubmenuNotFound.to_string(), "submenu not found");
        assert_eq!(DomainError::DishNotFound.to_string(), "dish not found");
    }
}
