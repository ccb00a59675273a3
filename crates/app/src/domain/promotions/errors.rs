//! Promotions service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromotionsServiceError {
    #[error("promotion already exists")]
    AlreadyExists,

    #[error("promotion not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PromotionsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = PromotionsServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, PromotionsServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn other_errors_map_to_sql() {
        let error = PromotionsServiceError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, PromotionsServiceError::Sql(Error::PoolTimedOut)),
            "expected Sql, got {error:?}"
        );
    }
}
