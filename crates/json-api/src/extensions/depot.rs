//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Fetch injected state from the depot, answering 500 when it is missing.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!("{} was not injected into the depot", type_name::<T>());

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Marker(u8);

    #[test]
    fn obtains_injected_values() {
        let mut depot = Depot::new();

        depot.inject(Marker(3));

        assert_eq!(depot.obtain_or_500::<Marker>().ok(), Some(&Marker(3)));
    }

    #[test]
    fn missing_values_are_internal_errors() {
        let depot = Depot::new();

        assert_eq!(
            depot.obtain_or_500::<Marker>().err().map(|e| e.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
