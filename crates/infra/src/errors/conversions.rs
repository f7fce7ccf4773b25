//! Conversions from external infrastructure errors into domain errors.

use ranksync_domain::RankSyncError;
use reqwest::Error as HttpError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RankSyncError);

impl From<InfraError> for RankSyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRankSyncError {
    fn into_ranksync(self) -> RankSyncError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RankSyncError */
/* -------------------------------------------------------------------------- */

impl IntoRankSyncError for HttpError {
    fn into_ranksync(self) -> RankSyncError {
        if self.is_timeout() {
            return RankSyncError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return RankSyncError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return RankSyncError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        RankSyncError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_ranksync())
    }
}

/* -------------------------------------------------------------------------- */
/* toml → RankSyncError */
/* -------------------------------------------------------------------------- */

impl IntoRankSyncError for TomlError {
    fn into_ranksync(self) -> RankSyncError {
        RankSyncError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_ranksync())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_error_maps_to_config() {
        let err = toml::from_str::<toml::Table>("api = [").unwrap_err();
        let mapped: RankSyncError = InfraError::from(err).into();
        match mapped {
            RankSyncError::Config(msg) => assert!(msg.starts_with("Invalid TOML format")),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
