#[cfg(test)]
mod tests {
    use anyhow::Context;

    use crate::errors::{recovery_hint, AuthError, RecoverableError, StayError, StayResult};
    use crate::tests::mock_api::setup;

    fn failed_load() -> StayResult<()> {
        Err(StayError::Network("connection refused".to_string()))
    }

    #[test]
    fn hint_survives_added_context() {
        setup();
        let err = failed_load().context("Failed to load properties").unwrap_err();

        assert_eq!(
            recovery_hint(&err),
            StayError::Network(String::new()).recovery_strategy()
        );
        assert!(format!("{:#}", err).contains("connection refused"));
    }

    #[test]
    fn hint_for_bare_stay_error() {
        setup();
        let err = anyhow::Error::from(StayError::Auth(AuthError::NotConfigured));
        assert!(recovery_hint(&err).unwrap().contains("VATTAVADA_ADMIN_LOGIN_ID"));
    }

    #[test]
    fn no_hint_for_foreign_errors() {
        setup();
        let err = anyhow::anyhow!("Invalid date \"tomorrow\"");
        assert_eq!(recovery_hint(&err), None);

        let not_found = anyhow::Error::from(StayError::NotFound("/api/properties/x".to_string()));
        assert_eq!(recovery_hint(&not_found), None);
    }
}
