//! Tests for command helpers

use super::*;

#[test]
fn test_resolve_username_from_option() {
    let result = resolve_username(Some("gridironguru".to_string()));
    assert_eq!(result.unwrap(), "gridironguru");
}

#[test]
fn test_resolve_username_env_fallback() {
    // Single test for all env-var cases so parallel tests never race on
    // the shared variable.
    std::env::remove_var(USERNAME_ENV_VAR);
    match resolve_username(None) {
        Err(GametimeError::MissingUsername { env_var }) => {
            assert_eq!(env_var, USERNAME_ENV_VAR);
        }
        other => panic!("Expected MissingUsername error, got: {:?}", other),
    }

    std::env::set_var(USERNAME_ENV_VAR, "env_user");
    assert_eq!(resolve_username(None).unwrap(), "env_user");

    // CLI argument takes precedence over the env var
    assert_eq!(
        resolve_username(Some("cli_user".to_string())).unwrap(),
        "cli_user"
    );

    // Empty env value counts as unset
    std::env::set_var(USERNAME_ENV_VAR, "");
    assert!(resolve_username(None).is_err());

    std::env::remove_var(USERNAME_ENV_VAR);
}
