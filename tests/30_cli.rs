mod common;

use std::process::Command;

use anyhow::{Context, Result};
use items_api::auth::validate_token;
use items_api::config::SecurityConfig;

#[test]
fn token_command_prints_a_valid_token() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_items-api"))
        .args(["token", "--subject", "auth0|cli", "--permission", "create:items", "--permission", "DeleteItems"])
        .env("APP_ENV", "development")
        .env("JWT_SECRET", common::TEST_SECRET)
        .env("JWT_AUDIENCE", "")
        .env("JWT_ISSUER", "")
        .output()
        .context("failed to run token command")?;
    assert!(output.status.success(), "token command failed: {:?}", output);

    let token = String::from_utf8(output.stdout)?.trim().to_string();
    let security = SecurityConfig {
        enable_cors: false,
        cors_origins: Vec::new(),
        jwt_secret: common::TEST_SECRET.to_string(),
        jwt_audience: None,
        jwt_issuer: None,
        jwt_expiry_hours: 1,
    };

    let claims = validate_token(&token, &security)?;
    assert_eq!(claims.sub, "auth0|cli");
    assert_eq!(claims.permissions, vec!["create:items".to_string(), "delete:items".to_string()]);
    Ok(())
}

#[test]
fn token_command_rejects_unknown_permissions() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_items-api"))
        .args(["token", "--permission", "read:items"])
        .env("JWT_SECRET", common::TEST_SECRET)
        .output()
        .context("failed to run token command")?;
    assert!(!output.status.success());
    Ok(())
}
