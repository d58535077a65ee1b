use super::{must_var, opt_var, var_or};
use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Resolve the database URL for a profile.
///
/// `DATABASE_URL` wins when set. Otherwise the URL is composed from the
/// `POSTGRES_*` parts and the application credentials.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    if let Some(url) = opt_var("DATABASE_URL") {
        return Ok(url);
    }

    let host = var_or("POSTGRES_HOST", "localhost");
    let port = var_or("POSTGRES_PORT", "5432");
    let db_name = db_name(profile)?;
    let username = must_var("APP_DB_USER")?;
    let password = must_var("APP_DB_PASSWORD")?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

fn db_name(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("PROD_DB"),
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}
