use std::fmt;

/// Error type shared by the three seeding stages.
#[derive(Debug)]
pub enum SeedError {
    /// Could not open a connection to the server or database.
    Connect(sea_orm::DbErr),
    /// A query or statement failed after the connection was established.
    Database(sea_orm::DbErr),
    InvalidConfig(String),
    /// The named table has no integer id left past its current maximum.
    IdsExhausted(&'static str),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Connect(e) => write!(f, "Connection error: {e}"),
            SeedError::Database(e) => write!(f, "Database error: {e}"),
            SeedError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            SeedError::IdsExhausted(table) => write!(f, "No ids left for table {table}"),
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedError::Connect(e) | SeedError::Database(e) => Some(e),
            SeedError::InvalidConfig(_) | SeedError::IdsExhausted(_) => None,
        }
    }
}

impl From<sea_orm::DbErr> for SeedError {
    fn from(e: sea_orm::DbErr) -> Self {
        SeedError::Database(e)
    }
}
