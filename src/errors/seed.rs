use thiserror::Error;

/// Errors raised while seeding the task manager database.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("status lookup table is empty; run schema setup before seeding")]
    NoStatuses,

    #[error("no users available to assign tasks to")]
    NoUsers,
}
