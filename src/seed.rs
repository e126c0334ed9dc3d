use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;
use sqlx::{QueryBuilder, Row};
use tracing::info;

use crate::db::Database;
use crate::errors::SeedError;
use crate::models::{NewTask, NewUser};

/// How many rows to generate. Defaults match the historical seed
/// script: 10 users, 30 tasks.
#[derive(Debug, Clone, Copy)]
pub struct SeedOptions {
    pub users: usize,
    pub tasks: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            users: 10,
            tasks: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub tasks: usize,
}

/// Wipe and repopulate the users and tasks tables with fake data.
///
/// Destructive: prior rows in both tables are removed and the serial
/// counters reset. Everything runs in a single transaction committed
/// after both bulk inserts, so a failure anywhere leaves the database
/// as it was (the transaction rolls back on drop). Each generated task
/// references a user and status id fetched inside the same transaction.
pub async fn seed_database(db: &Database, opts: SeedOptions) -> Result<SeedSummary, SeedError> {
    let mut tx = db.pool().begin().await?;

    sqlx::query("TRUNCATE TABLE tasks, users RESTART IDENTITY CASCADE")
        .execute(&mut *tx)
        .await?;

    let users = generate_users(opts.users);
    if !users.is_empty() {
        let mut builder = QueryBuilder::new("INSERT INTO users (fullname, email) ");
        builder.push_values(users.iter(), |mut row, user| {
            row.push_bind(&user.fullname).push_bind(&user.email);
        });
        builder.build().execute(&mut *tx).await?;
    }

    let status_ids: Vec<i32> = sqlx::query("SELECT id FROM status ORDER BY id")
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(|row| row.get("id"))
        .collect();

    let user_ids: Vec<i32> = sqlx::query("SELECT id FROM users ORDER BY id")
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(|row| row.get("id"))
        .collect();

    if opts.tasks > 0 {
        if status_ids.is_empty() {
            return Err(SeedError::NoStatuses);
        }
        if user_ids.is_empty() {
            return Err(SeedError::NoUsers);
        }

        let tasks = generate_tasks(opts.tasks, &status_ids, &user_ids);
        let mut builder =
            QueryBuilder::new("INSERT INTO tasks (title, description, status_id, user_id) ");
        builder.push_values(tasks.iter(), |mut row, task| {
            row.push_bind(&task.title)
                .push_bind(&task.description)
                .push_bind(task.status_id)
                .push_bind(task.user_id);
        });
        builder.build().execute(&mut *tx).await?;
    }

    tx.commit().await?;

    info!(users = opts.users, tasks = opts.tasks, "database seeded");

    Ok(SeedSummary {
        users: opts.users,
        tasks: opts.tasks,
    })
}

pub(crate) fn generate_users(count: usize) -> Vec<NewUser> {
    (0..count)
        .map(|_| NewUser {
            fullname: Name().fake(),
            email: SafeEmail().fake(),
        })
        .collect()
}

/// Both id slices must be non-empty; callers check before calling.
pub(crate) fn generate_tasks(count: usize, status_ids: &[i32], user_ids: &[i32]) -> Vec<NewTask> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| NewTask {
            title: Sentence(3..7).fake(),
            description: Paragraph(1..3).fake(),
            status_id: status_ids[rng.gen_range(0..status_ids.len())],
            user_id: user_ids[rng.gen_range(0..user_ids.len())],
        })
        .collect()
}
