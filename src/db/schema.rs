//! Table creation and sample rows, run once before the server binds.

use log::info;
use sqlx::{Executor, PgPool};

const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS departments (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL
);
CREATE TABLE IF NOT EXISTS employees (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    department_id INTEGER NOT NULL REFERENCES departments(id)
);
"#;

// Only seeds an empty departments table. Employees are linked to the ids the
// departments actually received.
const SEED: &str = r#"
WITH seeded AS (
    INSERT INTO departments (name)
    SELECT seed.name
    FROM (VALUES (1, 'HR'), (2, 'Engineering')) AS seed(position, name)
    WHERE NOT EXISTS (SELECT 1 FROM departments)
    ORDER BY seed.position
    RETURNING id, name
)
INSERT INTO employees (name, department_id)
SELECT staff.name, seeded.id
FROM (VALUES ('John Doe', 'HR'), ('Jane Smith', 'Engineering')) AS staff(name, department)
JOIN seeded ON seeded.name = staff.department;
"#;

/// Creates both tables if missing, then seeds them when `seed` is set.
///
/// Tables come first; the seed rows depend on them.
pub async fn initialize(pool: &PgPool, seed: bool) -> Result<(), sqlx::Error> {
    pool.execute(CREATE_TABLES).await?;
    info!("tables created");

    if !seed {
        info!("seeding disabled");
        return Ok(());
    }

    let seeded = pool.execute(SEED).await?;
    if seeded.rows_affected() > 0 {
        info!("tables seeded");
    } else {
        info!("departments already populated, seed skipped");
    }
    Ok(())
}
