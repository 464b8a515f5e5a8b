use serde_json::Value;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Form definition row. `fields` holds the ordered field list as JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct Form {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub form_name: String,
    pub fields: Value,
    pub created_at: OffsetDateTime,
}

/// Submission row, append-only child of a form.
#[derive(Debug, Clone, FromRow)]
pub struct Submission {
    pub form_id: Uuid,
    pub submitted_at: OffsetDateTime,
    pub data: Value,
}

impl Form {
    /// Persist a new form owned by `admin_id`.
    pub async fn create(
        db: &PgPool,
        admin_id: Uuid,
        form_name: &str,
        fields: &Value,
    ) -> anyhow::Result<Form> {
        let form = sqlx::query_as::<_, Form>(
            r#"
            INSERT INTO forms (admin_id, form_name, fields)
            VALUES ($1, $2, $3)
            RETURNING id, admin_id, form_name, fields, created_at
            "#,
        )
        .bind(admin_id)
        .bind(form_name)
        .bind(fields)
        .fetch_one(db)
        .await?;
        Ok(form)
    }

    /// All forms owned by one admin, in creation order.
    pub async fn list_by_admin(db: &PgPool, admin_id: Uuid) -> anyhow::Result<Vec<Form>> {
        let rows = sqlx::query_as::<_, Form>(
            r#"
            SELECT id, admin_id, form_name, fields, created_at
            FROM forms
            WHERE admin_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(admin_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Whether a form with this id exists.
    pub async fn exists(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let found: Option<(Uuid,)> = sqlx::query_as(r#"SELECT id FROM forms WHERE id = $1"#)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(found.is_some())
    }
}

impl Submission {
    /// Append one submission. A single insert, so concurrent submitters to
    /// the same form never overwrite each other.
    pub async fn append(db: &PgPool, form_id: Uuid, data: &Value) -> anyhow::Result<()> {
        sqlx::query(r#"INSERT INTO submissions (form_id, data) VALUES ($1, $2)"#)
            .bind(form_id)
            .bind(data)
            .execute(db)
            .await?;
        Ok(())
    }

    /// Submissions for a set of forms, oldest first.
    pub async fn list_for_forms(db: &PgPool, form_ids: &[Uuid]) -> anyhow::Result<Vec<Submission>> {
        let rows = sqlx::query_as::<_, Submission>(
            r#"
            SELECT form_id, submitted_at, data
            FROM submissions
            WHERE form_id = ANY($1)
            ORDER BY submitted_at
            "#,
        )
        .bind(form_ids)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
