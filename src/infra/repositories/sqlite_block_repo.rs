use crate::domain::models::team::ProfessionalBlock;
use crate::domain::ports::BlockRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteBlockRepo {
    pool: SqlitePool,
}

impl SqliteBlockRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlockRepository for SqliteBlockRepo {
    async fn create(&self, block: &ProfessionalBlock) -> Result<ProfessionalBlock, AppError> {
        sqlx::query_as::<_, ProfessionalBlock>(
            "INSERT INTO professional_blocks (id, professional_id, date, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&block.id).bind(&block.professional_id).bind(block.date).bind(block.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<ProfessionalBlock>, AppError> {
        sqlx::query_as::<_, ProfessionalBlock>("SELECT * FROM professional_blocks ORDER BY date ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<ProfessionalBlock>, AppError> {
        sqlx::query_as::<_, ProfessionalBlock>("SELECT * FROM professional_blocks WHERE date = ?").bind(date).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM professional_blocks WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Block not found".into())); }
        Ok(())
    }
}
