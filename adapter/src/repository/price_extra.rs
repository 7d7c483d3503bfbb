use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::PriceExtraId,
    price_extra::{
        event::{CreatePriceExtra, DeletePriceExtra, UpdatePriceExtra},
        PriceExtra,
    },
};
use kernel::repository::price_extra::PriceExtraRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::price_extra::PriceExtraRow, ConnectionPool};

#[derive(new)]
pub struct PriceExtraRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PriceExtraRepository for PriceExtraRepositoryImpl {
    async fn create(&self, event: CreatePriceExtra) -> AppResult<PriceExtra> {
        let price_extra_id = PriceExtraId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO price_extras (price_extra_id, extra_name, extra_price)
                VALUES ($1, $2, $3);
            "#,
        )
        .bind(price_extra_id)
        .bind(&event.extra_name)
        .bind(event.extra_price)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => AppError::ResourceConflict(format!(
                "追加料金（{}）はすでに登録されています。",
                event.extra_name
            )),
            _ => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No price extra record has been created".into(),
            ));
        }

        Ok(PriceExtra {
            price_extra_id,
            extra_name: event.extra_name,
            extra_price: event.extra_price,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<PriceExtra>> {
        let rows: Vec<PriceExtraRow> = sqlx::query_as::<_, PriceExtraRow>(
            r#"
                SELECT price_extra_id, extra_name, extra_price
                FROM price_extras
                ORDER BY extra_name ASC;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(PriceExtra::from).collect())
    }

    async fn find_by_id(&self, price_extra_id: PriceExtraId) -> AppResult<Option<PriceExtra>> {
        let row: Option<PriceExtraRow> = sqlx::query_as::<_, PriceExtraRow>(
            r#"
                SELECT price_extra_id, extra_name, extra_price
                FROM price_extras
                WHERE price_extra_id = $1;
            "#,
        )
        .bind(price_extra_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(PriceExtra::from))
    }

    async fn update(&self, event: UpdatePriceExtra) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE price_extras
                SET
                    extra_name = COALESCE($2, extra_name),
                    extra_price = COALESCE($3, extra_price)
                WHERE price_extra_id = $1;
            "#,
        )
        .bind(event.price_extra_id)
        .bind(&event.extra_name)
        .bind(event.extra_price)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => AppError::ResourceConflict(
                "指定した追加料金名はすでに登録されています。".into(),
            ),
            _ => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "追加料金（{}）が見つかりませんでした。",
                event.price_extra_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeletePriceExtra) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM price_extras WHERE price_extra_id = $1;
            "#,
        )
        .bind(event.price_extra_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "追加料金（{}）が見つかりませんでした。",
                event.price_extra_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_register_price_extra(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PriceExtraRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreatePriceExtra {
                extra_name: "Weekend".into(),
                extra_price: Decimal::new(500, 2),
            })
            .await?;

        let res = repo.find_by_id(created.price_extra_id).await?;
        assert!(res.is_some());

        let PriceExtra {
            price_extra_id,
            extra_name,
            extra_price,
        } = res.unwrap();
        assert_eq!(price_extra_id, created.price_extra_id);
        assert_eq!(extra_name, "Weekend");
        assert_eq!(extra_price, Decimal::new(500, 2));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_duplicated_extra_name_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PriceExtraRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreatePriceExtra {
            extra_name: "Weekend".into(),
            extra_price: Decimal::new(500, 2),
        })
        .await?;

        let res = repo
            .create(CreatePriceExtra {
                extra_name: "Weekend".into(),
                extra_price: Decimal::new(300, 2),
            })
            .await;
        assert!(matches!(res, Err(AppError::ResourceConflict(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_update_and_delete_price_extra(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PriceExtraRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreatePriceExtra {
                extra_name: "Lighting".into(),
                extra_price: Decimal::new(200, 2),
            })
            .await?;

        // extra_price のみ更新する
        repo.update(UpdatePriceExtra {
            price_extra_id: created.price_extra_id,
            extra_name: None,
            extra_price: Some(Decimal::new(250, 2)),
        })
        .await?;

        let updated = repo.find_by_id(created.price_extra_id).await?.unwrap();
        assert_eq!(updated.extra_name, "Lighting");
        assert_eq!(updated.extra_price, Decimal::new(250, 2));

        repo.delete(DeletePriceExtra {
            price_extra_id: created.price_extra_id,
        })
        .await?;
        assert!(repo.find_by_id(created.price_extra_id).await?.is_none());

        Ok(())
    }
}
