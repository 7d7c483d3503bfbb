use async_trait::async_trait;
use bcrypt::{hash, DEFAULT_COST};
use derive_new::new;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    // ユーザーを登録する。ロールは必ず User で登録する
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let hashed_password = hash(&event.password, DEFAULT_COST)?;
        let role = Role::User;

        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, password_hash, national_id, role_id)
                SELECT $1, $2, $3, $4, $5, role_id
                FROM roles
                WHERE role_name = $6;
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(hashed_password)
        .bind(&event.national_id)
        .bind(role.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => AppError::ResourceConflict(format!(
                "メールアドレス（{}）はすでに使用されています。",
                event.email
            )),
            _ => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        Ok(User {
            user_id,
            user_name: event.user_name,
            email: event.email,
            national_id: event.national_id,
            role,
        })
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT u.user_id, u.user_name, u.email, u.national_id, r.role_name
                FROM users AS u
                INNER JOIN roles AS r ON u.role_id = r.role_id
                WHERE u.user_id = $1;
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn create_registers_user_with_user_role(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateUser {
                user_name: "Taro Yamada".into(),
                email: "taro.yamada@example.com".into(),
                password: "Passw0rd".into(),
                national_id: "AB1234567".into(),
            })
            .await?;
        assert_eq!(created.role, Role::User);

        let found = repo.find_current_user(created.user_id).await?;
        let found = found.expect("created user should be found");
        assert_eq!(found.user_name, "Taro Yamada");
        assert_eq!(found.email, "taro.yamada@example.com");
        assert_eq!(found.national_id, "AB1234567");
        assert_eq!(found.role, Role::User);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn create_rejects_duplicated_email(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateUser {
            user_name: "Taro Yamada".into(),
            email: "duplicated@example.com".into(),
            password: "Passw0rd".into(),
            national_id: "AB1234567".into(),
        })
        .await?;

        let res = repo
            .create(CreateUser {
                user_name: "Jiro Yamada".into(),
                email: "duplicated@example.com".into(),
                password: "Passw0rd".into(),
                national_id: "CD7654321".into(),
            })
            .await;
        assert!(matches!(res, Err(AppError::ResourceConflict(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn find_current_user_returns_none_for_unknown_id(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));
        let found = repo.find_current_user(UserId::new()).await?;
        assert!(found.is_none());
        Ok(())
    }
}
