use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

use crate::{
    database::{
        model::auth::{from, AuthorizationKey, AuthorizedUserId, UserItem},
        ConnectionPool,
    },
    redis::RedisClient,
};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key: AuthorizationKey = access_token.into();
        self.kv
            .get(&key)
            .await
            .map(|x| x.map(AuthorizedUserId::into_inner))
    }

    // メールアドレスとパスワードが一致しない場合は、
    // どちらが誤っているかを明かさずに認証エラーとする
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let user_item = sqlx::query_as::<_, UserItem>(
            r#"
                SELECT user_id, password_hash
                FROM users
                WHERE email = $1;
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or(AppError::UnauthenticatedError)?;

        let valid = bcrypt::verify(password, &user_item.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        Ok(user_item.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let (key, value) = from(event);
        self.kv.set_ex(&key, &value, self.ttl).await?;
        Ok(key.into())
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = access_token.into();
        self.kv.delete(&key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;
    use shared::config::RedisConfig;

    // Redis には接続しないテスト用クライアント。
    // Client::open は接続先の検証のみでコネクションを張らない
    fn dummy_kv() -> Arc<RedisClient> {
        let config = RedisConfig {
            host: "localhost".into(),
            port: 6379,
        };
        Arc::new(RedisClient::new(&config).unwrap())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn verify_user_accepts_correct_password(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let user_repo = UserRepositoryImpl::new(db.clone());
        let auth_repo = AuthRepositoryImpl::new(db, dummy_kv(), 60);

        let created = user_repo
            .create(CreateUser {
                user_name: "Taro Yamada".into(),
                email: "taro.yamada@example.com".into(),
                password: "Passw0rd".into(),
                national_id: "AB1234567".into(),
            })
            .await?;

        let verified = auth_repo
            .verify_user("taro.yamada@example.com", "Passw0rd")
            .await?;
        assert_eq!(verified, created.user_id);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn verify_user_rejects_wrong_password(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let user_repo = UserRepositoryImpl::new(db.clone());
        let auth_repo = AuthRepositoryImpl::new(db, dummy_kv(), 60);

        user_repo
            .create(CreateUser {
                user_name: "Taro Yamada".into(),
                email: "taro.yamada@example.com".into(),
                password: "Passw0rd".into(),
                national_id: "AB1234567".into(),
            })
            .await?;

        let res = auth_repo
            .verify_user("taro.yamada@example.com", "WrongPassword")
            .await;
        assert!(matches!(res, Err(AppError::UnauthenticatedError)));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn verify_user_rejects_unknown_email(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let auth_repo = AuthRepositoryImpl::new(db, dummy_kv(), 60);

        let res = auth_repo.verify_user("nobody@example.com", "Passw0rd").await;
        assert!(matches!(res, Err(AppError::UnauthenticatedError)));

        Ok(())
    }
}
