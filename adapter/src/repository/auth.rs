use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{auth::AccessToken, id::UserId};
use kernel::repository::auth::AuthRepository;
use shared::error::AppResult;

use crate::redis::{model::AuthorizationKey, RedisClient};

#[derive(new)]
pub struct AuthRepositoryImpl {
    kv: Arc<RedisClient>,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key: AuthorizationKey = access_token.into();
        self.kv.get(&key).await.map(|x| x.map(|x| x.into_inner()))
    }
}
