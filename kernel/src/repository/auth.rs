use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{auth::AccessToken, id::UserId};

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // アクセストークンからユーザー ID を引く。セッションの発行は外部の責務。
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>>;
}
