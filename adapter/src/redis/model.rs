use kernel::model::{auth::AccessToken, id::UserId};
use shared::error::AppError;

pub trait RedisKey {
    type Value: TryFrom<String, Error = AppError>;

    fn inner(&self) -> String;
}

pub struct AuthorizationKey(String);

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(token: &AccessToken) -> Self {
        Self(token.0.to_string())
    }
}

pub struct AuthorizedUserId(UserId);

impl AuthorizedUserId {
    pub fn into_inner(self) -> UserId {
        self.0
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .parse::<i64>()
            .map(|id| Self(UserId::new(id)))
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_user_id_is_parsed_back() {
        let value = AuthorizedUserId::try_from("42".to_string()).unwrap();
        assert_eq!(value.into_inner(), UserId::new(42));
    }

    #[test]
    fn garbage_session_value_is_a_conversion_error() {
        let res = AuthorizedUserId::try_from("not-a-number".to_string());
        assert!(matches!(res, Err(AppError::ConversionEntityError(_))));
    }
}
