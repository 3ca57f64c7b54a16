use std::env;

pub enum Environment {
    Development,
    Production,
}

/// 実行環境を表す環境変数 ENV を読む。未設定なら開発環境とみなす。
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = "development";
    #[cfg(not(debug_assertions))]
    let default_env = "production";

    match env::var("ENV") {
        Err(_) => default_env.into(),
        Ok(v) => v.into(),
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }
}
