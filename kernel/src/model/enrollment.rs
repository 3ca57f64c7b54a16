use chrono::{DateTime, Utc};

use crate::model::id::{EnrollmentId, UserId};

#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub name: String,
    pub cpf: String,
    pub birthday: DateTime<Utc>,
    pub phone: String,
    pub user_id: UserId,
    pub address: Option<Address>,
}

#[derive(Debug, Clone)]
pub struct Address {
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}
