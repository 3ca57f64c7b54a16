use chrono::{DateTime, Utc};
use kernel::model::{
    enrollment::{Address, Enrollment},
    id::{EnrollmentId, UserId},
};

// 住所は LEFT JOIN で引くため、住所側の列はすべて Option になる
#[derive(sqlx::FromRow)]
pub struct EnrollmentRow {
    pub id: EnrollmentId,
    pub name: String,
    pub cpf: String,
    pub birthday: DateTime<Utc>,
    pub phone: String,
    pub user_id: UserId,
    pub cep: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub address_detail: Option<String>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(value: EnrollmentRow) -> Self {
        let EnrollmentRow {
            id,
            name,
            cpf,
            birthday,
            phone,
            user_id,
            cep,
            street,
            city,
            state,
            number,
            neighborhood,
            address_detail,
        } = value;
        let address = match (cep, street, city, state, number, neighborhood) {
            (Some(cep), Some(street), Some(city), Some(state), Some(number), Some(neighborhood)) => {
                Some(Address {
                    cep,
                    street,
                    city,
                    state,
                    number,
                    neighborhood,
                    address_detail,
                })
            }
            _ => None,
        };
        Enrollment {
            id,
            name,
            cpf,
            birthday,
            phone,
            user_id,
            address,
        }
    }
}
