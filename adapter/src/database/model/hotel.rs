use chrono::{DateTime, Utc};
use kernel::model::{
    hotel::{Hotel, Room},
    id::{HotelId, RoomId},
};

#[derive(sqlx::FromRow)]
pub struct HotelRow {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(value: HotelRow) -> Self {
        let HotelRow {
            id,
            name,
            image,
            created_at,
            updated_at,
        } = value;
        Hotel {
            id,
            name,
            image,
            created_at,
            updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            id,
            hotel_id,
            name,
            capacity,
            created_at,
            updated_at,
        } = value;
        Room {
            id,
            hotel_id,
            name,
            capacity,
            created_at,
            updated_at,
        }
    }
}
