use chrono::{DateTime, Utc};
use kernel::model::{
    hotel::{Hotel, HotelWithRooms, Room},
    id::{HotelId, RoomId},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelResponse {
    fn from(value: Hotel) -> Self {
        let Hotel {
            id,
            name,
            image,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            name,
            image,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRoomsResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // 既存クライアントが期待する形に合わせ、部屋一覧のキーだけ大文字始まり
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(value: HotelWithRooms) -> Self {
        let HotelWithRooms { hotel, rooms } = value;
        let Hotel {
            id,
            name,
            image,
            created_at,
            updated_at,
        } = hotel;
        Self {
            id,
            name,
            image,
            created_at,
            updated_at,
            rooms: rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            id,
            hotel_id,
            name,
            capacity,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn hotel() -> Hotel {
        Hotel {
            id: HotelId::new(1),
            name: "Copacabana Pallace".into(),
            image: "https://example.com/copacabana.jpg".into(),
            created_at: Utc.with_ymd_and_hms(2023, 2, 7, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 2, 7, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn hotel_serializes_to_the_wire_shape() {
        let value = serde_json::to_value(HotelResponse::from(hotel())).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Copacabana Pallace",
                "image": "https://example.com/copacabana.jpg",
                "createdAt": "2023-02-07T12:00:00Z",
                "updatedAt": "2023-02-07T12:00:00Z",
            })
        );
    }

    #[test]
    fn rooms_are_nested_under_the_capitalized_key() {
        let with_rooms = HotelWithRooms {
            hotel: hotel(),
            rooms: vec![Room {
                id: RoomId::new(7),
                hotel_id: HotelId::new(1),
                name: "Cobertura".into(),
                capacity: 3,
                created_at: Utc.with_ymd_and_hms(2023, 2, 7, 12, 0, 0).unwrap(),
                updated_at: Utc.with_ymd_and_hms(2023, 2, 7, 12, 0, 0).unwrap(),
            }],
        };

        let value = serde_json::to_value(HotelWithRoomsResponse::from(with_rooms)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Copacabana Pallace",
                "image": "https://example.com/copacabana.jpg",
                "createdAt": "2023-02-07T12:00:00Z",
                "updatedAt": "2023-02-07T12:00:00Z",
                "Rooms": [{
                    "id": 7,
                    "name": "Cobertura",
                    "capacity": 3,
                    "hotelId": 1,
                    "createdAt": "2023-02-07T12:00:00Z",
                    "updatedAt": "2023-02-07T12:00:00Z",
                }],
            })
        );
    }

    #[test]
    fn hotel_without_rooms_serializes_an_empty_list() {
        let with_rooms = HotelWithRooms {
            hotel: hotel(),
            rooms: vec![],
        };

        let value = serde_json::to_value(HotelWithRoomsResponse::from(with_rooms)).unwrap();
        assert_eq!(value["Rooms"], json!([]));
    }
}
