use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    hotel::{Hotel, HotelWithRooms},
    id::HotelId,
};

#[async_trait]
pub trait HotelRepository: Send + Sync {
    // すべてのホテルを取得する
    async fn find_all(&self) -> AppResult<Vec<Hotel>>;
    // ホテル ID に紐づくホテルと部屋一覧を取得する
    async fn find_with_rooms_by_id(&self, hotel_id: HotelId) -> AppResult<Option<HotelWithRooms>>;
}
