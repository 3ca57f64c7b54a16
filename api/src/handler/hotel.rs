use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::HotelId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::hotel::{HotelResponse, HotelWithRoomsResponse},
};

pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<HotelResponse>>> {
    registry
        .hotel_service()
        .find_all(user.id())
        .await
        .map(|hotels| hotels.into_iter().map(HotelResponse::from).collect())
        .map(Json)
}

pub async fn show_hotel_rooms(
    user: AuthorizedUser,
    Path(hotel_id): Path<HotelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelWithRoomsResponse>> {
    registry
        .hotel_service()
        .find_with_rooms_by_id(user.id(), hotel_id)
        .await
        .and_then(|hotel| match hotel {
            Some(hotel) => Ok(Json(hotel.into())),
            None => Err(AppError::EntityNotFound(format!(
                "hotel {hotel_id} not found"
            ))),
        })
}
