use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::model::{
    hotel::{Hotel, HotelWithRooms},
    id::{HotelId, UserId},
    ticket::TicketStatus,
};
use crate::repository::{
    enrollment::EnrollmentRepository, hotel::HotelRepository, ticket::TicketRepository,
};

#[derive(new)]
pub struct HotelService {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
    hotel_repository: Arc<dyn HotelRepository>,
}

impl HotelService {
    pub async fn find_all(&self, user_id: UserId) -> AppResult<Vec<Hotel>> {
        self.ensure_hotel_access(user_id).await?;

        self.hotel_repository.find_all().await
    }

    // ホテルが見つからない場合の扱いはハンドラー側で決める
    pub async fn find_with_rooms_by_id(
        &self,
        user_id: UserId,
        hotel_id: HotelId,
    ) -> AppResult<Option<HotelWithRooms>> {
        self.ensure_hotel_access(user_id).await?;

        self.hotel_repository.find_with_rooms_by_id(hotel_id).await
    }

    // ホテルを閲覧できるのは、申込があり、そのチケットが
    // 現地参加・ホテル付きで、予約中 (未払い) でないユーザーのみ。
    // 申込とチケットの読み出しは順次で、スナップショットは取らない。
    async fn ensure_hotel_access(&self, user_id: UserId) -> AppResult<()> {
        let enrollment = self
            .enrollment_repository
            .find_with_address_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("no enrollment for user {user_id}"))
            })?;

        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("no ticket for enrollment {}", enrollment.id))
            })?;

        if ticket.ticket_type.is_remote
            || !ticket.ticket_type.includes_hotel
            || ticket.status == TicketStatus::Reserved
        {
            return Err(AppError::EntityNotFound(format!(
                "ticket {} does not grant hotel access",
                ticket.id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::model::{
        enrollment::{Address, Enrollment},
        hotel::Room,
        id::{EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId},
        ticket::{Ticket, TicketType},
    };

    struct StubEnrollmentRepository(Option<Enrollment>);

    #[async_trait]
    impl EnrollmentRepository for StubEnrollmentRepository {
        async fn find_with_address_by_user_id(
            &self,
            _user_id: UserId,
        ) -> AppResult<Option<Enrollment>> {
            Ok(self.0.clone())
        }
    }

    struct StubTicketRepository(Option<Ticket>);

    #[async_trait]
    impl TicketRepository for StubTicketRepository {
        async fn find_by_enrollment_id(
            &self,
            _enrollment_id: EnrollmentId,
        ) -> AppResult<Option<Ticket>> {
            Ok(self.0.clone())
        }
    }

    struct StubHotelRepository(Vec<HotelWithRooms>);

    #[async_trait]
    impl HotelRepository for StubHotelRepository {
        async fn find_all(&self) -> AppResult<Vec<Hotel>> {
            Ok(self.0.iter().map(|h| h.hotel.clone()).collect())
        }

        async fn find_with_rooms_by_id(
            &self,
            hotel_id: HotelId,
        ) -> AppResult<Option<HotelWithRooms>> {
            Ok(self.0.iter().find(|h| h.hotel.id == hotel_id).cloned())
        }
    }

    fn enrollment() -> Enrollment {
        Enrollment {
            id: EnrollmentId::new(11),
            name: "Maria Silva".into(),
            cpf: "12345678901".into(),
            birthday: Utc::now(),
            phone: "21999999999".into(),
            user_id: UserId::new(1),
            address: Some(Address {
                cep: "22070-011".into(),
                street: "Avenida Atlântica".into(),
                city: "Rio de Janeiro".into(),
                state: "RJ".into(),
                number: "1702".into(),
                neighborhood: "Copacabana".into(),
                address_detail: None,
            }),
        }
    }

    fn ticket(is_remote: bool, includes_hotel: bool, status: TicketStatus) -> Ticket {
        Ticket {
            id: TicketId::new(21),
            enrollment_id: EnrollmentId::new(11),
            status,
            ticket_type: TicketType {
                id: TicketTypeId::new(31),
                name: "Presencial + Hotel".into(),
                price: 60000,
                is_remote,
                includes_hotel,
            },
        }
    }

    fn hotel(id: i64, name: &str, rooms: Vec<Room>) -> HotelWithRooms {
        let now = Utc::now();
        HotelWithRooms {
            hotel: Hotel {
                id: HotelId::new(id),
                name: name.into(),
                image: "https://example.com/hotel.jpg".into(),
                created_at: now,
                updated_at: now,
            },
            rooms,
        }
    }

    fn room(id: i64, hotel_id: i64, name: &str, capacity: i32) -> Room {
        let now = Utc::now();
        Room {
            id: RoomId::new(id),
            hotel_id: HotelId::new(hotel_id),
            name: name.into(),
            capacity,
            created_at: now,
            updated_at: now,
        }
    }

    fn service(
        enrollment: Option<Enrollment>,
        ticket: Option<Ticket>,
        hotels: Vec<HotelWithRooms>,
    ) -> HotelService {
        HotelService::new(
            Arc::new(StubEnrollmentRepository(enrollment)),
            Arc::new(StubTicketRepository(ticket)),
            Arc::new(StubHotelRepository(hotels)),
        )
    }

    #[tokio::test]
    async fn user_without_enrollment_is_rejected() {
        let service = service(None, None, vec![hotel(1, "Copacabana Pallace", vec![])]);

        let res = service.find_all(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        let res = service
            .find_with_rooms_by_id(UserId::new(1), HotelId::new(1))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn enrollment_without_ticket_is_rejected() {
        let service = service(Some(enrollment()), None, vec![]);

        let res = service.find_all(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn remote_ticket_is_rejected_even_when_paid() {
        let service = service(
            Some(enrollment()),
            Some(ticket(true, true, TicketStatus::Paid)),
            vec![],
        );

        let res = service.find_all(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        let res = service
            .find_with_rooms_by_id(UserId::new(1), HotelId::new(1))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn ticket_without_hotel_is_rejected() {
        let service = service(
            Some(enrollment()),
            Some(ticket(false, false, TicketStatus::Paid)),
            vec![],
        );

        let res = service.find_all(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn reserved_ticket_is_rejected_even_when_type_qualifies() {
        let service = service(
            Some(enrollment()),
            Some(ticket(false, true, TicketStatus::Reserved)),
            vec![],
        );

        let res = service.find_all(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        let res = service
            .find_with_rooms_by_id(UserId::new(1), HotelId::new(1))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn eligible_user_gets_empty_list_when_no_hotels() {
        let service = service(
            Some(enrollment()),
            Some(ticket(false, true, TicketStatus::Paid)),
            vec![],
        );

        let res = service.find_all(UserId::new(1)).await.unwrap();
        assert!(res.is_empty());
    }

    #[tokio::test]
    async fn eligible_user_gets_all_hotels() {
        let service = service(
            Some(enrollment()),
            Some(ticket(false, true, TicketStatus::Paid)),
            vec![
                hotel(1, "Copacabana Pallace", vec![]),
                hotel(2, "Grande Hotel", vec![]),
            ],
        );

        let res = service.find_all(UserId::new(1)).await.unwrap();
        assert_eq!(res.len(), 2);
        assert_eq!(res[0].name, "Copacabana Pallace");
        assert_eq!(res[1].name, "Grande Hotel");
    }

    #[tokio::test]
    async fn hotel_without_rooms_comes_back_with_empty_room_list() {
        let service = service(
            Some(enrollment()),
            Some(ticket(false, true, TicketStatus::Paid)),
            vec![hotel(1, "Copacabana Pallace", vec![])],
        );

        let res = service
            .find_with_rooms_by_id(UserId::new(1), HotelId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(res.hotel.name, "Copacabana Pallace");
        assert!(res.rooms.is_empty());
    }

    #[tokio::test]
    async fn rooms_are_nested_under_their_hotel() {
        let service = service(
            Some(enrollment()),
            Some(ticket(false, true, TicketStatus::Paid)),
            vec![hotel(1, "Copacabana Pallace", vec![room(7, 1, "Cobertura", 3)])],
        );

        let res = service
            .find_with_rooms_by_id(UserId::new(1), HotelId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(res.rooms.len(), 1);
        assert_eq!(res.rooms[0].name, "Cobertura");
        assert_eq!(res.rooms[0].capacity, 3);
        assert_eq!(res.rooms[0].hotel_id, HotelId::new(1));
    }

    #[tokio::test]
    async fn unknown_hotel_id_yields_none() {
        let service = service(
            Some(enrollment()),
            Some(ticket(false, true, TicketStatus::Paid)),
            vec![hotel(1, "Copacabana Pallace", vec![])],
        );

        let res = service
            .find_with_rooms_by_id(UserId::new(1), HotelId::new(999))
            .await
            .unwrap();
        assert!(res.is_none());
    }
}
