use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::enrollment::EnrollmentRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::hotel::HotelRepositoryImpl;
use adapter::repository::ticket::TicketRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::service::hotel::HotelService;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    hotel_service: Arc<HotelService>,
    auth_repository: Arc<dyn AuthRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let hotel_service = Arc::new(HotelService::new(
            Arc::new(EnrollmentRepositoryImpl::new(pool.clone())),
            Arc::new(TicketRepositoryImpl::new(pool.clone())),
            Arc::new(HotelRepositoryImpl::new(pool.clone())),
        ));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(redis_client.clone()));
        Self {
            health_check_repository,
            hotel_service,
            auth_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn hotel_service(&self) -> Arc<HotelService> {
        self.hotel_service.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }
}
