use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::availability::AvailabilityRepositoryImpl;
use adapter::repository::court::CourtRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::price_extra::PriceExtraRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::repository::time_slot::TimeSlotRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::availability::AvailabilityRepository;
use kernel::repository::court::CourtRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::price_extra::PriceExtraRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::time_slot::TimeSlotRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    court_repository: Arc<dyn CourtRepository>,
    time_slot_repository: Arc<dyn TimeSlotRepository>,
    price_extra_repository: Arc<dyn PriceExtraRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    availability_repository: Arc<dyn AvailabilityRepository>,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        redis_client: Arc<RedisClient>,
        app_config: AppConfig,
    ) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let court_repository = Arc::new(CourtRepositoryImpl::new(pool.clone()));
        let time_slot_repository = Arc::new(TimeSlotRepositoryImpl::new(pool.clone()));
        let price_extra_repository = Arc::new(PriceExtraRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let availability_repository = Arc::new(AvailabilityRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            court_repository,
            time_slot_repository,
            price_extra_repository,
            reservation_repository,
            availability_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn court_repository(&self) -> Arc<dyn CourtRepository> {
        self.court_repository.clone()
    }

    pub fn time_slot_repository(&self) -> Arc<dyn TimeSlotRepository> {
        self.time_slot_repository.clone()
    }

    pub fn price_extra_repository(&self) -> Arc<dyn PriceExtraRepository> {
        self.price_extra_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn availability_repository(&self) -> Arc<dyn AvailabilityRepository> {
        self.availability_repository.clone()
    }
}
