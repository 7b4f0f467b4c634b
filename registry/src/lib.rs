use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::service::availability::AvailabilityService;
use kernel::service::reservation::ReservationService;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    availability_service: Arc<AvailabilityService>,
    reservation_service: Arc<ReservationService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let reservation_repository: Arc<dyn ReservationRepository> =
            Arc::new(ReservationRepositoryImpl::new(pool));
        let availability_service =
            Arc::new(AvailabilityService::new(reservation_repository.clone()));
        let reservation_service = Arc::new(ReservationService::new(
            reservation_repository,
            availability_service.clone(),
        ));
        Self {
            health_check_repository,
            availability_service,
            reservation_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn availability_service(&self) -> Arc<AvailabilityService> {
        self.availability_service.clone()
    }

    pub fn reservation_service(&self) -> Arc<ReservationService> {
        self.reservation_service.clone()
    }
}
