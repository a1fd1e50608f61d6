use std::sync::Arc;

use chrono::NaiveTime;

use crate::cache::CacheBackend;
use crate::service::RestaurantService;
use crate::store::RestaurantStore;

/// Source of the current time of day for eligibility checks.
pub type Clock = fn() -> NaiveTime;

/// Local wall-clock time of day.
pub fn local_time_of_day() -> NaiveTime {
    chrono::Local::now().time()
}

pub struct HandlerState<C: CacheBackend + 'static, S: RestaurantStore + 'static> {
    pub service: Arc<RestaurantService<C, S>>,

    pub clock: Clock,
}

impl<C: CacheBackend + 'static, S: RestaurantStore + 'static> Clone for HandlerState<C, S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            clock: self.clock,
        }
    }
}

impl<C: CacheBackend + 'static, S: RestaurantStore + 'static> HandlerState<C, S> {
    pub fn new(service: Arc<RestaurantService<C, S>>) -> Self {
        Self::with_clock(service, local_time_of_day)
    }

    pub fn with_clock(service: Arc<RestaurantService<C, S>>, clock: Clock) -> Self {
        Self { service, clock }
    }

    pub fn now(&self) -> NaiveTime {
        (self.clock)()
    }
}
