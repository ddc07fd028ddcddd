//! Domain API modules.
//!
//! Each accessor maps functions one-to-one onto backend endpoints. No
//! business logic lives here; errors are exactly those of the gateway.

pub mod admin;
pub mod appointments;
pub mod auth;
pub mod doctors;
pub mod hospitals;
pub mod operations;
pub mod payments;

pub use admin::AdminApi;
pub use appointments::AppointmentsApi;
pub use auth::AuthApi;
pub use doctors::DoctorsApi;
pub use hospitals::HospitalsApi;
pub use operations::OperationsApi;
pub use payments::PaymentsApi;

use crate::client::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn hospitals(&self) -> HospitalsApi<'_> {
        HospitalsApi::new(self)
    }

    pub fn doctors(&self) -> DoctorsApi<'_> {
        DoctorsApi::new(self)
    }

    pub fn appointments(&self) -> AppointmentsApi<'_> {
        AppointmentsApi::new(self)
    }

    pub fn operations(&self) -> OperationsApi<'_> {
        OperationsApi::new(self)
    }

    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi::new(self)
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }
}
