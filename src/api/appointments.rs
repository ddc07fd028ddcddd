//! `/api/appointments` endpoints.

use crate::client::{query_string, ApiClient, Result};
use crate::models::{
    ActionResponse, Appointment, AppointmentAction, AvailableSlots, BookAppointmentRequest,
};

pub struct AppointmentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AppointmentsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn book(&self, request: &BookAppointmentRequest) -> Result<Appointment> {
        self.client.post("/api/appointments/book", request).await
    }

    /// Appointments booked by the current user.
    pub async fn mine(&self) -> Result<Vec<Appointment>> {
        self.client.get("/api/appointments/my-appointments").await
    }

    /// Appointments assigned to the current doctor.
    pub async fn for_doctor(&self) -> Result<Vec<Appointment>> {
        self.client.get("/api/appointments/doctor-appointments").await
    }

    /// Free and booked slots for a doctor on a date.
    ///
    /// # Arguments
    /// * `doctor_id` - Doctor's user ID
    /// * `date` - Date string as the backend expects it (e.g. `2025-01-05`)
    pub async fn available_slots(&self, doctor_id: i64, date: &str) -> Result<AvailableSlots> {
        let query = query_string(&[
            ("doctor_id", doctor_id.to_string()),
            ("date", date.to_string()),
        ]);
        self.client
            .get(&format!("/api/appointments/available-slots{}", query))
            .await
    }

    pub async fn apply(&self, id: i64, action: AppointmentAction) -> Result<ActionResponse> {
        self.client
            .put_empty(&format!("/api/appointments/{}/{}", id, action.as_path()))
            .await
    }

    pub async fn confirm(&self, id: i64) -> Result<ActionResponse> {
        self.apply(id, AppointmentAction::Confirm).await
    }

    pub async fn cancel(&self, id: i64) -> Result<ActionResponse> {
        self.apply(id, AppointmentAction::Cancel).await
    }

    pub async fn mark_visited(&self, id: i64) -> Result<ActionResponse> {
        self.apply(id, AppointmentAction::MarkVisited).await
    }
}
