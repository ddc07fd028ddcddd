//! Page-level logic for the marketing and lead-generation screens.
//!
//! Both pages work from static data. Pricing selection yields a navigation
//! event; the pharma form validates and acknowledges locally.

pub mod pharma;
pub mod pricing;

pub use pharma::{Notification, PharmaBookingForm};
pub use pricing::{find_plan, format_inr, plans, select_plan, PricingPlan};
