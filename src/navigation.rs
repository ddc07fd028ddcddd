//! Application-level routing events.
//!
//! Operations that would move the user to another screen return one of
//! these instead of performing the move. The caller decides how to route.

use std::fmt;

use crate::client::encode_segment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Login screen, after logout or a rejected session.
    Login,
    /// Hospital registration carrying the selected plan and its one-time price.
    RegisterHospital { plan: String, amount: u64 },
}

impl Navigation {
    /// Relative URL for this destination.
    pub fn to_path(&self) -> String {
        match self {
            Navigation::Login => "/login".to_string(),
            Navigation::RegisterHospital { plan, amount } => format!(
                "/register-hospital?plan={}&amount={}",
                encode_segment(plan),
                amount
            ),
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_path() {
        assert_eq!(Navigation::Login.to_path(), "/login");
    }

    #[test]
    fn test_register_hospital_path() {
        let nav = Navigation::RegisterHospital {
            plan: "Professional".to_string(),
            amount: 10000,
        };
        assert_eq!(
            nav.to_path(),
            "/register-hospital?plan=Professional&amount=10000"
        );
    }

    #[test]
    fn test_plan_name_is_encoded() {
        let nav = Navigation::RegisterHospital {
            plan: "Clinic & Care".to_string(),
            amount: 1,
        };
        assert_eq!(
            nav.to_string(),
            "/register-hospital?plan=Clinic%20%26%20Care&amount=1"
        );
    }
}
