//! Static pricing plans for hospitals.

use crate::navigation::Navigation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub description: &'static str,
    /// One-time installation fee in INR.
    pub installation_price: u64,
    /// Monthly maintenance fee in INR.
    pub monthly_price: u64,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub cta: &'static str,
}

pub const PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Starter",
        description: "For 1 Doctor / 1 Hospital",
        installation_price: 5000,
        monthly_price: 1000,
        features: &[
            "1 Doctor profile",
            "1 Hospital",
            "Appointment management",
            "Email reminders",
            "Basic analytics",
            "Email support",
        ],
        popular: false,
        cta: "Get Started",
    },
    PricingPlan {
        name: "Professional",
        description: "For 5 Doctors in 1 Hospital",
        installation_price: 10000,
        monthly_price: 2000,
        features: &[
            "Up to 5 Doctor profiles",
            "1 Hospital",
            "SMS & Email reminders",
            "Advanced analytics",
            "Custom booking page",
            "Payment integration",
            "Priority support",
        ],
        popular: true,
        cta: "Get Started",
    },
    PricingPlan {
        name: "Enterprise",
        description: "For 10 Doctors & 5 Hospitals",
        installation_price: 20000,
        monthly_price: 5000,
        features: &[
            "Up to 10 Doctor profiles",
            "Up to 5 Hospitals (same ownership)",
            "Multi-location support",
            "Custom integrations",
            "Dedicated account manager",
            "24/7 phone support",
            "White-label option",
        ],
        popular: false,
        cta: "Contact Sales",
    },
];

pub const PRICING_FOOTNOTE: &str = "All plans include setup assistance and dedicated support";

pub fn plans() -> &'static [PricingPlan] {
    &PLANS
}

/// Look up a plan by name, ignoring case.
pub fn find_plan(name: &str) -> Option<&'static PricingPlan> {
    PLANS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Selecting a plan moves to hospital registration with the plan name and
/// its installation price. No request is made.
pub fn select_plan(plan: &PricingPlan) -> Navigation {
    Navigation::RegisterHospital {
        plan: plan.name.to_string(),
        amount: plan.installation_price,
    }
}

/// Format rupees with Indian digit grouping, e.g. `₹1,00,000`.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}
