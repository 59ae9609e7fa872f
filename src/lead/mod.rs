//! Lead capture: contact/firmographic record, structural validation, and
//! the fixed bracket enumerations.

pub mod submit;

use crate::errors::LossmapError;
use serde::{Deserialize, Serialize};

pub use submit::{submit_lead, SubmitAck};

/// Revenue brackets offered to the user, in display order
pub const REVENUE_BRACKETS: [&str; 7] = [
    "Under ₹1 Crore",
    "₹1-5 Crores",
    "₹5-10 Crores",
    "₹10-25 Crores",
    "₹25-50 Crores",
    "₹50-100 Crores",
    "Above ₹100 Crores",
];

/// Headcount brackets offered to the user, in display order
pub const COMPANY_SIZES: [&str; 6] = [
    "1-10 employees",
    "11-50 employees",
    "51-100 employees",
    "101-250 employees",
    "251-500 employees",
    "500+ employees",
];

/// A prospective customer's contact and firmographic details.
///
/// The computed total annual loss is attached at submission time, not
/// stored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub annual_revenue: String,
    pub company_size: String,
}

/// Structural validation only: required strings non-empty, brackets within
/// their enumerations when provided. No format checking beyond that.
pub fn validate(lead: &LeadRecord) -> Result<(), LossmapError> {
    let mut missing = Vec::new();
    if lead.name.trim().is_empty() {
        missing.push("name");
    }
    if lead.email.trim().is_empty() {
        missing.push("email");
    }
    if lead.phone.trim().is_empty() {
        missing.push("phone");
    }
    if !missing.is_empty() {
        return Err(LossmapError::MissingFields(missing));
    }

    if !lead.annual_revenue.is_empty() && !REVENUE_BRACKETS.contains(&lead.annual_revenue.as_str())
    {
        return Err(LossmapError::InvalidBracket {
            field: "annual_revenue",
            value: lead.annual_revenue.clone(),
        });
    }
    if !lead.company_size.is_empty() && !COMPANY_SIZES.contains(&lead.company_size.as_str()) {
        return Err(LossmapError::InvalidBracket {
            field: "company_size",
            value: lead.company_size.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_lead() -> LeadRecord {
        LeadRecord {
            name: "Asha Verma".into(),
            email: "asha@example.in".into(),
            phone: "+91 98765 43210".into(),
            company_name: "Verma Textiles".into(),
            annual_revenue: "₹1-5 Crores".into(),
            company_size: "11-50 employees".into(),
        }
    }

    #[test]
    fn complete_lead_validates() {
        assert!(validate(&complete_lead()).is_ok());
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let lead = LeadRecord {
            name: "  ".into(),
            phone: String::new(),
            ..complete_lead()
        };
        match validate(&lead) {
            Err(LossmapError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["name", "phone"]);
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn optional_brackets_may_be_empty() {
        let lead = LeadRecord {
            annual_revenue: String::new(),
            company_size: String::new(),
            ..complete_lead()
        };
        assert!(validate(&lead).is_ok());
    }

    #[test]
    fn brackets_outside_the_enumeration_are_rejected() {
        let lead = LeadRecord {
            annual_revenue: "a lot".into(),
            ..complete_lead()
        };
        assert!(matches!(
            validate(&lead),
            Err(LossmapError::InvalidBracket {
                field: "annual_revenue",
                ..
            })
        ));
    }
}
