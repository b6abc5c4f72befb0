//! Committed hearing sheet field list
//!
//! The schema is a fixed, ordered list of [`FieldSpec`] entries shared by
//! the client and the endpoint. Order matters: it is the column order of
//! the appended row (after the leading timestamp).

use serde::{Deserialize, Serialize};

/// How a field collects its value
///
/// The kind drives restore behavior on the client:
/// - `Text`: direct value restoration
/// - `SingleChoice`: restore by equality match (exclusive options)
/// - `MultiChoice`: restore by set-membership test (grouped options)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text or single-valued select
    Text,
    /// Exclusive choice (radio group)
    SingleChoice,
    /// Grouped multi-select (checkbox group); value is an ordered list
    MultiChoice,
}

/// One field of the hearing sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Stable field name (wire key and column identity)
    pub name: &'static str,
    /// Field kind
    pub kind: FieldKind,
    /// Whether submission requires a non-blank value
    pub required: bool,
}

impl FieldSpec {
    const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: false,
        }
    }

    const fn required_text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: true,
        }
    }

    const fn single_choice(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::SingleChoice,
            required: false,
        }
    }

    const fn multi_choice(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::MultiChoice,
            required: false,
        }
    }

    /// Look up a field spec by name
    #[must_use]
    pub fn find(name: &str) -> Option<&'static FieldSpec> {
        HEARING_FIELDS.iter().find(|spec| spec.name == name)
    }
}

/// Names of the fields that must be non-blank before submission
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "address", "phone"];

/// The hearing sheet fields, in row column order
pub const HEARING_FIELDS: [FieldSpec; 28] = [
    FieldSpec::required_text("name"),
    FieldSpec::text("name_kana"),
    FieldSpec::text("birthday"),
    FieldSpec::single_choice("gender"),
    FieldSpec::required_text("address"),
    FieldSpec::required_text("phone"),
    FieldSpec::text("email"),
    FieldSpec::text("emergency_contact"),
    FieldSpec::text("prev_office"),
    FieldSpec::text("experience_years"),
    FieldSpec::text("prev_employment_type"),
    FieldSpec::text("prev_duties"),
    FieldSpec::text("shakosho_exp"),
    FieldSpec::multi_choice("car_skills"),
    FieldSpec::text("visited_offices"),
    FieldSpec::multi_choice("pc_skills"),
    FieldSpec::single_choice("driver_license"),
    FieldSpec::single_choice("own_car"),
    FieldSpec::text("gyosei_plan"),
    FieldSpec::text("other_qualifications"),
    FieldSpec::text("work_days"),
    FieldSpec::text("work_hours"),
    FieldSpec::text("desired_wage"),
    FieldSpec::text("start_date"),
    FieldSpec::text("commute"),
    FieldSpec::text("health"),
    FieldSpec::text("handover_notes"),
    FieldSpec::text("notes"),
];
