//! Contact model representing one person in the network.

use serde::{Deserialize, Serialize};

/// A contact in the professional network.
///
/// Optional scalar fields always serialize, as `null` when absent, so callers
/// can tell "no value" apart from "field not returned".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactRecord {
    /// Full name (never empty for stored records)
    pub full_name: String,

    /// Free-text profile headline
    pub headline: Option<String>,

    /// Location as entered on the profile
    pub location: Option<String>,

    /// Public profile URL
    pub linkedin_url: Option<String>,

    /// Current position, `None` when no company column is populated
    pub current_company: Option<CurrentCompany>,

    /// Top skills in profile order
    #[serde(default)]
    pub skills_top: Vec<String>,

    /// Categorical tags used for filtering
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// The contact's current position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CurrentCompany {
    pub title: Option<String>,
    pub name: Option<String>,
    pub industry: Option<String>,
}

impl CurrentCompany {
    /// Reassemble from the flattened columns; `None` if every part is absent.
    pub fn from_parts(
        title: Option<String>,
        name: Option<String>,
        industry: Option<String>,
    ) -> Option<Self> {
        if title.is_none() && name.is_none() && industry.is_none() {
            return None;
        }
        Some(Self {
            title,
            name,
            industry,
        })
    }
}

impl ContactRecord {
    /// Name of the current company, if any.
    pub fn company_name(&self) -> Option<&str> {
        self.current_company
            .as_ref()
            .and_then(|company| company.name.as_deref())
    }
}
