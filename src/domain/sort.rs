use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns the table can be ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortField {
    #[serde(rename = "postId")]
    GroupId,
    #[serde(rename = "name")]
    DisplayName,
    #[serde(rename = "email")]
    ContactEmail,
}

impl SortField {
    pub const ALL: [SortField; 3] = [
        SortField::GroupId,
        SortField::DisplayName,
        SortField::ContactEmail,
    ];

    /// Key used in the persisted `sortConfig` slot.
    pub fn key(&self) -> &'static str {
        match self {
            SortField::GroupId => "postId",
            SortField::DisplayName => "name",
            SortField::ContactEmail => "email",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "postId" => Some(SortField::GroupId),
            "name" => Some(SortField::DisplayName),
            "email" => Some(SortField::ContactEmail),
            _ => None,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::GroupId => write!(f, "Post ID"),
            SortField::DisplayName => write!(f, "Name"),
            SortField::ContactEmail => write!(f, "Email"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Active ordering of the table.
///
/// A field without a direction cannot be represented, so the "direction is
/// none iff field is none" rule holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "StoredSortSpec", into = "StoredSortSpec")]
pub enum SortSpec {
    #[default]
    Unsorted,
    Sorted {
        field: SortField,
        direction: SortDirection,
    },
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        SortSpec::Sorted {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        SortSpec::Sorted {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// State after clicking the sort trigger for `clicked`.
    ///
    /// Repeated clicks on one field cycle ascending → descending → unsorted.
    /// Clicking a different field always starts that field ascending.
    pub fn toggled(self, clicked: SortField) -> Self {
        match self {
            SortSpec::Sorted { field, direction } if field == clicked => match direction {
                SortDirection::Ascending => SortSpec::descending(clicked),
                SortDirection::Descending => SortSpec::Unsorted,
            },
            _ => SortSpec::ascending(clicked),
        }
    }

    /// Direction shown next to `field`'s trigger, if it is the active one.
    pub fn direction_for(&self, field: SortField) -> Option<SortDirection> {
        match self {
            SortSpec::Sorted {
                field: active,
                direction,
            } if *active == field => Some(*direction),
            _ => None,
        }
    }
}

/// Persisted shape: `{"key":"name","direction":"asc"}` or
/// `{"key":"","direction":null}` when unsorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSortSpec {
    #[serde(default)]
    key: String,
    #[serde(default)]
    direction: Option<SortDirection>,
}

impl From<StoredSortSpec> for SortSpec {
    fn from(stored: StoredSortSpec) -> Self {
        match (SortField::from_key(&stored.key), stored.direction) {
            (Some(field), Some(direction)) => SortSpec::Sorted { field, direction },
            // A field with no direction is a resting state only for legacy data.
            _ => SortSpec::Unsorted,
        }
    }
}

impl From<SortSpec> for StoredSortSpec {
    fn from(spec: SortSpec) -> Self {
        match spec {
            SortSpec::Unsorted => StoredSortSpec {
                key: String::new(),
                direction: None,
            },
            SortSpec::Sorted { field, direction } => StoredSortSpec {
                key: field.key().to_string(),
                direction: Some(direction),
            },
        }
    }
}
