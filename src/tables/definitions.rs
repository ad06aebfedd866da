// src/tables/definitions.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three table archetypes offered as drag sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TableType {
    #[default]
    WeeklyData,
    PromotionPlanning,
    WhiteTicket,
}

impl TableType {
    /// Default ordered column set for a freshly dropped table of this type.
    /// Applied only at creation time; a later type change deliberately does
    /// not re-resolve columns (user customization must survive).
    pub fn default_columns(self) -> Vec<String> {
        let names: &[&str] = match self {
            TableType::WeeklyData => {
                &["Week", "Sales $", "Units", "LY PPT", "AUR", "Price"]
            }
            TableType::PromotionPlanning => {
                &["Promo event", "Price", "Units", "Sales $", "AUR", "Notes"]
            }
            TableType::WhiteTicket => {
                &["White Ticket Price", "Ranking", "Units", "AUR", "Sales $", "IMU"]
            }
        };
        names.iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableType::WeeklyData => write!(f, "weekly-data"),
            TableType::PromotionPlanning => write!(f, "promotion-planning"),
            TableType::WhiteTicket => write!(f, "white-ticket"),
        }
    }
}

/// A sidebar template card. The id is what a drag payload carries; unknown
/// ids arriving in a drop are rejected with feedback instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub table_type: TableType,
}

pub const TABLE_TEMPLATES: [TableTemplate; 3] = [
    TableTemplate {
        id: "white-ticket",
        title: "WHITE TICKET TABLE",
        table_type: TableType::WhiteTicket,
    },
    TableTemplate {
        id: "promo-planning",
        title: "PROMOTION PLANNING TABLE",
        table_type: TableType::PromotionPlanning,
    },
    TableTemplate {
        id: "weekly-data",
        title: "WEEKLY PRICE DATA TABLE",
        table_type: TableType::WeeklyData,
    },
];

/// Looks up a template by its drag-payload id.
pub fn find_template(template_id: &str) -> Option<&'static TableTemplate> {
    TABLE_TEMPLATES.iter().find(|t| t.id == template_id)
}

/// Metrics selectable as column headers from the per-column picker.
pub const AVAILABLE_METRICS: [&str; 10] = [
    "Sales $",
    "Units",
    "LY PPT",
    "AUR",
    "Price",
    "IMU",
    "Ranking",
    "White Ticket Price",
    "Promo event",
    "Notes",
];

/// Cell coordinates of a placed table. `width` is carried for layouts
/// saved by wider-table variants; occupancy always keys on `(row, col)`
/// alone and placement always produces width 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
    #[serde(default = "default_width")]
    pub width: u8,
}

fn default_width() -> u8 {
    1
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        GridPosition { row, col, width: 1 }
    }
}

/// The hierarchical filter fields, parent before child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    Dept,
    Class,
    SubClass,
    Style,
    TimePeriod,
    StartDate,
    EndDate,
}

impl FilterField {
    /// The field one level up in the product hierarchy, if any.
    /// Time-period and date fields sit outside the cascade.
    pub fn parent(self) -> Option<FilterField> {
        match self {
            FilterField::Dept => None,
            FilterField::Class => Some(FilterField::Dept),
            FilterField::SubClass => Some(FilterField::Class),
            FilterField::Style => Some(FilterField::SubClass),
            FilterField::TimePeriod | FilterField::StartDate | FilterField::EndDate => None,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterField::Dept => "department",
            FilterField::Class => "class",
            FilterField::SubClass => "sub-class",
            FilterField::Style => "style",
            FilterField::TimePeriod => "time period",
            FilterField::StartDate => "start date",
            FilterField::EndDate => "end date",
        };
        write!(f, "{}", name)
    }
}

/// Committed filter selection for one table. Empty strings mean "not set";
/// the cascade invariant (a child is only set when its parent is set to a
/// value the child belongs under) is enforced by `ProductHierarchy::validate`
/// before any instance reaches the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub dept: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub sub_class: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub time_period: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl FilterState {
    /// Value of a hierarchy field; non-hierarchy fields have no string slot
    /// addressed this way.
    pub fn hierarchy_value(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Dept => Some(self.dept.as_str()),
            FilterField::Class => Some(self.class.as_str()),
            FilterField::SubClass => Some(self.sub_class.as_str()),
            FilterField::Style => Some(self.style.as_str()),
            _ => None,
        }
    }

    /// Empties every field strictly below `changed` in the hierarchy. Keeps
    /// stale children from surviving a parent change.
    pub fn clear_descendants(&mut self, changed: FilterField) {
        match changed {
            FilterField::Dept => {
                self.class.clear();
                self.sub_class.clear();
                self.style.clear();
            }
            FilterField::Class => {
                self.sub_class.clear();
                self.style.clear();
            }
            FilterField::SubClass => {
                self.style.clear();
            }
            FilterField::Style
            | FilterField::TimePeriod
            | FilterField::StartDate
            | FilterField::EndDate => {}
        }
    }
}

/// One live table on the staging grid.
///
/// Owned exclusively by `TableRegistry`; the id is generated at placement
/// and never changes. `data` is an opaque payload from the data-fetch
/// collaborator, stored and forwarded but never interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedTable {
    pub id: String,
    pub table_type: TableType,
    pub position: GridPosition,
    pub filters: FilterState,
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// A named, independent deep copy of the table collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLayout {
    pub name: String,
    pub tables: Vec<PlacedTable>,
    pub saved_at: DateTime<Utc>,
}
