// src/tables/hierarchy.rs
use bevy::prelude::*;
use std::collections::HashMap;

use super::definitions::{FilterField, FilterState, TableType};
use super::errors::CascadeViolation;

/// Static four-level product reference tree: departments -> classes ->
/// sub-classes -> styles, each level keyed by the selected parent value.
/// Loaded once at startup and never mutated at runtime.
#[derive(Resource, Debug, Clone)]
pub struct ProductHierarchy {
    departments: Vec<String>,
    classes: HashMap<String, Vec<String>>,
    sub_classes: HashMap<String, Vec<String>>,
    styles: HashMap<String, Vec<String>>,
}

impl Default for ProductHierarchy {
    fn default() -> Self {
        fn level(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
            entries
                .iter()
                .map(|(parent, children)| {
                    (
                        parent.to_string(),
                        children.iter().map(|c| c.to_string()).collect(),
                    )
                })
                .collect()
        }

        ProductHierarchy {
            departments: vec![
                "Women's dress shoes".to_string(),
                "Men's casual shoes".to_string(),
            ],
            classes: level(&[("Women's dress shoes", &["Aged/strappy", "Classic"])]),
            sub_classes: level(&[("Aged/strappy", &["Candies", "Formal"])]),
            styles: level(&[("Candies", &["Two strap woven", "Single strap leather"])]),
        }
    }
}

const EMPTY: &[String] = &[];

impl ProductHierarchy {
    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    /// Classes under `dept`; empty when `dept` is empty or unknown.
    pub fn available_classes(&self, dept: &str) -> &[String] {
        self.classes.get(dept).map_or(EMPTY, |v| v.as_slice())
    }

    pub fn available_sub_classes(&self, class: &str) -> &[String] {
        self.sub_classes.get(class).map_or(EMPTY, |v| v.as_slice())
    }

    pub fn available_styles(&self, sub_class: &str) -> &[String] {
        self.styles.get(sub_class).map_or(EMPTY, |v| v.as_slice())
    }

    fn available_children(&self, parent: FilterField, parent_value: &str) -> &[String] {
        match parent {
            FilterField::Dept => self.available_classes(parent_value),
            FilterField::Class => self.available_sub_classes(parent_value),
            FilterField::SubClass => self.available_styles(parent_value),
            _ => EMPTY,
        }
    }

    /// Checks the cascade invariant: every non-empty child field needs a
    /// non-empty parent, and its value must be among that parent's
    /// available children. Departments themselves must exist in the tree.
    pub fn validate(&self, filters: &FilterState) -> Result<(), CascadeViolation> {
        if !filters.dept.is_empty() && !self.departments.contains(&filters.dept) {
            return Err(CascadeViolation::UnknownValue {
                field: FilterField::Dept,
                value: filters.dept.clone(),
            });
        }

        for child in [FilterField::Class, FilterField::SubClass, FilterField::Style] {
            let value = filters
                .hierarchy_value(child)
                .unwrap_or_default()
                .to_string();
            if value.is_empty() {
                continue;
            }
            let Some(parent) = child.parent() else {
                continue;
            };
            let parent_value = filters
                .hierarchy_value(parent)
                .unwrap_or_default()
                .to_string();
            if parent_value.is_empty() {
                return Err(CascadeViolation::MissingParent {
                    child,
                    parent,
                    value,
                });
            }
            if !self.available_children(parent, &parent_value).contains(&value) {
                return Err(CascadeViolation::InvalidChild {
                    child,
                    value,
                    parent,
                    parent_value,
                });
            }
        }
        Ok(())
    }
}

/// Whether a filter field applies to tables of the given type. The time
/// period and date range only ever mean something on weekly price data.
pub fn is_field_applicable(table_type: TableType, field: FilterField) -> bool {
    match field {
        FilterField::TimePeriod | FilterField::StartDate | FilterField::EndDate => {
            table_type == TableType::WeeklyData
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_chain() -> FilterState {
        FilterState {
            dept: "Women's dress shoes".to_string(),
            class: "Aged/strappy".to_string(),
            sub_class: "Candies".to_string(),
            style: "Two strap woven".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn lookups_follow_the_tree() {
        let h = ProductHierarchy::default();
        assert_eq!(h.departments().len(), 2);
        assert_eq!(
            h.available_classes("Women's dress shoes"),
            &["Aged/strappy".to_string(), "Classic".to_string()]
        );
        assert!(h.available_classes("").is_empty());
        assert!(h.available_classes("Men's casual shoes").is_empty());
        assert_eq!(h.available_sub_classes("Aged/strappy").len(), 2);
        assert_eq!(h.available_styles("Candies").len(), 2);
        assert!(h.available_styles("Formal").is_empty());
    }

    #[test]
    fn valid_full_chain_passes() {
        let h = ProductHierarchy::default();
        assert_eq!(h.validate(&full_chain()), Ok(()));
        assert_eq!(h.validate(&FilterState::default()), Ok(()));
    }

    #[test]
    fn child_without_parent_is_rejected() {
        let h = ProductHierarchy::default();
        let filters = FilterState {
            class: "Classic".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            h.validate(&filters),
            Err(CascadeViolation::MissingParent {
                child: FilterField::Class,
                ..
            })
        ));
    }

    #[test]
    fn child_under_wrong_parent_is_rejected() {
        let h = ProductHierarchy::default();
        // "Classic" only exists under women's dress shoes.
        let filters = FilterState {
            dept: "Men's casual shoes".to_string(),
            class: "Classic".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            h.validate(&filters),
            Err(CascadeViolation::InvalidChild {
                child: FilterField::Class,
                ..
            })
        ));
    }

    #[test]
    fn unknown_department_is_rejected() {
        let h = ProductHierarchy::default();
        let filters = FilterState {
            dept: "Hats".to_string(),
            ..Default::default()
        };
        assert!(h.validate(&filters).is_err());
    }

    #[test]
    fn dept_change_clears_all_descendants() {
        let mut filters = full_chain();
        filters.dept = "Men's casual shoes".to_string();
        filters.clear_descendants(FilterField::Dept);
        assert!(filters.class.is_empty());
        assert!(filters.sub_class.is_empty());
        assert!(filters.style.is_empty());
        assert_eq!(ProductHierarchy::default().validate(&filters), Ok(()));
    }

    #[test]
    fn class_change_keeps_dept() {
        let mut filters = full_chain();
        filters.class = "Classic".to_string();
        filters.clear_descendants(FilterField::Class);
        assert_eq!(filters.dept, "Women's dress shoes");
        assert!(filters.sub_class.is_empty());
        assert!(filters.style.is_empty());
    }

    #[test]
    fn date_fields_only_apply_to_weekly_data() {
        assert!(is_field_applicable(TableType::WeeklyData, FilterField::TimePeriod));
        assert!(is_field_applicable(TableType::WeeklyData, FilterField::StartDate));
        assert!(!is_field_applicable(TableType::WhiteTicket, FilterField::TimePeriod));
        assert!(!is_field_applicable(TableType::PromotionPlanning, FilterField::EndDate));
        assert!(is_field_applicable(TableType::PromotionPlanning, FilterField::Dept));
    }
}
