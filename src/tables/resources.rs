// src/tables/resources.rs
use bevy::prelude::*;
use chrono::Utc;
use uuid::Uuid;

use super::definitions::{
    FilterState, GridPosition, PlacedTable, SavedLayout, TableTemplate, TableType,
};
use super::errors::{
    ColumnUpdateError, FilterUpdateError, LayoutError, PlacementError, UnknownTable,
};
use super::grid::GridConfig;
use super::hierarchy::ProductHierarchy;

/// The authoritative collection of live tables. The only place tables are
/// created, displaced, mutated or removed; the UI reads it and sends
/// request events, nothing else.
///
/// Invariant after every mutation: no two tables share a `(row, col)`.
#[derive(Resource, Default, Debug)]
pub struct TableRegistry {
    tables: Vec<PlacedTable>,
}

impl TableRegistry {
    pub fn tables(&self) -> &[PlacedTable] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn get(&self, table_id: &str) -> Option<&PlacedTable> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    pub fn table_at(&self, row: usize, col: usize) -> Option<&PlacedTable> {
        self.tables
            .iter()
            .find(|t| t.position.row == row && t.position.col == col)
    }

    fn get_mut(&mut self, table_id: &str) -> Result<&mut PlacedTable, UnknownTable> {
        self.tables
            .iter_mut()
            .find(|t| t.id == table_id)
            .ok_or_else(|| UnknownTable(table_id.to_string()))
    }

    /// Resolves a template drop on `(row, col)`.
    ///
    /// An existing occupant is displaced to the next free cell (row-major,
    /// excluding the target), never evicted. If no free cell remains the
    /// whole drop fails and nothing moves. Returns the new table's id.
    pub fn place_template(
        &mut self,
        template: &TableTemplate,
        row: usize,
        col: usize,
        grid: &GridConfig,
    ) -> Result<String, PlacementError> {
        if !grid.contains(row, col) {
            return Err(PlacementError::OutOfBounds {
                row,
                col,
                rows: grid.rows,
                cols: grid.cols,
            });
        }

        // Resolve the displacement target before touching anything so a
        // full grid aborts with prior state intact.
        let occupant_index = self
            .tables
            .iter()
            .position(|t| t.position.row == row && t.position.col == col);
        if let Some(index) = occupant_index {
            let relocated = grid
                .next_free_cell_excluding(&self.tables, Some((row, col)))
                .ok_or(PlacementError::GridFull)?;
            let occupant = &mut self.tables[index];
            trace!(
                "Displacing table '{}' from ({},{}) to ({},{}).",
                occupant.id, row, col, relocated.row, relocated.col
            );
            occupant.position = relocated;
        }

        let table = PlacedTable {
            id: format!("{}-{}", template.id, Uuid::new_v4()),
            table_type: template.table_type,
            position: GridPosition::new(row, col),
            filters: FilterState::default(),
            columns: template.table_type.default_columns(),
            data: serde_json::Value::Null,
        };
        let id = table.id.clone();
        self.tables.push(table);
        debug_assert!(!self.has_overlap());
        Ok(id)
    }

    /// Updates the table's type in place. Columns and filters are kept as
    /// they are: defaults apply only at creation, and resetting here would
    /// silently discard user customization.
    pub fn change_table_type(
        &mut self,
        table_id: &str,
        new_type: TableType,
    ) -> Result<(), UnknownTable> {
        let table = self.get_mut(table_id)?;
        table.table_type = new_type;
        Ok(())
    }

    /// Validates `filters` against the cascade rule, then commits them as a
    /// whole. A rejected update leaves the prior filters untouched.
    pub fn apply_filters(
        &mut self,
        table_id: &str,
        filters: FilterState,
        hierarchy: &ProductHierarchy,
    ) -> Result<(), FilterUpdateError> {
        hierarchy.validate(&filters)?;
        let table = self.get_mut(table_id)?;
        table.filters = filters;
        Ok(())
    }

    /// Renames one column header. Rejected when the metric is already one
    /// of the table's columns: column lists hold no duplicates.
    pub fn rename_column(
        &mut self,
        table_id: &str,
        column_index: usize,
        new_name: &str,
    ) -> Result<(), ColumnUpdateError> {
        let table = self.get_mut(table_id)?;
        let count = table.columns.len();
        if column_index >= count {
            return Err(ColumnUpdateError::BadIndex {
                index: column_index,
                count,
            });
        }
        if table.columns[column_index] == new_name {
            return Ok(());
        }
        if table.columns.iter().any(|c| c == new_name) {
            return Err(ColumnUpdateError::DuplicateColumn(new_name.to_string()));
        }
        table.columns[column_index] = new_name.to_string();
        Ok(())
    }

    /// Stores the opaque payload handed over by the data-fetch
    /// collaborator. Never interpreted here, only kept with the table.
    pub fn set_table_data(
        &mut self,
        table_id: &str,
        data: serde_json::Value,
    ) -> Result<(), UnknownTable> {
        let table = self.get_mut(table_id)?;
        table.data = data;
        Ok(())
    }

    /// Removes the table and frees its cell for future placement.
    pub fn remove_table(&mut self, table_id: &str) -> Result<PlacedTable, UnknownTable> {
        let index = self
            .tables
            .iter()
            .position(|t| t.id == table_id)
            .ok_or_else(|| UnknownTable(table_id.to_string()))?;
        Ok(self.tables.remove(index))
    }

    /// Deep copy of the live collection, fit for handing to the layout
    /// store without aliasing live state.
    pub fn snapshot(&self) -> Vec<PlacedTable> {
        self.tables.clone()
    }

    /// Replaces the whole collection, e.g. when a saved layout is loaded.
    pub fn replace_all(&mut self, tables: Vec<PlacedTable>) {
        self.tables = tables;
        debug_assert!(!self.has_overlap());
    }

    /// True if any two tables share a cell. Must stay false forever.
    pub fn has_overlap(&self) -> bool {
        for (i, a) in self.tables.iter().enumerate() {
            for b in &self.tables[i + 1..] {
                if a.position.row == b.position.row && a.position.col == b.position.col {
                    return true;
                }
            }
        }
        false
    }
}

/// Named snapshots of the table collection, in memory for the session,
/// listed in insertion order.
#[derive(Resource, Default, Debug)]
pub struct LayoutStore {
    layouts: Vec<SavedLayout>,
}

impl LayoutStore {
    pub fn layouts(&self) -> &[SavedLayout] {
        &self.layouts
    }

    /// Stores a deep copy of `tables` under `name`. No overwrite: a name
    /// can only be taken once.
    pub fn save(&mut self, name: &str, tables: &[PlacedTable]) -> Result<(), LayoutError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LayoutError::EmptyName);
        }
        if self.layouts.iter().any(|l| l.name == name) {
            return Err(LayoutError::DuplicateName(name.to_string()));
        }
        self.layouts.push(SavedLayout {
            name: name.to_string(),
            tables: tables.to_vec(),
            saved_at: Utc::now(),
        });
        Ok(())
    }

    /// Deep copy of the stored snapshot; live edits after a load can never
    /// reach back into the store.
    pub fn load(&self, name: &str) -> Result<Vec<PlacedTable>, LayoutError> {
        self.layouts
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.tables.clone())
            .ok_or_else(|| LayoutError::NotFound(name.to_string()))
    }

    pub fn delete(&mut self, name: &str) -> Result<SavedLayout, LayoutError> {
        let index = self
            .layouts
            .iter()
            .position(|l| l.name == name)
            .ok_or_else(|| LayoutError::NotFound(name.to_string()))?;
        Ok(self.layouts.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::definitions::{find_template, FilterField};
    use crate::tables::errors::CascadeViolation;

    fn place(
        registry: &mut TableRegistry,
        grid: &GridConfig,
        template_id: &str,
        row: usize,
        col: usize,
    ) -> String {
        let template = find_template(template_id).expect("known template");
        registry
            .place_template(template, row, col, grid)
            .expect("placement succeeds")
    }

    #[test]
    fn drop_on_empty_grid_creates_default_table() {
        // Scenario: white-ticket template dropped at (0,0) on an empty grid.
        let grid = GridConfig::default();
        let mut registry = TableRegistry::default();
        let id = place(&mut registry, &grid, "white-ticket", 0, 0);

        let table = registry.get(&id).unwrap();
        assert_eq!(table.table_type, TableType::WhiteTicket);
        assert_eq!(table.position, GridPosition::new(0, 0));
        assert_eq!(
            table.columns,
            vec!["White Ticket Price", "Ranking", "Units", "AUR", "Sales $", "IMU"]
        );
        assert_eq!(table.filters, FilterState::default());
        assert!(id.starts_with("white-ticket-"));
    }

    #[test]
    fn drop_on_occupied_cell_displaces_occupant() {
        let grid = GridConfig::default();
        let mut registry = TableRegistry::default();
        let first = place(&mut registry, &grid, "weekly-data", 0, 0);
        let second = place(&mut registry, &grid, "promo-planning", 0, 0);

        // The occupant moved to the next free cell; the drop took (0,0).
        assert_eq!(registry.get(&first).unwrap().position, GridPosition::new(0, 1));
        assert_eq!(registry.get(&second).unwrap().position, GridPosition::new(0, 0));
        assert!(!registry.has_overlap());
    }

    #[test]
    fn displaced_occupant_skips_the_target_cell() {
        let grid = GridConfig::new(2, 2);
        let mut registry = TableRegistry::default();
        // Occupy (0,0) and (0,1); drop on (0,1). The occupant of (0,1) must
        // land on (1,0), not back on the contested (0,1).
        place(&mut registry, &grid, "weekly-data", 0, 0);
        let displaced = place(&mut registry, &grid, "weekly-data", 0, 1);
        place(&mut registry, &grid, "white-ticket", 0, 1);

        assert_eq!(
            registry.get(&displaced).unwrap().position,
            GridPosition::new(1, 0)
        );
        assert!(!registry.has_overlap());
    }

    #[test]
    fn drop_on_full_grid_is_atomic() {
        let grid = GridConfig::default();
        let mut registry = TableRegistry::default();
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                place(&mut registry, &grid, "weekly-data", row, col);
            }
        }
        let before = registry.snapshot();

        let template = find_template("white-ticket").unwrap();
        let result = registry.place_template(template, 0, 0, &grid);
        assert_eq!(result, Err(PlacementError::GridFull));
        // The occupant kept its cell and nothing was inserted.
        assert_eq!(registry.snapshot(), before);
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn drop_outside_bounds_is_rejected() {
        let grid = GridConfig::default();
        let mut registry = TableRegistry::default();
        let template = find_template("weekly-data").unwrap();
        assert!(matches!(
            registry.place_template(template, 6, 0, &grid),
            Err(PlacementError::OutOfBounds { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn removed_cell_is_reclaimed_by_later_drops() {
        let grid = GridConfig::default();
        let mut registry = TableRegistry::default();
        let first = place(&mut registry, &grid, "weekly-data", 0, 0);
        place(&mut registry, &grid, "weekly-data", 0, 1);

        registry.remove_table(&first).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(grid.next_free_cell(registry.tables()), Some(GridPosition::new(0, 0)));

        assert!(matches!(
            registry.remove_table(&first),
            Err(UnknownTable(_))
        ));
    }

    #[test]
    fn type_change_keeps_columns_and_filters() {
        let grid = GridConfig::default();
        let mut registry = TableRegistry::default();
        let hierarchy = ProductHierarchy::default();
        let id = place(&mut registry, &grid, "white-ticket", 0, 0);

        let filters = FilterState {
            dept: "Women's dress shoes".to_string(),
            ..Default::default()
        };
        registry.apply_filters(&id, filters.clone(), &hierarchy).unwrap();
        registry.change_table_type(&id, TableType::WeeklyData).unwrap();

        let table = registry.get(&id).unwrap();
        assert_eq!(table.table_type, TableType::WeeklyData);
        // Still the white-ticket columns and the applied filters.
        assert_eq!(table.columns[0], "White Ticket Price");
        assert_eq!(table.filters, filters);
    }

    #[test]
    fn rejected_filters_leave_prior_state() {
        let grid = GridConfig::default();
        let mut registry = TableRegistry::default();
        let hierarchy = ProductHierarchy::default();
        let id = place(&mut registry, &grid, "weekly-data", 0, 0);

        let good = FilterState {
            dept: "Women's dress shoes".to_string(),
            class: "Aged/strappy".to_string(),
            ..Default::default()
        };
        registry.apply_filters(&id, good.clone(), &hierarchy).unwrap();

        let bad = FilterState {
            dept: "Men's casual shoes".to_string(),
            class: "Aged/strappy".to_string(),
            ..Default::default()
        };
        let err = registry.apply_filters(&id, bad, &hierarchy).unwrap_err();
        assert!(matches!(
            err,
            FilterUpdateError::Cascade(CascadeViolation::InvalidChild {
                child: FilterField::Class,
                ..
            })
        ));
        assert_eq!(registry.get(&id).unwrap().filters, good);
    }

    #[test]
    fn column_rename_rejects_duplicates() {
        let grid = GridConfig::default();
        let mut registry = TableRegistry::default();
        let id = place(&mut registry, &grid, "white-ticket", 0, 0);

        registry.rename_column(&id, 1, "Price").unwrap();
        assert_eq!(registry.get(&id).unwrap().columns[1], "Price");

        assert_eq!(
            registry.rename_column(&id, 2, "Price"),
            Err(ColumnUpdateError::DuplicateColumn("Price".to_string()))
        );
        assert!(matches!(
            registry.rename_column(&id, 42, "Notes"),
            Err(ColumnUpdateError::BadIndex { index: 42, count: 6 })
        ));
        // Renaming a column to itself is a no-op, not a duplicate.
        registry.rename_column(&id, 1, "Price").unwrap();
    }

    #[test]
    fn table_data_payload_is_stored_opaquely() {
        let grid = GridConfig::default();
        let mut registry = TableRegistry::default();
        let id = place(&mut registry, &grid, "promo-planning", 2, 1);

        let payload = serde_json::json!([{"Promo event": "BOGO", "Units": 40}]);
        registry.set_table_data(&id, payload.clone()).unwrap();
        assert_eq!(registry.get(&id).unwrap().data, payload);
    }

    #[test]
    fn layout_round_trip_is_deep() {
        // Scenario: save two tables, add a third, load the saved layout.
        let grid = GridConfig::default();
        let mut registry = TableRegistry::default();
        let mut store = LayoutStore::default();
        place(&mut registry, &grid, "weekly-data", 0, 0);
        place(&mut registry, &grid, "white-ticket", 0, 1);

        store.save("Q1 Plan", &registry.snapshot()).unwrap();
        let saved = registry.snapshot();

        place(&mut registry, &grid, "promo-planning", 1, 0);
        assert_eq!(registry.len(), 3);

        let loaded = store.load("Q1 Plan").unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.len(), 2);

        // Mutating the loaded copy must not corrupt the stored snapshot.
        registry.replace_all(loaded);
        registry
            .change_table_type(&saved[0].id, TableType::WhiteTicket)
            .unwrap();
        assert_eq!(store.load("Q1 Plan").unwrap(), saved);
    }

    #[test]
    fn layout_names_are_unique_and_required() {
        let mut store = LayoutStore::default();
        store.save("Q1 Plan", &[]).unwrap();
        assert_eq!(
            store.save("Q1 Plan", &[]),
            Err(LayoutError::DuplicateName("Q1 Plan".to_string()))
        );
        assert_eq!(store.save("   ", &[]), Err(LayoutError::EmptyName));
        assert_eq!(
            store.load("missing"),
            Err(LayoutError::NotFound("missing".to_string()))
        );
        assert_eq!(
            store.delete("missing").unwrap_err(),
            LayoutError::NotFound("missing".to_string())
        );
    }

    #[test]
    fn layouts_list_in_insertion_order() {
        let mut store = LayoutStore::default();
        store.save("B", &[]).unwrap();
        store.save("A", &[]).unwrap();
        store.save("C", &[]).unwrap();
        let names: Vec<&str> = store.layouts().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);

        store.delete("A").unwrap();
        let names: Vec<&str> = store.layouts().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }
}
