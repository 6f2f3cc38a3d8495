use log::{debug, warn};

use crate::errors::StayResult;
use crate::implementations::filter_engine;
use crate::models::common::TypeSelector;
use crate::models::filter::{FilterState, PriceRange};
use crate::models::property::Property;

/// Identifies one catalog load; only the newest ticket can land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Outcome of handing a finished load back to the view
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied(usize),
    /// A newer load was started or the view closed meanwhile
    Discarded,
    Failed,
}

/// Properties list state: the catalog, its filters and the filtered result.
///
/// Loads are asynchronous and cannot be cancelled, so each one carries a
/// ticket. A result whose ticket is no longer current is dropped instead of
/// being applied to state the user has since moved away from.
#[derive(Debug)]
pub struct CatalogView {
    catalog: Vec<Property>,
    filters: FilterState,
    visible: Vec<Property>,
    generation: u64,
    open: bool,
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            filters: FilterState::default(),
            visible: Vec::new(),
            generation: 0,
            open: true,
        }
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// On error the previous catalog stays visible
    pub fn finish_load(&mut self, ticket: LoadTicket, result: StayResult<Vec<Property>>) -> LoadOutcome {
        if !self.open || ticket.0 != self.generation {
            debug!("Discarding stale catalog load {:?}", ticket);
            return LoadOutcome::Discarded;
        }
        match result {
            Ok(catalog) => {
                let count = catalog.len();
                self.filters.price_range = PriceRange::spanning(&catalog);
                self.catalog = catalog;
                self.refresh();
                LoadOutcome::Applied(count)
            }
            Err(e) => {
                warn!("Failed to load properties: {}", e);
                LoadOutcome::Failed
            }
        }
    }

    /// Unmount: outstanding loads will be discarded
    pub fn close(&mut self) {
        self.open = false;
        self.generation += 1;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn catalog(&self) -> &[Property] {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn visible(&self) -> &[Property] {
        &self.visible
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
        self.refresh();
    }

    pub fn set_price_range(&mut self, low: f64, high: f64) {
        self.filters.price_range = PriceRange::new(low, high);
        self.refresh();
    }

    pub fn set_type(&mut self, selector: TypeSelector) {
        self.filters.property_type = selector;
        self.refresh();
    }

    pub fn set_min_capacity(&mut self, threshold: Option<u32>) {
        self.filters.min_capacity = threshold.filter(|n| *n > 0);
        self.refresh();
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterState::for_catalog(&self.catalog);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = filter_engine::apply(&self.catalog, &self.filters);
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}
