use crate::models::common::TypeSelector;
use crate::models::property::Property;

/// Inclusive nightly-price bounds, always stored with `low <= high`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    low: f64,
    high: f64,
}

impl PriceRange {
    /// Build a range; swapped bounds are put back in order
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Range that admits every finite price
    pub fn unbounded() -> Self {
        Self {
            low: f64::MIN,
            high: f64::MAX,
        }
    }

    /// Observed min/max over the catalog's finite prices
    pub fn spanning(catalog: &[Property]) -> Self {
        let mut prices = catalog.iter().map(|p| p.price).filter(|p| p.is_finite());
        match prices.next() {
            Some(first) => {
                let (low, high) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
                Self { low, high }
            }
            None => Self::unbounded(),
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    // NaN fails both comparisons and drops out.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }
}

/// User-controlled listing filters. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub price_range: PriceRange,
    pub property_type: TypeSelector,
    pub min_capacity: Option<u32>,
    pub search: String,
}

impl FilterState {
    /// Defaults for a catalog: full observed price span, all types,
    /// no capacity threshold, empty search
    pub fn for_catalog(catalog: &[Property]) -> Self {
        Self {
            price_range: PriceRange::spanning(catalog),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_price_range(mut self, low: f64, high: f64) -> Self {
        self.price_range = PriceRange::new(low, high);
        self
    }

    pub fn with_type(mut self, selector: TypeSelector) -> Self {
        self.property_type = selector;
        self
    }

    /// Zero is treated as "no threshold"
    pub fn with_min_capacity(mut self, threshold: Option<u32>) -> Self {
        self.min_capacity = threshold.filter(|n| *n > 0);
        self
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            price_range: PriceRange::unbounded(),
            property_type: TypeSelector::All,
            min_capacity: None,
            search: String::new(),
        }
    }
}

/// Query parameters for `GET /properties/`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyQuery {
    pub property_type: TypeSelector,
    pub price_range: Option<(f64, f64)>,
    pub capacity: Option<u32>,
    pub search: Option<String>,
}

impl PropertyQuery {
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Parameters in the order the backend documents them; unset filters are omitted
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(t) = self.property_type.as_param() {
            pairs.push(("type", t.to_string()));
        }
        if let Some((low, high)) = self.price_range {
            pairs.push(("min_price", format_number(low)));
            pairs.push(("max_price", format_number(high)));
        }
        if let Some(capacity) = self.capacity {
            pairs.push(("capacity", capacity.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

impl From<&FilterState> for PropertyQuery {
    fn from(filters: &FilterState) -> Self {
        let range = filters.price_range;
        let price_range = if range == PriceRange::unbounded() {
            None
        } else {
            Some((range.low(), range.high()))
        };
        Self {
            property_type: filters.property_type.clone(),
            price_range,
            capacity: filters.min_capacity,
            search: Some(filters.search.clone()).filter(|s| !s.is_empty()),
        }
    }
}

/// Query parameters for `GET /properties/search/filter`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub property_type: TypeSelector,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SearchQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = self.q.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("q", q.to_string()));
        }
        if let Some(t) = self.property_type.as_param() {
            pairs.push(("type", t.to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price", format_number(min)));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price", format_number(max)));
        }
        pairs
    }
}

/// Backend price params are integers; whole floats go out without a fraction
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
