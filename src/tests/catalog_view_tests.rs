#[cfg(test)]
mod tests {
    use crate::errors::StayError;
    use crate::implementations::catalog_view::{CatalogView, LoadOutcome};
    use crate::models::common::{PropertyType, TypeSelector};
    use crate::tests::mock_api::{sample_catalog, setup};

    #[test]
    fn load_sets_defaults_from_catalog() {
        setup();
        let mut view = CatalogView::new();
        let ticket = view.begin_load();
        assert_eq!(view.finish_load(ticket, Ok(sample_catalog())), LoadOutcome::Applied(6));

        assert_eq!(view.visible().len(), 6);
        assert_eq!(view.filters().price_range.low(), 1800.0);
        assert_eq!(view.filters().price_range.high(), 5500.0);
    }

    #[test]
    fn every_filter_change_recomputes() {
        setup();
        let mut view = CatalogView::new();
        let ticket = view.begin_load();
        view.finish_load(ticket, Ok(sample_catalog()));

        view.set_price_range(1000.0, 3000.0);
        assert_eq!(view.visible().len(), 3);

        view.set_type(TypeSelector::Only(PropertyType::Cottage));
        assert_eq!(view.visible().len(), 2);

        view.set_min_capacity(Some(4));
        assert_eq!(view.visible().len(), 1);

        view.set_min_capacity(Some(0));
        assert_eq!(view.filters().min_capacity, None);
        assert_eq!(view.visible().len(), 2);

        view.reset_filters();
        assert_eq!(view.visible().len(), 6);
    }

    #[test]
    fn superseded_load_is_discarded() {
        setup();
        let mut view = CatalogView::new();
        let first = view.begin_load();
        let second = view.begin_load();

        assert_eq!(view.finish_load(second, Ok(sample_catalog()[..2].to_vec())), LoadOutcome::Applied(2));
        assert_eq!(view.finish_load(first, Ok(sample_catalog())), LoadOutcome::Discarded);
        assert_eq!(view.catalog().len(), 2);
    }

    #[test]
    fn load_after_close_is_discarded() {
        setup();
        let mut view = CatalogView::new();
        let ticket = view.begin_load();
        view.close();

        assert_eq!(view.finish_load(ticket, Ok(sample_catalog())), LoadOutcome::Discarded);
        assert!(view.catalog().is_empty());
        assert!(!view.is_open());
    }

    #[test]
    fn failed_reload_keeps_previous_catalog() {
        setup();
        let mut view = CatalogView::new();
        let ticket = view.begin_load();
        view.finish_load(ticket, Ok(sample_catalog()));

        let retry = view.begin_load();
        let outcome = view.finish_load(retry, Err(StayError::Network("connection refused".to_string())));
        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(view.visible().len(), 6);
    }
}
