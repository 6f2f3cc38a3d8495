use anyhow::{Context, Result};

use vattavada::{
    CatalogView, FilterState, LoadOutcome, Property, PropertyQuery, StayApi, TypeSelector,
};

use super::CommandContext;
use crate::cli::ui;

pub struct ListArgs {
    pub search: Option<String>,
    pub property_type: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub capacity: Option<u32>,
    pub server_side: bool,
}

/// Property listing command
pub async fn list(ctx: &CommandContext, args: ListArgs) -> Result<()> {
    let selector: TypeSelector = args.property_type.parse()?;

    let visible = if args.server_side {
        let query = PropertyQuery {
            property_type: selector,
            price_range: match (args.min_price, args.max_price) {
                (None, None) => None,
                (low, high) => Some((low.unwrap_or(0.0), high.unwrap_or(f64::from(u32::MAX)))),
            },
            capacity: args.capacity.filter(|n| *n > 0),
            search: args.search.clone(),
        };
        let spinner = ui::spinner_with_message("Searching properties...");
        let result = ctx.client.list_properties(&query).await;
        spinner.finish_and_clear();
        result?
    } else {
        let mut view = CatalogView::new();
        let ticket = view.begin_load();
        let spinner = ui::spinner_with_message("Loading properties...");
        let result = ctx.client.list_properties(&PropertyQuery::default()).await;
        spinner.finish_and_clear();
        let catalog = result.context("Failed to load properties")?;
        if let LoadOutcome::Applied(count) = view.finish_load(ticket, Ok(catalog)) {
            log::debug!("Loaded {} properties", count);
        }

        let defaults = FilterState::for_catalog(view.catalog());
        view.set_price_range(
            args.min_price.unwrap_or(defaults.price_range.low()),
            args.max_price.unwrap_or(defaults.price_range.high()),
        );
        view.set_type(selector);
        view.set_min_capacity(args.capacity);
        view.set_search(args.search.unwrap_or_default());
        view.visible().to_vec()
    };

    if ctx.json() {
        return ui::print_json(&visible);
    }

    ui::print_header(&format!("{} stays in Vattavada", visible.len()));
    if visible.is_empty() {
        ui::print_info("No properties found matching your criteria");
    }
    for property in &visible {
        ui::print_property_summary(property);
        println!();
    }
    Ok(())
}

pub async fn show(ctx: &CommandContext, id: &str) -> Result<()> {
    let spinner = ui::spinner_with_message("Loading property...");
    let result = ctx.client.get_property(id).await;
    spinner.finish_and_clear();
    let property = result?;

    if ctx.json() {
        return ui::print_json(&property);
    }
    ui::print_property_detail(&property);
    Ok(())
}

pub async fn featured(ctx: &CommandContext) -> Result<()> {
    let spinner = ui::spinner_with_message("Loading featured stays...");
    let result = ctx.client.featured_properties().await;
    spinner.finish_and_clear();
    let featured: Vec<Property> = result?;

    if ctx.json() {
        return ui::print_json(&featured);
    }
    ui::print_header("Featured stays");
    for property in &featured {
        ui::print_property_summary(property);
        println!();
    }
    Ok(())
}
