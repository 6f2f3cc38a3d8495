use anyhow::{Context, Result};

use vattavada::{filter_engine, PropertyAdmin, PropertyForm, TypeSelector};

use super::CommandContext;
use crate::cli::ui;
use crate::cli::PropertyFormArgs;

/// Admin dashboard listing
pub async fn list(ctx: &CommandContext, search: &str, property_type: &str) -> Result<()> {
    let selector: TypeSelector = property_type.parse()?;
    let gate = ctx.open_gate()?;
    let admin = PropertyAdmin::new(&ctx.client, &gate);

    let spinner = ui::spinner_with_message("Loading properties...");
    let result = admin.list().await;
    spinner.finish_and_clear();
    let catalog = result?;
    let visible = filter_engine::apply_admin(&catalog, search, &selector);

    if ctx.json() {
        return ui::print_json(&visible);
    }
    ui::print_header(&format!("Property management ({} of {})", visible.len(), catalog.len()));
    for property in &visible {
        ui::print_property_summary(property);
        println!();
    }
    Ok(())
}

pub async fn create(ctx: &CommandContext, args: PropertyFormArgs) -> Result<()> {
    let gate = ctx.open_gate()?;
    let admin = PropertyAdmin::new(&ctx.client, &gate);

    let mut form = PropertyForm::new();
    apply_args(&mut form, &args).await?;

    let spinner = ui::spinner_with_message("Creating property...");
    let result = admin.create(&form).await;
    spinner.finish_and_clear();
    let created = result?;

    if ctx.json() {
        return ui::print_json(&created);
    }
    ui::print_success("Property created successfully!");
    ui::print_property_summary(&created);
    Ok(())
}

pub async fn update(ctx: &CommandContext, id: &str, args: PropertyFormArgs) -> Result<()> {
    let gate = ctx.open_gate()?;
    let admin = PropertyAdmin::new(&ctx.client, &gate);

    let mut form = admin.edit_form(id).await?;
    apply_args(&mut form, &args).await?;

    let spinner = ui::spinner_with_message("Updating property...");
    let result = admin.update(id, &form).await;
    spinner.finish_and_clear();
    let updated = result?;

    if ctx.json() {
        return ui::print_json(&updated);
    }
    ui::print_success("Property updated successfully!");
    ui::print_property_summary(&updated);
    Ok(())
}

pub async fn delete(ctx: &CommandContext, id: &str, yes: bool) -> Result<()> {
    let gate = ctx.open_gate()?;
    let admin = PropertyAdmin::new(&ctx.client, &gate);

    if !yes && !ui::confirm_action(&format!("Delete property {}?", id))? {
        ui::print_info("Nothing deleted");
        return Ok(());
    }
    admin.delete(id).await?;
    ui::print_success("Property deleted successfully!");
    Ok(())
}

pub async fn inquiries(ctx: &CommandContext, limit: Option<u32>) -> Result<()> {
    let gate = ctx.open_gate()?;
    let admin = PropertyAdmin::new(&ctx.client, &gate);

    let inquiries = admin.inquiries(limit).await?;
    if ctx.json() {
        return ui::print_json(&inquiries);
    }
    ui::print_header(&format!("{} booking inquiries", inquiries.len()));
    for inquiry in &inquiries {
        ui::print_inquiry(inquiry);
        println!();
    }
    Ok(())
}

/// Overlay command-line values onto a form, ingesting any local image files
async fn apply_args(form: &mut PropertyForm, args: &PropertyFormArgs) -> Result<()> {
    let text_fields = [
        (&args.title, &mut form.title),
        (&args.property_type, &mut form.property_type),
        (&args.price, &mut form.price),
        (&args.capacity, &mut form.capacity),
        (&args.description, &mut form.description),
        (&args.image, &mut form.image),
        (&args.gallery, &mut form.gallery),
        (&args.amenities, &mut form.amenities),
        (&args.location, &mut form.location),
        (&args.attractions, &mut form.attractions),
        (&args.room_categories, &mut form.room_categories),
        (&args.min_guests, &mut form.min_guests),
        (&args.max_guests, &mut form.max_guests),
    ];
    for (value, field) in text_fields {
        if let Some(value) = value {
            *field = value.clone();
        }
    }
    if let Some(featured) = args.featured {
        form.featured = featured;
    }
    if let Some(active) = args.active {
        form.active = active;
    }

    if let Some(path) = &args.image_file {
        form.ingest_main_image(path)
            .await
            .with_context(|| format!("Could not read main image {}", path.display()))?;
    }
    if !args.gallery_files.is_empty() {
        let spinner = ui::spinner_with_message("Reading gallery images...");
        let failures = form.ingest_gallery_files(&args.gallery_files).await;
        spinner.finish_and_clear();
        for failure in &failures {
            ui::print_warning(&format!("Skipped gallery image: {}", failure));
        }
        ui::print_info(&format!("{} gallery images embedded", form.uploaded_images.len()));
    }
    Ok(())
}
