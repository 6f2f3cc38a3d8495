use anyhow::Result;

use vattavada::{StayApi, TestimonialRequest};

use super::CommandContext;
use crate::cli::ui;

/// Experiences and testimonials listing commands
pub async fn list_experiences(ctx: &CommandContext) -> Result<()> {
    let spinner = ui::spinner_with_message("Loading experiences...");
    let result = ctx.client.list_experiences().await;
    spinner.finish_and_clear();
    let experiences = result?;

    if ctx.json() {
        return ui::print_json(&experiences);
    }
    ui::print_header("Experiences");
    for experience in &experiences {
        ui::print_experience(experience);
        println!();
    }
    Ok(())
}

pub async fn show_experience(ctx: &CommandContext, id: &str) -> Result<()> {
    let experience = ctx.client.get_experience(id).await?;
    if ctx.json() {
        return ui::print_json(&experience);
    }
    ui::print_header(&experience.title);
    ui::print_experience(&experience);
    Ok(())
}

pub async fn list_testimonials(ctx: &CommandContext) -> Result<()> {
    let testimonials = ctx.client.list_testimonials().await?;
    if ctx.json() {
        return ui::print_json(&testimonials);
    }
    ui::print_header("What our guests say");
    for testimonial in &testimonials {
        ui::print_testimonial(testimonial);
        println!();
    }
    Ok(())
}

pub async fn submit_testimonial(ctx: &CommandContext, request: TestimonialRequest) -> Result<()> {
    request.validate()?;
    let created = ctx.client.submit_testimonial(&request).await?;
    if ctx.json() {
        return ui::print_json(&created);
    }
    ui::print_success("Thank you! Your review will appear once approved.");
    Ok(())
}
