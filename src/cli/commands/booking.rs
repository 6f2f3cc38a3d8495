use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use vattavada::{BookingInquiryRequest, ContactRequest, StayApi};

use super::CommandContext;
use crate::cli::ui;

pub struct InquiryArgs {
    pub property_id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub guests: u32,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub message: Option<String>,
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| anyhow!("Invalid date {:?}, expected YYYY-MM-DD: {}", value, e))
}

/// Booking inquiry command
pub async fn inquire(ctx: &CommandContext, args: InquiryArgs) -> Result<()> {
    let property = ctx.client.get_property(&args.property_id).await?;

    let inquiry = BookingInquiryRequest {
        name: args.name,
        phone: args.phone,
        email: args.email,
        guests: args.guests,
        message: args.message,
        property_id: property.id.clone().or(Some(args.property_id)),
        property_title: Some(property.title.clone()),
        check_in_date: args.check_in.as_deref().map(parse_date).transpose()?,
        check_out_date: args.check_out.as_deref().map(parse_date).transpose()?,
    };
    inquiry.validate()?;

    let spinner = ui::spinner_with_message("Submitting inquiry...");
    let result = ctx.client.submit_inquiry(&inquiry).await;
    spinner.finish_and_clear();
    let created = result?;

    if ctx.json() {
        return ui::print_json(&serde_json::json!({
            "id": created.id,
            "status": created.status,
            "property": property.title,
        }));
    }
    ui::print_success("Inquiry submitted successfully! We will contact you soon.");
    ui::print_result("Property", &property.title);
    Ok(())
}

pub async fn contact(ctx: &CommandContext, request: ContactRequest) -> Result<()> {
    request.validate()?;

    let spinner = ui::spinner_with_message("Sending message...");
    let result = ctx.client.submit_contact(&request).await;
    spinner.finish_and_clear();
    let contact = result?;

    if ctx.json() {
        return ui::print_json(&serde_json::json!({ "id": contact.id, "status": contact.status }));
    }
    ui::print_success("Message sent successfully! We will get back to you soon.");
    Ok(())
}
