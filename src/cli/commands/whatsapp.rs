use anyhow::Result;

use vattavada::{StayApi, WhatsAppLink};

use super::CommandContext;
use crate::cli::ui;

pub struct WhatsappArgs {
    pub message: Option<String>,
    pub property: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: u32,
}

/// Deep link command; opening the link is left to the user's terminal
pub async fn execute(ctx: &CommandContext, args: WhatsappArgs) -> Result<()> {
    let link = WhatsAppLink::new(&ctx.config.whatsapp_number);

    let url = match &args.property {
        Some(id) => {
            let property = ctx.client.get_property(id).await?;
            link.booking_url(
                &property.title,
                args.check_in.as_deref().unwrap_or("flexible dates"),
                args.check_out.as_deref().unwrap_or("flexible dates"),
                args.guests,
            )
        }
        None => link.general_url(args.message.as_deref()),
    };

    if ctx.json() {
        return ui::print_json(&serde_json::json!({ "url": url }));
    }
    println!("{}", url);
    Ok(())
}
