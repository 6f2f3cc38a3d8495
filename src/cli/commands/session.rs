use anyhow::Result;

use vattavada::StayError;

use super::CommandContext;
use crate::cli::ui;

/// Admin login command; prompts for anything not given on the command line
pub fn login(ctx: &CommandContext, login_id: Option<String>, password: Option<String>) -> Result<()> {
    let mut gate = ctx.open_gate()?;
    if gate.is_authenticated() {
        ui::print_info("Already signed in");
        return Ok(());
    }

    let login_id = match login_id {
        Some(id) => id,
        None => ui::prompt_input("Login ID")?,
    };
    let password = match password {
        Some(pw) => pw,
        None => ui::prompt_password("Password")?,
    };

    gate.login(&login_id, &password).map_err(StayError::from)?;
    ui::print_success("Signed in to the admin dashboard");
    Ok(())
}

pub fn logout(ctx: &CommandContext) -> Result<()> {
    let mut gate = ctx.open_gate()?;
    gate.logout();
    ui::print_success("Signed out");
    Ok(())
}

pub fn whoami(ctx: &CommandContext) -> Result<()> {
    let gate = ctx.open_gate()?;
    let authenticated = gate.is_authenticated();
    if ctx.json() {
        return ui::print_json(&serde_json::json!({ "admin": authenticated }));
    }
    if authenticated {
        ui::print_result("Session", "admin");
    } else {
        ui::print_result("Session", "guest");
    }
    Ok(())
}
