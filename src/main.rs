use std::process::ExitCode;

use clap::Parser;
use log::{debug, info, warn};

use vattavada::{recovery_hint, ClientConfig, ContactRequest, StayOptions, TestimonialRequest};

mod cli;
use cli::commands::{self, CommandContext};
use cli::{
    AdminCommand, Commands, ExperiencesCommand, PropertiesCommand, StayCli, TestimonialsCommand,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse the command line arguments
    let cli = StayCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    match dotenv::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::ui::print_error(&format!("{:#}", e));
            if let Some(hint) = recovery_hint(&e) {
                cli::ui::print_info(&hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: StayCli) -> anyhow::Result<()> {
    let config = ClientConfig::load(cli.config.as_deref())?;
    let options = StayOptions {
        output_format: cli.output_format.parse()?,
    };
    info!("Using API at {}", config.api_url());
    let ctx = CommandContext::new(config, options)?;

    match cli.command {
        Commands::Properties { action } => match action {
            PropertiesCommand::List {
                search,
                property_type,
                min_price,
                max_price,
                capacity,
                server_side,
            } => {
                commands::properties::list(
                    &ctx,
                    commands::properties::ListArgs {
                        search,
                        property_type,
                        min_price,
                        max_price,
                        capacity,
                        server_side,
                    },
                )
                .await?
            }
            PropertiesCommand::Show { id } => commands::properties::show(&ctx, &id).await?,
            PropertiesCommand::Featured => commands::properties::featured(&ctx).await?,
        },

        Commands::Inquire {
            property_id,
            name,
            phone,
            email,
            guests,
            check_in,
            check_out,
            message,
        } => {
            commands::booking::inquire(
                &ctx,
                commands::booking::InquiryArgs {
                    property_id,
                    name,
                    phone,
                    email,
                    guests,
                    check_in,
                    check_out,
                    message,
                },
            )
            .await?
        }

        Commands::Contact {
            name,
            email,
            phone,
            subject,
            message,
        } => {
            let request = ContactRequest {
                name,
                email,
                phone,
                subject,
                message,
            };
            commands::booking::contact(&ctx, request).await?
        }

        Commands::Experiences { action } => match action {
            ExperiencesCommand::List => commands::catalog::list_experiences(&ctx).await?,
            ExperiencesCommand::Show { id } => commands::catalog::show_experience(&ctx, &id).await?,
        },

        Commands::Testimonials { action } => match action {
            TestimonialsCommand::List => commands::catalog::list_testimonials(&ctx).await?,
            TestimonialsCommand::Submit {
                name,
                location,
                rating,
                text,
                image,
            } => {
                let request = TestimonialRequest {
                    name,
                    location,
                    rating,
                    text,
                    image,
                };
                commands::catalog::submit_testimonial(&ctx, request).await?
            }
        },

        Commands::Whatsapp {
            message,
            property,
            check_in,
            check_out,
            guests,
        } => {
            commands::whatsapp::execute(
                &ctx,
                commands::whatsapp::WhatsappArgs {
                    message,
                    property,
                    check_in,
                    check_out,
                    guests,
                },
            )
            .await?
        }

        Commands::Login { login_id, password } => commands::session::login(&ctx, login_id, password)?,
        Commands::Logout => commands::session::logout(&ctx)?,
        Commands::Whoami => commands::session::whoami(&ctx)?,

        Commands::Admin { action } => match action {
            AdminCommand::List {
                search,
                property_type,
            } => commands::admin::list(&ctx, &search, &property_type).await?,
            AdminCommand::Create(form) => commands::admin::create(&ctx, form).await?,
            AdminCommand::Update { id, form } => commands::admin::update(&ctx, &id, form).await?,
            AdminCommand::Delete { id, yes } => commands::admin::delete(&ctx, &id, yes).await?,
            AdminCommand::Inquiries { limit } => commands::admin::inquiries(&ctx, limit).await?,
        },
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        other => {
            env_logger::Builder::new().filter_level(log::LevelFilter::Info).init();
            warn!("Unknown log level {:?}, using info", other);
            return;
        }
    };

    env_logger::Builder::new().filter_level(level).init();

    debug!("Logger initialized with level: {}", log_level);
}
