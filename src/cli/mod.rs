use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "vattavada",
    about = "Browse and manage hill-station stays in Vattavada",
    version,
    author,
    long_about = None
)]
pub struct StayCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse property listings
    Properties {
        #[command(subcommand)]
        action: PropertiesCommand,
    },

    /// Send a booking inquiry for a property
    Inquire {
        /// Property id
        property_id: String,

        /// Your name
        #[arg(long)]
        name: String,

        /// Phone number to call back on
        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: Option<String>,

        /// Number of guests
        #[arg(short, long, default_value = "2")]
        guests: u32,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: Option<String>,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: Option<String>,

        #[arg(short, long)]
        message: Option<String>,
    },

    /// Send a message to the booking desk
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        subject: String,

        #[arg(short, long)]
        message: String,
    },

    /// Browse the experiences catalog
    Experiences {
        #[command(subcommand)]
        action: ExperiencesCommand,
    },

    /// Read or leave guest reviews
    Testimonials {
        #[command(subcommand)]
        action: TestimonialsCommand,
    },

    /// Print a WhatsApp link to the booking desk
    Whatsapp {
        /// Message text (defaults to a general inquiry)
        message: Option<String>,

        /// Build a booking message for this property id
        #[arg(short, long)]
        property: Option<String>,

        #[arg(long)]
        check_in: Option<String>,

        #[arg(long)]
        check_out: Option<String>,

        #[arg(short, long, default_value = "2")]
        guests: u32,
    },

    /// Sign in to the admin dashboard
    Login {
        #[arg(long)]
        login_id: Option<String>,

        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out of the admin dashboard
    Logout,

    /// Show whether an admin session is active
    Whoami,

    /// Manage listings (requires login)
    Admin {
        #[command(subcommand)]
        action: AdminCommand,
    },
}

#[derive(Subcommand)]
pub enum PropertiesCommand {
    /// List properties matching the given filters
    List {
        /// Match against title or description
        #[arg(short, long)]
        search: Option<String>,

        /// Property type (Cottage, Resort, Homestay, Tent, Farmstay or all)
        #[arg(short = 't', long = "type", default_value = "all")]
        property_type: String,

        #[arg(long)]
        min_price: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        /// Minimum number of guests
        #[arg(long)]
        capacity: Option<u32>,

        /// Let the backend apply the filters instead of filtering locally
        #[arg(long, default_value = "false")]
        server_side: bool,
    },

    /// Show full details for one property
    Show { id: String },

    /// List featured properties
    Featured,
}

#[derive(Subcommand)]
pub enum ExperiencesCommand {
    List,
    Show { id: String },
}

#[derive(Subcommand)]
pub enum TestimonialsCommand {
    List,
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        location: String,

        /// 1 to 5
        #[arg(long)]
        rating: u8,

        #[arg(long)]
        text: String,

        #[arg(long)]
        image: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List all listings, filtered by title/location and type
    List {
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short = 't', long = "type", default_value = "all")]
        property_type: String,
    },

    /// Create a new listing
    Create(PropertyFormArgs),

    /// Update a listing; omitted fields keep their current value
    Update {
        id: String,

        #[command(flatten)]
        form: PropertyFormArgs,
    },

    /// Delete a listing
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long, default_value = "false")]
        yes: bool,
    },

    /// Show recent booking inquiries
    Inquiries {
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Args, Debug, Default)]
pub struct PropertyFormArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long = "type")]
    pub property_type: Option<String>,

    /// Nightly price
    #[arg(long)]
    pub price: Option<String>,

    /// Capacity descriptor, e.g. "4 guests"
    #[arg(long)]
    pub capacity: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Main image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Local file to embed as the main image
    #[arg(long)]
    pub image_file: Option<PathBuf>,

    /// Comma-separated gallery URLs
    #[arg(long)]
    pub gallery: Option<String>,

    /// Local files to embed in the gallery
    #[arg(long = "gallery-file")]
    pub gallery_files: Vec<PathBuf>,

    /// Comma-separated amenities
    #[arg(long)]
    pub amenities: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Comma-separated nearby attractions
    #[arg(long)]
    pub attractions: Option<String>,

    /// Comma-separated room categories
    #[arg(long)]
    pub room_categories: Option<String>,

    #[arg(long)]
    pub min_guests: Option<String>,

    #[arg(long)]
    pub max_guests: Option<String>,

    #[arg(long)]
    pub featured: Option<bool>,

    #[arg(long)]
    pub active: Option<bool>,
}
