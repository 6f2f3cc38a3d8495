use colored::*;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use textwrap::wrap;

use vattavada::{BookingInquiry, Experience, Property, Testimonial};

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn term_width() -> usize {
    (Term::stdout().size().1 as usize).max(40)
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text wrapped to the terminal, indented by `indent` spaces
pub fn print_text(text: &str, indent: usize) {
    let width = term_width().saturating_sub(indent + 2);
    let pad = " ".repeat(indent);
    for line in text.lines() {
        for wrapped_line in wrap(line, width) {
            println!("{}{}", pad, wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("₹{}", value as i64)
    } else {
        format!("₹{:.2}", value)
    }
}

/// One-line summary used in listings
pub fn print_property_summary(property: &Property) {
    let featured = if property.featured { " ★".yellow().to_string() } else { String::new() };
    println!(
        "{}{}  {}  {}",
        property.title.bold(),
        featured,
        format!("[{}]", property.property_type).cyan(),
        format!("{}/night", price(property.price)).green()
    );
    println!(
        "  {} · {} · {:.1} ({} reviews) · id {}",
        property.location,
        property.capacity,
        property.rating,
        property.reviews,
        property.display_id().dimmed()
    );
}

pub fn print_property_detail(property: &Property) {
    print_header(&property.title);
    print_result("Type", property.property_type.as_str());
    print_result("Price", &format!("{} per night", price(property.price)));
    print_result("Capacity", &format!("{} ({}-{} guests)", property.capacity, property.min_guests, property.max_guests));
    print_result("Location", &property.location);
    print_result("Rating", &format!("{:.1} from {} reviews", property.rating, property.reviews));
    println!();
    print_text(&property.description, 2);
    println!();
    if !property.amenities.is_empty() {
        print_result("Amenities", &property.amenities.join(", "));
    }
    if !property.room_categories.is_empty() {
        print_result("Rooms", &property.room_categories.join(", "));
    }
    if !property.attractions.is_empty() {
        println!("{}", "Nearby".bold());
        for attraction in &property.attractions {
            println!("  - {}", attraction);
        }
    }
    print_result("Image", &abbreviate_image(&property.image));
    if !property.gallery.is_empty() {
        print_result("Gallery", &format!("{} images", property.gallery.len()));
    }
}

/// Data URIs are far too long for a terminal
fn abbreviate_image(reference: &str) -> String {
    match reference.split_once(";base64,") {
        Some((kind, payload)) => format!("{} (embedded, {} bytes base64)", kind, payload.len()),
        None => reference.to_string(),
    }
}

pub fn print_experience(experience: &Experience) {
    println!(
        "{}  {}  {}",
        experience.title.bold(),
        experience.duration.cyan(),
        price(experience.price).green()
    );
    print_text(&experience.description, 2);
    for highlight in &experience.highlights {
        println!("  - {}", highlight);
    }
    if let Some(id) = &experience.id {
        println!("  id {}", id.dimmed());
    }
}

pub fn print_testimonial(testimonial: &Testimonial) {
    let stars = "★".repeat(testimonial.rating.min(5) as usize);
    println!(
        "{} {} - {}",
        stars.yellow(),
        testimonial.name.bold(),
        testimonial.location
    );
    print_text(&format!("\"{}\"", testimonial.text), 2);
}

pub fn print_inquiry(inquiry: &BookingInquiry) {
    let dates = match (&inquiry.check_in_date, &inquiry.check_out_date) {
        (Some(a), Some(b)) => format!("{} to {}", a.date(), b.date()),
        (Some(a), None) => format!("from {}", a.date()),
        _ => "dates open".to_string(),
    };
    println!(
        "{}  {}  {} guests  {}  [{:?}]",
        inquiry.name.bold(),
        inquiry.phone,
        inquiry.guests,
        dates,
        inquiry.status
    );
    if let Some(title) = &inquiry.property_title {
        println!("  for {}", title.cyan());
    }
    if let Some(message) = &inquiry.message {
        print_text(message, 2);
    }
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

pub fn prompt_input(prompt: &str) -> std::io::Result<String> {
    Input::with_theme(&get_theme())
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

pub fn prompt_password(prompt: &str) -> std::io::Result<String> {
    Password::with_theme(&get_theme())
        .with_prompt(prompt)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
