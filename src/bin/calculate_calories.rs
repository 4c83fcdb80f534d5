//! One-shot caloric needs calculation
//! Usage: cargo run --bin calculate_calories -- <weight_kg> <height_cm> <age> <Male|Female> <activity level>
//!
//! Nothing is saved.

use caloric_needs::calculator::compute_daily_calories_from_labels;

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a number, got '{}'", name, value))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 5 {
        eprintln!("Usage: calculate_calories <weight_kg> <height_cm> <age> <Male|Female> <activity level>");
        eprintln!("Activity levels: Sedentary, \"Lightly active\", \"Moderately active\", Active, \"Very active\"");
        std::process::exit(2);
    }

    let weight: f64 = parse_number("weight_kg", &args[0])?;
    let height: f64 = parse_number("height_cm", &args[1])?;
    let age: i64 = parse_number("age", &args[2])?;
    // Allow an unquoted multi-word activity level
    let activity = args[4..].join(" ");

    let result = compute_daily_calories_from_labels(weight, height, age, &args[3], &activity);
    println!("BMR: {:.3}", result.bmr);
    println!("Activity multiplier: {}", result.multiplier);
    println!("Daily calories: {}", result.formatted());

    Ok(())
}
