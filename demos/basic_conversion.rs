//! Basic Conversion Example
//!
//! This example demonstrates the most basic usage of sheetdigest:
//! converting a saved clipboard HTML snapshot into a digest using default settings.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example basic_conversion -- clipboard.html digest.html
//! ```
//!
//! If no arguments are provided, a small built-in table is converted and
//! the result is printed to stdout.

use std::fs::File;
use sheetdigest::DigestBuilder;

const SAMPLE_TABLE: &str = "<table>\
    <tr><td>1</td><td>2024-05-01</td><td>[MV] Song Name (SR, HY)</td><td>Music</td>\
    <td><a href=\"https://youtu.be/abc\">Official</a></td><td></td><td></td><td></td>\
    <td><a href=\"youtu.be/sub\">Sub</a></td></tr>\
    <tr><td>2</td><td>2024-05-02</td><td>Weekly Radio (GY)</td><td>Radio</td>\
    <td><a href=\"https://radio.example/1\">Part 1</a></td>\
    <td><a href=\"https://radio.example/2\">Part 2</a></td><td></td><td></td><td>None</td></tr>\
    </table>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a digester with default settings
    let digester = DigestBuilder::new().build()?;

    let Some(input_path) = std::env::args().nth(1) else {
        println!("{}", digester.convert_to_string(SAMPLE_TABLE)?);
        return Ok(());
    };

    // Get output file path from command line arguments or use default
    let output_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "digest.html".to_string());

    println!("Converting {} to {}...", input_path, output_path);

    // Open input file
    let input = File::open(&input_path).map_err(|e| {
        eprintln!("Error: Could not open input file '{}'", input_path);
        eprintln!("  {}", e);
        e
    })?;

    // Create output file
    let output = File::create(&output_path).map_err(|e| {
        eprintln!("Error: Could not create output file '{}'", output_path);
        eprintln!("  {}", e);
        e
    })?;

    digester.convert(input, output).map_err(|e| {
        eprintln!("{}", e.notice());
        e
    })?;

    println!("Conversion completed successfully!");
    println!("Output written to: {}", output_path);

    Ok(())
}
