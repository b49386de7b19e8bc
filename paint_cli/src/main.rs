//! # Paintcalc CLI Application
//!
//! Console front end for the paint coverage engine: asks for the area to be
//! painted, runs the estimate, and prints the three purchase options with
//! their costs.
//!
//! Invalid input is reported with a friendly message (plus the structured
//! error as JSON) and the process ends normally.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use paint_core::coverage::{DEFAULT_WASTE_MARGIN, DEFAULT_YIELD_M2_PER_LITER};
use paint_core::errors::{PaintError, PaintResult};
use paint_core::estimate::{estimate, EstimateInput, EstimateResult};

fn read_area(prompt: &str) -> PaintResult<f64> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return Err(PaintError::invalid_input("area_m2", "", "could not read input"));
    }

    let raw = input.trim();
    raw.parse()
        .map_err(|_| PaintError::invalid_input("area_m2", raw, "expected a decimal number"))
}

fn render_report(result: &EstimateResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "═══════════════════════════════════════");
    let _ = writeln!(out, "  PAINT PURCHASE ESTIMATE");
    let _ = writeln!(out, "═══════════════════════════════════════");
    let _ = writeln!(out);
    let _ = writeln!(out, "Input:");
    let _ = writeln!(out, "  Area:     {:.1} m²", result.area_m2);
    let _ = writeln!(
        out,
        "  Required: {:.1} L (yield {:.0} m²/L, {:.0}% margin)",
        result.required_liters.value(),
        DEFAULT_YIELD_M2_PER_LITER,
        DEFAULT_WASTE_MARGIN * 100.0
    );
    let _ = writeln!(out);
    let _ = writeln!(out, ">> Option 1: cans only (18 L)");
    let _ = writeln!(
        out,
        "   {} can(s) - cost: R$ {:.2}",
        result.cans_only.count, result.cans_only.cost
    );
    let _ = writeln!(out);
    let _ = writeln!(out, ">> Option 2: jugs only (3.6 L)");
    let _ = writeln!(
        out,
        "   {} jug(s) - cost: R$ {:.2}",
        result.jugs_only.count, result.jugs_only.cost
    );
    let _ = writeln!(out);
    let _ = writeln!(out, ">> Option 3: mix of cans and jugs");
    let _ = writeln!(
        out,
        "   {} can(s) and {} jug(s) - cost: R$ {:.2}",
        result.mixed.can_count, result.mixed.jug_count, result.mixed.cost
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "═══════════════════════════════════════");

    out
}

fn main() {
    println!("Paintcalc CLI - Paint Purchase Calculator");
    println!("=========================================");
    println!();

    let area = match read_area("Enter the area to be painted (m²): ") {
        Ok(area) => area,
        Err(e) => {
            println!();
            println!("Invalid value, enter a number.");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return;
        }
    };

    let result = estimate(&EstimateInput::new("Console request", area));

    println!();
    print!("{}", render_report(&result));

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }
}
