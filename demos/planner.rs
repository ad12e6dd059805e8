//! Best-Mix Gas Planner
//!
//! This example demonstrates the dive-gas-blend library: it solves the richest
//! breathable mix for a planned depth and ppO2 ceiling, optionally blending in
//! helium against a target equivalent air depth.
//!
//! For the slider-driven version, see: `guiplanner.rs`
//!
//! Run with: `cargo run --example planner`

use dive_gas_blend::{
    BlendParameters,
    ead::{equivalent_air_depth, max_operating_depth, ppo2_at_depth},
    mix::{MixRequest, best_mix},
    table::mix_table,
};
use std::io::{self, Write};

fn get_float_input(prompt: &str, default: f64) -> f64 {
    loop {
        print!("{} (default: {}): ", prompt, default);
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();

        let input = input.trim();
        if input.is_empty() {
            return default;
        }

        match input.parse::<f64>() {
            Ok(value) => return value,
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}

fn get_bool_input(prompt: &str, default: bool) -> bool {
    let default_label = if default { "y" } else { "n" };
    loop {
        print!("{} (y/n, default: {}): ", prompt, default_label);
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();

        match input.trim() {
            "" => return default,
            "y" | "Y" => return true,
            "n" | "N" => return false,
            _ => println!("Please answer y or n."),
        }
    }
}

fn validate_ceiling(po2_ceiling: f64) -> f64 {
    if po2_ceiling > 1.6 {
        println!("⚠️  WARNING: ppO2 ceilings above 1.6 bar are outside working exposure limits!");
        println!("   Clamping ceiling to 1.6 bar.");
        return 1.6;
    }
    po2_ceiling
}

fn main() {
    println!("=== Best-Mix Gas Planner ===\n");

    println!("Enter blend parameters:");
    let meters_per_atm = get_float_input("Meters of seawater per atmosphere", 10.0);
    let surface_pressure = get_float_input("Surface pressure (bar)", 1.0);
    let params = BlendParameters::new(meters_per_atm, surface_pressure);

    println!("\nEnter dive plan:");
    let depth = get_float_input("Planned depth (m)", 30.0);
    let po2_ceiling = validate_ceiling(get_float_input("ppO2 ceiling (bar)", 1.4));

    let request = if get_bool_input("Blend helium against a target EAD?", false) {
        let target_ead = get_float_input("Target equivalent air depth (m)", 30.0);
        MixRequest::trimix(depth, po2_ceiling, target_ead)
    } else {
        MixRequest::nitrox(depth, po2_ceiling)
    };

    if let Err(e) = request.validate() {
        println!("\nCannot plan this dive: {}", e);
        return;
    }

    let mix = match best_mix(params, request) {
        Ok(mix) => mix,
        Err(e) => {
            println!("\nCannot plan this dive: {}", e);
            return;
        }
    };

    println!("\n=== BEST MIX ===");
    println!("Label: {}", mix.label());
    println!("O2:  {:5.2}%", mix.fo2 * 100.0);
    println!("He:  {:5.2}%", mix.fhe * 100.0);
    println!("N2:  {:5.2}%", mix.fn2 * 100.0);

    println!("\n=== EXPOSURE CHECK ===");
    println!(
        "ppO2 at {:.0}m: {:.3} bar",
        depth,
        ppo2_at_depth(params, mix.fo2, depth)
    );
    if let Ok(mod_depth) = max_operating_depth(params, mix.fo2, po2_ceiling) {
        println!("MOD at {:.1} bar: {:.1}m", po2_ceiling, mod_depth);
    }
    println!(
        "EAD at {:.0}m: {:.1}m",
        depth,
        equivalent_air_depth(params, mix, depth)
    );

    // a short table around the planned depth for contingency planning
    let start = (depth - 9.0).max(0.0);
    let end = depth + 9.0;
    match mix_table(params, po2_ceiling, request.target_ead, start, end, 3.0) {
        Ok(table) => {
            println!("\n=== NEARBY DEPTHS ===");
            println!("Depth (m) | Mix      | O2%   | He%");
            println!("----------|----------|-------|------");
            for i in 0..table.depths.len() {
                let row = table.mixes[i];
                println!(
                    "   {:5.1}  | {:8} | {:5.2} | {:5.2}",
                    table.depths[i],
                    row.label().to_string(),
                    row.fo2 * 100.0,
                    row.fhe * 100.0
                );
            }
        }
        Err(e) => println!("Could not tabulate nearby depths: {}", e),
    }
}
