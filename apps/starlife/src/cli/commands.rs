//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::StarArgs;
use crate::{api, config, playback};
use starlife_core::{
    EvolutionComposer, SimilarityRanker, Stage, StarlifeError, StellarInput, StellarProperties,
    constants::{MAX_INTERACTIVE_MASS, MIN_INTERACTIVE_MASS},
    star_class_label,
};
use std::path::Path;

// =============================================================================
// HELPERS
// =============================================================================

/// Validate arguments and run the engine.
fn simulate(star: StarArgs) -> Result<StellarProperties, StarlifeError> {
    let input = StellarInput::new(star.mass, star.metallicity)?;

    if !(MIN_INTERACTIVE_MASS..=MAX_INTERACTIVE_MASS).contains(&star.mass) {
        tracing::warn!(
            "Mass {} is outside the usual range {}-{} M☉; results are extrapolated",
            star.mass,
            MIN_INTERACTIVE_MASS,
            MAX_INTERACTIVE_MASS
        );
    }

    Ok(EvolutionComposer::new().compose(input))
}

fn select<'a>(star: &'a StellarProperties, name: Option<&str>) -> Result<&'a Stage, StarlifeError> {
    api::select_stage(star, name).map_err(StarlifeError::Config)
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Format a year count, or "∞" for open-ended values.
fn years(value: f64) -> String {
    if value.is_finite() {
        format!("{:.3e}", value)
    } else {
        "∞".to_string()
    }
}

// =============================================================================
// SIMULATE COMMAND
// =============================================================================

/// Print a star's timeline.
pub fn cmd_simulate(star: StarArgs, json_mode: bool, verbose: bool) -> Result<(), StarlifeError> {
    let result = simulate(star)?;

    if json_mode {
        let output = serde_json::json!({
            "star_class": star_class_label(result.mass),
            "star": result,
        });
        print_json(&output);
        return Ok(());
    }

    let path = &result.evolution_path;
    println!("Starlife Simulation");
    println!("===================");
    println!("Mass:        {}", result.mass);
    println!("Metallicity: {}", result.metallicity.value());
    println!("Class:       {}", star_class_label(result.mass));
    println!();
    println!("Radius:      {:.3} R☉", result.radius);
    println!("Luminosity:  {:.4e} L☉", result.luminosity);
    println!("Temperature: {:.0} K", result.temperature);
    println!("Lifetime:    {} years", years(result.lifetime));
    println!();
    println!("Path:        {} ({})", path.description, path.class);
    println!("Final state: {}", path.final_state);
    println!("Supernova:   {}", if path.supernova { "yes" } else { "no" });
    println!();
    println!("Stages:");

    for (i, stage) in result.stages.iter().enumerate() {
        println!(
            "  {}. {:<17} start {:>10}  duration {:>10}  {:>10.0} K",
            i + 1,
            stage.name(),
            years(stage.start_time),
            years(stage.duration),
            stage.temperature
        );
        if verbose {
            println!("     Fusion: {}", stage.fusion_process);
            println!("     Color:  {}", stage.color);
            println!("     {}", stage.description);
        }
    }

    Ok(())
}

// =============================================================================
// INSPECT COMMAND
// =============================================================================

/// Print derived quantities for one stage.
pub fn cmd_inspect(
    star: StarArgs,
    stage: Option<&str>,
    json_mode: bool,
) -> Result<(), StarlifeError> {
    let composer = EvolutionComposer::new();
    let result = simulate(star)?;
    let stage = select(&result, stage)?;

    let derived = composer.derived_properties(&result, stage);
    let energy = composer.energy_output(stage);
    let elements = composer
        .calculator()
        .element_production(result.mass, result.metallicity);

    if json_mode {
        let output = serde_json::json!({
            "stage": stage,
            "derived": derived,
            "energy": energy,
            "elements": elements,
        });
        print_json(&output);
        return Ok(());
    }

    println!("{} of a {} star", stage.name(), result.mass);
    println!("{}", "=".repeat(40));
    println!("Age:              {} years", years(derived.age));
    println!("Temperature:      {:.0} K", stage.temperature);
    println!("Luminosity:       {:.4e} L☉", stage.luminosity);
    println!("Radius:           {:.4e} R☉", stage.radius);
    println!("Mass loss:        {:.3e} M☉/yr", derived.mass_loss_rate);
    println!("Rotation period:  {:.2} days", derived.rotation_period);
    println!("Magnetic field:   {:.3e} T", derived.magnetic_field);
    println!("Density:          {:.3e} kg/m³", derived.density);
    println!();
    println!("Power:            {:.3e} W", energy.power);
    if energy.total_energy.is_finite() {
        println!("Total energy:     {:.3e} J", energy.total_energy);
    } else {
        println!("Total energy:     unbounded");
    }
    println!();
    println!("Elements returned to space:");
    for (name, fraction) in elements.entries() {
        println!("  {:<9} {:.4}", name, fraction);
    }

    Ok(())
}

// =============================================================================
// COMPARE COMMAND
// =============================================================================

/// Print reference stars resembling the star at one stage.
pub fn cmd_compare(
    catalog_path: Option<&Path>,
    star: StarArgs,
    stage: Option<&str>,
    json_mode: bool,
) -> Result<(), StarlifeError> {
    let catalog = config::catalog_from(catalog_path)?;
    let result = simulate(star)?;
    let stage = select(&result, stage)?;

    let matches = SimilarityRanker::new(&catalog).rank_stage(&result, stage);
    tracing::debug!("{} similar stars for {}", matches.len(), stage.name());

    if json_mode {
        let output = serde_json::json!({
            "stage": stage.name(),
            "matches": matches,
        });
        print_json(&output);
        return Ok(());
    }

    println!("Stars similar to a {} {}", result.mass, stage.name());
    println!("{}", "=".repeat(40));
    if matches.is_empty() {
        println!("No reference star is more than 60% similar.");
        return Ok(());
    }
    for similar in &matches {
        println!(
            "  {:<18} {:>5.1}%  {}",
            similar.name, similar.similarity_percent, similar.star.kind
        );
    }

    Ok(())
}

// =============================================================================
// CATALOG COMMAND
// =============================================================================

/// List the reference stars.
pub fn cmd_catalog(
    catalog_path: Option<&Path>,
    json_mode: bool,
    verbose: bool,
) -> Result<(), StarlifeError> {
    let catalog = config::catalog_from(catalog_path)?;

    if json_mode {
        let output = serde_json::json!({
            "count": catalog.len(),
            "stars": catalog.stars(),
        });
        print_json(&output);
        return Ok(());
    }

    println!("Reference Catalog ({} stars)", catalog.len());
    println!("=============================");
    for star in catalog.stars() {
        println!(
            "  {:<18} {:>7.2} M☉  {:>6.0} K  {:>10.4} L☉  {}",
            star.name, star.mass, star.temperature, star.luminosity, star.kind
        );
        if verbose {
            println!("    {}", star.description);
        }
    }

    Ok(())
}

// =============================================================================
// PLAY COMMAND
// =============================================================================

/// Step through a star's stages on stdin.
pub fn cmd_play(star: StarArgs) -> Result<(), StarlifeError> {
    let result = simulate(star)?;
    let stdin = std::io::stdin();
    let state = playback::play(&result, stdin.lock(), std::io::stdout())?;
    tracing::info!("Playback finished: {}", state);
    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    catalog_path: Option<&Path>,
    host: &str,
    port: u16,
) -> Result<(), StarlifeError> {
    let catalog = config::catalog_from(catalog_path)?;

    println!("Starlife HTTP Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", host);
    println!("  Port:     {}", port);
    println!("  Catalog:  {} stars", catalog.len());
    println!();
    println!("Endpoints:");
    println!("  GET  /health   - Health check");
    println!("  GET  /catalog  - List reference stars");
    println!("  POST /simulate - Compute a timeline");
    println!("  POST /compare  - Similar stars for a stage");
    println!("  POST /inspect  - Derived quantities for a stage");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, catalog).await
}
