//! Dashboard walkthrough.
//!
//! Runs the whole pipeline over the bundled datasets and prints what each
//! panel of the dashboard shows.
//!
//! Run with: `RUST_LOG=debug cargo run --example dashboard`

use valuation_stats::diagnostics::fitted_table;
use valuation_stats::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let dashboard = Dashboard::bundled();

    println!("=== Descriptive statistics ===\n");
    let stats = dashboard.descriptive()?;
    println!("Observations:   {}", stats.n);
    println!("Mean:           {:.2}", stats.mean);
    println!("Std deviation:  {:.2}", stats.std_dev);
    println!("Min / Max:      {:.1} / {:.1}", stats.min, stats.max);
    println!("CV:             {:.2}%", stats.cv);
    println!("Total growth:   {:.1}%", stats.growth);

    println!("\n=== Trend regression ===\n");
    let fitted = dashboard.fit()?;
    let result = fitted.result();
    println!(
        "y = {:.4}x + {:.2}   R² = {:.4}",
        result.slope, result.intercept, result.r_squared
    );
    println!(
        "Std error: {:.4}   95% margin: ±{:.2}",
        result.std_error, result.confidence_margin
    );

    let rows = fitted_table(&fitted);
    println!("\n{:>5} {:>10} {:>10} {:>10}", "idx", "actual", "fitted", "residual");
    for row in rows.iter().take(3).chain(rows.iter().skip(rows.len() - 3)) {
        println!(
            "{:>5} {:>10.2} {:>10.2} {:>10.2}",
            row.index, row.actual, row.fitted, row.residual
        );
    }

    let next = result.n_observations as f64;
    let interval = fitted.predict_with_interval(next, IntervalType::Prediction, 0.95)?;
    println!(
        "\nNext period: {:.2} (95% prediction interval {:.2} – {:.2})",
        interval.fit, interval.lower, interval.upper
    );

    println!("\n=== Projection ===\n");
    let params = SimulationParams::default();
    let factor = dashboard.region_factor(&params.region);
    println!(
        "Initial {:.0}, inflation {}%, {} years, region {} (factor {factor})",
        params.initial_value, params.inflation_rate_percent, params.years, params.region
    );
    println!("\n{:>10} {:>14} {:>14} {:>14}", "date", "projected", "lower", "upper");
    for point in dashboard.projection(&params)? {
        println!(
            "{:>10} {:>14} {:>14} {:>14}",
            point.label, point.projected, point.lower, point.upper
        );
    }
    let summary = dashboard.summary(&params)?;
    println!(
        "\nFinal value {}   gain {:.0}   ROI {:.1}%",
        summary.final_value, summary.gain, summary.roi_percent
    );

    println!("\n=== City comparison (2024 revaluation) ===\n");
    println!(
        "{:<14} {:>6} {:>10} {:>10} {:>8} {:>10}",
        "city", "zones", "mean", "std dev", "cv %", "range"
    );
    for (key, stat) in dashboard.city_stats() {
        match stat {
            Ok(s) => println!(
                "{:<14} {:>6} {:>10.2} {:>10.2} {:>8.2} {:>10.2}",
                s.city, s.count, s.mean, s.std_dev, s.cv, s.range
            ),
            Err(err) => println!("{key:<14} not computable: {err}"),
        }
    }

    println!("\n{:<14} {:>8} {:>10} {:>10}", "city", "value", "stability", "diversity");
    for score in dashboard.city_scores() {
        println!(
            "{:<14} {:>8.1} {:>10.1} {:>10.1}",
            score.city, score.value_index, score.stability, score.diversity
        );
    }

    Ok(())
}
