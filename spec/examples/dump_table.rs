//! Prints the canonical gate table grouped by center, then the channel
//! catalog.
//!
//! Run with: `cargo run --example dump_table -p bodygraph-spec`

use bodygraph_spec::{channels, Center, GateCenterTable};

fn main() -> Result<(), bodygraph_spec::ChartError> {
    let table = GateCenterTable::standard()?;

    println!("Gate table");
    for center in Center::ALL {
        let gates: Vec<String> = table
            .gates_of(center)
            .iter()
            .map(|g| g.to_string())
            .collect();
        println!("  {:14} {:>2} gates: {}", center.name(), gates.len(), gates.join(", "));
    }

    println!();
    println!("Channels");
    for channel in channels::catalog() {
        if let Some((a, b)) = channel.gates() {
            println!(
                "  {:12} {:>2}-{:<2} {} -> {}",
                channel.token(),
                channel.low,
                channel.high,
                table.center(a),
                table.center(b)
            );
        }
    }

    Ok(())
}
