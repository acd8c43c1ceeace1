//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Quantum teleportation on a local simulator",
        style("qtele").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qtele-ir           Circuit intermediate representation");
    println!("  qtele-hal          Backend abstraction layer");
    println!("  qtele-adapter-sim  Statevector simulator");
    println!("  qtele-teleport     Teleportation experiment runner");
    println!("  qtele-cli          Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
