// On Windows, hide the console window for GUI applications
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use floorkit::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    tracing::info!("FloorKit {} (built {})", floorkit::VERSION, floorkit::BUILD_DATE);

    // Launch GTK Application
    floorkit_ui::gtk_app::main();

    Ok(())
}
