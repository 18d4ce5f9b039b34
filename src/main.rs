use miette::Result;

/// Main entry point for the printdevdag CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    printdevdag::run()
}
