//! Command-line entry point.
//!
//! Runs the generator with the stock settings and reports progress as
//! human-readable status lines. Takes no arguments and always exits 0; both
//! degradation paths (missing capability, failed ICO save) print remediation
//! instructions instead of failing the process.

use favigen::{IconGenerator, IconSpec, IcoOutcome, Outcome};

fn main() {
    let generator = IconGenerator::new(IconSpec::default());

    match generator.run() {
        Ok(Outcome::CapabilityUnavailable) => {
            println!("⚠️  PNG encoding support is not available in this build.");
            println!();
            println!("To generate the favicon automatically, rebuild with the");
            println!("image crate's `png` feature enabled.");
            println!();
            println!("Alternatively:");
            println!("1. Open create-favicon.html in your browser");
            println!("2. Click 'Download favicon.ico'");
            println!("3. Follow the instructions to convert PNG to ICO");
        }
        Ok(Outcome::Generated(report)) => {
            println!("✅ Favicon PNG generated: {}", report.png_path.display());
            match report.ico {
                IcoOutcome::Saved(path) => {
                    println!("✅ Favicon ICO generated: {}", path.display());
                    println!();
                    println!("🎉 Success! Favicon is ready to use.");
                }
                IcoOutcome::Failed { error, .. } => {
                    println!();
                    println!("⚠️  Could not generate .ico file: {error}");
                    println!();
                    println!("To convert PNG to ICO:");
                    println!("1. Visit: https://favicon.io/favicon-converter/");
                    println!("2. Upload src/favicon-32x32.png");
                    println!("3. Download and replace src/favicon.ico");
                    println!();
                    println!("Or use ImageMagick:");
                    println!("convert src/favicon-32x32.png src/favicon.ico");
                }
            }
        }
        Err(error) => {
            // The exit status stays 0 on every path; the console text is the
            // whole interface.
            println!("⚠️  Could not generate favicon: {error}");
        }
    }
}
