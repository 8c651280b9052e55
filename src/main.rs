use std::error::Error as _;

use staff_placeholders::{Config, Generator, STAFF};

fn main() {
    env_logger::init();

    let generator = Generator::new(Config::default());
    let output_dir = generator.config().output_dir.clone();

    println!("Creating placeholder profile pictures...");
    let result = generator.run(STAFF, |path| println!("Created: {}", path.display()));
    let written = match result {
        Ok(written) => written,
        Err(e) => {
            log::error!("{:?}", e);
            eprintln!("Error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            std::process::exit(1);
        }
    };

    println!();
    println!(
        "Successfully created {} placeholder profile pictures!",
        written.len()
    );
    println!("Images saved in: {}", output_dir.display());
    println!();
    println!(
        "Note: These are placeholder images. Replace them with actual professional photos when available."
    );
}
