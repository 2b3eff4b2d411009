use colored::Colorize;

pub fn print_banner_with_version() {
    println!(
        "{} {}",
        "Keepsake".magenta().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("A greeting-card slideshow for your desktop");
}
