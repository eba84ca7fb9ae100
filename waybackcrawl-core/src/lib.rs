pub mod categorize;
pub mod report;
pub mod results;
pub mod scan;

pub use categorize::{Category, RuleTable};
pub use results::ResultSet;
pub use scan::{ScanError, ScanOptions, execute_scan};

use colored::Colorize;

pub fn print_banner() {
    println!("{}", "═".repeat(60).bright_blue().bold());
    println!(
        "{}",
        "  WAYBACKCRAWL - Wayback Machine recon".bright_white().bold()
    );
    println!(
        "{}",
        "  For authorized security testing only.".bright_black()
    );
    println!("{}", "═".repeat(60).bright_blue().bold());
}
