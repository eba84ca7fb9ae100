use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use waybackcrawl_core::report;
use waybackcrawl_core::scan::{ScanError, ScanOptions, ScanProgressCallback, execute_scan};

/// Expand `~` in a user-supplied output path.
pub fn resolve_output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Console line for a failed scan.
pub fn scan_failure_message(err: &ScanError) -> String {
    match err {
        ScanError::NoUrls => "No URLs found".to_string(),
        other => other.to_string(),
    }
}

pub async fn handle_scan(args: &ArgMatches) {
    tracing_subscriber::fmt::init();

    let domain = args.get_one::<String>("DOMAIN").expect("DOMAIN is required");
    let output = args
        .get_one::<String>("output")
        .expect("output has a default");
    let threads = args
        .get_one::<usize>("threads")
        .expect("threads has a default");
    let quiet = args.get_flag("quiet");

    let progress: ScanProgressCallback = Arc::new(|msg: String| {
        println!("{} {}", "[*]".bright_cyan(), msg);
    });

    let options = ScanOptions {
        domain: domain.clone(),
        workers: *threads,
        index_url: None,
        show_progress: !quiet,
    };

    let results = match execute_scan(options, Some(progress)).await {
        Ok(results) => results,
        Err(err) => {
            eprintln!("{} {}", "[-]".bright_red(), scan_failure_message(&err));
            std::process::exit(1);
        }
    };

    let output_path = resolve_output_path(output);
    debug!("Writing results to {}", output_path.display());

    if let Err(err) = report::save_results(&results, &output_path) {
        eprintln!(
            "{} Failed to write {}: {}",
            "[-]".bright_red(),
            output_path.display(),
            err
        );
        std::process::exit(1);
    }

    println!(
        "{} Results saved to {}",
        "[+]".bright_green(),
        output_path.display()
    );
    println!();
    println!("{} Discovered URLs by Category:", "[+]".bright_green());
    print!("{}", report::generate_summary(&results));
}
