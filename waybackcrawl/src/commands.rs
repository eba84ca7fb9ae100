use crate::CLAP_STYLING;
use clap::arg;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("waybackcrawl")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("waybackcrawl")
        .styles(CLAP_STYLING)
        .about("Fetch and categorize every URL the Wayback Machine has archived for a domain")
        .arg(
            arg!(<DOMAIN>)
                .required(true)
                .help("The domain to look up in the archive index"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Where to write the categorized JSON results")
                .default_value("wayback_results.json"),
        )
        .arg(
            arg!(-t --"threads" <NUM_WORKERS>)
                .required(false)
                .help("The number of async worker 'threads' in the categorization pool.")
                .value_parser(clap::value_parser!(usize))
                .default_value("20"),
        )
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
}
