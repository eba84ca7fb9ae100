use waybackcrawl::handlers;
use waybackcrawl_core::print_banner;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = commands::command_argument_builder();

    // clap's default usage-error exit code is 2; this tool exits 1.
    let chosen_command = match cmd.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let _ = err.print();
            let code = if err.use_stderr() { 1 } else { 0 };
            std::process::exit(code);
        }
    };

    if !chosen_command.get_flag("quiet") {
        print_banner();
    }

    handlers::handle_scan(&chosen_command).await;
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
