use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use github_issue_text::{run, FetchConfig};

/// Print a GitHub issue with its comments, or a pull request's raw diff, as
/// plain text.
#[derive(Parser, Debug)]
#[command(name = "github-issue-text", version)]
struct Cli {
    /// Issue or pull request URL, e.g. https://github.com/owner/repo/issues/123
    url: Option<String>,

    /// Anything after the URL is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let message = e.to_string();
            eprintln!("{}", message.lines().next().unwrap_or_default());
            return ExitCode::FAILURE;
        }
    };
    let mut stdout = std::io::stdout().lock();

    match run(cli.url.as_deref(), FetchConfig::from_env(), &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
