use std::process;

use clap::{Arg, ArgAction, Command};

use linear_pr_link::config::LinkConfig;
use linear_pr_link::linker::IssueLinker;
use linear_pr_link::logging::set_verbose;

#[tokio::main]
async fn main() {
    let matches = Command::new("linear-pr-link")
        .about("Links GitHub pull requests to Linear issues by commenting with issue details")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("pr")
                .long("pr")
                .value_name("NUMBER")
                .help("Pull request number")
                .value_parser(clap::value_parser!(u64).range(1..))
                .required(true),
        )
        .arg(
            Arg::new("owner")
                .long("owner")
                .value_name("OWNER")
                .help("Repository owner")
                .required(true),
        )
        .arg(
            Arg::new("repo")
                .long("repo")
                .value_name("REPO")
                .help("Repository name")
                .required(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    set_verbose(matches.get_flag("verbose"));

    let pr_number = match matches.get_one::<u64>("pr") {
        Some(n) => *n,
        None => {
            eprintln!("Error: pull request number is required");
            process::exit(1);
        }
    };
    let owner = match matches.get_one::<String>("owner").filter(|s| !s.is_empty()) {
        Some(s) => s.clone(),
        None => {
            eprintln!("Error: repository owner is required");
            process::exit(1);
        }
    };
    let repo = match matches.get_one::<String>("repo").filter(|s| !s.is_empty()) {
        Some(s) => s.clone(),
        None => {
            eprintln!("Error: repository name is required");
            process::exit(1);
        }
    };

    // Credentials are resolved before any network call; each missing one
    // carries its own message.
    let config = match LinkConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match IssueLinker::new(&config) {
        Ok(linker) => linker.run(&owner, &repo, pr_number).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
