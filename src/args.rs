use clap::{Arg, ArgAction, Command};
use shipkit::utils;
use std::path::{Path, PathBuf};

/// Command-line arguments for the shipkit tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Project directory to package
    pub project: PathBuf,

    /// Directory receiving the produced archive
    pub output: Option<PathBuf>,

    /// Manifest locator (path or URL) overriding the candidate search
    pub manifest: Option<String>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("shipkit")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages a project directory into a deployable zip archive")
            .arg(
                Arg::new("project")
                    .short('p')
                    .long("project")
                    .value_name("DIR")
                    .help("Project directory to package (defaults to the current directory)"),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .value_name("DIR")
                    .help("Directory receiving the archive (defaults to <project>/deploy)"),
            )
            .arg(
                Arg::new("manifest")
                    .short('m')
                    .long("manifest")
                    .value_name("LOCATOR")
                    .help("Manifest file path or URL, overriding the candidate search"),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output"),
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            project: matches
                .get_one::<String>("project")
                .map(|p| utils::expand_tilde(Path::new(p)))
                .unwrap_or_else(|| PathBuf::from(".")),
            output: matches
                .get_one::<String>("output")
                .map(|p| utils::expand_tilde(Path::new(p))),
            manifest: matches.get_one::<String>("manifest").cloned(),
        }
    }
}
