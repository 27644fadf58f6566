use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "stash",
    bin_name = "stash",
    version = get_version(),
    about = "Interactive survival backpack: add, remove, sort and search your items",
    long_about = None
)]
pub struct Cli {
    /// Path to a config file (defaults to stash.toml in the OS config dir)
    #[arg(short, long, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Maximum number of items in the backpack (overrides config)
    #[arg(long, value_name = "N", help_heading = "Options")]
    pub capacity: Option<usize>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}
