use clap::Parser;
use std::path::PathBuf;

/// "0.3.2" for releases, "0.3.2@abc1234" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "journo", bin_name = "journo", version = get_version())]
#[command(about = "Create a monthly Markdown journal template", long_about = None)]
pub struct Cli {
    /// Year of the journal (e.g. 2016)
    pub year: String,

    /// Zero-padded month (e.g. 02 for February)
    pub month: String,

    /// Directory to write the file into (defaults to the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Print the template to stdout instead of writing a file
    #[arg(long)]
    pub print: bool,

    /// Override the earliest accepted year
    #[arg(long, value_name = "YEAR")]
    pub min_year: Option<i32>,

    /// Override the latest accepted year
    #[arg(long, value_name = "YEAR")]
    pub max_year: Option<i32>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
