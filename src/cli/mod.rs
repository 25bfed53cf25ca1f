use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "cpp-call-explorer",
    version,
    about = "Interactive call-graph explorer for C/C++ sources",
    long_about = "Parse a source file or every entry of a JSON compilation database with \
libclang, then interactively query indented call trees by fully-qualified function name. \
An empty line at the prompt exits; an unknown name falls back to a prefix search over all \
known qualified names. Place extra clang arguments (-I, -std=..., -D...) after the input \
path; they are forwarded to the parser verbatim."
)]
pub struct Cli {
    /// Source file or compile_commands.json compilation database
    pub input: PathBuf,

    /// Comma-separated fully-qualified name prefixes to exclude (e.g. std::,detail::)
    #[arg(short = 'x', long = "exclude-names", value_delimiter = ',', value_name = "PREFIXES")]
    pub exclude_names: Vec<String>,

    /// Comma-separated source path prefixes to exclude (default: /usr)
    #[arg(short = 'p', long = "exclude-paths", value_delimiter = ',', value_name = "PREFIXES")]
    pub exclude_paths: Option<Vec<String>>,

    /// Jump an editor to each printed call site ($EDITOR, falling back to vim)
    #[arg(long)]
    pub edit: bool,

    /// Comma-separated attribute substrings that highlight matching call lines
    #[arg(long = "attribute", value_delimiter = ',', value_name = "ATTRS")]
    pub attributes: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Extra arguments forwarded verbatim to the clang parser
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "CLANG_ARGS")]
    pub clang_args: Vec<String>,
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
