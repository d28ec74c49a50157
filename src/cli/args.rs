use clap::Parser;

/// Command-line arguments for the optbind wrapper
///
/// Everything after `--` is handed to the `greet` command and parsed by the
/// option binder itself.
#[derive(Parser, Debug, Clone)]
#[command(name = "optbind")]
#[command(about = "Binds command-line options to handlers and runs the bundled greet command")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,

    /// Print the greet command's usage to standard error instead of running it
    #[arg(long, conflicts_with = "describe")]
    pub usage: bool,

    /// Print the greet command's option declarations as JSON instead of running it
    #[arg(long, conflicts_with = "usage")]
    pub describe: bool,

    /// Arguments for the greet command, after `--`
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;

    #[test]
    fn forwards_everything_after_separator() {
        let args = Args::try_parse_from(["optbind", "--verbose", "--", "--name", "Ada", "-v"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.args, vec!["--name", "Ada", "-v"]);
    }

    #[test]
    fn usage_and_describe_conflict() {
        assert!(Args::try_parse_from(["optbind", "--usage", "--describe"]).is_err());
    }
}
