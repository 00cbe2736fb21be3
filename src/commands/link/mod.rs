mod execute;
mod output;

use clap::Args;

/// Create a parent-child edge between two sections
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  booktoc link --parent 1 --child 2")]
pub struct LinkCmd {
    /// Id of the parent section
    #[arg(short, long)]
    pub parent: i64,

    /// Id of the child section
    #[arg(short, long)]
    pub child: i64,
}

#[cfg(test)]
mod cli_tests {
    use clap::Parser;
    use rstest::rstest;

    use crate::cli::Args;
    use crate::cli_option_test_with_required;

    cli_option_test_with_required! {
        command: "link",
        variant: Link,
        required_args: ["--parent", "1"],
        test_name: test_child_option,
        args: ["--child", "2"],
        field: child,
        expected: 2,
    }

    #[rstest]
    fn test_both_endpoints_are_required() {
        assert!(Args::try_parse_from(["booktoc", "link", "--parent", "1"]).is_err());
        assert!(Args::try_parse_from(["booktoc", "link", "--child", "2"]).is_err());
    }
}
