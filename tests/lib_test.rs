//! Library integration tests.

use projkit::ProjkitError;

#[test]
fn error_types_are_public() {
    let err = ProjkitError::SnippetNotFound {
        name: "anova".into(),
    };
    assert!(err.to_string().contains("anova"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> projkit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use projkit::cli::{Cli, Commands};

    let cli = Cli::parse_from(["projkit", "check", "--json"]);

    if let Commands::Check(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}
