//! Tests for CLI argument parsing.

use clap::error::ErrorKind;

use super::cli::Cli;

mod parsing {
    use super::*;

    #[test]
    fn parse_both_options() {
        let cli =
            Cli::try_parse_options(["--bind-address", "::1", "--bind-port", "8443"]).unwrap();

        assert_eq!(cli.bind_address, vec!["::1"]);
        assert_eq!(cli.bind_port, vec!["8443"]);
    }

    #[test]
    fn parse_equals_syntax() {
        let cli = Cli::try_parse_options(["--bind-address=10.0.0.1", "--bind-port=80"]).unwrap();

        assert_eq!(cli.bind_address, vec!["10.0.0.1"]);
        assert_eq!(cli.bind_port, vec!["80"]);
    }

    #[test]
    fn repeated_options_keep_every_value_in_order() {
        let cli = Cli::try_parse_options(["--bind-port", "80", "--bind-port", "8080"]).unwrap();

        assert_eq!(cli.bind_port, vec!["80", "8080"]);
    }

    #[test]
    fn values_are_not_interpreted_by_clap() {
        let cli = Cli::try_parse_options(["--bind-address", "not-an-ip", "--bind-port", "x"])
            .unwrap();

        assert_eq!(cli.bind_address, vec!["not-an-ip"]);
        assert_eq!(cli.bind_port, vec!["x"]);
    }

    #[test]
    fn hyphen_values_reach_the_handler() {
        let cli = Cli::try_parse_options(["--bind-port", "-1"]).unwrap();

        assert_eq!(cli.bind_port, vec!["-1"]);
    }

    #[test]
    fn default_values() {
        let cli = Cli::try_parse_options(std::iter::empty::<&str>()).unwrap();

        assert!(cli.bind_address.is_empty());
        assert!(cli.bind_port.is_empty());
    }
}

mod single_dash {
    use super::*;

    #[test]
    fn single_dash_with_separate_value() {
        let cli =
            Cli::try_parse_options(["-bind-address", "::1", "-bind-port", "8443"]).unwrap();

        assert_eq!(cli.bind_address, vec!["::1"]);
        assert_eq!(cli.bind_port, vec!["8443"]);
    }

    #[test]
    fn single_dash_with_equals() {
        let cli = Cli::try_parse_options(["-bind-address=10.0.0.1", "-bind-port=80"]).unwrap();

        assert_eq!(cli.bind_address, vec!["10.0.0.1"]);
        assert_eq!(cli.bind_port, vec!["80"]);
    }

    #[test]
    fn mixed_dash_forms_keep_order() {
        let cli = Cli::try_parse_options(["-bind-port", "80", "--bind-port", "8080"]).unwrap();

        assert_eq!(cli.bind_port, vec!["80", "8080"]);
    }

    #[test]
    fn option_like_value_is_not_rewritten() {
        let cli = Cli::try_parse_options(["-bind-address", "-bind-port"]).unwrap();

        assert_eq!(cli.bind_address, vec!["-bind-port"]);
        assert!(cli.bind_port.is_empty());
    }

    #[test]
    fn other_single_dash_options_are_still_unknown() {
        let err = Cli::try_parse_options(["-bind-host", "::1"]).unwrap_err();

        assert!(err.use_stderr());
    }
}

mod usage_errors {
    use super::*;

    #[test]
    fn unknown_option_is_rejected() {
        let err = Cli::try_parse_options(["--listen", "0.0.0.0"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn option_names_are_case_sensitive() {
        let err = Cli::try_parse_options(["--Bind-Port", "80"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn missing_value_is_rejected() {
        let err = Cli::try_parse_options(["--bind-port"]).unwrap_err();

        assert!(err.use_stderr());
    }

    #[test]
    fn positional_argument_is_rejected() {
        let err = Cli::try_parse_options(["bind-port", "80"]).unwrap_err();

        assert!(err.use_stderr());
    }

    #[test]
    fn help_is_reported_on_stdout() {
        let err = Cli::try_parse_options(["--help"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
        assert!(err.to_string().contains("--bind-address"));
    }
}

mod layer {
    use std::net::{IpAddr, Ipv6Addr};

    use super::*;
    use crate::config::OptionError;

    #[test]
    fn no_options_yields_empty_layer() {
        let layer = Cli::try_parse_options(std::iter::empty::<&str>())
            .unwrap()
            .to_layer();

        assert!(layer.is_empty());
    }

    #[test]
    fn valid_values_are_recorded() {
        let layer = Cli::try_parse_options(["--bind-address", "::1", "--bind-port", "8080"])
            .unwrap()
            .to_layer();

        assert_eq!(
            layer.bind_address,
            Some(Ok(IpAddr::V6(Ipv6Addr::LOCALHOST)))
        );
        assert_eq!(layer.bind_port.unwrap().unwrap().get(), 8080);
    }

    #[test]
    fn rejected_value_is_recorded_not_dropped() {
        let layer = Cli::try_parse_options(["--bind-address", "localhost"])
            .unwrap()
            .to_layer();

        assert_eq!(
            layer.bind_address,
            Some(Err(OptionError::Address {
                value: "localhost".to_string()
            }))
        );
        assert!(layer.bind_port.is_none());
    }
}
