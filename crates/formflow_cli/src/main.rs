//! CLI entry point driving one request through the demo page.
//!
//! # Responsibility
//! - Turn `key=value` arguments into a request field map.
//! - Run `prepare -> choose -> validate -> process -> render` and print the
//!   rendered output.
//!
//! Usage: `formflow [--log-level LEVEL] [--log-dir ABS_DIR] key=value...`

mod demo;

use formflow_core::{init_logging, FieldMap, LoggingConfig, View};
use log::{error, info};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Default)]
struct CliArgs {
    log_level: Option<String>,
    log_dir: Option<String>,
    fields: FieldMap,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--log-level" => {
                parsed.log_level = Some(args.next().ok_or("--log-level needs a value")?);
            }
            "--log-dir" => {
                parsed.log_dir = Some(args.next().ok_or("--log-dir needs a value")?);
            }
            field => {
                let (name, value) = field
                    .split_once('=')
                    .ok_or_else(|| format!("expected key=value, got `{field}`"))?;
                if name.is_empty() {
                    return Err(format!("field name must not be empty in `{field}`"));
                }
                parsed.fields.insert(name.to_string(), value.to_string());
            }
        }
    }
    Ok(parsed)
}

fn logging_config(args: &CliArgs) -> Result<Option<LoggingConfig>, String> {
    let from_env = LoggingConfig::from_env().map_err(|err| err.to_string())?;
    let Some(log_dir) = args
        .log_dir
        .clone()
        .or_else(|| from_env.as_ref().map(|cfg| cfg.log_dir().display().to_string()))
    else {
        return Ok(None);
    };
    let level = args
        .log_level
        .clone()
        .or_else(|| from_env.as_ref().map(|cfg| cfg.level().to_string()))
        .unwrap_or_else(|| formflow_core::default_log_level().to_string());
    LoggingConfig::new(&level, &log_dir)
        .map(Some)
        .map_err(|err| err.to_string())
}

fn run(args: CliArgs) -> Result<String, String> {
    if let Some(config) = logging_config(&args)? {
        init_logging(&config).map_err(|err| err.to_string())?;
    }

    let mut view = View::new(args.fields);
    demo::register(&mut view, Arc::new(demo::JsonRenderer)).map_err(|err| err.to_string())?;
    info!(
        "event=cli_request module=cli status=start request_id={} field_count={}",
        view.request_id(),
        view.received().len()
    );

    view.prepare()
        .and_then(|view| view.choose())
        .and_then(|chosen| chosen.validate())
        .and_then(|chosen| chosen.process())
        .and_then(|chosen| chosen.render())
        .map_err(|err| {
            error!(
                "event=cli_request module=cli status=error case={:?}",
                err.case()
            );
            err.to_string()
        })
}

fn main() -> ExitCode {
    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("formflow: {message}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_args, run};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_fields_and_flags() {
        let parsed = parse_args(args(&["--log-level", "warn", "age=", "calc_age=1"]))
            .expect("valid args");
        assert_eq!(parsed.log_level.as_deref(), Some("warn"));
        assert_eq!(parsed.fields.get("age").map(String::as_str), Some(""));
        assert_eq!(parsed.fields.len(), 2);
    }

    #[test]
    fn rejects_malformed_fields() {
        assert!(parse_args(args(&["age"])).is_err());
        assert!(parse_args(args(&["=1"])).is_err());
        assert!(parse_args(args(&["--log-dir"])).is_err());
    }

    #[test]
    fn inner_button_renders_parsed_age() {
        let parsed = parse_args(args(&["calc_age=1", "which_age=30"])).expect("valid args");
        let output = run(parsed).expect("pipeline should succeed");
        assert!(output.contains("\"template\": \"view_b\""));
        assert!(output.contains("Happy 30th!"));
    }

    #[test]
    fn trigger_button_greets_by_name() {
        let parsed = parse_args(args(&["age=1", "name=Ada"])).expect("valid args");
        let output = run(parsed).expect("pipeline should succeed");
        assert!(output.contains("Hello Ada"));
    }

    #[test]
    fn landing_reports_empty_name_inline() {
        let parsed = parse_args(args(&["welcome=1", "name="])).expect("valid args");
        let output = run(parsed).expect("pipeline should succeed");
        assert!(output.contains("\"template\": \"view_a\""));
        assert!(output.contains("Name must not be empty!"));
    }
}
