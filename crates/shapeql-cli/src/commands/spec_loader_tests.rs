use std::io::Write;
use std::path::{Path, PathBuf};

use shapeql_core::ScalarKind;
use tempfile::NamedTempFile;

use super::CliError;
use super::spec_loader::{compile_spec, load_scalars, single_stdin};
use super::{request, reshape};
use crate::cli::SpecArgs;

fn temp_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn spec_args(path: PathBuf) -> SpecArgs {
    SpecArgs {
        path,
        name: None,
        scalars: None,
    }
}

#[test]
fn compile_spec_from_file() {
    let spec = temp_json(r#"{"order": {"$op": {"args": {"id": ["$id", "ID!"]}, "body": {"id": "ID!"}}}}"#);
    let mut args = spec_args(spec.path().to_owned());
    args.name = Some("GetOrder".into());

    let query = compile_spec(&args).unwrap();
    insta::assert_snapshot!(query.text(), @"query GetOrder($id: ID!) { order(id: $id) { id } }");
}

#[test]
fn scalars_file_extends_builtins() {
    let file = temp_json(r#"{"DateTime": "text"}"#);
    let table = load_scalars(Some(file.path())).unwrap();
    assert_eq!(table.kind_of("DateTime"), ScalarKind::Text);
    assert_eq!(table.kind_of("Int"), ScalarKind::Integer);
}

#[test]
fn invalid_json_names_the_file() {
    let spec = temp_json("{ not json");
    let err = compile_spec(&spec_args(spec.path().to_owned())).unwrap_err();
    assert!(matches!(err, CliError::Json { .. }));
    assert!(err.to_string().starts_with("invalid JSON in "));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = compile_spec(&spec_args(PathBuf::from("/nonexistent/spec.json"))).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
}

#[test]
fn compile_errors_pass_through() {
    let spec = temp_json(r#"{"a": {"$op": {"args": {"x": ["x", "Int"]}, "body": "Int"}}}"#);
    let err = compile_spec(&spec_args(spec.path().to_owned())).unwrap_err();
    assert_eq!(
        err.to_string(),
        "variable reference `x` is missing the `$` sigil"
    );
}

#[test]
fn stdin_feeds_one_input() {
    let stdin = Path::new("-");
    let file = Path::new("spec.json");
    single_stdin(&[Some(stdin), None, Some(file)]).unwrap();
    single_stdin(&[Some(file), Some(file)]).unwrap();

    let err = single_stdin(&[Some(stdin), None, Some(stdin)]).unwrap_err();
    assert!(matches!(err, CliError::StdinReused));
    assert_eq!(err.to_string(), "stdin (`-`) can feed only one input");
}

#[test]
fn commands_reject_stdin_twice() {
    let err = reshape::run(&spec_args("-".into()), Path::new("-"), false).unwrap_err();
    assert!(matches!(err, CliError::StdinReused));

    let err = request::run(&spec_args("-".into()), Some(Path::new("-")), false).unwrap_err();
    assert!(matches!(err, CliError::StdinReused));

    let mut args = spec_args("-".into());
    args.scalars = Some("-".into());
    let err = compile_spec(&args).unwrap_err();
    assert!(matches!(err, CliError::StdinReused));
}
