#![allow(dead_code)]

use std::path::PathBuf;

use cmdopts::args::Args;
use cmdopts::output::args::{OutputArgs, OutputFormat};
use cmdopts::schema::args::SchemaArgs;
use cmdopts::{CmdLineParser, ParseErrorKind};

pub fn write_schema_file(dir: &tempfile::TempDir, file_name: &str, contents: &str) -> String {
    let path: PathBuf = dir.path().join(file_name);
    std::fs::write(&path, contents).expect("write schema file");
    path.to_string_lossy().into_owned()
}

pub fn build_args(schema_path: &str, tokens: &[&str], format: OutputFormat) -> Args {
    Args {
        schema: SchemaArgs {
            schema: schema_path.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        },
        output: OutputArgs {
            format,
            quiet: false,
        },
    }
}

pub fn parse_err_kind(parser: &mut CmdLineParser, args: &[&str]) -> ParseErrorKind {
    parser
        .parse(args)
        .map(|_| ())
        .expect_err("parse should fail")
        .kind()
}
