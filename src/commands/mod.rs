use crate::args::Args;
use crate::error::CmdError;
use crate::output;
use crate::parser::errors::ParseError;
use crate::schema;

/// What the driver should print after a run.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Parsed(String),
    Help(String),
    Quiet,
}

pub fn run(args: &Args) -> Result<Outcome, CmdError> {
    let schema_file = &args.schema.schema;
    let mut parser = schema::load_schema(schema_file)?.into_parser()?;

    match parser.parse(&args.schema.tokens) {
        Ok(_) => {}
        Err(ParseError::HelpRequested { help }) => return Ok(Outcome::Help(help)),
        Err(e) => {
            return Err(CmdError::InSchema {
                schema_file: schema_file.clone(),
                source: Box::new(e.into()),
            });
        }
    }

    if args.output.quiet {
        return Ok(Outcome::Quiet);
    }
    let rendered = output::render(parser.opts(), parser.registry(), args.output.format)?;
    Ok(Outcome::Parsed(rendered))
}
