use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value_t = OutputFormat::Json,
        help = "How to print the parsed options",
    )]
    pub format: OutputFormat,

    #[arg(
        short = 'q',
        long,
        help = "Only report errors; print nothing on success",
    )]
    pub quiet: bool,
}
