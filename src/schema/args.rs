use clap::Args;

#[derive(Args, Debug)]
pub struct SchemaArgs {
    #[arg(
        short = 's',
        long,
        value_name = "FILE",
        help = "Option schema file (toml/yaml/json)"
    )]
    pub schema: String,

    #[arg(
        value_name = "TOKENS",
        num_args = 0..,
        allow_hyphen_values = true,
        last = true,
        help = "Command line to parse against the schema, given after --"
    )]
    pub tokens: Vec<String>,
}
