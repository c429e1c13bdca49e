use clap::Parser;
use userstore::config::{Params, DEFAULT_FILE_NAME, FILE_ENV_VAR};

#[derive(Parser, Debug)]
#[command(name = "userstore", version)]
#[command(about = "Keep user records in a JSON file", long_about = None)]
pub struct Cli {
    /// Operation to run: list, add, remove, findById
    #[arg(long)]
    pub operation: Option<String>,

    /// JSON file holding the records
    #[arg(
        long = "fileName",
        visible_alias = "file-name",
        env = FILE_ENV_VAR,
        default_value = DEFAULT_FILE_NAME
    )]
    pub file_name: String,

    /// Record to add, as a JSON object (e.g. '{"id":"1","email":"a@x.com","age":30}')
    #[arg(long)]
    pub item: Option<String>,

    /// Record id, for remove and findById
    #[arg(long)]
    pub id: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Cli> for Params {
    fn from(cli: Cli) -> Self {
        Params {
            operation: cli.operation,
            file_name: cli.file_name,
            item: cli.item,
            id: cli.id,
        }
    }
}
