use clap::Args;
use serde_json::{json, Value};

use compound_core::share;

use super::projection::{resolve_input, InputArgs};

/// Arguments for query-string encoding
#[derive(Args)]
pub struct EncodeQueryArgs {
    #[command(flatten)]
    pub params: InputArgs,
}

/// Arguments for query-string decoding
#[derive(Args)]
pub struct DecodeQueryArgs {
    /// Query string, with or without the leading '?'
    #[arg(long)]
    pub query: String,
}

pub fn run_encode_query(args: EncodeQueryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let projection_input = resolve_input(&args.params)?;
    Ok(json!({ "query": share::to_query_string(&projection_input) }))
}

pub fn run_decode_query(args: DecodeQueryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let projection_input = share::from_query_string(&args.query)?;
    projection_input.validate()?;
    Ok(serde_json::to_value(projection_input)?)
}
