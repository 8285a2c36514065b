//! Validate CLI command

use clap::Args;
use serde_json::json;

use crate::display::format_validation_result;
use crate::error::{PocketError, PocketResult};
use crate::models::validate_income;

/// Arguments for `pocket validate`
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Raw net salary input
    #[arg(allow_hyphen_values = true)]
    pub income: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Handle the validate command
///
/// Prints the outcome either way; a rejected value also becomes the
/// command's error so the process exits non-zero. The caller should not
/// print that error again.
pub fn handle_validate_command(args: ValidateArgs) -> PocketResult<()> {
    let result = validate_income(Some(&args.income));

    if args.json {
        let value = match &result {
            Ok(income) => json!({ "ok": true, "value": income.value() }),
            Err(err) => json!({ "ok": false, "code": err.code(), "message": err.message() }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", format_validation_result(&result));
    }

    result.map(|_| ()).map_err(PocketError::from)
}
