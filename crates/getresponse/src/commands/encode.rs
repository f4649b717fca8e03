//! `gr encode`: show the query string a set of flags produces.

use getresponse_api::query;

use crate::cli::QueryArgs;
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: &QueryArgs, quiet: bool) -> Result<(), CliError> {
    let encoded = query::encode(&util::build_query(args)?);
    output::print_output(&encoded, quiet);
    Ok(())
}
