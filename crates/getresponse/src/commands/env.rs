//! `gr env`: resolve the account's environment and print it.

use serde::Serialize;

use getresponse_api::{Client, Region, Resolution};

use crate::error::CliError;
use crate::output;

use super::Render;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvironmentView<'a> {
    account_type: &'a str,
    region: Option<&'a str>,
    base_url: &'a str,
}

pub async fn handle(client: &Client, render: Render) -> Result<(), CliError> {
    match client.resolve().await? {
        Resolution::Matched(env) => {
            let view = EnvironmentView {
                account_type: env.account_type.as_str(),
                region: env.region.as_ref().map(Region::as_str),
                base_url: env.base_url.as_str(),
            };
            output::print_output(&output::render_value(render.format, &view)?, render.quiet);
            Ok(())
        }
        Resolution::Unmatched(desc) => {
            output::print_output(&output::render_value(render.format, &desc)?, render.quiet);
            Err(CliError::from(&desc))
        }
    }
}
