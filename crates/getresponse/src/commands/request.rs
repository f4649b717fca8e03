//! Raw request handlers: `get`, `delete`, `post`, `upload`.
//!
//! Each prints the response body, then turns an unsuccessful status or a
//! synthesized environment error into a `CliError`.

use getresponse_api::{ApiResponse, Blob, Client};

use crate::cli::{PostArgs, RequestArgs, UploadArgs};
use crate::error::CliError;
use crate::output;

use super::{Render, util};

/// Print a response and map failures to an error.
pub fn finish(resp: &ApiResponse, render: Render) -> Result<(), CliError> {
    let rendered = output::render_body(render.format, &resp.body())?;
    output::print_output(&rendered, render.quiet);

    match CliError::from_response(resp) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub async fn get(client: &Client, args: &RequestArgs, render: Render) -> Result<(), CliError> {
    let query = util::build_query(&args.query)?;
    let resp = client.get(&args.path, query).await?;
    finish(&resp, render)
}

pub async fn delete(client: &Client, args: &RequestArgs, render: Render) -> Result<(), CliError> {
    let query = util::build_query(&args.query)?;
    let resp = client.remove(&args.path, query).await?;
    finish(&resp, render)
}

pub async fn post(client: &Client, args: &PostArgs, render: Render) -> Result<(), CliError> {
    let resp = match args.data {
        Some(ref data) => {
            let body = util::read_json_data(data)?;
            client.post(&args.path, &body).await?
        }
        None => client.post_empty(&args.path).await?,
    };
    finish(&resp, render)
}

pub async fn upload(client: &Client, args: UploadArgs, render: Render) -> Result<(), CliError> {
    let mut blob = Blob::from_path(&args.file).await?;
    if let Some(name) = args.name {
        blob = blob.with_name(name);
    }
    if let Some(content_type) = args.content_type {
        blob = blob.with_content_type(content_type);
    }
    tracing::info!(
        name = blob.name(),
        content_type = blob.content_type(),
        bytes = blob.len(),
        "uploading"
    );

    let resp = client.upload_file(&blob).await?;
    finish(&resp, render)
}
