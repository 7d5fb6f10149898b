use crate::error::ClientError;
use crate::master::{JettonMaster, Request};
use crate::retry::{poll_until, RetryPolicy};
use jetton_cell::Cell;
use jetton_metadata::JettonContent;
use slog::{info, Logger};

/// Reads and decodes the content currently set on the master.
pub async fn read_content<M>(master: &M) -> Result<Option<JettonContent>, ClientError>
where
    M: JettonMaster + ?Sized,
{
    let state = master.query().await?;
    let content = state
        .content
        .as_ref()
        .map(JettonContent::decode)
        .transpose()?;
    Ok(content)
}

/// Replaces the content of the master with `content` and waits until the
/// master reports it. Returns the submitted content cell.
pub async fn publish_metadata<M>(
    master: &M,
    content: &JettonContent,
    policy: &RetryPolicy,
    log: &Logger,
) -> Result<Cell, ClientError>
where
    M: JettonMaster + ?Sized,
{
    let cell = content.encode()?;
    info!(log, "Updating jetton content"; "layout" => layout(content), "hash" => %cell.hash());
    master.submit(Request::UpdateContent(cell.clone())).await?;

    poll_until(master, policy, log, "content update", |state| {
        state
            .content
            .as_ref()
            .and_then(|current| JettonContent::decode(current).ok())
            .as_ref()
            == Some(content)
    })
    .await?;
    info!(log, "Jetton content updated"; "hash" => %cell.hash());
    Ok(cell)
}

fn layout(content: &JettonContent) -> &'static str {
    match content {
        JettonContent::Offchain { .. } => "offchain",
        JettonContent::Onchain(_) => "onchain",
    }
}
