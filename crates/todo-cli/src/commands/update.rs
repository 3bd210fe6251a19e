use anyhow::Context;
use todo_core::responses::UpdateResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    completed: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.store
        .set_completion(id, completed)
        .await
        .with_context(|| format!("failed to update item {id}"))?;
    output(&UpdateResponse::success(), flags.format)
}
