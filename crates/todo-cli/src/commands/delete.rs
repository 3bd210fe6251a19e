use anyhow::Context;
use todo_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store
        .delete(id)
        .await
        .with_context(|| format!("failed to delete item {id}"))?;
    output(&DeleteResponse::success(), flags.format)
}
