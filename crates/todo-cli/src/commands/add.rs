use todo_core::responses::CreateResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(description: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = ctx.store.create(description).await?;
    tracing::debug!(%id, "item added");
    output(&CreateResponse { id }, flags.format)
}
