use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_items;

pub async fn run(completed: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let items = ctx.store.list(completed).await?;
    output_items(&items, flags.format)
}
