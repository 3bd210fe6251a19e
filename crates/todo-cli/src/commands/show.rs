use anyhow::Context;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_items};

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let item = ctx
        .store
        .get(id)
        .await
        .with_context(|| format!("failed to show item {id}"))?;

    match flags.format {
        OutputFormat::Table => output_items(std::slice::from_ref(&item), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&item, flags.format),
    }
}
