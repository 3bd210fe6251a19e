use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Add { description } => commands::add::run(&description, ctx, flags).await,
        Commands::Update { id, incomplete } => {
            commands::update::run(&id, !incomplete, ctx, flags).await
        }
        Commands::Delete { id } => commands::delete::run(&id, ctx, flags).await,
        Commands::List { incomplete } => commands::list::run(!incomplete, ctx, flags).await,
        Commands::Show { id } => commands::show::run(&id, ctx, flags).await,
    }
}
