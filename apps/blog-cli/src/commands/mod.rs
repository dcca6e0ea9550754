//! Command dispatch.

mod create;
mod delete;
mod list;
mod show;

use crate::cli::Cmd;
use crate::error::AppResult;
use crate::state::AppState;

/// Run one command against the application state, writing to stdout.
pub async fn run(cmd: Cmd, state: &AppState) -> AppResult<()> {
    let mut out = std::io::stdout();
    let store = state.posts.as_ref();

    match cmd {
        Cmd::List { json } => list::run(store, json, &mut out).await,
        Cmd::Show { id, json } => show::run(store, &id, json, &mut out).await,
        Cmd::Delete { id } => delete::run(store, &id, &mut out).await,
        Cmd::Create(args) => create::run(args, store, &mut out).await,
    }
}
