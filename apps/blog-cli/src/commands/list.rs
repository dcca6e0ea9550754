use std::io::Write;

use boostblog_core::ports::PostRepository;
use boostblog_infra::PostStore;
use boostblog_shared::PostCard;

use crate::error::AppResult;

pub async fn run<W: Write>(store: &PostStore, json: bool, out: &mut W) -> AppResult<()> {
    let cards: Vec<PostCard> = store.list().await?.iter().map(PostCard::from).collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &cards)?;
        writeln!(out)?;
        return Ok(());
    }

    if cards.is_empty() {
        writeln!(out, "No posts yet. Run `boostblog create` to write one.")?;
        return Ok(());
    }

    for card in &cards {
        writeln!(out, "{}  {}  by {}  [{}]", card.created_date, card.title, card.author, card.category)?;
        writeln!(out, "    {}", card.summary)?;
        writeln!(out, "    id: {}", card.id)?;
    }
    Ok(())
}
