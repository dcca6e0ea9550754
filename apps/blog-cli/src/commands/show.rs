use std::io::Write;

use boostblog_core::DomainError;
use boostblog_core::ports::PostRepository;
use boostblog_infra::PostStore;
use boostblog_shared::PostDetail;

use crate::error::AppResult;

pub async fn run<W: Write>(store: &PostStore, id: &str, json: bool, out: &mut W) -> AppResult<()> {
    let Some(post) = store.find_by_id(id).await? else {
        return Err(DomainError::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        }
        .into());
    };
    let detail = PostDetail::from(&post);

    if json {
        serde_json::to_writer_pretty(&mut *out, &detail)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", detail.title)?;
    writeln!(out, "By {}  |  {}  |  {}", detail.author, detail.category, detail.created_local)?;
    writeln!(out)?;
    writeln!(out, "{}", detail.content)?;
    Ok(())
}
