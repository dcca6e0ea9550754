//! `create` - drive the creation wizard from flags or from prompts.

use std::io::Write;

use tokio::io::{AsyncBufRead, BufReader};

use boostblog_core::domain::{CATEGORIES, DraftPatch, Field};
use boostblog_core::{DomainError, Post, Step, WizardSession};
use boostblog_infra::PostStore;
use boostblog_shared::{ReviewSummary, WizardProgress};

use crate::cli::CreateArgs;
use crate::error::{AppError, AppResult};
use crate::prompt::{Answer, Prompter};

pub async fn run<W: Write>(args: CreateArgs, store: &PostStore, out: &mut W) -> AppResult<()> {
    let json = args.json;

    let post = if args.interactive {
        let input = BufReader::new(tokio::io::stdin());
        let mut prompter = Prompter::new(input, &mut *out);
        interactive(store, &mut prompter).await?
    } else {
        from_flags(&args, store).await?
    };

    tracing::info!(post_id = %post.id, "Post created");

    if json {
        serde_json::to_writer_pretty(&mut *out, &post)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Saved! id: {}", post.id)?;
    }
    Ok(())
}

/// Walk the wizard with every value supplied up front.
///
/// Stops at the first step that fails with that step's error messages.
pub async fn from_flags(args: &CreateArgs, store: &PostStore) -> AppResult<Post> {
    let values = [
        (Field::Title, &args.title),
        (Field::Author, &args.author),
        (Field::Summary, &args.summary),
        (Field::Category, &args.category),
        (Field::Content, &args.content),
    ];

    let mut session = WizardSession::new();
    let patch = values
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .fold(DraftPatch::new(), |patch, (field, value)| {
            patch.with(field, normalize(field, value))
        });
    session.update_field(patch);

    while session.step() < Step::Content {
        if !session.advance() {
            return Err(rejection(&session));
        }
    }

    match session.submit(store).await? {
        Some(post) => Ok(post),
        None => {
            session.touch_field(Field::Content);
            Err(rejection(&session))
        }
    }
}

/// Prompt for each step's fields until the post is saved or the user cancels.
///
/// `:back` returns to the previous step (or cancels on the first one).
/// Blank answers keep a value entered earlier.
pub async fn interactive<R, W>(store: &PostStore, prompter: &mut Prompter<R, W>) -> AppResult<Post>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = WizardSession::new();

    loop {
        let step = session.step();
        render_progress(prompter.out(), step)?;

        let mut went_back = false;
        for &field in step.fields() {
            let current = session.draft().get(field).to_string();
            match prompter.ask(&question(field, &current)).await? {
                Answer::Cancel => return Err(AppError::Cancelled),
                Answer::Back if step == Step::Metadata => return Err(AppError::Cancelled),
                Answer::Back => {
                    session.retreat();
                    went_back = true;
                    break;
                }
                Answer::Value(value) => {
                    if !(value.trim().is_empty() && !current.is_empty()) {
                        session.update_field(DraftPatch::field(field, normalize(field, &value)));
                    }
                    session.touch_field(field);
                }
            }
        }
        if went_back {
            continue;
        }

        if step >= Step::Content {
            if let Some(post) = session.submit(store).await? {
                render_review(prompter.out(), &session)?;
                return Ok(post);
            }
        } else if session.advance() {
            continue;
        }
        render_errors(prompter.out(), &session)?;
    }
}

fn rejection(session: &WizardSession) -> AppError {
    let messages = session.errors().into_values().map(str::to_string).collect();
    DomainError::Validation(messages).into()
}

/// Apply input-level constraints: length caps and category shortcuts.
fn normalize(field: Field, value: &str) -> String {
    if field == Field::Category {
        let trimmed = value.trim();
        if let Some(known) = trimmed
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| CATEGORIES.get(i))
        {
            return known.to_string();
        }
        if let Some(known) = CATEGORIES.iter().find(|c| c.eq_ignore_ascii_case(trimmed)) {
            return known.to_string();
        }
    }

    match field.max_length() {
        Some(max) => value.chars().take(max).collect(),
        None => value.to_string(),
    }
}

fn question(field: Field, current: &str) -> String {
    let mut q = format!("{} ({})", field.label(), field.placeholder());
    if field == Field::Category {
        let choices: Vec<String> = CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}={c}", i + 1))
            .collect();
        q.push_str(&format!(" [{}]", choices.join(", ")));
    }
    if !current.is_empty() {
        q.push_str(&format!(" <{current}>"));
    }
    q
}

fn render_progress<W: Write>(out: &mut W, step: Step) -> AppResult<()> {
    let line: Vec<String> = WizardProgress::for_step(step)
        .steps
        .iter()
        .map(|s| {
            let marker = if s.active {
                ">"
            } else if s.done {
                "x"
            } else {
                " "
            };
            format!("[{marker}] {} {}", s.number, s.label)
        })
        .collect();
    writeln!(out, "{}", line.join("  "))?;
    Ok(())
}

fn render_errors<W: Write>(out: &mut W, session: &WizardSession) -> AppResult<()> {
    for message in session.errors().values() {
        writeln!(out, "  ! {message}")?;
    }
    Ok(())
}

fn render_review<W: Write>(out: &mut W, session: &WizardSession) -> AppResult<()> {
    render_progress(out, session.step())?;
    let review = ReviewSummary::from(session);
    writeln!(out, "Title:    {}", review.title)?;
    writeln!(out, "Author:   {}", review.author)?;
    writeln!(out, "Summary:  {}", review.summary)?;
    writeln!(out, "Category: {}", review.category)?;
    writeln!(out, "Content:\n{}", review.content)?;
    Ok(())
}
