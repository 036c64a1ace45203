//! `roster users` - one-shot collection commands.
//!
//! Each invocation replays the collection lifecycle: a fresh collection is
//! loaded (the initial fetch), the requested action runs against it, and the
//! settled snapshot is rendered. Failures recorded in the snapshot become the
//! command's error and exit code.

use tokio::runtime::Runtime;
use tracing::instrument;

use roster_core::{
    application::{ApplicationError, UserCollection},
    domain::{DomainValidator, UserId},
};

use crate::{
    cli::{CreateArgs, DeleteArgs, GlobalArgs, UpdateArgs, UsersCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct users subcommand.
pub fn execute(
    cmd: UsersCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let collection = super::build_collection(global, config)?;
    let rt = super::runtime()?;

    match cmd {
        UsersCommands::List => list(&rt, &collection, output),
        UsersCommands::Show { id } => show(&rt, &collection, UserId::new(id), output),
        UsersCommands::Create(args) => create(&rt, &collection, args, output),
        UsersCommands::Update(args) => update(&rt, &collection, args, output),
        UsersCommands::Delete(args) => delete(&rt, &collection, args, global, output),
    }
}

/// Initial fetch with a spinner.
pub(crate) fn load(rt: &Runtime, collection: &UserCollection, output: &OutputManager) -> CliResult<()> {
    let spinner = output.spinner("Loading users...");
    rt.block_on(collection.fetch_all());
    spinner.finish_and_clear();
    super::settled(collection)
}

#[instrument(skip_all)]
fn list(rt: &Runtime, collection: &UserCollection, output: &OutputManager) -> CliResult<()> {
    load(rt, collection, output)?;
    let snapshot = collection.snapshot();
    output.header(&format!("Users ({})", snapshot.len()))?;
    output.users(&snapshot.items)?;
    Ok(())
}

#[instrument(skip_all, fields(id = %id))]
fn show(
    rt: &Runtime,
    collection: &UserCollection,
    id: UserId,
    output: &OutputManager,
) -> CliResult<()> {
    let spinner = output.spinner("Fetching user...");
    let result = rt.block_on(collection.gateway().get(id));
    spinner.finish_and_clear();
    output.user(&result?)?;
    Ok(())
}

#[instrument(skip_all)]
fn create(
    rt: &Runtime,
    collection: &UserCollection,
    args: CreateArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let draft = DomainValidator::validate_draft(&args.name, &args.email)?;
    load(rt, collection, output)?;

    let spinner = output.spinner("Creating user...");
    rt.block_on(collection.create(draft));
    spinner.finish_and_clear();
    super::settled(collection)?;

    let snapshot = collection.snapshot();
    if let Some(created) = snapshot.items.last() {
        output.success(&format!("Created user {}", created.id))?;
        output.user(created)?;
    }
    Ok(())
}

#[instrument(skip_all, fields(id = args.id))]
fn update(
    rt: &Runtime,
    collection: &UserCollection,
    args: UpdateArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let id = UserId::new(args.id);
    let patch = DomainValidator::validate_patch(args.name.as_deref(), args.email.as_deref())?;
    load(rt, collection, output)?;
    let known = collection.snapshot().find(id).is_some();

    let spinner = output.spinner("Updating user...");
    rt.block_on(collection.update(id, patch));
    spinner.finish_and_clear();
    settle_for(collection, id, known)?;

    if let Some(updated) = collection.snapshot().find(id) {
        output.success(&format!("Updated user {id}"))?;
        output.user(updated)?;
    }
    Ok(())
}

#[instrument(skip_all, fields(id = args.id))]
fn delete(
    rt: &Runtime,
    collection: &UserCollection,
    args: DeleteArgs,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let id = UserId::new(args.id);
    load(rt, collection, output)?;

    let known = collection.snapshot().find(id).cloned();
    if let Some(user) = &known {
        if !args.yes && !confirm(&format!("Delete user {} ({})?", id, user.name), global)? {
            return Err(CliError::Cancelled);
        }
    }

    let spinner = output.spinner("Deleting user...");
    rt.block_on(collection.remove(id));
    spinner.finish_and_clear();
    settle_for(collection, id, known.is_some())?;

    output.success(&format!("Deleted user {id}"))?;
    if output.is_json() {
        output.json(&collection.snapshot().items)?;
    }
    Ok(())
}

/// Like [`super::settled`], but reports an id that was never loaded as
/// not-found rather than as a failed request.
fn settle_for(collection: &UserCollection, id: UserId, known: bool) -> CliResult<()> {
    if !known && collection.last_error().is_some() {
        return Err(CliError::Core(ApplicationError::UnknownUser { id }.into()));
    }
    super::settled(collection)
}

/// Ask before a destructive action.
#[cfg(feature = "interactive")]
fn confirm(prompt: &str, global: &GlobalArgs) -> CliResult<bool> {
    use std::io::IsTerminal;

    if global.quiet || !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "refusing to delete without confirmation; pass --yes".into(),
            source: None,
        });
    }

    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read confirmation".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(_prompt: &str, _global: &GlobalArgs) -> CliResult<bool> {
    Err(CliError::InvalidInput {
        message: "interactive confirmation is not available in this build; pass --yes".into(),
        source: None,
    })
}
