//! Command Handlers
//!
//! One handler per command. Handlers write user-facing text to `out` and
//! return errors for the REPL to print.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::commands::catch::attempt_catch;
use crate::commands::table::{command_table, CommandKind, CommandSpec};
use crate::context::AppContext;
use crate::error::{PokedexError, Result};

/// What the REPL should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Exit,
}

async fn write_line<W>(out: &mut W, line: &str) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}

// == Execute ==
/// Runs `spec` with `args` after checking the argument count.
pub async fn execute<W>(
    ctx: &AppContext,
    spec: &CommandSpec,
    args: &[String],
    out: &mut W,
) -> Result<CommandOutcome>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    if args.len() != spec.arity {
        return Err(PokedexError::Usage(spec.usage.to_string()));
    }
    debug!(command = spec.name, ?args, "executing command");

    match spec.kind {
        CommandKind::Help => help(out).await?,
        CommandKind::Exit => {
            write_line(out, "Closing the Pokedex... Goodbye!").await?;
            return Ok(CommandOutcome::Exit);
        }
        CommandKind::Map => map_forward(ctx, out).await?,
        CommandKind::MapBack => map_back(ctx, out).await?,
        CommandKind::Explore => explore(ctx, &args[0], out).await?,
        CommandKind::Catch => catch(ctx, &args[0], out).await?,
        CommandKind::Inspect => inspect(ctx, &args[0], out).await?,
        CommandKind::Pokedex => list_pokedex(ctx, out).await?,
    }

    Ok(CommandOutcome::Continue)
}

async fn help<W>(out: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    write_line(out, "Welcome to the Pokedex!").await?;
    write_line(out, "Usage:").await?;
    write_line(out, "").await?;
    for spec in command_table() {
        write_line(out, &format!("{}: {}", spec.usage, spec.description)).await?;
    }
    Ok(())
}

// == Map ==
/// Shows the location-area page at `offset` and moves the cursor past it.
///
/// The cursor only moves when the page was fetched and displayed.
async fn show_location_page<W>(ctx: &AppContext, offset: u32, out: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let page = ctx.api.location_areas(offset).await?;

    if page.results.is_empty() {
        write_line(out, "No location areas found.").await?;
        return Ok(());
    }

    for area in &page.results {
        write_line(out, &format!("🌏 {}", area.name)).await?;
    }
    ctx.cursor.shown(offset);
    Ok(())
}

async fn map_forward<W>(ctx: &AppContext, out: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    show_location_page(ctx, ctx.cursor.next_offset(), out).await
}

async fn map_back<W>(ctx: &AppContext, out: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    match ctx.cursor.previous_offset() {
        Some(offset) => show_location_page(ctx, offset, out).await,
        None => {
            write_line(out, "You are already on the first page. Use 'map' to advance.").await
        }
    }
}

// == Explore ==
async fn explore<W>(ctx: &AppContext, area: &str, out: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    write_line(out, &format!("Exploring {}...", area)).await?;
    let detail = ctx.api.location_area(area).await?;

    if detail.pokemon_encounters.is_empty() {
        write_line(out, "No Pokemon found in this area.").await?;
        return Ok(());
    }

    write_line(out, "Found Pokemon:").await?;
    for encounter in &detail.pokemon_encounters {
        write_line(out, &format!("🐾 {}", encounter.pokemon.name)).await?;
    }
    Ok(())
}

// == Catch ==
async fn catch<W>(ctx: &AppContext, name: &str, out: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    write_line(out, &format!("Throwing a Poke Ball at {}...", name)).await?;
    let pokemon = ctx.api.pokemon(name).await?;

    let caught = ctx.with_rng(|rng| attempt_catch(rng, pokemon.base_experience));
    if caught {
        ctx.pokedex
            .capture(pokemon.name.clone(), pokemon.base_experience)
            .await;
        info!(pokemon = %pokemon.name, "captured");
        write_line(out, &format!("Congratulations! You caught: {}", pokemon.name)).await?;
        write_line(out, "You may now inspect it with the inspect command.").await?;
    } else {
        write_line(out, &format!("{} escaped! Try again!", pokemon.name)).await?;
    }
    Ok(())
}

// == Inspect ==
async fn inspect<W>(ctx: &AppContext, name: &str, out: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    match ctx.pokedex.lookup(name).await {
        Some(p) => {
            write_line(out, &format!("Name: {}", p.name)).await?;
            write_line(out, &format!("Experience: {}", p.base_experience)).await?;
            write_line(
                out,
                &format!("Caught: {}", p.caught_at.format("%Y-%m-%d %H:%M:%S UTC")),
            )
            .await
        }
        None => write_line(out, &format!("{} is not in your Pokedex", name)).await,
    }
}

// == Pokedex ==
async fn list_pokedex<W>(ctx: &AppContext, out: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    match ctx.pokedex.list().await {
        Some(all) => {
            write_line(out, "Your Pokedex:").await?;
            for p in all {
                write_line(out, &format!(" - {}", p.name)).await?;
            }
            Ok(())
        }
        None => write_line(out, "Your Pokedex is empty").await,
    }
}
