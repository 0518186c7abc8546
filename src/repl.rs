//! REPL Module
//!
//! Line-oriented read/dispatch loop over any async reader and writer.

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::commands::{clean_input, execute, find_command, CommandOutcome};
use crate::context::AppContext;
use crate::error::Result;

/// Prompt printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `exit` or end of input
    Finished,
    /// The shutdown future resolved first
    Interrupted,
}

// == Dispatch ==
/// Tokenizes and runs a single input line.
///
/// Command failures are printed to `out` and never end the loop; only I/O
/// errors on `out` itself are returned.
pub async fn dispatch_line<W>(ctx: &AppContext, line: &str, out: &mut W) -> Result<CommandOutcome>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let tokens = clean_input(line);
    let Some((name, args)) = tokens.split_first() else {
        out.write_all(b"Incorrect command. Write 'help' to see the list of commands.\n")
            .await?;
        return Ok(CommandOutcome::Continue);
    };

    let Some(spec) = find_command(name) else {
        debug!(command = %name, "unknown command");
        out.write_all(b"Unknown command\n").await?;
        return Ok(CommandOutcome::Continue);
    };

    match execute(ctx, spec, args, out).await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            warn!(command = spec.name, error = %e, "command failed");
            out.write_all(format!("{}\n", e).as_bytes()).await?;
            Ok(CommandOutcome::Continue)
        }
    }
}

// == Run ==
/// Reads lines from `input` until `exit` or end of input.
pub async fn run_repl<R, W>(ctx: &AppContext, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut lines = input.lines();

    loop {
        out.write_all(PROMPT.as_bytes()).await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("input closed");
            out.write_all(b"\n").await?;
            break;
        };

        if dispatch_line(ctx, &line, out).await? == CommandOutcome::Exit {
            break;
        }
    }

    out.flush().await?;
    Ok(())
}

// == Run Until Shutdown ==
/// Runs the REPL until it finishes or `shutdown` resolves.
///
/// On shutdown the pending read is abandoned and a farewell line is written.
/// The caller decides what to do about a reader that cannot be cancelled.
pub async fn run_until_shutdown<R, W, S>(
    ctx: &AppContext,
    input: R,
    out: &mut W,
    shutdown: S,
) -> Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + ?Sized,
    S: Future<Output = ()>,
{
    let end = tokio::select! {
        result = run_repl(ctx, input, out) => {
            result?;
            SessionEnd::Finished
        }
        _ = shutdown => SessionEnd::Interrupted,
    };

    if end == SessionEnd::Interrupted {
        info!("session interrupted");
        out.write_all(b"\nClosing the Pokedex... Goodbye!\n").await?;
        out.flush().await?;
    }

    Ok(end)
}
