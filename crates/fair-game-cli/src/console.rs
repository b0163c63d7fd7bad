//! Terminal console: prompts on stdout, answers from stdin.

use crate::table::render_table;
use async_trait::async_trait;
use fair_game_core::{Console, GameError, Selection, SessionEvent};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

pub struct TerminalConsole<R, W> {
    lines: Lines<R>,
    out: W,
    json: bool,
}

impl TerminalConsole<BufReader<Stdin>, io::Stdout> {
    pub fn stdio(json: bool) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), io::stdout(), json)
    }
}

impl<R: AsyncBufRead + Unpin, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, out: W, json: bool) -> Self {
        Self {
            lines: input.lines(),
            out,
            json,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &SessionEvent<'_>) -> io::Result<()> {
        let out = &mut self.out;
        match event {
            SessionEvent::Commitment { commitment, .. } => {
                writeln!(out, "HMAC: {}", commitment)?;
            }
            SessionEvent::Menu(moves) => {
                writeln!(out, "Available moves:")?;
                for (idx, name) in moves.iter() {
                    writeln!(out, "{} - {}", idx.position(), name)?;
                }
                writeln!(out, "{} - exit", Selection::QUIT)?;
                writeln!(out, "{} - help", Selection::HELP)?;
            }
            SessionEvent::InvalidSelection(input) => {
                writeln!(out, "Must be a correct value... (got {:?})", input)?;
            }
            SessionEvent::Table(table) => {
                writeln!(out, "{}", render_table(table))?;
            }
            SessionEvent::Round(receipt) => {
                writeln!(out, "Your move: {}", receipt.user_move)?;
                writeln!(out, "Computer move: {}", receipt.computer_move)?;
                writeln!(out, "{}", receipt.outcome.message())?;
                writeln!(out, "HMAC key: {}", receipt.key)?;
                if self.json {
                    match receipt.to_json() {
                        Ok(line) => writeln!(out, "{}", line)?,
                        Err(e) => warn!("Failed to encode round receipt: {}", e),
                    }
                }
                writeln!(out)?;
            }
            SessionEvent::Goodbye(summary) => {
                writeln!(
                    out,
                    "Rounds: {}  wins: {}  losses: {}  draws: {}",
                    summary.rounds, summary.wins, summary.losses, summary.draws
                )?;
                writeln!(out, "You are leaving the game, goodbye!")?;
            }
        }
        out.flush()
    }
}

#[async_trait]
impl<R, W> Console for TerminalConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    fn render(&mut self, event: &SessionEvent<'_>) -> Result<(), GameError> {
        Ok(self.write_event(event)?)
    }

    async fn next_line(&mut self) -> Result<Option<String>, GameError> {
        write!(self.out, "Enter your move: ")?;
        self.out.flush()?;
        Ok(self.lines.next_line().await?)
    }
}
