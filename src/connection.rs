//! External connection to the arena server.
//!
//! Line-delimited JSON over a blocking TCP stream. The session only sees
//! the narrow [`GameTransport`] seam; framing, desync handling, and I/O
//! failure all stay in here.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::grid::{Direction, GameState, Grid, Player, Vec2};

/// What the session loop needs from its environment, and nothing more.
pub trait GameTransport {
    /// Liveness as last observed by a receive or send.
    fn is_active(&self) -> bool;
    /// Blocks for the next full snapshot. `None` means the connection
    /// went inactive.
    fn receive_state(&mut self) -> Option<GameState>;
    /// Transmits the chosen direction. Failures deactivate the transport
    /// instead of escaping.
    fn send_direction(&mut self, direction: Direction);
}

#[derive(Debug, Deserialize)]
struct StateFrame {
    grid: GridFrame,
    players: Vec<PlayerFrame>,
}

#[derive(Debug, Deserialize)]
struct GridFrame {
    width: u32,
    height: u32,
    /// Row-major occupancy; 0 is empty.
    cells: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct PlayerFrame {
    name: String,
    x: i32,
    y: i32,
}

#[derive(Debug, Serialize)]
struct JoinFrame<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct MoveFrame {
    direction: Direction,
}

fn parse_state_line(line: &str) -> Result<GameState> {
    let frame: StateFrame = serde_json::from_str(line).context("malformed state frame")?;
    let grid = Grid::new(frame.grid.width, frame.grid.height, frame.grid.cells)?;
    let players = frame
        .players
        .into_iter()
        .map(|player| Player::new(player.name, Vec2::new(player.x, player.y)))
        .collect();
    Ok(GameState { grid, players })
}

/// Blocking JSON-lines connection to the arena.
pub struct TcpConnection {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
    active: bool,
}

impl TcpConnection {
    /// Establishes the session: TCP connect plus a join line carrying the
    /// rider's name.
    pub fn connect(addr: &str, name: &str) -> Result<TcpConnection> {
        let stream =
            TcpStream::connect(addr).with_context(|| format!("connect arena server {addr}"))?;
        let reader = BufReader::new(stream.try_clone().context("clone arena stream")?);
        let mut connection = TcpConnection {
            reader,
            writer: stream,
            active: true,
        };
        connection
            .write_line(&JoinFrame { name })
            .context("announce rider name")?;
        Ok(connection)
    }

    fn write_line<T: Serialize>(&mut self, frame: &T) -> Result<()> {
        let mut line = serde_json::to_string(frame)?;
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

impl GameTransport for TcpConnection {
    fn is_active(&self) -> bool {
        self.active
    }

    fn receive_state(&mut self) -> Option<GameState> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                debug!("arena closed the connection");
                self.active = false;
                None
            }
            Ok(_) => match parse_state_line(line.trim_end()) {
                Ok(state) => Some(state),
                Err(err) => {
                    warn!("state frame desync, dropping connection: {err:#}");
                    self.active = false;
                    None
                }
            },
            Err(err) => {
                warn!("receive failed: {err}");
                self.active = false;
                None
            }
        }
    }

    fn send_direction(&mut self, direction: Direction) {
        if let Err(err) = self.write_line(&MoveFrame { direction }) {
            warn!("send failed: {err:#}");
            self.active = false;
        }
    }
}
