//! Tick-by-tick session: obtain state, locate self, decide, emit.

use rand::Rng;
use tracing::debug;

use crate::bots::CyclePilot;
use crate::connection::GameTransport;
use crate::grid::{Direction, Player, Vec2};

/// One rider's lifetime against one arena: name, policy, the direction
/// chosen last tick, and the last-known own player record.
pub struct BotSession<T: GameTransport> {
    name: String,
    bot: Box<dyn CyclePilot>,
    previous_direction: Option<Direction>,
    rider: Player,
    transport: T,
}

impl<T: GameTransport> BotSession<T> {
    /// Builds a session over an established transport, seeding the bot's
    /// randomness once.
    pub fn new(name: impl Into<String>, mut bot: Box<dyn CyclePilot>, transport: T) -> BotSession<T> {
        let name = name.into();
        bot.reset(rand::rng().random());
        let rider = Player::new(name.clone(), Vec2::ZERO);
        BotSession {
            name,
            bot,
            previous_direction: None,
            rider,
            transport,
        }
    }

    /// The underlying transport, mainly for inspection.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs the tick cycle until the connection reports inactive.
    pub fn run(&mut self) {
        while self.transport.is_active() {
            let Some(state) = self.transport.receive_state() else {
                break;
            };

            // A snapshot without our name keeps the previous record: the
            // position goes stale rather than failing the tick.
            if let Some(rider) = state.player_named(&self.name) {
                self.rider = rider.clone();
            }

            let direction = self
                .bot
                .next_direction(&state, &self.rider, self.previous_direction);
            self.previous_direction = Some(direction);

            debug!("{}: sending move {:?}", self.name, direction);
            self.transport.send_direction(direction);
        }
    }
}
