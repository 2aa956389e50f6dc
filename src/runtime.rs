// Copyright (c) 2026 rezky_nightky

use std::io::{Error, ErrorKind, Result};
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEventKind};
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::FRAME_INTERVAL;
use crate::droplet::{Droplet, Rain};
use crate::frame::Frame;
use crate::input::Events;
use crate::noise::NoiseField;
use crate::splash::render_rain;
use crate::terminal::Backend;
use crate::terrain::Terrain;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Owns everything drawn on screen and paces it at a fixed frame rate until
/// a key is pressed.
pub struct Scheduler<B: Backend> {
    backend: B,
    events: Events,
    frame: Frame,
    terrain: Terrain,
    rain: Rain,
    drops: Vec<Droplet>,
    rng: StdRng,
    interval: Duration,
    state: RunState,
}

fn input_closed() -> Error {
    Error::new(ErrorKind::BrokenPipe, "input watcher stopped")
}

impl<B: Backend> Scheduler<B> {
    pub fn new(backend: B, events: Events, rng: StdRng) -> Result<Self> {
        let (w, h) = backend.size()?;
        info!(width = w, height = h, "starting");
        Ok(Self {
            backend,
            events,
            frame: Frame::new(w, h),
            terrain: Terrain::new(NoiseField::new()),
            rain: Rain::new(w, h),
            drops: Vec::new(),
            rng,
            interval: FRAME_INTERVAL,
            state: RunState::Running,
        })
    }

    #[cfg(test)]
    fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        let mut next_frame = Instant::now();
        while self.state == RunState::Running {
            self.poll_input()?;
            if self.state == RunState::Stopped {
                break;
            }

            self.tick()?;

            next_frame += self.interval;
            self.wait_until(next_frame)?;
            let now = Instant::now();
            if now > next_frame {
                next_frame = now;
            }
        }
        info!(drops = self.drops.len(), "stopped");
        Ok(())
    }

    fn tick(&mut self) -> Result<()> {
        debug!(drops = ?self.drops, "tick");
        self.terrain.render_ground(&mut self.frame);
        render_rain(&mut self.frame, &mut self.backend, &mut self.drops)?;
        let drops = std::mem::take(&mut self.drops);
        self.drops = self.rain.advance(drops, &mut self.rng);
        Ok(())
    }

    /// Handles whatever input is already queued, without blocking.
    fn poll_input(&mut self) -> Result<()> {
        while self.state == RunState::Running {
            match self.events.try_recv() {
                Ok(ev) => self.handle(ev?),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Err(input_closed()),
            }
        }
        Ok(())
    }

    /// Sleeps until `deadline`, waking early only to stop.
    fn wait_until(&mut self, deadline: Instant) -> Result<()> {
        while self.state == RunState::Running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            match self.events.recv_timeout(timeout) {
                Ok(ev) => self.handle(ev?),
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return Err(input_closed()),
            }
        }
        Ok(())
    }

    fn handle(&mut self, ev: Event) {
        match ev {
            Event::Key(k) if k.kind == KeyEventKind::Press => {
                self.state = RunState::Stopped;
            }
            Event::Resize(w, h) => {
                debug!(width = w, height = h, "resize");
                self.frame = Frame::new(w, h);
                self.rain.resize(w, h);
            }
            _ => {}
        }
    }
}
