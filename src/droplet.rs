// Copyright (c) 2026 rezky_nightky

use rand::Rng;

use crate::config::{AGE_ODDS, MAX_AGE, MAX_SPAWN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Droplet {
    pub x: i32,
    pub y: i32,
    pub age: u32,
}

/// Spawns and ages droplets for a screen of the given size.
#[derive(Clone, Copy, Debug)]
pub struct Rain {
    width: u16,
    height: u16,
}

impl Rain {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// A fresh droplet at x in [2, width-1), y in [2, height-1). `None` when
    /// the screen is too small to hold one.
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Droplet> {
        let (w, h) = (self.width as i32, self.height as i32);
        if w - 1 <= 2 || h - 1 <= 2 {
            return None;
        }
        Some(Droplet {
            x: rng.random_range(2..w - 1),
            y: rng.random_range(2..h - 1),
            age: 0,
        })
    }

    /// Ages each droplet with 1-in-3 odds, culls the expired ones and adds
    /// up to six new ones.
    pub fn advance<R: Rng + ?Sized>(&self, drops: Vec<Droplet>, rng: &mut R) -> Vec<Droplet> {
        let spawns = rng.random_range(0..MAX_SPAWN);
        self.advance_with(drops, spawns, rng)
    }

    fn advance_with<R: Rng + ?Sized>(
        &self,
        drops: Vec<Droplet>,
        spawns: usize,
        rng: &mut R,
    ) -> Vec<Droplet> {
        let mut next = survivors(drops, || rng.random_ratio(AGE_ODDS.0, AGE_ODDS.1));
        next.extend((0..spawns).filter_map(|_| self.spawn(rng)));
        next
    }
}

fn survivors(drops: Vec<Droplet>, mut ages: impl FnMut() -> bool) -> Vec<Droplet> {
    drops
        .into_iter()
        .filter_map(|mut d| {
            if ages() {
                d.age += 1;
            }
            (d.age < MAX_AGE).then_some(d)
        })
        .collect()
}
