//! Seeded random snapshots shared by the integration tests.

#![allow(dead_code)]

use forlorn_networking::{
    Blade, Coin, Collider, ColliderKind, GameSnapshot, MapSnapshot, PlayerInfo, Projectile, Weapon,
};
use forlorn_shared::{Point, SAVE_SIZE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn point(rng: &mut impl Rng) -> Point {
    Point::new(rng.gen_range(-10.0..110.0), rng.gen_range(-10.0..110.0))
}

fn uuid(rng: &mut impl Rng) -> Uuid {
    Uuid::from_bytes(rng.gen())
}

fn name(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(0..12);
    (0..len).map(|_| char::from(rng.gen_range(b'a'..=b'z'))).collect()
}

pub fn player(rng: &mut impl Rng) -> PlayerInfo {
    let projectiles = (0..rng.gen_range(0..4))
        .map(|_| Projectile { id: uuid(rng), pos: point(rng), dest: point(rng) })
        .collect();
    PlayerInfo {
        name: name(rng),
        color: rng.gen(),
        health: rng.gen_range(-20..=100),
        score: rng.gen(),
        pos: point(rng),
        dest: if rng.gen_bool(0.5) { Some(point(rng)) } else { None },
        weapon: match rng.gen_range(0..3) {
            0 => Weapon::None,
            1 => Weapon::Canon,
            _ => Weapon::Blade,
        },
        projectiles,
        blade: Blade {
            start: point(rng),
            end: point(rng),
            rotation: rng.gen_range(0.0..std::f64::consts::TAU),
        },
    }
}

pub fn game_snapshot(rng: &mut impl Rng) -> GameSnapshot {
    GameSnapshot {
        tick: rng.gen_range(0..100_000),
        round: rng.gen_range(0..3),
        players: (0..rng.gen_range(0..5)).map(|_| player(rng)).collect(),
        coins: (0..rng.gen_range(0..8))
            .map(|_| Coin { id: uuid(rng), pos: point(rng), value: rng.gen_range(1..1200) })
            .collect(),
    }
}

pub fn map_snapshot(rng: &mut impl Rng) -> MapSnapshot {
    let side: u8 = rng.gen_range(0..12);
    let discrete_grid = (0..side)
        .map(|_| (0..side).map(|_| rng.gen_range(0..2)).collect())
        .collect();
    let walls = (0..rng.gen_range(0..6))
        .map(|_| Collider {
            kind: if rng.gen_bool(0.9) { ColliderKind::Wall } else { ColliderKind::Projectile },
            vertices: (0..rng.gen_range(0..6)).map(|_| point(rng)).collect(),
        })
        .collect();
    let mut private_save = [0u8; SAVE_SIZE];
    rng.fill(&mut private_save[..]);
    MapSnapshot {
        grid_size: side,
        discrete_grid,
        walls,
        private_save,
    }
}
