/// Pure game-logic functions.
///
/// Every public transition takes an immutable reference to the current
/// `GameState` and returns a brand-new `GameState`.  The only side effect
/// is tracing output.

use tracing::{debug, info};

use crate::entities::{Enemy, Entity, EntityKind, Obstacle, Player, Projectile, Spawnable};
use crate::tuning::{
    FIRE_EXPIRY_TICKS, JUMP_IMPULSE, JUMP_WINDOW, THROW_OFFSET, TUBE_POSITIONS, TUBE_WIDTH,
    WALK_STEP,
};

// ── State ─────────────────────────────────────────────────────────────────────

/// The whole simulated world.
///
/// Entities are kept in spawn order, which is also draw order.  Slot 0 is
/// always the player: it is placed there by [`GameState::new`] and nothing
/// can insert a second player or remove the first.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    entities: Vec<Entity>,
    /// Number of ticks simulated so far.
    pub frame: u64,
}

impl GameState {
    /// An empty level containing only `player`.
    pub fn new(player: Player) -> Self {
        GameState {
            entities: vec![Entity::Player(player)],
            frame: 0,
        }
    }

    /// Builder form of [`GameState::spawn`].
    pub fn with(mut self, entity: impl Spawnable) -> Self {
        self.spawn(entity);
        self
    }

    /// Append an obstacle, enemy or projectile.  Players are not
    /// [`Spawnable`], so the one passed to [`GameState::new`] stays unique.
    pub fn spawn(&mut self, entity: impl Spawnable) {
        self.entities.push(entity.into());
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn player(&self) -> &Player {
        match self.entities.first() {
            Some(Entity::Player(p)) => p,
            _ => unreachable!("slot 0 always holds the player"),
        }
    }

    pub fn player_mut(&mut self) -> &mut Player {
        match self.entities.first_mut() {
            Some(Entity::Player(p)) => p,
            _ => unreachable!("slot 0 always holds the player"),
        }
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Obstacle(o) => Some(o),
            _ => None,
        })
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Enemy(en) => Some(en),
            _ => None,
        })
    }

    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Projectile(p) => Some(p),
            _ => None,
        })
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the starting level: the player, the tubes, and one enemy just to
/// the right of every tube except the last.
pub fn init_state() -> GameState {
    let mut state = GameState::new(Player::default());
    for &(x, y) in TUBE_POSITIONS.iter() {
        state.spawn(Obstacle::tube(x, y));
    }
    for &(x, _) in TUBE_POSITIONS[..TUBE_POSITIONS.len() - 1].iter() {
        state.spawn(Enemy::new(x + TUBE_WIDTH));
    }
    info!(
        obstacles = state.obstacles().count(),
        enemies = state.enemies().count(),
        "level built"
    );
    state
}

// ── Collision ─────────────────────────────────────────────────────────────────

/// Whether two distinct entities overlap.  An entity never collides with
/// itself; boxes that only touch along an edge do collide.
pub fn collides(a: &Entity, b: &Entity) -> bool {
    if std::ptr::eq(a, b) {
        return false;
    }
    a.rect().overlaps(&b.rect())
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    let player = next.player_mut();
    player.x -= WALK_STEP;
    player.anim_counter += 1;
    next
}

pub fn move_player_right(state: &GameState) -> GameState {
    let mut next = state.clone();
    let player = next.player_mut();
    player.x += WALK_STEP;
    player.anim_counter += 1;
    next
}

/// Push the player upwards if it stood on something recently enough.
/// Holding the key keeps adding impulse until the window closes.
pub fn jump(state: &GameState) -> GameState {
    let mut next = state.clone();
    let player = next.player_mut();
    if player.frames_since_ground < JUMP_WINDOW {
        player.velocity -= JUMP_IMPULSE;
    }
    next
}

/// Throw a projectile from the player's current position.
pub fn spawn_projectile(state: &GameState) -> GameState {
    let mut next = state.clone();
    let (x, y) = {
        let p = next.player();
        (p.x + THROW_OFFSET.0, p.y + THROW_OFFSET.1)
    };
    next.spawn(Projectile::new(x, y));
    debug!(x, y, "projectile thrown");
    next
}

// ── Per-frame tick ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick:
///
/// 1. every entity advances on its own,
/// 2. the player is pushed out of any obstacle it entered,
/// 3. pairwise rules fire (enemies turn at obstacles, projectiles ignite
///    enemies),
/// 4. at most one burnt-out enemy is removed.
pub fn tick(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.frame += 1;

    for entity in next.entities.iter_mut() {
        entity.advance();
    }

    resolve_player_obstacles(&mut next.entities);

    let interactions = find_interactions(&next.entities);
    apply_interactions(&mut next.entities, &interactions);

    expire_burnt_enemy(&mut next.entities, next.frame);

    next
}

/// Snap the player out of every obstacle it overlaps.  The side is chosen
/// from the last confirmed position, which only moves on ticks without
/// any obstacle contact.
fn resolve_player_obstacles(entities: &mut [Entity]) {
    let Some((Entity::Player(player), rest)) = entities.split_first_mut() else {
        return;
    };

    let mut colliding = false;
    for entity in rest.iter() {
        let Entity::Obstacle(obstacle) = entity else {
            continue;
        };
        if !player.rect().overlaps(&obstacle.rect()) {
            continue;
        }
        colliding = true;

        let s = obstacle.rect();
        if player.py + player.height <= s.y {
            // Landed on top.
            player.y = s.y - player.height;
            player.velocity = 0.0;
        } else if player.py >= s.bottom() {
            // Bumped the underside.
            player.y = s.bottom();
            player.velocity = 0.0;
        } else if player.px + player.width <= s.x {
            player.x = s.x - player.width;
        } else if player.px >= s.right() {
            player.x = s.right();
        }

        // Any contact counts as footing, so walls allow a buffered jump.
        player.frames_since_ground = 0;
    }

    if !colliding {
        player.px = player.x;
        player.py = player.y;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Interaction {
    TurnAround(usize),
    Ignite(usize),
}

/// Every ordered pair of colliding entities, reduced to the rules that fire.
/// Each rule only changes direction or fire state, never a box, so
/// collecting first and applying afterwards matches in-place evaluation.
fn find_interactions(entities: &[Entity]) -> Vec<Interaction> {
    let mut found = Vec::new();
    for (i, s1) in entities.iter().enumerate() {
        for (j, s2) in entities.iter().enumerate() {
            if !collides(s1, s2) {
                continue;
            }
            match (s1.kind(), s2.kind()) {
                (EntityKind::Enemy, EntityKind::Obstacle) => {
                    found.push(Interaction::TurnAround(i));
                }
                (EntityKind::Projectile, EntityKind::Enemy) => {
                    found.push(Interaction::Ignite(j));
                }
                _ => {}
            }
        }
    }
    found
}

fn apply_interactions(entities: &mut [Entity], interactions: &[Interaction]) {
    for interaction in interactions {
        match *interaction {
            Interaction::TurnAround(i) => {
                if let Some(Entity::Enemy(enemy)) = entities.get_mut(i) {
                    enemy.turn_around();
                }
            }
            Interaction::Ignite(i) => {
                if let Some(Entity::Enemy(enemy)) = entities.get_mut(i) {
                    if !enemy.is_on_fire() {
                        debug!(index = i, x = enemy.x, "enemy ignited");
                    }
                    enemy.ignite();
                }
            }
        }
    }
}

/// Remove the first enemy (in spawn order) that has burnt for longer than
/// the expiry threshold.  Only one removal happens per tick.
fn expire_burnt_enemy(entities: &mut Vec<Entity>, frame: u64) {
    let burnt = entities.iter().position(|e| match e {
        Entity::Enemy(enemy) => enemy.fire_ticks() > FIRE_EXPIRY_TICKS,
        _ => false,
    });
    if let Some(index) = burnt {
        entities.remove(index);
        debug!(index, frame, "burnt enemy removed");
    }
}
