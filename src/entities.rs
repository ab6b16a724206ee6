/// Game entity types and their per-tick behaviour.
///
/// Every entity knows how to advance itself by one tick and where it sits
/// on screen for a given camera offset.  Nothing in this module looks at
/// more than one entity at a time; cross-entity rules live in `compute`.

use crate::tuning::{
    ANIMATION_FRAMES, CAMERA_ANCHOR_X, ENEMY_HEIGHT, ENEMY_SPEED, ENEMY_WIDTH, FLOOR_Y, GRAVITY,
    PLAYER_GROUND_Y, PLAYER_HEIGHT, PLAYER_START_X, PLAYER_START_Y, PLAYER_WIDTH,
    PROJECTILE_ANCHOR_X, PROJECTILE_BOUNCE_VELOCITY, PROJECTILE_GRAVITY, PROJECTILE_SIZE,
    PROJECTILE_SPEED, TICKS_PER_ANIMATION_FRAME, TUBE_HEIGHT, TUBE_WIDTH,
};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in world pixels.  `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// True unless one box lies strictly to one side of the other.
    /// Boxes that merely share an edge overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }
}

// ── Kinds ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Obstacle,
    Enemy,
    Projectile,
}

/// The controllable character.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity, positive = falling.
    pub velocity: f32,
    /// Ticks since the player last stood on the floor or an obstacle.
    pub frames_since_ground: u32,
    /// Last position at which the player touched no obstacle.
    pub px: f32,
    pub py: f32,
    /// Bumped by the controller on every horizontal step.
    pub anim_counter: usize,
    /// Sprite frame chosen on the last advance, in `0..ANIMATION_FRAMES`.
    pub frame: usize,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            x,
            y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            velocity: 0.0,
            frames_since_ground: 0,
            px: x,
            py: y,
            anim_counter: 0,
            frame: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn advance(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
        self.frames_since_ground += 1;
        self.frame = (self.anim_counter / TICKS_PER_ANIMATION_FRAME) % ANIMATION_FRAMES;
        if self.y >= PLAYER_GROUND_Y {
            self.velocity = 0.0;
            self.y = PLAYER_GROUND_Y;
            self.frames_since_ground = 0;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new(PLAYER_START_X, PLAYER_START_Y)
    }
}

/// Static level geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Obstacle {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// A tube of the standard size.
    pub fn tube(x: f32, y: f32) -> Self {
        Obstacle::new(x, y, TUBE_WIDTH, TUBE_HEIGHT)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A patrolling enemy.  Once set on fire it burns until removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub moving_right: bool,
    on_fire: bool,
    fire_ticks: u32,
}

impl Enemy {
    /// An enemy standing on the floor at `x`, walking right.
    pub fn new(x: f32) -> Self {
        Enemy {
            x,
            y: FLOOR_Y - ENEMY_HEIGHT,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            moving_right: true,
            on_fire: false,
            fire_ticks: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn ignite(&mut self) {
        self.on_fire = true;
    }

    pub fn is_on_fire(&self) -> bool {
        self.on_fire
    }

    /// Ticks spent burning so far.
    pub fn fire_ticks(&self) -> u32 {
        self.fire_ticks
    }

    pub fn turn_around(&mut self) {
        self.moving_right = !self.moving_right;
    }

    fn advance(&mut self) {
        if self.moving_right {
            self.x += ENEMY_SPEED;
        } else {
            self.x -= ENEMY_SPEED;
        }
        if self.on_fire {
            self.fire_ticks += 1;
        }
    }
}

/// A thrown fireball that skips along the floor.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity: f32,
}

impl Projectile {
    pub fn new(x: f32, y: f32) -> Self {
        Projectile {
            x,
            y,
            width: PROJECTILE_SIZE,
            height: PROJECTILE_SIZE,
            velocity: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn advance(&mut self) {
        self.x += PROJECTILE_SPEED;
        self.velocity += PROJECTILE_GRAVITY;
        self.y += self.velocity;
        let floor = FLOOR_Y - self.height;
        if self.y >= floor {
            self.velocity = PROJECTILE_BOUNCE_VELOCITY;
            self.y = floor;
        }
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Player(Player),
    Obstacle(Obstacle),
    Enemy(Enemy),
    Projectile(Projectile),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Player(_) => EntityKind::Player,
            Entity::Obstacle(_) => EntityKind::Obstacle,
            Entity::Enemy(_) => EntityKind::Enemy,
            Entity::Projectile(_) => EntityKind::Projectile,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            Entity::Player(p) => p.rect(),
            Entity::Obstacle(o) => o.rect(),
            Entity::Enemy(e) => e.rect(),
            Entity::Projectile(p) => p.rect(),
        }
    }

    /// Advance this entity alone by one tick.
    pub fn advance(&mut self) {
        match self {
            Entity::Player(p) => p.advance(),
            Entity::Obstacle(_) => {}
            Entity::Enemy(e) => e.advance(),
            Entity::Projectile(p) => p.advance(),
        }
    }

    /// Screen rectangle for a camera whose left edge follows `offset`
    /// (the player's world x).  The player itself stays pinned.
    pub fn draw_rect(&self, offset: f32) -> Rect {
        let r = self.rect();
        let x = match self {
            Entity::Player(_) => CAMERA_ANCHOR_X,
            Entity::Obstacle(_) | Entity::Enemy(_) => r.x - offset + CAMERA_ANCHOR_X,
            Entity::Projectile(_) => r.x - offset + PROJECTILE_ANCHOR_X,
        };
        Rect { x, ..r }
    }
}

/// Kinds that may join a level after it is built.  `Player` and `Entity`
/// are left out so a state can never hold a second player.
pub trait Spawnable: Into<Entity> {}

impl Spawnable for Obstacle {}
impl Spawnable for Enemy {}
impl Spawnable for Projectile {}

impl From<Obstacle> for Entity {
    fn from(o: Obstacle) -> Self {
        Entity::Obstacle(o)
    }
}

impl From<Enemy> for Entity {
    fn from(e: Enemy) -> Self {
        Entity::Enemy(e)
    }
}

impl From<Projectile> for Entity {
    fn from(p: Projectile) -> Self {
        Entity::Projectile(p)
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Which logical keys are held during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub throw: bool,
    pub quit: bool,
}
