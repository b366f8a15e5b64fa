use std::fmt;

use crate::geometry::Point;

/// Pixel extents of an object's sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub width: f64,
    pub height: f64,
}

impl Sprite {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

#[derive(Clone, Debug)]
pub struct Planet {
    pub name: String,
    pub pos: Point,
    pub sprite: Sprite,
}

/// Inter-system travel node.
#[derive(Clone, Debug)]
pub struct JumpPoint {
    pub target: String,
    pub pos: Point,
    pub sprite: Sprite,
}

/// Identifies a placeable object within one `StarSystem`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectId {
    Planet(usize),
    Jump(usize),
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planet(i) => write!(f, "planet #{i}"),
            Self::Jump(i) => write!(f, "jump #{i}"),
        }
    }
}

/// View of anything the editor can draw and pick.
#[derive(Clone, Copy, Debug)]
pub struct Placeable {
    pub id: ObjectId,
    pub pos: Point,
    pub sprite: Sprite,
}

#[derive(Clone, Debug, Default)]
pub struct StarSystem {
    pub name: String,
    pub planets: Vec<Planet>,
    pub jumps: Vec<JumpPoint>,
}

impl StarSystem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_planet(mut self, name: impl Into<String>, pos: Point, sprite: Sprite) -> Self {
        self.planets.push(Planet {
            name: name.into(),
            pos,
            sprite,
        });
        self
    }

    pub fn with_jump(mut self, target: impl Into<String>, pos: Point, sprite: Sprite) -> Self {
        self.jumps.push(JumpPoint {
            target: target.into(),
            pos,
            sprite,
        });
        self
    }

    /// Planets first, then jump points; this is also the draw order.
    pub fn placeables(&self) -> impl Iterator<Item = Placeable> + '_ {
        let planets = self.planets.iter().enumerate().map(|(i, p)| Placeable {
            id: ObjectId::Planet(i),
            pos: p.pos,
            sprite: p.sprite,
        });
        let jumps = self.jumps.iter().enumerate().map(|(i, j)| Placeable {
            id: ObjectId::Jump(i),
            pos: j.pos,
            sprite: j.sprite,
        });
        planets.chain(jumps)
    }

    /// Human-readable name, e.g. "Earth" or "Jump to Sol".
    pub fn label(&self, id: ObjectId) -> Option<String> {
        match id {
            ObjectId::Planet(i) => self.planets.get(i).map(|p| p.name.clone()),
            ObjectId::Jump(i) => self.jumps.get(i).map(|j| format!("Jump to {}", j.target)),
        }
    }
}
