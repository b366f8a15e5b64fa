use sysedit_core::geometry::Point;
use sysedit_core::world::{Sprite, StarSystem};

const PLANET_SMALL: Sprite = Sprite {
    width: 48.0,
    height: 48.0,
};
const PLANET_LARGE: Sprite = Sprite {
    width: 96.0,
    height: 96.0,
};
const JUMP_BUOY: Sprite = Sprite {
    width: 32.0,
    height: 32.0,
};

/// Built-in systems to edit; there is no on-disk system format.
pub fn demo_universe() -> Vec<StarSystem> {
    vec![
        StarSystem::new("Sol")
            .with_planet("Earth", Point::new(0.0, 0.0), PLANET_LARGE)
            .with_planet("Mars", Point::new(260.0, -140.0), PLANET_SMALL)
            .with_planet("Saturn", Point::new(-420.0, 220.0), PLANET_LARGE)
            .with_jump("Alpha Centauri", Point::new(900.0, 300.0), JUMP_BUOY)
            .with_jump("Sirius", Point::new(-800.0, -500.0), JUMP_BUOY),
        StarSystem::new("Alpha Centauri")
            .with_planet("Proxima b", Point::new(120.0, 60.0), PLANET_SMALL)
            .with_jump("Sol", Point::new(-700.0, -200.0), JUMP_BUOY),
        StarSystem::new("Sirius")
            .with_planet("Sirius Station", Point::new(-50.0, 350.0), PLANET_SMALL)
            .with_planet("Dogstar", Point::new(300.0, 0.0), PLANET_LARGE)
            .with_jump("Sol", Point::new(650.0, -600.0), JUMP_BUOY),
    ]
}
