//! Procedural test scene and the scripted walk through it

use slide_engine::prelude::*;

/// Two triangles covering the quad `a b c d`, wound counter-clockwise seen from the front
fn quad(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Vec<Vec3> {
    vec![a, b, c, a, c, d]
}

/// Flat floor at y = 0
pub fn floor() -> Vec<Vec3> {
    quad(
        Vec3::new(-20.0, 0.0, 20.0),
        Vec3::new(20.0, 0.0, 20.0),
        Vec3::new(20.0, 0.0, -20.0),
        Vec3::new(-20.0, 0.0, -20.0),
    )
}

/// Wall across the scene at z = -6, facing the spawn point
pub fn wall() -> Vec<Vec3> {
    quad(
        Vec3::new(-20.0, -1.0, -6.0),
        Vec3::new(20.0, -1.0, -6.0),
        Vec3::new(20.0, 4.0, -6.0),
        Vec3::new(-20.0, 4.0, -6.0),
    )
}

/// Ramp rising two units between x = 3 and x = 8
pub fn ramp() -> Vec<Vec3> {
    quad(
        Vec3::new(3.0, 0.0, 4.0),
        Vec3::new(8.0, 2.0, 4.0),
        Vec3::new(8.0, 2.0, -4.0),
        Vec3::new(3.0, 0.0, -4.0),
    )
}

/// One segment of the scripted walk
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// What the step is doing, for the log
    pub label: &'static str,
    /// How many ticks it lasts
    pub ticks: u32,
    /// Movement held during every tick
    pub direction: Option<MoveDirection>,
    /// Look delta applied once at the start
    pub look: (f32, f32),
}

/// Settle, walk into the wall, back off, turn and cross the ramp, then strafe back to the wall
pub fn script() -> Vec<Step> {
    vec![
        Step { label: "settle", ticks: 120, direction: None, look: (0.0, 0.0) },
        Step { label: "walk into wall", ticks: 120, direction: Some(MoveDirection::Forward), look: (0.0, 0.0) },
        Step { label: "back off", ticks: 40, direction: Some(MoveDirection::Backward), look: (0.0, 0.0) },
        Step { label: "turn and cross ramp", ticks: 80, direction: Some(MoveDirection::Forward), look: (900.0, 0.0) },
        Step { label: "strafe", ticks: 60, direction: Some(MoveDirection::Left), look: (0.0, 0.0) },
        Step { label: "rest", ticks: 60, direction: None, look: (0.0, 0.0) },
    ]
}
