//! Ball and paddle entities
//!
//! Dumb position/velocity holders. `step` applies velocity with no bounds
//! checking (callers veto illegal moves first), and the setters are
//! unconditional; all legality lives in the rules.

use glam::IVec2;

use crate::platform::{Platform, SpriteRegion};

/// The ball. Position is the center of the circle; the sprite region is a
/// square of side 2 x radius.
#[derive(Debug, Clone)]
pub struct Ball {
    center: IVec2,
    velocity: IVec2,
    radius: i32,
    region: SpriteRegion,
}

impl Ball {
    pub fn new(center: IVec2, radius: i32, region: SpriteRegion) -> Self {
        Self {
            center,
            velocity: IVec2::ZERO,
            radius,
            region,
        }
    }

    /// Advance by one tick's velocity.
    pub fn step(&mut self) {
        self.center += self.velocity;
    }

    /// Draw the sprite centered on the ball position.
    pub fn draw(&self, platform: &mut dyn Platform) {
        platform.draw_sprite(
            self.center.x - self.radius,
            self.center.y - self.radius,
            &self.region,
        );
    }

    pub fn center(&self) -> IVec2 {
        self.center
    }

    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.center = center;
    }

    pub fn set_velocity(&mut self, velocity: IVec2) {
        self.velocity = velocity;
    }
}

/// A paddle. Position is the top-left corner; width and height come from the
/// sprite region and never change.
#[derive(Debug, Clone)]
pub struct Paddle {
    origin: IVec2,
    velocity: IVec2,
    region: SpriteRegion,
}

impl Paddle {
    pub fn new(origin: IVec2, region: SpriteRegion) -> Self {
        Self {
            origin,
            velocity: IVec2::ZERO,
            region,
        }
    }

    /// Advance by one tick's velocity.
    pub fn step(&mut self) {
        self.origin += self.velocity;
    }

    pub fn draw(&self, platform: &mut dyn Platform) {
        platform.draw_sprite(self.origin.x, self.origin.y, &self.region);
    }

    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    pub fn width(&self) -> i32 {
        self.region.w as i32
    }

    pub fn height(&self) -> i32 {
        self.region.h as i32
    }

    pub fn left(&self) -> i32 {
        self.origin.x
    }

    pub fn right(&self) -> i32 {
        self.origin.x + self.width()
    }

    pub fn top(&self) -> i32 {
        self.origin.y
    }

    pub fn bottom(&self) -> i32 {
        self.origin.y + self.height()
    }

    pub fn set_origin(&mut self, origin: IVec2) {
        self.origin = origin;
    }

    pub fn set_velocity(&mut self, velocity: IVec2) {
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(w: u32, h: u32) -> SpriteRegion {
        SpriteRegion { x: 0, y: 0, w, h }
    }

    #[test]
    fn step_adds_velocity_without_bounds_checks() {
        let mut ball = Ball::new(IVec2::new(10, 10), 7, region(14, 14));
        ball.set_velocity(IVec2::new(-25, 3));
        ball.step();
        assert_eq!(ball.center(), IVec2::new(-15, 13));
    }

    #[test]
    fn paddle_edges_derive_from_region() {
        let paddle = Paddle::new(IVec2::new(220, 385), region(60, 15));
        assert_eq!(paddle.left(), 220);
        assert_eq!(paddle.right(), 280);
        assert_eq!(paddle.top(), 385);
        assert_eq!(paddle.bottom(), 400);
    }
}
