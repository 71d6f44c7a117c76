//! Axis-aligned overlap tests with a forgiveness margin
//!
//! All gameplay hitboxes are AABBs around entity centers. The margin is
//! subtracted from the summed half-extents so near-misses stay misses, which
//! reads as generous to the player. Rock polygons are silhouette flavor only;
//! collision always uses the bounding box.

use glam::Vec2;

/// Center-based AABB overlap with `margin` pixels of forgiveness.
///
/// A non-positive effective extent on either axis can never overlap, so a
/// large margin degrades safely to "nothing collides" rather than inverting.
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2, margin: f32) -> bool {
    let extent = (a_size + b_size) * 0.5 - Vec2::splat(margin);
    if extent.x <= 0.0 || extent.y <= 0.0 {
        return false;
    }
    let delta = a_pos - b_pos;
    delta.x.abs() < extent.x && delta.y.abs() < extent.y
}

/// True once `pos` has left the viewport by more than `slack` on any side.
#[inline]
pub fn off_screen(pos: Vec2, size: Vec2, width: f32, height: f32, slack: f32) -> bool {
    let half = size * 0.5;
    pos.y - half.y > height + slack
        || pos.y + half.y < -slack
        || pos.x - half.x > width + slack
        || pos.x + half.x < -slack
}
