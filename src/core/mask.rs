use super::particle::ParticlePool;

/// One ellipse of the reveal mask, in surface coordinates. The union of
/// these over all slots is the revealed region.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaskEllipse {
    pub center_x: f32,
    pub center_y: f32,
    pub radius_x: f32,
    pub radius_y: f32,
    pub rotation_deg: f32,
}

impl MaskEllipse {
    /// SVG `transform` attribute rotating the ellipse about its center.
    pub fn rotation_transform(&self) -> String {
        format!(
            "rotate({:.3} {:.3} {:.3})",
            self.rotation_deg, self.center_x, self.center_y
        )
    }
}

/// Read every slot's current axes into `out`, one descriptor per slot in
/// pool order. Radii are clamped here, not in the spring model: a spring
/// driven toward zero with leftover velocity transiently undershoots, and
/// this boundary is where that transient is corrected.
pub fn compose_into(pool: &ParticlePool, out: &mut Vec<MaskEllipse>) {
    out.clear();
    out.reserve(pool.capacity());
    for p in pool.particles() {
        out.push(MaskEllipse {
            center_x: p.x.read(),
            center_y: p.y.read(),
            radius_x: p.width.read().max(0.0),
            radius_y: p.height.read().max(0.0),
            rotation_deg: p.rotation.read(),
        });
    }
}
