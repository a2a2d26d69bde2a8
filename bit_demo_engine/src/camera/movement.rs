/// Pending movement intent recorded between two camera updates.

use bitflags::bitflags;

bitflags! {
    /// Directions requested since the last `FlyCamera::update`.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MovementFlags: u8 {
        const FORWARD  = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT     = 1 << 2;
        const RIGHT    = 1 << 3;
    }
}

impl MovementFlags {
    /// Drop opposing pairs: forward+backward and left+right cancel out.
    pub fn resolve_conflicts(self) -> Self {
        let mut flags = self;
        let longitudinal = MovementFlags::FORWARD | MovementFlags::BACKWARD;
        let lateral = MovementFlags::LEFT | MovementFlags::RIGHT;
        if flags.contains(longitudinal) {
            flags.remove(longitudinal);
        }
        if flags.contains(lateral) {
            flags.remove(lateral);
        }
        flags
    }

    /// Signed (forward, right) axis factors, each in {-1, 0, 1}.
    ///
    /// Call on resolved flags; with both flags of a pair set the pair nets to 0.
    pub fn axes(self) -> (f32, f32) {
        let axis = |positive: MovementFlags, negative: MovementFlags| {
            let mut value = 0.0;
            if self.contains(positive) {
                value += 1.0;
            }
            if self.contains(negative) {
                value -= 1.0;
            }
            value
        };
        (
            axis(MovementFlags::FORWARD, MovementFlags::BACKWARD),
            axis(MovementFlags::RIGHT, MovementFlags::LEFT),
        )
    }
}

#[cfg(test)]
#[path = "movement_tests.rs"]
mod tests;
