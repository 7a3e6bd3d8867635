//! Per-tick input snapshot
//!
//! The external input source hands the simulation one of these per physics
//! tick: the movement intents currently held and the pointer delta since the
//! previous tick. The core never polls devices itself.

use glam::Vec2;

/// Movement intents and look delta for one physics tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub ascend: bool,
    pub descend: bool,
    /// Pointer movement since the last tick, in device units
    pub look_delta: Vec2,
}

impl InputSnapshot {
    /// Snapshot with nothing pressed and no pointer movement
    pub fn idle() -> Self {
        Self::default()
    }

    /// Movement intent as signed axes: (forward-back, right-left, up-down)
    ///
    /// Opposing intents cancel.
    pub fn move_axes(&self) -> (f32, f32, f32) {
        let axis = |pos: bool, neg: bool| (pos as i8 - neg as i8) as f32;
        (
            axis(self.forward, self.backward),
            axis(self.strafe_right, self.strafe_left),
            axis(self.ascend, self.descend),
        )
    }

    /// True when the pointer moved this tick
    ///
    /// A zero delta means "no look update": callers skip the yaw/pitch
    /// recomputation entirely rather than re-deriving an unchanged basis.
    pub fn has_look(&self) -> bool {
        self.look_delta != Vec2::ZERO
    }

    /// True when any movement intent is held
    pub fn has_movement(&self) -> bool {
        self.forward
            || self.backward
            || self.strafe_left
            || self.strafe_right
            || self.ascend
            || self.descend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_snapshot() {
        let input = InputSnapshot::idle();
        assert!(!input.has_movement());
        assert!(!input.has_look());
        assert_eq!(input.move_axes(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_opposing_intents_cancel() {
        let input = InputSnapshot {
            forward: true,
            backward: true,
            strafe_right: true,
            ..Default::default()
        };
        assert_eq!(input.move_axes(), (0.0, 1.0, 0.0));
        assert!(input.has_movement());
    }

    #[test]
    fn test_look_detection() {
        let mut input = InputSnapshot::idle();
        assert!(!input.has_look());

        input.look_delta = Vec2::new(3.0, -1.0);
        assert!(input.has_look());
    }
}
