/// Why the pinned horizontal effect is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    MissingSection,
    MissingTrack,
    ReducedMotion,
}

/// Whether the pinned horizontal effect runs on this page. Decided once
/// at startup; event handlers never re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionCapability {
    Enabled,
    Disabled(DisabledReason),
}

impl MotionCapability {
    pub fn negotiate(has_section: bool, has_track: bool, prefers_reduced_motion: bool) -> Self {
        if !has_section {
            MotionCapability::Disabled(DisabledReason::MissingSection)
        } else if !has_track {
            MotionCapability::Disabled(DisabledReason::MissingTrack)
        } else if prefers_reduced_motion {
            MotionCapability::Disabled(DisabledReason::ReducedMotion)
        } else {
            MotionCapability::Enabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == MotionCapability::Enabled
    }

    /// Negotiate and hand back the section and track when the effect is on.
    pub fn acquire<S, T>(
        section: Option<S>,
        track: Option<T>,
        prefers_reduced_motion: bool,
    ) -> Result<(S, T), DisabledReason> {
        match (section, track) {
            (Some(section), Some(track)) if !prefers_reduced_motion => Ok((section, track)),
            (section, track) => Err(
                match Self::negotiate(section.is_some(), track.is_some(), prefers_reduced_motion) {
                    MotionCapability::Disabled(reason) => reason,
                    MotionCapability::Enabled => DisabledReason::ReducedMotion,
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_only_with_both_elements_and_motion_allowed() {
        assert!(MotionCapability::negotiate(true, true, false).is_enabled());
        assert_eq!(
            MotionCapability::negotiate(true, true, true),
            MotionCapability::Disabled(DisabledReason::ReducedMotion)
        );
        assert_eq!(
            MotionCapability::negotiate(false, true, false),
            MotionCapability::Disabled(DisabledReason::MissingSection)
        );
        assert_eq!(
            MotionCapability::negotiate(true, false, true),
            MotionCapability::Disabled(DisabledReason::MissingTrack)
        );
    }

    #[test]
    fn acquire_returns_both_elements() {
        assert_eq!(MotionCapability::acquire(Some(1), Some("t"), false), Ok((1, "t")));
        assert_eq!(
            MotionCapability::acquire(Some(1), None::<&str>, false),
            Err(DisabledReason::MissingTrack)
        );
        assert_eq!(
            MotionCapability::acquire(Some(1), Some("t"), true),
            Err(DisabledReason::ReducedMotion)
        );
    }
}
