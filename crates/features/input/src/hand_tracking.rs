use serde::{Deserialize, Serialize};
use xrkit_kernel::KernelError;
use xrkit_kernel::inheritance::{Inherit, InheritanceResolver};

/// Hand joints a tracking provider can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedHandJoint {
    Wrist,
    Palm,
    ThumbTip,
    IndexKnuckle,
    IndexTip,
    MiddleTip,
    RingTip,
    PinkyTip,
}

/// Hand tracking knobs. A device-specific instance overrides the global one
/// field by field through [`Inherit`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HandTrackingSettings {
    pub joint_visualization: bool,
    pub mesh_visualization: bool,
    /// Frames averaged by pose smoothing.
    pub smoothing_window: u32,
    /// Thumb-to-index distance, in metres, below which a pinch is reported.
    pub pinch_threshold: f32,
    /// Joints published to consumers; must not end up empty.
    pub tracked_joints: Vec<TrackedHandJoint>,
}

impl Inherit for HandTrackingSettings {
    fn inherit_from(&self, parent: &Self, owner: &str) -> Result<Self, KernelError> {
        let resolver = InheritanceResolver::new(owner, self, parent);
        Ok(Self {
            joint_visualization: resolver.field(|s| &s.joint_visualization),
            mesh_visualization: resolver.field(|s| &s.mesh_visualization),
            smoothing_window: resolver.field(|s| &s.smoothing_window),
            pinch_threshold: resolver.field(|s| &s.pinch_threshold),
            tracked_joints: resolver
                .required_list("tracked_joints", |s| s.tracked_joints.as_slice())?,
        })
    }
}
