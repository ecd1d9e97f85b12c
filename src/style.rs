use orbit_core::ItemPose;

// CSS text for one item pose. Items sit at `left/top: 50%` and are moved
// relative to their own centre, so the translate starts from -50%.

#[inline]
pub fn transform_css(pose: &ItemPose) -> String {
    format!(
        "translate(calc(-50% + {:.2}px), calc(-50% + {:.2}px)) scale({:.4})",
        pose.offset.x, pose.offset.y, pose.scale
    )
}

#[inline]
pub fn opacity_css(pose: &ItemPose) -> String {
    format!("{:.3}", pose.opacity)
}

#[inline]
pub fn z_index_css(pose: &ItemPose) -> String {
    pose.z_index.to_string()
}
