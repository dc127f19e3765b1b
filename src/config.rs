use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn scene_load_grace_ms() -> u32 {
    4_000
}

#[cfg(not(debug_assertions))]
pub fn scene_load_grace_ms() -> u32 {
    10_000  // CDN script can be slow on first visit
}

/// Hosted scene shown behind the hero and inside the preview panel.
pub fn scene_url() -> &'static str {
    "https://prod.spline.design/6tUXqVcUA0xgJugv/scene.splinecode"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_url_points_at_a_hosted_scene_file() {
        assert!(scene_url().starts_with("https://"));
        assert!(scene_url().ends_with(".splinecode"));
    }

    #[test]
    fn grace_period_is_non_zero() {
        assert!(scene_load_grace_ms() > 0);
    }
}
