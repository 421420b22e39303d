use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

/// Score the eight mask candidates on the rayon pool
pub(crate) fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", true))
}

static QUIET_ZONE: OnceLock<usize> = OnceLock::new();

/// Light border width in modules for rendered output
pub(crate) fn quiet_zone() -> usize {
    *QUIET_ZONE.get_or_init(|| parse_env_usize("QR_QUIET_ZONE", 4).clamp(0, 16))
}

static MODULE_PIXELS: OnceLock<usize> = OnceLock::new();

/// Pixels per module edge for rendered output
pub(crate) fn module_pixels() -> usize {
    *MODULE_PIXELS.get_or_init(|| parse_env_usize("QR_MODULE_PIXELS", 10).clamp(1, 64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fallbacks() {
        assert_eq!(parse_env_usize("QR_TEST_UNSET_KNOB", 7), 7);
        assert!(parse_env_bool_u8("QR_TEST_UNSET_KNOB", true));
    }

    #[test]
    fn test_knobs_within_clamps() {
        assert!(quiet_zone() <= 16);
        assert!((1..=64).contains(&module_pixels()));
    }
}
