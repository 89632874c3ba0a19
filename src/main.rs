/// Bundled config for builds without a .env file (web, mobile)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in bundled_pairs(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if std::env::var(key).is_err() {
            // SAFETY: We're setting env vars at startup before any threads are spawned
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

/// KEY=VALUE pairs, skipping comments and blank lines.
fn bundled_pairs(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    tracing_subscriber::fmt::init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() {
    load_dotenv();
    init_tracing();
    tracing::info!("starting Safe Home Guardian");
    dioxus::launch(safehome::ui::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_pairs_skip_comments() {
        let pairs: Vec<_> = bundled_pairs("# note\n\nA = 1\nB=two\nnot a pair\n").collect();
        assert_eq!(pairs, vec![("A", "1"), ("B", "two")]);
    }

    #[test]
    fn test_bundled_config_selects_demo() {
        assert!(bundled_pairs(BUNDLED_CONFIG).any(|pair| pair == ("GUARDIAN_ASSISTANT_MODE", "demo")));
    }
}
