//! Palette store: the published theme the rendering layer reads.
//!
//! The store holds exactly one [`Palette`]. [`PaletteStore::publish`]
//! overwrites it (last writer wins, no history); [`PaletteStore::current`]
//! returns a copy.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use tracing::{info, trace};

use crate::theme::Palette;
use crate::variables::StyleVariables;

/// Thread-safe holder of the currently published palette.
///
/// Clones share the same slot.
#[derive(Debug, Clone)]
pub struct PaletteStore {
    current: Arc<RwLock<Palette>>,
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl PaletteStore {
    /// Create a store holding `initial`.
    pub fn new(initial: Palette) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
        }
    }

    /// Returns the current palette.
    pub fn current(&self) -> Palette {
        let palette = *self.current.read().unwrap_or_else(PoisonError::into_inner);
        trace!(palette.primary = %palette.primary, "Palette read");
        palette
    }

    /// Named style values for the current palette.
    pub fn variables(&self) -> StyleVariables {
        StyleVariables::from_palette(&self.current())
    }

    /// Replace the published palette.
    pub fn publish(&self, palette: Palette) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = palette;

        info!(
            palette.primary = %palette.primary,
            palette.secondary = %palette.secondary,
            palette.highlight = %palette.highlight,
            "Palette published"
        );
    }
}

static GLOBAL_PALETTE: LazyLock<PaletteStore> = LazyLock::new(PaletteStore::default);

/// Returns the process-wide palette store.
pub fn global_palette() -> &'static PaletteStore {
    &GLOBAL_PALETTE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;

    fn palette(a: &str, b: &str) -> Palette {
        Palette::from_gradient(
            HexColor::parse(a).expect("valid"),
            HexColor::parse(b).expect("valid"),
        )
    }

    #[test]
    fn test_store_starts_with_default() {
        let store = PaletteStore::default();
        assert_eq!(store.current(), Palette::default());
    }

    #[test]
    fn test_publish_overwrites() {
        let store = PaletteStore::default();
        let next = palette("#ff5733", "#2e86ab");
        store.publish(next);
        assert_eq!(store.current(), next);

        let last = palette("#000000", "#ffffff");
        store.publish(last);
        assert_eq!(store.current(), last);
    }

    #[test]
    fn test_clones_share_state() {
        let store = PaletteStore::default();
        let other = store.clone();
        let next = palette("#ff5733", "#2e86ab");
        other.publish(next);
        assert_eq!(store.current(), next);
    }

    #[test]
    fn test_store_thread_safe() {
        use std::thread;

        let store = Arc::new(PaletteStore::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    if i % 2 == 0 {
                        store.publish(palette("#ff5733", "#2e86ab"));
                    } else {
                        store.publish(Palette::default());
                    }
                    let _current = store.current();
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread join");
        }

        let last = store.current();
        assert!(last == Palette::default() || last == palette("#ff5733", "#2e86ab"));
    }

    #[test]
    fn test_global_palette_is_shared() {
        assert!(std::ptr::eq(global_palette(), global_palette()));
    }

    #[test]
    fn test_variables_follow_current() {
        let store = PaletteStore::default();
        store.publish(palette("#ff5733", "#2e86ab"));
        let vars = store.variables();
        assert_eq!(vars.get("gradient-color-1"), Some("#ff5733"));
    }
}
