use std::cell::RefCell;
use std::collections::HashSet;

thread_local! {
    static INSTALLED: RefCell<StyleRegistry> = RefCell::new(StyleRegistry::default());
}

/// Tracks which global stylesheets have already been installed.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    installed: HashSet<&'static str>,
}

impl StyleRegistry {
    /// Returns `true` the first time an id is claimed, `false` afterwards.
    pub fn claim(&mut self, id: &'static str) -> bool {
        self.installed.insert(id)
    }

    pub fn is_installed(&self, id: &str) -> bool {
        self.installed.contains(id)
    }

    /// Runs `install` unless `id` is already installed; the id is claimed
    /// only when `install` reports success.
    pub fn install_with(&mut self, id: &'static str, install: impl FnOnce() -> bool) -> bool {
        if self.is_installed(id) {
            return true;
        }
        install() && self.claim(id)
    }
}

/// Appends `<style id=..>css</style>` to the document head once per page
/// lifetime. A tag already present in the DOM is left untouched. The id is
/// only recorded once the tag is in place, so a failed attempt is retried on
/// the next call.
pub fn ensure_stylesheet(id: &'static str, css: &str) {
    INSTALLED.with(|registry| {
        registry
            .borrow_mut()
            .install_with(id, || install_stylesheet(id, css));
    });
}

fn install_stylesheet(id: &str, css: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        web_sys::console::error_1(&"No document available for stylesheet injection".into());
        return false;
    };
    if document.get_element_by_id(id).is_some() {
        return true;
    }

    let style = match document.create_element("style") {
        Ok(style) => style,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to create style element: {:?}", e).into());
            return false;
        }
    };
    style.set_id(id);
    style.set_text_content(Some(css));

    let Some(head) = document.head() else {
        web_sys::console::error_1(&"Document has no <head>".into());
        return false;
    };
    match head.append_child(&style) {
        Ok(_) => true,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to inject stylesheet {}: {:?}", id, e).into());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_is_idempotent() {
        let mut registry = StyleRegistry::default();
        assert!(registry.claim("skeleton"));
        assert!(!registry.claim("skeleton"));
        assert!(registry.is_installed("skeleton"));
        assert!(registry.claim("other"));
    }

    #[test]
    fn failed_install_is_retried() {
        let mut registry = StyleRegistry::default();
        assert!(!registry.install_with("skeleton", || false));
        assert!(!registry.is_installed("skeleton"));

        assert!(registry.install_with("skeleton", || true));
        assert!(registry.is_installed("skeleton"));

        let mut calls = 0;
        assert!(registry.install_with("skeleton", || {
            calls += 1;
            true
        }));
        assert_eq!(calls, 0);
    }
}
