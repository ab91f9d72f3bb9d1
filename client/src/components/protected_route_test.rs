use super::*;

#[test]
fn redirects_replace_history_entry() {
    assert!(replace_options().replace);
}

#[test]
fn redirects_keep_default_scroll_and_state() {
    let options = replace_options();
    let defaults = NavigateOptions::default();
    assert_eq!(options.resolve, defaults.resolve);
    assert_eq!(options.scroll, defaults.scroll);
}

// =============================================================
// Rendering (server-side HTML)
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use super::*;
    use crate::net::types::{Role, User};

    fn vendor(onboarded: bool) -> User {
        User {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role: Role::Vendor,
            onboarded,
            avatar_url: None,
        }
    }

    fn render_with(session: AuthState) -> String {
        let owner = Owner::new();
        owner.set();
        provide_context(RwSignal::new(session));
        view! {
            <ProtectedRoute require_role=Role::Vendor>
                <p class="vendor-secret">"inventory"</p>
            </ProtectedRoute>
        }
        .to_html()
    }

    #[test]
    fn pending_session_renders_placeholder_only() {
        let html = render_with(AuthState::loading());
        assert!(html.contains("loading-placeholder"));
        assert!(!html.contains("vendor-secret"));
    }

    #[test]
    fn stale_user_while_loading_still_renders_placeholder() {
        let html = render_with(AuthState { user: Some(vendor(true)), loading: true });
        assert!(html.contains("loading-placeholder"));
        assert!(!html.contains("vendor-secret"));
    }

    #[test]
    fn authorized_session_renders_children_unwrapped() {
        let html = render_with(AuthState::resolved(Some(vendor(true))));
        assert!(html.contains(r#"<p class="vendor-secret">inventory</p>"#));
        assert!(!html.contains("loading-placeholder"));
        assert!(!html.contains("<div"));
    }
}
