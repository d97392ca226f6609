use leptos::*;
use leptos_router::*;

use crate::{
    components::{guard::RequireSession, session_dialog::SessionExpiredDialog},
    pages::{
        dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage,
        upload::UploadPage,
    },
    state::session::{SessionProvider, SessionWatcher},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/register", "/upload", "/dashboard"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/upload", "/dashboard"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    view! {
        <SessionProvider>
            <SessionWatcher />
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/upload" view=ProtectedUpload/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                </Routes>
            </Router>
            <SessionExpiredDialog />
        </SessionProvider>
    }
}

#[component]
fn ProtectedUpload() -> impl IntoView {
    view! { <RequireSession><UploadPage/></RequireSession> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireSession><DashboardPage/></RequireSession> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_cover_the_media_workflow() {
        assert!(ROUTE_PATHS.contains(&"/upload"));
        assert!(ROUTE_PATHS.contains(&"/dashboard"));
        assert!(ROUTE_PATHS.contains(&"/register"));
    }

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn public_and_protected_partition_the_routes() {
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        assert!(public.is_disjoint(&protected));
        assert_eq!(public.len() + protected.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
