//! End-to-end flows over the in-memory session store

use lms_core::session::{KEY_IS_AUTHENTICATED, KEY_USER_EMAIL, KEY_USER_TYPE};
use lms_core::{
    check_store, AuthConfig, AuthError, AuthService, GateDecision, MemorySessionStore, Role,
    Route, SessionStore, SignInForm, SignUpForm,
};

fn service() -> AuthService {
    AuthService::mock(&AuthConfig::instant())
}

#[test]
fn test_fresh_store_redirects_every_protected_page() {
    let store = MemorySessionStore::new();
    for route in Route::ALL.into_iter().filter(Route::is_protected) {
        assert_eq!(
            check_store(&store, route).redirect_target(),
            Some(Route::SignIn),
            "{route}"
        );
    }
}

#[tokio::test]
async fn test_learner_sign_in_writes_three_keys() {
    let mut store = MemorySessionStore::new();
    let landing = service()
        .sign_in(&mut store, &SignInForm::new("user@example.com", "password"))
        .await
        .unwrap();

    assert_eq!(landing, Route::Dashboard);
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(KEY_IS_AUTHENTICATED).as_deref(), Some("true"));
    assert_eq!(store.get(KEY_USER_EMAIL).as_deref(), Some("user@example.com"));
    assert_eq!(store.get(KEY_USER_TYPE).as_deref(), Some("user"));

    let decision = check_store(&store, Route::Dashboard);
    assert_eq!(decision.identity().map(|i| i.email.as_str()), Some("user@example.com"));
}

#[tokio::test]
async fn test_admin_sign_in_lands_on_console() {
    let mut store = MemorySessionStore::new();
    let landing = service()
        .sign_in(&mut store, &SignInForm::new("admin@example.com", "admin123"))
        .await
        .unwrap();

    assert_eq!(landing, Route::Admin);
    assert!(check_store(&store, Route::Admin).is_granted());
    assert_eq!(
        check_store(&store, Route::Dashboard).redirect_target(),
        Some(Route::Admin)
    );
}

#[tokio::test]
async fn test_wrong_pair_leaves_store_untouched() {
    let mut store = MemorySessionStore::with_entries([("unrelated", "kept")]);
    let err = service()
        .sign_in(&mut store, &SignInForm::new("user@example.com", "wrongpass"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(
        err.banner(),
        Some("Invalid email or password. Try the demo credentials below.")
    );
    assert_eq!(store.len(), 1);
    assert!(store.get(KEY_IS_AUTHENTICATED).is_none());
}

#[tokio::test]
async fn test_logout_then_revisit_redirects() {
    let service = service();
    let mut store = MemorySessionStore::new();
    service
        .sign_in(&mut store, &SignInForm::new("admin@example.com", "admin123"))
        .await
        .unwrap();

    assert_eq!(service.logout(&mut store), Route::SignIn);
    for key in [KEY_IS_AUTHENTICATED, KEY_USER_EMAIL, KEY_USER_TYPE] {
        assert!(store.get(key).is_none(), "{key} should be cleared");
    }
    for route in [Route::Admin, Route::AdminReports, Route::Dashboard] {
        assert!(matches!(
            check_store(&store, route),
            GateDecision::Denied { redirect: Route::SignIn, .. }
        ));
    }
}

#[tokio::test]
async fn test_learner_sees_reports_but_not_console() {
    let mut store = MemorySessionStore::new();
    service()
        .sign_in(&mut store, &SignInForm::new("user@example.com", "password"))
        .await
        .unwrap();

    for route in [Route::AdminUsers, Route::AdminCourses, Route::AdminProgress] {
        assert_eq!(check_store(&store, route).redirect_target(), Some(Route::Dashboard));
    }

    // Open product question: reports has no role requirement.
    let reports = check_store(&store, Route::AdminReports);
    assert!(reports.is_granted());
    assert_eq!(reports.identity().map(|i| i.role), Some(Role::User));
}

#[tokio::test]
async fn test_sign_up_without_first_name_fails_inline() {
    let form = SignUpForm {
        first_name: String::new(),
        last_name: "Doe".to_string(),
        email: "jane@example.com".to_string(),
        password: "secret1".to_string(),
    };

    let err = service().sign_up(&form).await.unwrap_err();
    let errors = err.field_errors().expect("inline errors");
    assert_eq!(errors.get("firstName"), Some("First name is required"));
}

#[test]
fn test_partial_record_is_not_a_session() {
    // Sign-in interrupted after the first key
    let store = MemorySessionStore::with_entries([(KEY_IS_AUTHENTICATED, "true")]);
    assert_eq!(
        check_store(&store, Route::Progress).redirect_target(),
        Some(Route::SignIn)
    );
}
