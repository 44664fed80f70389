use std::cell::RefCell;
use std::rc::Rc;

use leptos::reactive::owner::Owner;
use models::SessionUser;

use super::*;

fn signed_in(is_admin: bool) -> AuthState {
    AuthState {
        user: Some(SessionUser {
            id: "u1".to_owned(),
            email: "ana@example.com".to_owned(),
            name: "Ana".to_owned(),
            is_admin,
        }),
        loading: false,
    }
}

fn signed_out() -> AuthState {
    AuthState { user: None, loading: false }
}

/// Navigate stand-in that records every destination.
fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str, NavigateOptions) + Clone + 'static) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    (calls, move |path: &str, _: NavigateOptions| sink.borrow_mut().push(path.to_owned()))
}

#[test]
fn driver_navigates_once_per_denial_transition() {
    let (calls, navigate) = recorder();
    let mut drive = redirect_driver(Requirement::SignedIn, navigate);

    drive(&AuthState::default());
    assert!(calls.borrow().is_empty());

    drive(&signed_out());
    drive(&signed_out());
    assert_eq!(*calls.borrow(), ["/login"]);

    drive(&signed_in(false));
    drive(&signed_out());
    assert_eq!(*calls.borrow(), ["/login", "/login"]);
}

#[test]
fn driver_never_navigates_while_loading() {
    let (calls, navigate) = recorder();
    let mut drive = redirect_driver(Requirement::Admin, navigate);
    for _ in 0..5 {
        drive(&AuthState::default());
    }
    assert!(calls.borrow().is_empty());
}

#[test]
fn admin_driver_sends_non_admins_home() {
    let (calls, navigate) = recorder();
    let mut drive = redirect_driver(Requirement::Admin, navigate);
    drive(&signed_in(false));
    drive(&signed_in(false));
    drive(&signed_in(true));
    assert_eq!(*calls.borrow(), ["/"]);
}

#[test]
fn driver_follows_signal_updates_under_an_owner() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        let (calls, navigate) = recorder();
        let mut drive = redirect_driver(Requirement::SignedIn, navigate);

        auth.with(|s| drive(s));
        auth.update(|s| s.resolve(None));
        auth.with(|s| drive(s));
        auth.update(AuthState::sign_out);
        auth.with(|s| drive(s));
        assert_eq!(*calls.borrow(), ["/login"]);

        auth.update(|s| *s = signed_in(false));
        auth.with(|s| drive(s));
        auth.update(AuthState::sign_out);
        auth.with(|s| drive(s));
        assert_eq!(calls.borrow().len(), 2);
    });
}
