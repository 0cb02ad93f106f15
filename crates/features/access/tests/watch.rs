use campus_access::{AccessGuard, GuardState, RedirectPolicy};
use campus_domain::role::RoleSet;
use campus_domain::session::CurrentUser;
use campus_kernel::security::session::SessionStore;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::{sleep, timeout};

#[tokio::test]
async fn session_changes_re_run_the_guard() {
    let store = SessionStore::new();
    let rx = store.open("s-1");
    let visited = Mutex::new(Vec::<String>::new());
    let navigator = |to: &str| visited.lock().expect("lock").push(to.to_owned());

    let guard = AccessGuard::new(RoleSet::FACULTY, RedirectPolicy::default());

    let driver = async {
        sleep(Duration::from_millis(10)).await;
        store.resolve("s-1", Some(CurrentUser::new("f-1", "Faculty"))).expect("open");
        sleep(Duration::from_millis(10)).await;
        store.resolve("s-1", Some(CurrentUser::new("s-9", "student"))).expect("open");
        sleep(Duration::from_millis(10)).await;
        store.sign_out("s-1").expect("open");
        sleep(Duration::from_millis(10)).await;
        store.close("s-1");
    };

    let (final_state, ()) =
        timeout(Duration::from_secs(2), async { tokio::join!(guard.watch(rx, &navigator), driver) })
            .await
            .expect("guard should detach when the session closes");

    assert_eq!(final_state, GuardState::Unauthenticated);
    assert_eq!(*visited.lock().expect("lock"), vec!["/student".to_owned(), "/signin".to_owned()]);
}

#[tokio::test]
async fn pending_session_never_navigates() {
    let store = SessionStore::new();
    let rx = store.open("s-2");
    let visited = Mutex::new(Vec::<String>::new());
    let navigator = |to: &str| visited.lock().expect("lock").push(to.to_owned());

    let guard = AccessGuard::new(RoleSet::ALL, RedirectPolicy::default());
    let driver = async {
        sleep(Duration::from_millis(10)).await;
        store.close("s-2");
    };

    let (state, ()) = tokio::join!(guard.watch(rx, &navigator), driver);
    assert_eq!(state, GuardState::Loading);
    assert!(visited.lock().expect("lock").is_empty());
}
