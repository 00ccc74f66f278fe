use waypost::provider::StaticRoutes;
use waypost::testing::{FailingProvider, SpyLauncher};
use waypost::{DispatchError, Dispatcher, ParamBag, RouteTable};

fn user_page_dispatcher(spy: &SpyLauncher) -> Dispatcher<SpyLauncher> {
    let mut table = RouteTable::new();
    table.load([("router://page-user", "UserDestination")]);
    Dispatcher::new(table, spy.clone())
}

#[test]
fn user_page_scenario() {
    let spy = SpyLauncher::new();
    let dispatcher = user_page_dispatcher(&spy);

    let receipt = dispatcher
        .resolve_and_launch(&(), "router://page-user?name=imooc&message=hello")
        .unwrap();

    assert_eq!(receipt.destination.as_str(), "UserDestination");

    let calls = spy.calls();
    assert_eq!(calls.len(), 1);
    let (destination, params) = &calls[0];
    assert_eq!(destination.as_str(), "UserDestination");
    assert_eq!(params.get("name"), Some("imooc"));
    assert_eq!(params.get("message"), Some("hello"));
    assert_eq!(params.len(), 2);
}

#[test]
fn unregistered_url_is_not_found_and_never_launches() {
    let spy = SpyLauncher::new();
    let dispatcher = user_page_dispatcher(&spy);

    let err = dispatcher
        .resolve_and_launch(&(), "router://unknown/x")
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn empty_url_is_an_invalid_argument_and_never_launches() {
    let spy = SpyLauncher::new();
    let dispatcher = user_page_dispatcher(&spy);

    let err = dispatcher.resolve_and_launch(&(), "").unwrap_err();

    assert!(matches!(err, DispatchError::InvalidArgument { .. }));
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn missing_query_yields_an_empty_bag() {
    let spy = SpyLauncher::new();
    let dispatcher = user_page_dispatcher(&spy);

    dispatcher
        .resolve_and_launch(&(), "router://page-user")
        .unwrap();

    let calls = spy.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].1.is_empty());
}

#[test]
fn single_pair_query_yields_one_parameter() {
    let spy = SpyLauncher::new();
    let dispatcher = user_page_dispatcher(&spy);

    dispatcher
        .resolve_and_launch(&(), "router://page-user?a=b")
        .unwrap();

    assert_eq!(spy.calls()[0].1, ParamBag::from_query("a=b"));
    assert_eq!(spy.calls()[0].1.get("a"), Some("b"));
}

#[test]
fn short_query_strings_skip_parameter_extraction() {
    let spy = SpyLauncher::new();
    let dispatcher = user_page_dispatcher(&spy);

    dispatcher
        .resolve_and_launch(&(), "router://page-user?x")
        .unwrap();

    assert!(spy.calls()[0].1.is_empty());
}

#[test]
fn refused_launch_is_reported_as_launch_failed() {
    let spy = SpyLauncher::new();
    spy.refuse_resolution();
    let dispatcher = user_page_dispatcher(&spy);

    let err = dispatcher
        .resolve_and_launch(&(), "router://page-user")
        .unwrap_err();

    assert!(matches!(
        err,
        DispatchError::LaunchFailed { destination, .. } if destination.as_str() == "UserDestination"
    ));
    // The attempt happened; it is not retried.
    assert_eq!(spy.call_count(), 1);
}

#[test]
fn failed_provider_degrades_to_zero_routes() {
    let spy = SpyLauncher::new();
    let dispatcher = Dispatcher::from_provider(
        &FailingProvider::new("mapping table was never generated"),
        spy.clone(),
    );

    assert!(dispatcher.table().is_empty());

    let err = dispatcher
        .resolve_and_launch(&(), "router://page-user")
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn provider_backed_dispatch_end_to_end() {
    let spy = SpyLauncher::new();
    let routes = StaticRoutes::new([
        ("router://page-user", "UserDestination"),
        ("router://watayouxiang/profile", "ProfileDestination"),
    ]);
    let dispatcher = Dispatcher::from_provider(&routes, spy.clone());

    let receipt = dispatcher
        .resolve_and_launch(&(), "router://watayouxiang/profile?name=imooc&message=hello")
        .unwrap();

    assert_eq!(receipt.destination.as_str(), "ProfileDestination");
    assert_eq!(spy.call_count(), 1);
}

#[test]
fn context_is_threaded_through_to_the_launcher() {
    struct Window {
        id: u32,
    }

    let mut table = RouteTable::new();
    table.load([("app://home", "Home")]);

    let launcher = waypost::launchers::FnLauncher::new(
        |window: &Window,
         _dest: &waypost::DestinationId,
         _params: ParamBag|
         -> Result<(), waypost::LaunchError> {
            assert_eq!(window.id, 7);
            Ok(())
        },
    );
    let dispatcher = Dispatcher::new(table, launcher);

    dispatcher
        .resolve_and_launch(&Window { id: 7 }, "app://home")
        .unwrap();
}
