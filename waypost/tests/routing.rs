use waypost::{DestinationId, MatchResult, RoutePattern, RouteTable};

#[test]
fn every_loaded_key_matches_its_own_parse() {
    let entries = [
        ("router://page-user", "UserDestination"),
        ("router://watayouxiang/profile", "ProfileDestination"),
        ("app://settings/audio/output", "AudioOutputScreen"),
    ];

    let mut table = RouteTable::new();
    table.load(entries);

    for (key, destination) in entries {
        let pattern = RoutePattern::parse(key).unwrap();
        assert_eq!(
            table.match_route(&pattern).matched(),
            Some(&DestinationId::new(destination)),
            "key {key} should resolve to {destination}"
        );
    }
}

#[test]
fn table_loads_are_cumulative() {
    let mut table = RouteTable::new();
    table.load([("app://home", "Home")]);
    table.load([("app://about", "About")]);

    assert_eq!(table.len(), 2);
    assert!(table.match_route(&RoutePattern::parse("app://home").unwrap()).is_matched());
    assert!(table.match_route(&RoutePattern::parse("app://about").unwrap()).is_matched());
}

#[test]
fn duplicate_key_reload_is_last_write_wins() {
    let mut table = RouteTable::new();
    table.load([("app://home", "FirstHome")]);
    table.load([("app://home", "SecondHome")]);

    let pattern = RoutePattern::parse("app://home").unwrap();
    assert_eq!(
        table.match_route(&pattern).matched(),
        Some(&DestinationId::new("SecondHome"))
    );
}

#[test]
fn lookup_result_is_an_explicit_value() {
    let table = RouteTable::new();
    let pattern = RoutePattern::parse("app://anything").unwrap();

    match table.match_route(&pattern) {
        MatchResult::NotFound => {}
        MatchResult::Matched(destination) => {
            panic!("empty table matched {destination}")
        }
    }
}

#[test]
fn host_only_and_full_path_keys_are_distinct() {
    let mut table = RouteTable::new();
    table.load([
        ("router://shop", "ShopRoot"),
        ("router://shop/cart", "ShopCart"),
    ]);

    assert_eq!(
        table
            .match_route(&RoutePattern::parse("router://shop").unwrap())
            .matched(),
        Some(&DestinationId::new("ShopRoot"))
    );
    assert_eq!(
        table
            .match_route(&RoutePattern::parse("router://shop/cart").unwrap())
            .matched(),
        Some(&DestinationId::new("ShopCart"))
    );
}
