//! Unit tests for delimited list values.

use std::time::Duration;

use rstest::rstest;

use crate::{
    AddressIssue, Durations, FlagError, FlagValue, ListenAddresses, NetworkAddresses, Strings,
    Urls,
};

#[rstest]
#[case("foo,bar,baz", &["foo", "bar", "baz"])]
#[case("single", &["single"])]
#[case("a,,b", &["a", "", "b"])]
#[case(",a,", &["", "a", ""])]
#[case("", &[""])]
fn strings_split_on_every_comma(#[case] raw: &str, #[case] expected: &[&str]) {
    let mut strings = Strings::new();
    strings.set(raw).expect("pass-through never fails");
    assert_eq!(strings.as_slice(), expected);
    assert_eq!(strings.to_string(), raw);
}

#[test]
fn consecutive_sets_append() {
    let mut strings = Strings::new();
    strings.set("foo,bar").expect("pass-through never fails");
    strings.set("baz").expect("pass-through never fails");
    assert_eq!(strings.as_slice(), ["foo", "bar", "baz"]);
    assert_eq!(strings.to_string(), "foo,bar,baz");
}

#[test]
fn addresses_round_trip() {
    let mut addrs = NetworkAddresses::new();
    addrs.set("a:4000,b:5000").expect("valid addresses");
    assert_eq!(addrs.len(), 2);
    assert_eq!(addrs[0], "a:4000");
    assert_eq!(addrs[1], "b:5000");
    assert_eq!(addrs.to_string(), "a:4000,b:5000");
    assert_eq!(addrs.to_strings(), ["a:4000", "b:5000"]);

    let again: NetworkAddresses = addrs.to_string().parse().expect("rendering re-parses");
    assert_eq!(again, addrs);
}

#[test]
fn listen_addresses_validate_like_network_addresses() {
    let mut listen = ListenAddresses::new();
    listen.set("localhost:4000,[::1]:5000").expect("valid addresses");
    assert_eq!(listen.to_strings(), ["localhost:4000", "[::1]:5000"]);
    let err = listen.set("localhost").expect_err("no port");
    assert_eq!(err.to_string(), "address localhost: missing port in address");
}

#[test]
fn invalid_address_names_the_failing_element() {
    let mut addrs = NetworkAddresses::new();
    let err = addrs.set("foo,bar").expect_err("foo has no port");
    assert_eq!(
        err,
        FlagError::InvalidAddress {
            input: "foo".into(),
            detail: AddressIssue::MissingPort,
        }
    );
    assert_eq!(err.to_string(), "address foo: missing port in address");
    assert!(addrs.is_empty());
}

#[test]
fn elements_before_a_failure_stay_appended() {
    let mut addrs = NetworkAddresses::new();
    let err = addrs.set("a:4000,foo,b:5000").expect_err("foo has no port");
    assert_eq!(err.input(), "foo");
    assert_eq!(addrs.to_strings(), ["a:4000"]);
}

#[test]
fn parse_leaves_no_partial_list_behind() {
    let parsed = "a:4000,foo".parse::<NetworkAddresses>();
    assert!(matches!(parsed, Err(FlagError::InvalidAddress { ref input, .. }) if input == "foo"));
}

#[test]
fn url_list_error_names_the_failing_element() {
    let mut urls = Urls::new();
    let err = urls.set("://foobar,://lol").expect_err("no scheme");
    assert_eq!(
        err.to_string(),
        r#"parse "://foobar": missing protocol scheme"#
    );
}

#[test]
fn urls_render_as_given() {
    let mut urls = Urls::new();
    urls.set("https://google.com,https://google.de")
        .expect("valid URLs");
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0].host_str(), Some("google.com"));
    assert_eq!(urls[1].to_string(), "https://google.de");
    assert_eq!(urls.to_string(), "https://google.com,https://google.de");
}

#[test]
fn url_list_keeps_a_trailing_empty_reference() {
    let mut urls = Urls::new();
    urls.set("https://a.com,").expect("empty reference is valid");
    assert_eq!(urls.len(), 2);
    assert!(urls[0].is_absolute());
    assert_eq!(urls[1].as_str(), "");
    assert_eq!(urls.to_string(), "https://a.com,");
}

#[test]
fn durations_convert_to_std() {
    let mut durations = Durations::new();
    durations.set("10s,250ms").expect("valid durations");
    assert_eq!(
        durations.to_durations(),
        [Duration::from_secs(10), Duration::from_millis(250)]
    );
}

#[test]
fn duration_list_renders_in_canonical_form() {
    let mut durations = Durations::new();
    durations.set("1h30m,10s").expect("valid durations");
    let rendered = durations.to_string();
    assert_eq!(rendered, "1h 30m,10s");
    let again: Durations = rendered.parse().expect("canonical form re-parses");
    assert_eq!(again, durations);
}

#[test]
fn custom_delimiter_splits_and_joins() {
    let mut strings = Strings::with_delimiter(';');
    strings.set("a,b;c").expect("pass-through never fails");
    assert_eq!(strings.delimiter(), ';');
    assert_eq!(strings.as_slice(), ["a,b", "c"]);
    assert_eq!(strings.to_string(), "a,b;c");
}

#[test]
fn collects_and_iterates() {
    let strings: Strings = ["x", "y"].into_iter().map(str::to_owned).collect();
    let joined: Vec<&str> = (&strings).into_iter().map(String::as_str).collect();
    assert_eq!(joined, ["x", "y"]);
    assert_eq!(strings.into_vec(), ["x", "y"]);
}
