//! Tests for the abstract factory.

use rstest::rstest;

use patterns::domain::{auth_factory, AuthProvider, DomainError, GoogleAuth, Provider, YandexAuth};

#[rstest]
#[case("google", "Customer: Google Customer", "Seller: Google Seller")]
#[case("yandex", "Customer: Yandex Customer", "Seller: Yandex Seller")]
fn given_provider_name_when_creating_entities_then_named_by_provider(
    #[case] name: &str,
    #[case] customer: &str,
    #[case] seller: &str,
) {
    let auth = auth_factory(name).expect("known provider");

    assert_eq!(auth.new_customer().to_string(), customer);
    assert_eq!(auth.new_seller().to_string(), seller);
    assert_eq!(auth.kind().as_str(), name);
}

#[rstest]
#[case("github")]
#[case("")]
#[case("googl")]
fn given_unknown_provider_when_selecting_then_rejected(#[case] name: &str) {
    match auth_factory(name) {
        Err(DomainError::UnknownProvider(got)) => assert_eq!(got, name),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(auth) => panic!("unexpected provider: {}", auth.kind()),
    }
}

#[test]
fn given_concrete_factories_when_creating_then_independent_instances() {
    let mut first = GoogleAuth.new_customer();
    let second = GoogleAuth.new_customer();

    first.set_name("Renamed");

    assert_eq!(second.name, "Google Customer");
    assert_eq!(YandexAuth.kind(), Provider::Yandex);
}

#[test]
fn given_boxed_providers_when_iterating_then_dispatch_per_kind() {
    let providers: Vec<Box<dyn AuthProvider>> = Provider::ALL
        .iter()
        .map(|p| auth_factory(p.as_str()).unwrap())
        .collect();

    let sellers: Vec<String> = providers.iter().map(|p| p.new_seller().name).collect();

    assert_eq!(sellers, vec!["Google Seller", "Yandex Seller"]);
}
