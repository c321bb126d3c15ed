//! 選択ポリシーのIntegration Test

use backend_lb::config::RegistryConfig;
use backend_lb::types::Endpoint;
use backend_lb::{EndpointRegistry, RandomStrategy, RoundRobinStrategy, StrategyKind};
use std::collections::HashSet;

fn register_all(registry: &EndpointRegistry, addresses: &[&str]) {
    for address in addresses {
        registry.register(Endpoint::new(*address).unwrap()).unwrap();
    }
}

#[test]
fn test_random_selection_returns_registered_members() {
    let registry = EndpointRegistry::new(RandomStrategy::new());
    let addresses = ["http://instance1", "http://instance2", "http://instance3"];
    register_all(&registry, &addresses);
    let registered: HashSet<_> = addresses.iter().map(|a| a.to_string()).collect();

    for _ in 0..1000 {
        let selected = registry.select().unwrap();
        assert!(registered.contains(selected.address()));
    }
}

#[test]
fn test_random_selection_single_instance() {
    let registry = EndpointRegistry::new(RandomStrategy::new());
    register_all(&registry, &["http://instance1"]);
    assert_eq!(registry.select().unwrap().address(), "http://instance1");
}

#[test]
fn test_round_robin_selection_order() {
    let registry = EndpointRegistry::new(RoundRobinStrategy::new());
    register_all(&registry, &["A", "B", "C"]);

    let picked: Vec<_> = (0..4)
        .map(|_| registry.select().unwrap().into_address())
        .collect();
    assert_eq!(picked, ["A", "B", "C", "A"]);
}

#[test]
fn test_round_robin_after_registration_uses_positional_cursor() {
    let registry = EndpointRegistry::new(RoundRobinStrategy::new());
    register_all(&registry, &["A", "B"]);
    assert_eq!(registry.select().unwrap().address(), "A");

    // カーソル1、3件になったので"B"、次は"C"
    register_all(&registry, &["C"]);
    let picked: Vec<_> = (0..4)
        .map(|_| registry.select().unwrap().into_address())
        .collect();
    assert_eq!(picked, ["B", "C", "A", "B"]);
}

#[test]
fn test_registry_from_config_round_robin() {
    let config = RegistryConfig {
        max_instances: 3,
        strategy: StrategyKind::RoundRobin,
    };
    let registry = EndpointRegistry::from_config(&config).unwrap();
    register_all(&registry, &["A", "B", "C"]);
    assert!(registry.register(Endpoint::new("D").unwrap()).is_err());

    let picked: Vec<_> = (0..3)
        .map(|_| registry.select().unwrap().into_address())
        .collect();
    assert_eq!(picked, ["A", "B", "C"]);
}

#[test]
fn test_shared_strategy_across_registry_clones() {
    let registry = EndpointRegistry::with_shared_strategy(StrategyKind::RoundRobin.build(), 10);
    register_all(&registry, &["A", "B"]);
    let other = registry.clone();

    assert_eq!(registry.select().unwrap().address(), "A");
    assert_eq!(other.select().unwrap().address(), "B");
    assert_eq!(registry.select().unwrap().address(), "A");
}
