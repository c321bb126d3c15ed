//! Property-based tests using proptest

use proptest::prelude::*;
use std::collections::HashSet;

use backend_lb::types::Endpoint;
use backend_lb::{EndpointRegistry, LbError, RandomStrategy, RoundRobinStrategy};

proptest! {
    /// 空でない任意のアドレスでEndpointを作成できる
    #[test]
    fn endpoint_accepts_non_empty_address(address in ".+") {
        let endpoint = Endpoint::new(address.clone()).unwrap();
        prop_assert_eq!(endpoint.address(), address.as_str());
    }

    /// 同じアドレスから作ったEndpointは等しい
    #[test]
    fn endpoint_equality_by_address(address in "[a-z0-9:/.]{1,32}") {
        let a = Endpoint::new(address.clone()).unwrap();
        let b = Endpoint::new(address).unwrap();
        prop_assert_eq!(a, b);
    }

    /// 任意の登録列で登録数が容量を超えず、アドレスは一意
    #[test]
    fn registry_never_exceeds_capacity(
        capacity in 0usize..16,
        addresses in prop::collection::vec("[a-e]{1,2}", 0..40),
    ) {
        let registry = EndpointRegistry::with_capacity(RandomStrategy::new(), capacity);
        let mut accepted = HashSet::new();

        for address in &addresses {
            match registry.register(Endpoint::new(address.clone()).unwrap()) {
                Ok(()) => prop_assert!(accepted.insert(address.clone())),
                Err(LbError::DuplicateAddress(a)) => prop_assert!(accepted.contains(&a)),
                Err(LbError::CapacityExceeded { capacity: c }) => {
                    prop_assert_eq!(c, capacity);
                    prop_assert_eq!(accepted.len(), capacity);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
            prop_assert!(registry.len() <= capacity);
        }

        prop_assert_eq!(registry.len(), accepted.len());
        let snapshot = registry.snapshot();
        let unique: HashSet<_> = snapshot.iter().map(|e| e.address().to_string()).collect();
        prop_assert_eq!(unique.len(), snapshot.len());
    }

    /// ラウンドロビンは安定した集合を登録順に巡回する
    #[test]
    fn round_robin_cycles_registration_order(n in 1usize..10, rounds in 1usize..4) {
        let registry = EndpointRegistry::new(RoundRobinStrategy::new());
        let addresses: Vec<String> = (0..n).map(|i| format!("http://instance{i}")).collect();
        for address in &addresses {
            registry.register(Endpoint::new(address.clone()).unwrap()).unwrap();
        }

        for _ in 0..rounds {
            for expected in &addresses {
                let selected = registry.select().unwrap();
                prop_assert_eq!(selected.address(), expected.as_str());
            }
        }
    }
}
