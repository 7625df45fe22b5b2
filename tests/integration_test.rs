//! Integration tests for subnet-planner
//!
//! These tests verify the complete workflow from request string to
//! finished netplan.

use std::net::Ipv4Addr;
use subnet_planner::models::{mask_to_prefix, prefix_to_mask};
use subnet_planner::processing::{analyze_fit, build_subnets, parse_host_blocks};
use subnet_planner::{plan_network, PlanError};

#[test]
fn test_full_plan_workflow() {
    // One 4000 host network with 10% reserve, four 200 host networks with
    // 150% reserve, ten peer-to-peer links.
    let blocks = parse_host_blocks("200:150x4 2:0x10 4000:10").expect("Failed to parse config");
    assert_eq!(blocks.len(), 15);
    assert_eq!(blocks[0], 13);

    let report = analyze_fit(8, &blocks).expect("Failed to analyze fit");
    assert!(report.fits, "15 blocks should fit a /8");

    let subnets = build_subnets("10.0.0.0", &blocks).expect("Failed to build subnets");
    assert_eq!(subnets.len(), 15);

    // Largest first: 2^13 addresses starting at the network address.
    assert_eq!(subnets[0].addr, Ipv4Addr::new(10, 0, 0, 0));
    assert_eq!(subnets[0].prefix, 19);
    assert_eq!(subnets[0].max_hosts, 8190);
    assert_eq!(subnets[0].next_network, Ipv4Addr::new(10, 0, 32, 0));

    // The four 9 bit blocks follow back to back.
    assert_eq!(subnets[1].addr, Ipv4Addr::new(10, 0, 32, 0));
    assert_eq!(subnets[1].prefix, 23);
    assert_eq!(subnets[1].max_hosts, 510);

    // Every subnet starts exactly where its predecessor ended.
    for pair in subnets.windows(2) {
        assert_eq!(pair[0].next_network, pair[1].addr);
    }

    // Private space annotation is replicated across the whole plan.
    for subnet in &subnets {
        assert!(subnet
            .annotation
            .as_deref()
            .expect("private space gets an annotation")
            .contains("will not be routed"));
    }
}

#[test]
fn test_plan_network_end_to_end() {
    let plan = plan_network("192.168.1.0", Some(24), "2:0 2:0").expect("Failed to plan");
    assert_eq!(plan.network, Ipv4Addr::new(192, 168, 1, 0));
    assert_eq!(plan.prefix, 24);

    assert_eq!(plan.subnets[0].to_string(), "192.168.1.0/30");
    assert_eq!(plan.subnets[0].first_host, Ipv4Addr::new(192, 168, 1, 1));
    assert_eq!(plan.subnets[0].last_host, Ipv4Addr::new(192, 168, 1, 2));
    assert_eq!(plan.subnets[0].broadcast, Ipv4Addr::new(192, 168, 1, 3));
    assert_eq!(plan.subnets[1].to_string(), "192.168.1.4/30");
}

#[test]
fn test_plan_network_rejects_unfit_request() {
    // 64 four-address blocks exactly fill a /24; a 65th overflows it.
    assert!(plan_network("192.168.1.0", Some(24), "2:0x64").is_ok());
    let err = plan_network("192.168.1.0", Some(24), "2:0x65").unwrap_err();
    match err {
        PlanError::Fit { faults } => {
            assert_eq!(faults.len(), 65);
            assert!(faults.iter().all(|f| !f.is_collision()));
        }
        other => panic!("expected fit error, got {other:?}"),
    }
}

#[test]
fn test_plan_network_policy_and_format_failures() {
    assert!(matches!(
        plan_network("127.0.0.0", Some(8), "2:0 2:0"),
        Err(PlanError::Policy(_))
    ));
    assert!(matches!(
        plan_network("10.0.0.1", Some(8), "2:0 2:0"),
        Err(PlanError::Format(_))
    ));
    assert!(matches!(
        plan_network("10.0.0.0", Some(8), "gibberish"),
        Err(PlanError::Config(_))
    ));
    assert!(matches!(
        plan_network("10.0.0.0", Some(31), "2:0 2:0"),
        Err(PlanError::Range(_))
    ));
}

#[test]
fn test_netplan_serializes_to_json() {
    let plan = plan_network("192.168.1.0", None, "2:0 2:0").unwrap();
    let json = serde_json::to_string(&plan).expect("Failed to serialize plan");
    assert!(json.contains("\"192.168.1.0\""));
    assert!(json.contains("\"prefix\":24"));
}

#[test]
fn test_prefix_mask_conversions_agree() {
    for prefix in 8..=30u8 {
        let mask = prefix_to_mask(prefix).unwrap();
        assert_eq!(mask_to_prefix(&mask).unwrap(), prefix);
    }
    assert!(prefix_to_mask(31).is_err());
    assert!(mask_to_prefix("255.0.255.0").is_err());
}
