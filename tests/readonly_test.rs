//! Offline contract tests: everything provable without a live store.
//!
//! These views never reach a store (nothing listens on port 1), which
//! is the point: construction, derivation, role relabeling, and
//! mutation rejection must all work without I/O.

use relgraph::{
    AttrMap, DiGraph, Direction, Graph, GraphConfig, GraphError, ImmutableGraph, NodeKey,
    Orientation,
};

fn offline_config() -> GraphConfig {
    GraphConfig::new("graph")
        .with_host("127.0.0.1")
        .with_port(1)
        .with_user("gpadmin")
        .with_node_attrs(["weight"])
        .with_edge_attrs(["weight"])
        .with_metadata("name", "test graph")
}

#[test]
fn test_construction_and_derivation_perform_no_io() {
    let g = Graph::new(offline_config());
    assert!(!g.session().is_connected());

    let d = g.to_directed();
    let u = d.to_undirected();
    let r = d.reverse();
    assert!(!d.session().is_connected());
    assert!(!u.session().is_connected());
    assert!(!r.session().is_connected());
}

#[test]
fn test_derivations_carry_configuration_and_metadata() {
    let g = Graph::new(offline_config());
    let d = g.to_directed();
    let r = d.reverse();

    for config in [g.config(), d.config(), r.config()] {
        assert_eq!(config.dbname, "graph");
        assert_eq!(config.edge_attrs, vec!["weight"]);
    }
    assert_eq!(
        r.metadata().get("name"),
        Some(&relgraph::AttrValue::from("test graph"))
    );
}

#[test]
fn test_reverse_is_a_pure_role_relabeling() {
    let d = DiGraph::new(offline_config());
    assert_eq!(d.orientation(), Orientation::Forward);
    assert_eq!(d.succ_dao().direction(), Direction::Outgoing);
    assert_eq!(d.pred_dao().direction(), Direction::Incoming);

    let r = d.reverse();
    assert_eq!(r.orientation(), Orientation::Reversed);
    assert_eq!(r.succ_dao().direction(), Direction::Incoming);
    assert_eq!(r.pred_dao().direction(), Direction::Outgoing);

    let rr = r.reverse();
    assert_eq!(rr.orientation(), d.orientation());
    assert_eq!(rr.succ_dao().direction(), d.succ_dao().direction());
    assert_eq!(rr.pred_dao().direction(), d.pred_dao().direction());
}

#[test]
fn test_mutation_entry_points_reject_on_every_view() {
    let g = Graph::new(offline_config());
    let d = g.to_directed();
    let r = d.reverse();

    let views: [&dyn ImmutableGraph; 3] = [&g, &d, &r];
    for view in views {
        assert!(matches!(
            view.add_node(NodeKey::from(1), AttrMap::new()),
            Err(GraphError::NotPermitted)
        ));
        assert!(matches!(
            view.add_edge(NodeKey::from(1), NodeKey::from(2), AttrMap::new()),
            Err(GraphError::NotPermitted)
        ));
        assert!(matches!(
            view.remove_node(&NodeKey::from(1)),
            Err(GraphError::NotPermitted)
        ));
        assert!(matches!(
            view.remove_edge(&NodeKey::from(1), &NodeKey::from(2)),
            Err(GraphError::NotPermitted)
        ));
        assert!(matches!(
            view.update(Vec::new(), Vec::new()),
            Err(GraphError::NotPermitted)
        ));
        assert!(matches!(view.clear(), Err(GraphError::NotPermitted)));
    }
}

#[test]
fn test_endpoint_kind_mismatch_beats_connectivity() {
    // The store is unreachable, so any query would be a Connectivity
    // error; TypeMismatch proves the endpoint check runs first.
    let g = Graph::new(offline_config());
    let err = g
        .has_edge(&NodeKey::from(1), &NodeKey::from("one"))
        .unwrap_err();
    assert!(matches!(
        err,
        GraphError::TypeMismatch {
            left: "integer",
            right: "text",
        }
    ));
}

#[test]
fn test_unreachable_store_surfaces_at_first_operation() {
    let g = Graph::new(offline_config());
    let err = g.number_of_nodes().unwrap_err();
    assert!(matches!(err, GraphError::Connectivity(_)));
}

#[test]
fn test_error_messages_are_stable() {
    assert_eq!(
        GraphError::NotPermitted.to_string(),
        "modifying graph is not permitted"
    );
    assert_eq!(
        GraphError::NotFound("9".to_string()).to_string(),
        "key not found: 9"
    );
}
