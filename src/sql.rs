//! Query template table
//!
//! The fixed set of statements issued against the store. The schema is
//! consumed, not owned: `vertices (id, <attrs>)` and
//! `edges (src_id, dst_id, <attrs>)`. Only SELECT, COUNT, and SUM ever
//! run.
//!
//! Keys and values bind as `$n` parameters. The one piece of text
//! interpolation, the `<attrs>` column list, is restricted to the
//! attribute names declared at graph construction time; it never
//! carries per-call user input.

/// Placeholder replaced by the declared attribute column list.
pub const ATTRS_SLOT: &str = "<attrs>";

pub const COUNT_NODES: &str = "SELECT COUNT(1) FROM vertices";

pub const COUNT_EDGES: &str = "SELECT COUNT(1) FROM edges";

/// Count of distinct vertices participating in at least one edge.
pub const COUNT_ADJ: &str = "SELECT COUNT(1) FROM (SELECT DISTINCT src_id FROM edges \
     UNION SELECT DISTINCT dst_id FROM edges) AS t1";

pub const NODE_EXISTS: &str = "SELECT COUNT(1) FROM vertices WHERE id = $1";

/// Undirected existence check, both endpoint orders.
pub const EDGE_EXISTS: &str = "SELECT COUNT(1) FROM edges \
     WHERE (src_id = $1 AND dst_id = $2) OR (src_id = $2 AND dst_id = $1)";

/// Directed existence check, exact endpoint order.
pub const EDGE_EXISTS_DIRECTED: &str =
    "SELECT COUNT(1) FROM edges WHERE src_id = $1 AND dst_id = $2";

/// Whether a vertex participates in any edge.
pub const ADJ_EXISTS: &str = "SELECT COUNT(1) FROM edges WHERE src_id = $1 OR dst_id = $1";

/// Sum of one declared numeric edge attribute. Cast so the result
/// comes back as float8 regardless of the column's integer width.
pub const SUM_EDGE_ATTR: &str = "SELECT SUM((<attrs>)::double precision) FROM edges";

pub const GET_NODE: &str = "SELECT <attrs> FROM vertices WHERE id = $1";

/// Undirected edge attribute fetch, both endpoint orders.
pub const GET_EDGE: &str = "SELECT <attrs> FROM edges \
     WHERE (src_id = $1 AND dst_id = $2) OR (src_id = $2 AND dst_id = $1)";

/// Directed edge attribute fetch, exact endpoint order.
pub const GET_EDGE_DIRECTED: &str =
    "SELECT <attrs> FROM edges WHERE src_id = $1 AND dst_id = $2";

/// Undirected adjacency of one vertex: the union of both edge
/// orientations, neighbor key first.
pub const ADJACENCY: &str = "SELECT dst_id, <attrs> FROM edges WHERE src_id = $1 \
     UNION SELECT src_id, <attrs> FROM edges WHERE dst_id = $1";

/// All vertex keys in deterministic order.
pub const ITER_NODES: &str = "SELECT id FROM vertices ORDER BY id";

/// All vertices participating in at least one edge, in deterministic order.
pub const ITER_ADJ: &str = "SELECT t1.id FROM (SELECT DISTINCT src_id AS id FROM edges \
     UNION SELECT DISTINCT dst_id AS id FROM edges) AS t1 ORDER BY id";

/// Out-neighbors of a vertex, ordered by destination key.
pub const SUCCESSORS: &str =
    "SELECT dst_id, <attrs> FROM edges WHERE src_id = $1 ORDER BY dst_id";

/// In-neighbors of a vertex, ordered by source key.
pub const PREDECESSORS: &str =
    "SELECT src_id, <attrs> FROM edges WHERE dst_id = $1 ORDER BY src_id";

/// Interpolates the declared attribute list into a template. Callers
/// only pass names from `GraphConfig::node_attrs` / `edge_attrs`.
pub(crate) fn fill_attrs(template: &str, attrs: &[String]) -> String {
    template.replace(ATTRS_SLOT, &attrs.join(", "))
}
