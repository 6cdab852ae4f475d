use crate::data_graph::DataGraph;
use crate::types::VId;
use log::info;
use std::{fs, io, path::Path};

/// Loads a data graph from a line-oriented text file.
///
/// Records are whitespace-separated, one per line:
///
/// ```text
/// v <id> <label>
/// e <source> <target> <label>
/// d <0|1>
/// ```
///
/// `d` sets the directedness of the whole graph and is honored wherever it
/// appears; lines with missing tokens contribute nothing.
pub fn load_graph<P: AsRef<Path>>(path: P) -> io::Result<DataGraph> {
    let content = fs::read_to_string(path)?;
    let graph = read_graph(&content);
    info!(
        "loaded {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads a data graph from text in the format accepted by [`load_graph`].
pub fn read_graph(content: &str) -> DataGraph {
    let mut graph = DataGraph::new();
    for line in content.lines() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                if let (Some(id), Some(label)) = (tokens.next(), tokens.next()) {
                    if let Ok(id) = id.parse::<VId>() {
                        graph.add_vertex(id, label);
                    }
                }
            }
            Some("e") => {
                if let (Some(source), Some(target), Some(label)) =
                    (tokens.next(), tokens.next(), tokens.next())
                {
                    if let (Ok(source), Ok(target)) =
                        (source.parse::<VId>(), target.parse::<VId>())
                    {
                        graph.add_edge(source, target, label);
                    }
                }
            }
            Some("d") => {
                if let Some(directed) = tokens.next() {
                    graph.set_directed(directed == "1");
                }
            }
            _ => {}
        }
    }
    graph.build_adjacency_index();
    graph
}

/// Reads the data graph stored in a SQLite3 database.
///
/// The database must have the following schema:
///
/// ```sql
/// CREATE TABLE vertices (vid INT, vlabel TEXT);
/// CREATE TABLE edges (src INT, dst INT, elabel TEXT);
/// ```
///
/// The schema carries no directedness, so it comes from the caller.  Rows
/// that fail to convert are dropped, matching the text loader's tolerance.
pub fn load_graph_sqlite(
    conn: &rusqlite::Connection,
    directed: bool,
) -> rusqlite::Result<DataGraph> {
    let mut graph = DataGraph::new();
    graph.set_directed(directed);
    let mut vertices_stmt = conn.prepare("SELECT vid, vlabel FROM vertices")?;
    for (vid, vlabel) in vertices_stmt
        .query_map([], |row| Ok((row.get::<_, VId>(0)?, row.get::<_, String>(1)?)))?
        .filter_map(|row| row.ok())
    {
        graph.add_vertex(vid, &vlabel);
    }
    let mut edges_stmt = conn.prepare("SELECT src, dst, elabel FROM edges")?;
    for (src, dst, elabel) in edges_stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, VId>(0)?,
                row.get::<_, VId>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .filter_map(|row| row.ok())
    {
        graph.add_edge(src, dst, &elabel);
    }
    graph.build_adjacency_index();
    info!(
        "loaded {} vertices, {} edges from sqlite3",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_graph() {
        let graph = read_graph("v 0 a\nv 1 b\ne 0 1 x\nd 1\n");
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.directed());
        assert_eq!(graph.neighbors(0), Some(&[1][..]));
        assert_eq!(graph.neighbors(1), None);
    }

    #[test]
    fn test_read_graph_directedness_applies_to_earlier_edges() {
        let graph = read_graph("v 0 a\nv 1 b\ne 0 1 x\nd 0\n");
        assert_eq!(graph.neighbors(1), Some(&[0][..]));
    }

    #[test]
    fn test_read_graph_skips_malformed_lines() {
        let graph = read_graph("v 1\nv 2 a\ne 2\ne 2 3\nq 1 2 3\ne 2 2 loop\n");
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.vertices()[0].id, 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_read_graph_empty() {
        let graph = read_graph("");
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.directed());
    }

    #[test]
    fn test_load_graph() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "v 0 a\nv 1 a\ne 0 1 x\n").unwrap();
        let graph = load_graph(file.path()).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.directed());
    }

    #[test]
    fn test_load_graph_missing_file() {
        assert!(load_graph("/nonexistent/graph.txt").is_err());
    }

    #[test]
    fn test_load_graph_sqlite() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE vertices (vid INT, vlabel TEXT);
             CREATE TABLE edges (src INT, dst INT, elabel TEXT);
             INSERT INTO vertices VALUES (0, 'a'), (1, 'b');
             INSERT INTO edges VALUES (0, 1, 'x');",
        )
        .unwrap();
        let graph = load_graph_sqlite(&conn, true).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.directed());
        assert!(graph.has_edge(0, 1, "x"));
    }

    #[test]
    fn test_load_graph_sqlite_missing_table() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        assert!(load_graph_sqlite(&conn, false).is_err());
    }
}
