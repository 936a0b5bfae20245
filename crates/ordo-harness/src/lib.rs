#![forbid(unsafe_code)]

//! Snapshot testing and test doubles for ordered layouts.
//!
//! - **Tree snapshots**: [`tree_to_text`] renders a subtree as an indented
//!   outline; [`assert_snapshot!`] compares it with a stored `.snap` file.
//! - **Test doubles**: [`Label`] and [`ScriptedConnection`] stand in for
//!   real components and the connection that owns them.
//! - **Fixtures**: [`uidl_from_json`] loads update descriptions written as
//!   JSON.
//!
//! # Quick Start
//!
//! ```ignore
//! use ordo_harness::assert_snapshot;
//!
//! #[test]
//! fn layout_renders() {
//!     // ... build a layout in a MemoryTree ...
//!     assert_snapshot!("layout_basic", &tree, layout.root_element());
//! }
//! ```
//!
//! # Updating Snapshots
//!
//! Run tests with `BLESS=1` to create or update snapshot files:
//!
//! ```sh
//! BLESS=1 cargo test -p ordo-harness
//! ```
//!
//! Snapshot files are stored under `tests/snapshots/` relative to the
//! crate's `CARGO_MANIFEST_DIR`.

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

use ordo_dom::{MemoryTree, NodeId, StructuralTree};

// Re-export types useful for harness users.
pub use ordo_widgets::Uidl;
pub use ordo_widgets::testing::{Label, ScriptedConnection, label_uidl, layout_uidl};

// ============================================================================
// Tree → Text Conversion
// ============================================================================

/// Render the subtree under `root` as an indented outline.
///
/// One line per element, two spaces of indent per level:
///
/// ```text
/// div.i-orderedlayout
///   div {overflow: hidden}
///     div {vertical-align: top}
///       div.label "a"
/// ```
///
/// Classes follow the tag, then `[attributes]`, `{styles}` and the quoted
/// text, each in insertion order and only when present.
pub fn tree_to_text(tree: &MemoryTree, root: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, root, 0, &mut out);
    out
}

fn write_node(tree: &MemoryTree, node: NodeId, depth: usize, out: &mut String) {
    let Some(tag) = tree.tag(node) else {
        return;
    };
    if !out.is_empty() {
        out.push('\n');
    }
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(tag);
    for class in tree.classes(node) {
        out.push('.');
        out.push_str(class);
    }
    let attrs = tree.attributes(node);
    if !attrs.is_empty() {
        let joined: Vec<String> = attrs.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let _ = write!(out, " [{}]", joined.join(" "));
    }
    let styles = tree.styles(node);
    if !styles.is_empty() {
        let joined: Vec<String> = styles.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        let _ = write!(out, " {{{}}}", joined.join("; "));
    }
    if let Some(text) = tree.text(node) {
        let _ = write!(out, " {text:?}");
    }
    for &child in tree.children(node) {
        write_node(tree, child, depth + 1, out);
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Parse an update description from JSON.
///
/// ```
/// let uidl = ordo_harness::uidl_from_json(
///     r#"{"tag": "label", "attributes": {"id": "a", "text": "A"}}"#,
/// )
/// .unwrap();
/// assert_eq!(uidl.id(), Some("a"));
/// ```
pub fn uidl_from_json(json: &str) -> serde_json::Result<Uidl> {
    serde_json::from_str(json)
}

// ============================================================================
// Outline Comparison
// ============================================================================

/// How a stored outline is compared with a freshly rendered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Every byte of each line counts.
    Exact,
    /// Whitespace at the end of a node line is ignored.
    TrimTrailing,
}

impl MatchMode {
    fn node_lines(self, outline: &str) -> Vec<&str> {
        match self {
            Self::Exact => outline.lines().collect(),
            Self::TrimTrailing => outline.lines().map(str::trim_end).collect(),
        }
    }
}

/// Diff two outlines node line by node line.
///
/// The shared head and tail are kept as context (`  `); the differing
/// middle is listed as dropped (`- `) then added (`+ `) lines. A single
/// inserted or removed element therefore shows up as one hunk instead of
/// shifting every later line. Returns an empty string for equal outlines.
pub fn diff_text(expected: &str, actual: &str) -> String {
    let old: Vec<&str> = expected.lines().collect();
    let new: Vec<&str> = actual.lines().collect();
    if old == new {
        return String::new();
    }

    let head = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
    let tail = old[head..]
        .iter()
        .rev()
        .zip(new[head..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = String::new();
    for line in &old[..head] {
        let _ = writeln!(out, "  {line}");
    }
    for line in &old[head..old.len() - tail] {
        let _ = writeln!(out, "- {line}");
    }
    for line in &new[head..new.len() - tail] {
        let _ = writeln!(out, "+ {line}");
    }
    for line in &old[old.len() - tail..] {
        let _ = writeln!(out, "  {line}");
    }
    out
}

/// Why a rendered outline was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineMismatch {
    /// No stored outline exists yet.
    Missing { path: PathBuf, actual: String },
    /// The stored outline differs; `diff` is the output of [`diff_text`].
    Differs { path: PathBuf, diff: String },
    /// The stored outline could not be read.
    Unreadable { path: PathBuf, reason: String },
}

impl std::fmt::Display for OutlineMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { path, actual } => write!(
                f,
                "no stored outline at {}; rerun with BLESS=1 to record it.\nrendered:\n{actual}",
                path.display()
            ),
            Self::Differs { path, diff } => write!(
                f,
                "layout outline changed ({}); rerun with BLESS=1 if intended.\n{diff}",
                path.display()
            ),
            Self::Unreadable { path, reason } => {
                write!(f, "cannot read outline {}: {reason}", path.display())
            }
        }
    }
}

/// Where the outline named `name` lives under a crate directory.
fn outline_path(crate_dir: &Path, name: &str) -> PathBuf {
    let mut path = crate_dir.join("tests").join("snapshots").join(name);
    path.set_extension("snap");
    path
}

fn blessing() -> bool {
    matches!(std::env::var("BLESS").as_deref(), Ok("1" | "true" | "TRUE" | "True"))
}

/// Compare `actual` with the outline stored at `path`.
pub fn check_outline(path: &Path, actual: &str, mode: MatchMode) -> Result<(), OutlineMismatch> {
    let stored = match std::fs::read_to_string(path) {
        Ok(stored) => stored,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(OutlineMismatch::Missing {
                path: path.to_path_buf(),
                actual: actual.to_string(),
            });
        }
        Err(err) => {
            return Err(OutlineMismatch::Unreadable {
                path: path.to_path_buf(),
                reason: err.to_string(),
            });
        }
    };

    let (want, got) = (mode.node_lines(&stored), mode.node_lines(actual));
    if want == got {
        return Ok(());
    }
    Err(OutlineMismatch::Differs {
        path: path.to_path_buf(),
        diff: diff_text(&want.join("\n"), &got.join("\n")),
    })
}

/// Assert that the outline of `root` matches the one stored as `name`.
///
/// With `BLESS=1` the stored outline is (re)written instead.
///
/// # Panics
///
/// When the outline is missing, differs, or cannot be read or written.
pub fn assert_tree_snapshot(
    name: &str,
    tree: &MemoryTree,
    root: NodeId,
    crate_dir: &str,
    mode: MatchMode,
) {
    let path = outline_path(Path::new(crate_dir), name);
    let actual = tree_to_text(tree, root);

    if blessing() {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).expect("create outline directory");
        }
        std::fs::write(&path, &actual).expect("record outline");
        return;
    }
    if let Err(mismatch) = check_outline(&path, &actual, mode) {
        panic!("outline '{name}': {mismatch}");
    }
}

/// Assert that a layout subtree matches its stored outline.
///
/// Outlines live under `tests/snapshots/` of the calling crate. Trailing
/// whitespace is ignored unless a [`MatchMode`] is passed.
///
/// ```ignore
/// assert_snapshot!("layout_basic", &tree, layout.root_element());
/// assert_snapshot!("layout_exact", &tree, root, MatchMode::Exact);
/// ```
#[macro_export]
macro_rules! assert_snapshot {
    ($name:expr, $tree:expr, $root:expr) => {
        $crate::assert_snapshot!($name, $tree, $root, $crate::MatchMode::TrimTrailing)
    };
    ($name:expr, $tree:expr, $root:expr, $mode:expr) => {
        $crate::assert_tree_snapshot($name, $tree, $root, env!("CARGO_MANIFEST_DIR"), $mode)
    };
}
