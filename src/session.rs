//! Session handle for QuarryDB
//!
//! A session is the explicit engine handle owning the relation store, the
//! literal catalog, and the most recent result table per head name. There
//! is no process-wide engine state; opening two sessions gives two fully
//! independent engines, and dropping a session tears everything down.

use crate::catalog::LiteralCatalog;
use crate::datalog::Parser;
use crate::error::{Error, Result};
use crate::executor::{JoinExecutor, Planner, ResultTable};
use crate::storage::{load_image, RelationStore};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Engine session
#[derive(Debug, Default)]
pub struct Session {
    /// Interned literals, shared by loader, planner, and materializer
    literals: LiteralCatalog,
    /// Loaded relations
    store: RelationStore,
    /// Most recent result per head name
    results: HashMap<String, ResultTable>,
}

impl Session {
    /// Open a new session with no loaded image
    pub fn open() -> Self {
        Self {
            literals: LiteralCatalog::new(),
            store: RelationStore::new(),
            results: HashMap::new(),
        }
    }

    /// Load a database image, replacing any previously loaded one
    ///
    /// The image is loaded into a fresh store and catalog which are
    /// swapped in only on success, so a failed load leaves the session
    /// exactly as it was. A successful load clears cached results, which
    /// described the previous image.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let mut literals = LiteralCatalog::new();
        let store = load_image(path, &mut literals)?;

        self.literals = literals;
        self.store = store;
        self.results.clear();
        Ok(())
    }

    /// Compile and execute a rule, storing and returning its result table
    ///
    /// The table is stored under the rule's head name; a later query with
    /// the same head name overwrites it.
    pub fn query(&mut self, rule_text: &str) -> Result<&ResultTable> {
        let rule = Parser::new(rule_text)?.parse()?;
        let plan = Planner::new(&self.store, &mut self.literals).compile(&rule)?;
        let rows = JoinExecutor::new(&self.store).execute(&plan)?;
        let table = ResultTable::from_rows(plan.output_columns.clone(), rows, &self.literals)?;

        info!(head = %plan.head_name, rows = table.len(), "query executed");

        let name = plan.head_name;
        self.results.insert(name.clone(), table);
        self.fetch_result(&name)
    }

    /// Fetch the most recent result for a head name
    pub fn fetch_result(&self, name: &str) -> Result<&ResultTable> {
        self.results
            .get(name)
            .ok_or_else(|| Error::UnknownQuery(name.to_string()))
    }

    /// List loaded relation names in load order
    pub fn relation_names(&self) -> Vec<&str> {
        self.store.relation_names()
    }

    /// Access the loaded relation store
    pub fn store(&self) -> &RelationStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Value;
    use std::fs::File;
    use std::io::Write;
    use std::path::Path as StdPath;
    use tempfile::TempDir;

    fn write_file(dir: &StdPath, name: &str, contents: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    fn small_image() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "manifest.json",
            r#"{
                "relations": [
                    {"name": "memberOf", "columns": ["literal", "literal"], "file": "memberOf.tsv"},
                    {"name": "rdftype", "columns": ["literal", "literal"], "file": "rdftype.tsv"}
                ]
            }"#,
        );
        write_file(dir.path(), "memberOf.tsv", "s1\td1\ns2\td1\ns3\td2\n");
        write_file(
            dir.path(),
            "rdftype.tsv",
            "s1\tStudent\ns2\tProfessor\ns3\tStudent\n",
        );
        dir
    }

    #[test]
    fn test_load_query_fetch() {
        let dir = small_image();
        let mut session = Session::open();
        session.load(dir.path()).unwrap();

        let table = session
            .query("out(a,b) :- memberOf(a,b),rdftype(a,t='Student').")
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.row(0).unwrap(),
            &[Value::String("s1".to_string()), Value::String("d1".to_string())]
        );

        let fetched = session.fetch_result("out").unwrap();
        assert_eq!(fetched.len(), 2);
    }

    #[test]
    fn test_fetch_unknown_query() {
        let session = Session::open();
        let result = session.fetch_result("lubm8");
        assert!(matches!(result, Err(Error::UnknownQuery(name)) if name == "lubm8"));
    }

    #[test]
    fn test_failed_query_stores_nothing() {
        let dir = small_image();
        let mut session = Session::open();
        session.load(dir.path()).unwrap();

        let result = session.query("out(a) :- nope(a).");
        assert!(matches!(result, Err(Error::UnknownRelation(_))));
        // The store is untouched and no result was recorded
        assert_eq!(session.relation_names(), vec!["memberOf", "rdftype"]);
        assert!(matches!(
            session.fetch_result("out"),
            Err(Error::UnknownQuery(_))
        ));
    }

    #[test]
    fn test_failed_load_preserves_state() {
        let dir = small_image();
        let mut session = Session::open();
        session.load(dir.path()).unwrap();
        session.query("out(a,b) :- memberOf(a,b).").unwrap();

        let result = session.load("/no/such/image");
        assert!(matches!(result, Err(Error::ImageNotFound(_))));

        // Prior relations and results survive the failed load
        assert_eq!(session.relation_names(), vec!["memberOf", "rdftype"]);
        assert_eq!(session.fetch_result("out").unwrap().len(), 3);
    }

    #[test]
    fn test_reload_clears_results() {
        let dir = small_image();
        let mut session = Session::open();
        session.load(dir.path()).unwrap();
        session.query("out(a,b) :- memberOf(a,b).").unwrap();

        session.load(dir.path()).unwrap();
        assert!(matches!(
            session.fetch_result("out"),
            Err(Error::UnknownQuery(_))
        ));
    }

    #[test]
    fn test_same_head_name_overwrites() {
        let dir = small_image();
        let mut session = Session::open();
        session.load(dir.path()).unwrap();

        session.query("out(a,b) :- memberOf(a,b).").unwrap();
        assert_eq!(session.fetch_result("out").unwrap().len(), 3);

        session
            .query("out(a) :- rdftype(a,t='Professor').")
            .unwrap();
        assert_eq!(session.fetch_result("out").unwrap().len(), 1);
    }
}
