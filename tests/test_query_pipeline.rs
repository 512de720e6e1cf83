//! End-to-end tests: load a database image, run join queries, inspect
//! result tables.

use quarrydb::storage::Value;
use quarrydb::{Error, Session};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Twelve students spread over three departments under two universities.
/// s04 and s09 are graduate students; d1 and d2 belong to u1, d3 to u2.
/// Ages cycle 19, 20, 21 in student order.
fn build_university_image() -> TempDir {
    let dir = TempDir::new().unwrap();

    let manifest = r#"{
        "relations": [
            {"name": "memberOf", "columns": ["literal", "literal"], "file": "memberOf.tsv"},
            {"name": "emailAddress", "columns": ["literal", "literal"], "file": "emailAddress.tsv"},
            {"name": "rdftype", "columns": ["literal", "literal"], "file": "rdftype.tsv"},
            {"name": "subOrganizationOf", "columns": ["literal", "literal"], "file": "subOrganizationOf.tsv"},
            {"name": "age", "columns": ["literal", "integer"], "file": "age.tsv"}
        ]
    }"#;
    fs::write(dir.path().join("manifest.json"), manifest).unwrap();

    let dept_of = |n: usize| match n {
        1..=6 => ("d1", "u1"),
        7..=9 => ("d2", "u1"),
        _ => ("d3", "u2"),
    };
    let grad = [4, 9];

    let mut member_of = String::new();
    let mut email = String::new();
    let mut rdftype = String::new();
    let mut age = String::new();
    for n in 1..=12 {
        let (dept, univ) = dept_of(n);
        writeln!(member_of, "s{:02}\t{}", n, dept).unwrap();
        writeln!(email, "s{:02}\ts{:02}@{}.{}.edu", n, n, dept, univ).unwrap();
        let ty = if grad.contains(&n) {
            "GraduateStudent"
        } else {
            "UndergraduateStudent"
        };
        writeln!(rdftype, "s{:02}\t{}", n, ty).unwrap();
        writeln!(age, "s{:02}\t{}", n, 19 + (n - 1) % 3).unwrap();
    }
    for dept in ["d1", "d2", "d3"] {
        writeln!(rdftype, "{}\tDepartment", dept).unwrap();
    }
    for univ in ["u1", "u2"] {
        writeln!(rdftype, "{}\tUniversity", univ).unwrap();
    }

    write_tsv(dir.path(), "memberOf.tsv", &member_of);
    write_tsv(dir.path(), "emailAddress.tsv", &email);
    write_tsv(dir.path(), "rdftype.tsv", &rdftype);
    write_tsv(
        dir.path(),
        "subOrganizationOf.tsv",
        "d1\tu1\nd2\tu1\nd3\tu2\n",
    );
    write_tsv(dir.path(), "age.tsv", &age);

    dir
}

fn write_tsv(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

const UNDERGRADS_RULE: &str = "lubm8(a,b,c) :- memberOf(a,b),emailAddress(a,c),\
    rdftype(a,d='UndergraduateStudent'),subOrganizationOf(b,e='u1'),\
    rdftype(b,f='Department').";

#[test]
fn test_filtered_join_row_count_and_cells() {
    init_tracing();
    let image = build_university_image();
    let mut session = Session::open();
    session.load(image.path()).unwrap();

    session.query(UNDERGRADS_RULE).unwrap();
    let data = session.fetch_result("lubm8").unwrap();

    // Undergraduates in departments of u1: s01, s02, s03, s05, s06 in d1
    // and s07, s08 in d2.
    assert_eq!(data.columns(), &["a", "b", "c"]);
    assert_eq!(data.len(), 7);

    let row = data.row(4).unwrap();
    assert_eq!(row[0], Value::String("s05".to_string()));
    assert_eq!(row[1], Value::String("d1".to_string()));
    assert_eq!(row[2], Value::String("s05@d1.u1.edu".to_string()));

    let last = data.row(6).unwrap();
    assert_eq!(last[2], Value::String("s08@d2.u1.edu".to_string()));

    assert!(matches!(
        data.row(7),
        Err(Error::RowIndexOutOfRange { index: 7, len: 7 })
    ));
}

#[test]
fn test_integer_filter_query() {
    init_tracing();
    let image = build_university_image();
    let mut session = Session::open();
    session.load(image.path()).unwrap();

    // Ages cycle 19, 20, 21: age 20 hits s02, s05, s08, s11
    let data = session.query("twenty(a) :- age(a,n=20).").unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data.row(0).unwrap()[0], Value::String("s02".to_string()));
    assert_eq!(data.row(3).unwrap()[0], Value::String("s11".to_string()));
}

#[test]
fn test_load_is_idempotent_across_sessions() {
    init_tracing();
    let image = build_university_image();

    let mut first = Session::open();
    first.load(image.path()).unwrap();
    first.query(UNDERGRADS_RULE).unwrap();

    let mut second = Session::open();
    second.load(image.path()).unwrap();
    second.query(UNDERGRADS_RULE).unwrap();

    let a = first.fetch_result("lubm8").unwrap();
    let b = second.fetch_result("lubm8").unwrap();
    assert_eq!(a.rows(), b.rows());
}

#[test]
fn test_repeated_execution_is_deterministic() {
    init_tracing();
    let image = build_university_image();
    let mut session = Session::open();
    session.load(image.path()).unwrap();

    let first = session.query(UNDERGRADS_RULE).unwrap().rows().to_vec();
    let second = session.query(UNDERGRADS_RULE).unwrap().rows().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_compile_failures_surface_before_execution() {
    init_tracing();
    let image = build_university_image();
    let mut session = Session::open();
    session.load(image.path()).unwrap();

    let result = session.query("out(a) :- worksFor(a,b).");
    assert!(matches!(result, Err(Error::UnknownRelation(name)) if name == "worksFor"));

    let result = session.query("out(a,z) :- memberOf(a,b).");
    assert!(matches!(result, Err(Error::UnboundHeadVariable(var)) if var == "z"));

    let result = session.query("out(a) :- .");
    assert!(matches!(result, Err(Error::EmptyRuleBody)));

    // The failures left the loaded image untouched
    assert_eq!(
        session.relation_names(),
        vec![
            "memberOf",
            "emailAddress",
            "rdftype",
            "subOrganizationOf",
            "age"
        ]
    );
}
