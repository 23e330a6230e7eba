use jsonx_path::{
    get, has, is_child, join, parent, parse_path, remove, set, validate_path, PathError,
    MAX_ARRAY_INDEX,
};
use serde_json::{json, Value};

#[test]
fn path_get_matrix() {
    let doc = json!({
        "user": {"name": "Li", "tags": ["a", "b"], "meta": null},
        "0": "numeric key",
        "matrix": [[1, 2], [3, 4]]
    });

    let cases: [(&str, Value); 6] = [
        ("user.name", json!("Li")),
        ("user.tags.1", json!("b")),
        ("user.meta", json!(null)),
        ("0", json!("numeric key")),
        ("matrix.1.0", json!(3)),
        ("", doc.clone()),
    ];

    for (path, expected) in cases {
        assert_eq!(get(&doc, &parse_path(path)), Ok(&expected), "path {path:?}");
    }
}

#[test]
fn path_get_error_matrix() {
    let doc = json!({"user": {"tags": ["a"], "age": 3}});

    assert_eq!(
        get(&doc, &parse_path("user.email")),
        Err(PathError::NotFound {
            path: "user.email".to_string()
        })
    );
    assert_eq!(
        get(&doc, &parse_path("user.tags.4")),
        Err(PathError::IndexOutOfRange { index: 4, len: 1 })
    );
    assert!(matches!(
        get(&doc, &parse_path("user.tags.first")),
        Err(PathError::TypeMismatch { found: "array", .. })
    ));
    assert!(matches!(
        get(&doc, &parse_path("user.age.value")),
        Err(PathError::TypeMismatch { found: "number", .. })
    ));
}

#[test]
fn path_set_builds_mixed_structure() {
    let mut doc = Value::Null;
    set(&mut doc, &parse_path("servers.0.host"), json!("a.example")).unwrap();
    set(&mut doc, &parse_path("servers.2.host"), json!("c.example")).unwrap();
    set(&mut doc, &parse_path("servers.0.ports.1"), json!(8080)).unwrap();

    assert_eq!(
        doc,
        json!({
            "servers": [
                {"host": "a.example", "ports": [null, 8080]},
                null,
                {"host": "c.example"}
            ]
        })
    );
}

#[test]
fn path_set_get_remove_cycle() {
    let mut doc = json!({"keep": true});
    for path in ["a.b", "x.y.z", "list.3", "n"] {
        let segments = parse_path(path);
        set(&mut doc, &segments, json!(path)).unwrap();
        assert_eq!(get(&doc, &segments), Ok(&json!(path)));
    }

    remove(&mut doc, &parse_path("x.y.z")).unwrap();
    assert!(!has(&doc, &parse_path("x.y.z")));
    assert!(has(&doc, &parse_path("x.y")));
    assert!(has(&doc, &parse_path("keep")));
}

#[test]
fn path_set_growth_is_bounded() {
    let mut doc = json!({"list": []});
    let too_far = parse_path(&format!("list.{MAX_ARRAY_INDEX}"));
    assert_eq!(
        set(&mut doc, &too_far, json!(1)),
        Err(PathError::InvalidIndex {
            index: MAX_ARRAY_INDEX as i64
        })
    );
    assert_eq!(doc, json!({"list": []}));
}

#[test]
fn path_relationships_and_validation() {
    let p = parse_path("a.b");
    let q = parse_path("a.b.c");
    assert!(is_child(&p, &q));
    assert_eq!(parent(&q).unwrap(), p);
    assert_eq!(join("a.b", "c"), "a.b.c");

    assert!(validate_path("a.b.c").is_ok());
    assert!(validate_path("a..c").is_err());
}
